//! Standard bridge that keeps deposits and remembers the last one.
use alloc::vec::Vec;

use alloy_primitives::{Address, U256};
use alloy_sol_types::SolCall;
use stylus_sdk::{
    abi::Bytes,
    call::RawCall,
    prelude::*,
    storage::{StorageAddress, StorageBool, StorageU256},
};

use super::IErc20;
use crate::call::ReentrantCall;

pub(crate) const DEPOSIT_FAILED: &[u8] = b"deposit failed";

#[storage]
pub(crate) struct BridgeMock {
    fail_deposits: StorageBool,
    pub(crate) deposits: StorageU256,
    pub(crate) last_local_token: StorageAddress,
    pub(crate) last_remote_token: StorageAddress,
    pub(crate) last_to: StorageAddress,
    pub(crate) last_amount: StorageU256,
    pub(crate) last_min_gas_limit: StorageU256,
}

unsafe impl TopLevelStorage for BridgeMock {}

#[public]
impl BridgeMock {
    fn set_fail_deposits(&mut self, fail: bool) {
        self.fail_deposits.set(fail);
    }

    #[payable]
    #[selector(name = "depositETHTo")]
    fn deposit_eth_to(
        &mut self,
        to: Address,
        min_gas_limit: u32,
        _extra_data: Bytes,
    ) -> Result<(), Vec<u8>> {
        let amount = self.vm().msg_value();
        self.record(Address::ZERO, Address::ZERO, to, amount, min_gas_limit)
    }

    #[selector(name = "depositERC20To")]
    fn deposit_erc20_to(
        &mut self,
        local_token: Address,
        remote_token: Address,
        to: Address,
        amount: U256,
        min_gas_limit: u32,
        _extra_data: Bytes,
    ) -> Result<(), Vec<u8>> {
        let from = self.vm().msg_sender();
        let this = self.vm().contract_address();
        let call = IErc20::transferFromCall { from, to: this, value: amount };
        RawCall::new().call_reentrant(local_token, &call.abi_encode())?;

        self.record(local_token, remote_token, to, amount, min_gas_limit)
    }
}

impl BridgeMock {
    fn record(
        &mut self,
        local_token: Address,
        remote_token: Address,
        to: Address,
        amount: U256,
        min_gas_limit: u32,
    ) -> Result<(), Vec<u8>> {
        if self.fail_deposits.get() {
            return Err(DEPOSIT_FAILED.to_vec());
        }

        let deposits = self.deposits.get();
        self.deposits.set(deposits + U256::from(1));
        self.last_local_token.set(local_token);
        self.last_remote_token.set(remote_token);
        self.last_to.set(to);
        self.last_amount.set(amount);
        self.last_min_gas_limit.set(U256::from(min_gas_limit));
        Ok(())
    }
}
