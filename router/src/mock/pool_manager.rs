//! Pool manager with flash accounting and a scripted swap outcome.
//!
//! `swap` reports whatever delta was set with `set_swap_delta` and records it
//! as debt, `settle` and `take` pay it off, and `unlock` reverts unless every
//! currency touched by the swap is settled once the callback returns.
use alloc::vec::Vec;

use alloy_primitives::{Address, I256, U256};
use alloy_sol_types::{sol_data, SolCall, SolType};
use stylus_sdk::{
    abi::Bytes,
    call::RawCall,
    prelude::*,
    storage::{
        StorageAddress, StorageBool, StorageI256, StorageMap, StorageU256,
    },
};
use swap_bridge_stylus::uniswap::v4::{
    delta::{amount0, amount1},
    BalanceDelta, IUnlockCallback, PoolKey, SwapParams,
};

use super::IErc20;
use crate::call::ReentrantCall;

pub(crate) const SWAP_FAILED: &[u8] = b"swap failed";

#[storage]
pub(crate) struct PoolManagerMock {
    next_delta: StorageI256,
    fail_swaps: StorageBool,
    unlocked: StorageBool,
    currency0: StorageAddress,
    currency1: StorageAddress,
    currency_deltas: StorageMap<Address, StorageI256>,
    synced_currency: StorageAddress,
    synced_reserves: StorageU256,
    pub(crate) swaps: StorageU256,
}

unsafe impl TopLevelStorage for PoolManagerMock {}

#[public]
impl PoolManagerMock {
    fn set_swap_delta(&mut self, delta: BalanceDelta) {
        self.next_delta.set(delta);
    }

    fn set_fail_swaps(&mut self, fail: bool) {
        self.fail_swaps.set(fail);
    }

    fn unlock(&mut self, data: Bytes) -> Result<Bytes, Vec<u8>> {
        let caller = self.vm().msg_sender();
        self.unlocked.set(true);

        let call =
            IUnlockCallback::unlockCallbackCall { data: data.to_vec().into() };
        let result = RawCall::new().call_reentrant(caller, &call.abi_encode())?;
        let result = <sol_data::Bytes as SolType>::abi_decode(&result, true)
            .map_err(|_| b"invalid callback result".to_vec())?;

        for currency in [self.currency0.get(), self.currency1.get()] {
            if !self.currency_deltas.get(currency).is_zero() {
                return Err(b"currency not settled".to_vec());
            }
        }

        self.unlocked.set(false);
        Ok(result.to_vec().into())
    }

    fn swap(
        &mut self,
        key: PoolKey,
        _params: SwapParams,
        _hook_data: Bytes,
    ) -> Result<BalanceDelta, Vec<u8>> {
        if !self.unlocked.get() {
            return Err(b"manager locked".to_vec());
        }
        if self.fail_swaps.get() {
            return Err(SWAP_FAILED.to_vec());
        }

        let delta = self.next_delta.get();
        self.currency0.set(key.currency0);
        self.currency1.set(key.currency1);
        self.account(key.currency0, I256::try_from(amount0(delta)).unwrap());
        self.account(key.currency1, I256::try_from(amount1(delta)).unwrap());

        let swaps = self.swaps.get();
        self.swaps.set(swaps + U256::from(1));
        Ok(delta)
    }

    fn sync(&mut self, currency: Address) -> Result<(), Vec<u8>> {
        let reserves = self.token_balance(currency)?;
        self.synced_currency.set(currency);
        self.synced_reserves.set(reserves);
        Ok(())
    }

    #[payable]
    fn settle(&mut self) -> Result<U256, Vec<u8>> {
        let currency = self.synced_currency.get();
        let paid = if currency.is_zero() {
            self.vm().msg_value()
        } else {
            self.token_balance(currency)? - self.synced_reserves.get()
        };

        self.synced_currency.set(Address::ZERO);
        self.account(currency, I256::from_raw(paid));
        Ok(paid)
    }

    fn take(
        &mut self,
        currency: Address,
        to: Address,
        amount: U256,
    ) -> Result<(), Vec<u8>> {
        self.account(currency, -I256::from_raw(amount));

        if currency.is_zero() {
            RawCall::new_with_value(amount).call_reentrant(to, &[])?;
        } else {
            let call = IErc20::transferCall { to, value: amount };
            RawCall::new().call_reentrant(currency, &call.abi_encode())?;
        }

        Ok(())
    }
}

impl PoolManagerMock {
    /// Adds `delta` to what the pool owes the unlocker in `currency`.
    fn account(&mut self, currency: Address, delta: I256) {
        let current = self.currency_deltas.get(currency);
        self.currency_deltas.setter(currency).set(current + delta);
    }

    fn token_balance(&self, token: Address) -> Result<U256, Vec<u8>> {
        let this = self.vm().contract_address();
        let call = IErc20::balanceOfCall { account: this };
        let result = RawCall::new().call_reentrant(token, &call.abi_encode())?;
        Ok(U256::from_be_slice(&result))
    }
}
