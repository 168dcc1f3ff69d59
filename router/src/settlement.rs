//! Swap execution and settlement with the pool manager.
//!
//! The pool manager only swaps while unlocked. The router unlocks it with the
//! [`CallbackData`] of the swap, swaps from within
//! [`SwapBridgeRouter::unlock_callback`] and settles every currency delta
//! before handing control back:
//!
//! - owed native currency is paid out of the value attached to `swap`,
//! - owed tokens are pulled from the caller straight into the pool manager,
//! - currencies owed by the pool are taken to the caller, or to the router
//!   when they are about to be bridged.
use alloc::vec::Vec;

use alloy_primitives::{Address, Bytes, U256};
use alloy_sol_types::{sol_data, SolCall, SolType, SolValue};
use openzeppelin_stylus::token::erc20::utils::safe_erc20::ISafeErc20;
use stylus_sdk::{call::RawCall, prelude::*};
use swap_bridge_stylus::uniswap::v4::{
    BalanceDelta, Currency, Direction, IPoolManager, PoolKey, SwapDeltas,
    SwapParams,
};

use crate::{
    call::ReentrantCall, Error, RevertData, SwapBridgeInsufficientValue,
    SwapBridgeInvalidReturnData, SwapBridgeRefundFailed, SwapBridgeRouter,
    SwapSettings,
};

/// ABI layout of [`CallbackData`].
type EncodedCallbackData =
    (Address, U256, PoolKey, SwapParams, SwapSettings, Bytes);

/// Payload handed to the pool manager and received back in `unlockCallback`.
#[derive(Debug)]
pub(crate) struct CallbackData {
    /// Account that called `swap`.
    pub(crate) sender: Address,
    /// Value attached to `swap`, the most native currency the swap may
    /// spend.
    pub(crate) value: U256,
    /// Key of the pool to swap on.
    pub(crate) key: PoolKey,
    /// Swap parameters, passed to the pool manager as is.
    pub(crate) params: SwapParams,
    /// Post-swap instructions.
    pub(crate) settings: SwapSettings,
    /// Data for the pool's hooks.
    pub(crate) hook_data: Bytes,
}

impl CallbackData {
    pub(crate) fn abi_encode(&self) -> Vec<u8> {
        let data: EncodedCallbackData = (
            self.sender,
            self.value,
            self.key.clone(),
            self.params.clone(),
            self.settings.clone(),
            self.hook_data.clone(),
        );
        data.abi_encode()
    }

    pub(crate) fn abi_decode(data: &[u8]) -> Result<Self, alloy_sol_types::Error> {
        let (sender, value, key, params, settings, hook_data) =
            <EncodedCallbackData as SolValue>::abi_decode(data, true)?;
        Ok(Self { sender, value, key, params, settings, hook_data })
    }
}

impl SwapBridgeRouter {
    /// Unlocks the pool manager, which calls back
    /// [`SwapBridgeRouter::unlock_callback`] with `data`, and returns the
    /// balance delta of the swap.
    pub(crate) fn unlock_and_swap(
        &mut self,
        data: &CallbackData,
    ) -> Result<BalanceDelta, Error> {
        let call = IPoolManager::unlockCall { data: data.abi_encode().into() };
        let result = self.call_pool_manager(U256::ZERO, &call)?;

        let result = <sol_data::Bytes as SolType>::abi_decode(&result, true)
            .map_err(|_| self.invalid_return_data())?;
        self.decode_delta(&result)
    }

    /// Swaps as described by `data` and settles both currencies with the
    /// pool manager. Must run while the pool manager is unlocked.
    pub(crate) fn execute_swap(
        &mut self,
        data: &CallbackData,
    ) -> Result<BalanceDelta, Error> {
        let call = IPoolManager::swapCall {
            key: data.key.clone(),
            params: data.params.clone(),
            hookData: data.hook_data.clone(),
        };
        let result = self.call_pool_manager(U256::ZERO, &call)?;
        let delta = self.decode_delta(&result)?;

        let deltas = SwapDeltas::new(&data.key, data.params.zeroForOne, delta);
        let bridged =
            data.settings.bridgeTokens.then(|| deltas.output().currency);
        let this = self.vm().contract_address();

        for side in deltas.sides() {
            if side.is_zero() {
                continue;
            }

            match side.direction {
                Direction::Owing => {
                    self.settle(side.currency, data, side.amount)?;
                }
                Direction::Owed => {
                    let to = if bridged == Some(side.currency) {
                        this
                    } else {
                        data.sender
                    };
                    self.take(side.currency, to, side.amount)?;
                }
            }
        }

        Ok(delta)
    }

    /// Pays `amount` of `currency` owed to the pool manager.
    ///
    /// The native currency is paid out of the value attached to the swap,
    /// tokens are transferred from the swap's sender.
    ///
    /// # Errors
    ///
    /// * [`Error::InsufficientValue`] - If `amount` of native currency
    ///   exceeds the attached value.
    fn settle(
        &mut self,
        currency: Currency,
        data: &CallbackData,
        amount: u128,
    ) -> Result<(), Error> {
        let amount = U256::from(amount);

        if currency.is_zero() {
            if amount > data.value {
                return Err(Error::InsufficientValue(
                    SwapBridgeInsufficientValue {
                        required: amount,
                        provided: data.value,
                    },
                ));
            }
            self.call_pool_manager(amount, &IPoolManager::settleCall {})?;
            return Ok(());
        }

        self.call_pool_manager(
            U256::ZERO,
            &IPoolManager::syncCall { currency },
        )?;
        let pool_manager = self.pool_manager.get();
        self.safe_erc20.safe_transfer_from(
            currency,
            data.sender,
            pool_manager,
            amount,
        )?;
        self.call_pool_manager(U256::ZERO, &IPoolManager::settleCall {})?;

        Ok(())
    }

    /// Withdraws `amount` of `currency` owed by the pool manager to `to`.
    fn take(
        &mut self,
        currency: Currency,
        to: Address,
        amount: u128,
    ) -> Result<(), Error> {
        let call =
            IPoolManager::takeCall { currency, to, amount: U256::from(amount) };
        self.call_pool_manager(U256::ZERO, &call)?;
        Ok(())
    }

    /// Native currency held by the router before the current call attached
    /// any value.
    pub(crate) fn refund_baseline(&self) -> U256 {
        let this = self.vm().contract_address();
        self.vm().balance(this).saturating_sub(self.vm().msg_value())
    }

    /// Sends back to `to` the native currency the router holds above
    /// `baseline`.
    pub(crate) fn refund(
        &mut self,
        to: Address,
        baseline: U256,
    ) -> Result<(), Error> {
        let this = self.vm().contract_address();
        let amount = self.vm().balance(this).saturating_sub(baseline);
        if amount.is_zero() {
            return Ok(());
        }

        self.call_with_value(to, amount, &[]).map_err(|_| {
            Error::RefundFailed(SwapBridgeRefundFailed { to, amount })
        })?;

        Ok(())
    }

    fn call_pool_manager(
        &mut self,
        value: U256,
        call: &impl SolCall,
    ) -> Result<Vec<u8>, Error> {
        let pool_manager = self.pool_manager.get();
        self.call_with_value(pool_manager, value, &call.abi_encode())
    }

    /// Calls `target` with `value` attached, re-raising its revert data as
    /// [`Error::External`].
    pub(crate) fn call_with_value(
        &mut self,
        target: Address,
        value: U256,
        calldata: &[u8],
    ) -> Result<Vec<u8>, Error> {
        RawCall::new_with_value(value)
            .call_reentrant(target, calldata)
            .map_err(|revert| Error::External(RevertData(revert)))
    }

    fn decode_delta(&self, data: &[u8]) -> Result<BalanceDelta, Error> {
        <sol_data::Int<256> as SolType>::abi_decode(data, true)
            .map_err(|_| self.invalid_return_data())
    }

    pub(crate) fn invalid_return_data(&self) -> Error {
        Error::InvalidReturnData(SwapBridgeInvalidReturnData {
            from: self.pool_manager.get(),
        })
    }
}
