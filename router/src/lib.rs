//! Swap-then-bridge router.
//!
//! Swaps on a Uniswap V4 pool manager and, if asked to, deposits the output of
//! the swap into a standard bridge for a recipient on the destination network,
//! all within a single transaction.
//!
//! The caller funds the swap with the attached value when selling the native
//! currency, or by approving the router for the sold token. Whatever native
//! currency the swap does not consume is sent back to the caller.
//!
//! Only tokens registered by the owner can be bridged, so that funds are never
//! deposited for an unknown token on the destination network. The native
//! currency is always bridgeable.
#![cfg_attr(not(any(test, feature = "export-abi")), no_main)]
extern crate alloc;

mod call;
mod forwarder;
#[cfg(test)]
mod mock;
mod settlement;

use alloc::vec::Vec;

use alloy_primitives::Address;
use alloy_sol_types::{sol_data, SolType};
use openzeppelin_stylus::{
    access::ownable::{self, IOwnable, Ownable},
    token::erc20::utils::safe_erc20::{self, SafeErc20},
};
pub use sol::*;
use stylus_sdk::{
    abi::Bytes,
    call::MethodError,
    prelude::*,
    storage::StorageAddress,
};
use swap_bridge_stylus::{
    registry::{self, ITokenRegistry, TokenRegistry},
    uniswap::v4::{BalanceDelta, PoolKey, SwapDeltas, SwapParams},
};

use crate::settlement::CallbackData;

#[cfg_attr(coverage_nightly, coverage(off))]
mod sol {
    use alloy_sol_macro::sol;

    sol! {
        /// Post-swap instructions of a [`super::SwapBridgeRouter::swap`] call.
        #[derive(Debug)]
        struct SwapSettings {
            /// Whether the output of the swap is deposited into the bridge.
            bool bridgeTokens;
            /// Account credited on the destination network. Unused when
            /// `bridgeTokens` is false.
            address recipientAddress;
        }
    }

    sol! {
        /// Emitted when the output of a swap gets deposited into the bridge.
        ///
        /// * `sender` - Account that called `swap`.
        /// * `recipient` - Account credited on the destination network.
        /// * `local_token` - Bridged token, [`Address::ZERO`] for the native
        ///   currency.
        /// * `remote_token` - Counterpart of `local_token` on the destination
        ///   network, [`Address::ZERO`] for the native currency.
        /// * `amount` - Bridged amount.
        #[derive(Debug)]
        #[allow(missing_docs)]
        event TokensBridged(
            address indexed sender,
            address indexed recipient,
            address local_token,
            address remote_token,
            uint256 amount
        );
    }

    sol! {
        /// Bridging was requested for a token without a registered
        /// counterpart.
        ///
        /// * `token` - Unregistered token.
        #[derive(Debug)]
        #[allow(missing_docs)]
        error SwapBridgeUnmappedToken(address token);

        /// Bridging was requested for an invalid recipient
        /// (eg. [`Address::ZERO`]).
        ///
        /// * `recipient` - Rejected recipient.
        #[derive(Debug)]
        #[allow(missing_docs)]
        error SwapBridgeInvalidRecipient(address recipient);

        /// Bridging was requested but the swap produced no output.
        ///
        /// * `token` - Output token of the swap.
        #[derive(Debug)]
        #[allow(missing_docs)]
        error SwapBridgeZeroAmount(address token);

        /// A swap owes more native currency than the value attached to it.
        ///
        /// * `required` - Native currency owed to the pool manager.
        /// * `provided` - Value attached to the swap.
        #[derive(Debug)]
        #[allow(missing_docs)]
        error SwapBridgeInsufficientValue(uint256 required, uint256 provided);

        /// `unlockCallback` was called by an account other than the pool
        /// manager.
        ///
        /// * `caller` - Account that called back.
        #[derive(Debug)]
        #[allow(missing_docs)]
        error SwapBridgeUnauthorizedCallback(address caller);

        /// A collaborator returned data that could not be decoded.
        ///
        /// * `from` - Collaborator that returned the data.
        #[derive(Debug)]
        #[allow(missing_docs)]
        error SwapBridgeInvalidReturnData(address from);

        /// A collaborator address is not valid (eg. [`Address::ZERO`]).
        ///
        /// * `account` - Rejected address.
        #[derive(Debug)]
        #[allow(missing_docs)]
        error SwapBridgeInvalidAddress(address account);

        /// The unused native currency could not be sent back.
        ///
        /// * `to` - Account the refund was sent to.
        /// * `amount` - Refunded amount.
        #[derive(Debug)]
        #[allow(missing_docs)]
        error SwapBridgeRefundFailed(address to, uint256 amount);
    }
}

/// Revert data of a failed call to the pool manager or the bridge, re-raised
/// unmodified.
#[derive(Debug, PartialEq, Eq)]
pub struct RevertData(pub Vec<u8>);

impl MethodError for RevertData {
    fn encode(self) -> Vec<u8> {
        self.0
    }
}

/// An error that occurred in the implementation of a [`SwapBridgeRouter`].
#[derive(SolidityError, Debug)]
pub enum Error {
    /// Error type from [`Ownable`] contract [`ownable::Error`].
    Ownable(ownable::Error),
    /// Error type from [`TokenRegistry`] contract [`registry::Error`].
    Registry(registry::Error),
    /// Error type from [`SafeErc20`] contract [`safe_erc20::Error`].
    SafeErc20(safe_erc20::Error),
    /// Bridging was requested for a token without a registered counterpart.
    UnmappedToken(SwapBridgeUnmappedToken),
    /// Bridging was requested for an invalid recipient.
    InvalidRecipient(SwapBridgeInvalidRecipient),
    /// Bridging was requested but the swap produced no output.
    ZeroAmount(SwapBridgeZeroAmount),
    /// A swap owes more native currency than the value attached to it.
    InsufficientValue(SwapBridgeInsufficientValue),
    /// `unlockCallback` was called by an account other than the pool manager.
    UnauthorizedCallback(SwapBridgeUnauthorizedCallback),
    /// A collaborator returned data that could not be decoded.
    InvalidReturnData(SwapBridgeInvalidReturnData),
    /// A collaborator address is not valid.
    InvalidAddress(SwapBridgeInvalidAddress),
    /// The unused native currency could not be sent back.
    RefundFailed(SwapBridgeRefundFailed),
    /// The pool manager or the bridge reverted.
    External(RevertData),
}

#[cfg_attr(coverage_nightly, coverage(off))]
impl MethodError for Error {
    fn encode(self) -> Vec<u8> {
        self.into()
    }
}

/// State of a [`SwapBridgeRouter`] contract.
#[entrypoint]
#[storage]
pub struct SwapBridgeRouter {
    ownable: Ownable,
    safe_erc20: SafeErc20,
    registry: TokenRegistry,
    /// Uniswap V4 pool manager swaps are executed on.
    pool_manager: StorageAddress,
    /// Standard bridge the output of swaps is deposited into.
    bridge: StorageAddress,
}

#[public]
#[implements(IOwnable<Error = Error>, ITokenRegistry)]
impl SwapBridgeRouter {
    /// Constructor.
    ///
    /// # Arguments
    ///
    /// * `&mut self` - Write access to the contract's state.
    /// * `initial_owner` - Account allowed to register bridgeable tokens.
    /// * `pool_manager` - Uniswap V4 pool manager.
    /// * `bridge` - Standard bridge.
    ///
    /// # Errors
    ///
    /// * [`ownable::Error::InvalidOwner`] - If `initial_owner` is
    ///   [`Address::ZERO`].
    /// * [`Error::InvalidAddress`] - If `pool_manager` or `bridge` is
    ///   [`Address::ZERO`].
    #[constructor]
    fn constructor(
        &mut self,
        initial_owner: Address,
        pool_manager: Address,
        bridge: Address,
    ) -> Result<(), Error> {
        self.ownable.constructor(initial_owner)?;

        for account in [pool_manager, bridge] {
            if account.is_zero() {
                return Err(Error::InvalidAddress(SwapBridgeInvalidAddress {
                    account,
                }));
            }
        }

        self.pool_manager.set(pool_manager);
        self.bridge.set(bridge);
        Ok(())
    }

    /// Swaps on the pool identified by `key` and, if
    /// `settings.bridgeTokens` is set, deposits the whole output into the
    /// bridge for `settings.recipientAddress`.
    ///
    /// When selling the native currency the swap is paid with the attached
    /// value, otherwise the sold token is pulled from the caller, who must
    /// have approved the router. Unused native currency is sent back to the
    /// caller.
    ///
    /// Returns the balance delta of the swap, as reported by the pool
    /// manager.
    ///
    /// # Arguments
    ///
    /// * `&mut self` - Write access to the contract's state.
    /// * `key` - Key of the pool to swap on.
    /// * `params` - Swap parameters, passed to the pool manager as is.
    /// * `settings` - Post-swap instructions.
    /// * `hook_data` - Data for the pool's hooks.
    ///
    /// # Errors
    ///
    /// * [`Error::InvalidRecipient`] - If bridging to [`Address::ZERO`].
    /// * [`Error::UnmappedToken`] - If bridging a token without a registered
    ///   counterpart.
    /// * [`Error::ZeroAmount`] - If bridging and the swap has no output.
    /// * [`Error::InsufficientValue`] - If the swap owes more native currency
    ///   than the attached value.
    /// * [`Error::SafeErc20`] - If pulling the sold token or approving the
    ///   bridge fails.
    /// * [`Error::External`] - If the pool manager or the bridge reverts.
    /// * [`Error::InvalidReturnData`] - If the pool manager returns data that
    ///   is not a balance delta.
    /// * [`Error::RefundFailed`] - If the unused native currency cannot be
    ///   sent back.
    ///
    /// # Events
    ///
    /// * [`TokensBridged`] - If bridging.
    #[payable]
    fn swap(
        &mut self,
        key: PoolKey,
        params: SwapParams,
        settings: SwapSettings,
        hook_data: Bytes,
    ) -> Result<BalanceDelta, Error> {
        let sender = self.vm().msg_sender();
        let baseline = self.refund_baseline();

        let remote_token = if settings.bridgeTokens {
            let output = key.output_currency(params.zeroForOne);
            Some(self.check_bridgeable(output, settings.recipientAddress)?)
        } else {
            None
        };

        let recipient = settings.recipientAddress;
        let delta = self.unlock_and_swap(&CallbackData {
            sender,
            value: self.vm().msg_value(),
            key: key.clone(),
            params: params.clone(),
            settings,
            hook_data: hook_data.to_vec().into(),
        })?;

        if let Some(remote_token) = remote_token {
            let deltas = SwapDeltas::new(&key, params.zeroForOne, delta);
            self.forward(sender, deltas.output(), remote_token, recipient)?;
        }

        self.refund(sender, baseline)?;

        Ok(delta)
    }

    /// Called back by the pool manager once unlocked. Executes the swap
    /// described by `data` and settles every currency delta with the pool.
    ///
    /// Returns the ABI-encoded balance delta of the swap.
    ///
    /// # Arguments
    ///
    /// * `&mut self` - Write access to the contract's state.
    /// * `data` - ABI-encoded [`CallbackData`].
    ///
    /// # Errors
    ///
    /// * [`Error::UnauthorizedCallback`] - If not called by the pool manager.
    /// * [`Error::InvalidReturnData`] - If `data` cannot be decoded.
    /// * [`Error::InsufficientValue`] - If the swap owes more native currency
    ///   than was attached to `swap`.
    /// * [`Error::SafeErc20`] - If pulling the sold token fails.
    /// * [`Error::External`] - If the pool manager reverts.
    fn unlock_callback(&mut self, data: Bytes) -> Result<Bytes, Error> {
        let caller = self.vm().msg_sender();
        if caller != self.pool_manager.get() {
            return Err(Error::UnauthorizedCallback(
                SwapBridgeUnauthorizedCallback { caller },
            ));
        }

        let data = CallbackData::abi_decode(&data)
            .map_err(|_| self.invalid_return_data())?;

        let delta = self.execute_swap(&data)?;

        Ok(<sol_data::Int<256> as SolType>::abi_encode(&delta).into())
    }

    /// Maps `local_token` to its counterpart `remote_token` on the
    /// destination network, making it bridgeable. Can only be called by the
    /// owner.
    ///
    /// # Arguments
    ///
    /// * `&mut self` - Write access to the contract's state.
    /// * `local_token` - Token on this network.
    /// * `remote_token` - Counterpart on the destination network.
    ///
    /// # Errors
    ///
    /// * [`ownable::Error::UnauthorizedAccount`] - If not called by the owner.
    /// * [`registry::Error::InvalidToken`] - If either token is
    ///   [`Address::ZERO`].
    ///
    /// # Events
    ///
    /// * [`registry::TokenRegistered`].
    fn register_token(
        &mut self,
        local_token: Address,
        remote_token: Address,
    ) -> Result<(), Error> {
        self.ownable.only_owner()?;
        Ok(self.registry.register(local_token, remote_token)?)
    }

    /// Returns the Uniswap V4 pool manager swaps are executed on.
    fn pool_manager(&self) -> Address {
        self.pool_manager.get()
    }

    /// Returns the standard bridge the output of swaps is deposited into.
    fn bridge(&self) -> Address {
        self.bridge.get()
    }

    /// Accepts the native currency taken from the pool manager.
    #[receive]
    #[payable]
    fn receive(&mut self) -> Result<(), Vec<u8>> {
        Ok(())
    }
}

#[public]
impl IOwnable for SwapBridgeRouter {
    type Error = Error;

    fn owner(&self) -> Address {
        self.ownable.owner()
    }

    fn transfer_ownership(
        &mut self,
        new_owner: Address,
    ) -> Result<(), Self::Error> {
        Ok(self.ownable.transfer_ownership(new_owner)?)
    }

    fn renounce_ownership(&mut self) -> Result<(), Self::Error> {
        Ok(self.ownable.renounce_ownership()?)
    }
}

#[public]
impl ITokenRegistry for SwapBridgeRouter {
    fn remote_token(&self, local_token: Address) -> Address {
        self.registry.remote_token(local_token)
    }
}
