//! Deposits the output of a swap into the bridge.
use alloy_primitives::{Address, Bytes, U256};
use alloy_sol_types::SolCall;
use openzeppelin_stylus::token::erc20::utils::safe_erc20::ISafeErc20;
use stylus_sdk::{prelude::*, stylus_core::log};
use swap_bridge_stylus::{
    bridge::{IStandardBridge, BRIDGE_MIN_GAS_LIMIT},
    uniswap::v4::{Currency, CurrencyDelta},
};

use crate::{
    Error, SwapBridgeInvalidRecipient, SwapBridgeRouter,
    SwapBridgeUnmappedToken, SwapBridgeZeroAmount, TokensBridged,
};

impl SwapBridgeRouter {
    /// Returns the destination network counterpart of `currency`, or
    /// [`Address::ZERO`] for the native currency.
    ///
    /// Runs before the swap, so that a swap whose output cannot be bridged
    /// never starts.
    ///
    /// # Errors
    ///
    /// * [`Error::InvalidRecipient`] - If `recipient` is [`Address::ZERO`].
    /// * [`Error::UnmappedToken`] - If `currency` is a token without a
    ///   registered counterpart.
    pub(crate) fn check_bridgeable(
        &self,
        currency: Currency,
        recipient: Address,
    ) -> Result<Address, Error> {
        if recipient.is_zero() {
            return Err(Error::InvalidRecipient(SwapBridgeInvalidRecipient {
                recipient,
            }));
        }

        if currency.is_zero() {
            return Ok(Address::ZERO);
        }

        self.registry.resolve(currency).ok_or(Error::UnmappedToken(
            SwapBridgeUnmappedToken { token: currency },
        ))
    }

    /// Deposits everything the pool paid out in `output` into the bridge for
    /// `recipient`.
    ///
    /// Tokens are approved to the bridge for the duration of the deposit
    /// only: the allowance is reset to zero afterwards.
    ///
    /// # Errors
    ///
    /// * [`Error::ZeroAmount`] - If nothing was paid out.
    /// * [`Error::SafeErc20`] - If approving the bridge fails.
    /// * [`Error::External`] - If the bridge rejects the deposit.
    ///
    /// # Events
    ///
    /// * [`TokensBridged`].
    pub(crate) fn forward(
        &mut self,
        sender: Address,
        output: CurrencyDelta,
        remote_token: Address,
        recipient: Address,
    ) -> Result<(), Error> {
        let local_token = output.currency;
        let amount = output.owed();
        if amount == 0 {
            return Err(Error::ZeroAmount(SwapBridgeZeroAmount {
                token: local_token,
            }));
        }

        let amount = U256::from(amount);
        let bridge = self.bridge.get();

        if local_token.is_zero() {
            let call = IStandardBridge::depositETHToCall {
                to: recipient,
                minGasLimit: BRIDGE_MIN_GAS_LIMIT,
                extraData: Bytes::new(),
            };
            self.call_with_value(bridge, amount, &call.abi_encode())?;
        } else {
            self.safe_erc20.force_approve(local_token, bridge, amount)?;

            let call = IStandardBridge::depositERC20ToCall {
                localToken: local_token,
                remoteToken: remote_token,
                to: recipient,
                amount,
                minGasLimit: BRIDGE_MIN_GAS_LIMIT,
                extraData: Bytes::new(),
            };
            self.call_with_value(bridge, U256::ZERO, &call.abi_encode())?;

            self.safe_erc20.force_approve(local_token, bridge, U256::ZERO)?;
        }

        log(
            self.vm(),
            TokensBridged { sender, recipient, local_token, remote_token, amount },
        );

        Ok(())
    }
}
