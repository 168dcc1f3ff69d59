//! Deposit side of an OP-style `StandardBridge`.
//!
//! A deposit is accepted into the bridge's outbound queue on this network;
//! relaying and finalization on the destination network are up to the bridge.
#![allow(missing_docs)]
#![cfg_attr(coverage_nightly, coverage(off))]

use alloy_sol_types::sol;

/// Gas limit forwarded to the destination network for every deposit.
pub const BRIDGE_MIN_GAS_LIMIT: u32 = 200_000;

sol! {
    /// Interface of the standard bridge deposit entry points.
    interface IStandardBridge {
        /// Deposits the attached native currency for `to` on the destination
        /// network.
        function depositETHTo(address to, uint32 minGasLimit, bytes calldata extraData)
            external
            payable;

        /// Deposits `amount` of `localToken` for `to`, to be credited as
        /// `remoteToken` on the destination network. The bridge pulls the
        /// tokens from the caller.
        function depositERC20To(
            address localToken,
            address remoteToken,
            address to,
            uint256 amount,
            uint32 minGasLimit,
            bytes calldata extraData
        ) external;
    }
}
