//! Subset of the Uniswap V4 `PoolManager` interface used for swapping.
//!
//! All pool manager actions happen inside an unlocked window: the caller
//! invokes [`IPoolManager::unlockCall`], the pool manager calls back
//! [`IUnlockCallback::unlockCallbackCall`] on the caller, and every currency
//! delta accrued in the callback has to be settled before the callback
//! returns.
//!
//! [`PoolKey`] and [`SwapParams`] are declared next to the interface, since
//! `swap` takes both.
#![allow(missing_docs)]
#![cfg_attr(coverage_nightly, coverage(off))]

use alloy_sol_types::sol;

sol! {
    /// Returns the key for identifying a pool.
    #[derive(Debug, PartialEq, Eq)]
    struct PoolKey {
        /// The lower currency of the pool, sorted numerically.
        address currency0;
        /// The higher currency of the pool, sorted numerically.
        address currency1;
        /// The pool LP fee, capped at 1_000_000.
        /// If the highest bit is 1, the pool has a dynamic fee and
        /// must be exactly equal to 0x800000.
        uint24 fee;
        /// Ticks that involve positions must be a multiple of tick spacing.
        int24 tickSpacing;
        /// The hooks of the pool.
        address hooks;
    }

    /// Struct representing swap parameters.
    #[derive(Debug, PartialEq, Eq)]
    struct SwapParams {
        /// Whether to swap token0 for token1 or vice versa.
        bool zeroForOne;
        /// The desired input amount if negative (exactIn),
        /// or the desired output amount if positive (exactOut).
        int256 amountSpecified;
        /// The sqrt price at which, if reached, the swap will stop executing.
        uint160 sqrtPriceLimitX96;
    }

    /// Interface of the Uniswap V4 pool manager.
    interface IPoolManager {
        /// Unlocks the pool manager and calls back `unlockCallback(data)` on
        /// the caller, returning what the callback returns.
        function unlock(bytes calldata data) external returns (bytes memory);

        /// Swaps against the pool identified by `key`.
        function swap(PoolKey memory key, SwapParams memory params, bytes calldata hookData)
            external
            returns (int256 swapDelta);

        /// Writes the current ERC-20 balance of `currency` as the reserve to
        /// settle against.
        function sync(address currency) external;

        /// Pays what was transferred (or attached as value) since the last
        /// `sync`.
        function settle() external payable returns (uint256 paid);

        /// Withdraws `amount` of `currency` owed by the pool to `to`.
        function take(address currency, address to, uint256 amount) external;
    }

    /// Interface the pool manager calls back into while unlocked.
    interface IUnlockCallback {
        function unlockCallback(bytes calldata data) external returns (bytes memory);
    }
}
