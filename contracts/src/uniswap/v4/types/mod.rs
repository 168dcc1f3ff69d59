//! Module with data types for Uniswap V4 pools.
use alloy_primitives::{Signed, Uint, B256, I256};

mod pool_key;

pub use pool_key::Currency;

pub use super::pool_manager::{PoolKey, SwapParams};

/// Type representing Id of a Pool.
pub type PoolId = B256;

/// Type representing signed 24-bits integer.
pub type I24 = Signed<24, 1>;

/// Type representing unsigned 24-bits integer.
pub type U24 = Uint<24, 1>;

/// Type representing balance delta.
///
/// Packs `amount0` in the upper 128 bits and `amount1` in the lower 128 bits,
/// both as two's complement `int128`. See [`crate::uniswap::v4::delta`].
pub type BalanceDelta = I256;
