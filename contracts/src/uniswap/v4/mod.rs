//! Uniswap V4 types and the pool manager interface consumed by the router.
pub mod delta;
pub mod pool_manager;
pub mod types;

pub use delta::{CurrencyDelta, Direction, SwapDeltas};
pub use pool_manager::{IPoolManager, IUnlockCallback};
pub use types::*;
