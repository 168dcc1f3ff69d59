//! Cross-chain bridge interfaces consumed by the router.
pub mod standard_bridge;

pub use standard_bridge::{IStandardBridge, BRIDGE_MIN_GAS_LIMIT};
