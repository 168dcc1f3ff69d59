//! Uniswap integrations.
pub mod v4;
