//! Raw calls that may re-enter the calling contract.
//!
//! Unlocking the pool manager makes it call back into the router before
//! `unlock` returns. With the `reentrant` feature the storage cache is flushed
//! before every outgoing call, so the callback reads what the outer call has
//! written and the outer call does not overwrite what the callback writes.
use alloy_primitives::Address;
use stylus_sdk::{call::RawCall, ArbResult};

/// A raw call whose callee may call back into the caller.
pub(crate) trait ReentrantCall {
    /// Calls `contract` with `call_data`, returning its return data or its
    /// revert data.
    fn call_reentrant(self, contract: Address, call_data: &[u8]) -> ArbResult;
}

impl ReentrantCall for RawCall {
    fn call_reentrant(self, contract: Address, call_data: &[u8]) -> ArbResult {
        // SAFETY: no storage reference is held across the call, callers read
        // their state back from storage once it returns.
        #[cfg(feature = "reentrant")]
        unsafe {
            self.flush_storage_cache().call(contract, call_data)
        }
        #[cfg(not(feature = "reentrant"))]
        {
            self.call(contract, call_data)
        }
    }
}
