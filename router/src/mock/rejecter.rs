//! Account that refuses native currency.
use alloc::vec::Vec;

use stylus_sdk::prelude::*;

pub(crate) const NATIVE_REJECTED: &[u8] = b"native currency rejected";

#[storage]
pub(crate) struct NativeRejecterMock {}

unsafe impl TopLevelStorage for NativeRejecterMock {}

#[public]
impl NativeRejecterMock {
    #[receive]
    #[payable]
    fn receive(&mut self) -> Result<(), Vec<u8>> {
        Err(NATIVE_REJECTED.to_vec())
    }
}
