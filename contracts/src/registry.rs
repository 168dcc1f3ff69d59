//! Registry of the tokens that can be bridged, mapping a token on this network
//! to its counterpart on the destination network.
//!
//! The registry has no access control of its own: contracts embedding it are
//! expected to gate [`TokenRegistry::register`], usually behind
//! `Ownable::only_owner`.
//!
//! The native currency ([`Address::ZERO`]) is always bridgeable to the native
//! currency of the destination network and never has an entry.
use alloc::{vec, vec::Vec};

use alloy_primitives::Address;
pub use sol::*;
use stylus_sdk::{
    call::MethodError,
    prelude::*,
    storage::{StorageAddress, StorageMap},
    stylus_core::log,
};

#[cfg_attr(coverage_nightly, coverage(off))]
mod sol {
    use alloy_sol_macro::sol;

    sol! {
        /// Emitted when `local_token` gets mapped to `remote_token`.
        ///
        /// * `local_token` - Token on this network.
        /// * `remote_token` - Counterpart on the destination network.
        #[derive(Debug)]
        #[allow(missing_docs)]
        event TokenRegistered(address indexed local_token, address indexed remote_token);
    }

    sol! {
        /// The token cannot be part of a mapping (eg. [`Address::ZERO`]).
        ///
        /// * `token` - Rejected token.
        #[derive(Debug)]
        #[allow(missing_docs)]
        error TokenRegistryInvalidToken(address token);
    }
}

/// An error that occurred in the implementation of a [`TokenRegistry`].
#[derive(SolidityError, Debug)]
pub enum Error {
    /// The token cannot be part of a mapping (eg. [`Address::ZERO`]).
    InvalidToken(TokenRegistryInvalidToken),
}

#[cfg_attr(coverage_nightly, coverage(off))]
impl MethodError for Error {
    fn encode(self) -> alloc::vec::Vec<u8> {
        self.into()
    }
}

/// State of a [`TokenRegistry`].
#[storage]
pub struct TokenRegistry {
    /// Destination network counterpart of each registered token.
    pub(crate) remote_tokens: StorageMap<Address, StorageAddress>,
}

/// Interface for a [`TokenRegistry`].
pub trait ITokenRegistry {
    /// Returns the destination network counterpart of `local_token`, or
    /// [`Address::ZERO`] if the token is not registered.
    ///
    /// # Arguments
    ///
    /// * `&self` - Read access to the contract's state.
    /// * `local_token` - Token on this network.
    #[must_use]
    fn remote_token(&self, local_token: Address) -> Address;
}

#[public]
#[implements(ITokenRegistry)]
impl TokenRegistry {}

#[public]
impl ITokenRegistry for TokenRegistry {
    fn remote_token(&self, local_token: Address) -> Address {
        self.remote_tokens.get(local_token)
    }
}

impl TokenRegistry {
    /// Maps `local_token` to `remote_token`, overwriting any previous
    /// mapping of `local_token`.
    ///
    /// # Arguments
    ///
    /// * `&mut self` - Write access to the contract's state.
    /// * `local_token` - Token on this network.
    /// * `remote_token` - Counterpart on the destination network.
    ///
    /// # Errors
    ///
    /// * [`Error::InvalidToken`] - If either token is [`Address::ZERO`].
    ///
    /// # Events
    ///
    /// * [`TokenRegistered`].
    pub fn register(
        &mut self,
        local_token: Address,
        remote_token: Address,
    ) -> Result<(), Error> {
        for token in [local_token, remote_token] {
            if token.is_zero() {
                return Err(Error::InvalidToken(TokenRegistryInvalidToken {
                    token,
                }));
            }
        }

        self.remote_tokens.setter(local_token).set(remote_token);
        log(self.vm(), TokenRegistered { local_token, remote_token });

        Ok(())
    }

    /// Returns the destination network counterpart of `local_token`, if any.
    ///
    /// # Arguments
    ///
    /// * `&self` - Read access to the contract's state.
    /// * `local_token` - Token on this network.
    #[must_use]
    pub fn resolve(&self, local_token: Address) -> Option<Address> {
        let remote_token = self.remote_tokens.get(local_token);
        (!remote_token.is_zero()).then_some(remote_token)
    }
}
