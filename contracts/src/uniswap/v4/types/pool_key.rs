use alloy_primitives::{keccak256, Address};
use alloy_sol_types::SolValue;

use super::{PoolId, PoolKey};

/// The currency data type.
///
/// [`Address::ZERO`] stands for the native currency of the chain.
pub type Currency = Address;

impl PoolKey {
    /// Returns the currency sold by a swap in the given direction.
    ///
    /// # Arguments
    ///
    /// * `&self` - Read access to the pool key.
    /// * `zero_for_one` - Whether `currency0` is swapped for `currency1`.
    #[must_use]
    pub fn input_currency(&self, zero_for_one: bool) -> Currency {
        if zero_for_one {
            self.currency0
        } else {
            self.currency1
        }
    }

    /// Returns the currency bought by a swap in the given direction.
    ///
    /// # Arguments
    ///
    /// * `&self` - Read access to the pool key.
    /// * `zero_for_one` - Whether `currency0` is swapped for `currency1`.
    #[must_use]
    pub fn output_currency(&self, zero_for_one: bool) -> Currency {
        if zero_for_one {
            self.currency1
        } else {
            self.currency0
        }
    }
}

impl From<PoolKey> for PoolId {
    fn from(value: PoolKey) -> Self {
        let encoded = PoolKey::abi_encode(&value);
        keccak256(encoded)
    }
}

#[cfg(test)]
mod tests {
    use alloy_primitives::{address, Address};

    use super::*;
    use crate::uniswap::v4::{I24, U24};

    const TOKEN: Address = address!("1000000000000000000000000000000000000001");

    fn key() -> PoolKey {
        PoolKey {
            currency0: Address::ZERO,
            currency1: TOKEN,
            fee: U24::from(3000),
            tickSpacing: I24::try_from(60).expect("should fit in 24 bits"),
            hooks: Address::ZERO,
        }
    }

    #[test]
    fn selects_currencies_by_direction() {
        let key = key();
        assert_eq!(key.input_currency(true), Address::ZERO);
        assert_eq!(key.output_currency(true), TOKEN);
        assert_eq!(key.input_currency(false), TOKEN);
        assert_eq!(key.output_currency(false), Address::ZERO);
    }

    #[test]
    fn pool_id_depends_on_every_field() {
        let id: PoolId = key().into();
        assert_eq!(id, PoolId::from(key()));

        let mut other = key();
        other.hooks = TOKEN;
        assert_ne!(id, PoolId::from(other));

        let mut other = key();
        other.fee = U24::from(500);
        assert_ne!(id, PoolId::from(other));
    }
}
