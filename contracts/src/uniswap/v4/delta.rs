//! Tagged view over a [`BalanceDelta`].
//!
//! The pool manager reports the outcome of a swap as a single signed word that
//! packs two signed 128-bit amounts: a negative amount is owed by the caller to
//! the pool, a positive amount is owed by the pool to the caller. Settlement
//! code works on [`CurrencyDelta`] instead, where the direction is explicit.
use alloy_primitives::{I256, U256};

use super::{BalanceDelta, Currency, PoolKey};

const HALF_WORD: usize = 16;

/// Packs two signed amounts into a [`BalanceDelta`].
///
/// # Arguments
///
/// * `amount0` - Delta of `currency0`.
/// * `amount1` - Delta of `currency1`.
#[must_use]
pub fn to_balance_delta(amount0: i128, amount1: i128) -> BalanceDelta {
    let mut word = [0u8; 2 * HALF_WORD];
    word[..HALF_WORD].copy_from_slice(&amount0.to_be_bytes());
    word[HALF_WORD..].copy_from_slice(&amount1.to_be_bytes());
    I256::from_raw(U256::from_be_bytes(word))
}

/// Returns the `currency0` delta packed in `delta`.
///
/// # Arguments
///
/// * `delta` - Packed balance delta.
#[must_use]
pub fn amount0(delta: BalanceDelta) -> i128 {
    let word = delta.into_raw().to_be_bytes::<32>();
    let mut half = [0u8; HALF_WORD];
    half.copy_from_slice(&word[..HALF_WORD]);
    i128::from_be_bytes(half)
}

/// Returns the `currency1` delta packed in `delta`.
///
/// # Arguments
///
/// * `delta` - Packed balance delta.
#[must_use]
pub fn amount1(delta: BalanceDelta) -> i128 {
    let word = delta.into_raw().to_be_bytes::<32>();
    let mut half = [0u8; HALF_WORD];
    half.copy_from_slice(&word[HALF_WORD..]);
    i128::from_be_bytes(half)
}

/// Which party of a settlement has to move funds.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    /// The pool owes the amount to the caller, who takes it.
    Owed,
    /// The caller owes the amount to the pool, and has to settle it.
    Owing,
}

/// One side of a [`BalanceDelta`], with an explicit [`Direction`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CurrencyDelta {
    /// Currency the amount is denominated in.
    pub currency: Currency,
    /// Who pays whom.
    pub direction: Direction,
    /// Absolute amount.
    pub amount: u128,
}

impl CurrencyDelta {
    /// Tags a signed `amount` of `currency`.
    ///
    /// A zero amount is reported as [`Direction::Owed`].
    ///
    /// # Arguments
    ///
    /// * `currency` - Currency the amount is denominated in.
    /// * `amount` - Signed amount from the caller's perspective.
    #[must_use]
    pub fn new(currency: Currency, amount: i128) -> Self {
        let direction =
            if amount < 0 { Direction::Owing } else { Direction::Owed };
        Self { currency, direction, amount: amount.unsigned_abs() }
    }

    /// Returns the amount the pool owes, or zero if the caller owes.
    #[must_use]
    pub fn owed(&self) -> u128 {
        match self.direction {
            Direction::Owed => self.amount,
            Direction::Owing => 0,
        }
    }

    /// Returns the amount the caller owes, or zero if the pool owes.
    #[must_use]
    pub fn owing(&self) -> u128 {
        match self.direction {
            Direction::Owing => self.amount,
            Direction::Owed => 0,
        }
    }

    /// Whether nothing has to move for this currency.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.amount == 0
    }
}

/// Both sides of the [`BalanceDelta`] of a swap.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SwapDeltas {
    /// Delta of `currency0`.
    pub delta0: CurrencyDelta,
    /// Delta of `currency1`.
    pub delta1: CurrencyDelta,
    zero_for_one: bool,
}

impl SwapDeltas {
    /// Splits `delta` of a swap on `key` into tagged sides.
    ///
    /// # Arguments
    ///
    /// * `key` - Key of the pool the swap was executed on.
    /// * `zero_for_one` - Direction of the swap.
    /// * `delta` - Balance delta returned by the pool manager.
    #[must_use]
    pub fn new(key: &PoolKey, zero_for_one: bool, delta: BalanceDelta) -> Self {
        Self {
            delta0: CurrencyDelta::new(key.currency0, amount0(delta)),
            delta1: CurrencyDelta::new(key.currency1, amount1(delta)),
            zero_for_one,
        }
    }

    /// Side of the currency being sold.
    #[must_use]
    pub fn input(&self) -> CurrencyDelta {
        if self.zero_for_one {
            self.delta0
        } else {
            self.delta1
        }
    }

    /// Side of the currency being bought.
    #[must_use]
    pub fn output(&self) -> CurrencyDelta {
        if self.zero_for_one {
            self.delta1
        } else {
            self.delta0
        }
    }

    /// Both sides, `currency0` first.
    #[must_use]
    pub fn sides(&self) -> [CurrencyDelta; 2] {
        [self.delta0, self.delta1]
    }
}
