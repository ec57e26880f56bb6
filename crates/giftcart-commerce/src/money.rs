//! Cents-based money arithmetic.
//!
//! The store runs in a single fixed currency, so an amount is just a count
//! of cents. Floats appear only at the configuration boundary, where prices
//! are written as decimal amounts. Mutation paths go through the `try_*`
//! API, which rejects overflow instead of wrapping.

use serde::{Deserialize, Serialize};
use std::fmt;

/// An amount of money in the store currency, stored as whole cents.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(transparent)]
pub struct Money {
    cents: i64,
}

impl Money {
    /// No money at all.
    pub const ZERO: Money = Money { cents: 0 };

    /// An amount from a raw cent count.
    pub fn from_cents(cents: i64) -> Self {
        Self { cents }
    }

    /// An amount from a decimal value, rounded to the nearest cent.
    ///
    /// ```
    /// use giftcart_commerce::money::Money;
    /// assert_eq!(Money::from_decimal(49.99).cents(), 4999);
    /// ```
    pub fn from_decimal(amount: f64) -> Self {
        Self::from_cents((amount * 100.0).round() as i64)
    }

    /// The raw cent count.
    pub fn cents(&self) -> i64 {
        self.cents
    }

    /// The amount as a decimal value, for display math only.
    pub fn to_decimal(&self) -> f64 {
        self.cents as f64 / 100.0
    }

    pub fn is_zero(&self) -> bool {
        self.cents == 0
    }

    pub fn is_positive(&self) -> bool {
        self.cents > 0
    }

    pub fn is_negative(&self) -> bool {
        self.cents < 0
    }

    /// Add, rejecting overflow.
    pub fn try_add(self, other: Money) -> Option<Money> {
        self.cents.checked_add(other.cents).map(Money::from_cents)
    }

    /// Subtract, rejecting overflow.
    pub fn try_subtract(self, other: Money) -> Option<Money> {
        self.cents.checked_sub(other.cents).map(Money::from_cents)
    }

    /// Scale by a quantity, rejecting overflow.
    pub fn try_multiply(self, factor: i64) -> Option<Money> {
        self.cents.checked_mul(factor).map(Money::from_cents)
    }

    /// Sum a sequence of amounts, rejecting overflow anywhere along the way.
    pub fn try_sum(amounts: impl IntoIterator<Item = Money>) -> Option<Money> {
        amounts
            .into_iter()
            .try_fold(Money::ZERO, |total, amount| total.try_add(amount))
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.cents < 0 { "-" } else { "" };
        let abs = self.cents.unsigned_abs();
        write!(f, "{sign}${}.{:02}", abs / 100, abs % 100)
    }
}
