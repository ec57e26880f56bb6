//! Free-gift threshold promotion.

use crate::catalog::Product;
use crate::error::CartError;
use crate::ids::ProductId;
use crate::money::Money;
use serde::Serialize;

/// The gift-threshold promotion: a designated free product is granted once
/// the paid subtotal reaches the threshold.
///
/// The policy itself is pure; the engine consults it after every mutation and
/// writes the gift line accordingly.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct GiftPolicy {
    gift: Product,
    threshold: Money,
}

impl GiftPolicy {
    /// Create a new policy.
    ///
    /// Returns an error if the gift product is not free or the threshold is
    /// not positive.
    pub fn new(gift: Product, threshold: Money) -> Result<Self, CartError> {
        if !gift.is_free() {
            return Err(CartError::Validation(format!(
                "gift product {} must be free, priced {}",
                gift.id, gift.price
            )));
        }
        if !threshold.is_positive() {
            return Err(CartError::Validation(format!(
                "gift threshold must be positive, got {}",
                threshold
            )));
        }
        Ok(Self { gift, threshold })
    }

    /// The gift product descriptor.
    pub fn gift(&self) -> &Product {
        &self.gift
    }

    /// The gift product's reserved id.
    pub fn gift_id(&self) -> ProductId {
        self.gift.id
    }

    /// The subtotal required to unlock the gift.
    pub fn threshold(&self) -> Money {
        self.threshold
    }

    /// Whether a subtotal unlocks the gift.
    pub fn is_eligible(&self, subtotal: Money) -> bool {
        subtotal >= self.threshold
    }

    /// Progress toward the threshold as a percentage, clamped to 0..=100.
    pub fn progress_percent(&self, subtotal: Money) -> f64 {
        let ratio = subtotal.cents() as f64 / self.threshold.cents() as f64;
        (ratio * 100.0).clamp(0.0, 100.0)
    }

    /// How much more must be spent to unlock the gift. Zero once eligible.
    pub fn remaining(&self, subtotal: Money) -> Money {
        Money::from_cents((self.threshold.cents() - subtotal.cents()).max(0))
    }
}
