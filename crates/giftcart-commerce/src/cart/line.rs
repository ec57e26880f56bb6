//! Cart line item.

use crate::catalog::Product;
use crate::ids::ProductId;
use crate::money::Money;
use serde::Serialize;

/// One product's presence in the cart.
///
/// A line exists only with `quantity >= 1`; the engine removes a line instead
/// of letting it reach zero. Name and price are denormalized from the catalog
/// at insertion time.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CartLine {
    /// Product this line refers to.
    pub product_id: ProductId,
    /// Product name (denormalized for display).
    pub name: String,
    /// Unit price.
    pub unit_price: Money,
    /// Quantity. Always >= 1.
    pub quantity: i64,
}

impl CartLine {
    pub(crate) fn new(product: &Product, quantity: i64) -> Self {
        Self {
            product_id: product.id,
            name: product.name.clone(),
            unit_price: product.price,
            quantity,
        }
    }

    /// Unit price times quantity.
    ///
    /// Saturates rather than wrapping; the mutation path already rejects
    /// quantities whose total would overflow.
    pub fn line_total(&self) -> Money {
        Money::from_cents(self.unit_price.cents().saturating_mul(self.quantity))
    }
}
