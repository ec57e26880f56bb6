//! Cart state and the operations that mutate it.

use crate::cart::{CartLine, GiftPolicy};
use crate::catalog::{Catalog, Product};
use crate::error::CartError;
use crate::ids::ProductId;
use crate::money::Money;
use tracing::debug;

/// Maximum quantity allowed per cart line.
pub const MAX_QUANTITY_PER_LINE: i64 = 9999;

/// Owns the cart state and enforces its invariants.
///
/// Lines are ordered, unique by product id, and never carry a quantity below
/// one. Every mutating operation re-evaluates the gift rule as its final
/// step, so observers never see a cart where the gift line disagrees with the
/// subtotal. The engine is the sole writer of the gift line; the public
/// operations accept catalog products only.
#[derive(Debug, Clone)]
pub struct CartEngine {
    catalog: Catalog,
    policy: GiftPolicy,
    lines: Vec<CartLine>,
}

impl CartEngine {
    /// Create an engine over a catalog and gift policy. The cart starts empty.
    ///
    /// Returns an error if the gift id collides with a catalog id.
    pub fn new(catalog: Catalog, policy: GiftPolicy) -> Result<Self, CartError> {
        if catalog.contains(policy.gift_id()) {
            return Err(CartError::Validation(format!(
                "gift id {} collides with a catalog product",
                policy.gift_id()
            )));
        }
        Ok(Self {
            catalog,
            policy,
            lines: Vec::new(),
        })
    }

    /// The catalog this engine trusts.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// The gift policy in effect.
    pub fn policy(&self) -> &GiftPolicy {
        &self.policy
    }

    /// Read-only snapshot of the cart lines, in insertion order.
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Check if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Total item count (sum of quantities, gift included).
    pub fn item_count(&self) -> i64 {
        self.lines.iter().map(|l| l.quantity).sum()
    }

    /// Number of distinct lines.
    pub fn unique_item_count(&self) -> usize {
        self.lines.len()
    }

    /// Quantity of the line with this id, or 0 if absent.
    pub fn quantity_of(&self, id: ProductId) -> i64 {
        self.lines
            .iter()
            .find(|l| l.product_id == id)
            .map(|l| l.quantity)
            .unwrap_or(0)
    }

    /// Whether the gift line is currently in the cart.
    pub fn gift_present(&self) -> bool {
        self.quantity_of(self.policy.gift_id()) > 0
    }

    /// Paid subtotal: sum of price times quantity over all non-gift lines.
    ///
    /// Recomputed on every call; never cached. The mutation path bounds every
    /// line total, so an overflowing sum is out of reach in practice; if one
    /// ever happened the subtotal saturates rather than wrapping.
    pub fn subtotal(&self) -> Money {
        let gift_id = self.policy.gift_id();
        let totals = self
            .lines
            .iter()
            .filter(|l| l.product_id != gift_id)
            .map(|l| l.line_total());
        Money::try_sum(totals).unwrap_or(Money::from_cents(i64::MAX))
    }

    /// Progress toward the gift threshold, clamped to 0..=100.
    pub fn progress_percent(&self) -> f64 {
        self.policy.progress_percent(self.subtotal())
    }

    /// How much more must be spent to unlock the gift. Zero once unlocked.
    pub fn gift_remaining(&self) -> Money {
        self.policy.remaining(self.subtotal())
    }

    /// Add one unit of a catalog product.
    ///
    /// Increments an existing line, or appends a new line with quantity 1.
    pub fn add_one(&mut self, product: &Product) -> Result<(), CartError> {
        self.add_with_quantity(product, 1)
    }

    /// Add `qty` units of a catalog product. `qty` must be >= 1.
    ///
    /// Increments an existing line by `qty`, or appends a new line with
    /// quantity `qty`. `qty` typically comes from a quantity selector in the
    /// UI; callers without one pass 1.
    pub fn add_with_quantity(&mut self, product: &Product, qty: i64) -> Result<(), CartError> {
        if qty <= 0 {
            return Err(CartError::InvalidQuantity(qty));
        }
        let canonical = self.resolve(product)?.clone();
        let new_qty = self
            .quantity_of(canonical.id)
            .checked_add(qty)
            .ok_or(CartError::Overflow)?;
        self.check_bounds(&canonical, new_qty)?;
        self.set_quantity(&canonical, new_qty);
        self.apply_gift_rule();
        Ok(())
    }

    /// Change a line's quantity by `delta` (any magnitude, either sign).
    ///
    /// Absent line: positive `delta` inserts a line with that quantity,
    /// non-positive `delta` is a no-op. Present line: the new quantity is
    /// `old + delta`; at or below zero the line is removed, otherwise it is
    /// updated in place. Other lines keep their order either way.
    pub fn adjust_quantity(&mut self, product: &Product, delta: i64) -> Result<(), CartError> {
        let canonical = self.resolve(product)?.clone();
        let current = self.quantity_of(canonical.id);
        if current == 0 && delta <= 0 {
            return Ok(());
        }
        let new_qty = current.checked_add(delta).ok_or(CartError::Overflow)?;
        if new_qty > 0 {
            self.check_bounds(&canonical, new_qty)?;
        }
        self.set_quantity(&canonical, new_qty.max(0));
        self.apply_gift_rule();
        Ok(())
    }

    /// Resolve a caller-supplied product against the trusted catalog.
    ///
    /// The gift id is rejected outright: the gift line belongs to the engine.
    /// The returned product is the catalog's own copy, so a tampered name or
    /// price on the argument cannot reach the cart.
    fn resolve(&self, product: &Product) -> Result<&Product, CartError> {
        if product.id == self.policy.gift_id() {
            return Err(CartError::ReservedProduct(product.id));
        }
        self.catalog
            .get(product.id)
            .ok_or(CartError::UnknownProduct(product.id))
    }

    fn check_bounds(&self, product: &Product, qty: i64) -> Result<(), CartError> {
        if qty > MAX_QUANTITY_PER_LINE {
            return Err(CartError::QuantityExceedsLimit(qty, MAX_QUANTITY_PER_LINE));
        }
        product.price.try_multiply(qty).ok_or(CartError::Overflow)?;
        Ok(())
    }

    /// Write a line's quantity: zero removes, existing updates in place, new
    /// lines append at the end.
    fn set_quantity(&mut self, product: &Product, qty: i64) {
        if let Some(pos) = self.lines.iter().position(|l| l.product_id == product.id) {
            if qty <= 0 {
                self.lines.remove(pos);
            } else {
                self.lines[pos].quantity = qty;
            }
        } else if qty > 0 {
            self.lines.push(CartLine::new(product, qty));
        }
    }

    /// Re-evaluate the gift rule against the current subtotal.
    ///
    /// Idempotent. Called as the final step of every mutating operation, so
    /// at rest the gift line is present exactly when the subtotal meets the
    /// threshold.
    fn apply_gift_rule(&mut self) {
        let subtotal = self.subtotal();
        let eligible = self.policy.is_eligible(subtotal);
        let gift_id = self.policy.gift_id();
        let pos = self.lines.iter().position(|l| l.product_id == gift_id);
        match (eligible, pos) {
            (true, None) => {
                self.lines.push(CartLine::new(self.policy.gift(), 1));
                debug!(gift = %gift_id, subtotal = %subtotal, "gift unlocked");
            }
            (false, Some(pos)) => {
                self.lines.remove(pos);
                debug!(gift = %gift_id, subtotal = %subtotal, "gift revoked");
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: u32, name: &str, price: f64) -> Product {
        Product::new(ProductId::new(id), name, Money::from_decimal(price))
    }

    fn gift() -> Product {
        Product::new(ProductId::new(99), "Wireless Mouse", Money::ZERO)
    }

    fn engine() -> CartEngine {
        let catalog = Catalog::new(vec![
            product(1, "Laptop", 500.0),
            product(2, "Smartphone", 300.0),
            product(3, "Headphones", 100.0),
            product(4, "Smartwatch", 150.0),
        ])
        .unwrap();
        let policy = GiftPolicy::new(gift(), Money::from_decimal(1000.0)).unwrap();
        CartEngine::new(catalog, policy).unwrap()
    }

    fn catalog_product(engine: &CartEngine, id: u32) -> Product {
        engine.catalog().get(ProductId::new(id)).cloned().unwrap()
    }

    #[test]
    fn test_add_one_to_empty_cart() {
        let mut engine = engine();
        let laptop = catalog_product(&engine, 1);

        engine.add_one(&laptop).unwrap();

        assert_eq!(engine.quantity_of(laptop.id), 1);
        assert_eq!(engine.subtotal().cents(), 50000);
        assert!(!engine.gift_present());
    }

    #[test]
    fn test_add_one_increments_existing_line() {
        let mut engine = engine();
        let laptop = catalog_product(&engine, 1);

        engine.add_one(&laptop).unwrap();
        engine.add_one(&laptop).unwrap();

        assert_eq!(engine.quantity_of(laptop.id), 2);
        assert_eq!(engine.unique_item_count(), 1);
    }

    #[test]
    fn test_gift_added_when_threshold_reached() {
        let mut engine = engine();
        for id in 1..=4 {
            let p = catalog_product(&engine, id);
            engine.add_one(&p).unwrap();
        }

        // 500 + 300 + 100 + 150 = 1050 >= 1000
        assert_eq!(engine.subtotal().cents(), 105000);
        assert!(engine.gift_present());
        assert_eq!(engine.quantity_of(ProductId::new(99)), 1);
        assert_eq!(engine.item_count(), 5);

        let gift_line = engine
            .lines()
            .iter()
            .find(|l| l.product_id == ProductId::new(99))
            .unwrap();
        assert_eq!(gift_line.quantity, 1);
        assert!(gift_line.unit_price.is_zero());
    }

    #[test]
    fn test_gift_removed_when_subtotal_drops() {
        let mut engine = engine();
        for id in 1..=4 {
            let p = catalog_product(&engine, id);
            engine.add_one(&p).unwrap();
        }
        assert!(engine.gift_present());

        let smartwatch = catalog_product(&engine, 4);
        engine.adjust_quantity(&smartwatch, -1).unwrap();

        // 1050 - 150 = 900 < 1000
        assert_eq!(engine.subtotal().cents(), 90000);
        assert!(!engine.gift_present());
    }

    #[test]
    fn test_adjust_on_empty_cart_is_noop() {
        let mut engine = engine();
        let laptop = catalog_product(&engine, 1);

        engine.adjust_quantity(&laptop, -1).unwrap();

        assert!(engine.is_empty());
        assert_eq!(engine.quantity_of(laptop.id), 0);
    }

    #[test]
    fn test_adjust_inserts_when_absent_and_positive() {
        let mut engine = engine();
        let headphones = catalog_product(&engine, 3);

        engine.adjust_quantity(&headphones, 3).unwrap();

        assert_eq!(engine.quantity_of(headphones.id), 3);
    }

    #[test]
    fn test_adjust_to_zero_removes_line() {
        let mut engine = engine();
        let laptop = catalog_product(&engine, 1);
        let smartphone = catalog_product(&engine, 2);
        let headphones = catalog_product(&engine, 3);

        engine.add_one(&laptop).unwrap();
        engine.add_one(&smartphone).unwrap();
        engine.add_one(&headphones).unwrap();
        engine.adjust_quantity(&smartphone, -1).unwrap();

        assert_eq!(engine.quantity_of(smartphone.id), 0);
        let ids: Vec<_> = engine.lines().iter().map(|l| l.product_id.get()).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn test_adjust_below_zero_removes_line() {
        let mut engine = engine();
        let laptop = catalog_product(&engine, 1);

        engine.add_with_quantity(&laptop, 2).unwrap();
        engine.adjust_quantity(&laptop, -5).unwrap();

        assert!(engine.is_empty());
    }

    #[test]
    fn test_add_with_quantity_merges() {
        let mut engine = engine();
        let smartphone = catalog_product(&engine, 2);

        engine.add_with_quantity(&smartphone, 2).unwrap();
        engine.add_with_quantity(&smartphone, 3).unwrap();

        assert_eq!(engine.quantity_of(smartphone.id), 5);
        assert_eq!(engine.unique_item_count(), 1);
    }

    #[test]
    fn test_add_with_quantity_rejects_non_positive() {
        let mut engine = engine();
        let laptop = catalog_product(&engine, 1);

        assert!(matches!(
            engine.add_with_quantity(&laptop, 0),
            Err(CartError::InvalidQuantity(0))
        ));
        assert!(matches!(
            engine.add_with_quantity(&laptop, -2),
            Err(CartError::InvalidQuantity(-2))
        ));
        assert!(engine.is_empty());
    }

    #[test]
    fn test_add_with_quantity_can_cross_threshold() {
        let mut engine = engine();
        let smartphone = catalog_product(&engine, 2);

        engine.add_with_quantity(&smartphone, 4).unwrap();

        // 4 x 300 = 1200 >= 1000
        assert!(engine.gift_present());
        assert_eq!(engine.subtotal().cents(), 120000);
    }

    #[test]
    fn test_removing_whole_line_revokes_gift() {
        let mut engine = engine();
        let laptop = catalog_product(&engine, 1);

        engine.add_with_quantity(&laptop, 2).unwrap();
        assert!(engine.gift_present());

        engine.adjust_quantity(&laptop, -2).unwrap();
        assert!(!engine.gift_present());
        assert!(engine.is_empty());
    }

    #[test]
    fn test_gift_rule_is_idempotent_across_mutations() {
        let mut engine = engine();
        let laptop = catalog_product(&engine, 1);
        let headphones = catalog_product(&engine, 3);

        engine.add_with_quantity(&laptop, 2).unwrap();
        engine.add_one(&headphones).unwrap();
        engine.add_one(&headphones).unwrap();

        // Subtotal stayed above the threshold the whole time; still one gift line.
        let gift_lines = engine
            .lines()
            .iter()
            .filter(|l| l.product_id == ProductId::new(99))
            .count();
        assert_eq!(gift_lines, 1);
    }

    #[test]
    fn test_gift_id_is_rejected() {
        let mut engine = engine();
        let laptop = catalog_product(&engine, 1);

        engine.add_with_quantity(&laptop, 2).unwrap();
        assert!(engine.gift_present());

        assert!(matches!(
            engine.add_one(&gift()),
            Err(CartError::ReservedProduct(_))
        ));
        assert!(matches!(
            engine.adjust_quantity(&gift(), -1),
            Err(CartError::ReservedProduct(_))
        ));
        assert_eq!(engine.quantity_of(ProductId::new(99)), 1);
    }

    #[test]
    fn test_unknown_product_is_rejected() {
        let mut engine = engine();
        let stranger = product(42, "Toaster", 80.0);

        assert!(matches!(
            engine.add_one(&stranger),
            Err(CartError::UnknownProduct(_))
        ));
        assert!(engine.is_empty());
    }

    #[test]
    fn test_tampered_price_is_ignored() {
        let mut engine = engine();
        let tampered = product(1, "Laptop", 0.01);

        engine.add_one(&tampered).unwrap();

        // The catalog's price wins.
        assert_eq!(engine.subtotal().cents(), 50000);
    }

    #[test]
    fn test_quantity_cap() {
        let mut engine = engine();
        let headphones = catalog_product(&engine, 3);

        assert!(matches!(
            engine.add_with_quantity(&headphones, MAX_QUANTITY_PER_LINE + 1),
            Err(CartError::QuantityExceedsLimit(_, _))
        ));
        assert!(engine.is_empty());

        engine
            .add_with_quantity(&headphones, MAX_QUANTITY_PER_LINE)
            .unwrap();
        assert!(matches!(
            engine.add_one(&headphones),
            Err(CartError::QuantityExceedsLimit(_, _))
        ));
        assert_eq!(engine.quantity_of(headphones.id), MAX_QUANTITY_PER_LINE);
    }

    #[test]
    fn test_progress_percent() {
        let mut engine = engine();
        let smartwatch = catalog_product(&engine, 4);
        let smartphone = catalog_product(&engine, 2);
        let headphones = catalog_product(&engine, 3);

        assert!((engine.progress_percent() - 0.0).abs() < 1e-9);

        // 100 + 150 = 250 -> 25%
        engine.add_one(&smartwatch).unwrap();
        engine.add_one(&headphones).unwrap();
        assert!((engine.progress_percent() - 25.0).abs() < 1e-9);

        // 250 + 4 x 300 = 1450 -> capped at 100
        engine.add_with_quantity(&smartphone, 4).unwrap();
        assert!((engine.progress_percent() - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_gift_remaining() {
        let mut engine = engine();
        let laptop = catalog_product(&engine, 1);

        assert_eq!(engine.gift_remaining().cents(), 100000);

        engine.add_one(&laptop).unwrap();
        assert_eq!(engine.gift_remaining().cents(), 50000);

        engine.add_one(&laptop).unwrap();
        assert!(engine.gift_remaining().is_zero());
    }

    #[test]
    fn test_engine_rejects_gift_id_collision() {
        let catalog = Catalog::new(vec![product(99, "Imposter", 10.0)]).unwrap();
        let policy = GiftPolicy::new(gift(), Money::from_decimal(1000.0)).unwrap();

        assert!(matches!(
            CartEngine::new(catalog, policy),
            Err(CartError::Validation(_))
        ));
    }
}
