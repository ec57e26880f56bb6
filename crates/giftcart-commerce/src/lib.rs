//! Shopping cart engine with a free-gift threshold promotion.
//!
//! This crate provides the domain types for a small storefront cart:
//!
//! - **Catalog**: a static, trusted set of products
//! - **Cart**: ordered line items, one per product, with derived totals
//! - **Promotion**: a free gift that is added automatically once the paid
//!   subtotal reaches a configured threshold, and removed when it drops back
//! - **Config**: TOML bootstrap for catalog, gift descriptor, and threshold
//!
//! # Example
//!
//! ```
//! use giftcart_commerce::prelude::*;
//!
//! let mut engine = StoreConfig::default().into_engine()?;
//! let laptop = engine.catalog().get(ProductId::new(1)).cloned().unwrap();
//!
//! engine.add_one(&laptop)?;
//! assert_eq!(engine.quantity_of(laptop.id), 1);
//! assert_eq!(engine.subtotal(), Money::from_decimal(500.0));
//! assert!(!engine.gift_present());
//! # Ok::<(), CartError>(())
//! ```

pub mod config;
pub mod error;
pub mod ids;
pub mod money;

pub mod cart;
pub mod catalog;

pub use error::CartError;
pub use ids::ProductId;
pub use money::Money;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CartError;
    pub use crate::ids::ProductId;
    pub use crate::money::Money;

    // Catalog
    pub use crate::catalog::{Catalog, Product};

    // Cart
    pub use crate::cart::{CartEngine, CartLine, GiftPolicy, MAX_QUANTITY_PER_LINE};

    // Config
    pub use crate::config::{ProductEntry, StoreConfig};
}
