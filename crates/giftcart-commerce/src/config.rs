//! Store bootstrap configuration.
//!
//! The catalog, gift descriptor, and threshold are static configuration
//! consumed once at startup: either parsed from a TOML document or taken
//! from the built-in default store.
//!
//! ```toml
//! threshold = 1000.0
//!
//! [free_gift]
//! id = 99
//! name = "Wireless Mouse"
//! price = 0.0
//!
//! [[catalog]]
//! id = 1
//! name = "Laptop"
//! price = 500.0
//! ```

use crate::cart::{CartEngine, GiftPolicy};
use crate::catalog::{Catalog, Product};
use crate::error::CartError;
use crate::ids::ProductId;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// One product entry in the config file.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProductEntry {
    /// Numeric product id, unique across catalog and gift.
    pub id: u32,
    /// Display name.
    pub name: String,
    /// Price as a decimal amount.
    pub price: f64,
}

impl ProductEntry {
    fn to_product(&self) -> Product {
        Product::new(
            ProductId::new(self.id),
            self.name.clone(),
            Money::from_decimal(self.price),
        )
    }
}

/// Full store configuration: gift threshold, gift descriptor, and catalog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StoreConfig {
    /// Paid subtotal that unlocks the free gift, as a decimal amount.
    pub threshold: f64,
    /// The free-gift product. Its id must not appear in the catalog and its
    /// price must be zero.
    pub free_gift: ProductEntry,
    /// The product catalog.
    pub catalog: Vec<ProductEntry>,
}

impl StoreConfig {
    /// Parse a config from a TOML document.
    pub fn from_toml_str(raw: &str) -> Result<Self, CartError> {
        Ok(toml::from_str(raw)?)
    }

    /// Build a ready-to-use engine, surfacing any validation failure.
    pub fn into_engine(self) -> Result<CartEngine, CartError> {
        let products = self.catalog.iter().map(ProductEntry::to_product).collect();
        let catalog = Catalog::new(products)?;
        let policy = GiftPolicy::new(
            self.free_gift.to_product(),
            Money::from_decimal(self.threshold),
        )?;
        CartEngine::new(catalog, policy)
    }
}

impl Default for StoreConfig {
    /// The built-in store: four products, a free wireless mouse at $1000.
    fn default() -> Self {
        Self {
            threshold: 1000.0,
            free_gift: ProductEntry {
                id: 99,
                name: "Wireless Mouse".to_string(),
                price: 0.0,
            },
            catalog: vec![
                ProductEntry {
                    id: 1,
                    name: "Laptop".to_string(),
                    price: 500.0,
                },
                ProductEntry {
                    id: 2,
                    name: "Smartphone".to_string(),
                    price: 300.0,
                },
                ProductEntry {
                    id: 3,
                    name: "Headphones".to_string(),
                    price: 100.0,
                },
                ProductEntry {
                    id: 4,
                    name: "Smartwatch".to_string(),
                    price: 150.0,
                },
            ],
        }
    }
}
