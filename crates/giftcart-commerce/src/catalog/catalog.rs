//! The static product catalog.

use crate::catalog::Product;
use crate::error::CartError;
use crate::ids::ProductId;
use serde::Serialize;

/// A static, trusted set of products, unique by id.
///
/// Construction validates the set once; afterwards the catalog is immutable,
/// so lookups never need to re-check invariants.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Build a catalog from a list of products.
    ///
    /// Returns an error if:
    /// - Two products share an id
    /// - A product has a negative price
    pub fn new(products: Vec<Product>) -> Result<Self, CartError> {
        for (i, product) in products.iter().enumerate() {
            if products[..i].iter().any(|p| p.id == product.id) {
                return Err(CartError::DuplicateProduct(product.id));
            }
            if product.price.is_negative() {
                return Err(CartError::Validation(format!(
                    "product {} has a negative price",
                    product.id
                )));
            }
        }
        Ok(Self { products })
    }

    /// Look up a product by id.
    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Check whether an id belongs to the catalog.
    pub fn contains(&self, id: ProductId) -> bool {
        self.get(id).is_some()
    }

    /// All products, in catalog order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Number of products.
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Check if the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}
