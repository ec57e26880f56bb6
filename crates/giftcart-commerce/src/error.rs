//! Cart error types.

use thiserror::Error;

use crate::ids::ProductId;

/// Errors that can occur in cart operations.
#[derive(Error, Debug)]
pub enum CartError {
    /// Product id not present in the trusted catalog.
    #[error("product not in catalog: {0}")]
    UnknownProduct(ProductId),

    /// The gift line is written only by the engine itself.
    #[error("product {0} is reserved for the gift promotion")]
    ReservedProduct(ProductId),

    /// Quantity must be positive.
    #[error("invalid quantity: {0}")]
    InvalidQuantity(i64),

    /// Quantity exceeds maximum allowed per line.
    #[error("quantity {0} exceeds maximum allowed ({1})")]
    QuantityExceedsLimit(i64, i64),

    /// Arithmetic overflow.
    #[error("arithmetic overflow in money calculation")]
    Overflow,

    /// Duplicate product id in the catalog.
    #[error("duplicate product id in catalog: {0}")]
    DuplicateProduct(ProductId),

    /// Validation error.
    #[error("validation error: {0}")]
    Validation(String),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

impl From<toml::de::Error> for CartError {
    fn from(e: toml::de::Error) -> Self {
        CartError::Config(e.to_string())
    }
}
