//! Newtype ID for type-safe product identifiers.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A numeric product identifier.
///
/// The free-gift product carries a reserved id that never appears in the
/// catalog, so the id alone distinguishes paid lines from the gift line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(u32);

impl ProductId {
    /// Create an ID from a raw number.
    pub fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw numeric value.
    pub fn get(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for ProductId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}
