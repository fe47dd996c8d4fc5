//! Newtype identifiers for catalog entities.
//!
//! Using newtypes prevents mixing up a product handle with a variant id
//! when both travel through the cart pipeline.

use serde::{Deserialize, Serialize};
use std::fmt;

/// URL handle identifying a product on the storefront
/// (e.g. `soft-winter-jacket`).
///
/// Handles parameterize the product detail resource path; they are opaque
/// strings as far as this crate is concerned.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductHandle(String);

impl ProductHandle {
    /// Create a handle from a string.
    pub fn new(handle: impl Into<String>) -> Self {
        Self(handle.into())
    }

    /// Get the handle as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume and return the inner string.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for ProductHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for ProductHandle {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for ProductHandle {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl AsRef<str> for ProductHandle {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Numeric identifier of a purchasable variant, as used by the cart-add
/// resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VariantId(i64);

impl VariantId {
    /// Create a variant id from its numeric value.
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    /// Get the numeric value.
    pub fn value(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for VariantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for VariantId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_handle_creation() {
        let handle = ProductHandle::new("soft-winter-jacket");
        assert_eq!(handle.as_str(), "soft-winter-jacket");
    }

    #[test]
    fn test_handle_display() {
        let handle: ProductHandle = "crew-tee".into();
        assert_eq!(format!("{}", handle), "crew-tee");
    }

    #[test]
    fn test_variant_id_roundtrip() {
        let id = VariantId::new(40521);
        assert_eq!(id.value(), 40521);
        assert_eq!(format!("{}", id), "40521");
    }

    #[test]
    fn test_variant_id_serializes_as_number() {
        let id = VariantId::new(7);
        assert_eq!(serde_json::to_string(&id).unwrap(), "7");
        let back: VariantId = serde_json::from_str("7").unwrap();
        assert_eq!(back, id);
    }
}
