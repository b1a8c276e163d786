//! Newtype IDs for type-safe identifiers.
//!
//! Using newtypes prevents accidentally mixing up different ID types,
//! e.g., passing a ProductId where a CategoryId is expected.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Macro to generate newtype ID structs.
macro_rules! define_id {
    ($name:ident) => {
        /// A unique identifier.
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub struct $name(String);

        impl $name {
            /// Create a new ID from a string.
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Get the ID as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Consume and return the inner string.
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self(s)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self(s.to_string())
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

define_id!(ProductId);
define_id!(VariantId);
define_id!(CategoryId);
define_id!(CartItemId);
define_id!(WishlistItemId);

impl CartItemId {
    /// Derive the merge key for a cart line: `{product}-{variant}`, with
    /// `default` standing in when no variant is selected.
    ///
    /// Adding the same (product, variant) pair twice resolves to the same
    /// key, so it updates the existing line instead of duplicating it.
    pub fn merge_key(product_id: &ProductId, variant_id: Option<&VariantId>) -> Self {
        let variant = variant_id.map(VariantId::as_str).unwrap_or("default");
        Self(format!("{}-{}", product_id.as_str(), variant))
    }
}

impl WishlistItemId {
    /// Derive the wishlist entry ID for a product.
    pub fn for_product(product_id: &ProductId) -> Self {
        Self(format!("wishlist-{}", product_id.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_creation() {
        let id = ProductId::new("prod-123");
        assert_eq!(id.as_str(), "prod-123");
    }

    #[test]
    fn test_id_display() {
        let id = CategoryId::new("electronics");
        assert_eq!(format!("{}", id), "electronics");
    }

    #[test]
    fn test_id_from_string() {
        let id: ProductId = "prod-456".into();
        assert_eq!(id.as_str(), "prod-456");
    }

    #[test]
    fn test_merge_key_with_variant() {
        let key = CartItemId::merge_key(&ProductId::new("p1"), Some(&VariantId::new("v2")));
        assert_eq!(key.as_str(), "p1-v2");
    }

    #[test]
    fn test_merge_key_without_variant() {
        let key = CartItemId::merge_key(&ProductId::new("p1"), None);
        assert_eq!(key.as_str(), "p1-default");
    }

    #[test]
    fn test_merge_key_is_deterministic() {
        let a = CartItemId::merge_key(&ProductId::new("p1"), Some(&VariantId::new("v1")));
        let b = CartItemId::merge_key(&ProductId::new("p1"), Some(&VariantId::new("v1")));
        assert_eq!(a, b);
    }

    #[test]
    fn test_wishlist_id_prefix() {
        let id = WishlistItemId::for_product(&ProductId::new("p7"));
        assert_eq!(id.as_str(), "wishlist-p7");
    }
}
