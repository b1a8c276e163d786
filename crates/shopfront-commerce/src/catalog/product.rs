//! Product and variant types.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::ids::{CategoryId, ProductId, VariantId};
use crate::money::Money;

/// A product in the catalog.
///
/// Catalog records are immutable after load; cart and wishlist entries
/// embed a clone taken at add time.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// Product name.
    pub name: String,
    /// Full description.
    pub description: String,
    /// Current selling price.
    pub price: Money,
    /// Pre-discount price; present and greater than `price` when the
    /// product is on sale.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_price: Option<Money>,
    /// Ordered image references, never empty.
    pub images: Vec<String>,
    /// Category this product belongs to.
    pub category: CategoryId,
    /// Optional subcategory name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subcategory: Option<String>,
    /// Brand name.
    pub brand: String,
    /// Average rating, 0.0–5.0.
    pub rating: f64,
    /// Number of reviews behind the rating.
    pub review_count: u32,
    /// Merchandising availability flag. Supplied independently of
    /// `stock_quantity`; the engines never assume the two agree.
    pub in_stock: bool,
    /// Units on hand.
    pub stock_quantity: u32,
    /// Tags for filtering/search.
    pub tags: Vec<String>,
    /// Ordered feature bullet points.
    pub features: Vec<String>,
    /// Key/value specification table.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub specifications: Option<BTreeMap<String, String>>,
    /// Purchasable variants, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variants: Option<Vec<ProductVariant>>,
    /// When the product was listed.
    pub created_at: DateTime<Utc>,
    /// When the product record last changed.
    pub updated_at: DateTime<Utc>,
}

impl Product {
    /// Check if this product is on sale (original price above current).
    pub fn is_on_sale(&self) -> bool {
        self.original_price
            .map(|orig| orig.amount_cents > self.price.amount_cents)
            .unwrap_or(false)
    }

    /// Calculate the discount percentage if on sale.
    pub fn discount_percentage(&self) -> Option<f64> {
        self.original_price.and_then(|orig| {
            if orig.amount_cents > self.price.amount_cents {
                let savings = orig.amount_cents - self.price.amount_cents;
                Some((savings as f64 / orig.amount_cents as f64) * 100.0)
            } else {
                None
            }
        })
    }

    /// Check if this product has purchasable variants.
    pub fn has_variants(&self) -> bool {
        self.variants.as_ref().map(|v| !v.is_empty()).unwrap_or(false)
    }

    /// Look up a variant by ID.
    pub fn variant(&self, id: &VariantId) -> Option<&ProductVariant> {
        self.variants
            .as_deref()
            .and_then(|variants| variants.iter().find(|v| &v.id == id))
    }
}

/// A product variant: one attribute/value choice (e.g. Storage: 256GB).
///
/// A variant never exists independent of its parent product.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProductVariant {
    /// Unique variant identifier.
    pub id: VariantId,
    /// Attribute name (e.g., "Storage").
    pub name: String,
    /// Attribute value (e.g., "256GB").
    pub value: String,
    /// Price override; the parent product's price applies when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<Money>,
    /// Availability flag for this variant.
    pub in_stock: bool,
    /// Units on hand for this variant.
    pub stock_quantity: u32,
}

impl ProductVariant {
    /// Display label, e.g. "Storage: 256GB".
    pub fn label(&self) -> String {
        format!("{}: {}", self.name, self.value)
    }
}
