//! Cart and line item types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::cart::CartTotals;
use crate::catalog::{Product, ProductVariant};
use crate::ids::{CartItemId, ProductId};
use crate::money::Money;

/// A line item in the cart: one product (plus optional variant) and its
/// quantity.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    /// Merge key, derived from product and variant IDs.
    pub id: CartItemId,
    /// Product ID, duplicated out of the snapshot for cheap lookups.
    pub product_id: ProductId,
    /// Product snapshot taken at add time.
    pub product: Product,
    /// Quantity, at least 1.
    pub quantity: u32,
    /// The selected variant, if one was chosen.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selected_variant: Option<ProductVariant>,
    /// When the line was first added.
    pub added_at: DateTime<Utc>,
}

impl CartItem {
    /// Create a new line item with a fresh timestamp.
    pub fn new(product: &Product, quantity: u32, variant: Option<&ProductVariant>) -> Self {
        Self {
            id: CartItemId::merge_key(&product.id, variant.map(|v| &v.id)),
            product_id: product.id.clone(),
            product: product.clone(),
            quantity,
            selected_variant: variant.cloned(),
            added_at: Utc::now(),
        }
    }

    /// Variant price override when present, base product price otherwise.
    pub fn unit_price(&self) -> Money {
        self.selected_variant
            .as_ref()
            .and_then(|v| v.price)
            .unwrap_or(self.product.price)
    }

    /// Line total: unit price times quantity.
    pub fn line_total(&self) -> Money {
        self.unit_price().multiply(self.quantity as i64)
    }
}

/// The shopping cart: ordered line items plus derived totals.
///
/// The totals are always a pure function of `items`; they are recomputed
/// after every mutation and on load, never edited directly.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Cart {
    /// Line items, in insertion order.
    pub items: Vec<CartItem>,
    /// Derived totals. Flattened so the persisted layout is
    /// `{ items, subtotal, tax, shipping, total, itemCount }`.
    #[serde(flatten)]
    pub totals: CartTotals,
}

impl Cart {
    /// Recompute the derived totals from the item list.
    pub fn recalculate(&mut self) {
        self.totals = CartTotals::compute(&self.items);
    }

    /// Look up a line item by merge key.
    pub fn item(&self, id: &CartItemId) -> Option<&CartItem> {
        self.items.iter().find(|i| &i.id == id)
    }

    /// Total item count (sum of quantities).
    pub fn item_count(&self) -> u32 {
        self.totals.item_count
    }

    /// Check if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::CatalogStore;

    #[test]
    fn test_unit_price_prefers_variant_override() {
        let catalog = CatalogStore::sample();
        let product = catalog.products()[0].clone();
        let variants = product.variants.clone().unwrap();

        let base = CartItem::new(&product, 1, Some(&variants[0]));
        assert_eq!(base.unit_price(), product.price);

        let override_priced = CartItem::new(&product, 1, Some(&variants[1]));
        assert_eq!(override_priced.unit_price(), variants[1].price.unwrap());
    }

    #[test]
    fn test_line_total() {
        let catalog = CatalogStore::sample();
        let product = &catalog.products()[1];
        let item = CartItem::new(product, 3, None);
        assert_eq!(
            item.line_total().amount_cents,
            product.price.amount_cents * 3
        );
    }

    #[test]
    fn test_recalculate_overwrites_totals() {
        let catalog = CatalogStore::sample();
        let mut cart = Cart::default();
        cart.items.push(CartItem::new(&catalog.products()[1], 1, None));

        cart.recalculate();
        let first = cart.totals.clone();
        cart.recalculate();
        assert_eq!(cart.totals, first);
    }
}
