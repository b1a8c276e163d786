//! Derived cart totals.

use serde::{Deserialize, Serialize};

use crate::cart::CartItem;
use crate::money::Money;

/// Sales tax rate applied to the subtotal.
pub const TAX_RATE: f64 = 0.08;

/// Subtotal above which shipping is free, in cents.
pub const FREE_SHIPPING_OVER_CENTS: i64 = 5_000;

/// Flat shipping rate below the free threshold, in cents.
pub const FLAT_SHIPPING_CENTS: i64 = 999;

/// The derived fields of a cart.
///
/// Persisted alongside the item list for display continuity, but never
/// trusted on load: callers recompute from the items.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CartTotals {
    #[serde(default)]
    pub subtotal: Money,
    #[serde(default)]
    pub tax: Money,
    #[serde(default)]
    pub shipping: Money,
    #[serde(default)]
    pub total: Money,
    #[serde(default)]
    pub item_count: u32,
}

impl CartTotals {
    /// Compute totals from an item list.
    ///
    /// Line totals and the subtotal are exact in cents; tax is rounded
    /// once from the subtotal; shipping is a flat rate below the free
    /// threshold. The grand total sums the already-settled components, so
    /// repeated recomputation cannot drift.
    pub fn compute(items: &[CartItem]) -> Self {
        let Some(first) = items.first() else {
            // An empty cart has nothing to price or ship.
            return Self::default();
        };

        let currency = first.product.price.currency;
        let subtotal = Money::sum(items.iter().map(CartItem::line_total), currency);
        let tax = subtotal.multiply_decimal(TAX_RATE);
        let shipping = if subtotal.amount_cents > FREE_SHIPPING_OVER_CENTS {
            Money::zero(currency)
        } else {
            Money::new(FLAT_SHIPPING_CENTS, currency)
        };

        Self {
            subtotal,
            tax,
            shipping,
            total: subtotal + tax + shipping,
            item_count: items.iter().map(|i| i.quantity).sum(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::CatalogStore;
    use crate::catalog::Product;
    use crate::money::Currency;

    fn priced_product(cents: i64) -> Product {
        let mut product = CatalogStore::sample().products()[0].clone();
        product.price = Money::new(cents, Currency::USD);
        product.variants = None;
        product
    }

    #[test]
    fn test_totals_below_free_shipping() {
        // One $40.00 item: tax 3.20, shipping 9.99, total 52.99.
        let items = vec![CartItem::new(&priced_product(4_000), 1, None)];
        let totals = CartTotals::compute(&items);

        assert_eq!(totals.subtotal.amount_cents, 4_000);
        assert_eq!(totals.tax.amount_cents, 320);
        assert_eq!(totals.shipping.amount_cents, 999);
        assert_eq!(totals.total.amount_cents, 5_299);
        assert_eq!(totals.item_count, 1);
    }

    #[test]
    fn test_totals_above_free_shipping() {
        // Same item at quantity 2: subtotal 80.00 clears the threshold.
        let items = vec![CartItem::new(&priced_product(4_000), 2, None)];
        let totals = CartTotals::compute(&items);

        assert_eq!(totals.subtotal.amount_cents, 8_000);
        assert_eq!(totals.tax.amount_cents, 640);
        assert_eq!(totals.shipping.amount_cents, 0);
        assert_eq!(totals.total.amount_cents, 8_640);
        assert_eq!(totals.item_count, 2);
    }

    #[test]
    fn test_threshold_is_exclusive() {
        // A subtotal of exactly $50.00 still pays shipping.
        let items = vec![CartItem::new(&priced_product(5_000), 1, None)];
        let totals = CartTotals::compute(&items);
        assert_eq!(totals.shipping.amount_cents, FLAT_SHIPPING_CENTS);
    }

    #[test]
    fn test_empty_cart_is_all_zero() {
        let totals = CartTotals::compute(&[]);
        assert_eq!(totals, CartTotals::default());
        assert!(totals.shipping.is_zero());
    }

    #[test]
    fn test_recomputation_is_pure() {
        let items = vec![
            CartItem::new(&priced_product(1_299), 3, None),
            CartItem::new(&priced_product(4_000), 1, None),
        ];
        assert_eq!(CartTotals::compute(&items), CartTotals::compute(&items));
    }

    #[test]
    fn test_variant_override_feeds_subtotal() {
        let catalog = CatalogStore::sample();
        let product = catalog.products()[0].clone();
        let variant = product.variants.clone().unwrap()[1].clone();
        assert!(variant.price.is_some());

        let items = vec![CartItem::new(&product, 1, Some(&variant))];
        let totals = CartTotals::compute(&items);
        assert_eq!(totals.subtotal, variant.price.unwrap());
    }
}
