//! Cart state machine with write-through persistence.

use shopfront_store::{Store, StoreError};

use crate::cart::{Cart, CartItem};
use crate::catalog::{Product, ProductVariant};
use crate::ids::{CartItemId, ProductId, VariantId};
use crate::notice::Notice;

/// Store key the cart snapshot lives under.
pub const CART_KEY: &str = "cart";

/// Owns the session's cart and writes it through to the store after every
/// mutation.
///
/// Expected conditions (out-of-stock product, unknown line id) surface as
/// [`Notice`] values rather than errors; only store I/O can fail.
#[derive(Debug)]
pub struct CartEngine {
    cart: Cart,
    store: Store,
}

impl CartEngine {
    /// Restore the cart from the store, or start empty.
    ///
    /// Persisted derived totals are never trusted: the totals are
    /// recomputed from the restored item list. Malformed persisted data is
    /// logged and treated as an empty cart.
    pub fn load(store: Store) -> Self {
        let mut cart = match store.get::<Cart>(CART_KEY) {
            Ok(Some(cart)) => cart,
            Ok(None) => Cart::default(),
            Err(err) => {
                tracing::warn!(error = %err, "discarding unreadable cart state");
                Cart::default()
            }
        };
        cart.recalculate();
        Self { cart, store }
    }

    /// The current cart snapshot.
    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    /// The current line items, in insertion order.
    pub fn items(&self) -> &[CartItem] {
        &self.cart.items
    }

    /// Check if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.cart.is_empty()
    }

    /// Total item count (sum of quantities).
    pub fn item_count(&self) -> u32 {
        self.cart.item_count()
    }

    /// Check whether a (product, variant) pair is already in the cart.
    pub fn is_in_cart(&self, product_id: &ProductId, variant_id: Option<&VariantId>) -> bool {
        let key = CartItemId::merge_key(product_id, variant_id);
        self.cart.item(&key).is_some()
    }

    /// Add a product to the cart.
    ///
    /// Skips (with an out-of-stock notice) when the product, or the given
    /// variant, is unavailable. Adding a (product, variant) pair that is
    /// already in the cart increments the existing line's quantity instead
    /// of duplicating it.
    pub fn add_item(
        &mut self,
        product: &Product,
        quantity: u32,
        variant: Option<&ProductVariant>,
    ) -> Result<Notice, StoreError> {
        if !product.in_stock {
            return Ok(Notice::OutOfStock {
                product: product.name.clone(),
            });
        }
        if let Some(variant) = variant {
            if !variant.in_stock {
                return Ok(Notice::VariantOutOfStock {
                    product: product.name.clone(),
                    variant: variant.label(),
                });
            }
        }

        // Line quantities are at least 1.
        let quantity = quantity.max(1);
        let key = CartItemId::merge_key(&product.id, variant.map(|v| &v.id));
        match self.cart.items.iter_mut().find(|i| i.id == key) {
            Some(existing) => existing.quantity += quantity,
            None => self.cart.items.push(CartItem::new(product, quantity, variant)),
        }

        self.commit()?;
        Ok(Notice::AddedToCart {
            product: product.name.clone(),
        })
    }

    /// Remove a line item. Removing an unknown id is a no-op.
    pub fn remove_item(&mut self, item_id: &CartItemId) -> Result<Notice, StoreError> {
        self.cart.items.retain(|i| &i.id != item_id);
        self.commit()?;
        Ok(Notice::RemovedFromCart)
    }

    /// Set a line item's quantity directly.
    ///
    /// A quantity of zero collapses to removal. Updating an unknown id is
    /// a no-op.
    pub fn update_quantity(
        &mut self,
        item_id: &CartItemId,
        quantity: u32,
    ) -> Result<Notice, StoreError> {
        if quantity == 0 {
            return self.remove_item(item_id);
        }
        if let Some(item) = self.cart.items.iter_mut().find(|i| &i.id == item_id) {
            item.quantity = quantity;
        }
        self.commit()?;
        Ok(Notice::CartUpdated)
    }

    /// Empty the cart and zero the derived totals.
    pub fn clear(&mut self) -> Result<Notice, StoreError> {
        self.cart.items.clear();
        self.commit()?;
        Ok(Notice::CartCleared)
    }

    /// Write the current snapshot through to the store.
    ///
    /// Called after every mutation; also the explicit teardown hook for
    /// session end.
    pub fn persist(&self) -> Result<(), StoreError> {
        self.store.set(CART_KEY, &self.cart)
    }

    fn commit(&mut self) -> Result<(), StoreError> {
        self.cart.recalculate();
        self.persist()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::CatalogStore;

    fn engine() -> (tempfile::TempDir, CartEngine, CatalogStore) {
        let dir = tempfile::tempdir().unwrap();
        let store = Store::open(dir.path()).unwrap();
        (dir, CartEngine::load(store), CatalogStore::sample())
    }

    #[test]
    fn test_starts_empty() {
        let (_dir, engine, _catalog) = engine();
        assert!(engine.is_empty());
        assert_eq!(engine.item_count(), 0);
    }

    #[test]
    fn test_add_merges_by_key() {
        let (_dir, mut engine, catalog) = engine();
        let product = &catalog.products()[1];

        engine.add_item(product, 1, None).unwrap();
        engine.add_item(product, 2, None).unwrap();

        assert_eq!(engine.items().len(), 1);
        assert_eq!(engine.items()[0].quantity, 3);
        assert_eq!(engine.item_count(), 3);
    }

    #[test]
    fn test_variants_are_separate_lines() {
        let (_dir, mut engine, catalog) = engine();
        let product = &catalog.products()[0];
        let variants = product.variants.clone().unwrap();

        engine.add_item(product, 1, Some(&variants[0])).unwrap();
        engine.add_item(product, 1, Some(&variants[1])).unwrap();

        assert_eq!(engine.items().len(), 2);
        assert!(engine.is_in_cart(&product.id, Some(&variants[0].id)));
        assert!(engine.is_in_cart(&product.id, Some(&variants[1].id)));
        assert!(!engine.is_in_cart(&product.id, None));
    }

    #[test]
    fn test_out_of_stock_is_a_skip() {
        let (_dir, mut engine, catalog) = engine();
        let product = catalog
            .products()
            .iter()
            .find(|p| !p.in_stock)
            .expect("sample catalog has an out-of-stock product");

        let notice = engine.add_item(product, 1, None).unwrap();
        assert!(notice.is_skip());
        assert!(engine.is_empty());
    }

    #[test]
    fn test_out_of_stock_variant_is_a_skip() {
        let (_dir, mut engine, catalog) = engine();
        let mut product = catalog.products()[0].clone();
        product.in_stock = true;
        let mut variant = product.variants.clone().unwrap()[0].clone();
        variant.in_stock = false;

        let notice = engine.add_item(&product, 1, Some(&variant)).unwrap();
        assert_eq!(
            notice,
            Notice::VariantOutOfStock {
                product: product.name.clone(),
                variant: variant.label(),
            }
        );
        assert!(engine.is_empty());
    }

    #[test]
    fn test_remove_unknown_id_is_noop() {
        let (_dir, mut engine, catalog) = engine();
        engine.add_item(&catalog.products()[1], 1, None).unwrap();
        let before = engine.cart().clone();

        engine.remove_item(&CartItemId::new("no-such-line")).unwrap();
        assert_eq!(engine.cart().items, before.items);
        assert_eq!(engine.cart().totals, before.totals);
    }

    #[test]
    fn test_update_quantity_sets_directly() {
        let (_dir, mut engine, catalog) = engine();
        engine.add_item(&catalog.products()[1], 2, None).unwrap();
        let id = engine.items()[0].id.clone();

        engine.update_quantity(&id, 5).unwrap();
        assert_eq!(engine.items()[0].quantity, 5);
        assert_eq!(engine.item_count(), 5);
    }

    #[test]
    fn test_update_quantity_zero_collapses_to_removal() {
        let (_dir, mut engine, catalog) = engine();
        let product = &catalog.products()[1];

        engine.add_item(product, 2, None).unwrap();
        let id = engine.items()[0].id.clone();
        engine.update_quantity(&id, 0).unwrap();
        let via_update = engine.cart().clone();

        engine.add_item(product, 2, None).unwrap();
        let id = engine.items()[0].id.clone();
        engine.remove_item(&id).unwrap();

        assert_eq!(engine.cart().items, via_update.items);
        assert_eq!(engine.cart().totals, via_update.totals);
        assert!(engine.is_empty());
    }

    #[test]
    fn test_clear_zeroes_totals() {
        let (_dir, mut engine, catalog) = engine();
        engine.add_item(&catalog.products()[1], 2, None).unwrap();
        assert!(engine.cart().totals.total.is_positive());

        engine.clear().unwrap();
        assert!(engine.is_empty());
        assert!(engine.cart().totals.total.is_zero());
        assert_eq!(engine.item_count(), 0);
    }

    #[test]
    fn test_reload_restores_items() {
        let dir = tempfile::tempdir().unwrap();
        let catalog = CatalogStore::sample();
        {
            let mut engine = CartEngine::load(Store::open(dir.path()).unwrap());
            engine.add_item(&catalog.products()[1], 2, None).unwrap();
        }

        let engine = CartEngine::load(Store::open(dir.path()).unwrap());
        assert_eq!(engine.items().len(), 1);
        assert_eq!(engine.item_count(), 2);
    }

    #[test]
    fn test_malformed_persisted_state_degrades_to_empty() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("cart.json"), b"]{ corrupt").unwrap();

        let engine = CartEngine::load(Store::open(dir.path()).unwrap());
        assert!(engine.is_empty());
        assert!(engine.cart().totals.total.is_zero());
    }
}
