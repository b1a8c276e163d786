//! Wishlist state machine with write-through persistence.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use shopfront_store::{Store, StoreError};

use crate::catalog::Product;
use crate::ids::{ProductId, WishlistItemId};
use crate::notice::Notice;

/// Store key the wishlist snapshot lives under.
pub const WISHLIST_KEY: &str = "wishlist";

/// A saved product.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WishlistItem {
    /// Entry ID, derived from the product ID.
    pub id: WishlistItemId,
    /// The saved product's ID.
    pub product_id: ProductId,
    /// Product snapshot taken at save time.
    pub product: Product,
    /// When the product was saved.
    pub added_at: DateTime<Utc>,
}

/// Owns the session's wishlist: at most one entry per product, persisted
/// as a bare array after every mutation.
#[derive(Debug)]
pub struct WishlistEngine {
    items: Vec<WishlistItem>,
    store: Store,
}

impl WishlistEngine {
    /// Restore the wishlist from the store, or start empty. Malformed
    /// persisted data is logged and treated as an empty wishlist.
    pub fn load(store: Store) -> Self {
        let items = match store.get::<Vec<WishlistItem>>(WISHLIST_KEY) {
            Ok(Some(items)) => items,
            Ok(None) => Vec::new(),
            Err(err) => {
                tracing::warn!(error = %err, "discarding unreadable wishlist state");
                Vec::new()
            }
        };
        Self { items, store }
    }

    /// The saved entries, in insertion order.
    pub fn items(&self) -> &[WishlistItem] {
        &self.items
    }

    /// Number of saved products.
    pub fn count(&self) -> usize {
        self.items.len()
    }

    /// Check if the wishlist is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Check whether a product is saved.
    pub fn is_in_wishlist(&self, product_id: &ProductId) -> bool {
        self.items.iter().any(|i| &i.product_id == product_id)
    }

    /// Save a product. Saving one that is already present is a no-op with
    /// an already-saved notice.
    pub fn add_item(&mut self, product: &Product) -> Result<Notice, StoreError> {
        if self.is_in_wishlist(&product.id) {
            return Ok(Notice::AlreadyInWishlist {
                product: product.name.clone(),
            });
        }

        self.items.push(WishlistItem {
            id: WishlistItemId::for_product(&product.id),
            product_id: product.id.clone(),
            product: product.clone(),
            added_at: Utc::now(),
        });
        self.persist()?;
        Ok(Notice::AddedToWishlist {
            product: product.name.clone(),
        })
    }

    /// Remove a saved product. Removing an unknown product is a no-op.
    pub fn remove_item(&mut self, product_id: &ProductId) -> Result<Notice, StoreError> {
        self.items.retain(|i| &i.product_id != product_id);
        self.persist()?;
        Ok(Notice::RemovedFromWishlist)
    }

    /// Empty the wishlist.
    pub fn clear(&mut self) -> Result<Notice, StoreError> {
        self.items.clear();
        self.persist()?;
        Ok(Notice::WishlistCleared)
    }

    /// Write the current snapshot through to the store.
    ///
    /// Called after every mutation; also the explicit teardown hook for
    /// session end.
    pub fn persist(&self) -> Result<(), StoreError> {
        self.store.set(WISHLIST_KEY, &self.items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::CatalogStore;

    fn engine() -> (tempfile::TempDir, WishlistEngine, CatalogStore) {
        let dir = tempfile::tempdir().unwrap();
        let store = Store::open(dir.path()).unwrap();
        (dir, WishlistEngine::load(store), CatalogStore::sample())
    }

    #[test]
    fn test_add_and_lookup() {
        let (_dir, mut engine, catalog) = engine();
        let product = &catalog.products()[0];

        let notice = engine.add_item(product).unwrap();
        assert_eq!(
            notice,
            Notice::AddedToWishlist {
                product: product.name.clone()
            }
        );
        assert!(engine.is_in_wishlist(&product.id));
        assert_eq!(engine.count(), 1);
        assert_eq!(engine.items()[0].id.as_str(), "wishlist-nimbus-x1");
    }

    #[test]
    fn test_duplicate_add_is_a_skip() {
        let (_dir, mut engine, catalog) = engine();
        let product = &catalog.products()[0];

        engine.add_item(product).unwrap();
        let notice = engine.add_item(product).unwrap();

        assert!(notice.is_skip());
        assert_eq!(engine.count(), 1);
    }

    #[test]
    fn test_out_of_stock_products_can_be_saved() {
        let (_dir, mut engine, catalog) = engine();
        let product = catalog
            .products()
            .iter()
            .find(|p| !p.in_stock)
            .expect("sample catalog has an out-of-stock product");

        let notice = engine.add_item(product).unwrap();
        assert!(!notice.is_skip());
        assert!(engine.is_in_wishlist(&product.id));
    }

    #[test]
    fn test_remove_is_idempotent() {
        let (_dir, mut engine, catalog) = engine();
        let product = &catalog.products()[0];

        engine.add_item(product).unwrap();
        engine.remove_item(&product.id).unwrap();
        engine.remove_item(&product.id).unwrap();

        assert!(engine.is_empty());
    }

    #[test]
    fn test_clear() {
        let (_dir, mut engine, catalog) = engine();
        engine.add_item(&catalog.products()[0]).unwrap();
        engine.add_item(&catalog.products()[1]).unwrap();

        engine.clear().unwrap();
        assert!(engine.is_empty());
    }

    #[test]
    fn test_reload_restores_entries() {
        let dir = tempfile::tempdir().unwrap();
        let catalog = CatalogStore::sample();
        {
            let mut engine = WishlistEngine::load(Store::open(dir.path()).unwrap());
            engine.add_item(&catalog.products()[0]).unwrap();
            engine.add_item(&catalog.products()[2]).unwrap();
        }

        let engine = WishlistEngine::load(Store::open(dir.path()).unwrap());
        assert_eq!(engine.count(), 2);
        assert!(engine.is_in_wishlist(&catalog.products()[0].id));
    }

    #[test]
    fn test_malformed_persisted_state_degrades_to_empty() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("wishlist.json"), b"\"not a list").unwrap();

        let engine = WishlistEngine::load(Store::open(dir.path()).unwrap());
        assert!(engine.is_empty());
    }
}
