//! Storefront domain core for Shopfront.
//!
//! This crate provides the state and query layer behind a storefront UI:
//!
//! - **Catalog**: immutable products, variants, and categories
//! - **Cart**: line items with derived totals, persisted per session
//! - **Wishlist**: a persisted set of saved products
//! - **Search**: pure filter/sort queries over the catalog
//!
//! The presentation layer is the sole collaborator: it passes products,
//! identifiers, and filter criteria in, and renders the snapshots, result
//! lists, and advisory [`Notice`] values that come back. All operations
//! run synchronously on the calling thread; cart and wishlist state is
//! written through to a [`Store`] after every mutation and restored (or
//! defaulted) at session start.
//!
//! # Example
//!
//! ```rust,ignore
//! use shopfront_commerce::prelude::*;
//!
//! let catalog = CatalogStore::sample();
//! let store = Store::open(session_dir)?;
//!
//! // Browse
//! let filters = SearchFilters::new()
//!     .with_category("electronics")
//!     .with_sort(SortKey::PriceLow);
//! let results = search(&catalog, &filters);
//!
//! // Buy
//! let mut cart = CartEngine::load(store.clone());
//! let notice = cart.add_item(results[0], 1, None)?;
//! println!("{}: {}", notice.title(), notice);
//! println!("total {}", cart.cart().totals.total);
//! ```

pub mod ids;
pub mod money;
pub mod notice;

pub mod cart;
pub mod catalog;
pub mod search;
pub mod wishlist;

pub use ids::*;
pub use money::{Currency, Money};
pub use notice::Notice;
pub use shopfront_store::{Store, StoreError};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::ids::*;
    pub use crate::money::{Currency, Money};
    pub use crate::notice::Notice;

    // Catalog
    pub use crate::catalog::{CatalogStore, Category, Product, ProductVariant};

    // Cart
    pub use crate::cart::{Cart, CartEngine, CartItem, CartTotals};

    // Wishlist
    pub use crate::wishlist::{WishlistEngine, WishlistItem};

    // Search
    pub use crate::search::{search, SearchFilters, SortKey};

    // Persistence
    pub use shopfront_store::{Store, StoreError};
}
