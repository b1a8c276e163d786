//! Wishlist module.
//!
//! A persisted set of saved products, keyed by product ID.

mod engine;

pub use engine::{WishlistEngine, WishlistItem, WISHLIST_KEY};
