//! Local persistence for Shopfront.
//!
//! A small typed key-value store that plays the role browser local storage
//! plays for a storefront session: one named entry per collection, JSON
//! encoded, fully rewritten on every save.
//!
//! # Example
//!
//! ```rust,ignore
//! use shopfront_store::Store;
//!
//! let store = Store::open("/tmp/shopfront-session")?;
//! store.set("cart", &cart)?;
//! let cart: Option<Cart> = store.get("cart")?;
//! ```

pub mod error;
pub mod kv;

pub use error::StoreError;
pub use kv::Store;
