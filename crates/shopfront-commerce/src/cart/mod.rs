//! Shopping cart module.
//!
//! Contains the cart state machine, its line items, and the derived
//! totals calculation.

mod cart;
mod engine;
mod totals;

pub use cart::{Cart, CartItem};
pub use engine::{CartEngine, CART_KEY};
pub use totals::{CartTotals, FLAT_SHIPPING_CENTS, FREE_SHIPPING_OVER_CENTS, TAX_RATE};
