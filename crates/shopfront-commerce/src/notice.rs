//! Advisory notices surfaced to the presentation layer.
//!
//! A `Notice` accompanies every cart or wishlist mutation, including ones
//! that were intentionally skipped (out of stock, already saved). Notices
//! are display material for the hosting UI, never errors.

use std::fmt;

/// Outcome signal for a storefront mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    /// Product was added to the cart.
    AddedToCart { product: String },
    /// A cart line was removed.
    RemovedFromCart,
    /// A cart line's quantity changed.
    CartUpdated,
    /// All cart lines were removed.
    CartCleared,
    /// Add skipped: the product is out of stock.
    OutOfStock { product: String },
    /// Add skipped: the selected variant is out of stock.
    VariantOutOfStock { product: String, variant: String },
    /// Product was added to the wishlist.
    AddedToWishlist { product: String },
    /// Add skipped: the product is already saved.
    AlreadyInWishlist { product: String },
    /// A wishlist entry was removed.
    RemovedFromWishlist,
    /// All wishlist entries were removed.
    WishlistCleared,
}

impl Notice {
    /// Short heading for the notice, toast-style.
    pub fn title(&self) -> &'static str {
        match self {
            Notice::AddedToCart { .. } => "Added to Cart",
            Notice::RemovedFromCart => "Removed from Cart",
            Notice::CartUpdated => "Cart Updated",
            Notice::CartCleared => "Cart Cleared",
            Notice::OutOfStock { .. } => "Out of Stock",
            Notice::VariantOutOfStock { .. } => "Variant Out of Stock",
            Notice::AddedToWishlist { .. } => "Added to Wishlist",
            Notice::AlreadyInWishlist { .. } => "Already in Wishlist",
            Notice::RemovedFromWishlist => "Removed from Wishlist",
            Notice::WishlistCleared => "Wishlist Cleared",
        }
    }

    /// True when the requested mutation was not applied.
    pub fn is_skip(&self) -> bool {
        matches!(
            self,
            Notice::OutOfStock { .. }
                | Notice::VariantOutOfStock { .. }
                | Notice::AlreadyInWishlist { .. }
        )
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Notice::AddedToCart { product } => {
                write!(f, "{product} has been added to your cart.")
            }
            Notice::RemovedFromCart => write!(f, "Item has been removed from your cart."),
            Notice::CartUpdated => write!(f, "Your cart has been updated."),
            Notice::CartCleared => write!(f, "All items have been removed from your cart."),
            Notice::OutOfStock { product } => {
                write!(f, "{product} is currently out of stock.")
            }
            Notice::VariantOutOfStock { product, variant } => {
                write!(f, "{product} ({variant}) is currently out of stock.")
            }
            Notice::AddedToWishlist { product } => {
                write!(f, "{product} has been added to your wishlist.")
            }
            Notice::AlreadyInWishlist { product } => {
                write!(f, "{product} is already in your wishlist.")
            }
            Notice::RemovedFromWishlist => {
                write!(f, "Item has been removed from your wishlist.")
            }
            Notice::WishlistCleared => {
                write!(f, "All items have been removed from your wishlist.")
            }
        }
    }
}
