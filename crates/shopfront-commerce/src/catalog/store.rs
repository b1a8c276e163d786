//! In-memory catalog store.

use crate::catalog::samples;
use crate::catalog::{Category, Product};
use crate::ids::{CategoryId, ProductId};

/// The immutable product catalog, loaded once at session start.
///
/// Fields are private and only slice accessors are exposed; nothing in the
/// core mutates catalog records after construction.
#[derive(Debug, Clone)]
pub struct CatalogStore {
    products: Vec<Product>,
    categories: Vec<Category>,
}

impl CatalogStore {
    /// Build a catalog from pre-loaded records.
    pub fn new(products: Vec<Product>, categories: Vec<Category>) -> Self {
        Self {
            products,
            categories,
        }
    }

    /// The built-in sample catalog.
    pub fn sample() -> Self {
        Self::new(samples::sample_products(), samples::sample_categories())
    }

    /// All products, in catalog order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// All root categories.
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Look up a product by ID.
    pub fn product(&self, id: &ProductId) -> Option<&Product> {
        self.products.iter().find(|p| &p.id == id)
    }

    /// Look up a category by ID, searching nested subcategories too.
    pub fn category(&self, id: &CategoryId) -> Option<&Category> {
        self.categories.iter().find_map(|c| c.find(id))
    }

    /// Number of products in the catalog.
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Check if the catalog has no products.
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}
