//! Search filter criteria.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::ids::CategoryId;
use crate::money::Money;

/// Sort order for search results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum SortKey {
    /// Sort by name A-Z.
    #[default]
    Name,
    /// Sort by price, low to high.
    PriceLow,
    /// Sort by price, high to low.
    PriceHigh,
    /// Sort by highest rated.
    Rating,
    /// Sort by newest first.
    Newest,
    /// Sort by most reviewed.
    Popular,
    /// Keep catalog order; reserved for future ranking.
    Relevance,
}

impl SortKey {
    /// Human-readable label for sort pickers.
    pub fn display_name(&self) -> &'static str {
        match self {
            SortKey::Name => "Name: A-Z",
            SortKey::PriceLow => "Price: Low to High",
            SortKey::PriceHigh => "Price: High to Low",
            SortKey::Rating => "Highest Rated",
            SortKey::Newest => "Newest",
            SortKey::Popular => "Most Popular",
            SortKey::Relevance => "Relevance",
        }
    }
}

/// Filter criteria for a catalog query.
///
/// Every field is optional or defaulted; absence means "no constraint."
/// The criteria are held by the presentation layer and passed in on each
/// query; nothing here is persisted.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SearchFilters {
    /// Free-text search; empty means unfiltered.
    #[serde(default)]
    pub query: String,
    /// Restrict to one category.
    #[serde(default)]
    pub category: Option<CategoryId>,
    /// Lower price bound, inclusive.
    #[serde(default)]
    pub min_price: Option<Money>,
    /// Upper price bound, inclusive.
    #[serde(default)]
    pub max_price: Option<Money>,
    /// Restrict to these brands; empty means all brands.
    #[serde(default)]
    pub brands: BTreeSet<String>,
    /// Minimum rating; 0.0 means unfiltered.
    #[serde(default)]
    pub min_rating: f64,
    /// Only include products with stock on hand.
    #[serde(default)]
    pub in_stock_only: bool,
    /// Require at least one of these tags; empty means all products.
    #[serde(default)]
    pub tags: BTreeSet<String>,
    /// Result ordering.
    #[serde(default)]
    pub sort: SortKey,
}

impl SearchFilters {
    /// Filters that match the whole catalog in default order.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the free-text query.
    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = query.into();
        self
    }

    /// Restrict to a category.
    pub fn with_category(mut self, category: impl Into<CategoryId>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Set the inclusive price range. Either bound may be `None`.
    pub fn with_price_range(mut self, min: Option<Money>, max: Option<Money>) -> Self {
        self.min_price = min;
        self.max_price = max;
        self
    }

    /// Add a brand to the brand set.
    pub fn with_brand(mut self, brand: impl Into<String>) -> Self {
        self.brands.insert(brand.into());
        self
    }

    /// Set the minimum rating.
    pub fn with_min_rating(mut self, rating: f64) -> Self {
        self.min_rating = rating;
        self
    }

    /// Only include products with stock on hand.
    pub fn in_stock_only(mut self) -> Self {
        self.in_stock_only = true;
        self
    }

    /// Add a tag to the tag set.
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.insert(tag.into());
        self
    }

    /// Set the sort order.
    pub fn with_sort(mut self, sort: SortKey) -> Self {
        self.sort = sort;
        self
    }

    /// True when any narrowing constraint is active (sort order aside).
    ///
    /// The presentation layer uses this for its "clear all filters"
    /// affordance.
    pub fn has_constraints(&self) -> bool {
        !self.query.is_empty()
            || self.category.is_some()
            || self.min_price.is_some()
            || self.max_price.is_some()
            || !self.brands.is_empty()
            || self.min_rating > 0.0
            || self.in_stock_only
            || !self.tags.is_empty()
    }
}
