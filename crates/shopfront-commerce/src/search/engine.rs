//! The filter/sort query engine.

use std::cmp::Reverse;

use crate::catalog::{CatalogStore, Product};
use crate::search::{SearchFilters, SortKey};

/// Filter and sort the catalog.
///
/// Pure: neither the catalog nor the filters are mutated, and a fresh
/// ordered list is returned on every call. Predicates apply in a fixed
/// order (text, category, price, brand, rating, stock, tags); the sort is
/// stable, so products tied under the sort key keep their catalog order.
pub fn search<'a>(catalog: &'a CatalogStore, filters: &SearchFilters) -> Vec<&'a Product> {
    let mut results: Vec<&Product> = catalog
        .products()
        .iter()
        .filter(|product| matches(product, filters))
        .collect();
    sort(&mut results, filters.sort);
    results
}

fn matches(product: &Product, filters: &SearchFilters) -> bool {
    if !filters.query.is_empty() && !matches_query(product, &filters.query) {
        return false;
    }
    if let Some(category) = &filters.category {
        if &product.category != category {
            return false;
        }
    }
    if let Some(min) = filters.min_price {
        if product.price.amount_cents < min.amount_cents {
            return false;
        }
    }
    if let Some(max) = filters.max_price {
        if product.price.amount_cents > max.amount_cents {
            return false;
        }
    }
    if !filters.brands.is_empty() && !filters.brands.contains(&product.brand) {
        return false;
    }
    if filters.min_rating > 0.0 && product.rating < filters.min_rating {
        return false;
    }
    if filters.in_stock_only && product.stock_quantity == 0 {
        return false;
    }
    if !filters.tags.is_empty() && !product.tags.iter().any(|tag| filters.tags.contains(tag)) {
        return false;
    }
    true
}

/// Case-insensitive substring match on name, description, and brand, or an
/// exact (case-insensitive) match against any tag.
fn matches_query(product: &Product, query: &str) -> bool {
    let needle = query.to_lowercase();
    product.name.to_lowercase().contains(&needle)
        || product.description.to_lowercase().contains(&needle)
        || product.brand.to_lowercase().contains(&needle)
        || product.tags.iter().any(|tag| tag.eq_ignore_ascii_case(query))
}

fn sort(products: &mut [&Product], key: SortKey) {
    match key {
        SortKey::Name => {
            products.sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase()))
        }
        SortKey::PriceLow => products.sort_by_key(|p| p.price.amount_cents),
        SortKey::PriceHigh => products.sort_by_key(|p| Reverse(p.price.amount_cents)),
        SortKey::Rating => products.sort_by(|a, b| b.rating.total_cmp(&a.rating)),
        SortKey::Newest => products.sort_by_key(|p| Reverse(p.created_at)),
        SortKey::Popular => products.sort_by_key(|p| Reverse(p.review_count)),
        SortKey::Relevance => {}
    }
}
