//! Category selection over the flat product list.

use crate::catalog::Product;
use serde::{Deserialize, Serialize};

/// Number of products shown in the featured strip.
pub const FEATURED_PRODUCT_COUNT: usize = 6;

/// A category selection, as carried by a `?category=` query parameter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum CategoryFilter {
    /// Every product.
    #[default]
    All,
    /// Exactly this category.
    Exact(String),
    /// Any category containing one of these names.
    Any(Vec<String>),
}

impl CategoryFilter {
    /// Parse a selector string.
    ///
    /// `"all"` or an empty string selects everything, a comma-separated list
    /// selects any category containing one of the names, and anything else is
    /// an exact category match.
    pub fn parse(selector: &str) -> Self {
        let selector = selector.trim();
        if selector.is_empty() || selector.eq_ignore_ascii_case("all") {
            return CategoryFilter::All;
        }

        if selector.contains(',') {
            let names: Vec<String> = selector
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(String::from)
                .collect();
            return if names.is_empty() {
                CategoryFilter::All
            } else {
                CategoryFilter::Any(names)
            };
        }

        CategoryFilter::Exact(selector.to_string())
    }

    /// Check whether a product passes the filter.
    pub fn matches(&self, product: &Product) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Exact(name) => product.category == *name,
            CategoryFilter::Any(names) => names
                .iter()
                .any(|name| product.category.contains(name.as_str())),
        }
    }

    /// Filter a product list, keeping catalog order.
    pub fn apply<'a>(&self, products: &'a [Product]) -> Vec<&'a Product> {
        products.iter().filter(|p| self.matches(p)).collect()
    }
}

/// Distinct categories in first-seen order.
pub fn distinct_categories(products: &[Product]) -> Vec<&str> {
    let mut seen: Vec<&str> = Vec::new();
    for product in products {
        if !seen.contains(&product.category.as_str()) {
            seen.push(product.category.as_str());
        }
    }
    seen
}

/// The first `count` products.
pub fn featured(products: &[Product], count: usize) -> &[Product] {
    &products[..count.min(products.len())]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Money;

    fn catalog() -> Vec<Product> {
        vec![
            Product::new(1, "Backpack", Money::new(10995), "men's clothing"),
            Product::new(2, "Ring", Money::new(16800), "jewelery"),
            Product::new(3, "Jacket", Money::new(5599), "women's clothing"),
            Product::new(4, "SSD", Money::new(10900), "electronics"),
            Product::new(5, "Tee", Money::new(2230), "men's clothing"),
        ]
    }

    #[test]
    fn test_parse_selectors() {
        assert_eq!(CategoryFilter::parse("all"), CategoryFilter::All);
        assert_eq!(CategoryFilter::parse("  "), CategoryFilter::All);
        assert_eq!(
            CategoryFilter::parse("electronics"),
            CategoryFilter::Exact("electronics".to_string())
        );
        assert_eq!(
            CategoryFilter::parse("men's clothing, women's clothing"),
            CategoryFilter::Any(vec![
                "men's clothing".to_string(),
                "women's clothing".to_string()
            ])
        );
    }

    #[test]
    fn test_exact_filter() {
        let products = catalog();
        let filtered = CategoryFilter::parse("men's clothing").apply(&products);
        let ids: Vec<u64> = filtered.iter().map(|p| p.id.get()).collect();
        assert_eq!(ids, vec![1, 5]);
    }

    #[test]
    fn test_any_filter_uses_substring_match() {
        let products = catalog();
        let filtered = CategoryFilter::parse("clothing,jewel").apply(&products);
        let ids: Vec<u64> = filtered.iter().map(|p| p.id.get()).collect();
        assert_eq!(ids, vec![1, 2, 3, 5]);
    }

    #[test]
    fn test_distinct_categories_first_seen_order() {
        let products = catalog();
        assert_eq!(
            distinct_categories(&products),
            vec!["men's clothing", "jewelery", "women's clothing", "electronics"]
        );
    }

    #[test]
    fn test_featured_caps_at_list_length() {
        let products = catalog();
        assert_eq!(featured(&products, FEATURED_PRODUCT_COUNT).len(), 5);
        assert_eq!(featured(&products, 2).len(), 2);
    }
}
