//! Loading state of the product list.

use crate::catalog::Product;
use std::fmt::Display;

/// What the product list looks like to a reader.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum CatalogState {
    /// The fetch has not completed yet.
    #[default]
    Loading,
    /// Products arrived.
    Loaded(Vec<Product>),
    /// The fetch failed; holds a human-readable message.
    Failed(String),
}

impl CatalogState {
    /// Build a display state from a finished fetch.
    pub fn from_result<E: Display>(result: Result<Vec<Product>, E>) -> Self {
        match result {
            Ok(products) => CatalogState::Loaded(products),
            Err(e) => CatalogState::Failed(e.to_string()),
        }
    }

    /// Check if the fetch is still in flight.
    pub fn is_loading(&self) -> bool {
        matches!(self, CatalogState::Loading)
    }

    /// Products, empty while loading or after a failure.
    pub fn products(&self) -> &[Product] {
        match self {
            CatalogState::Loaded(products) => products,
            _ => &[],
        }
    }

    /// The failure message, if any.
    pub fn error(&self) -> Option<&str> {
        match self {
            CatalogState::Failed(message) => Some(message),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Money;

    #[test]
    fn test_default_is_loading() {
        let state = CatalogState::default();
        assert!(state.is_loading());
        assert!(state.products().is_empty());
        assert_eq!(state.error(), None);
    }

    #[test]
    fn test_from_ok_result() {
        let products = vec![Product::new(1, "Tee", Money::new(2230), "men's clothing")];
        let state = CatalogState::from_result::<String>(Ok(products));
        assert_eq!(state.products().len(), 1);
        assert!(!state.is_loading());
    }

    #[test]
    fn test_from_err_result_keeps_message() {
        let state = CatalogState::from_result::<&str>(Err("Failed to fetch products"));
        assert_eq!(state.error(), Some("Failed to fetch products"));
        assert!(state.products().is_empty());
    }
}
