//! Product catalog module.
//!
//! Contains the product record served by the catalog API, its loading
//! state, and category selection helpers.

mod category;
mod product;
mod state;

pub use category::{distinct_categories, featured, CategoryFilter, FEATURED_PRODUCT_COUNT};
pub use product::{Product, Rating};
pub use state::CatalogState;
