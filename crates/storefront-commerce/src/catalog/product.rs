//! Product types as served by the catalog API.

use crate::ids::ProductId;
use crate::money::{self, Money};
use serde::{Deserialize, Serialize};

/// Customer rating summary for a product.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct Rating {
    /// Average rating, 0 to 5.
    pub rate: f64,
    /// Number of ratings.
    pub count: u64,
}

/// A product in the catalog.
///
/// Read-only to the storefront: products come from the remote catalog and are
/// only ever copied into the cart.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// Product title.
    pub title: String,
    /// Unit price.
    #[serde(with = "money::as_decimal")]
    pub price: Money,
    /// Long description.
    #[serde(default)]
    pub description: String,
    /// Free-text category label (e.g., "electronics").
    pub category: String,
    /// Image URL.
    pub image: String,
    /// Rating summary.
    #[serde(default)]
    pub rating: Rating,
}

impl Product {
    /// Create a product with an empty description, image and rating.
    pub fn new(
        id: impl Into<ProductId>,
        title: impl Into<String>,
        price: Money,
        category: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            price,
            description: String::new(),
            category: category.into(),
            image: String::new(),
            rating: Rating::default(),
        }
    }

    /// Set the rating summary.
    pub fn with_rating(mut self, rate: f64, count: u64) -> Self {
        self.rating = Rating { rate, count };
        self
    }

    /// Set the image URL.
    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = image.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_creation() {
        let product = Product::new(1, "Backpack", Money::new(10995), "men's clothing");
        assert_eq!(product.id, ProductId::new(1));
        assert_eq!(product.price.display(), "$109.95");
        assert!(product.description.is_empty());
    }

    #[test]
    fn test_product_from_catalog_json() {
        let json = r#"{
            "id": 1,
            "title": "Fjallraven - Foldsack No. 1 Backpack, Fits 15 Laptops",
            "price": 109.95,
            "description": "Your perfect pack for everyday use",
            "category": "men's clothing",
            "image": "https://fakestoreapi.com/img/81fPKd-2AYL._AC_SL1500_.jpg",
            "rating": { "rate": 3.9, "count": 120 }
        }"#;

        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.id, ProductId::new(1));
        assert_eq!(product.price.amount_cents, 10995);
        assert_eq!(product.category, "men's clothing");
        assert_eq!(product.rating.count, 120);
        assert!((product.rating.rate - 3.9).abs() < f64::EPSILON);
    }

    #[test]
    fn test_product_without_rating_or_description() {
        let json = r#"{
            "id": 2,
            "title": "Mug",
            "price": 7,
            "category": "kitchen",
            "image": "mug.png"
        }"#;

        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.price, Money::new(700));
        assert_eq!(product.rating, Rating::default());
    }
}
