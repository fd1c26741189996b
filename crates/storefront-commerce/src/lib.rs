//! Storefront domain logic.
//!
//! This crate holds everything the storefront does that is not markup:
//!
//! - **Catalog**: Products as served by the catalog API, category selection
//! - **Cart**: The owned cart store and order totals derived from it
//! - **Checkout**: The delivery address capture flow
//!
//! # Example
//!
//! ```rust
//! use storefront_commerce::prelude::*;
//!
//! let mut store = CartStore::new();
//! let tee = Product::new(18, "Cotton Tee", Money::from_decimal(9.85), "women's clothing");
//! store.add_to_cart(tee.clone());
//! store.add_to_cart(tee);
//!
//! let totals = store.order_totals();
//! assert_eq!(store.get_total_items(), 2);
//! assert_eq!(totals.grand_total.display(), "$26.67");
//! ```

pub mod error;
pub mod ids;
pub mod money;

pub mod catalog;
pub mod cart;
pub mod checkout;

pub use error::{CaptureError, RequiredField};
pub use ids::ProductId;
pub use money::Money;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::{CaptureError, RequiredField};
    pub use crate::ids::ProductId;
    pub use crate::money::Money;

    // Catalog
    pub use crate::catalog::{CatalogState, CategoryFilter, Product, Rating};

    // Cart
    pub use crate::cart::{Cart, CartCommand, CartItem, CartStore, OrderTotals};

    // Checkout
    pub use crate::checkout::{
        AddressCapture, CaptureOutcome, CaptureSession, CaptureState, Coordinates,
        DeliveryAddress, GeocodeOutcome, Geolocator, LocateOutcome, ReverseGeocoder,
    };
}
