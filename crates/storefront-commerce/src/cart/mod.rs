//! Shopping cart module.
//!
//! Contains the cart, its owned store, and order totals.

mod cart;
mod pricing;
mod store;

pub use cart::{Cart, CartItem};
pub use pricing::{OrderTotals, DELIVERY_FEE, TAX_RATE_BPS};
pub use store::{CartCommand, CartStore};
