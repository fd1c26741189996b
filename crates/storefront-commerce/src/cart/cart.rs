//! Cart and line item types.

use crate::catalog::Product;
use crate::ids::ProductId;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// A product and how many of it the customer wants.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartItem {
    /// The product, copied from the catalog.
    pub product: Product,
    /// Quantity, always at least 1 while the item is in a cart.
    pub quantity: u32,
}

impl CartItem {
    /// Product identifier of this line.
    pub fn id(&self) -> ProductId {
        self.product.id
    }

    /// Unit price times quantity.
    pub fn line_total(&self) -> Money {
        self.product.price.multiply(i64::from(self.quantity))
    }
}

/// A shopping cart.
///
/// Lines are kept in the order they were first added and there is at most
/// one line per product. No operation fails: requests that do not apply
/// (unknown product, non-positive quantity) degrade to a removal or a no-op.
/// Every mutator reports whether the contents changed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Cart {
    items: Vec<CartItem>,
}

impl Cart {
    /// Create an empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one unit of a product.
    ///
    /// Bumps the quantity of an existing line, or appends a new line with
    /// quantity 1.
    pub fn add(&mut self, product: Product) -> bool {
        if let Some(existing) = self.items.iter_mut().find(|i| i.product.id == product.id) {
            let bumped = existing.quantity.saturating_add(1);
            let changed = bumped != existing.quantity;
            existing.quantity = bumped;
            return changed;
        }

        self.items.push(CartItem {
            product,
            quantity: 1,
        });
        true
    }

    /// Remove the line for a product, if present.
    pub fn remove(&mut self, product_id: ProductId) -> bool {
        let len_before = self.items.len();
        self.items.retain(|i| i.product.id != product_id);
        self.items.len() < len_before
    }

    /// Set the quantity of a line.
    ///
    /// A quantity of zero or less removes the line. Unknown products are
    /// left alone.
    pub fn update_quantity(&mut self, product_id: ProductId, quantity: i64) -> bool {
        if quantity <= 0 {
            return self.remove(product_id);
        }

        let quantity = u32::try_from(quantity).unwrap_or(u32::MAX);
        match self.items.iter_mut().find(|i| i.product.id == product_id) {
            Some(item) if item.quantity != quantity => {
                item.quantity = quantity;
                true
            }
            _ => false,
        }
    }

    /// Remove every line.
    pub fn clear(&mut self) -> bool {
        let had_items = !self.items.is_empty();
        self.items.clear();
        had_items
    }

    /// Sum of quantities (the nav badge count).
    pub fn total_items(&self) -> u64 {
        self.items.iter().map(|i| u64::from(i.quantity)).sum()
    }

    /// Sum of line totals, i.e. the subtotal.
    pub fn total_price(&self) -> Money {
        self.items.iter().map(CartItem::line_total).sum()
    }

    /// Get the line for a product.
    pub fn get(&self, product_id: ProductId) -> Option<&CartItem> {
        self.items.iter().find(|i| i.product.id == product_id)
    }

    /// Lines in insertion order.
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    /// Iterate over lines in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &CartItem> {
        self.items.iter()
    }

    /// Number of distinct products.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if cart is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
