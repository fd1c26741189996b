//! Owned cart store with change notification.

use crate::cart::{Cart, OrderTotals};
use crate::catalog::Product;
use crate::ids::ProductId;
use crate::money::Money;
use serde::{Deserialize, Serialize};
use tokio::sync::watch;
use tracing::debug;

/// A mutation request for the cart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum CartCommand {
    /// Add one unit of a product.
    Add(Product),
    /// Drop a product's line.
    Remove(ProductId),
    /// Set a line's quantity; zero or less removes it.
    UpdateQuantity(ProductId, i64),
    /// Empty the cart.
    Clear,
}

impl CartCommand {
    fn name(&self) -> &'static str {
        match self {
            CartCommand::Add(_) => "add",
            CartCommand::Remove(_) => "remove",
            CartCommand::UpdateQuantity(..) => "update_quantity",
            CartCommand::Clear => "clear",
        }
    }
}

/// The single source of truth for cart contents.
///
/// Commands go in through `&mut self`, so there is exactly one writer.
/// Readers take snapshots or hold a [`watch::Receiver`] from
/// [`CartStore::subscribe`], which is marked changed after every command
/// that actually altered the cart.
#[derive(Debug)]
pub struct CartStore {
    tx: watch::Sender<Cart>,
}

impl Default for CartStore {
    fn default() -> Self {
        Self::new()
    }
}

impl CartStore {
    /// Create a store holding an empty cart.
    pub fn new() -> Self {
        Self::with_cart(Cart::new())
    }

    /// Create a store seeded with an existing cart.
    pub fn with_cart(cart: Cart) -> Self {
        let (tx, _rx) = watch::channel(cart);
        Self { tx }
    }

    /// Apply a command. Returns whether the cart changed.
    pub fn apply(&mut self, command: CartCommand) -> bool {
        let name = command.name();
        let changed = self.tx.send_if_modified(|cart| match command {
            CartCommand::Add(product) => cart.add(product),
            CartCommand::Remove(id) => cart.remove(id),
            CartCommand::UpdateQuantity(id, quantity) => cart.update_quantity(id, quantity),
            CartCommand::Clear => cart.clear(),
        });
        debug!(
            command = name,
            changed,
            total_items = self.get_total_items(),
            "cart command applied"
        );
        changed
    }

    /// Add one unit of a product.
    pub fn add_to_cart(&mut self, product: Product) -> bool {
        self.apply(CartCommand::Add(product))
    }

    /// Remove a product's line; no-op when absent.
    pub fn remove_from_cart(&mut self, product_id: ProductId) -> bool {
        self.apply(CartCommand::Remove(product_id))
    }

    /// Set a line's quantity; zero or less removes it.
    pub fn update_quantity(&mut self, product_id: ProductId, quantity: i64) -> bool {
        self.apply(CartCommand::UpdateQuantity(product_id, quantity))
    }

    /// Empty the cart.
    pub fn clear_cart(&mut self) -> bool {
        self.apply(CartCommand::Clear)
    }

    /// Sum of quantities across all lines.
    pub fn get_total_items(&self) -> u64 {
        self.tx.borrow().total_items()
    }

    /// Sum of price times quantity across all lines.
    pub fn get_total_price(&self) -> Money {
        self.tx.borrow().total_price()
    }

    /// Fresh order totals for the current contents.
    pub fn order_totals(&self) -> OrderTotals {
        OrderTotals::for_cart(&self.tx.borrow())
    }

    /// Copy of the current contents.
    pub fn snapshot(&self) -> Cart {
        self.tx.borrow().clone()
    }

    /// Subscribe to cart changes.
    pub fn subscribe(&self) -> watch::Receiver<Cart> {
        self.tx.subscribe()
    }
}
