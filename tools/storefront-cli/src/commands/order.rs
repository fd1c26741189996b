//! Cart and order summary command.

use anyhow::Result;
use serde::Serialize;
use storefront_commerce::cart::{Cart, CartCommand, CartItem, CartStore, OrderTotals};
use storefront_commerce::catalog::Product;
use storefront_commerce::ProductId;

use super::OrderArgs;
use crate::context::Context;

#[derive(Serialize)]
struct OrderSummary<'a> {
    items: &'a [CartItem],
    total_items: u64,
    totals: OrderTotals,
}

/// Run the order command.
pub async fn run(args: OrderArgs, ctx: &Context) -> Result<()> {
    let products = super::products::load_catalog(ctx).await?;
    let plan = OrderPlan::from(args);

    let mut store = CartStore::new();
    let mut changes = store.subscribe();
    for command in plan.commands(&products, |id| {
        ctx.output.warn(&format!("Product {} is not in the catalog, skipping", id))
    }) {
        store.apply(command);
    }

    if !changes.has_changed().unwrap_or(false) {
        ctx.output.debug("No cart operations changed the cart");
    }
    let cart = changes.borrow_and_update().clone();

    print_summary(&cart, ctx);
    Ok(())
}

fn print_summary(cart: &Cart, ctx: &Context) {
    let totals = OrderTotals::for_cart(cart);

    if ctx.output.is_json() {
        ctx.output.json(&OrderSummary {
            items: cart.items(),
            total_items: cart.total_items(),
            totals,
        });
        return;
    }

    ctx.output.header(&format!("Cart ({})", cart.total_items()));
    if cart.is_empty() {
        ctx.output.info("Your cart is empty.");
    } else {
        ctx.output.table_row(&["ID", "TITLE", "QTY", "PRICE", "TOTAL"], &WIDTHS);
        for item in cart.iter() {
            let id = item.id().to_string();
            let quantity = item.quantity.to_string();
            let price = item.product.price.display();
            let total = item.line_total().display();
            ctx.output.table_row(&[&id, &item.product.title, &quantity, &price, &total], &WIDTHS);
        }
    }

    ctx.output.header("Order Summary");
    ctx.output.total_row("Subtotal", &totals.subtotal.display(), false);
    ctx.output.total_row("Delivery Fee", &totals.delivery_fee.display(), false);
    ctx.output.total_row("Tax (10%)", &totals.tax.display(), false);
    ctx.output.total_row("Total", &totals.grand_total.display(), true);
}

const WIDTHS: [usize; 5] = [4, 40, 5, 10, 10];

/// The requested cart operations, grouped by kind.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct OrderPlan {
    pub add: Vec<ProductId>,
    pub set: Vec<(ProductId, i64)>,
    pub remove: Vec<ProductId>,
    pub clear: bool,
}

impl From<OrderArgs> for OrderPlan {
    fn from(args: OrderArgs) -> Self {
        Self {
            add: args.add.into_iter().map(ProductId::new).collect(),
            set: args
                .set
                .into_iter()
                .map(|(id, quantity)| (ProductId::new(id), quantity))
                .collect(),
            remove: args.remove.into_iter().map(ProductId::new).collect(),
            clear: args.clear,
        }
    }
}

impl OrderPlan {
    /// Cart commands in application order. Adds for products missing
    /// from the catalog are reported through `unknown` and dropped.
    pub fn commands(
        &self,
        catalog: &[Product],
        mut unknown: impl FnMut(ProductId),
    ) -> Vec<CartCommand> {
        let mut commands = Vec::new();

        for id in &self.add {
            match catalog.iter().find(|p| p.id == *id) {
                Some(product) => commands.push(CartCommand::Add(product.clone())),
                None => unknown(*id),
            }
        }
        commands.extend(
            self.set
                .iter()
                .map(|(id, quantity)| CartCommand::UpdateQuantity(*id, *quantity)),
        );
        commands.extend(self.remove.iter().map(|id| CartCommand::Remove(*id)));
        if self.clear {
            commands.push(CartCommand::Clear);
        }

        commands
    }
}
