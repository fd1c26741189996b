//! Order total calculations.

use crate::cart::Cart;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// Flat delivery fee charged on every order.
pub const DELIVERY_FEE: Money = Money::new(500);

/// Tax rate in basis points, applied to the subtotal only.
pub const TAX_RATE_BPS: i64 = 1_000;

/// Pricing breakdown for a cart.
///
/// Derived on demand from the cart; never stored, so it cannot go stale.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct OrderTotals {
    /// Sum of line totals.
    pub subtotal: Money,
    /// Flat delivery fee.
    pub delivery_fee: Money,
    /// Tax on the subtotal, rounded to the cent.
    pub tax: Money,
    /// subtotal + delivery_fee + tax.
    pub grand_total: Money,
}

impl OrderTotals {
    /// Compute totals for a given subtotal.
    pub fn from_subtotal(subtotal: Money) -> Self {
        let tax = subtotal.percentage_bps(TAX_RATE_BPS);
        Self {
            subtotal,
            delivery_fee: DELIVERY_FEE,
            tax,
            grand_total: subtotal + DELIVERY_FEE + tax,
        }
    }

    /// Compute totals for a cart.
    pub fn for_cart(cart: &Cart) -> Self {
        Self::from_subtotal(cart.total_price())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Product;
    use crate::ids::ProductId;

    #[test]
    fn test_two_item_cart() {
        let mut cart = Cart::new();
        let a = Product::new(1, "Product A", Money::new(1000), "misc");
        let b = Product::new(2, "Product B", Money::new(500), "misc");
        cart.add(a.clone());
        cart.add(a);
        cart.add(b);

        let totals = OrderTotals::for_cart(&cart);
        assert_eq!(totals.subtotal.display(), "$25.00");
        assert_eq!(totals.tax.display(), "$2.50");
        assert_eq!(totals.delivery_fee.display(), "$5.00");
        assert_eq!(totals.grand_total.display(), "$32.50");
    }

    #[test]
    fn test_empty_cart_pays_delivery_only() {
        let totals = OrderTotals::for_cart(&Cart::new());
        assert_eq!(totals.subtotal, Money::ZERO);
        assert_eq!(totals.tax, Money::ZERO);
        assert_eq!(totals.grand_total, DELIVERY_FEE);
    }

    #[test]
    fn test_totals_follow_cart_mutations() {
        let mut cart = Cart::new();
        cart.add(Product::new(1, "Mug", Money::new(1299), "kitchen"));
        let before = OrderTotals::for_cart(&cart);

        cart.update_quantity(ProductId::new(1), 3);
        let after = OrderTotals::for_cart(&cart);

        assert_eq!(before.subtotal, Money::new(1299));
        assert_eq!(after.subtotal, Money::new(3897));
        assert_eq!(after.tax, Money::new(390));
        assert_eq!(after.grand_total, Money::new(3897 + 500 + 390));
    }

    #[test]
    fn test_tax_is_not_applied_to_delivery() {
        let totals = OrderTotals::from_subtotal(Money::new(10_000));
        assert_eq!(totals.tax, Money::new(1_000));
        assert_eq!(totals.grand_total, Money::new(11_500));
    }
}
