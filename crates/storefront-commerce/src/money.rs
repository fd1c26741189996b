//! Money type for representing monetary values.
//!
//! Uses cents-based integer representation to avoid floating-point
//! precision issues that plague monetary calculations. The storefront
//! only ever prices in US dollars, so there is no currency field.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, Mul};

/// Cents per dollar.
const CENTS_PER_UNIT: i64 = 100;

/// Basis points in one whole (100 %).
const BPS_PER_UNIT: i128 = 10_000;

/// A USD amount.
///
/// Amounts are stored in cents. Arithmetic through the operators saturates
/// instead of overflowing; use the `try_` variants to detect overflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default)]
pub struct Money {
    /// Amount in cents.
    pub amount_cents: i64,
}

impl Money {
    /// Zero dollars.
    pub const ZERO: Money = Money::new(0);

    /// Create a new Money value from cents.
    pub const fn new(amount_cents: i64) -> Self {
        Self { amount_cents }
    }

    /// Create a Money value from a decimal dollar amount.
    ///
    /// Rounds to the nearest cent, halves away from zero.
    ///
    /// ```
    /// use storefront_commerce::money::Money;
    /// let price = Money::from_decimal(49.99);
    /// assert_eq!(price.amount_cents, 4999);
    /// ```
    pub fn from_decimal(amount: f64) -> Self {
        let amount_cents = (amount * CENTS_PER_UNIT as f64).round() as i64;
        Self::new(amount_cents)
    }

    /// Check if this is zero.
    pub fn is_zero(&self) -> bool {
        self.amount_cents == 0
    }

    /// Check if this is negative.
    pub fn is_negative(&self) -> bool {
        self.amount_cents < 0
    }

    /// Convert to a decimal value.
    pub fn to_decimal(&self) -> f64 {
        self.amount_cents as f64 / CENTS_PER_UNIT as f64
    }

    /// Format as a display string (e.g., "$49.99").
    pub fn display(&self) -> String {
        let sign = if self.is_negative() { "-" } else { "" };
        format!("{}${}", sign, self.display_amount())
    }

    /// Format as a display string without symbol or sign (e.g., "49.99").
    pub fn display_amount(&self) -> String {
        let cents = self.amount_cents.unsigned_abs();
        let unit = CENTS_PER_UNIT as u64;
        format!("{}.{:02}", cents / unit, cents % unit)
    }

    /// Try to add another Money value, returning None on overflow.
    pub fn try_add(&self, other: &Money) -> Option<Money> {
        self.amount_cents
            .checked_add(other.amount_cents)
            .map(Money::new)
    }

    /// Try to multiply by a quantity, returning None on overflow.
    pub fn try_multiply(&self, factor: i64) -> Option<Money> {
        self.amount_cents.checked_mul(factor).map(Money::new)
    }

    /// Multiply by a quantity, saturating on overflow.
    pub fn multiply(&self, factor: i64) -> Money {
        Money::new(self.amount_cents.saturating_mul(factor))
    }

    /// Apply a rate expressed in basis points (1000 = 10 %).
    ///
    /// Rounds half away from zero to the nearest cent.
    pub fn percentage_bps(&self, bps: i64) -> Money {
        let scaled = i128::from(self.amount_cents) * i128::from(bps);
        let half = BPS_PER_UNIT / 2;
        let rounded = if scaled >= 0 {
            (scaled + half) / BPS_PER_UNIT
        } else {
            (scaled - half) / BPS_PER_UNIT
        };
        Money::new(rounded.clamp(i128::from(i64::MIN), i128::from(i64::MAX)) as i64)
    }

    /// Sum an iterator of Money values, returning None on overflow.
    pub fn try_sum<'a>(mut iter: impl Iterator<Item = &'a Money>) -> Option<Money> {
        iter.try_fold(Money::ZERO, |acc, m| acc.try_add(m))
    }
}

impl Add for Money {
    type Output = Money;

    fn add(self, other: Money) -> Money {
        Money::new(self.amount_cents.saturating_add(other.amount_cents))
    }
}

impl Mul<i64> for Money {
    type Output = Money;

    fn mul(self, factor: i64) -> Money {
        self.multiply(factor)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Money {
        iter.fold(Money::ZERO, |acc, m| acc + m)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display())
    }
}

/// Serde adapter that reads and writes a [`Money`] as a plain decimal number.
///
/// The catalog API sends prices as JSON numbers such as `109.95`.
pub mod as_decimal {
    use super::Money;
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(money: &Money, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(money.to_decimal())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Money, D::Error> {
        let amount = f64::deserialize(deserializer)?;
        if !amount.is_finite() || amount < 0.0 {
            return Err(de::Error::custom(format!(
                "price must be a non-negative number, got {amount}"
            )));
        }
        Ok(Money::from_decimal(amount))
    }
}
