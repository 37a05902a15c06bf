//! Integer price representation in minor currency units.
//!
//! Totals are summed as integers so nothing is lost to floating-point
//! rounding; decimal conversion only happens when a price is displayed.

use std::fmt;
use std::iter::Sum;
use std::ops::Add;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A price in minor currency units (cents).
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Price(i64);

impl Price {
    /// Zero price.
    pub const ZERO: Self = Self(0);

    /// Create a price from minor units.
    #[must_use]
    pub const fn from_minor(minor: i64) -> Self {
        Self(minor)
    }

    /// Amount in minor units.
    #[must_use]
    pub const fn minor_units(self) -> i64 {
        self.0
    }

    /// Price of `quantity` units at this unit price.
    #[must_use]
    pub fn times(self, quantity: u32) -> Self {
        Self(self.0.saturating_mul(i64::from(quantity)))
    }

    /// Amount in major units with two decimal places.
    #[must_use]
    pub fn to_decimal(self) -> Decimal {
        Decimal::new(self.0, 2)
    }

    /// Format the amount without a currency symbol (e.g., "24.00").
    #[must_use]
    pub fn amount_string(self) -> String {
        self.to_decimal().round_dp(2).to_string()
    }
}

/// Formats with the store currency symbol (e.g., "$24.00").
impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${}", self.amount_string())
    }
}

impl Add for Price {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self(self.0.saturating_add(rhs.0))
    }
}

impl Sum for Price {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

impl From<i64> for Price {
    fn from(minor: i64) -> Self {
        Self(minor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_amount_string_keeps_two_decimals() {
        assert_eq!(Price::from_minor(2400).amount_string(), "24.00");
        assert_eq!(Price::from_minor(1999).amount_string(), "19.99");
        assert_eq!(Price::from_minor(5).amount_string(), "0.05");
        assert_eq!(Price::ZERO.amount_string(), "0.00");
    }

    #[test]
    fn test_display_adds_currency_symbol() {
        assert_eq!(Price::from_minor(1200).to_string(), "$12.00");
    }

    #[test]
    fn test_times_and_sum() {
        let unit = Price::from_minor(1200);
        assert_eq!(unit.times(2), Price::from_minor(2400));
        assert_eq!(unit.times(0), Price::ZERO);

        let total: Price = [Price::from_minor(100), Price::from_minor(250)]
            .into_iter()
            .sum();
        assert_eq!(total.minor_units(), 350);
    }
}
