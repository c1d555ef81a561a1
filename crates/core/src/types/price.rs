//! Type-safe price and rating representations using decimal arithmetic.
//!
//! Both types serialize as decimal strings (`"2499.00"`, `"4.9"`) so that
//! clients never see binary floating point.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// Errors that can occur when constructing a [`Price`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum PriceError {
    #[error("price cannot be negative (got {0})")]
    Negative(Decimal),
}

/// A non-negative monetary amount in the store currency (INR).
///
/// Stored with two decimal places; extra precision is rounded half-even.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "Decimal", into = "Decimal")]
pub struct Price(Decimal);

impl Price {
    /// A price of zero.
    pub const ZERO: Self = Self(Decimal::ZERO);

    /// Create a price from a decimal amount.
    ///
    /// # Errors
    ///
    /// Returns [`PriceError::Negative`] if the amount is below zero.
    pub fn new(amount: Decimal) -> Result<Self, PriceError> {
        if amount.is_sign_negative() && !amount.is_zero() {
            return Err(PriceError::Negative(amount));
        }
        let mut amount = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointNearestEven);
        amount.rescale(2);
        Ok(Self(amount))
    }

    /// Create a price from a whole number of rupees.
    #[must_use]
    pub fn from_rupees(rupees: u32) -> Self {
        let mut amount = Decimal::from(rupees);
        amount.rescale(2);
        Self(amount)
    }

    /// Get the underlying amount.
    #[must_use]
    pub const fn amount(&self) -> Decimal {
        self.0
    }
}

impl TryFrom<Decimal> for Price {
    type Error = PriceError;

    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Price> for Decimal {
    fn from(price: Price) -> Self {
        price.0
    }
}

impl core::fmt::Display for Price {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "₹{:.2}", self.0)
    }
}

/// Errors that can occur when constructing a [`Rating`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum RatingError {
    #[error("rating must be between 0 and 5 (got {0})")]
    OutOfRange(Decimal),
}

/// An average rating between 0.00 and 5.00 inclusive.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(try_from = "Decimal", into = "Decimal")]
pub struct Rating(Decimal);

impl Rating {
    /// The rating given to newly created artisans and products.
    pub const ZERO: Self = Self(Decimal::ZERO);

    /// Upper bound of the scale.
    pub const MAX: Decimal = Decimal::from_parts(5, 0, 0, false, 0);

    /// Create a rating, rounding to two decimal places.
    ///
    /// # Errors
    ///
    /// Returns [`RatingError::OutOfRange`] if the value is outside `0..=5`.
    pub fn new(value: Decimal) -> Result<Self, RatingError> {
        if value < Decimal::ZERO || value > Self::MAX {
            return Err(RatingError::OutOfRange(value));
        }
        Ok(Self(value.round_dp(2)))
    }

    /// Get the underlying value.
    #[must_use]
    pub const fn value(&self) -> Decimal {
        self.0
    }
}

impl TryFrom<Decimal> for Rating {
    type Error = RatingError;

    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Rating> for Decimal {
    fn from(rating: Rating) -> Self {
        rating.0
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::str::FromStr;

    use super::*;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_price_rejects_negative() {
        assert_eq!(
            Price::new(dec("-0.01")),
            Err(PriceError::Negative(dec("-0.01")))
        );
        assert!(Price::new(Decimal::ZERO).is_ok());
    }

    #[test]
    fn test_price_rounds_to_paise() {
        assert_eq!(Price::new(dec("10.125")).unwrap().amount(), dec("10.12"));
        assert_eq!(Price::new(dec("10.135")).unwrap().amount(), dec("10.14"));
    }

    #[test]
    fn test_price_serializes_as_string() {
        let json = serde_json::to_string(&Price::from_rupees(1299)).unwrap();
        assert_eq!(json, "\"1299.00\"");

        let parsed: Price = serde_json::from_str("\"12999\"").unwrap();
        assert_eq!(parsed, Price::from_rupees(12999));
        assert!(serde_json::from_str::<Price>("\"-5\"").is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(Price::from_rupees(8499).to_string(), "₹8499.00");
    }

    #[test]
    fn test_rating_bounds() {
        assert!(Rating::new(dec("5.0")).is_ok());
        assert!(Rating::new(Decimal::ZERO).is_ok());
        assert!(Rating::new(dec("5.01")).is_err());
        assert!(Rating::new(dec("-1")).is_err());
        assert_eq!(Rating::new(dec("4.876")).unwrap().value(), dec("4.88"));
    }
}
