//! Type-safe price representation using decimal arithmetic.
//!
//! The catalog API sends prices as plain JSON numbers in roubles. They are held
//! as [`Decimal`] so sorting and display never suffer float rounding, and are
//! written back to the API as JSON numbers.

use core::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Errors that can occur when parsing a [`Price`] from user input.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum PriceError {
    /// The input is not a number.
    #[error("price must be a number")]
    NotANumber,
    /// The input is below zero.
    #[error("price cannot be negative")]
    Negative,
    /// The input has more than two decimal places.
    #[error("price can have at most two decimal places")]
    TooPrecise,
}

/// A catalog price in roubles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Price(#[serde(with = "rust_decimal::serde::float")] Decimal);

impl Price {
    /// Currency sign shown after the amount.
    pub const CURRENCY_SIGN: &'static str = "₽";

    /// Decimal places the API keeps.
    const SCALE: u32 = 2;

    /// Create a new price.
    #[must_use]
    pub const fn new(amount: Decimal) -> Self {
        Self(amount)
    }

    /// Get the decimal amount.
    #[must_use]
    pub const fn amount(&self) -> Decimal {
        self.0
    }

    /// Parse a price typed into a form field.
    ///
    /// Accepts a comma as the decimal separator and ignores surrounding
    /// whitespace. The API stores kopecks, so at most two decimal places
    /// are accepted.
    pub fn parse(input: &str) -> Result<Self, PriceError> {
        let normalized = input.trim().replace(',', ".");
        let amount = Decimal::from_str(&normalized).map_err(|_| PriceError::NotANumber)?;
        if amount.is_sign_negative() && !amount.is_zero() {
            return Err(PriceError::Negative);
        }
        if amount.normalize().scale() > Self::SCALE {
            return Err(PriceError::TooPrecise);
        }
        Ok(Self(amount))
    }

    /// Amount without the currency sign, as shown in form inputs.
    ///
    /// Rounded to kopecks.
    #[must_use]
    pub fn input_value(&self) -> String {
        let amount = self.0.round_dp(Self::SCALE);
        if amount.fract().is_zero() {
            amount.trunc().to_string()
        } else {
            format!("{amount:.2}")
        }
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.input_value(), Self::CURRENCY_SIGN)
    }
}

impl From<Decimal> for Price {
    fn from(amount: Decimal) -> Self {
        Self(amount)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_display_whole_amount() {
        let price = Price::new(Decimal::new(899, 0));
        assert_eq!(price.to_string(), "899 ₽");
    }

    #[test]
    fn test_display_fractional_amount() {
        let price = Price::new(Decimal::new(89_950, 2));
        assert_eq!(price.to_string(), "899.50 ₽");
    }

    #[test]
    fn test_parse_accepts_comma_separator() {
        let price = Price::parse(" 1299,5 ").unwrap();
        assert_eq!(price.amount(), Decimal::new(12_995, 1));
    }

    #[test]
    fn test_parse_rejects_negative_and_text() {
        assert_eq!(Price::parse("-1"), Err(PriceError::Negative));
        assert_eq!(Price::parse("cheap"), Err(PriceError::NotANumber));
    }

    #[test]
    fn test_parse_rejects_sub_kopeck_amounts() {
        assert_eq!(Price::parse("899.999"), Err(PriceError::TooPrecise));
        assert!(Price::parse("899.990").is_ok());
        assert!(Price::parse("899.99").is_ok());
    }

    #[test]
    fn test_display_rounds_instead_of_truncating() {
        let price = Price::new(Decimal::new(899_999, 3));
        assert_eq!(price.to_string(), "900 ₽");

        let price = Price::new(Decimal::new(899_996, 3));
        assert_eq!(price.to_string(), "900 ₽");

        let price = Price::new(Decimal::new(899_456, 3));
        assert_eq!(price.to_string(), "899.46 ₽");
    }

    #[test]
    fn test_deserializes_from_json_number() {
        let price: Price = serde_json::from_str("1599").unwrap();
        assert_eq!(price.amount(), Decimal::new(1599, 0));

        let price: Price = serde_json::from_str("749.99").unwrap();
        assert_eq!(price.amount(), Decimal::new(74_999, 2));
    }

    #[test]
    fn test_serializes_as_json_number() {
        let json = serde_json::to_value(Price::new(Decimal::new(899, 0))).unwrap();
        assert!(json.is_number());
        assert!((json.as_f64().unwrap() - 899.0).abs() < f64::EPSILON);
    }
}
