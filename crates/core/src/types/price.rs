//! Listing price using decimal arithmetic.
//!
//! Prices are currency-agnostic amounts; the site displays them in dollars.

use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Errors from parsing a price typed into a form.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum PriceError {
    #[error("price is required")]
    Empty,
    #[error("price must be a number")]
    NotANumber,
    #[error("price cannot be negative")]
    Negative,
}

/// A non-negative listing price.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "Decimal", into = "Decimal")]
pub struct Price(Decimal);

impl Price {
    /// Create a price from a whole-dollar amount.
    #[must_use]
    pub fn from_dollars(dollars: u64) -> Self {
        Self(Decimal::from(dollars))
    }

    /// Create a price, rejecting negative amounts.
    ///
    /// # Errors
    ///
    /// Returns [`PriceError::Negative`] when `amount` is below zero.
    pub fn new(amount: Decimal) -> Result<Self, PriceError> {
        if amount.is_sign_negative() && !amount.is_zero() {
            return Err(PriceError::Negative);
        }
        Ok(Self(amount))
    }

    /// Parse form input such as `2500000`, `2,500,000` or `$850000.50`.
    ///
    /// # Errors
    ///
    /// Returns a [`PriceError`] for blank, non-numeric or negative input.
    pub fn parse(input: &str) -> Result<Self, PriceError> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(PriceError::Empty);
        }
        let digits: String = trimmed
            .strip_prefix('$')
            .unwrap_or(trimmed)
            .chars()
            .filter(|c| *c != ',')
            .collect();
        let amount = Decimal::from_str(&digits).map_err(|_| PriceError::NotANumber)?;
        Self::new(amount)
    }

    #[must_use]
    pub const fn amount(&self) -> Decimal {
        self.0
    }

    /// Format for display with thousands separators, e.g. `$2,500,000`.
    ///
    /// Cents are shown only when the amount is not a whole number.
    #[must_use]
    pub fn display(&self) -> String {
        let fixed = format!("{:.2}", self.0);
        let (whole, cents) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

        let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
        for (i, c) in whole.chars().enumerate() {
            if i > 0 && (whole.len() - i) % 3 == 0 {
                grouped.push(',');
            }
            grouped.push(c);
        }

        if cents == "00" {
            format!("${grouped}")
        } else {
            format!("${grouped}.{cents}")
        }
    }
}

impl TryFrom<Decimal> for Price {
    type Error = PriceError;

    fn try_from(amount: Decimal) -> Result<Self, Self::Error> {
        Self::new(amount)
    }
}

impl From<Price> for Decimal {
    fn from(price: Price) -> Self {
        price.0
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_display_groups_thousands() {
        assert_eq!(Price::from_dollars(2_500_000).display(), "$2,500,000");
        assert_eq!(Price::from_dollars(850_000).display(), "$850,000");
        assert_eq!(Price::from_dollars(450).display(), "$450");
        assert_eq!(Price::from_dollars(0).display(), "$0");
    }

    #[test]
    fn test_display_keeps_cents_when_present() {
        let price = Price::parse("1234.5").unwrap();
        assert_eq!(price.display(), "$1,234.50");
    }

    #[test]
    fn test_parse_accepts_formatted_input() {
        assert_eq!(
            Price::parse("$2,500,000").unwrap(),
            Price::from_dollars(2_500_000)
        );
        assert_eq!(Price::parse(" 850000 ").unwrap(), Price::from_dollars(850_000));
    }

    #[test]
    fn test_parse_rejects_bad_input() {
        assert_eq!(Price::parse(""), Err(PriceError::Empty));
        assert_eq!(Price::parse("lots"), Err(PriceError::NotANumber));
        assert_eq!(Price::parse("-5"), Err(PriceError::Negative));
    }

    #[test]
    fn test_deserialize_rejects_negative() {
        assert!(serde_json::from_str::<Price>("\"-1\"").is_err());
        assert!(serde_json::from_str::<Price>("\"10\"").is_ok());
    }
}
