//! # Price Value Object
//!
//! Decimal unit price with validation.
//!
//! Prices are always strictly positive: listings with a zero or negative
//! price are filtered out before they ever become pricing evidence, and the
//! constructor enforces the same rule for values built in code.
//!
//! # Examples
//!
//! ```
//! use market_analytics::domain::value_objects::Price;
//!
//! let price = Price::from_f64(99.5).unwrap();
//! assert!(price.get() > rust_decimal::Decimal::ZERO);
//!
//! assert!(Price::from_f64(0.0).is_err());
//! assert!(Price::from_f64(-5.0).is_err());
//! ```

use crate::domain::errors::{DomainError, DomainResult};
use rust_decimal::prelude::FromPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A strictly positive unit price.
///
/// Wraps `rust_decimal::Decimal` so monetary values never pass through
/// floating point on the way to or from storage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Price(Decimal);

impl Price {
    /// Creates a price from a decimal value.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidPrice` if the value is zero or negative.
    pub fn new(value: Decimal) -> DomainResult<Self> {
        if value <= Decimal::ZERO {
            return Err(DomainError::invalid_price(format!(
                "must be positive, got {value}"
            )));
        }
        Ok(Self(value))
    }

    /// Creates a price from an `f64`.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidPrice` if the value is not a finite
    /// positive number.
    pub fn from_f64(value: f64) -> DomainResult<Self> {
        let decimal = Decimal::from_f64(value)
            .ok_or_else(|| DomainError::invalid_price(format!("not representable: {value}")))?;
        Self::new(decimal)
    }

    /// Returns the underlying decimal value.
    #[must_use]
    pub const fn get(&self) -> Decimal {
        self.0
    }

    /// Returns the price rounded to two decimal places.
    ///
    /// Used at the response edge; internal arithmetic keeps full precision.
    #[must_use]
    pub fn rounded(&self) -> Decimal {
        self.0.round_dp(2)
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn price_new_positive() {
        let price = Price::new(Decimal::from(100)).unwrap();
        assert_eq!(price.get(), Decimal::from(100));
    }

    #[test]
    fn price_new_zero_rejected() {
        assert!(Price::new(Decimal::ZERO).is_err());
    }

    #[test]
    fn price_new_negative_rejected() {
        assert!(Price::new(Decimal::from(-10)).is_err());
    }

    #[test]
    fn price_from_f64() {
        let price = Price::from_f64(99.99).unwrap();
        assert_eq!(price.rounded().to_string(), "99.99");
    }

    #[test]
    fn price_from_f64_nan_rejected() {
        assert!(Price::from_f64(f64::NAN).is_err());
    }

    #[test]
    fn price_rounded_two_decimals() {
        let price = Price::from_f64(10.005).unwrap();
        assert_eq!(price.rounded(), price.get().round_dp(2));
    }

    #[test]
    fn price_ordering() {
        let low = Price::from_f64(90.0).unwrap();
        let high = Price::from_f64(130.0).unwrap();
        assert!(low < high);
    }

    #[test]
    fn price_display() {
        let price = Price::new(Decimal::from(42)).unwrap();
        assert_eq!(price.to_string(), "42");
    }
}
