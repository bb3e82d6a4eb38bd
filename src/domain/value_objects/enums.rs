//! # Classification Enums
//!
//! Enumeration types for market classifications.
//!
//! - [`DemandLevel`] - buyer demand derived from trailing RFQ counts
//! - [`CompetitionLevel`] - supplier competition within a category
//! - [`PriceStability`] - price dispersion across comparables
//! - [`PriceTrend`] - direction of recent prices vs an older window
//!
//! All enums serialize as lowercase strings (`"high"`, `"stable"`, ...),
//! the wire format consumers already depend on. The thresholds that map
//! raw counts to these levels live in
//! [`crate::domain::services::scoring`].

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Buyer demand level for a category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DemandLevel {
    /// Few or no RFQs in the trailing window.
    Low,
    /// Moderate RFQ activity.
    Medium,
    /// Heavy RFQ activity.
    High,
}

/// Supplier competition level within a category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CompetitionLevel {
    /// Few active suppliers.
    Low,
    /// Moderate number of active suppliers.
    Medium,
    /// Crowded category.
    High,
}

/// Price dispersion across comparables.
///
/// A category with zero comparables is volatile: there is no evidence of
/// stability, and the absence of data must not read as a stable market.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PriceStability {
    /// Spread ratio below the stability threshold with at least one comparable.
    Stable,
    /// Wide spread or no evidence.
    Volatile,
}

/// Direction of recent prices relative to an older comparison window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PriceTrend {
    /// Recent mean above the older mean by more than the threshold.
    Rising,
    /// No significant move, or insufficient history to tell.
    Stable,
    /// Recent mean below the older mean by more than the threshold.
    Falling,
}

impl DemandLevel {
    /// Returns true if demand is high.
    #[inline]
    #[must_use]
    pub const fn is_high(self) -> bool {
        matches!(self, Self::High)
    }
}

impl CompetitionLevel {
    /// Returns true if competition is high.
    #[inline]
    #[must_use]
    pub const fn is_high(self) -> bool {
        matches!(self, Self::High)
    }
}

impl PriceStability {
    /// Returns true if prices are stable.
    #[inline]
    #[must_use]
    pub const fn is_stable(self) -> bool {
        matches!(self, Self::Stable)
    }
}

impl PriceTrend {
    /// Returns true if the trend is stable.
    #[inline]
    #[must_use]
    pub const fn is_stable(self) -> bool {
        matches!(self, Self::Stable)
    }
}

macro_rules! impl_lowercase_display {
    ($ty:ty { $($variant:ident => $text:literal),+ $(,)? }) => {
        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                let s = match self {
                    $(Self::$variant => $text,)+
                };
                write!(f, "{s}")
            }
        }

        impl FromStr for $ty {
            type Err = String;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($text => Ok(Self::$variant),)+
                    other => Err(format!("unknown {}: {other}", stringify!($ty))),
                }
            }
        }
    };
}

impl_lowercase_display!(DemandLevel {
    Low => "low",
    Medium => "medium",
    High => "high",
});

impl_lowercase_display!(CompetitionLevel {
    Low => "low",
    Medium => "medium",
    High => "high",
});

impl_lowercase_display!(PriceStability {
    Stable => "stable",
    Volatile => "volatile",
});

impl_lowercase_display!(PriceTrend {
    Rising => "rising",
    Stable => "stable",
    Falling => "falling",
});
