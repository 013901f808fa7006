//! Price representation using decimal arithmetic.
//!
//! Prices are currency-agnostic amounts as returned by the product API. The
//! storefront displays them in rupees (`Rs. 1000`).

use core::fmt;
use core::num::NonZeroU32;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Display prefix for every rendered amount.
pub const CURRENCY_PREFIX: &str = "Rs.";

/// A price amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Price(Decimal);

impl Price {
    /// Create a new price.
    #[must_use]
    pub const fn new(amount: Decimal) -> Self {
        Self(amount)
    }

    /// The raw amount.
    #[must_use]
    pub const fn amount(&self) -> Decimal {
        self.0
    }

    /// Price of `quantity` units at this unit price.
    #[must_use]
    pub fn times(self, quantity: NonZeroU32) -> Self {
        Self(self.0 * Decimal::from(quantity.get()))
    }

    /// The amount without the currency prefix, e.g. `2000` or `1299.5`.
    #[must_use]
    pub fn plain(&self) -> String {
        self.0.normalize().to_string()
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{CURRENCY_PREFIX} {}", self.plain())
    }
}

impl From<Decimal> for Price {
    fn from(amount: Decimal) -> Self {
        Self(amount)
    }
}

impl From<i64> for Price {
    fn from(amount: i64) -> Self {
        Self(Decimal::from(amount))
    }
}

impl core::iter::Sum for Price {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        Self(iter.map(|p| p.0).sum())
    }
}
