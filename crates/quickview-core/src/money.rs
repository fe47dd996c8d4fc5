//! Money type for storefront prices.
//!
//! The storefront reports prices as integers in the smallest currency unit
//! (cents), which avoids floating-point drift. This is a single-currency
//! storefront; rendering is fixed to the dollar format.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A price in minor currency units (cents).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(transparent)]
pub struct Money {
    /// Amount in cents.
    pub cents: i64,
}

impl Money {
    /// Create a price from cents.
    pub fn new(cents: i64) -> Self {
        Self { cents }
    }

    /// Format as a display string (e.g., "$49.99").
    pub fn display(&self) -> String {
        let sign = if self.cents < 0 { "-" } else { "" };
        let abs = self.cents.unsigned_abs();
        format!("{}${}.{:02}", sign, abs / 100, abs % 100)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display())
    }
}
