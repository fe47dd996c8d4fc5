//! Bounded purchase quantity.

use serde::{Deserialize, Serialize};

/// Smallest quantity the quick view will submit.
pub const MIN_QUANTITY: i64 = 1;
/// Largest quantity the quick view will submit.
pub const MAX_QUANTITY: i64 = 99;

/// Purchase quantity, always within `[MIN_QUANTITY, MAX_QUANTITY]`.
///
/// Every operation is total: malformed or out-of-range input degrades to a
/// safe value instead of surfacing an error mid-interaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Quantity(i64);

impl Quantity {
    /// Start at the minimum quantity.
    pub fn new() -> Self {
        Self(MIN_QUANTITY)
    }

    /// Current value.
    pub fn get(&self) -> i64 {
        self.0
    }

    /// Step up, clamping at the maximum.
    pub fn increase(&mut self) {
        self.0 = (self.0 + 1).min(MAX_QUANTITY);
    }

    /// Step down, clamping at the minimum.
    pub fn decrease(&mut self) {
        self.0 = (self.0 - 1).max(MIN_QUANTITY);
    }

    /// Adopt a value typed into the quantity field.
    ///
    /// Unparseable input and values below the minimum normalize to the
    /// minimum; values above the maximum normalize to the maximum.
    pub fn set_from_input(&mut self, raw: &str) {
        let value = raw.trim().parse::<i64>().unwrap_or(MIN_QUANTITY);
        self.0 = value.clamp(MIN_QUANTITY, MAX_QUANTITY);
    }
}

impl Default for Quantity {
    fn default() -> Self {
        Self::new()
    }
}
