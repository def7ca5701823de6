//! Money value object for item prices.
//!
//! Prices are stored in minor currency units (cents) to avoid floating-point
//! drift. A price is never negative; the type makes that unrepresentable.

use core::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::error::InventoryError;
use crate::value_object::ValueObject;

/// Non-negative price in minor currency units (e.g. cents).
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Price(u64);

impl Price {
    pub const ZERO: Price = Price(0);

    pub fn from_minor_units(minor_units: u64) -> Self {
        Self(minor_units)
    }

    pub fn minor_units(&self) -> u64 {
        self.0
    }
}

impl ValueObject for Price {}

impl core::fmt::Display for Price {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}.{:02}", self.0 / 100, self.0 % 100)
    }
}

impl FromStr for Price {
    type Err = InventoryError;

    /// Parse a decimal string such as `"0.5"`, `"12"`, or `"12.99"`.
    ///
    /// At most two fraction digits are accepted; a single fraction digit
    /// means tenths (`"0.5"` is fifty cents). Negative values are rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(InventoryError::validation("price cannot be empty"));
        }
        if s.starts_with('-') {
            return Err(InventoryError::validation("price cannot be negative"));
        }

        let (whole, fraction) = match s.split_once('.') {
            Some((whole, fraction)) => (whole, fraction),
            None => (s, ""),
        };
        if fraction.len() > 2 {
            return Err(InventoryError::validation(
                "price supports at most two fraction digits",
            ));
        }
        if whole.is_empty() && fraction.is_empty() {
            return Err(InventoryError::validation("malformed price"));
        }

        let parse_digits = |digits: &str| -> Result<u64, InventoryError> {
            if digits.is_empty() {
                return Ok(0);
            }
            digits
                .parse::<u64>()
                .map_err(|_| InventoryError::validation(format!("malformed price: {s}")))
        };

        let whole = parse_digits(whole)?;
        let mut cents = parse_digits(fraction)?;
        if fraction.len() == 1 {
            cents *= 10;
        }

        whole
            .checked_mul(100)
            .and_then(|w| w.checked_add(cents))
            .map(Price)
            .ok_or_else(|| InventoryError::validation(format!("price out of range: {s}")))
    }
}
