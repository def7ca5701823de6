//! Strongly-typed identifiers used across the domain.
//!
//! Identifiers are caller-supplied strings (e.g. `"P1"`, `"WH-001"`), not
//! generated. Construction validates that the value is non-empty; once built,
//! an identifier never changes.

use core::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::error::InventoryError;

/// Identifier of a warehouse.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WarehouseId(String);

/// Identifier of an item tracked in a warehouse.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(String);

macro_rules! impl_string_id {
    ($t:ty, $name:literal) => {
        impl $t {
            /// Create an identifier from a caller-supplied string.
            ///
            /// Rejects empty or whitespace-only input.
            pub fn new(value: impl Into<String>) -> Result<Self, InventoryError> {
                let value = value.into();
                if value.trim().is_empty() {
                    return Err(InventoryError::validation(concat!(
                        $name,
                        " cannot be empty"
                    )));
                }
                Ok(Self(value))
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }

            pub fn into_string(self) -> String {
                self.0
            }
        }

        impl core::fmt::Display for $t {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                core::fmt::Display::fmt(&self.0, f)
            }
        }

        impl FromStr for $t {
            type Err = InventoryError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::new(s)
            }
        }

        impl AsRef<str> for $t {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

impl_string_id!(WarehouseId, "WarehouseId");
impl_string_id!(ItemId, "ItemId");
