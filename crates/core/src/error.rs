//! Domain error model.

use thiserror::Error;

use crate::id::ItemId;

/// Result type used across the domain layer.
pub type InventoryResult<T> = Result<T, InventoryError>;

/// Domain-level error.
///
/// Keep this focused on deterministic, recoverable business failures. None of
/// these are fatal to the process; the calling shell decides how to present
/// them. Infrastructure concerns belong elsewhere.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InventoryError {
    /// Create was called with an identifier that is already registered.
    #[error("item {0} already exists")]
    DuplicateItem(ItemId),

    /// A stock adjustment referenced an identifier that is not registered.
    #[error("item {0} not found")]
    ItemNotFound(ItemId),

    /// A stock adjustment of zero or less was requested.
    #[error("quantity must be positive, got {0}")]
    InvalidQuantity(i64),

    /// A sale asked for more units than are on hand.
    #[error("insufficient stock for item {item_id}: requested {requested}, available {available}")]
    InsufficientStock {
        item_id: ItemId,
        requested: u64,
        available: u64,
    },

    /// A value failed validation (e.g. empty identifier, malformed price).
    #[error("validation failed: {0}")]
    Validation(String),
}

impl InventoryError {
    pub fn duplicate_item(id: ItemId) -> Self {
        Self::DuplicateItem(id)
    }

    pub fn item_not_found(id: ItemId) -> Self {
        Self::ItemNotFound(id)
    }

    pub fn invalid_quantity(quantity: i64) -> Self {
        Self::InvalidQuantity(quantity)
    }

    pub fn insufficient_stock(item_id: ItemId, requested: u64, available: u64) -> Self {
        Self::InsufficientStock {
            item_id,
            requested,
            available,
        }
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }
}
