use serde::{Deserialize, Serialize};

use stockyard_core::{Entity, InventoryError, InventoryResult, ItemId, Price};

/// A product tracked in a warehouse, together with its current stock level.
///
/// The product attributes (identifier, name, price) and the inventory count
/// collapse into one record: only one concrete shape exists, so there is no
/// separate `Product` type and no runtime polymorphism.
///
/// `quantity` is a `u64`, so a negative stock level is unrepresentable; the
/// store enforces the remaining invariants (positive adjustments, no
/// oversell) before mutating it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WarehouseItem {
    id: ItemId,
    name: String,
    price: Price,
    quantity: u64,
}

impl WarehouseItem {
    /// Build a new item record.
    ///
    /// Rejects an empty or whitespace-only name. The identifier is already
    /// validated by [`ItemId`] construction and is immutable from here on.
    pub fn new(
        id: ItemId,
        name: impl Into<String>,
        price: Price,
        quantity: u64,
    ) -> InventoryResult<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(InventoryError::validation("item name cannot be empty"));
        }
        Ok(Self {
            id,
            name,
            price,
            quantity,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> Price {
        self.price
    }

    pub fn quantity(&self) -> u64 {
        self.quantity
    }

    /// Add received units to the stock level.
    pub(crate) fn receive(&mut self, units: u64) {
        self.quantity = self.quantity.saturating_add(units);
    }

    /// Remove sold units from the stock level.
    ///
    /// Rejects rather than clamps: if `units` exceeds the on-hand quantity
    /// the stock is left untouched and the caller gets `InsufficientStock`.
    pub(crate) fn dispatch(&mut self, units: u64) -> InventoryResult<()> {
        if units > self.quantity {
            return Err(InventoryError::insufficient_stock(
                self.id.clone(),
                units,
                self.quantity,
            ));
        }
        self.quantity -= units;
        Ok(())
    }
}

impl Entity for WarehouseItem {
    type Id = ItemId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

impl core::fmt::Display for WarehouseItem {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "{} | {} | price {} | qty {}",
            self.id, self.name, self.price, self.quantity
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item_id(raw: &str) -> ItemId {
        ItemId::new(raw).unwrap()
    }

    #[test]
    fn new_rejects_empty_name() {
        let err = WarehouseItem::new(item_id("P1"), "   ", Price::ZERO, 0).unwrap_err();
        assert!(matches!(err, InventoryError::Validation(_)));
    }

    #[test]
    fn dispatch_rejects_more_than_on_hand() {
        let mut item = WarehouseItem::new(item_id("P1"), "Bolt", Price::ZERO, 10).unwrap();
        let err = item.dispatch(11).unwrap_err();
        assert_eq!(
            err,
            InventoryError::InsufficientStock {
                item_id: item_id("P1"),
                requested: 11,
                available: 10,
            }
        );
        assert_eq!(item.quantity(), 10);
    }

    #[test]
    fn survives_json_round_trip() {
        // The future load/save boundary serializes item records keyed by id.
        let item =
            WarehouseItem::new(item_id("P1"), "Bolt", "0.5".parse().unwrap(), 100).unwrap();
        let json = serde_json::to_string(&item).unwrap();
        let back: WarehouseItem = serde_json::from_str(&json).unwrap();
        assert_eq!(back, item);
    }
}
