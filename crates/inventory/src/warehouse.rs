use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use stockyard_core::{InventoryError, InventoryResult, ItemId, Price, WarehouseId};

use crate::item::WarehouseItem;

/// The authoritative item store for one physical warehouse.
///
/// Owns a mapping from item identifier to [`WarehouseItem`] and enforces the
/// quantity invariants on every command. Every key in the mapping equals the
/// `id` field of its value; the map is ordered so all iteration (and
/// therefore search output) is deterministic, ascending by identifier.
///
/// Commands take `&mut self` and queries take `&self`; each operation is a
/// single atomic transition, and a failed command leaves the store unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Warehouse {
    id: WarehouseId,
    name: String,
    location: String,
    items: BTreeMap<ItemId, WarehouseItem>,
}

impl Warehouse {
    /// Create an empty warehouse with the given identity.
    pub fn new(id: WarehouseId, name: impl Into<String>, location: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            location: location.into(),
            items: BTreeMap::new(),
        }
    }

    pub fn id(&self) -> &WarehouseId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    /// Number of distinct items tracked (not total units).
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// All tracked items, ascending by identifier.
    pub fn items(&self) -> impl Iterator<Item = &WarehouseItem> {
        self.items.values()
    }

    /// Register a brand new item.
    ///
    /// For items not yet tracked only; restocking an existing item goes
    /// through [`Warehouse::restock_item`]. Fails with `DuplicateItem` when
    /// the identifier is already registered, with the existing record left
    /// untouched. The initial quantity may be zero.
    pub fn create_item(
        &mut self,
        id: ItemId,
        name: impl Into<String>,
        price: Price,
        quantity: u64,
    ) -> InventoryResult<()> {
        if self.items.contains_key(&id) {
            return Err(InventoryError::duplicate_item(id));
        }
        let item = WarehouseItem::new(id.clone(), name, price, quantity)?;
        self.items.insert(id, item);
        Ok(())
    }

    /// Increase the stock of an existing item, e.g. on procurement.
    ///
    /// Fails with `InvalidQuantity` when `quantity` is zero or negative
    /// (checked before the lookup, so the error for a nonsense quantity does
    /// not depend on the identifier), and with `ItemNotFound` when the
    /// identifier is not registered. Only the stock level is mutated.
    pub fn restock_item(&mut self, id: &ItemId, quantity: i64) -> InventoryResult<()> {
        if quantity <= 0 {
            return Err(InventoryError::invalid_quantity(quantity));
        }
        let item = self
            .items
            .get_mut(id)
            .ok_or_else(|| InventoryError::item_not_found(id.clone()))?;
        item.receive(quantity as u64);
        Ok(())
    }

    /// Decrease the stock of an existing item on sale.
    ///
    /// Fails with `InvalidQuantity` (zero or negative), `ItemNotFound`, or
    /// `InsufficientStock` when the request exceeds the on-hand quantity.
    /// Oversell is rejected, never clamped; stock is unchanged on failure.
    pub fn sell_item(&mut self, id: &ItemId, quantity: i64) -> InventoryResult<()> {
        if quantity <= 0 {
            return Err(InventoryError::invalid_quantity(quantity));
        }
        let item = self
            .items
            .get_mut(id)
            .ok_or_else(|| InventoryError::item_not_found(id.clone()))?;
        item.dispatch(quantity as u64)
    }

    /// Look an item up by its exact identifier.
    ///
    /// A query, not a command: absence is `None`, not an error.
    pub fn find_by_id(&self, id: &ItemId) -> Option<&WarehouseItem> {
        self.items.get(id)
    }

    /// Find every item whose name contains `fragment`, case-insensitively.
    ///
    /// Results come back ascending by identifier so output is reproducible.
    /// No match is an empty vec, not an error. An empty fragment matches
    /// every item.
    pub fn find_by_name(&self, fragment: &str) -> Vec<&WarehouseItem> {
        let needle = fragment.to_lowercase();
        self.items
            .values()
            .filter(|item| item.name().to_lowercase().contains(&needle))
            .collect()
    }
}
