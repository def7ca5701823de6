//! Inventory domain module.
//!
//! This crate contains the business rules for a single warehouse's stock,
//! implemented purely as deterministic domain logic (no IO, no HTTP, no
//! storage). Every failed command reports an explicit error to the caller;
//! the crate never prints or logs in place of signaling failure.

pub mod item;
pub mod warehouse;

pub use item::WarehouseItem;
pub use warehouse::Warehouse;
