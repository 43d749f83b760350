//! Warehouse domain module.
//!
//! Business rules for warehouses and their bounded stock counters, implemented
//! purely as deterministic domain logic (no IO, no HTTP, no storage).

pub mod error;
pub mod stock;
pub mod store;
pub mod warehouse;

pub use error::{DomainError, DomainResult};
pub use stock::StockLevel;
pub use store::WarehouseStore;
pub use warehouse::{Warehouse, WarehouseId};
