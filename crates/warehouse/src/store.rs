use std::collections::BTreeMap;

use crate::error::{DomainError, DomainResult};
use crate::stock::StockLevel;
use crate::warehouse::{Warehouse, WarehouseId};

/// In-memory registry of warehouses, keyed by monotonically allocated ids.
///
/// Ids start at 1, only grow, and are never reused, so key order of the map
/// is also insertion order. User-entered numbers arrive as raw form text and
/// are parsed here; malformed text is rejected while well-formed out-of-range
/// numbers are left to [`StockLevel`]'s clamping.
#[derive(Debug, Default)]
pub struct WarehouseStore {
    entries: BTreeMap<WarehouseId, Warehouse>,
    next_id: u64,
}

impl WarehouseStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn allocate_id(&mut self) -> WarehouseId {
        self.next_id += 1;
        WarehouseId::new(self.next_id)
    }

    /// Create a warehouse from raw form input and return its id.
    ///
    /// Both numeric fields are parsed before the name is checked, so a form
    /// with several mistakes reports the numeric one first. Nothing is stored
    /// when any check fails.
    pub fn create(&mut self, name: &str, capacity: &str, initial_level: &str) -> DomainResult<WarehouseId> {
        let capacity = parse_number(capacity)
            .ok_or_else(|| DomainError::validation("Invalid numeric values"))?;
        let initial_level = parse_number(initial_level)
            .ok_or_else(|| DomainError::validation("Invalid numeric values"))?;

        let name = name.trim();
        if name.is_empty() {
            return Err(DomainError::validation("Name is required"));
        }

        let id = self.allocate_id();
        self.entries
            .insert(id, Warehouse::new(name, StockLevel::new(capacity, initial_level)));
        Ok(id)
    }

    pub fn get(&self, id: WarehouseId) -> Option<&Warehouse> {
        self.entries.get(&id)
    }

    /// Replace a warehouse's name and capacity, keeping its current level.
    ///
    /// The level is rebuilt through the new counter, so shrinking the
    /// capacity below the live level clamps the level down with it.
    pub fn update(&mut self, id: WarehouseId, name: &str, capacity: &str) -> DomainResult<()> {
        let entry = match self.entries.get_mut(&id) {
            Some(entry) => entry,
            None => return Err(DomainError::not_found()),
        };

        let capacity = parse_number(capacity)
            .ok_or_else(|| DomainError::validation("Invalid capacity value"))?;

        let name = name.trim();
        if name.is_empty() {
            return Err(DomainError::validation("Name is required"));
        }

        let level = entry.stock().level();
        *entry = Warehouse::new(name, StockLevel::new(capacity, level));
        Ok(())
    }

    /// Remove a warehouse, reporting whether anything was there.
    ///
    /// Deleting an absent id is a no-op, not an error.
    pub fn delete(&mut self, id: WarehouseId) -> bool {
        self.entries.remove(&id).is_some()
    }

    pub fn add_stock(&mut self, id: WarehouseId, amount: f64) -> DomainResult<()> {
        match self.entries.get_mut(&id) {
            Some(entry) => {
                entry.add_stock(amount);
                Ok(())
            }
            None => Err(DomainError::not_found()),
        }
    }

    pub fn remove_stock(&mut self, id: WarehouseId, amount: f64) -> DomainResult<f64> {
        match self.entries.get_mut(&id) {
            Some(entry) => Ok(entry.remove_stock(amount)),
            None => Err(DomainError::not_found()),
        }
    }

    /// Iterate entries in insertion order (ids only ever grow).
    pub fn iter(&self) -> impl Iterator<Item = (WarehouseId, &Warehouse)> {
        self.entries.iter().map(|(id, warehouse)| (*id, warehouse))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Parse a user-entered number, tolerating surrounding whitespace.
fn parse_number(raw: &str) -> Option<f64> {
    raw.trim().parse().ok()
}
