use serde::{Deserialize, Serialize};

use crate::stock::StockLevel;

/// Warehouse identifier, allocated by the registry.
///
/// A plain monotonically increasing integer; never reused within a process.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WarehouseId(u64);

impl WarehouseId {
    pub fn new(raw: u64) -> Self {
        Self(raw)
    }

    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl core::fmt::Display for WarehouseId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

/// A named warehouse owning one stock counter.
#[derive(Debug, Clone, PartialEq)]
pub struct Warehouse {
    name: String,
    stock: StockLevel,
}

impl Warehouse {
    pub fn new(name: impl Into<String>, stock: StockLevel) -> Self {
        Self {
            name: name.into(),
            stock,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn stock(&self) -> &StockLevel {
        &self.stock
    }

    /// Add stock, bounded by the counter's capacity.
    pub fn add_stock(&mut self, amount: f64) {
        self.stock.add(amount);
    }

    /// Take stock and report how much actually came out.
    pub fn remove_stock(&mut self, amount: f64) -> f64 {
        self.stock.remove(amount)
    }
}
