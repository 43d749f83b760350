//! Form bodies posted by the HTML pages.
//!
//! Browsers omit fields freely, so every field is optional here and the
//! accessors fill in the defaults the pages rely on.

use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct CreateWarehouseForm {
    name: Option<String>,
    capacity: Option<String>,
    initial_level: Option<String>,
}

impl CreateWarehouseForm {
    pub fn name(&self) -> &str {
        self.name.as_deref().unwrap_or("")
    }

    pub fn capacity(&self) -> &str {
        self.capacity.as_deref().unwrap_or("0")
    }

    pub fn initial_level(&self) -> &str {
        self.initial_level.as_deref().unwrap_or("0")
    }
}

#[derive(Debug, Deserialize)]
pub struct EditWarehouseForm {
    name: Option<String>,
    capacity: Option<String>,
}

impl EditWarehouseForm {
    pub fn name(&self) -> &str {
        self.name.as_deref().unwrap_or("")
    }

    pub fn capacity(&self) -> &str {
        self.capacity.as_deref().unwrap_or("0")
    }
}

#[derive(Debug, Deserialize)]
pub struct StockAmountForm {
    amount: Option<String>,
}

impl StockAmountForm {
    /// The amount as a number; anything unusable counts as zero.
    ///
    /// Unlike create/edit, a malformed amount is not an error: it falls
    /// through as zero and the mutation becomes a no-op.
    pub fn amount(&self) -> f64 {
        self.amount
            .as_deref()
            .and_then(|raw| raw.trim().parse().ok())
            .unwrap_or(0.0)
    }
}
