use std::sync::RwLock;

use stockyard_warehouse::{DomainResult, Warehouse, WarehouseId, WarehouseStore};

/// Shared application state handed to every handler.
///
/// The registry lives behind one process-wide lock; handlers take it for
/// the duration of a single call and hand back owned clones, so nothing
/// borrowed ever crosses an await point.
#[derive(Debug, Default)]
pub struct AppServices {
    registry: RwLock<WarehouseStore>,
}

impl AppServices {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn create_warehouse(
        &self,
        name: &str,
        capacity: &str,
        initial_level: &str,
    ) -> DomainResult<WarehouseId> {
        let id = self
            .registry
            .write()
            .unwrap()
            .create(name, capacity, initial_level)?;
        tracing::info!("created warehouse {id}");
        Ok(id)
    }

    pub fn list_warehouses(&self) -> Vec<(WarehouseId, Warehouse)> {
        self.registry
            .read()
            .unwrap()
            .iter()
            .map(|(id, warehouse)| (id, warehouse.clone()))
            .collect()
    }

    pub fn get_warehouse(&self, id: WarehouseId) -> Option<Warehouse> {
        self.registry.read().unwrap().get(id).cloned()
    }

    pub fn update_warehouse(&self, id: WarehouseId, name: &str, capacity: &str) -> DomainResult<()> {
        self.registry.write().unwrap().update(id, name, capacity)?;
        tracing::info!("updated warehouse {id}");
        Ok(())
    }

    pub fn delete_warehouse(&self, id: WarehouseId) -> bool {
        let removed = self.registry.write().unwrap().delete(id);
        if removed {
            tracing::info!("deleted warehouse {id}");
        }
        removed
    }

    pub fn add_stock(&self, id: WarehouseId, amount: f64) -> DomainResult<()> {
        self.registry.write().unwrap().add_stock(id, amount)?;
        tracing::info!("added {amount} to warehouse {id}");
        Ok(())
    }

    pub fn remove_stock(&self, id: WarehouseId, amount: f64) -> DomainResult<f64> {
        let taken = self.registry.write().unwrap().remove_stock(id, amount)?;
        tracing::info!("removed {taken} from warehouse {id}");
        Ok(taken)
    }
}
