//! Catalog Lookup boundary
//!
//! The engine never reaches into persistence directly; it resolves
//! references through [`CatalogLookup`]. Production backends implement the
//! trait over their store; [`MemoryCatalog`] is an in-memory implementation
//! used by tests and embedded setups.

use async_trait::async_trait;
use shared::error::{AppError, AppResult, ErrorCode};
use shared::models::{Pizza, Ref, Size, Status, StatusName, Topping};
use std::collections::HashMap;

/// Read-only catalog resolution used by the order engine
#[async_trait]
pub trait CatalogLookup: Send + Sync {
    /// Resolve a pizza by reference, hydrated with its flavor and size
    async fn get_pizza(&self, id: &Ref<Pizza>) -> AppResult<Pizza>;

    /// Resolve a size by reference
    async fn get_size(&self, id: &Ref<Size>) -> AppResult<Size>;

    /// Batched topping lookup; ids that match nothing are dropped
    async fn get_toppings(&self, ids: &[Ref<Topping>]) -> AppResult<Vec<Topping>>;

    /// Resolve a status record by id or by name
    async fn get_status(&self, id_or_name: &str) -> AppResult<Status>;
}

/// In-memory catalog keyed by record id
#[derive(Debug, Clone, Default)]
pub struct MemoryCatalog {
    pizzas: HashMap<String, Pizza>,
    sizes: HashMap<String, Size>,
    toppings: HashMap<String, Topping>,
    statuses: HashMap<String, Status>,
}

impl MemoryCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Catalog pre-seeded with the full status vocabulary
    pub fn with_status_vocabulary() -> Self {
        let mut catalog = Self::new();
        for (name, description) in [
            (StatusName::Pending, "Order received, waiting to be prepared"),
            (StatusName::Preparing, "Order is being prepared"),
            (StatusName::Done, "Order is ready"),
            (StatusName::OnTheWay, "Order has been dispatched"),
            (StatusName::Delivered, "Order has been delivered"),
            (StatusName::Cancelled, "Order has been cancelled"),
        ] {
            let id = format!("status:{}", name.as_str().to_lowercase().replace(' ', "_"));
            catalog.statuses.insert(
                id.clone(),
                Status {
                    id: Some(id),
                    name,
                    description: description.to_string(),
                },
            );
        }
        catalog
    }

    pub fn insert_pizza(&mut self, id: impl Into<String>, mut pizza: Pizza) {
        let id = id.into();
        pizza.id = Some(id.clone());
        self.pizzas.insert(id, pizza);
    }

    pub fn insert_size(&mut self, id: impl Into<String>, mut size: Size) {
        let id = id.into();
        size.id = Some(id.clone());
        self.sizes.insert(id, size);
    }

    pub fn insert_topping(&mut self, id: impl Into<String>, mut topping: Topping) {
        let id = id.into();
        topping.id = Some(id.clone());
        self.toppings.insert(id, topping);
    }
}

#[async_trait]
impl CatalogLookup for MemoryCatalog {
    async fn get_pizza(&self, id: &Ref<Pizza>) -> AppResult<Pizza> {
        self.pizzas.get(id.id()).cloned().ok_or_else(|| {
            AppError::with_message(ErrorCode::PizzaNotFound, format!("Pizza {} not found", id))
                .with_detail("pizza", id.id())
        })
    }

    async fn get_size(&self, id: &Ref<Size>) -> AppResult<Size> {
        self.sizes.get(id.id()).cloned().ok_or_else(|| {
            AppError::with_message(ErrorCode::SizeNotFound, format!("Size {} not found", id))
                .with_detail("size", id.id())
        })
    }

    async fn get_toppings(&self, ids: &[Ref<Topping>]) -> AppResult<Vec<Topping>> {
        Ok(ids
            .iter()
            .filter_map(|id| self.toppings.get(id.id()).cloned())
            .collect())
    }

    async fn get_status(&self, id_or_name: &str) -> AppResult<Status> {
        if let Some(status) = self.statuses.get(id_or_name) {
            return Ok(status.clone());
        }
        self.statuses
            .values()
            .find(|status| status.name.as_str() == id_or_name)
            .cloned()
            .ok_or_else(|| {
                AppError::with_message(
                    ErrorCode::StatusNotFound,
                    format!("Status {} not found", id_or_name),
                )
                .with_detail("status", id_or_name)
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn status_resolves_by_id_or_name() {
        let catalog = MemoryCatalog::with_status_vocabulary();
        let by_name = catalog.get_status("On the way").await.unwrap();
        assert_eq!(by_name.name, StatusName::OnTheWay);
        let by_id = catalog.get_status("status:on_the_way").await.unwrap();
        assert_eq!(by_id.name, StatusName::OnTheWay);

        let missing = catalog.get_status("Lost").await.unwrap_err();
        assert_eq!(missing.code, ErrorCode::StatusNotFound);
    }

    #[tokio::test]
    async fn batched_topping_lookup_drops_unknown_ids() {
        let mut catalog = MemoryCatalog::new();
        catalog.insert_topping(
            "topping:olives",
            Topping {
                id: None,
                name: "Olives".into(),
                price: 1.25,
            },
        );
        let found = catalog
            .get_toppings(&[Ref::new("topping:olives"), Ref::new("topping:ghost")])
            .await
            .unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name, "Olives");
    }
}
