//! Flavor Model

use serde::{Deserialize, Serialize};

/// Flavor entity - taste profile with its price component
///
/// Name is unique across the catalog. Administered by catalog CRUD,
/// referenced by pizzas.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Flavor {
    pub id: Option<String>,
    pub name: String,
    pub description: String,
    /// Price component in currency unit (non-negative)
    pub price: f64,
}

/// Create flavor payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FlavorCreate {
    pub name: String,
    pub description: String,
    pub price: f64,
}
