//! Pizza Model

use super::{Flavor, Size};
use serde::{Deserialize, Serialize};

/// Pizza entity - a (flavor, size) pairing with a derived base price
///
/// The catalog returns pizzas hydrated with their flavor and size records.
/// At most one pizza exists per (flavor, size) pair; the persistence layer
/// enforces the uniqueness. Immutable after creation except for the image.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Pizza {
    pub id: Option<String>,
    pub flavor: Flavor,
    pub size: Size,
    /// Image reference (storage key, managed externally)
    pub image: Option<String>,
}

impl Pizza {
    /// Derived base price for the catalog-persisted size
    ///
    /// Order-time pricing goes through the pricing calculator instead,
    /// using the size selected on the order line.
    pub fn base_price(&self) -> f64 {
        self.flavor.price + self.size.price
    }
}
