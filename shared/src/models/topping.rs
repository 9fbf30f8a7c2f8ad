//! Topping Model

use serde::{Deserialize, Serialize};

/// Topping entity - optional add-on with its own price
///
/// Name is unique. Referenced by zero or more order lines.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Topping {
    pub id: Option<String>,
    pub name: String,
    /// Price in currency unit
    pub price: f64,
}
