//! Order Model

use super::{Pizza, Ref, Size, StatusName, Topping};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Delivery type
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum DeliveryType {
    Delivery,
    PickUp,
}

/// Delivery info
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderDelivery {
    #[serde(rename = "type")]
    pub delivery_type: DeliveryType,
    /// Estimated time in minutes
    pub estimated_time_min: i32,
}

/// Ordering user snapshot taken at order time
///
/// Deliberately decoupled from the live user record: later profile edits
/// must not rewrite past orders.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderCustomer {
    pub first_name: String,
    pub last_name: String,
    pub address: String,
    pub phone: String,
    pub email: String,
}

/// Status history entry (append-only log)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusHistoryEntry {
    pub name: StatusName,
    pub timestamp: DateTime<Utc>,
}

/// Order line - one priced, quantified pizza request within an order
///
/// Holds persistence-ready references plus computed totals. Created once
/// by the order line formatter, immutable thereafter.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderLine {
    /// Pizza reference (String ID)
    pub pizza: Ref<Pizza>,
    /// Size selected at order time (String ID)
    pub size: Ref<Size>,
    /// Topping references (String IDs)
    pub toppings: Vec<Ref<Topping>>,
    pub quantity: u32,
    /// Sum of referenced topping prices, in currency unit
    pub extras_total: f64,
    /// (pizza unit price + extras_total) * quantity, in currency unit
    pub line_total: f64,
}

/// Order entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    pub id: Option<String>,
    /// Human-readable code generated at creation (e.g. `ORD-JD-1234`)
    pub code: String,
    pub customer: OrderCustomer,
    pub items: Vec<OrderLine>,
    pub delivery: OrderDelivery,
    pub status: StatusName,
    /// Append-only; no entry is ever removed or mutated, and the same
    /// status name never appears twice
    pub status_history: Vec<StatusHistoryEntry>,
    pub notes: Option<String>,
    /// Sum of all line totals, recomputed at creation, in currency unit
    pub total: f64,
    pub created_at: Option<DateTime<Utc>>,
}

impl Order {
    /// Whether a status name is already recorded in the history
    pub fn has_status_in_history(&self, name: StatusName) -> bool {
        self.status_history.iter().any(|entry| entry.name == name)
    }
}

/// Requested order line as it arrives at checkout (unpriced)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderLineRequest {
    /// Pizza reference (String ID)
    pub pizza: Ref<Pizza>,
    /// Size selected by the customer (String ID)
    pub size: Ref<Size>,
    /// Topping references (String IDs)
    #[serde(default)]
    pub toppings: Vec<Ref<Topping>>,
    pub quantity: u32,
}

/// Create order payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderCreate {
    pub items: Vec<OrderLineRequest>,
    pub delivery_type: DeliveryType,
    pub notes: Option<String>,
}

/// Update order payload
///
/// Only the status machine may apply these changes; order lines and the
/// total are never edited after creation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OrderUpdate {
    /// Requested status, by record id or name
    pub status: Option<String>,
    pub delivery_type: Option<DeliveryType>,
    pub notes: Option<String>,
}

impl OrderUpdate {
    /// Whether the update carries no changes at all
    pub fn is_empty(&self) -> bool {
        self.status.is_none() && self.delivery_type.is_none() && self.notes.is_none()
    }
}
