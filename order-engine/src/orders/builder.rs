//! Order Builder
//!
//! Assembles a complete order from a checkout payload: validates the
//! request shape, resolves the initial status, formats and prices the
//! lines, and stamps the order code and customer snapshot. Persistence of
//! the assembled order is the caller's concern.

use crate::catalog::CatalogLookup;
use crate::orders::format_order_lines;
use crate::pricing::compute_order_total;
use crate::utils::validation::{MAX_NOTE_LEN, validate_optional_text};
use chrono::Utc;
use rand::Rng;
use shared::error::{AppError, AppResult, ErrorCode};
use shared::models::{
    Order, OrderCreate, OrderCustomer, OrderDelivery, StatusHistoryEntry, StatusName,
};
use tracing::debug;

/// Default delivery estimate in minutes
pub const DEFAULT_ESTIMATED_TIME_MIN: i32 = 20;

/// Generate a human-readable order code: `ORD-<initials>-<number>`
pub fn generate_order_code(customer: &OrderCustomer) -> String {
    let initials: String = [&customer.first_name, &customer.last_name]
        .iter()
        .filter_map(|name| name.chars().next())
        .flat_map(|c| c.to_uppercase())
        .collect();
    let number: u32 = rand::thread_rng().gen_range(0..100_000);
    format!("ORD-{}-{}", initials, number)
}

/// Validate the checkout payload shape before any catalog I/O
pub fn validate_order_create(request: &OrderCreate) -> AppResult<()> {
    if request.items.is_empty() {
        return Err(AppError::with_message(
            ErrorCode::OrderEmpty,
            "At least one order line is required",
        ));
    }
    validate_optional_text(&request.notes, "notes", MAX_NOTE_LEN)?;
    for (index, line) in request.items.iter().enumerate() {
        if line.pizza.id().trim().is_empty() {
            return Err(AppError::validation("Pizza reference must not be empty")
                .with_detail("line", index));
        }
        if line.size.id().trim().is_empty() {
            return Err(AppError::validation("Size reference must not be empty")
                .with_detail("line", index));
        }
        if line.quantity < 1 {
            return Err(AppError::validation("Quantity must be at least 1")
                .with_detail("line", index)
                .with_detail("quantity", line.quantity));
        }
    }
    Ok(())
}

/// Assemble a priced order from a checkout payload
///
/// The total is recomputed from the formatted lines, never taken from the
/// client. The status history starts with a single `Pending` entry; the
/// `Pending` vocabulary record must exist in the catalog.
pub async fn build_order<C>(
    catalog: &C,
    customer: &OrderCustomer,
    request: &OrderCreate,
) -> AppResult<Order>
where
    C: CatalogLookup + ?Sized,
{
    validate_order_create(request)?;

    let pending = catalog.get_status(StatusName::Pending.as_str()).await?;
    let items = format_order_lines(catalog, &request.items).await?;
    let total = compute_order_total(&items);
    let now = Utc::now();

    let order = Order {
        id: None,
        code: generate_order_code(customer),
        customer: customer.clone(),
        items,
        delivery: OrderDelivery {
            delivery_type: request.delivery_type,
            estimated_time_min: DEFAULT_ESTIMATED_TIME_MIN,
        },
        status: pending.name,
        status_history: vec![StatusHistoryEntry {
            name: pending.name,
            timestamp: now,
        }],
        notes: request.notes.clone(),
        total,
        created_at: Some(now),
    };

    debug!(code = %order.code, lines = order.items.len(), total = order.total, "order assembled");

    Ok(order)
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::{DeliveryType, OrderLineRequest, Ref};

    fn customer() -> OrderCustomer {
        OrderCustomer {
            first_name: "jane".into(),
            last_name: "doe".into(),
            address: "1 Main St".into(),
            phone: "555-0100".into(),
            email: "jane@example.com".into(),
        }
    }

    #[test]
    fn order_code_uses_uppercased_initials() {
        let code = generate_order_code(&customer());
        let parts: Vec<&str> = code.split('-').collect();
        assert_eq!(parts.len(), 3);
        assert_eq!(parts[0], "ORD");
        assert_eq!(parts[1], "JD");
        assert!(parts[2].parse::<u32>().unwrap() < 100_000);
    }

    #[test]
    fn empty_item_list_is_rejected() {
        let request = OrderCreate {
            items: vec![],
            delivery_type: DeliveryType::PickUp,
            notes: None,
        };
        let err = validate_order_create(&request).unwrap_err();
        assert_eq!(err.code, ErrorCode::OrderEmpty);
    }

    #[test]
    fn blank_references_are_rejected_with_line_index() {
        let request = OrderCreate {
            items: vec![OrderLineRequest {
                pizza: Ref::new(""),
                size: Ref::new("size:medium"),
                toppings: vec![],
                quantity: 1,
            }],
            delivery_type: DeliveryType::Delivery,
            notes: None,
        };
        let err = validate_order_create(&request).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationFailed);
        assert_eq!(err.details.unwrap()["line"], 0);
    }
}
