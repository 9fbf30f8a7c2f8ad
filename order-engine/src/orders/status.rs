//! Order Status Machine
//!
//! Pure decision logic over an in-memory order snapshot. The caller is
//! responsible for serializing concurrent updates to the same order (via an
//! optimistic version check or per-order lock in persistence); the machine
//! assumes a just-read, consistent snapshot and returns a write intent.

use crate::catalog::CatalogLookup;
use chrono::Utc;
use shared::error::{AppError, AppResult, ErrorCode};
use shared::models::{Order, OrderUpdate, Status, StatusHistoryEntry, StatusName};
use tracing::debug;

/// Validate and apply a requested status change against the order's
/// current status, appending to the status history on success
///
/// `requested` is the already-resolved status record, if the update asked
/// for one. All checks are synchronous; the only I/O around this function
/// is the final persistence write performed by the caller.
pub fn request_transition(
    order: &Order,
    requested: Option<&Status>,
    update: &OrderUpdate,
) -> AppResult<Order> {
    let current = order.status;
    let target = requested.map(|status| status.name);

    // Cancelling is only allowed while the order is still pending.
    if target == Some(StatusName::Cancelled) && current != StatusName::Pending {
        return Err(AppError::conflict(
            ErrorCode::OrderCannotCancel,
            format!(
                "The order can not be cancelled because its current status is: {}",
                current
            ),
        )
        .with_detail("status", current.as_str()));
    }

    // Cancelled is a true terminal state; this check takes precedence over
    // the in-transit rules below.
    if current == StatusName::Cancelled {
        return Err(AppError::conflict(
            ErrorCode::OrderAlreadyCancelled,
            "The order can not be updated because it has already been cancelled",
        ));
    }

    // Customer-visible fields are frozen once the order is dispatched; only
    // a pure status advance to Delivered may pass.
    if current == StatusName::OnTheWay
        && (update.delivery_type.is_some() || update.notes.is_some())
    {
        return Err(AppError::conflict(
            ErrorCode::OrderInTransit,
            format!(
                "The order no longer accepts updates because it is {}",
                StatusName::OnTheWay
            ),
        ));
    }

    // The only legal forward move from OnTheWay is to Delivered.
    if current == StatusName::OnTheWay
        && target.is_some_and(|name| name != StatusName::Delivered)
    {
        return Err(AppError::conflict(
            ErrorCode::OrderInvalidTarget,
            format!(
                "Status can only be set to '{}' because the current order status is '{}'",
                StatusName::Delivered,
                StatusName::OnTheWay
            ),
        )
        .with_detail("requested", target.map(|name| name.as_str()).unwrap_or_default()));
    }

    let mut updated = order.clone();
    if let Some(name) = target {
        // A status already recorded is not re-appended; re-applying it is a
        // no-op on the log but still updates the current status.
        if !updated.has_status_in_history(name) {
            updated.status_history.push(StatusHistoryEntry {
                name,
                timestamp: Utc::now(),
            });
        }
        updated.status = name;
    }
    if let Some(delivery_type) = update.delivery_type {
        updated.delivery.delivery_type = delivery_type;
    }
    if let Some(notes) = &update.notes {
        updated.notes = Some(notes.clone());
    }

    debug!(
        code = %updated.code,
        from = %current,
        to = %updated.status,
        "order transition applied"
    );

    Ok(updated)
}

/// Resolve the requested status through the catalog, then run the pure
/// transition logic
///
/// Fails with `StatusNotFound` if the requested status does not resolve to
/// a known record, and rejects updates that carry no changes at all.
pub async fn apply_order_update<C>(
    catalog: &C,
    order: &Order,
    update: &OrderUpdate,
) -> AppResult<Order>
where
    C: CatalogLookup + ?Sized,
{
    if update.is_empty() {
        return Err(AppError::validation("At least one change is required"));
    }

    let requested = match &update.status {
        Some(id_or_name) => Some(catalog.get_status(id_or_name).await?),
        None => None,
    };

    request_transition(order, requested.as_ref(), update)
}
