//! Order Line Formatter
//!
//! Resolves requested lines against the catalog and prices them. The
//! operation is all-or-nothing: if any line fails to resolve, no lines are
//! returned. Lines are independent, so they resolve concurrently; within a
//! line, pizza and size resolve concurrently and both must complete before
//! pricing.

use crate::catalog::CatalogLookup;
use crate::pricing::{compute_extras_total, compute_line_total, compute_pizza_price};
use futures::future::join_all;
use shared::error::{AppError, AppResult, ErrorCode};
use shared::models::{OrderLine, OrderLineRequest};
use tracing::debug;

/// Turn requested lines into priced, persistence-ready order lines
pub async fn format_order_lines<C>(
    catalog: &C,
    requests: &[OrderLineRequest],
) -> AppResult<Vec<OrderLine>>
where
    C: CatalogLookup + ?Sized,
{
    // Quantity is a caller-side validation concern per the pricing
    // contract, checked here before any catalog I/O.
    for (index, request) in requests.iter().enumerate() {
        if request.quantity < 1 {
            return Err(AppError::validation("Quantity must be at least 1")
                .with_detail("line", index)
                .with_detail("quantity", request.quantity));
        }
    }

    let resolutions = requests
        .iter()
        .enumerate()
        .map(|(index, request)| format_line(catalog, index, request));
    let results = join_all(resolutions).await;

    let mut lines = Vec::with_capacity(results.len());
    let mut failures = Vec::new();
    for (index, result) in results.into_iter().enumerate() {
        match result {
            Ok(line) => lines.push(line),
            Err(err) => failures.push((index, err)),
        }
    }

    if failures.is_empty() {
        return Ok(lines);
    }
    if failures.len() == 1 {
        // A single failed line surfaces its own error kind, already tagged
        // with the line index.
        let (_, err) = failures.remove(0);
        return Err(err);
    }
    let indexes: Vec<u64> = failures.iter().map(|(index, _)| *index as u64).collect();
    Err(AppError::with_message(
        ErrorCode::OrderLineFailed,
        format!("{} order lines failed to resolve", failures.len()),
    )
    .with_detail("lines", indexes))
}

/// Resolve and price a single requested line
async fn format_line<C>(catalog: &C, index: usize, request: &OrderLineRequest) -> AppResult<OrderLine>
where
    C: CatalogLookup + ?Sized,
{
    let (pizza, size) = tokio::try_join!(
        async {
            catalog
                .get_pizza(&request.pizza)
                .await
                .map_err(|err| err.with_detail("line", index))
        },
        async {
            catalog
                .get_size(&request.size)
                .await
                .map_err(|err| err.with_detail("line", index))
        },
    )?;

    // The customer-selected size wins over the pizza's catalog size.
    let unit_price = compute_pizza_price(&pizza, &size);

    let extras_total = if request.toppings.is_empty() {
        0.0
    } else {
        let toppings = catalog
            .get_toppings(&request.toppings)
            .await
            .map_err(|err| err.with_detail("line", index))?;
        compute_extras_total(&toppings)
    };

    let line_total = compute_line_total(unit_price, extras_total, request.quantity);

    debug!(
        line = index,
        pizza = %request.pizza,
        size = %request.size,
        unit_price,
        extras_total,
        line_total,
        "formatted order line"
    );

    Ok(OrderLine {
        pizza: request.pizza.clone(),
        size: size.id.map(Into::into).unwrap_or_else(|| request.size.clone()),
        toppings: request.toppings.clone(),
        quantity: request.quantity,
        extras_total,
        line_total,
    })
}
