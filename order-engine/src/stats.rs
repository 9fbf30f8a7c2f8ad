//! Monthly Order Statistics
//!
//! Growth-rate calculations for the monthly stats endpoint. A rate is
//! `None` when both months are empty; a month-over-month appearance from
//! zero reports as 100%.

use crate::pricing::{to_decimal, to_f64};
use rust_decimal::prelude::*;
use serde::Serialize;
use shared::models::Order;

/// Items growth between two months
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ItemsGrowth {
    pub current_month_items_count: u64,
    pub last_month_items_count: u64,
    /// Percentage, rounded to 2 decimal places
    pub items_growth_rate: Option<f64>,
}

/// Sales growth between two months
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SalesGrowth {
    /// Amount in currency unit
    pub current_month_sales_amount: f64,
    /// Amount in currency unit
    pub last_month_sales_amount: f64,
    /// Percentage, rounded to 2 decimal places
    pub sales_growth_rate: Option<f64>,
}

fn growth_rate(current: Decimal, last: Decimal) -> Option<f64> {
    if last > Decimal::ZERO {
        Some(to_f64((current - last) / last * Decimal::ONE_HUNDRED))
    } else if current > Decimal::ZERO {
        Some(100.0)
    } else {
        None
    }
}

/// Month-over-month growth in order count
pub fn calculate_items_growth_rate(
    current_month_items_count: u64,
    last_month_items_count: u64,
) -> ItemsGrowth {
    ItemsGrowth {
        current_month_items_count,
        last_month_items_count,
        items_growth_rate: growth_rate(
            Decimal::from(current_month_items_count),
            Decimal::from(last_month_items_count),
        ),
    }
}

/// Month-over-month growth in sales amount
pub fn calculate_sales_growth_rate(
    current_month_orders: &[Order],
    last_month_orders: &[Order],
) -> SalesGrowth {
    let sum = |orders: &[Order]| {
        orders
            .iter()
            .fold(Decimal::ZERO, |acc, order| acc + to_decimal(order.total))
    };
    let current = sum(current_month_orders);
    let last = sum(last_month_orders);

    SalesGrowth {
        current_month_sales_amount: to_f64(current),
        last_month_sales_amount: to_f64(last),
        sales_growth_rate: growth_rate(current, last),
    }
}
