//! Price Calculator
//!
//! Logic for pricing order lines and whole orders.
//! Uses rust_decimal for precise calculations, stores as f64.

use rust_decimal::prelude::*;
use shared::models::{OrderLine, Pizza, Size, Topping};

/// Rounding strategy for monetary values (2 decimal places, half-up)
const DECIMAL_PLACES: u32 = 2;

/// Convert f64 to Decimal for calculation
#[inline]
pub fn to_decimal(value: f64) -> Decimal {
    Decimal::from_f64(value).unwrap_or_default()
}

/// Convert Decimal back to f64 for storage, rounded to 2 decimal places
#[inline]
pub fn to_f64(value: Decimal) -> f64 {
    value
        .round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
        .to_f64()
        .unwrap_or_default()
}

/// Unit price of a pizza for a given size: flavor price + size price
///
/// The size is the one selected on the order line, which may differ from
/// the pizza's catalog-persisted size.
pub fn compute_pizza_price(pizza: &Pizza, size: &Size) -> f64 {
    to_f64(to_decimal(pizza.flavor.price) + to_decimal(size.price))
}

/// Extra cost of a topping set; empty set costs nothing
pub fn compute_extras_total(toppings: &[Topping]) -> f64 {
    let total = toppings
        .iter()
        .fold(Decimal::ZERO, |acc, topping| acc + to_decimal(topping.price));
    to_f64(total)
}

/// Line total: (unit price + extras) * quantity
///
/// Quantity validity (>= 1) is the formatter's responsibility.
pub fn compute_line_total(unit_price: f64, extras_total: f64, quantity: u32) -> f64 {
    let total = (to_decimal(unit_price) + to_decimal(extras_total)) * Decimal::from(quantity);
    to_f64(total)
}

/// Aggregate order total: sum of all line totals
pub fn compute_order_total(lines: &[OrderLine]) -> f64 {
    let total = lines
        .iter()
        .fold(Decimal::ZERO, |acc, line| acc + to_decimal(line.line_total));
    to_f64(total)
}
