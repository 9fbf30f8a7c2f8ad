//! Order construction and lifecycle
//!
//! - [`format_order_lines`]: turns requested lines into priced,
//!   persistence-ready order lines (all-or-nothing)
//! - [`build_order`]: assembles a complete order from a checkout payload
//! - [`request_transition`] / [`apply_order_update`]: the status machine
//!   governing how an existing order may change

mod builder;
mod formatter;
mod status;

pub use builder::{DEFAULT_ESTIMATED_TIME_MIN, build_order, generate_order_code, validate_order_create};
pub use formatter::format_order_lines;
pub use status::{apply_order_update, request_transition};
