//! Order Construction & Status-Transition Engine
//!
//! The core logic of the pizza ordering backend:
//! - [`pricing`]: pure price calculations (pizza unit price, extras,
//!   line totals, order total)
//! - [`orders`]: order line formatting, order assembly and the status
//!   transition machine
//! - [`pagination`]: derived pagination facts for listing endpoints
//! - [`stats`]: monthly growth-rate statistics
//! - [`permissions`]: static, stateless permission lookup
//! - [`catalog`]: the [`catalog::CatalogLookup`] boundary the engine
//!   resolves references through
//!
//! The engine is stateless per call. It receives read snapshots and
//! returns write intents; persistence, HTTP routing and authentication
//! are external collaborators.

pub mod catalog;
pub mod orders;
pub mod pagination;
pub mod permissions;
pub mod pricing;
pub mod stats;
pub mod utils;

// Re-exports
pub use shared::error::{AppError, AppResult, ErrorCode};
