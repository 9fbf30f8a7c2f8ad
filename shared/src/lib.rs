//! Shared types for the pizza ordering backend
//!
//! Common types used across crates: domain models (catalog entities,
//! orders, statuses), the unified error system and the API response
//! envelope.

pub mod error;
pub mod models;

// Re-exports
pub use error::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode};
pub use serde::{Deserialize, Serialize};
