//! Unified error codes for the ordering backend
//!
//! Error codes are shared between the engine and the HTTP layer.
//! They are organized by category:
//! - 0xxx: General errors
//! - 2xxx: Permission errors
//! - 4xxx: Order errors
//! - 6xxx: Catalog errors
//! - 9xxx: System errors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unified error code enum
///
/// All error codes are represented as u16 values for efficient serialization
/// and cross-language compatibility (Rust, TypeScript, etc.)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    /// Operation completed successfully
    Success = 0,
    /// Unknown error
    Unknown = 1,
    /// Validation failed
    ValidationFailed = 2,
    /// Resource not found
    NotFound = 3,
    /// Resource already exists
    AlreadyExists = 4,
    /// Invalid request
    InvalidRequest = 5,

    // ==================== 2xxx: Permission ====================
    /// Permission denied
    PermissionDenied = 2001,
    /// Admin role required
    AdminRequired = 2002,

    // ==================== 4xxx: Order ====================
    /// Order not found
    OrderNotFound = 4001,
    /// Order has no items
    OrderEmpty = 4002,
    /// Order cannot be cancelled in its current status
    OrderCannotCancel = 4101,
    /// Order has already been cancelled
    OrderAlreadyCancelled = 4102,
    /// Order is in transit, customer-visible fields are frozen
    OrderInTransit = 4103,
    /// Requested status is not a legal target from the current status
    OrderInvalidTarget = 4104,
    /// One or more order lines failed to resolve
    OrderLineFailed = 4201,

    // ==================== 6xxx: Catalog ====================
    /// Flavor not found
    FlavorNotFound = 6001,
    /// Size not found
    SizeNotFound = 6101,
    /// Topping not found
    ToppingNotFound = 6201,
    /// Pizza not found
    PizzaNotFound = 6301,
    /// Pizza with this flavor/size pair already exists
    PizzaExists = 6302,
    /// Status record not found
    StatusNotFound = 6401,

    // ==================== 9xxx: System ====================
    /// Internal server error
    InternalError = 9001,
    /// Database error
    DatabaseError = 9002,
}

impl ErrorCode {
    /// Get the numeric code value
    #[inline]
    pub const fn code(&self) -> u16 {
        *self as u16
    }

    /// Check if this is a success code
    #[inline]
    pub const fn is_success(&self) -> bool {
        matches!(self, ErrorCode::Success)
    }

    /// Get the developer-facing English message for this error code
    pub const fn message(&self) -> &'static str {
        match self {
            // General
            ErrorCode::Success => "Operation completed successfully",
            ErrorCode::Unknown => "An unknown error occurred",
            ErrorCode::ValidationFailed => "Validation failed",
            ErrorCode::NotFound => "Resource not found",
            ErrorCode::AlreadyExists => "Resource already exists",
            ErrorCode::InvalidRequest => "Invalid request",

            // Permission
            ErrorCode::PermissionDenied => "Permission denied",
            ErrorCode::AdminRequired => "Administrator role is required",

            // Order
            ErrorCode::OrderNotFound => "Order not found",
            ErrorCode::OrderEmpty => "Order has no items",
            ErrorCode::OrderCannotCancel => "Order cannot be cancelled in its current status",
            ErrorCode::OrderAlreadyCancelled => "Order has already been cancelled",
            ErrorCode::OrderInTransit => "Order is in transit and no longer accepts updates",
            ErrorCode::OrderInvalidTarget => "Requested status is not a legal target",
            ErrorCode::OrderLineFailed => "One or more order lines failed to resolve",

            // Catalog
            ErrorCode::FlavorNotFound => "Flavor not found",
            ErrorCode::SizeNotFound => "Size not found",
            ErrorCode::ToppingNotFound => "Topping not found",
            ErrorCode::PizzaNotFound => "Pizza not found",
            ErrorCode::PizzaExists => "Pizza with this flavor/size pair already exists",
            ErrorCode::StatusNotFound => "Status not found",

            // System
            ErrorCode::InternalError => "Internal server error",
            ErrorCode::DatabaseError => "Database error",
        }
    }
}

impl From<ErrorCode> for u16 {
    #[inline]
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

/// Error when converting from an invalid u16 to ErrorCode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidErrorCode(pub u16);

impl fmt::Display for InvalidErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid error code: {}", self.0)
    }
}

impl std::error::Error for InvalidErrorCode {}

impl TryFrom<u16> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        let code = match value {
            0 => ErrorCode::Success,
            1 => ErrorCode::Unknown,
            2 => ErrorCode::ValidationFailed,
            3 => ErrorCode::NotFound,
            4 => ErrorCode::AlreadyExists,
            5 => ErrorCode::InvalidRequest,
            2001 => ErrorCode::PermissionDenied,
            2002 => ErrorCode::AdminRequired,
            4001 => ErrorCode::OrderNotFound,
            4002 => ErrorCode::OrderEmpty,
            4101 => ErrorCode::OrderCannotCancel,
            4102 => ErrorCode::OrderAlreadyCancelled,
            4103 => ErrorCode::OrderInTransit,
            4104 => ErrorCode::OrderInvalidTarget,
            4201 => ErrorCode::OrderLineFailed,
            6001 => ErrorCode::FlavorNotFound,
            6101 => ErrorCode::SizeNotFound,
            6201 => ErrorCode::ToppingNotFound,
            6301 => ErrorCode::PizzaNotFound,
            6302 => ErrorCode::PizzaExists,
            6401 => ErrorCode::StatusNotFound,
            9001 => ErrorCode::InternalError,
            9002 => ErrorCode::DatabaseError,
            other => return Err(InvalidErrorCode(other)),
        };
        Ok(code)
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}({})", self, self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn code_roundtrip() {
        for code in [
            ErrorCode::Success,
            ErrorCode::ValidationFailed,
            ErrorCode::OrderCannotCancel,
            ErrorCode::PizzaNotFound,
            ErrorCode::InternalError,
        ] {
            assert_eq!(ErrorCode::try_from(code.code()), Ok(code));
        }
    }

    #[test]
    fn invalid_code_is_rejected() {
        assert_eq!(ErrorCode::try_from(1234), Err(InvalidErrorCode(1234)));
    }

    #[test]
    fn serializes_as_number() {
        let json = serde_json::to_string(&ErrorCode::OrderInTransit).unwrap();
        assert_eq!(json, "4103");
    }
}
