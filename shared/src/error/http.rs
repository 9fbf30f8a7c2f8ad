//! HTTP status code mapping for error codes

use super::codes::ErrorCode;
use http::StatusCode;

impl ErrorCode {
    /// Get the appropriate HTTP status code for this error code
    pub fn http_status(&self) -> StatusCode {
        match self {
            // Success
            Self::Success => StatusCode::OK,

            // 404 Not Found
            Self::NotFound
            | Self::OrderNotFound
            | Self::OrderLineFailed
            | Self::FlavorNotFound
            | Self::SizeNotFound
            | Self::ToppingNotFound
            | Self::PizzaNotFound
            | Self::StatusNotFound => StatusCode::NOT_FOUND,

            // 409 Conflict
            Self::AlreadyExists
            | Self::PizzaExists
            | Self::OrderCannotCancel
            | Self::OrderAlreadyCancelled
            | Self::OrderInTransit
            | Self::OrderInvalidTarget => StatusCode::CONFLICT,

            // 403 Forbidden
            Self::PermissionDenied | Self::AdminRequired => StatusCode::FORBIDDEN,

            // 400 Bad Request
            Self::ValidationFailed | Self::InvalidRequest | Self::OrderEmpty => {
                StatusCode::BAD_REQUEST
            }

            // 500 Internal Server Error
            Self::Unknown | Self::InternalError | Self::DatabaseError => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn taxonomy_maps_to_expected_statuses() {
        assert_eq!(ErrorCode::PizzaNotFound.http_status(), StatusCode::NOT_FOUND);
        assert_eq!(
            ErrorCode::OrderCannotCancel.http_status(),
            StatusCode::CONFLICT
        );
        assert_eq!(
            ErrorCode::ValidationFailed.http_status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ErrorCode::PermissionDenied.http_status(),
            StatusCode::FORBIDDEN
        );
    }
}
