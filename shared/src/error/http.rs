//! HTTP status code mapping and axum integration

use super::codes::ErrorCode;
use super::types::{AppError, ErrorBody};
use axum::Json;
use axum::response::{IntoResponse, Response};
use http::StatusCode;

impl ErrorCode {
    /// Get the appropriate HTTP status code for this error code
    ///
    /// Conflicts and stock violations surface as 400, matching what the
    /// front end expects from signup and kardex calls.
    pub fn http_status(&self) -> StatusCode {
        match self {
            Self::NotFound | Self::ProductNotFound | Self::UserNotFound => StatusCode::NOT_FOUND,

            Self::NotAuthenticated
            | Self::InvalidCredentials
            | Self::SessionInvalid
            | Self::SessionExpired
            | Self::AccountDisabled => StatusCode::UNAUTHORIZED,

            Self::InternalError | Self::DatabaseError => StatusCode::INTERNAL_SERVER_ERROR,

            Self::ValidationFailed
            | Self::InvalidRequest
            | Self::RequiredField
            | Self::InsufficientStock
            | Self::InvalidMovementKind
            | Self::InvalidQuantity
            | Self::UserAlreadyExists => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.http_status();

        // Server-side failures keep their detail in the log only
        let message = if status.is_server_error() {
            tracing::error!(code = %self.code, error = %self.message, "Request failed");
            self.code.message().to_string()
        } else {
            self.message
        };

        (status, Json(ErrorBody { error: message })).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_status() {
        assert_eq!(ErrorCode::NotFound.http_status(), StatusCode::NOT_FOUND);
        assert_eq!(ErrorCode::ProductNotFound.http_status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_business_errors_are_bad_request() {
        assert_eq!(ErrorCode::InsufficientStock.http_status(), StatusCode::BAD_REQUEST);
        assert_eq!(ErrorCode::UserAlreadyExists.http_status(), StatusCode::BAD_REQUEST);
        assert_eq!(ErrorCode::InvalidMovementKind.http_status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_auth_errors_are_unauthorized() {
        assert_eq!(ErrorCode::SessionExpired.http_status(), StatusCode::UNAUTHORIZED);
        assert_eq!(ErrorCode::AccountDisabled.http_status(), StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn test_internal_errors_hide_detail() {
        let response = AppError::database("redb table missing").into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
