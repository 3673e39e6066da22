//! Client error types

use reqwest::StatusCode;
use shared::error::ErrorBody;
use thiserror::Error;

/// Client error type
///
/// Status-mapped variants carry the server's `error` message.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Transport failure (connect, timeout, TLS)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// 400: validation, conflicts, stock violations
    #[error("Validation error: {0}")]
    Validation(String),

    /// 401, or a protected call made without a session token
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// 404
    #[error("Not found: {0}")]
    NotFound(String),

    /// 5xx and anything else unexpected
    #[error("Internal error: {0}")]
    Internal(String),

    /// Base URL does not parse or cannot carry a path
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// Body did not match the expected shape
    #[error("Invalid response: {0}")]
    InvalidResponse(#[from] serde_json::Error),
}

impl ClientError {
    /// Map a non-2xx response to an error, preferring the `{error}` message
    pub fn from_status(status: StatusCode, body: &str) -> Self {
        let message = serde_json::from_str::<ErrorBody>(body)
            .map(|b| b.error)
            .unwrap_or_else(|_| body.to_string());

        match status {
            StatusCode::BAD_REQUEST => Self::Validation(message),
            StatusCode::UNAUTHORIZED => Self::Unauthorized(message),
            StatusCode::NOT_FOUND => Self::NotFound(message),
            _ => Self::Internal(message),
        }
    }

    /// Server-provided message for status-mapped errors
    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Validation(m) | Self::Unauthorized(m) | Self::NotFound(m) | Self::Internal(m) => {
                Some(m)
            }
            _ => None,
        }
    }
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_maps_status_and_message() {
        let err = ClientError::from_status(StatusCode::BAD_REQUEST, r#"{"error":"Stock insuficiente"}"#);
        assert!(matches!(err, ClientError::Validation(ref m) if m == "Stock insuficiente"));

        let err = ClientError::from_status(StatusCode::NOT_FOUND, r#"{"error":"Cliente no encontrado"}"#);
        assert_eq!(err.message(), Some("Cliente no encontrado"));

        let err = ClientError::from_status(StatusCode::UNAUTHORIZED, r#"{"error":"No autorizado"}"#);
        assert!(matches!(err, ClientError::Unauthorized(_)));
    }

    #[test]
    fn test_non_json_body_is_kept() {
        let err = ClientError::from_status(StatusCode::BAD_GATEWAY, "upstream down");
        assert!(matches!(err, ClientError::Internal(ref m) if m == "upstream down"));
    }
}
