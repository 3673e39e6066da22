//! JSON body extractor with `{error}` rejections
//!
//! `axum::Json` rejects malformed bodies with a plain-text response; handlers
//! take [`ApiJson`] instead so every failure keeps the `{"error": ...}` shape.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{FromRequest, Request};
use http::StatusCode;
use serde::de::DeserializeOwned;
use shared::error::AppError;

#[derive(Debug, Clone, Copy, Default)]
pub struct ApiJson<T>(pub T);

impl<S, T> FromRequest<S> for ApiJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(Self(value)),
            Err(rejection) => {
                tracing::debug!(error = %rejection.body_text(), "Rejected request body");
                Err(rejection_to_error(&rejection))
            }
        }
    }
}

fn rejection_to_error(rejection: &JsonRejection) -> AppError {
    match rejection {
        JsonRejection::JsonDataError(e) => {
            AppError::validation(format!("Datos inválidos: {}", e.body_text()))
        }
        JsonRejection::MissingJsonContentType(_) => {
            AppError::invalid_request("Se esperaba Content-Type: application/json")
        }
        other if other.status() == StatusCode::PAYLOAD_TOO_LARGE => {
            AppError::invalid_request("Cuerpo de la petición demasiado grande")
        }
        _ => AppError::invalid_request("JSON inválido"),
    }
}
