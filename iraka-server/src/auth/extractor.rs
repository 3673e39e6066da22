//! Bearer-token extractors
//!
//! Protected handlers take [`CurrentUser`]; the token is resolved through the
//! session records on every request.

use std::convert::Infallible;

use axum::{extract::FromRequestParts, http::request::Parts};
use shared::error::AppError;

use super::token::extract_from_header;
use super::{AuthService, CurrentUser};
use crate::core::ServerState;
use crate::security_log;

fn bearer(parts: &Parts) -> Option<&str> {
    parts
        .headers
        .get(http::header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .and_then(extract_from_header)
}

/// Raw bearer token of the request (used by logout)
#[derive(Debug, Clone)]
pub struct SessionToken(pub String);

impl FromRequestParts<ServerState> for SessionToken {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        _state: &ServerState,
    ) -> Result<Self, Self::Rejection> {
        match bearer(parts) {
            Some(token) => Ok(Self(token.to_string())),
            None => {
                security_log!("WARN", "auth_missing", uri = format!("{:?}", parts.uri));
                Err(AppError::unauthorized())
            }
        }
    }
}

impl FromRequestParts<ServerState> for CurrentUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &ServerState,
    ) -> Result<Self, Self::Rejection> {
        if let Some(user) = parts.extensions.get::<CurrentUser>() {
            return Ok(user.clone());
        }

        let SessionToken(token) = SessionToken::from_request_parts(parts, state).await?;

        match AuthService::from_state(state).authenticate(&token).await {
            Ok(user) => {
                parts.extensions.insert(user.clone());
                Ok(user)
            }
            Err(e) => {
                security_log!(
                    "WARN",
                    "auth_failed",
                    error = e.message.as_str(),
                    uri = format!("{:?}", parts.uri)
                );
                Err(e)
            }
        }
    }
}

/// Caller when a valid session token is present
///
/// Public endpoints that still record who acted (kardex movements) use this;
/// the anon key or a stale token simply yields `None`.
#[derive(Debug, Clone, Default)]
pub struct MaybeUser(pub Option<CurrentUser>);

impl FromRequestParts<ServerState> for MaybeUser {
    type Rejection = Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &ServerState,
    ) -> Result<Self, Self::Rejection> {
        let Some(token) = bearer(parts).map(str::to_string) else {
            return Ok(Self(None));
        };
        match AuthService::from_state(state).authenticate(&token).await {
            Ok(user) => Ok(Self(Some(user))),
            Err(_) => Ok(Self(None)),
        }
    }
}
