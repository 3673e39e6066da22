//! Auth API Handlers

use axum::{Json, extract::State};
use shared::client::{LoginRequest, LoginResponse, SignupRequest};
use shared::error::AppResult;
use shared::response::{Ack, UserResponse};

use crate::api::ApiJson;
use crate::auth::{AuthService, CurrentUser, SessionToken};
use crate::core::ServerState;

/// POST /auth/signup
pub async fn signup(
    State(state): State<ServerState>,
    ApiJson(payload): ApiJson<SignupRequest>,
) -> AppResult<Json<UserResponse>> {
    let user = AuthService::from_state(&state).signup(payload).await?;
    Ok(Json(UserResponse::ok(user)))
}

/// POST /auth/login
pub async fn login(
    State(state): State<ServerState>,
    ApiJson(payload): ApiJson<LoginRequest>,
) -> AppResult<Json<LoginResponse>> {
    let (access_token, user) = AuthService::from_state(&state).login(payload).await?;
    Ok(Json(LoginResponse {
        success: true,
        access_token,
        user,
    }))
}

/// GET /auth/session - profile of the bearer's user
pub async fn session(
    State(state): State<ServerState>,
    current: CurrentUser,
) -> AppResult<Json<UserResponse>> {
    let user = AuthService::from_state(&state).profile(&current).await?;
    Ok(Json(UserResponse::ok(user)))
}

/// POST /auth/logout
pub async fn logout(
    State(state): State<ServerState>,
    current: CurrentUser,
    SessionToken(token): SessionToken,
) -> AppResult<Json<Ack>> {
    AuthService::from_state(&state).logout(&token).await?;
    tracing::info!(email = %current.email, "Session closed");
    Ok(Json(Ack::ok()))
}
