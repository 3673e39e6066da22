//! Iraka Client - typed HTTP client for the Iraka back-office API
//!
//! One async method per route. Public routes send the configured anonymous
//! key as the bearer; protected routes send the session token obtained from
//! [`HttpClient::login`].

pub mod config;
pub mod error;
pub mod http;

pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use http::HttpClient;

// Re-export shared types for convenience
pub use shared::client::{InitAdminResponse, LoginRequest, LoginResponse, SignupRequest};
pub use shared::models;
pub use shared::response::{DetailedHealthResponse, HealthResponse, StockSummaryResponse};
