//! Shared types for the Iraka back-office
//!
//! Wire models, response envelopes, the unified error type and key/time
//! helpers used by both `iraka-server` and `iraka-client`.

pub mod client;
pub mod error;
pub mod models;
pub mod response;
pub mod util;

// Re-exports
pub use error::{AppError, AppResult, ErrorBody, ErrorCode};
pub use http;
pub use serde::{Deserialize, Serialize};
