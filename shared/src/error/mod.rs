//! Unified error system
//!
//! - [`ErrorCode`]: Standardized error codes
//! - [`AppError`]: Error type carried through handlers, repositories and the ledger
//! - [`ErrorBody`]: Wire shape of every error response (`{"error": "..."}`)
//!
//! # Example
//!
//! ```
//! use shared::error::{AppError, ErrorCode};
//!
//! let err = AppError::new(ErrorCode::InsufficientStock);
//! assert_eq!(err.message, "Stock insuficiente");
//! assert_eq!(err.http_status().as_u16(), 400);
//! ```

mod codes;
mod http;
mod types;

pub use codes::{ErrorCode, InvalidErrorCode};
pub use types::{AppError, AppResult, ErrorBody};
