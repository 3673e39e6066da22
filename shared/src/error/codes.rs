//! Unified error codes for the Iraka back-office
//!
//! Error codes are organized by category:
//! - 0xxx: General errors
//! - 1xxx: Authentication errors
//! - 6xxx: Product and inventory errors
//! - 8xxx: User errors
//! - 9xxx: System errors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unified error code enum
///
/// Represented as u16 on the wire so the front end can switch on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    /// Validation failed
    ValidationFailed = 2,
    /// Resource not found
    NotFound = 3,
    /// Invalid request
    InvalidRequest = 5,
    /// Required field missing
    RequiredField = 7,

    // ==================== 1xxx: Auth ====================
    /// No bearer token presented
    NotAuthenticated = 1001,
    /// Invalid credentials (email/password)
    InvalidCredentials = 1002,
    /// Session token unknown
    SessionInvalid = 1004,
    /// Session has expired
    SessionExpired = 1005,
    /// Account is disabled
    AccountDisabled = 1007,

    // ==================== 6xxx: Product / Inventory ====================
    /// Product not found
    ProductNotFound = 6001,
    /// Movement would drive stock below zero
    InsufficientStock = 6002,
    /// Movement kind is not one of the known kinds
    InvalidMovementKind = 6003,
    /// Movement quantity is not a positive integer
    InvalidQuantity = 6004,

    // ==================== 8xxx: User ====================
    /// User not found
    UserNotFound = 8001,
    /// Email already registered
    UserAlreadyExists = 8002,

    // ==================== 9xxx: System ====================
    /// Internal server error
    InternalError = 9001,
    /// Store backend error
    DatabaseError = 9002,
}

impl ErrorCode {
    /// Numeric value of this code
    pub const fn code(&self) -> u16 {
        *self as u16
    }

    /// Default user-facing message
    pub const fn message(&self) -> &'static str {
        match self {
            Self::ValidationFailed => "Datos inválidos",
            Self::NotFound => "Recurso no encontrado",
            Self::InvalidRequest => "Solicitud inválida",
            Self::RequiredField => "Faltan campos requeridos",

            Self::NotAuthenticated => "No autorizado",
            Self::InvalidCredentials => "Credenciales incorrectas",
            Self::SessionInvalid => "Sesión inválida",
            Self::SessionExpired => "Sesión expirada",
            Self::AccountDisabled => "Usuario inactivo",

            Self::ProductNotFound => "Producto no encontrado",
            Self::InsufficientStock => "Stock insuficiente",
            Self::InvalidMovementKind => "Tipo de movimiento inválido",
            Self::InvalidQuantity => "Cantidad inválida",

            Self::UserNotFound => "Usuario no encontrado",
            Self::UserAlreadyExists => "El usuario ya existe",

            Self::InternalError => "Error interno del servidor",
            Self::DatabaseError => "Error de base de datos",
        }
    }
}

impl From<ErrorCode> for u16 {
    fn from(code: ErrorCode) -> Self {
        code as u16
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "E{:04}", self.code())
    }
}

/// Returned when a u16 does not name a known [`ErrorCode`]
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
            2 => Self::ValidationFailed,
            3 => Self::NotFound,
            5 => Self::InvalidRequest,
            7 => Self::RequiredField,
            1001 => Self::NotAuthenticated,
            1002 => Self::InvalidCredentials,
            1004 => Self::SessionInvalid,
            1005 => Self::SessionExpired,
            1007 => Self::AccountDisabled,
            6001 => Self::ProductNotFound,
            6002 => Self::InsufficientStock,
            6003 => Self::InvalidMovementKind,
            6004 => Self::InvalidQuantity,
            8001 => Self::UserNotFound,
            8002 => Self::UserAlreadyExists,
            9001 => Self::InternalError,
            9002 => Self::DatabaseError,
            other => return Err(InvalidErrorCode(other)),
        };
        Ok(code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_try_from_valid() {
        assert_eq!(ErrorCode::try_from(6002), Ok(ErrorCode::InsufficientStock));
        assert_eq!(ErrorCode::try_from(8002), Ok(ErrorCode::UserAlreadyExists));
    }

    #[test]
    fn test_try_from_invalid() {
        assert_eq!(ErrorCode::try_from(4242), Err(InvalidErrorCode(4242)));
        assert_eq!(ErrorCode::try_from(0), Err(InvalidErrorCode(0)));
    }

    #[test]
    fn test_display() {
        assert_eq!(ErrorCode::NotFound.to_string(), "E0003");
        assert_eq!(ErrorCode::DatabaseError.to_string(), "E9002");
    }

    #[test]
    fn test_serialize_as_number() {
        let json = serde_json::to_string(&ErrorCode::SessionExpired).unwrap();
        assert_eq!(json, "1005");
        let back: ErrorCode = serde_json::from_str(&json).unwrap();
        assert_eq!(back, ErrorCode::SessionExpired);
    }

    #[test]
    fn test_messages_match_front_end_strings() {
        assert_eq!(ErrorCode::InsufficientStock.message(), "Stock insuficiente");
        assert_eq!(ErrorCode::UserAlreadyExists.message(), "El usuario ya existe");
        assert_eq!(ErrorCode::InvalidCredentials.message(), "Credenciales incorrectas");
    }
}
