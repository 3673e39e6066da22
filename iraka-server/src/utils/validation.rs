//! Input validation helpers
//!
//! Text length limits and boundary checks used by the record types before
//! anything is written. Messages are user-facing (Spanish).

use rust_decimal::Decimal;
use shared::error::AppError;

// ── Text length limits ──────────────────────────────────────────────

/// Names: customer, product, user
pub const MAX_NAME_LEN: usize = 200;

/// Notes, descriptions, addresses
pub const MAX_NOTE_LEN: usize = 1000;

/// Short identifiers: phone, document, invoice number, status
pub const MAX_SHORT_TEXT_LEN: usize = 100;

/// Email addresses (RFC 5321)
pub const MAX_EMAIL_LEN: usize = 254;

/// Passwords (before hashing)
pub const MAX_PASSWORD_LEN: usize = 128;

/// URLs / image paths
pub const MAX_URL_LEN: usize = 2048;

// ── Numeric limits ──────────────────────────────────────────────────

/// Prices and totals. Any count times any amount stays far below `Decimal::MAX`.
pub const MAX_AMOUNT: Decimal = Decimal::from_parts(0xD4A5_1000, 0xE8, 0, false, 0);

/// Stock levels and quantities
pub const MAX_COUNT: i64 = 1_000_000_000;

// ── Validation helpers ──────────────────────────────────────────────

/// Required string: non-empty after trimming and within the length limit
pub fn validate_required_text(value: &str, field: &str, max_len: usize) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::validation(format!("El campo {field} es obligatorio")));
    }
    check_len(value, field, max_len)
}

/// Optional string: within the length limit when present
pub fn validate_optional_text(
    value: &Option<String>,
    field: &str,
    max_len: usize,
) -> Result<(), AppError> {
    match value {
        Some(v) => check_len(v, field, max_len),
        None => Ok(()),
    }
}

fn check_len(value: &str, field: &str, max_len: usize) -> Result<(), AppError> {
    let len = value.chars().count();
    if len > max_len {
        return Err(AppError::validation(format!(
            "El campo {field} es demasiado largo ({len} caracteres, máximo {max_len})"
        )));
    }
    Ok(())
}

/// Minimal shape check: one `@`, non-empty local part, dotted domain
pub fn validate_email(email: &str) -> Result<(), AppError> {
    let email = email.trim();
    let valid = email.len() <= MAX_EMAIL_LEN
        && match email.split_once('@') {
            Some((local, domain)) => {
                !local.is_empty()
                    && !domain.contains('@')
                    && domain.contains('.')
                    && !domain.starts_with('.')
                    && !domain.ends_with('.')
                    && !email.contains(char::is_whitespace)
            }
            None => false,
        };
    if valid {
        Ok(())
    } else {
        Err(AppError::validation("Email inválido"))
    }
}

/// Optional email: validated only when present and non-empty
pub fn validate_optional_email(email: &Option<String>) -> Result<(), AppError> {
    match email.as_deref() {
        Some(e) if !e.trim().is_empty() => validate_email(e),
        _ => Ok(()),
    }
}

pub fn validate_non_negative_amount(value: Decimal, field: &str) -> Result<(), AppError> {
    if value.is_sign_negative() && !value.is_zero() {
        return Err(AppError::validation(format!(
            "El campo {field} no puede ser negativo"
        )));
    }
    if value > MAX_AMOUNT {
        return Err(too_large(field));
    }
    Ok(())
}

pub fn validate_non_negative_count(value: i64, field: &str) -> Result<(), AppError> {
    if value < 0 {
        return Err(AppError::validation(format!(
            "El campo {field} no puede ser negativo"
        )));
    }
    if value > MAX_COUNT {
        return Err(too_large(field));
    }
    Ok(())
}

pub fn validate_positive_count(value: i64, field: &str) -> Result<(), AppError> {
    if value <= 0 {
        return Err(AppError::validation(format!(
            "El campo {field} debe ser mayor que cero"
        )));
    }
    if value > MAX_COUNT {
        return Err(too_large(field));
    }
    Ok(())
}

fn too_large(field: &str) -> AppError {
    AppError::validation(format!("El campo {field} excede el valor máximo permitido"))
}
