//! Opaque session tokens

use ring::rand::{SecureRandom, SystemRandom};
use shared::error::{AppError, AppResult};

/// Random bytes per token (hex-encoded to twice as many chars)
pub const TOKEN_BYTES: usize = 32;

/// Mint a new token: 32 bytes from the system CSPRNG, lowercase hex
pub fn generate_token() -> AppResult<String> {
    let mut bytes = [0u8; TOKEN_BYTES];
    SystemRandom::new()
        .fill(&mut bytes)
        .map_err(|_| AppError::internal("System random generator unavailable"))?;
    Ok(hex::encode(bytes))
}

/// Token from an `Authorization: Bearer <token>` header value
pub fn extract_from_header(header: &str) -> Option<&str> {
    header
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|t| !t.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_shape() {
        let token = generate_token().unwrap();
        assert_eq!(token.len(), TOKEN_BYTES * 2);
        assert!(token.chars().all(|c| c.is_ascii_hexdigit()));
        assert_ne!(token, generate_token().unwrap());
    }

    #[test]
    fn test_extract_from_header() {
        assert_eq!(extract_from_header("Bearer abc"), Some("abc"));
        assert_eq!(extract_from_header("Bearer "), None);
        assert_eq!(extract_from_header("Basic abc"), None);
    }
}
