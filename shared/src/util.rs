use chrono::{DateTime, Utc};
use rand::Rng;

/// Current UTC timestamp in milliseconds
pub fn now_millis() -> i64 {
    Utc::now().timestamp_millis()
}

/// Current UTC time, the timestamp type stored on every record
pub fn now() -> DateTime<Utc> {
    Utc::now()
}

const BASE36: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Random lowercase base36 suffix of the given length
pub fn random_suffix(len: usize) -> String {
    let mut rng = rand::thread_rng();
    (0..len)
        .map(|_| BASE36[rng.gen_range(0..BASE36.len())] as char)
        .collect()
}

/// Generate a store key: `<prefix><millis>-<random suffix>`
///
/// The millisecond timestamp keeps keys roughly ordered by creation;
/// the suffix separates records created within the same millisecond.
pub fn generate_key(prefix: &str) -> String {
    format!("{}{}-{}", prefix, now_millis(), random_suffix(7))
}

/// Accept either a full key (`producto:123-abc`) or its bare suffix (`123-abc`)
/// and return the full key.
pub fn normalize_key(prefix: &str, id: &str) -> String {
    if id.starts_with(prefix) {
        id.to_string()
    } else {
        format!("{prefix}{id}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_key_has_prefix_and_suffix() {
        let key = generate_key("producto:");
        let rest = key.strip_prefix("producto:").unwrap();
        let (millis, suffix) = rest.split_once('-').unwrap();
        assert!(millis.parse::<i64>().is_ok());
        assert_eq!(suffix.len(), 7);
        assert!(suffix.chars().all(|c| c.is_ascii_alphanumeric()));
    }

    #[test]
    fn test_generate_key_distinct() {
        let a = generate_key("cliente:");
        let b = generate_key("cliente:");
        assert_ne!(a, b);
    }

    #[test]
    fn test_normalize_key() {
        assert_eq!(normalize_key("pedido:", "pedido:1-a"), "pedido:1-a");
        assert_eq!(normalize_key("pedido:", "1-a"), "pedido:1-a");
    }
}
