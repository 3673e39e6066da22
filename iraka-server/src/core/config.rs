use std::path::PathBuf;

/// Store backend selected by `STORE_BACKEND`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreBackend {
    Redb,
    Memory,
}

impl StoreBackend {
    fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "memory" | "mem" => Self::Memory,
            _ => Self::Redb,
        }
    }
}

/// Bootstrap admin account created by `POST /init/admin`
#[derive(Clone)]
pub struct AdminConfig {
    pub email: String,
    pub password: String,
    pub name: String,
}

impl std::fmt::Debug for AdminConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdminConfig")
            .field("email", &self.email)
            .field("password", &"***")
            .field("name", &self.name)
            .finish()
    }
}

/// Server configuration
///
/// # Environment variables
///
/// | Variable | Default | Meaning |
/// |----------|---------|---------|
/// | WORK_DIR | ./data | Working directory (database, logs) |
/// | HTTP_PORT | 3000 | HTTP port |
/// | API_PREFIX | /make-server | Route prefix |
/// | STORE_BACKEND | redb | `redb` or `memory` |
/// | SESSION_TTL_MINUTES | 1440 | Session lifetime |
/// | ANON_KEY | iraka-public-anon-key | Key clients send on public routes |
/// | ADMIN_EMAIL / ADMIN_PASSWORD / ADMIN_NAME | see below | Bootstrap admin |
/// | MAX_BODY_SIZE | 1048576 | Request body limit (bytes) |
/// | REQUEST_TIMEOUT_MS | 30000 | Per-request timeout |
/// | LOG_LEVEL | info | Fallback when `RUST_LOG` is unset |
/// | LOG_DIR | unset | Daily rolling log files |
/// | ENVIRONMENT | development | Environment name |
///
/// # Example
///
/// ```ignore
/// WORK_DIR=/srv/iraka HTTP_PORT=8080 cargo run -p iraka-server
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// Working directory; the redb file lives in `database/` under it
    pub work_dir: String,
    pub http_port: u16,
    /// Prefix every route is nested under
    pub api_prefix: String,
    pub store_backend: StoreBackend,
    pub session_ttl_minutes: i64,
    pub anon_key: String,
    pub admin: AdminConfig,
    pub max_body_size: usize,
    pub request_timeout_ms: u64,
    pub log_level: String,
    pub log_dir: Option<String>,
    /// development | staging | production
    pub environment: String,
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.into())
}

fn env_parse<T: std::str::FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

/// Normalise to a leading slash and no trailing slash; `/` becomes empty
fn normalize_prefix(prefix: &str) -> String {
    let trimmed = prefix.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        String::new()
    } else if trimmed.starts_with('/') {
        trimmed.to_string()
    } else {
        format!("/{trimmed}")
    }
}

impl Config {
    /// Load configuration from the environment, falling back to defaults
    pub fn from_env() -> Self {
        Self {
            work_dir: env_or("WORK_DIR", "./data"),
            http_port: env_parse("HTTP_PORT", 3000),
            api_prefix: normalize_prefix(&env_or("API_PREFIX", "/make-server")),
            store_backend: StoreBackend::parse(&env_or("STORE_BACKEND", "redb")),
            session_ttl_minutes: env_parse("SESSION_TTL_MINUTES", 1440),
            anon_key: env_or("ANON_KEY", "iraka-public-anon-key"),
            admin: AdminConfig {
                email: env_or("ADMIN_EMAIL", "admin@irakaworld.com"),
                password: env_or("ADMIN_PASSWORD", "Iraka2025"),
                name: env_or("ADMIN_NAME", "Administrador Principal"),
            },
            max_body_size: env_parse("MAX_BODY_SIZE", 1024 * 1024),
            request_timeout_ms: env_parse("REQUEST_TIMEOUT_MS", 30000),
            log_level: env_or("LOG_LEVEL", "info"),
            log_dir: std::env::var("LOG_DIR").ok().filter(|d| !d.is_empty()),
            environment: env_or("ENVIRONMENT", "development"),
        }
    }

    /// In-memory configuration with fixed values, independent of the
    /// environment
    pub fn for_tests() -> Self {
        Self {
            work_dir: std::env::temp_dir().to_string_lossy().into_owned(),
            http_port: 0,
            api_prefix: "/make-server".to_string(),
            store_backend: StoreBackend::Memory,
            session_ttl_minutes: 60,
            anon_key: "test-anon-key".to_string(),
            admin: AdminConfig {
                email: "admin@irakaworld.com".to_string(),
                password: "Iraka2025".to_string(),
                name: "Administrador Principal".to_string(),
            },
            max_body_size: 1024 * 1024,
            request_timeout_ms: 30000,
            log_level: "info".to_string(),
            log_dir: None,
            environment: "test".to_string(),
        }
    }

    /// Directory holding the redb file
    pub fn database_dir(&self) -> PathBuf {
        PathBuf::from(&self.work_dir).join("database")
    }

    pub fn database_path(&self) -> PathBuf {
        self.database_dir().join("iraka.redb")
    }

    pub fn session_ttl(&self) -> chrono::Duration {
        chrono::Duration::minutes(self.session_ttl_minutes)
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_prefix() {
        assert_eq!(normalize_prefix("/make-server"), "/make-server");
        assert_eq!(normalize_prefix("make-server/"), "/make-server");
        assert_eq!(normalize_prefix("/"), "");
        assert_eq!(normalize_prefix(""), "");
    }

    #[test]
    fn test_store_backend_parse() {
        assert_eq!(StoreBackend::parse("memory"), StoreBackend::Memory);
        assert_eq!(StoreBackend::parse("REDB"), StoreBackend::Redb);
        assert_eq!(StoreBackend::parse("anything"), StoreBackend::Redb);
    }

    #[test]
    fn test_debug_hides_admin_password() {
        let printed = format!("{:?}", Config::for_tests());
        assert!(!printed.contains("Iraka2025"));
    }

    #[test]
    fn test_database_path_under_work_dir() {
        let mut config = Config::for_tests();
        config.work_dir = "/srv/iraka".to_string();
        assert_eq!(
            config.database_path(),
            PathBuf::from("/srv/iraka/database/iraka.redb")
        );
    }
}
