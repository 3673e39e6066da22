//! Iraka Server - back-office API for the Irakaworld shop
//!
//! # Overview
//!
//! - **Store** (`store`): key-value store trait with redb and in-memory backends
//! - **Repositories** (`db`): typed records under key prefixes
//! - **Kardex** (`kardex`): stock movement ledger
//! - **Auth** (`auth`): argon2 passwords, opaque session tokens
//! - **HTTP API** (`api`): axum routes under the configured prefix
//!
//! # Layout
//!
//! ```text
//! iraka-server/src/
//! ├── core/     # config, state, errors, server
//! ├── store/    # KvStore, redb, memory
//! ├── db/       # repositories
//! ├── kardex/   # movement engine
//! ├── auth/     # sessions and extractors
//! ├── api/      # routes and handlers
//! └── utils/    # logging, validation
//! ```

pub mod api;
pub mod auth;
pub mod core;
pub mod db;
pub mod kardex;
pub mod store;
pub mod utils;

pub use auth::{AuthService, CurrentUser};
pub use core::{Config, Server, ServerState};
pub use kardex::KardexService;
pub use store::{KvStore, MemoryStore, RedbStore};
pub use utils::{AppError, AppResult, ErrorCode};

pub use utils::logger::{init_logger, init_logger_with_file};

// Security events go to the "security" target so they can be filtered apart
#[macro_export]
macro_rules! security_log {
    ($level:expr, $event:expr, $($key:ident = $value:expr),*) => {
        tracing::info!(
            target: "security",
            level = $level,
            event = $event,
            $($key = $value),*
        );
    };
}

/// Load `.env` and start logging according to the environment
pub fn setup_environment() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    let config = Config::from_env();
    init_logger_with_file(
        &config.log_level,
        config.is_production(),
        config.log_dir.as_deref(),
    )?;
    Ok(())
}

pub fn print_banner() {
    println!(
        r#"
  ___           _
 |_ _|_ __ __ _| | ____ _
  | || '__/ _` | |/ / _` |
  | || | | (_| |   < (_| |
 |___|_|  \__,_|_|\_\__,_|
        "#
    );
}
