use std::sync::Arc;
use std::time::Instant;

use crate::core::config::StoreBackend;
use crate::core::{Config, Result};
use crate::store::{KvStore, MemoryStore, RedbStore};

/// Server state shared by every handler
///
/// Cheap to clone: the store sits behind an `Arc`.
///
/// | Field | Meaning |
/// |-------|---------|
/// | config | Immutable configuration |
/// | store | Injected key-value store |
/// | started_at | Process start, for uptime |
#[derive(Clone, Debug)]
pub struct ServerState {
    pub config: Config,
    pub store: Arc<dyn KvStore>,
    pub started_at: Instant,
}

impl ServerState {
    /// Build state around an existing store (tests, embedding)
    pub fn with_store(config: Config, store: Arc<dyn KvStore>) -> Self {
        Self {
            config,
            store,
            started_at: Instant::now(),
        }
    }

    /// Open the configured store backend
    ///
    /// For redb the `database/` directory under `WORK_DIR` is created first.
    pub async fn initialize(config: &Config) -> Result<Self> {
        let store: Arc<dyn KvStore> = match config.store_backend {
            StoreBackend::Memory => Arc::new(MemoryStore::new()),
            StoreBackend::Redb => {
                std::fs::create_dir_all(config.database_dir())?;
                let path = config.database_path();
                tracing::info!(path = %path.display(), "Opening redb store");
                Arc::new(RedbStore::open(path)?)
            }
        };

        tracing::info!(backend = store.backend(), "Store ready");
        Ok(Self::with_store(config.clone(), store))
    }

    /// In-memory state with [`Config::for_tests`]
    pub fn for_tests() -> Self {
        Self::with_store(Config::for_tests(), Arc::new(MemoryStore::new()))
    }

    pub fn uptime_seconds(&self) -> u64 {
        self.started_at.elapsed().as_secs()
    }
}
