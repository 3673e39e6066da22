//! Logging Infrastructure
//!
//! Console output always; a daily rolling JSON file under `LOG_DIR` when one
//! is configured. `RUST_LOG` wins over the configured level.

use std::fs;
use std::path::Path;

use tracing_subscriber::{EnvFilter, Layer, fmt, prelude::*};

/// Initialize the logger with the default level and console output only
pub fn init_logger() -> anyhow::Result<()> {
    init_logger_with_file("info", false, None)
}

/// Initialize the logging system
///
/// # Arguments
/// * `level` - Log level used when `RUST_LOG` is unset (e.g. "info", "debug")
/// * `json_format` - JSON console output (production) instead of plain text
/// * `log_dir` - Optional directory for daily rotating `iraka-server.*` files
pub fn init_logger_with_file(
    level: &str,
    json_format: bool,
    log_dir: Option<&str>,
) -> anyhow::Result<()> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let console_layer = if json_format {
        fmt::layer()
            .json()
            .with_target(true)
            .with_current_span(true)
            .boxed()
    } else {
        fmt::layer()
            .with_target(false)
            .with_thread_ids(false)
            .with_file(false)
            .boxed()
    };

    let file_layer = match log_dir {
        Some(dir) => {
            let log_path = Path::new(dir);
            fs::create_dir_all(log_path)?;
            let appender = tracing_appender::rolling::daily(log_path, "iraka-server");
            Some(
                fmt::layer()
                    .json()
                    .with_target(true)
                    .with_ansi(false)
                    .with_writer(appender),
            )
        }
        None => None,
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(console_layer)
        .with(file_layer)
        .try_init()?;

    Ok(())
}
