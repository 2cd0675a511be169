use crate::models::error::SError;
use camino::Utf8Path;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, EnvFilter};

/// Installs a daily rolling file subscriber under `logs_dir`.
/// `RUST_LOG` takes precedence over `default_level`. Keep the guard alive to flush.
pub fn init_logging(logs_dir: &Utf8Path, default_level: &str) -> Result<WorkerGuard, SError> {
    std::fs::create_dir_all(logs_dir)?;

    let appender = tracing_appender::rolling::daily(logs_dir, "install_keeper.log");
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(false)
        .try_init()
        .map_err(|e| SError::ConfigError(format!("tracing already initialized: {e}")))?;

    Ok(guard)
}
