pub mod config;
pub mod core;
pub mod models;
pub mod utils;

use crate::config::storage::ConfigStorage;
use crate::config::AppSettings;
use crate::core::registry::AppRegistry;
use crate::models::error::SError;
use tracing::info;
use tracing_appender::non_blocking::WorkerGuard;

/// Loads settings, starts logging and opens the persisted config.
/// The returned guard must outlive the registry for logs to be flushed.
pub fn init() -> Result<(AppRegistry, WorkerGuard), SError> {
    let settings = AppSettings::load_or_default();
    let paths = settings.paths();
    let guard = crate::utils::logging::init_logging(&paths.logs, &settings.log_level)?;

    let storage = ConfigStorage::new(paths.config);
    let config = storage.load_or_create(&settings.data_dir)?;
    info!(
        installations = config.installations.len(),
        game_versions = config.game_versions.len(),
        "Config loaded from {}",
        storage.path()
    );

    Ok((AppRegistry::with_storage(config, storage), guard))
}
