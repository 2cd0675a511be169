use crate::core::store;
use crate::models::config::Config;
use crate::models::error::SError;
use camino::{Utf8Path, Utf8PathBuf};
use std::fs;
use tracing::{info, warn};

/// Reads and writes the [`Config`] aggregate as pretty JSON.
#[derive(Debug, Clone)]
pub struct ConfigStorage {
    path: Utf8PathBuf,
}

impl ConfigStorage {
    pub fn new(path: impl Into<Utf8PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Utf8Path {
        &self.path
    }

    pub fn load(&self) -> Result<Config, SError> {
        let raw = fs::read_to_string(&self.path)?;
        let config: Config = serde_json::from_str(&raw)?;

        // Files edited by hand may already break invariants; keep them readable.
        for violation in store::check_config(&config) {
            warn!("Loaded config at {}: {violation}", self.path);
        }
        Ok(config)
    }

    /// Loads the aggregate, creating an empty one rooted at `data_dir` on first run.
    pub fn load_or_create(&self, data_dir: &Utf8Path) -> Result<Config, SError> {
        if self.path.exists() {
            return self.load();
        }

        info!("Creating config at {}", self.path);
        let config = Config::new(data_dir);
        self.save(&config)?;
        Ok(config)
    }

    pub fn save(&self, config: &Config) -> Result<(), SError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let raw = serde_json::to_string_pretty(config)?;
        fs::write(&self.path, raw)?;
        Ok(())
    }
}
