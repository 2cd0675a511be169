pub mod storage;

use camino::Utf8PathBuf;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::models::error::SError;
use crate::models::paths::DataPathRules;

const APP_NAME: &str = "install_keeper";

/// Launcher-level settings, stored by confy in the platform config dir.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct AppSettings {
    pub version: u8,
    pub data_dir: Utf8PathBuf,
    pub log_level: String,
}

impl Default for AppSettings {
    fn default() -> Self {
        let base_dir = ProjectDirs::from("com", "martes", APP_NAME)
            .map(|dirs| dirs.data_dir().to_path_buf())
            .or_else(|| {
                std::env::current_exe()
                    .ok()
                    .and_then(|exe_path| exe_path.parent().map(|p| p.to_path_buf()))
            })
            .and_then(|p| Utf8PathBuf::from_path_buf(p).ok())
            .unwrap_or_else(|| Utf8PathBuf::from("."));

        Self {
            version: 0,
            data_dir: base_dir,
            log_level: "info".into(),
        }
    }
}

impl AppSettings {
    pub fn load() -> Result<AppSettings, SError> {
        Ok(confy::load(APP_NAME, None)?)
    }

    /// Falls back to defaults when the settings file can't be read.
    pub fn load_or_default() -> AppSettings {
        Self::load().unwrap_or_else(|e| {
            warn!("Using default settings: {e}");
            AppSettings::default()
        })
    }

    pub fn save(&self) -> Result<(), SError> {
        Ok(confy::store(APP_NAME, None, self)?)
    }

    pub fn paths(&self) -> DataPathRules {
        DataPathRules::new(&self.data_dir)
    }
}
