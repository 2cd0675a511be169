// src/models/config.rs
use crate::models::installation::{GameVersion, Installation};
use crate::models::paths::DataPathRules;
use camino::{Utf8Path, Utf8PathBuf};
use serde::{Deserialize, Serialize};

/// The persisted aggregate: game versions, installations and the default folders
/// new installations are derived under.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[serde(default)]
    pub game_versions: Vec<GameVersion>,
    #[serde(default)]
    pub installations: Vec<Installation>,
    pub default_installations_folder: Utf8PathBuf,
    pub default_backups_folder: Utf8PathBuf,
}

impl Config {
    /// Empty aggregate whose default folders live under `data_dir`.
    pub fn new(data_dir: &Utf8Path) -> Self {
        let rules = DataPathRules::new(data_dir);
        Self {
            game_versions: Vec::new(),
            installations: Vec::new(),
            default_installations_folder: rules.installations,
            default_backups_folder: rules.backups,
        }
    }

    pub fn installation(&self, id: &str) -> Option<&Installation> {
        self.installations.iter().find(|i| i.id == id)
    }

    pub fn has_game_version(&self, version: &str) -> bool {
        self.game_versions.iter().any(|gv| gv.version == version)
    }

    pub fn path_in_use(&self, path: &Utf8Path) -> bool {
        self.installations.iter().any(|i| i.path.as_path() == path)
    }

    pub fn backups_path_in_use(&self, path: &Utf8Path) -> bool {
        self.installations.iter().any(|i| i.backups_path.as_path() == path)
    }
}
