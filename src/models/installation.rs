// src/models/installation.rs
use camino::Utf8PathBuf;
use serde::{Deserialize, Serialize};

pub const NAME_MIN_LEN: usize = 5;
pub const NAME_MAX_LEN: usize = 50;
pub const BACKUPS_LIMIT_MIN: u8 = 1;
pub const BACKUPS_LIMIT_MAX: u8 = 10;

/// Launch argument owned by the launcher itself.
pub const FORBIDDEN_START_PARAM: &str = "--dataPath";

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct GameVersion {
    pub version: String,
}

impl GameVersion {
    pub fn new(version: impl Into<String>) -> Self {
        Self {
            version: version.into(),
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Backup {
    pub timestamp: String,
    pub path: Utf8PathBuf,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Installation {
    pub id: String,
    pub name: String,
    pub path: Utf8PathBuf,
    pub version: String,
    #[serde(default)]
    pub start_params: String,
    pub backups_path: Utf8PathBuf,
    pub backups_limit: u8,
    #[serde(default)]
    pub backups_auto: bool,
    #[serde(default)]
    pub backups: Vec<Backup>,
    // Owned by the mod subsystem, kept verbatim.
    #[serde(default)]
    pub mods: Vec<serde_json::Value>,
}

impl Installation {
    pub fn name_len(&self) -> usize {
        self.name.chars().count()
    }

    pub fn name_in_range(&self) -> bool {
        (NAME_MIN_LEN..=NAME_MAX_LEN).contains(&self.name_len())
    }

    pub fn backups_limit_in_range(&self) -> bool {
        (BACKUPS_LIMIT_MIN..=BACKUPS_LIMIT_MAX).contains(&self.backups_limit)
    }

    pub fn has_forbidden_start_param(&self) -> bool {
        self.start_params.contains(FORBIDDEN_START_PARAM)
    }

    /// Returns a copy with the whitelisted edit fields replaced.
    pub fn with_updates(&self, updates: &InstallationUpdates) -> Installation {
        let mut next = self.clone();
        if let Some(name) = &updates.name {
            next.name = name.clone();
        }
        if let Some(version) = &updates.version {
            next.version = version.clone();
        }
        if let Some(start_params) = &updates.start_params {
            next.start_params = start_params.clone();
        }
        if let Some(backups_auto) = updates.backups_auto {
            next.backups_auto = backups_auto;
        }
        if let Some(backups_limit) = updates.backups_limit {
            next.backups_limit = backups_limit;
        }
        next
    }
}

/// Partial edit of an installation. `None` keeps the stored value.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct InstallationUpdates {
    pub name: Option<String>,
    pub version: Option<String>,
    pub start_params: Option<String>,
    pub backups_auto: Option<bool>,
    pub backups_limit: Option<u8>,
}
