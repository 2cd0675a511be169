#![allow(dead_code)]

use camino::Utf8PathBuf;
use install_keeper_lib::models::config::Config;
use install_keeper_lib::models::installation::{GameVersion, Installation};

/// Config with two known game versions and no installations.
pub fn base_config() -> Config {
    Config {
        game_versions: vec![GameVersion::new("1.20.0"), GameVersion::new("1.19.8")],
        installations: Vec::new(),
        default_installations_folder: Utf8PathBuf::from("/data/Installations"),
        default_backups_folder: Utf8PathBuf::from("/data/Backups"),
    }
}

/// Valid installation whose paths are derived from `tag`.
pub fn installation(id: &str, tag: &str) -> Installation {
    Installation {
        id: id.to_string(),
        name: format!("Install {tag}"),
        path: Utf8PathBuf::from(format!("/games/{tag}")),
        version: "1.20.0".to_string(),
        start_params: String::new(),
        backups_path: Utf8PathBuf::from(format!("/backups/{tag}")),
        backups_limit: 3,
        backups_auto: false,
        backups: Vec::new(),
        mods: Vec::new(),
    }
}

pub fn config_with(installations: Vec<Installation>) -> Config {
    Config {
        installations,
        ..base_config()
    }
}
