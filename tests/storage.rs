mod common;

use camino::Utf8PathBuf;
use common::{base_config, installation};
use install_keeper_lib::config::storage::ConfigStorage;
use install_keeper_lib::core::registry::AppRegistry;
use install_keeper_lib::core::store::Action;
use install_keeper_lib::models::error::{Invariant, SError};
use install_keeper_lib::models::paths::DataPathRules;
use std::fs;
use tempfile::tempdir;

fn temp_root() -> (tempfile::TempDir, Utf8PathBuf) {
    let tmp = tempdir().unwrap();
    let root = Utf8PathBuf::from_path_buf(tmp.path().to_path_buf()).unwrap();
    (tmp, root)
}

#[test]
fn test_load_or_create_writes_defaults() {
    let (_tmp, root) = temp_root();
    let rules = DataPathRules::new(&root);
    let storage = ConfigStorage::new(rules.config.clone());

    let config = storage.load_or_create(&root).unwrap();
    assert!(rules.config.exists());
    assert!(config.installations.is_empty());
    assert_eq!(config.default_installations_folder, rules.installations);
    assert_eq!(config.default_backups_folder, rules.backups);

    assert_eq!(storage.load().unwrap(), config);
}

#[test]
fn test_round_trip_keeps_empty_collections() {
    let (_tmp, root) = temp_root();
    let storage = ConfigStorage::new(root.join("nested").join("config.json"));

    let mut config = base_config();
    config.installations.push(installation("a", "alpha"));
    storage.save(&config).unwrap();

    let raw = fs::read_to_string(storage.path()).unwrap();
    let json: serde_json::Value = serde_json::from_str(&raw).unwrap();
    let stored = &json["installations"][0];
    assert_eq!(stored["backups"], serde_json::json!([]));
    assert_eq!(stored["mods"], serde_json::json!([]));
    assert_eq!(stored["backupsPath"], "/backups/alpha");
    assert_eq!(stored["startParams"], "");
    assert_eq!(json["gameVersions"][0]["version"], "1.20.0");
    assert_eq!(json["defaultInstallationsFolder"], "/data/Installations");

    assert_eq!(storage.load().unwrap(), config);
}

#[test]
fn test_opaque_mods_survive_round_trip() {
    let (_tmp, root) = temp_root();
    let storage = ConfigStorage::new(root.join("config.json"));

    let mut config = base_config();
    let mut with_mods = installation("a", "alpha");
    with_mods.mods.push(serde_json::json!({
        "id": "carryon",
        "version": "1.7.0",
        "extra": { "side": "universal" }
    }));
    config.installations.push(with_mods);

    storage.save(&config).unwrap();
    assert_eq!(storage.load().unwrap(), config);
}

#[test]
fn test_load_reports_bad_json() {
    let (_tmp, root) = temp_root();
    let path = root.join("config.json");
    fs::write(&path, "{ not json").unwrap();

    let result = ConfigStorage::new(path).load();
    assert!(matches!(result, Err(SError::ParseError(_))));
}

#[test]
fn test_registry_dispatch_persists_and_keeps_snapshots() {
    let (_tmp, root) = temp_root();
    let storage = ConfigStorage::new(root.join("config.json"));
    let registry = AppRegistry::with_storage(base_config(), storage.clone());

    let before = registry.snapshot();
    let after = registry
        .dispatch(Action::AddInstallation(installation("a", "alpha")))
        .unwrap();

    assert!(before.installations.is_empty());
    assert_eq!(after.installations.len(), 1);
    assert_eq!(registry.snapshot(), after);
    assert_eq!(storage.load().unwrap(), *after);

    let rejected = registry.dispatch(Action::AddInstallation(installation("b", "alpha")));
    assert_eq!(
        rejected,
        Err(SError::InvariantViolated {
            id: "b".into(),
            invariant: Invariant::UniquePath
        })
    );
    assert_eq!(registry.snapshot(), after);
}

#[test]
fn test_registry_replace() {
    let registry = AppRegistry::new(base_config());
    let mut next = base_config();
    next.installations.push(installation("a", "alpha"));

    registry.replace(next.clone()).unwrap();
    assert_eq!(*registry.snapshot(), next);
}

#[test]
fn test_registry_replace_rejects_broken_state() {
    let (_tmp, root) = temp_root();
    let storage = ConfigStorage::new(root.join("config.json"));
    let registry = AppRegistry::with_storage(base_config(), storage.clone());
    let before = registry.snapshot();

    let mut next = base_config();
    next.installations.push(installation("a", "alpha"));
    next.installations.push(installation("b", "alpha"));

    assert!(matches!(
        registry.replace(next),
        Err(SError::InvariantViolated {
            invariant: Invariant::UniquePath,
            ..
        })
    ));
    assert_eq!(registry.snapshot(), before);
    assert!(!storage.path().exists());
}
