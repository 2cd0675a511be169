use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Success,
    Error,
    Warning,
    Info,
}

/// Message handed to a notification sink. `title` and `body` are localization keys.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub id: u64,
    pub title: String,
    pub body: String,
    pub severity: Severity,
}

pub mod keys {
    pub const TITLE_SUCCESS: &str = "notifications.titles.success";
    pub const TITLE_ERROR: &str = "notifications.titles.error";

    pub const ADDED: &str = "features.installations.installationSuccessfullyAdded";
    pub const EDITED: &str = "features.installations.installationSuccessfullyEdited";
    pub const REMOVED: &str = "features.installations.installationSuccessfullyRemoved";
    pub const ADD_FAILED: &str = "features.installations.errorAddingInstallation";
    pub const EDIT_FAILED: &str = "features.installations.errorEditingInstallation";
    pub const REMOVE_FAILED: &str = "features.installations.errorRemovingInstallation";
}
