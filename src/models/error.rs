use derive_more::Display;
use serde::{Deserialize, Serialize};

/// Reasons a candidate installation or an edit is refused before dispatch.
#[derive(Serialize, Deserialize, Debug, Display, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[display("One or more required fields are missing")]
    MissingFields,
    #[display("Installation name must be between 5 and 50 characters")]
    NameLengthOutOfRange,
    #[display("Backups limit must be between 1 and 10")]
    BackupsLimitOutOfRange,
    #[display("Folder is already used by another installation")]
    PathAlreadyInUse,
    #[display("Backups folder is already used by another installation")]
    BackupsPathAlreadyInUse,
    #[display("Backups folder can't be the installation folder")]
    BackupsPathEqualsPath,
    #[display("Start parameters can't include --dataPath")]
    ForbiddenStartParam,
    #[display("Selected game version doesn't exist")]
    UnknownGameVersion,
    #[display("Installation not found")]
    InstallationNotFound,
}

impl ValidationError {
    /// Localization key of the user-facing message.
    pub fn message_key(&self) -> &'static str {
        match self {
            ValidationError::MissingFields => "notifications.body.missingFields",
            ValidationError::NameLengthOutOfRange => {
                "features.installations.installationNameMinMaxCharacters"
            }
            ValidationError::BackupsLimitOutOfRange => {
                "features.installations.backupsLimitMinMax"
            }
            ValidationError::PathAlreadyInUse => "features.installations.folderAlreadyInUse",
            ValidationError::BackupsPathAlreadyInUse => {
                "features.installations.backupsFolderAlreadyInUse"
            }
            ValidationError::BackupsPathEqualsPath => {
                "features.installations.backupsFolderSameAsFolder"
            }
            ValidationError::ForbiddenStartParam => "features.installations.cantUseDataPath",
            ValidationError::UnknownGameVersion => "features.versions.versionNotFound",
            ValidationError::InstallationNotFound => "features.installations.noInstallationFound",
        }
    }
}

/// Aggregate invariant that an accepted mutation would break.
#[derive(Serialize, Deserialize, Debug, Display, Clone, Copy, PartialEq, Eq)]
pub enum Invariant {
    #[display("duplicate id")]
    UniqueId,
    #[display("duplicate path")]
    UniquePath,
    #[display("duplicate backups path")]
    UniqueBackupsPath,
    #[display("backups path equals path")]
    BackupsPathDistinct,
    #[display("name length out of range")]
    NameLength,
    #[display("forbidden start parameter")]
    StartParams,
    #[display("backups limit out of range")]
    BackupsLimit,
}

#[derive(Serialize, Deserialize, Debug, Display, Clone, PartialEq)]
pub enum SError {
    #[display("io error: {_0}")]
    IOError(String),
    #[display("parse error: {_0}")]
    ParseError(String),
    #[display("config error: {_0}")]
    ConfigError(String),
    #[display("path error: {_0}")]
    PathError(String),
    #[display("{_0}")]
    Validation(ValidationError),
    #[display("installation `{id}` rejected: {invariant}")]
    InvariantViolated { id: String, invariant: Invariant },
}

impl std::error::Error for SError {}

impl From<std::io::Error> for SError {
    fn from(e: std::io::Error) -> Self {
        SError::IOError(e.to_string())
    }
}

impl From<serde_json::Error> for SError {
    fn from(e: serde_json::Error) -> Self {
        SError::ParseError(e.to_string())
    }
}

impl From<confy::ConfyError> for SError {
    fn from(e: confy::ConfyError) -> Self {
        SError::ConfigError(e.to_string())
    }
}

impl From<ValidationError> for SError {
    fn from(e: ValidationError) -> Self {
        SError::Validation(e)
    }
}
