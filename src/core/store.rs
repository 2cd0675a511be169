use crate::models::config::Config;
use crate::models::error::{Invariant, SError};
use crate::models::installation::{Installation, InstallationUpdates};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(tag = "type", content = "payload", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Action {
    AddInstallation(Installation),
    EditInstallation {
        id: String,
        updates: InstallationUpdates,
    },
    RemoveInstallation {
        id: String,
    },
}

impl Action {
    pub fn installation_id(&self) -> &str {
        match self {
            Action::AddInstallation(installation) => &installation.id,
            Action::EditInstallation { id, .. } | Action::RemoveInstallation { id } => id,
        }
    }
}

/// Applies `action` to `state` and returns the next aggregate.
///
/// The input is never modified. An action that would break an invariant is dropped
/// with a warning and the returned state equals the input.
pub fn apply(state: &Config, action: Action) -> Config {
    try_apply(state, action).unwrap_or_else(|e| {
        warn!("Rejected action: {e}");
        state.clone()
    })
}

/// Like [`apply`], but reports the broken invariant instead of swallowing it.
pub fn try_apply(state: &Config, action: Action) -> Result<Config, SError> {
    let mut next = state.clone();

    match action {
        Action::AddInstallation(installation) => {
            check_installation(&installation, &state.installations)?;
            info!(id = %installation.id, path = %installation.path, "Adding installation");
            next.installations.push(installation);
        }
        Action::EditInstallation { id, updates } => {
            let Some(index) = next.installations.iter().position(|i| i.id == id) else {
                debug!(%id, "Edit targets unknown installation, ignoring");
                return Ok(next);
            };
            let edited = next.installations[index].with_updates(&updates);
            let others: Vec<Installation> = next
                .installations
                .iter()
                .filter(|i| i.id != id)
                .cloned()
                .collect();
            check_installation(&edited, &others)?;
            info!(%id, "Editing installation");
            next.installations[index] = edited;
        }
        Action::RemoveInstallation { id } => {
            let before = next.installations.len();
            next.installations.retain(|i| i.id != id);
            if next.installations.len() == before {
                debug!(%id, "Remove targets unknown installation, ignoring");
            } else {
                info!(%id, "Removed installation");
            }
        }
    }

    Ok(next)
}

/// Checks invariants of one installation against the rest of the aggregate.
pub fn check_installation(candidate: &Installation, others: &[Installation]) -> Result<(), SError> {
    let violated = |invariant| SError::InvariantViolated {
        id: candidate.id.clone(),
        invariant,
    };

    if others.iter().any(|i| i.id == candidate.id) {
        return Err(violated(Invariant::UniqueId));
    }
    if others.iter().any(|i| i.path == candidate.path) {
        return Err(violated(Invariant::UniquePath));
    }
    if others.iter().any(|i| i.backups_path == candidate.backups_path) {
        return Err(violated(Invariant::UniqueBackupsPath));
    }
    if candidate.backups_path == candidate.path {
        return Err(violated(Invariant::BackupsPathDistinct));
    }
    if !candidate.name_in_range() {
        return Err(violated(Invariant::NameLength));
    }
    if candidate.has_forbidden_start_param() {
        return Err(violated(Invariant::StartParams));
    }
    if !candidate.backups_limit_in_range() {
        return Err(violated(Invariant::BackupsLimit));
    }
    Ok(())
}

/// Checks every installation of an aggregate, e.g. one read back from disk.
pub fn check_config(config: &Config) -> Vec<SError> {
    config
        .installations
        .iter()
        .enumerate()
        .filter_map(|(index, installation)| {
            let others: Vec<Installation> = config
                .installations
                .iter()
                .enumerate()
                .filter(|(other, _)| *other != index)
                .map(|(_, i)| i.clone())
                .collect();
            check_installation(installation, &others).err()
        })
        .collect()
}
