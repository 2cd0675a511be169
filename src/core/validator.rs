use crate::models::config::Config;
use crate::models::error::ValidationError;
use crate::models::installation::{Installation, InstallationUpdates};

/// Checks a new installation against the current state. First failing check wins.
pub fn validate_new_installation(
    candidate: &Installation,
    state: &Config,
) -> Result<(), ValidationError> {
    if candidate.name.is_empty()
        || candidate.path.as_str().is_empty()
        || candidate.version.is_empty()
        || candidate.backups_path.as_str().is_empty()
    {
        return Err(ValidationError::MissingFields);
    }

    check_record(candidate, || {
        if state.path_in_use(&candidate.path) {
            return Err(ValidationError::PathAlreadyInUse);
        }
        if state.backups_path_in_use(&candidate.backups_path) {
            return Err(ValidationError::BackupsPathAlreadyInUse);
        }
        Ok(())
    })?;

    if !state.has_game_version(&candidate.version) {
        return Err(ValidationError::UnknownGameVersion);
    }

    Ok(())
}

/// Checks an edit of the installation `id`, evaluated on the stored record with the
/// updates applied.
pub fn validate_edit_installation(
    id: &str,
    updates: &InstallationUpdates,
    state: &Config,
) -> Result<(), ValidationError> {
    let current = state
        .installation(id)
        .ok_or(ValidationError::InstallationNotFound)?;

    let provided_empty = updates.name.as_deref().is_some_and(str::is_empty)
        || updates.version.as_deref().is_some_and(str::is_empty);
    if provided_empty {
        return Err(ValidationError::MissingFields);
    }

    let merged = current.with_updates(updates);
    check_record(&merged, || Ok(()))?;

    // A version that disappeared after creation is kept as long as the edit leaves it alone.
    if merged.version != current.version && !state.has_game_version(&merged.version) {
        return Err(ValidationError::UnknownGameVersion);
    }

    Ok(())
}

/// Record-level checks shared by add and edit. `uniqueness` runs between the range
/// checks and the path comparison so the order stays the same for both flows.
fn check_record<F>(record: &Installation, uniqueness: F) -> Result<(), ValidationError>
where
    F: FnOnce() -> Result<(), ValidationError>,
{
    if !record.name_in_range() {
        return Err(ValidationError::NameLengthOutOfRange);
    }
    if !record.backups_limit_in_range() {
        return Err(ValidationError::BackupsLimitOutOfRange);
    }

    uniqueness()?;

    if record.backups_path == record.path {
        return Err(ValidationError::BackupsPathEqualsPath);
    }
    if record.has_forbidden_start_param() {
        return Err(ValidationError::ForbiddenStartParam);
    }
    Ok(())
}
