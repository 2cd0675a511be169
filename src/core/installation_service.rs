use crate::core::services::NotificationSink;
use crate::core::store::{self, Action};
use crate::core::validator;
use crate::models::config::Config;
use crate::models::error::{SError, ValidationError};
use crate::models::installation::{Installation, InstallationUpdates};
use crate::models::notification::{keys, Severity};
use tracing::{error, instrument, warn};

/// Validates, dispatches and reports installation mutations.
/// Every outcome is also pushed to the notification sink.
pub struct InstallationService<'a, N: NotificationSink> {
    sink: &'a N,
}

impl<'a, N: NotificationSink> InstallationService<'a, N> {
    pub fn new(sink: &'a N) -> Self {
        Self { sink }
    }

    /// Adds `installation` and returns the next state.
    #[instrument(skip_all, fields(id = %installation.id))]
    pub fn add_installation(
        &self,
        config: &Config,
        installation: Installation,
    ) -> Result<Config, SError> {
        // Validation failure leaves the config untouched.
        validator::validate_new_installation(&installation, config)
            .map_err(|e| self.reject(e))?;

        self.dispatch(
            config,
            Action::AddInstallation(installation),
            keys::ADDED,
            keys::ADD_FAILED,
        )
    }

    #[instrument(skip(self, config, updates))]
    pub fn edit_installation(
        &self,
        config: &Config,
        id: &str,
        updates: InstallationUpdates,
    ) -> Result<Config, SError> {
        validator::validate_edit_installation(id, &updates, config)
            .map_err(|e| self.reject(e))?;

        self.dispatch(
            config,
            Action::EditInstallation {
                id: id.to_string(),
                updates,
            },
            keys::EDITED,
            keys::EDIT_FAILED,
        )
    }

    #[instrument(skip(self, config))]
    pub fn remove_installation(&self, config: &Config, id: &str) -> Result<Config, SError> {
        if config.installation(id).is_none() {
            return Err(self.reject(ValidationError::InstallationNotFound));
        }

        self.dispatch(
            config,
            Action::RemoveInstallation { id: id.to_string() },
            keys::REMOVED,
            keys::REMOVE_FAILED,
        )
    }

    fn dispatch(
        &self,
        config: &Config,
        action: Action,
        success: &str,
        failure: &str,
    ) -> Result<Config, SError> {
        match store::try_apply(config, action) {
            Ok(next) => {
                self.sink
                    .notify(keys::TITLE_SUCCESS, success, Severity::Success);
                Ok(next)
            }
            Err(e) => {
                error!("Dispatch failed: {e}");
                self.sink.notify(keys::TITLE_ERROR, failure, Severity::Error);
                Err(e)
            }
        }
    }

    fn reject(&self, e: ValidationError) -> SError {
        warn!("Validation failed: {e}");
        self.sink
            .notify(keys::TITLE_ERROR, e.message_key(), Severity::Error);
        SError::Validation(e)
    }
}
