use crate::core::derivation::{
    DerivationRequest, DerivationResult, PathDerivation, PathField, PathService,
};
use crate::core::services::FolderPicker;
use crate::models::config::Config;
use crate::models::error::{SError, ValidationError};
use crate::models::installation::{Installation, InstallationUpdates};
use crate::utils::id::new_installation_id;
use camino::{Utf8Path, Utf8PathBuf};

pub const DEFAULT_NAME: &str = "New installation";
pub const DEFAULT_BACKUPS_LIMIT: u8 = 3;

/// In-progress state of a new installation.
#[derive(Debug, Clone)]
pub struct AddInstallationForm {
    name: String,
    pub version: Option<String>,
    pub start_params: String,
    pub backups_limit: u8,
    pub backups_auto: bool,
    paths: PathDerivation,
}

impl AddInstallationForm {
    pub fn new(config: &Config) -> Self {
        Self {
            name: DEFAULT_NAME.to_string(),
            version: config.game_versions.first().map(|gv| gv.version.clone()),
            start_params: String::new(),
            backups_limit: DEFAULT_BACKUPS_LIMIT,
            backups_auto: false,
            paths: PathDerivation::new(
                config.default_installations_folder.clone(),
                config.default_backups_folder.clone(),
            ),
        }
    }

    /// Creates the form and derives both paths from the default name.
    pub async fn open<P: PathService>(config: &Config, service: &P) -> Result<Self, SError> {
        let mut form = Self::new(config);
        let name = form.name.clone();
        form.rename(&name, service).await?;
        Ok(form)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Updates the name and returns the derivations it triggers. Run them with
    /// [`DerivationRequest::run`] and hand the results to [`Self::accept`].
    pub fn set_name(&mut self, name: impl Into<String>) -> Vec<DerivationRequest> {
        self.name = name.into();
        self.paths.name_changed(&self.name)
    }

    pub fn accept(&mut self, result: DerivationResult) -> bool {
        self.paths.accept(result)
    }

    /// `set_name` followed by running each derivation in turn.
    pub async fn rename<P: PathService>(
        &mut self,
        name: &str,
        service: &P,
    ) -> Result<(), SError> {
        for request in self.set_name(name) {
            let result = request.run(service).await?;
            self.accept(result);
        }
        Ok(())
    }

    pub fn path(&self) -> &Utf8Path {
        self.paths.install.value()
    }

    pub fn backups_path(&self) -> &Utf8Path {
        self.paths.backups.value()
    }

    pub fn derivation(&self) -> &PathDerivation {
        &self.paths
    }

    /// Manual edit of a path field; stops derivation for that field.
    pub fn edit_path(&mut self, field: PathField, value: impl Into<Utf8PathBuf>) {
        self.paths.set_by_user(field, value.into());
    }

    /// Lets the user pick a folder. Returns whether the field changed.
    pub async fn browse<F: FolderPicker>(&mut self, field: PathField, picker: &F) -> bool {
        match picker.select_folder().await {
            Some(path) if !path.as_str().is_empty() => {
                self.paths.set_by_user(field, path);
                true
            }
            _ => false,
        }
    }

    /// Builds the candidate installation with a freshly minted id.
    pub fn to_installation(&self) -> Installation {
        Installation {
            id: new_installation_id(),
            name: self.name.clone(),
            path: self.path().to_owned(),
            version: self.version.clone().unwrap_or_default(),
            start_params: self.start_params.clone(),
            backups_path: self.backups_path().to_owned(),
            backups_limit: self.backups_limit,
            backups_auto: self.backups_auto,
            backups: Vec::new(),
            mods: Vec::new(),
        }
    }
}

/// In-progress edit of a stored installation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditInstallationForm {
    id: String,
    pub name: String,
    pub version: Option<String>,
    pub start_params: String,
    pub backups_limit: u8,
    pub backups_auto: bool,
}

impl EditInstallationForm {
    pub fn load(config: &Config, id: &str) -> Result<Self, ValidationError> {
        let installation = config
            .installation(id)
            .ok_or(ValidationError::InstallationNotFound)?;

        // Falls back to the first known version when the stored one is gone.
        let version = config
            .game_versions
            .iter()
            .find(|gv| gv.version == installation.version)
            .or_else(|| config.game_versions.first())
            .map(|gv| gv.version.clone());

        Ok(Self {
            id: installation.id.clone(),
            name: installation.name.clone(),
            version,
            start_params: installation.start_params.clone(),
            backups_limit: installation.backups_limit,
            backups_auto: installation.backups_auto,
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn to_updates(&self) -> InstallationUpdates {
        InstallationUpdates {
            name: Some(self.name.clone()),
            version: Some(self.version.clone().unwrap_or_default()),
            start_params: Some(self.start_params.clone()),
            backups_auto: Some(self.backups_auto),
            backups_limit: Some(self.backups_limit),
        }
    }
}
