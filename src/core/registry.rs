// src/core/registry.rs
use crate::config::storage::ConfigStorage;
use crate::core::store::{self, Action};
use crate::models::config::Config;
use crate::models::error::SError;
use parking_lot::Mutex;
use std::sync::Arc;
use tracing::warn;

/// Holds the current config snapshot for the host application.
///
/// Readers get an `Arc` to an immutable value; dispatch builds the next value and
/// swaps the reference, so older snapshots stay valid.
pub struct AppRegistry {
    current: Mutex<Arc<Config>>,
    storage: Option<ConfigStorage>,
}

impl AppRegistry {
    /// Registry that keeps state in memory only.
    pub fn new(config: Config) -> Self {
        Self {
            current: Mutex::new(Arc::new(config)),
            storage: None,
        }
    }

    /// Registry that writes every accepted state through `storage`.
    pub fn with_storage(config: Config, storage: ConfigStorage) -> Self {
        Self {
            current: Mutex::new(Arc::new(config)),
            storage: Some(storage),
        }
    }

    pub fn snapshot(&self) -> Arc<Config> {
        self.current.lock().clone()
    }

    /// Applies `action` to the current state, persisting it before the swap.
    pub fn dispatch(&self, action: Action) -> Result<Arc<Config>, SError> {
        let mut current = self.current.lock();
        let next = store::try_apply(&current, action)?;
        self.commit(&mut current, next)
    }

    /// Replaces the current state with one produced elsewhere, e.g. by
    /// [`InstallationService`](crate::core::installation_service::InstallationService).
    ///
    /// `next` must be derived from the current [`snapshot`](Self::snapshot): it
    /// overwrites anything dispatched since. States breaking an invariant are
    /// rejected and the current state is kept.
    pub fn replace(&self, next: Config) -> Result<Arc<Config>, SError> {
        if let Some(violation) = store::check_config(&next).into_iter().next() {
            warn!("Rejected replacement state: {violation}");
            return Err(violation);
        }
        let mut current = self.current.lock();
        self.commit(&mut current, next)
    }

    fn commit(&self, current: &mut Arc<Config>, next: Config) -> Result<Arc<Config>, SError> {
        if let Some(storage) = &self.storage {
            storage.save(&next)?;
        }
        *current = Arc::new(next);
        Ok(current.clone())
    }
}
