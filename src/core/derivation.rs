use crate::models::error::SError;
use camino::{Utf8Component, Utf8Path, Utf8PathBuf};
use regex::Regex;
use std::future::Future;
use std::sync::LazyLock;
use tracing::debug;

static UNSAFE_CHARS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^A-Za-z0-9]").expect("static pattern"));

/// Platform service that joins and normalizes path segments.
pub trait PathService {
    fn format_path(
        &self,
        segments: &[&str],
    ) -> impl Future<Output = Result<Utf8PathBuf, SError>> + Send;
}

/// Lexical join + normalization. Does not touch the filesystem.
#[derive(Debug, Default, Clone, Copy)]
pub struct LocalPathService;

impl PathService for LocalPathService {
    async fn format_path(&self, segments: &[&str]) -> Result<Utf8PathBuf, SError> {
        if segments.iter().all(|s| s.is_empty()) {
            return Err(SError::PathError("no path segments".into()));
        }
        let joined = segments
            .iter()
            .fold(Utf8PathBuf::new(), |acc, segment| acc.join(segment));
        Ok(normalize(&joined))
    }
}

/// Resolves `.` and `..` without following links. `..` never climbs above the root.
pub fn normalize(path: &Utf8Path) -> Utf8PathBuf {
    let mut out = Utf8PathBuf::new();
    for component in path.components() {
        match component {
            Utf8Component::CurDir => {}
            Utf8Component::ParentDir => {
                let popped = matches!(
                    out.components().next_back(),
                    Some(Utf8Component::Normal(_))
                ) && out.pop();
                if !popped && !out.has_root() {
                    out.push("..");
                }
            }
            other => out.push(other.as_str()),
        }
    }
    out
}

/// Replaces every character outside `[A-Za-z0-9]` with `-`.
pub fn sanitize_segment(name: &str) -> String {
    UNSAFE_CHARS.replace_all(name, "-").into_owned()
}

pub async fn derive_default_path<P: PathService>(
    service: &P,
    base: &Utf8Path,
    name: &str,
) -> Result<Utf8PathBuf, SError> {
    let segment = sanitize_segment(name);
    service.format_path(&[base.as_str(), segment.as_str()]).await
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathField {
    Install,
    Backups,
}

/// One-way latch: once overridden a field is never derived again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PathLatch {
    #[default]
    Derived,
    Overridden,
}

/// A path field that follows the installation name until the user takes over.
#[derive(Debug, Clone, Default)]
pub struct DerivedPath {
    value: Utf8PathBuf,
    latch: PathLatch,
    generation: u64,
}

impl DerivedPath {
    pub fn value(&self) -> &Utf8Path {
        &self.value
    }

    pub fn latch(&self) -> PathLatch {
        self.latch
    }

    pub fn is_overridden(&self) -> bool {
        self.latch == PathLatch::Overridden
    }

    /// Manual edit or folder selection.
    pub fn set_by_user(&mut self, value: Utf8PathBuf) {
        self.value = value;
        self.latch = PathLatch::Overridden;
    }

    /// Starts a new derivation, superseding any in flight. `None` once overridden.
    fn begin(&mut self) -> Option<u64> {
        if self.is_overridden() {
            return None;
        }
        self.generation += 1;
        Some(self.generation)
    }

    fn resolve(&mut self, generation: u64, value: Utf8PathBuf) -> bool {
        if self.is_overridden() || generation != self.generation {
            return false;
        }
        self.value = value;
        true
    }
}

/// Derivation to run for one field, captured at the time the name changed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DerivationRequest {
    pub field: PathField,
    pub generation: u64,
    pub base: Utf8PathBuf,
    pub name: String,
}

impl DerivationRequest {
    pub async fn run<P: PathService>(self, service: &P) -> Result<DerivationResult, SError> {
        let path = derive_default_path(service, &self.base, &self.name).await?;
        debug!(field = ?self.field, generation = self.generation, %path, "Derived default path");
        Ok(DerivationResult {
            request: self,
            path,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DerivationResult {
    pub request: DerivationRequest,
    pub path: Utf8PathBuf,
}

/// The two derived path fields of an installation being created.
#[derive(Debug, Clone, Default)]
pub struct PathDerivation {
    pub install: DerivedPath,
    pub backups: DerivedPath,
    installations_base: Utf8PathBuf,
    backups_base: Utf8PathBuf,
}

impl PathDerivation {
    pub fn new(installations_base: Utf8PathBuf, backups_base: Utf8PathBuf) -> Self {
        Self {
            installations_base,
            backups_base,
            ..Default::default()
        }
    }

    pub fn field(&self, field: PathField) -> &DerivedPath {
        match field {
            PathField::Install => &self.install,
            PathField::Backups => &self.backups,
        }
    }

    fn field_mut(&mut self, field: PathField) -> &mut DerivedPath {
        match field {
            PathField::Install => &mut self.install,
            PathField::Backups => &mut self.backups,
        }
    }

    /// Requests for every field still following the name. Every call supersedes
    /// derivations in flight; empty names derive nothing.
    pub fn name_changed(&mut self, name: &str) -> Vec<DerivationRequest> {
        let mut requests = Vec::with_capacity(2);
        for field in [PathField::Install, PathField::Backups] {
            let Some(generation) = self.field_mut(field).begin() else {
                continue;
            };
            if name.is_empty() {
                continue;
            }
            let base = match field {
                PathField::Install => self.installations_base.clone(),
                PathField::Backups => self.backups_base.clone(),
            };
            requests.push(DerivationRequest {
                field,
                generation,
                base,
                name: name.to_string(),
            });
        }
        requests
    }

    /// Applies a finished derivation unless it went stale. Returns whether it was applied.
    pub fn accept(&mut self, result: DerivationResult) -> bool {
        let field = result.request.field;
        let applied = self
            .field_mut(field)
            .resolve(result.request.generation, result.path);
        if !applied {
            debug!(?field, generation = result.request.generation, "Dropped stale derivation");
        }
        applied
    }

    pub fn set_by_user(&mut self, field: PathField, value: Utf8PathBuf) {
        self.field_mut(field).set_by_user(value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sanitize_replaces_non_alphanumerics() {
        assert_eq!(sanitize_segment("My Server!"), "My-Server-");
        assert_eq!(sanitize_segment("v1.20_test"), "v1-20-test");
        assert_eq!(sanitize_segment("Plain42"), "Plain42");
    }

    #[test]
    fn normalize_collapses_dots() {
        assert_eq!(normalize(Utf8Path::new("/base/./a/../b")), "/base/b");
        assert_eq!(normalize(Utf8Path::new("/../a")), "/a");
        assert_eq!(normalize(Utf8Path::new("a/../../b")), "../b");
    }

    #[test]
    fn overridden_field_ignores_late_results() {
        let mut field = DerivedPath::default();
        let generation = field.begin().unwrap();
        field.set_by_user("/mine".into());
        assert!(!field.resolve(generation, "/derived".into()));
        assert_eq!(field.value(), "/mine");
        assert!(field.begin().is_none());
    }
}
