//! In-memory version registry

use crate::version::error::RegistryError;
use crate::version::registry::VersionRegistry;
use crate::version::types::{CURRENT_VERSION, VersionDescriptor};

/// Registry over an already-loaded collection of versions
///
/// A registry without a collection behaves as an unavailable collaborator.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRegistry {
    versions: Option<Vec<VersionDescriptor>>,
    active: Option<VersionDescriptor>,
    default_version: Option<String>,
}

impl InMemoryRegistry {
    pub fn new(versions: Vec<VersionDescriptor>) -> Self {
        Self {
            versions: Some(versions),
            ..Default::default()
        }
    }

    /// Registry whose collection could not be loaded
    pub fn unavailable() -> Self {
        Self::default()
    }

    pub fn with_active(mut self, active: Option<VersionDescriptor>) -> Self {
        self.active = active;
        self
    }

    pub fn with_default_version(mut self, default_version: Option<String>) -> Self {
        self.default_version = default_version;
        self
    }

    pub fn is_available(&self) -> bool {
        self.versions.is_some()
    }
}

impl VersionRegistry for InMemoryRegistry {
    fn active_version(&self) -> Option<VersionDescriptor> {
        self.active.clone()
    }

    fn all_versions(&self) -> Result<Vec<VersionDescriptor>, RegistryError> {
        self.versions.clone().ok_or(RegistryError::Unavailable)
    }

    /// Explicit default, else the first released version in collection
    /// order, else `current`.
    fn default_version(&self) -> String {
        if let Some(default_version) = &self.default_version {
            return default_version.clone();
        }

        self.versions
            .iter()
            .flatten()
            .find(|v| !v.is_current())
            .map(|v| v.name.clone())
            .unwrap_or_else(|| CURRENT_VERSION.to_string())
    }
}
