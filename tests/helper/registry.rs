//! Registry test utilities

use std::cell::Cell;

use doc_version::version::error::RegistryError;
use doc_version::version::registry::VersionRegistry;
use doc_version::version::types::VersionDescriptor;

/// Registry that records how often the full collection is requested
pub struct CountingRegistry {
    versions: Option<Vec<VersionDescriptor>>,
    active: Option<VersionDescriptor>,
    default_version: String,
    all_versions_calls: Cell<usize>,
}

impl CountingRegistry {
    pub fn new(versions: &[&str]) -> Self {
        Self {
            versions: Some(versions.iter().map(|v| VersionDescriptor::new(*v)).collect()),
            active: None,
            default_version: "current".to_string(),
            all_versions_calls: Cell::new(0),
        }
    }

    pub fn unavailable() -> Self {
        Self {
            versions: None,
            ..Self::new(&[])
        }
    }

    pub fn with_active(mut self, active: &str) -> Self {
        self.active = Some(VersionDescriptor::new(active));
        self
    }

    pub fn with_default_version(mut self, default_version: &str) -> Self {
        self.default_version = default_version.to_string();
        self
    }

    pub fn all_versions_calls(&self) -> usize {
        self.all_versions_calls.get()
    }
}

impl VersionRegistry for CountingRegistry {
    fn active_version(&self) -> Option<VersionDescriptor> {
        self.active.clone()
    }

    fn all_versions(&self) -> Result<Vec<VersionDescriptor>, RegistryError> {
        self.all_versions_calls.set(self.all_versions_calls.get() + 1);
        self.versions.clone().ok_or(RegistryError::Unavailable)
    }

    fn default_version(&self) -> String {
        self.default_version.clone()
    }
}
