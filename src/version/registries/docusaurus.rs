//! Docusaurus `versions.json` registry
//!
//! Docusaurus keeps the list of snapshotted documentation versions in
//! `versions.json` next to the site config, newest first. The unreleased
//! docs folder is exposed as the extra `current` version.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::config::Config;
use crate::version::error::RegistryError;
use crate::version::registries::memory::InMemoryRegistry;
use crate::version::types::{CURRENT_VERSION, VersionDescriptor};

/// Read the versions listed in a Docusaurus `versions.json` file
pub fn load_versions(path: &Path) -> Result<Vec<VersionDescriptor>, RegistryError> {
    let content = fs::read_to_string(path).map_err(|source| RegistryError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let names: Vec<String> =
        serde_json::from_str(&content).map_err(|source| RegistryError::InvalidFormat {
            path: path.to_path_buf(),
            source,
        })?;

    debug!("Loaded {} versions from {:?}", names.len(), path);
    Ok(names.into_iter().map(VersionDescriptor::from).collect())
}

/// A Docusaurus site's versioned docs setup
#[derive(Debug, Clone, PartialEq)]
pub struct DocusaurusSite {
    versions_path: PathBuf,
    include_current_version: bool,
    last_version: Option<String>,
}

impl DocusaurusSite {
    pub fn new(versions_path: impl Into<PathBuf>) -> Self {
        Self {
            versions_path: versions_path.into(),
            include_current_version: true,
            last_version: None,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self {
            versions_path: config.versions_path(),
            include_current_version: config.docs.include_current_version,
            last_version: config.docs.last_version.clone(),
        }
    }

    pub fn with_include_current_version(mut self, include: bool) -> Self {
        self.include_current_version = include;
        self
    }

    pub fn with_last_version(mut self, last_version: Option<String>) -> Self {
        self.last_version = last_version;
        self
    }

    pub fn versions_path(&self) -> &Path {
        &self.versions_path
    }

    /// Load the site's versions into a registry
    ///
    /// A missing or malformed `versions.json` yields an unavailable registry.
    pub fn registry(&self, active: Option<String>) -> InMemoryRegistry {
        let registry = match load_versions(&self.versions_path) {
            Ok(mut versions) => {
                if self.include_current_version && !versions.iter().any(|v| v.is_current()) {
                    versions.insert(0, VersionDescriptor::new(CURRENT_VERSION));
                }
                InMemoryRegistry::new(versions)
            }
            Err(e) => {
                warn!("Version registry unavailable: {}", e);
                InMemoryRegistry::unavailable()
            }
        };

        registry
            .with_active(active.map(VersionDescriptor::from))
            .with_default_version(self.last_version.clone())
    }
}
