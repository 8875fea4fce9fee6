//! Documentation check for upcoming releases
//!
//! A release must not ship before its documentation snapshot exists. The
//! proposed version comes from the release-please manifest and is looked up
//! verbatim in the Docusaurus `versions.json`.

use std::fs;
use std::path::Path;

use indexmap::IndexMap;
use tracing::{debug, info};

use crate::version::error::CheckError;
use crate::version::registries::docusaurus::load_versions;

/// Result of checking a proposed release against the documented versions
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocCheck {
    /// Version proposed by the release manifest
    pub version: String,
    /// Whether `versions.json` lists that version
    pub documented: bool,
}

/// Read the proposed version for `component` from a release manifest
pub fn proposed_version(manifest_path: &Path, component: &str) -> Result<String, CheckError> {
    let content = fs::read_to_string(manifest_path).map_err(|source| CheckError::ManifestIo {
        path: manifest_path.to_path_buf(),
        source,
    })?;

    let manifest: IndexMap<String, String> =
        serde_json::from_str(&content).map_err(|source| CheckError::ManifestFormat {
            path: manifest_path.to_path_buf(),
            source,
        })?;

    manifest
        .get(component)
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .ok_or_else(|| CheckError::MissingComponent {
            path: manifest_path.to_path_buf(),
            component: component.to_string(),
        })
}

/// Check that the version proposed in the release manifest has documentation
pub fn has_version_documentation(
    manifest_path: &Path,
    component: &str,
    versions_path: &Path,
) -> Result<DocCheck, CheckError> {
    let version = proposed_version(manifest_path, component)?;
    debug!("Proposed release version: {}", version);

    let documented = load_versions(versions_path)?
        .iter()
        .any(|v| v.name == version);

    info!(
        "Documentation for {} {}",
        version,
        if documented { "found" } else { "missing" }
    );

    Ok(DocCheck {
        version,
        documented,
    })
}
