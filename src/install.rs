//! Installation command rendering
//!
//! The install command always points at the latest released version, never at
//! the unreleased `current` docs.

use crate::config::DEFAULT_RELEASE_ASSET_URL;
use crate::version::mode::ResolutionMode;
use crate::version::registry::VersionRegistry;
use crate::version::resolver::VersionResolver;
use crate::version::types::ResolvedVersion;

/// `kubectl` command installing a released manifest
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallationSnippet {
    release_asset_url: String,
}

impl InstallationSnippet {
    pub fn new(release_asset_url: impl Into<String>) -> Self {
        Self {
            release_asset_url: release_asset_url.into(),
        }
    }

    /// Render the command for an already resolved version.
    ///
    /// [`ResolvedVersion::Unknown`] leaves the version segment empty.
    pub fn render_version(&self, version: &ResolvedVersion) -> String {
        format!(
            "kubectl apply -f \\\n  {}/v{}/manifest.yaml",
            self.release_asset_url.trim_end_matches('/'),
            version
        )
    }

    /// Resolve the latest released version and render the command
    pub fn render<R: VersionRegistry>(&self, resolver: &VersionResolver<R>) -> String {
        self.render_version(&resolver.resolve(ResolutionMode::LatestReleased))
    }
}

impl Default for InstallationSnippet {
    fn default() -> Self {
        Self::new(DEFAULT_RELEASE_ASSET_URL)
    }
}
