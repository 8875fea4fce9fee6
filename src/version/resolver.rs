//! Documentation version resolver
//!
//! Picks the version identifier a page should link against:
//! - `Latest`: the active version, falling back to the site default
//! - `LatestReleased`: the numerically highest version other than `current`

use tracing::{debug, warn};

use crate::version::error::{InvalidModeError, RegistryError};
use crate::version::mode::ResolutionMode;
use crate::version::natural::natural_cmp;
use crate::version::registry::VersionRegistry;
use crate::version::types::{ResolvedVersion, VersionDescriptor};

/// Resolve a version from three provider capabilities.
///
/// Providers are only invoked when the mode needs them: `Latest` never reads
/// the full collection and `LatestReleased` never reads the active version.
/// An unavailable collection resolves to [`ResolvedVersion::Unknown`].
pub fn resolve<A, V, D>(
    mode: ResolutionMode,
    active_version: A,
    all_versions: V,
    default_version: D,
) -> ResolvedVersion
where
    A: FnOnce() -> Option<VersionDescriptor>,
    V: FnOnce() -> Result<Vec<VersionDescriptor>, RegistryError>,
    D: FnOnce() -> String,
{
    match mode {
        ResolutionMode::Latest => {
            let name = match active_version() {
                Some(active) => active.name,
                None => {
                    debug!("No active version, using site default");
                    default_version()
                }
            };
            ResolvedVersion::Known(name)
        }
        ResolutionMode::LatestReleased => {
            let versions = match all_versions() {
                Ok(versions) => versions,
                Err(e) => {
                    warn!("Cannot resolve latest released version: {}", e);
                    return ResolvedVersion::Unknown;
                }
            };

            match latest_released(&versions) {
                Some(latest) => ResolvedVersion::Known(latest.name.clone()),
                None => {
                    debug!("No released versions among {} entries", versions.len());
                    ResolvedVersion::Unknown
                }
            }
        }
    }
}

/// Like [`resolve`], but takes the mode as a string from configuration or
/// user input.
pub fn resolve_named<A, V, D>(
    mode: &str,
    active_version: A,
    all_versions: V,
    default_version: D,
) -> Result<ResolvedVersion, InvalidModeError>
where
    A: FnOnce() -> Option<VersionDescriptor>,
    V: FnOnce() -> Result<Vec<VersionDescriptor>, RegistryError>,
    D: FnOnce() -> String,
{
    let mode = mode.parse::<ResolutionMode>()?;
    Ok(resolve(mode, active_version, all_versions, default_version))
}

/// Find the highest released version in a collection
///
/// Ties under [`natural_cmp`] keep their input order, so the first of
/// several equal names wins.
pub fn latest_released(versions: &[VersionDescriptor]) -> Option<&VersionDescriptor> {
    let mut released: Vec<&VersionDescriptor> =
        versions.iter().filter(|v| !v.is_current()).collect();
    released.sort_by(|a, b| natural_cmp(&b.name, &a.name));
    released.first().copied()
}

/// Resolver bound to a single registry
pub struct VersionResolver<R: VersionRegistry> {
    registry: R,
}

impl<R: VersionRegistry> VersionResolver<R> {
    pub fn new(registry: R) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &R {
        &self.registry
    }

    pub fn resolve(&self, mode: ResolutionMode) -> ResolvedVersion {
        resolve(
            mode,
            || self.registry.active_version(),
            || self.registry.all_versions(),
            || self.registry.default_version(),
        )
    }

    pub fn resolve_named(&self, mode: &str) -> Result<ResolvedVersion, InvalidModeError> {
        let mode = mode.parse::<ResolutionMode>()?;
        Ok(self.resolve(mode))
    }
}
