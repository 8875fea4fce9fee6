//! Registry trait supplying documentation versions

#[cfg(test)]
use mockall::automock;

use crate::version::error::RegistryError;
use crate::version::types::VersionDescriptor;

/// Trait for the collaborator that knows which documentation versions exist
#[cfg_attr(test, automock)]
pub trait VersionRegistry {
    /// Returns the version the viewer is currently browsing, if known
    fn active_version(&self) -> Option<VersionDescriptor>;

    /// Returns every known version, in no particular order
    ///
    /// # Returns
    /// * `Ok(Vec<VersionDescriptor>)` - All versions, possibly including `current`
    /// * `Err(RegistryError)` - If the registry is unavailable
    fn all_versions(&self) -> Result<Vec<VersionDescriptor>, RegistryError>;

    /// Returns the site-wide fallback version identifier
    fn default_version(&self) -> String;
}
