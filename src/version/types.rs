//! Common types for version resolution

use std::fmt;

/// Name reserved for the unreleased, in-progress documentation version.
pub const CURRENT_VERSION: &str = "current";

/// A named snapshot of documentation content
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct VersionDescriptor {
    pub name: String,
}

impl VersionDescriptor {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// Returns true for the reserved `current` version
    pub fn is_current(&self) -> bool {
        self.name == CURRENT_VERSION
    }
}

impl From<&str> for VersionDescriptor {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for VersionDescriptor {
    fn from(name: String) -> Self {
        Self { name }
    }
}

/// Outcome of a version resolution
///
/// `Unknown` is the sentinel for "no eligible version". It renders as an
/// empty string so callers can interpolate it without special-casing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolvedVersion {
    Known(String),
    Unknown,
}

impl ResolvedVersion {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            ResolvedVersion::Known(name) => Some(name.as_str()),
            ResolvedVersion::Unknown => None,
        }
    }

    pub fn is_unknown(&self) -> bool {
        matches!(self, ResolvedVersion::Unknown)
    }
}

impl fmt::Display for ResolvedVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResolvedVersion::Known(name) => f.write_str(name),
            ResolvedVersion::Unknown => Ok(()),
        }
    }
}
