use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("Version registry is unavailable")]
    Unavailable,

    #[error("Failed to read {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid versions file {path:?}: {source}")]
    InvalidFormat {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Raised when a mode literal does not name a known resolution mode.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid resolution mode: {mode:?} (expected \"latest\" or \"latestReleased\")")]
pub struct InvalidModeError {
    pub mode: String,
}

#[derive(Debug, Error)]
pub enum CheckError {
    #[error("Cannot read release manifest {path:?}: {source}")]
    ManifestIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid release manifest {path:?}: {source}")]
    ManifestFormat {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Cannot find proposed version for {component:?} in {path:?}")]
    MissingComponent { path: PathBuf, component: String },

    #[error("Error querying documented versions: {0}")]
    Versions(#[from] RegistryError),
}
