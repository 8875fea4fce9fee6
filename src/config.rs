use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

// =============================================================================
// Defaults
// =============================================================================

/// Config file looked up in the working directory when none is given
pub const DEFAULT_CONFIG_FILE: &str = "doc-version.json";

/// Prefix of the release asset URLs embedded in the install command
pub const DEFAULT_RELEASE_ASSET_URL: &str =
    "https://github.com/cloudnative-pg/plugin-barman-cloud/releases/download";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Cannot read config file {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config file {path:?}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Top-level configuration
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct Config {
    /// Directory holding the documentation site
    pub site_dir: PathBuf,
    pub docs: DocsConfig,
    pub install: InstallConfig,
    pub release: ReleaseConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            site_dir: PathBuf::from("web"),
            docs: DocsConfig::default(),
            install: InstallConfig::default(),
            release: ReleaseConfig::default(),
        }
    }
}

/// Versioned docs configuration
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct DocsConfig {
    /// Versions file, relative to the site directory
    pub versions_file: PathBuf,
    /// Expose the unreleased docs as the `current` version
    pub include_current_version: bool,
    /// Version used when the viewer's version is unknown
    pub last_version: Option<String>,
}

impl Default for DocsConfig {
    fn default() -> Self {
        Self {
            versions_file: PathBuf::from("versions.json"),
            include_current_version: true,
            last_version: None,
        }
    }
}

/// Installation snippet configuration
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct InstallConfig {
    pub release_asset_url: String,
}

impl Default for InstallConfig {
    fn default() -> Self {
        Self {
            release_asset_url: DEFAULT_RELEASE_ASSET_URL.to_string(),
        }
    }
}

/// Release manifest configuration
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct ReleaseConfig {
    /// release-please manifest path
    pub manifest: PathBuf,
    /// Manifest key holding the proposed version
    pub component: String,
}

impl Default for ReleaseConfig {
    fn default() -> Self {
        Self {
            manifest: PathBuf::from(".release-please-manifest.json"),
            component: ".".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from `path`, or from [`DEFAULT_CONFIG_FILE`] if it
    /// exists. An explicitly given file must exist.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let path = match path {
            Some(path) => path.to_path_buf(),
            None => {
                let default_path = PathBuf::from(DEFAULT_CONFIG_FILE);
                if !default_path.exists() {
                    debug!("No config file, using defaults");
                    return Ok(Self::default());
                }
                default_path
            }
        };

        let content = fs::read_to_string(&path).map_err(|source| ConfigError::Io {
            path: path.clone(),
            source,
        })?;

        debug!("Loaded config from {:?}", path);
        Self::from_json(&content).map_err(|source| ConfigError::Parse { path, source })
    }

    pub fn from_json(content: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(content)
    }

    /// Path of the Docusaurus `versions.json`
    pub fn versions_path(&self) -> PathBuf {
        self.site_dir.join(&self.docs.versions_file)
    }
}

/// Directory where `--log-file` output is kept
///
/// `$XDG_DATA_HOME/doc-version`, `~/.local/share/doc-version` without it, or
/// `./doc-version` when no home directory is known either.
pub fn data_dir() -> PathBuf {
    data_dir_with_env(std::env::var("XDG_DATA_HOME").ok(), dirs::home_dir())
}

/// Log file written by `doc-version --log-file`
pub fn log_path() -> PathBuf {
    data_dir().join("doc-version.log")
}

fn data_dir_with_env(xdg_data_home: Option<String>, home_dir: Option<PathBuf>) -> PathBuf {
    xdg_data_home
        .map(PathBuf::from)
        .or_else(|| home_dir.map(|home| home.join(".local/share")))
        .unwrap_or_else(|| PathBuf::from("."))
        .join("doc-version")
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;
    use tempfile::TempDir;

    #[test]
    fn config_from_partial_object_uses_defaults_for_missing_fields() {
        let result = serde_json::from_value::<Config>(json!({
            "docs": {
                "lastVersion": "0.5.0"
            }
        }))
        .unwrap();

        assert_eq!(result.docs.last_version, Some("0.5.0".to_string()));
        assert!(result.docs.include_current_version);
        assert_eq!(result.site_dir, PathBuf::from("web"));
        assert_eq!(result.install, InstallConfig::default());
        assert_eq!(result.release, ReleaseConfig::default());
    }

    #[test]
    fn config_from_full_object_parses_all_fields() {
        let result = serde_json::from_value::<Config>(json!({
            "siteDir": "site",
            "docs": {
                "versionsFile": "docs-versions.json",
                "includeCurrentVersion": false,
                "lastVersion": "1.0"
            },
            "install": {
                "releaseAssetUrl": "https://example.com/releases"
            },
            "release": {
                "manifest": "release.json",
                "component": "plugin"
            }
        }))
        .unwrap();

        assert_eq!(
            result,
            Config {
                site_dir: PathBuf::from("site"),
                docs: DocsConfig {
                    versions_file: PathBuf::from("docs-versions.json"),
                    include_current_version: false,
                    last_version: Some("1.0".to_string()),
                },
                install: InstallConfig {
                    release_asset_url: "https://example.com/releases".to_string(),
                },
                release: ReleaseConfig {
                    manifest: PathBuf::from("release.json"),
                    component: "plugin".to_string(),
                },
            }
        );
        assert_eq!(
            result.versions_path(),
            PathBuf::from("site/docs-versions.json")
        );
    }

    #[test]
    fn load_reads_explicit_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("doc-version.json");
        fs::write(&path, r#"{"siteDir": "docs-site"}"#).unwrap();

        let config = Config::load(Some(&path)).unwrap();

        assert_eq!(config.site_dir, PathBuf::from("docs-site"));
    }

    #[test]
    fn load_fails_for_missing_explicit_file() {
        let dir = TempDir::new().unwrap();
        let result = Config::load(Some(&dir.path().join("missing.json")));
        assert!(matches!(result, Err(ConfigError::Io { .. })));
    }

    #[test]
    fn load_fails_for_invalid_json() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("doc-version.json");
        fs::write(&path, "{ not json").unwrap();

        assert!(matches!(
            Config::load(Some(&path)),
            Err(ConfigError::Parse { .. })
        ));
    }

    #[rstest]
    #[case(Some("/tmp/test-data"), Some("/home/user"), "/tmp/test-data/doc-version")]
    #[case(None, Some("/home/user"), "/home/user/.local/share/doc-version")]
    #[case(None, None, "./doc-version")]
    fn data_dir_with_env_picks_first_available_base(
        #[case] xdg_data_home: Option<&str>,
        #[case] home_dir: Option<&str>,
        #[case] expected: &str,
    ) {
        let path = data_dir_with_env(
            xdg_data_home.map(String::from),
            home_dir.map(PathBuf::from),
        );
        assert_eq!(path, PathBuf::from(expected));
    }
}
