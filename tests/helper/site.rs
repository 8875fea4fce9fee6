//! On-disk documentation site fixtures

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// Temporary site directory with a `versions.json` and release manifest
pub struct TestSite {
    dir: TempDir,
}

impl TestSite {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().unwrap(),
        }
    }

    pub fn with_versions(self, versions: &[&str]) -> Self {
        let content = serde_json::to_string(versions).unwrap();
        fs::write(self.versions_path(), content).unwrap();
        self
    }

    pub fn with_raw_versions(self, content: &str) -> Self {
        fs::write(self.versions_path(), content).unwrap();
        self
    }

    pub fn with_manifest(self, content: &str) -> Self {
        fs::write(self.manifest_path(), content).unwrap();
        self
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn versions_path(&self) -> PathBuf {
        self.dir.path().join("versions.json")
    }

    pub fn manifest_path(&self) -> PathBuf {
        self.dir.path().join(".release-please-manifest.json")
    }
}
