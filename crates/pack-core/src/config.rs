//! Packager settings
//!
//! Settings come from an optional `packager.toml` at the packager root.
//! Every key has a default, so a missing file is equivalent to:
//!
//! ```toml
//! package = "torrentpier/torrentpier"
//! php = "php"
//! composer = "composer.phar"
//! archiver = "zip"
//! timeout_secs = 600
//! build_dir = "build"
//! resources_dir = "resources"
//! ```
//!
//! Relative paths are resolved against the packager root.

use std::path::PathBuf;
use std::time::Duration;

use pack_fs::{ConfigStore, NormalizedPath, ReleasePath};
use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Settings for one packaging run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BuildConfig {
    /// Composer package to materialize
    pub package: String,
    /// PHP interpreter
    pub php: PathBuf,
    /// Path to `composer.phar`
    pub composer: PathBuf,
    /// Archiver executable
    pub archiver: PathBuf,
    /// Wall-clock limit for each external process
    pub timeout_secs: u64,
    /// Directory receiving working trees and archives
    pub build_dir: PathBuf,
    /// Directory holding `rule.*.json` documents
    pub resources_dir: PathBuf,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            package: "torrentpier/torrentpier".to_string(),
            php: PathBuf::from("php"),
            composer: PathBuf::from(ReleasePath::ComposerPhar.as_str()),
            archiver: PathBuf::from("zip"),
            timeout_secs: pack_process::DEFAULT_TIMEOUT.as_secs(),
            build_dir: PathBuf::from(ReleasePath::BuildDir.as_str()),
            resources_dir: PathBuf::from(ReleasePath::ResourcesDir.as_str()),
        }
    }
}

impl BuildConfig {
    /// Load `packager.toml` from `root`, or defaults when it is absent.
    pub fn load(root: &NormalizedPath) -> Result<Self> {
        let path = root.join(ReleasePath::ConfigFile.as_str());
        if !path.exists() {
            tracing::debug!(path = %path, "No packager config, using defaults");
            return Ok(Self::default());
        }

        let config: Self = ConfigStore::new().load(&path).map_err(Error::Config)?;
        tracing::debug!(path = %path, ?config, "Loaded packager config");
        Ok(config)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn composer_path(&self, root: &NormalizedPath) -> NormalizedPath {
        resolve(root, &self.composer)
    }

    pub fn build_path(&self, root: &NormalizedPath) -> NormalizedPath {
        resolve(root, &self.build_dir)
    }

    pub fn resources_path(&self, root: &NormalizedPath) -> NormalizedPath {
        resolve(root, &self.resources_dir)
    }
}

fn resolve(root: &NormalizedPath, path: &std::path::Path) -> NormalizedPath {
    if path.is_absolute() {
        NormalizedPath::new(path)
    } else {
        root.join(&path.to_string_lossy())
    }
}
