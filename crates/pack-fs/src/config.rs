//! Format-agnostic configuration loading

use std::fs;

use serde::de::DeserializeOwned;

use crate::{Error, NormalizedPath, Result};

/// Format-agnostic configuration store.
///
/// Detects the format from the file extension so rule documents (JSON) and
/// packager settings (TOML) go through the same loader.
#[derive(Debug, Default)]
pub struct ConfigStore;

impl ConfigStore {
    pub fn new() -> Self {
        Self
    }

    /// Load configuration from a file.
    ///
    /// Format is detected from file extension:
    /// - `.toml` -> TOML
    /// - `.json` -> JSON
    pub fn load<T: DeserializeOwned>(&self, path: &NormalizedPath) -> Result<T> {
        let native = path.to_native();
        let content = fs::read_to_string(&native).map_err(|e| Error::io(&native, e))?;
        let extension = native
            .extension()
            .and_then(|ext| ext.to_str())
            .unwrap_or("");

        match extension.to_lowercase().as_str() {
            "toml" => toml::from_str(&content).map_err(|e| Error::ConfigParse {
                path: native.clone(),
                format: "TOML".into(),
                message: e.to_string(),
            }),
            "json" => serde_json::from_str(&content).map_err(|e| Error::ConfigParse {
                path: native.clone(),
                format: "JSON".into(),
                message: e.to_string(),
            }),
            _ => Err(Error::UnsupportedFormat {
                extension: extension.to_string(),
            }),
        }
    }
}
