//! Loader for rule documents from the resources directory
//!
//! ```text
//! resources/
//!   rule.master.json   # default document
//!   rule.v2.4.0.json   # optional per-tag variant
//! ```

use pack_fs::{ConfigStore, NormalizedPath};

use crate::{Error, ReleaseTag, Result, RuleSet};

/// Resolves and parses the rule document for a release tag.
pub struct RuleLoader {
    resources: NormalizedPath,
    store: ConfigStore,
}

impl RuleLoader {
    pub fn new(resources: NormalizedPath) -> Self {
        Self {
            resources,
            store: ConfigStore::new(),
        }
    }

    /// Pick the document for `tag`.
    ///
    /// A non-rolling tag uses `rule.<tag>.json` when present; everything else
    /// falls back to the default `rule.master.json`.
    pub fn resolve(&self, tag: &ReleaseTag) -> NormalizedPath {
        if !tag.is_rolling() {
            let variant = self.resources.join(&tag.rule_file_name());
            if variant.exists() {
                return variant;
            }
            tracing::debug!(tag = %tag, "No tag-specific rule document, using default");
        }
        self.resources.join(&ReleaseTag::rolling().rule_file_name())
    }

    /// Load and parse the document for `tag`.
    pub fn load(&self, tag: &ReleaseTag) -> Result<RuleSet> {
        let path = self.resolve(tag);
        if !path.exists() {
            return Err(Error::NotFound {
                path: path.to_native(),
            });
        }

        let rules: RuleSet = self.store.load(&path).map_err(|e| match e {
            pack_fs::Error::ConfigParse { path, message, .. } => Error::Parse { path, message },
            other => Error::Fs(other),
        })?;

        tracing::info!(
            path = %path,
            project_rules = rules.project.len(),
            vendor_rules = rules.vendor.len(),
            "Loaded rule document"
        );
        Ok(rules)
    }
}
