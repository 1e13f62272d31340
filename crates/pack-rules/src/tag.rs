//! Release identifiers

use chrono::NaiveDateTime;

use crate::{Error, Result};

/// The rolling identifier used when no tag is given.
pub const ROLLING_TAG: &str = "master";

/// A validated release identifier (`master`, `v2.4.0`, `1.0-rc1`).
///
/// The tag names the working directory, the archive and the rule variant,
/// so it must be a single safe path component.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ReleaseTag(String);

impl ReleaseTag {
    /// Validate a tag.
    pub fn parse(tag: &str) -> Result<Self> {
        let invalid = |reason: &str| Error::InvalidTag {
            tag: tag.to_string(),
            reason: reason.to_string(),
        };

        if tag.is_empty() {
            return Err(invalid("tag cannot be empty"));
        }
        if tag == "." || tag == ".." {
            return Err(invalid("tag cannot be a relative path component"));
        }
        if tag.starts_with('-') {
            return Err(invalid("tag cannot start with '-'"));
        }
        let forbidden = |c: char| {
            matches!(c, '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|')
                || c.is_control()
                || c.is_whitespace()
        };
        if let Some(c) = tag.chars().find(|&c| forbidden(c)) {
            return Err(invalid(&format!("tag cannot contain {c:?}")));
        }

        Ok(Self(tag.to_string()))
    }

    /// The rolling `master` tag.
    pub fn rolling() -> Self {
        Self(ROLLING_TAG.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_rolling(&self) -> bool {
        self.0 == ROLLING_TAG
    }

    /// Version constraint passed to `composer create-project`.
    pub fn composer_version(&self) -> String {
        if self.is_rolling() {
            format!("dev-{ROLLING_TAG}")
        } else {
            self.0.clone()
        }
    }

    /// Name of the working directory under the build directory.
    ///
    /// The rolling tag is timestamped so repeated builds never collide.
    pub fn working_dir_name(&self, now: NaiveDateTime) -> String {
        if self.is_rolling() {
            format!("{}-{}", self.0, now.format("%Y%m%d-%H%M%S"))
        } else {
            self.0.clone()
        }
    }

    /// File name of the produced archive.
    pub fn archive_name(&self) -> String {
        format!("build-{}.zip", self.0)
    }

    /// File name of the tag-specific rule document.
    pub fn rule_file_name(&self) -> String {
        format!("rule.{}.json", self.0)
    }
}

impl Default for ReleaseTag {
    fn default() -> Self {
        Self::rolling()
    }
}

impl std::fmt::Display for ReleaseTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for ReleaseTag {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}
