//! Well-known paths inside the packager root and the working tree.

use std::path::Path;

/// Standard release-packager filesystem locations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReleasePath {
    /// The `vendor` directory holding installed packages
    VendorDir,
    /// The `build` directory receiving working trees and archives
    BuildDir,
    /// The `resources` directory holding rule documents
    ResourcesDir,
    /// The bundled `composer.phar`
    ComposerPhar,
    /// The optional `packager.toml` configuration file
    ConfigFile,
}

impl ReleasePath {
    /// Get the string representation of the path.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::VendorDir => "vendor",
            Self::BuildDir => "build",
            Self::ResourcesDir => "resources",
            Self::ComposerPhar => "composer.phar",
            Self::ConfigFile => "packager.toml",
        }
    }
}

impl AsRef<Path> for ReleasePath {
    fn as_ref(&self) -> &Path {
        Path::new(self.as_str())
    }
}

impl AsRef<str> for ReleasePath {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl std::fmt::Display for ReleasePath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
