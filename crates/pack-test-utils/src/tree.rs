//! [`TestTree`] builder for pruning scenarios.

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use walkdir::WalkDir;

/// A temporary directory tree with helpers for setup and assertion.
///
/// # Example
///
/// ```rust,no_run
/// use pack_test_utils::TestTree;
///
/// let tree = TestTree::new();
/// tree.file("vendor/acme/lib/src/Lib.php", "<?php");
/// tree.file("vendor/acme/lib/tests/LibTest.php", "<?php");
/// tree.assert_file_exists("vendor/acme/lib/src/Lib.php");
/// ```
pub struct TestTree {
    temp_dir: TempDir,
}

impl Default for TestTree {
    fn default() -> Self {
        Self::new()
    }
}

impl TestTree {
    /// Create an empty temporary directory.
    pub fn new() -> Self {
        Self {
            temp_dir: TempDir::new().unwrap(),
        }
    }

    /// Build a tree holding one empty file per entry.
    ///
    /// Entries ending in `/` create a directory instead.
    pub fn with_entries(entries: &[&str]) -> Self {
        let tree = Self::new();
        for entry in entries {
            if let Some(dir) = entry.strip_suffix('/') {
                tree.dir(dir);
            } else {
                tree.file(entry, "");
            }
        }
        tree
    }

    /// Return the root path of the temporary directory.
    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Absolute path of a relative entry.
    pub fn path(&self, relative: &str) -> PathBuf {
        self.root().join(relative)
    }

    /// Write a file, creating parent directories.
    pub fn file(&self, relative: &str, content: &str) -> &Self {
        let path = self.path(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, content).unwrap();
        self
    }

    /// Create a directory and its parents.
    pub fn dir(&self, relative: &str) -> &Self {
        fs::create_dir_all(self.path(relative)).unwrap();
        self
    }

    /// Every entry under the root, sorted, relative, `/`-separated.
    ///
    /// Directories carry a trailing `/`.
    pub fn entries(&self) -> Vec<String> {
        let mut entries: Vec<String> = WalkDir::new(self.root())
            .min_depth(1)
            .into_iter()
            .map(|entry| entry.unwrap())
            .map(|entry| {
                let rel = entry
                    .path()
                    .strip_prefix(self.root())
                    .unwrap()
                    .to_string_lossy()
                    .replace('\\', "/");
                if entry.file_type().is_dir() {
                    format!("{rel}/")
                } else {
                    rel
                }
            })
            .collect();
        entries.sort();
        entries
    }

    /// Assert that a file exists.
    pub fn assert_file_exists(&self, relative: &str) {
        let path = self.path(relative);
        assert!(path.is_file(), "Expected file to exist: {}", path.display());
    }

    /// Assert that a directory exists.
    pub fn assert_dir_exists(&self, relative: &str) {
        let path = self.path(relative);
        assert!(path.is_dir(), "Expected directory to exist: {}", path.display());
    }

    /// Assert that nothing exists at the path.
    pub fn assert_missing(&self, relative: &str) {
        let path = self.path(relative);
        assert!(
            !path.exists() && fs::symlink_metadata(&path).is_err(),
            "Expected path to be gone: {}",
            path.display()
        );
    }
}
