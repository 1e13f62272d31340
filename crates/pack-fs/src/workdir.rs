//! The disposable per-run working tree.
//!
//! A `WorkingTree` is created fresh for each packaging run and is never
//! merged into an existing directory. It is not removed on drop: a failed
//! run leaves it on disk for inspection, and only [`WorkingTree::remove`]
//! deletes it.

use std::fs;
use std::io::ErrorKind;

use crate::{Error, NormalizedPath, Result};

/// A freshly created working directory owned by one run.
#[derive(Debug)]
pub struct WorkingTree {
    root: NormalizedPath,
}

impl WorkingTree {
    /// Create the directory at `path`, failing if it already exists.
    ///
    /// Missing parents are created.
    pub fn create(path: NormalizedPath) -> Result<Self> {
        let native = path.to_native();

        if let Some(parent) = native.parent() {
            fs::create_dir_all(parent).map_err(|e| Error::io(parent, e))?;
        }

        match fs::create_dir(&native) {
            Ok(()) => {}
            Err(e) if e.kind() == ErrorKind::AlreadyExists => {
                return Err(Error::WorkdirExists { path: native });
            }
            Err(e) => return Err(Error::io(&native, e)),
        }

        tracing::debug!(path = %path, "Created working directory");
        Ok(Self { root: path })
    }

    /// Root of the working tree.
    pub fn root(&self) -> &NormalizedPath {
        &self.root
    }

    /// Delete the working tree and everything under it.
    pub fn remove(self) -> Result<()> {
        let native = self.root.to_native();
        fs::remove_dir_all(&native).map_err(|e| Error::io(&native, e))?;
        tracing::debug!(path = %self.root, "Removed working directory");
        Ok(())
    }
}
