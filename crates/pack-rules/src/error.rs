//! Error types for pack-rules

use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Filesystem error: {0}")]
    Fs(#[from] pack_fs::Error),

    #[error("Rule document not found at {path}")]
    NotFound { path: PathBuf },

    #[error("Invalid rule document at {path}: {message}")]
    Parse { path: PathBuf, message: String },

    #[error("Invalid release tag '{tag}': {reason}")]
    InvalidTag { tag: String, reason: String },
}
