//! Error types for pack-cli

/// Result type for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

/// Errors that can occur in CLI operations
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Error from the packaging pipeline
    #[error(transparent)]
    Core(#[from] pack_core::Error),

    /// Error from pack-fs
    #[error(transparent)]
    Fs(#[from] pack_fs::Error),

    /// Error from pack-rules
    #[error(transparent)]
    Rules(#[from] pack_rules::Error),
}
