//! Error types for pack-core

use std::fmt;

/// Result type for pack-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// A step of the packaging pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    LoadRules,
    CreateWorkdir,
    CreateProject,
    OptimizeAutoloader,
    PruneVendor,
    PruneProject,
    Archive,
    Cleanup,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::LoadRules => "Loading rules",
            Self::CreateWorkdir => "Creating working directory",
            Self::CreateProject => "Creating project",
            Self::OptimizeAutoloader => "Optimizing autoloader",
            Self::PruneVendor => "Cleaning vendor directory",
            Self::PruneProject => "Cleaning project directory",
            Self::Archive => "Archiving",
            Self::Cleanup => "Removing working directory",
        };
        f.write_str(name)
    }
}

/// The underlying failure of a stage.
#[derive(Debug, thiserror::Error)]
pub enum StageError {
    #[error(transparent)]
    Rules(#[from] pack_rules::Error),

    #[error(transparent)]
    Fs(#[from] pack_fs::Error),

    #[error(transparent)]
    Process(#[from] pack_process::Error),
}

/// Errors that can occur in pack-core operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// `packager.toml` could not be read or parsed
    #[error("Invalid packager configuration: {0}")]
    Config(#[source] pack_fs::Error),

    /// A pipeline stage failed; the run was aborted
    #[error("{stage} failed: {source}")]
    Stage {
        stage: Stage,
        #[source]
        source: StageError,
    },
}

impl Error {
    /// The stage that failed, if any.
    pub fn stage(&self) -> Option<Stage> {
        match self {
            Self::Stage { stage, .. } => Some(*stage),
            Self::Config(_) => None,
        }
    }
}

/// Attach the failing stage to a lower-level result.
pub(crate) trait StageContext<T> {
    fn stage(self, stage: Stage) -> Result<T>;
}

impl<T, E: Into<StageError>> StageContext<T> for std::result::Result<T, E> {
    fn stage(self, stage: Stage) -> Result<T> {
        self.map_err(|e| Error::Stage {
            stage,
            source: e.into(),
        })
    }
}
