//! Filesystem layer for Release Packager
//!
//! Provides the prefix matcher and the two-phase pruning engine that strip a
//! freshly materialized project tree, plus the per-run working directory and
//! format-agnostic config loading.

pub mod config;
pub mod constants;
pub mod error;
pub mod matcher;
pub mod path;
pub mod prune;
pub mod workdir;

pub use config::ConfigStore;
pub use constants::ReleasePath;
pub use error::{Error, Result};
pub use matcher::PrefixMatcher;
pub use path::NormalizedPath;
pub use prune::{PruneFilter, PruneReport, prune};
pub use workdir::WorkingTree;
