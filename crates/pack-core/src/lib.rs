//! Release packaging pipeline
//!
//! This crate sequences one packaging run:
//!
//! ```text
//! load rules -> create working tree -> composer create-project
//!   -> composer dump-autoload -> prune vendor packages -> prune project
//!   -> zip -> remove working tree
//! ```
//!
//! ```text
//!                 pack-cli
//!                    |
//!                pack-core
//!                    |
//!     +--------------+--------------+
//!     |              |              |
//!  pack-fs      pack-rules     pack-process
//! ```
//!
//! External tools sit behind the [`DependencyManager`] and [`Archiver`]
//! traits, so the pipeline can be driven against fakes.

pub mod archive;
pub mod config;
pub mod error;
pub mod pipeline;

pub use archive::{Archiver, ZipArchiver};
pub use config::BuildConfig;
pub use error::{Error, Result, Stage, StageError};
pub use pack_process::DependencyManager;
pub use pipeline::{BuildReport, ReleaseBuilder, VendorReport, prune_project, prune_vendor};
