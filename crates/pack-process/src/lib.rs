//! External process execution for Release Packager
//!
//! The packager delegates two jobs to external tools: materializing the
//! project with composer, and compressing the result. This crate runs those
//! tools synchronously with a hard wall-clock timeout.
//!
//! - [`ProcessRunner`] spawns a [`CommandSpec`] and blocks until it exits or
//!   the timeout elapses, in which case the child is killed.
//! - [`Composer`] builds the `create-project` and `dump-autoload`
//!   invocations and implements [`DependencyManager`].

pub mod composer;
pub mod error;
pub mod runner;

pub use composer::{Composer, DependencyManager};
pub use error::{Error, Result};
pub use runner::{CommandSpec, DEFAULT_TIMEOUT, ProcessOutput, ProcessRunner};
