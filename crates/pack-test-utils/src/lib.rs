//! Shared test utilities for the release-packager workspace.
//!
//! This crate provides standardised test fixtures to eliminate duplication
//! across crate test suites. It is a dev-dependency only, never published.
//!
//! # Modules
//!
//! - [`tree`]: [`tree::TestTree`] builder for project/vendor trees
//! - [`script`]: stand-in executables for composer, php and zip (unix only)

pub mod script;
pub mod tree;

pub use tree::TestTree;
