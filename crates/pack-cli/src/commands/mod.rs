//! Command implementations for pack-cli

pub mod build;

pub use build::{BuildOverrides, run_build};
