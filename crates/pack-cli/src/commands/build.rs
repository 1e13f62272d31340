//! The build command

use std::path::Path;

use colored::Colorize;

use pack_core::{BuildConfig, ReleaseBuilder};
use pack_fs::NormalizedPath;
use pack_rules::ReleaseTag;

use crate::error::Result;

/// Command-line values that take precedence over `packager.toml`.
#[derive(Debug, Clone, Default)]
pub struct BuildOverrides {
    pub timeout: Option<u64>,
    pub package: Option<String>,
}

impl BuildOverrides {
    fn apply(&self, config: &mut BuildConfig) {
        if let Some(timeout) = self.timeout {
            config.timeout_secs = timeout;
        }
        if let Some(package) = &self.package {
            config.package = package.clone();
        }
    }
}

/// Run the build command
///
/// Builds `build/build-<tag>.zip` under `root`.
pub fn run_build(root: &Path, tag: &str, overrides: &BuildOverrides) -> Result<()> {
    let tag = ReleaseTag::parse(tag)?;
    let root = dunce::canonicalize(root).map_err(|e| pack_fs::Error::io(root, e))?;
    let root = NormalizedPath::new(root);

    let mut config = BuildConfig::load(&root)?;
    overrides.apply(&mut config);
    tracing::debug!(?config, root = %root, "Resolved build configuration");

    println!(
        "{} Building {} ({})",
        "=>".blue().bold(),
        config.package.cyan(),
        tag.as_str().yellow()
    );

    let report = ReleaseBuilder::from_config(&root, &config).build(&tag)?;

    println!(
        "   {} vendor: {} package(s) cleaned, {} not installed, {} file(s) removed",
        "-".dimmed(),
        report.vendor.pruned.len(),
        report.vendor.skipped.len(),
        report.vendor.removed.files_removed
    );
    println!(
        "   {} project: {} file(s), {} director(ies) removed",
        "-".dimmed(),
        report.project.files_removed,
        report.project.dirs_removed
    );
    println!("{} {}", "Done!".green().bold(), report.archive);

    Ok(())
}
