//! The packaging pipeline driver
//!
//! One call to [`ReleaseBuilder::build`] performs a complete, single-shot
//! run. Any stage failure aborts the run and leaves the working tree on disk;
//! the tree is only removed after the archive has been written.

use std::fs;

use chrono::{Local, NaiveDateTime};
use pack_fs::{NormalizedPath, PruneReport, ReleasePath, WorkingTree, prune};
use pack_process::{Composer, DependencyManager, ProcessRunner};
use pack_rules::{ReleaseTag, RuleLoader, RuleSet};

use crate::error::StageContext;
use crate::{Archiver, BuildConfig, Result, Stage, ZipArchiver};

/// Outcome of pruning the vendor packages named in a rule set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VendorReport {
    /// Packages that were present and pruned
    pub pruned: Vec<String>,
    /// Packages named by the rules but not installed
    pub skipped: Vec<String>,
    /// Removal totals across all pruned packages
    pub removed: PruneReport,
}

/// Outcome of a successful run.
#[derive(Debug, Clone)]
pub struct BuildReport {
    pub tag: ReleaseTag,
    pub archive: NormalizedPath,
    pub vendor: VendorReport,
    pub project: PruneReport,
}

/// Prune each vendor package under `root/vendor/<package>`.
///
/// A package that is not installed is skipped, not an error.
pub fn prune_vendor(root: &NormalizedPath, rules: &RuleSet) -> pack_fs::Result<VendorReport> {
    let vendor_dir = root.join(ReleasePath::VendorDir.as_str());
    let mut report = VendorReport::default();

    for (package, rule) in &rules.vendor {
        let package_dir = vendor_dir.join(package);
        if !package_dir.is_dir() {
            tracing::debug!(package = %package, "Package not installed, skipping");
            report.skipped.push(package.clone());
            continue;
        }

        let removed = prune(&package_dir.to_native(), &rule.filter())?;
        tracing::debug!(
            package = %package,
            files = removed.files_removed,
            dirs = removed.dirs_removed,
            "Cleaned vendor package"
        );
        report.removed.merge(removed);
        report.pruned.push(package.clone());
    }

    Ok(report)
}

/// Apply every project rule, in order, to `root`.
///
/// Each rule re-walks the tree left by the previous one.
pub fn prune_project(root: &NormalizedPath, rules: &RuleSet) -> pack_fs::Result<PruneReport> {
    let native = root.to_native();
    let mut total = PruneReport::default();

    for (index, rule) in rules.project.iter().enumerate() {
        let removed = prune(&native, &rule.filter())?;
        tracing::debug!(
            rule = index,
            files = removed.files_removed,
            dirs = removed.dirs_removed,
            "Applied project rule"
        );
        total.merge(removed);
    }

    Ok(total)
}

/// Drives one packaging run.
pub struct ReleaseBuilder {
    build_dir: NormalizedPath,
    resources_dir: NormalizedPath,
    dependencies: Box<dyn DependencyManager>,
    archiver: Box<dyn Archiver>,
}

impl ReleaseBuilder {
    pub fn new(
        build_dir: NormalizedPath,
        resources_dir: NormalizedPath,
        dependencies: Box<dyn DependencyManager>,
        archiver: Box<dyn Archiver>,
    ) -> Self {
        Self {
            build_dir,
            resources_dir,
            dependencies,
            archiver,
        }
    }

    /// Wire composer and zip from the packager settings.
    ///
    /// `root` should be absolute: external tools run in other directories.
    pub fn from_config(root: &NormalizedPath, config: &BuildConfig) -> Self {
        let runner = ProcessRunner::new(config.timeout());
        let composer = Composer::new(
            &config.php,
            config.composer_path(root).to_native(),
            config.package.clone(),
            runner,
        );
        let zip = ZipArchiver::new(&config.archiver, runner);

        Self::new(
            config.build_path(root),
            config.resources_path(root),
            Box::new(composer),
            Box::new(zip),
        )
    }

    /// Run the whole pipeline for `tag`.
    pub fn build(&self, tag: &ReleaseTag) -> Result<BuildReport> {
        self.build_at(tag, Local::now().naive_local())
    }

    /// Run the whole pipeline, naming a rolling working tree after `now`.
    pub fn build_at(&self, tag: &ReleaseTag, now: NaiveDateTime) -> Result<BuildReport> {
        let rules = RuleLoader::new(self.resources_dir.clone())
            .load(tag)
            .stage(Stage::LoadRules)?;

        let tree = WorkingTree::create(self.build_dir.join(&tag.working_dir_name(now)))
            .stage(Stage::CreateWorkdir)?;
        let root = tree.root().clone();
        let native = root.to_native();
        tracing::info!(tag = %tag, workdir = %root, "Building release");

        self.dependencies
            .create_project(&native, &tag.composer_version())
            .stage(Stage::CreateProject)?;
        self.dependencies
            .optimize_autoloader(&native)
            .stage(Stage::OptimizeAutoloader)?;

        tracing::info!("Cleaning vendor directory");
        let vendor = prune_vendor(&root, &rules).stage(Stage::PruneVendor)?;
        tracing::info!(
            packages = vendor.pruned.len(),
            skipped = vendor.skipped.len(),
            files = vendor.removed.files_removed,
            dirs = vendor.removed.dirs_removed,
            "Vendor directory cleaned"
        );

        tracing::info!("Cleaning project directory");
        let project = prune_project(&root, &rules).stage(Stage::PruneProject)?;
        tracing::info!(
            files = project.files_removed,
            dirs = project.dirs_removed,
            "Project directory cleaned"
        );

        let archive = self.build_dir.join(&tag.archive_name());
        if archive.exists() {
            let path = archive.to_native();
            fs::remove_file(&path)
                .map_err(|e| pack_fs::Error::io(&path, e))
                .stage(Stage::Archive)?;
        }
        self.archiver.archive(&root, &archive).stage(Stage::Archive)?;
        tracing::info!(archive = %archive, "Archive written");

        tree.remove().stage(Stage::Cleanup)?;

        Ok(BuildReport {
            tag: tag.clone(),
            archive,
            vendor,
            project,
        })
    }
}
