//! Two-phase, rule-driven pruning of a directory tree.
//!
//! Phase 1 walks every entry under the scan root (dotfiles included) and
//! removes the files the filter selects. Directories are only recorded.
//! Phase 2 visits the recorded directories deepest first and removes each one
//! whose fresh listing is empty, so a chain of directories emptied by phase 1
//! collapses in a single pass.

use std::fs;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::{Error, NormalizedPath, PrefixMatcher, Result};

/// Compiled file filter for one prune pass.
///
/// - `include`: matching files are kept.
/// - `execute`: when set, only matching files may be deleted.
///
/// With neither set, every file is deleted.
#[derive(Debug, Clone, Default)]
pub struct PruneFilter {
    pub include: Option<PrefixMatcher>,
    pub execute: Option<PrefixMatcher>,
}

impl PruneFilter {
    /// A filter that deletes every file.
    pub fn delete_all() -> Self {
        Self::default()
    }

    pub fn with_include(mut self, matcher: PrefixMatcher) -> Self {
        self.include = Some(matcher);
        self
    }

    pub fn with_execute(mut self, matcher: PrefixMatcher) -> Self {
        self.execute = Some(matcher);
        self
    }

    /// Decide whether a file at `relative` (to the scan root) is deleted.
    pub fn selects(&self, relative: &NormalizedPath) -> bool {
        if let Some(include) = &self.include {
            if include.matches_path(relative) {
                return false;
            }
        }
        if let Some(execute) = &self.execute {
            if !execute.matches_path(relative) {
                return false;
            }
        }
        true
    }
}

/// Counts of what a prune pass removed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PruneReport {
    pub files_removed: usize,
    pub dirs_removed: usize,
}

impl PruneReport {
    /// True when the pass removed nothing.
    pub fn is_noop(&self) -> bool {
        self.files_removed == 0 && self.dirs_removed == 0
    }

    /// Accumulate another pass into this report.
    pub fn merge(&mut self, other: PruneReport) {
        self.files_removed += other.files_removed;
        self.dirs_removed += other.dirs_removed;
    }
}

/// A directory recorded during phase 1.
struct DirEntry {
    relative: NormalizedPath,
    native: PathBuf,
}

/// Prune `root` according to `filter`.
///
/// The root itself is never removed. Fails with [`Error::NotADirectory`] when
/// `root` does not exist; callers that tolerate an absent tree check first.
pub fn prune(root: &Path, filter: &PruneFilter) -> Result<PruneReport> {
    if !root.is_dir() {
        return Err(Error::NotADirectory {
            path: root.to_path_buf(),
        });
    }

    let mut report = PruneReport::default();
    let mut dirs = remove_files(root, filter, &mut report)?;
    remove_empty_dirs(&mut dirs, &mut report)?;

    tracing::debug!(
        root = %root.display(),
        files = report.files_removed,
        dirs = report.dirs_removed,
        "Pruned tree"
    );

    Ok(report)
}

/// Phase 1: delete selected files, return every directory seen.
fn remove_files(
    root: &Path,
    filter: &PruneFilter,
    report: &mut PruneReport,
) -> Result<Vec<DirEntry>> {
    let mut dirs = Vec::new();

    for entry in WalkDir::new(root).min_depth(1).follow_links(false) {
        let entry = entry.map_err(|source| Error::Walk {
            root: root.to_path_buf(),
            source,
        })?;

        let Some(relative) = NormalizedPath::relative_to(entry.path(), root) else {
            continue;
        };

        if entry.file_type().is_dir() {
            dirs.push(DirEntry {
                relative,
                native: entry.into_path(),
            });
            continue;
        }

        if filter.selects(&relative) {
            fs::remove_file(entry.path()).map_err(|e| Error::io(entry.path(), e))?;
            tracing::trace!(path = %relative, "Removed file");
            report.files_removed += 1;
        }
    }

    Ok(dirs)
}

/// Phase 2: remove directories left empty, deepest first.
fn remove_empty_dirs(dirs: &mut [DirEntry], report: &mut PruneReport) -> Result<()> {
    // Stable: equal depths keep walk order.
    dirs.sort_by(|a, b| b.relative.depth().cmp(&a.relative.depth()));

    for dir in dirs.iter() {
        if is_empty_dir(&dir.native)? {
            fs::remove_dir(&dir.native).map_err(|e| Error::io(&dir.native, e))?;
            tracing::trace!(path = %dir.relative, "Removed empty directory");
            report.dirs_removed += 1;
        }
    }

    Ok(())
}

fn is_empty_dir(path: &Path) -> Result<bool> {
    let mut entries = fs::read_dir(path).map_err(|e| Error::io(path, e))?;
    Ok(entries.next().is_none())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_without_rules_selects_everything() {
        let filter = PruneFilter::delete_all();
        assert!(filter.selects(&NormalizedPath::new("any/file.txt")));
    }

    #[test]
    fn test_filter_include_protects() {
        let filter = PruneFilter::delete_all().with_include(PrefixMatcher::new(["keep"]));
        assert!(!filter.selects(&NormalizedPath::new("keep/a.txt")));
        assert!(filter.selects(&NormalizedPath::new("drop/a.txt")));
    }

    #[test]
    fn test_filter_execute_narrows() {
        let filter = PruneFilter::delete_all().with_execute(PrefixMatcher::new(["docs"]));
        assert!(filter.selects(&NormalizedPath::new("docs/index.md")));
        assert!(!filter.selects(&NormalizedPath::new("src/lib.php")));
    }

    #[test]
    fn test_filter_include_wins_over_execute() {
        let filter = PruneFilter::delete_all()
            .with_include(PrefixMatcher::new(["docs/keep"]))
            .with_execute(PrefixMatcher::new(["docs"]));
        assert!(!filter.selects(&NormalizedPath::new("docs/keep.md")));
        assert!(filter.selects(&NormalizedPath::new("docs/drop.md")));
        assert!(!filter.selects(&NormalizedPath::new("src/lib.php")));
    }

    #[test]
    fn test_report_merge() {
        let mut total = PruneReport::default();
        assert!(total.is_noop());
        total.merge(PruneReport {
            files_removed: 2,
            dirs_removed: 1,
        });
        total.merge(PruneReport {
            files_removed: 3,
            dirs_removed: 0,
        });
        assert_eq!(total.files_removed, 5);
        assert_eq!(total.dirs_removed, 1);
    }
}
