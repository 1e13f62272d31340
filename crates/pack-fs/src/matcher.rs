//! Literal path-prefix matching for prune rules.
//!
//! Rule patterns are plain strings, never globs or regular expressions. A
//! path matches when it starts with any pattern. There is no boundary check
//! at the end of a pattern, so `tests` matches both `tests/Foo.php` and
//! `testsuite.json`.

use crate::NormalizedPath;

/// A compiled set of literal path prefixes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PrefixMatcher {
    prefixes: Vec<String>,
}

impl PrefixMatcher {
    /// Compile a list of literal prefixes.
    ///
    /// Backslashes are normalized to `/` so patterns written on Windows
    /// match the normalized relative paths produced by the walker.
    pub fn new<I, S>(patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let prefixes = patterns
            .into_iter()
            .map(|p| p.as_ref().replace('\\', "/"))
            .collect();
        Self { prefixes }
    }

    /// True iff `path` starts with one of the compiled prefixes.
    pub fn matches(&self, path: &str) -> bool {
        self.prefixes.iter().any(|prefix| path.starts_with(prefix.as_str()))
    }

    /// Match a path relative to the scan root.
    pub fn matches_path(&self, path: &NormalizedPath) -> bool {
        self.matches(path.as_str())
    }
}
