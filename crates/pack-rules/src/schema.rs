//! Rule document schema

use indexmap::IndexMap;
use pack_fs::{PrefixMatcher, PruneFilter};
use serde::{Deserialize, Deserializer, Serialize};

/// One prune rule.
///
/// `include` protects matching files; `execute` restricts deletion to
/// matching files. A rule with neither deletes every file under its scan
/// root. Patterns are literal prefixes of paths relative to that root.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Rule {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub include: Option<Vec<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub execute: Option<Vec<String>>,
}

impl Rule {
    pub fn include<I, S>(mut self, patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.include = Some(patterns.into_iter().map(Into::into).collect());
        self
    }

    pub fn execute<I, S>(mut self, patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.execute = Some(patterns.into_iter().map(Into::into).collect());
        self
    }

    /// Compile the rule into a prune filter.
    ///
    /// An empty pattern list matches every path: an empty `include` keeps
    /// every file and an empty `execute` narrows nothing.
    pub fn filter(&self) -> PruneFilter {
        PruneFilter {
            include: compile(self.include.as_deref()),
            execute: compile(self.execute.as_deref()),
        }
    }
}

fn compile(patterns: Option<&[String]>) -> Option<PrefixMatcher> {
    patterns.map(|p| {
        if p.is_empty() {
            PrefixMatcher::new([""])
        } else {
            PrefixMatcher::new(p)
        }
    })
}

/// A parsed rule document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleSet {
    /// Rules applied in order to the project root.
    #[serde(default, deserialize_with = "one_or_many")]
    pub project: Vec<Rule>,

    /// Per-package rules, keyed by `vendor-org/package-name`, in document order.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub vendor: IndexMap<String, Rule>,
}

impl RuleSet {
    /// Parse a JSON rule document.
    pub fn from_json_str(content: &str) -> serde_json::Result<Self> {
        serde_json::from_str(content)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum OneOrMany {
    Many(Vec<Rule>),
    One(Rule),
}

/// `project` may be a list of rules, a single rule, or null.
fn one_or_many<'de, D>(deserializer: D) -> Result<Vec<Rule>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<OneOrMany>::deserialize(deserializer)? {
        Some(OneOrMany::Many(rules)) => rules,
        Some(OneOrMany::One(rule)) => vec![rule],
        None => Vec::new(),
    })
}

/// `vendor` may be null.
fn null_as_empty<'de, D>(deserializer: D) -> Result<IndexMap<String, Rule>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<IndexMap<String, Rule>>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pack_fs::NormalizedPath;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_full_document() {
        let rules = RuleSet::from_json_str(
            r#"{
                "project": [
                    { "include": ["src", "index.php"] },
                    { "execute": ["docs"] }
                ],
                "vendor": {
                    "zz/last": { "include": ["src"] },
                    "aa/first": { "execute": ["tests"], "include": ["tests/fixtures"] }
                }
            }"#,
        )
        .unwrap();

        assert_eq!(
            rules.project,
            vec![
                Rule::default().include(["src", "index.php"]),
                Rule::default().execute(["docs"]),
            ]
        );
        let packages: Vec<&str> = rules.vendor.keys().map(String::as_str).collect();
        assert_eq!(packages, vec!["zz/last", "aa/first"]);
        assert_eq!(
            rules.vendor["aa/first"],
            Rule::default().include(["tests/fixtures"]).execute(["tests"])
        );
    }

    #[test]
    fn test_project_may_be_single_rule() {
        let rules = RuleSet::from_json_str(r#"{ "project": { "include": ["src"] } }"#).unwrap();
        assert_eq!(rules.project, vec![Rule::default().include(["src"])]);
        assert!(rules.vendor.is_empty());
    }

    #[test]
    fn test_missing_sections_default_to_empty() {
        let rules = RuleSet::from_json_str("{}").unwrap();
        assert!(rules.project.is_empty());
        assert!(rules.vendor.is_empty());

        let rules = RuleSet::from_json_str(r#"{ "project": null }"#).unwrap();
        assert!(rules.project.is_empty());
    }

    #[test]
    fn test_null_vendor_is_empty() {
        let rules = RuleSet::from_json_str(r#"{ "project": [], "vendor": null }"#).unwrap();
        assert!(rules.project.is_empty());
        assert!(rules.vendor.is_empty());
    }

    #[test]
    fn test_unknown_rule_key_is_rejected() {
        let result = RuleSet::from_json_str(r#"{ "vendor": { "a/b": { "includes": ["src"] } } }"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_empty_rule_deletes_everything() {
        let filter = Rule::default().filter();
        assert!(filter.include.is_none());
        assert!(filter.execute.is_none());
        assert!(filter.selects(&NormalizedPath::new("any/thing")));
    }

    #[test]
    fn test_empty_include_keeps_everything() {
        let filter = Rule::default().include(Vec::<String>::new()).filter();
        assert!(!filter.selects(&NormalizedPath::new("a.txt")));
        assert!(!filter.selects(&NormalizedPath::new("src/App.php")));
    }

    #[test]
    fn test_empty_execute_narrows_nothing() {
        let filter = Rule::default().execute(Vec::<String>::new()).filter();
        assert!(filter.selects(&NormalizedPath::new("a.txt")));
        assert!(filter.selects(&NormalizedPath::new("src/App.php")));
    }

    #[test]
    fn test_filter_compiles_both_lists() {
        let filter = Rule::default().include(["src"]).execute(["src", "tests"]).filter();
        assert!(!filter.selects(&NormalizedPath::new("src/A.php")));
        assert!(filter.selects(&NormalizedPath::new("tests/ATest.php")));
        assert!(!filter.selects(&NormalizedPath::new("README.md")));
    }
}
