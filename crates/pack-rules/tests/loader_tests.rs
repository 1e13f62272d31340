use pack_fs::NormalizedPath;
use pack_rules::{Error, ReleaseTag, Rule, RuleLoader};
use pack_test_utils::TestTree;
use pretty_assertions::assert_eq;

const DEFAULT_DOC: &str = r#"{ "project": [ { "include": ["src"] } ], "vendor": {} }"#;
const VARIANT_DOC: &str = r#"{ "project": [ { "execute": ["docs"] } ] }"#;

fn loader(tree: &TestTree) -> RuleLoader {
    RuleLoader::new(NormalizedPath::new(tree.path("resources")))
}

#[test]
fn rolling_tag_uses_default_document() {
    let tree = TestTree::new();
    tree.file("resources/rule.master.json", DEFAULT_DOC);

    let rules = loader(&tree).load(&ReleaseTag::rolling()).unwrap();

    assert_eq!(rules.project, vec![Rule::default().include(["src"])]);
}

#[test]
fn tag_variant_takes_precedence() {
    let tree = TestTree::new();
    tree.file("resources/rule.master.json", DEFAULT_DOC);
    tree.file("resources/rule.v2.json", VARIANT_DOC);

    let tag = ReleaseTag::parse("v2").unwrap();
    let loader = loader(&tree);

    assert!(loader.resolve(&tag).as_str().ends_with("rule.v2.json"));
    let rules = loader.load(&tag).unwrap();
    assert_eq!(rules.project, vec![Rule::default().execute(["docs"])]);
}

#[test]
fn missing_variant_falls_back_to_default() {
    let tree = TestTree::new();
    tree.file("resources/rule.master.json", DEFAULT_DOC);

    let tag = ReleaseTag::parse("v3").unwrap();
    let rules = loader(&tree).load(&tag).unwrap();

    assert_eq!(rules.project, vec![Rule::default().include(["src"])]);
}

#[test]
fn missing_default_document_is_not_found() {
    let tree = TestTree::new();
    tree.dir("resources");

    let err = loader(&tree).load(&ReleaseTag::rolling()).unwrap_err();

    assert!(matches!(err, Error::NotFound { .. }));
    assert!(err.to_string().contains("rule.master.json"));
}

#[test]
fn malformed_document_reports_path() {
    let tree = TestTree::new();
    tree.file("resources/rule.master.json", "{ \"project\": [ ");

    let err = loader(&tree).load(&ReleaseTag::rolling()).unwrap_err();

    match err {
        Error::Parse { path, .. } => assert!(path.ends_with("rule.master.json")),
        other => panic!("expected parse error, got {other:?}"),
    }
}
