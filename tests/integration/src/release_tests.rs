//! Vertical slice: rule document -> vendor + project pruning -> archive.
//!
//! Uses a rule document shaped like a real release and a tree shaped like a
//! real composer install.

use pack_core::{prune_project, prune_vendor};
use pack_fs::NormalizedPath;
use pack_rules::{ReleaseTag, RuleLoader};
use pack_test_utils::TestTree;
use pretty_assertions::assert_eq;

const RELEASE_RULES: &str = r#"{
    "project": [
        {
            "include": [
                "admin", "library", "styles", "vendor", "internal_data",
                ".htaccess", "index.php", "composer.json", "LICENSE"
            ]
        },
        {
            "include": ["internal_data/cache/.keep"],
            "execute": ["internal_data/cache/", "internal_data/log/"]
        }
    ],
    "vendor": {
        "symfony/polyfill-mbstring": { "include": ["Mbstring.php", "bootstrap.php", "Resources", "LICENSE"] },
        "monolog/monolog": { "include": ["src", "LICENSE"], "execute": ["src/Monolog/Handler/", "tests", "doc", "README"] },
        "not-installed/package": {}
    }
}"#;

fn composer_tree() -> TestTree {
    TestTree::with_entries(&[
        ".git/HEAD",
        ".gitignore",
        ".htaccess",
        "index.php",
        "composer.json",
        "composer.lock",
        "LICENSE",
        "README.md",
        "admin/index.php",
        "library/config.php",
        "library/includes/functions.php",
        "styles/templates/default/index.tpl",
        "tests/bootstrap.php",
        "tests/Unit/ConfigTest.php",
        "internal_data/cache/.keep",
        "internal_data/cache/page_1.html",
        "internal_data/log/php_errors.log",
        "internal_data/triggers/.keep",
        "vendor/autoload.php",
        "vendor/composer/autoload_classmap.php",
        "vendor/symfony/polyfill-mbstring/Mbstring.php",
        "vendor/symfony/polyfill-mbstring/bootstrap.php",
        "vendor/symfony/polyfill-mbstring/bootstrap80.php",
        "vendor/symfony/polyfill-mbstring/Resources/unidata/lowerCase.php",
        "vendor/symfony/polyfill-mbstring/README.md",
        "vendor/symfony/polyfill-mbstring/composer.json",
        "vendor/monolog/monolog/src/Monolog/Logger.php",
        "vendor/monolog/monolog/src/Monolog/Handler/StreamHandler.php",
        "vendor/monolog/monolog/tests/Monolog/LoggerTest.php",
        "vendor/monolog/monolog/doc/01-usage.md",
        "vendor/monolog/monolog/README.md",
        "vendor/monolog/monolog/CHANGELOG.md",
        "vendor/monolog/monolog/LICENSE",
    ])
}

#[test]
fn release_rules_strip_a_composer_install() {
    let resources = TestTree::new();
    resources.file("rule.master.json", RELEASE_RULES);
    let rules = RuleLoader::new(NormalizedPath::new(resources.root()))
        .load(&ReleaseTag::rolling())
        .unwrap();

    let tree = composer_tree();
    let root = NormalizedPath::new(tree.root());

    let vendor = prune_vendor(&root, &rules).unwrap();
    assert_eq!(
        vendor.pruned,
        vec!["symfony/polyfill-mbstring", "monolog/monolog"]
    );
    assert_eq!(vendor.skipped, vec!["not-installed/package"]);

    prune_project(&root, &rules).unwrap();

    assert_eq!(
        tree.entries(),
        vec![
            ".htaccess",
            "LICENSE",
            "admin/",
            "admin/index.php",
            "composer.json",
            "index.php",
            "internal_data/",
            "internal_data/cache/",
            "internal_data/cache/.keep",
            "internal_data/triggers/",
            "internal_data/triggers/.keep",
            "library/",
            "library/config.php",
            "library/includes/",
            "library/includes/functions.php",
            "styles/",
            "styles/templates/",
            "styles/templates/default/",
            "styles/templates/default/index.tpl",
            "vendor/",
            "vendor/autoload.php",
            "vendor/composer/",
            "vendor/composer/autoload_classmap.php",
            "vendor/monolog/",
            "vendor/monolog/monolog/",
            "vendor/monolog/monolog/CHANGELOG.md",
            "vendor/monolog/monolog/LICENSE",
            "vendor/monolog/monolog/src/",
            "vendor/monolog/monolog/src/Monolog/",
            "vendor/monolog/monolog/src/Monolog/Handler/",
            "vendor/monolog/monolog/src/Monolog/Handler/StreamHandler.php",
            "vendor/monolog/monolog/src/Monolog/Logger.php",
            "vendor/symfony/",
            "vendor/symfony/polyfill-mbstring/",
            "vendor/symfony/polyfill-mbstring/Mbstring.php",
            "vendor/symfony/polyfill-mbstring/Resources/",
            "vendor/symfony/polyfill-mbstring/Resources/unidata/",
            "vendor/symfony/polyfill-mbstring/Resources/unidata/lowerCase.php",
            "vendor/symfony/polyfill-mbstring/bootstrap.php",
        ]
    );
}

#[test]
fn release_rules_are_idempotent() {
    let rules = pack_rules::RuleSet::from_json_str(RELEASE_RULES).unwrap();
    let tree = composer_tree();
    let root = NormalizedPath::new(tree.root());

    prune_vendor(&root, &rules).unwrap();
    prune_project(&root, &rules).unwrap();
    let once = tree.entries();

    let vendor = prune_vendor(&root, &rules).unwrap();
    let project = prune_project(&root, &rules).unwrap();

    assert!(vendor.removed.is_noop());
    assert!(project.is_noop());
    assert_eq!(tree.entries(), once);
}

#[cfg(unix)]
#[test]
fn release_builder_runs_against_stand_in_tools() {
    use chrono::NaiveDate;
    use pack_core::{BuildConfig, ReleaseBuilder};
    use pack_test_utils::script;

    let tree = TestTree::new();
    let php = script::install(&tree.path("bin"), "php", script::FAKE_PHP);
    let zip = script::install(&tree.path("bin"), "zip", script::FAKE_ZIP);
    tree.file(
        "resources/rule.master.json",
        r#"{ "project": [ { "include": ["index.php", "vendor"] } ], "vendor": { "acme/lib": { "include": ["src"] } } }"#,
    );

    let config = BuildConfig {
        php,
        archiver: zip,
        timeout_secs: 60,
        ..BuildConfig::default()
    };
    let root = NormalizedPath::new(tree.root());
    let now = NaiveDate::from_ymd_opt(2024, 1, 2)
        .unwrap()
        .and_hms_opt(3, 4, 5)
        .unwrap();

    let report = ReleaseBuilder::from_config(&root, &config)
        .build_at(&ReleaseTag::rolling(), now)
        .unwrap();

    assert_eq!(report.vendor.pruned, vec!["acme/lib"]);
    let archived = std::fs::read_to_string(tree.path("build/build-master.zip")).unwrap();
    assert_eq!(archived.trim(), "master-20240102-030405");
    tree.assert_missing("build/master-20240102-030405");
}
