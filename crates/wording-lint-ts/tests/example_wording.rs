//! Integration test: example-wording end-to-end over real Ruby source.
//!
//! Copies `tests/fixtures/finder_spec.rb` into a scratch project and runs
//! the analyzer with the Ruby frontend, both reporting and correcting.

use std::path::{Path, PathBuf};
use wording_lint_core::{Analyzer, Config, LintResult, Severity};
use wording_lint_rules::all_rules;
use wording_lint_ts::RubyParser;

const FIXTURE: &str = include_str!("fixtures/finder_spec.rb");

fn fixture_config() -> Config {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/wording-lint.toml");
    Config::from_file(&path).expect("fixture config should parse")
}

fn scratch_project() -> (tempfile::TempDir, PathBuf) {
    let tmp = tempfile::TempDir::new().expect("tempdir");
    let spec_dir = tmp.path().join("spec");
    std::fs::create_dir_all(&spec_dir).expect("spec dir");
    let file = spec_dir.join("finder_spec.rb");
    std::fs::write(&file, FIXTURE).expect("fixture copy");
    (tmp, file)
}

fn run(root: &Path, config: Config, fix: bool) -> LintResult {
    let rules = all_rules(&config).expect("rules should load");
    Analyzer::builder()
        .root(root)
        .parser(RubyParser::new())
        .rules(rules)
        .config(config)
        .fix(fix)
        .build()
        .expect("analyzer should build")
        .analyze()
        .expect("analysis should succeed")
}

// ── Detection ──

#[test]
fn reports_should_descriptions() {
    let (tmp, file) = scratch_project();
    let result = run(tmp.path(), fixture_config(), false);

    let lines: Vec<String> = result.violations.iter().map(ToString::to_string).collect();
    insta::assert_snapshot!(lines.join("\n"), @r"
    spec/finder_spec.rb:4:7: warning [EW001] Do not use should when describing your tests.
    spec/finder_spec.rb:8:7: warning [EW001] Do not use should when describing your tests.
    spec/finder_spec.rb:12:7: warning [EW001] Do not use should when describing your tests.
    ");

    assert_eq!(result.files_checked, 1);
    assert_eq!(result.files_fixed, 0);
    assert!(result.has_violations_at(Severity::Warning));
    assert!(result.violations.iter().all(|v| !v.fixed));

    // Reporting never touches the file.
    let untouched = std::fs::read_to_string(&file).expect("read back");
    assert_eq!(untouched, FIXTURE);
}

#[test]
fn violation_spans_cover_literal_content() {
    let (tmp, _file) = scratch_project();
    let result = run(tmp.path(), Config::default(), false);

    let texts: Vec<&str> = result
        .violations
        .iter()
        .filter_map(|v| v.location.span(FIXTURE))
        .map(|span| span.text())
        .collect();
    assert_eq!(
        texts,
        vec![
            "should find nothing",
            "shouldn't find nothing",
            "Should have one result"
        ]
    );
}

// ── Autocorrection ──

#[test]
fn corrects_with_configured_tables() {
    let (tmp, file) = scratch_project();
    let result = run(tmp.path(), fixture_config(), true);

    assert_eq!(result.files_fixed, 1);
    assert_eq!(result.fixed_count(), 3);
    assert!(!result.has_violations_at(Severity::Info));

    let expected = FIXTURE
        .replace("'should find nothing'", "'finds nothing'")
        .replace("\"shouldn't find nothing\"", "\"does not find nothing\"")
        .replace("'Should have one result'", "'has one result'");
    let corrected = std::fs::read_to_string(&file).expect("read back");
    assert_eq!(corrected, expected);
}

#[test]
fn corrects_with_default_tables() {
    let (tmp, file) = scratch_project();
    run(tmp.path(), Config::default(), true);

    let corrected = std::fs::read_to_string(&file).expect("read back");
    assert!(corrected.contains("it 'finds nothing' do"));
    assert!(corrected.contains("it \"not finds nothing\" do"));
    assert!(corrected.contains("it 'haves one result' do"));
    assert!(corrected.contains("specify 'should be left alone' do"));
}

#[test]
fn corrected_file_is_clean() {
    let (tmp, _file) = scratch_project();
    run(tmp.path(), fixture_config(), true);

    let second = run(tmp.path(), fixture_config(), false);
    assert!(second.violations.is_empty());
}

// ── Configuration ──

#[test]
fn disabled_rule_reports_nothing() {
    let (tmp, _file) = scratch_project();
    let config = Config::parse("[rules.example-wording]\nenabled = false\n").expect("config");
    let result = run(tmp.path(), config, false);
    assert!(result.violations.is_empty());
    assert_eq!(result.files_checked, 1);
}

#[test]
fn severity_override_and_threshold() {
    let (tmp, _file) = scratch_project();
    let config = Config::parse(
        "fail_on = \"error\"\n[rules.example-wording]\nseverity = \"info\"\n",
    )
    .expect("config");
    let fail_on = config.fail_on();
    let result = run(tmp.path(), config, false);

    assert_eq!(result.violations.len(), 3);
    assert!(result.violations.iter().all(|v| v.severity == Severity::Info));
    assert!(!result.has_violations_at(fail_on));
}
