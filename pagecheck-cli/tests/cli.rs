use std::path::PathBuf;

use clap::Parser;
use pagecheck_cli::{CliArgs, Summary, run};

fn fixture(name: &str) -> String {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name)
        .display()
        .to_string()
}

fn check(args: &[&str]) -> (Summary, String) {
    let args = CliArgs::try_parse_from(std::iter::once("pagecheck").chain(args.iter().copied())).unwrap();
    let mut out = Vec::new();
    let summary = run(&args, &mut out).unwrap();
    (summary, String::from_utf8(out).unwrap())
}

#[test]
fn valid_page_passes() {
    let (summary, out) = check(&[&fixture("valid_page.json")]);
    assert_eq!(summary.exit_code(), 0);
    assert_eq!(summary.passed, 1);
    assert!(out.contains("has items array ... ok"));
    assert!(!out.contains("FAILED"));
}

#[test]
fn invalid_page_reports_each_failing_example() {
    let (summary, out) = check(&[&fixture("invalid_page.json")]);
    assert_eq!(summary.exit_code(), 1);
    assert_eq!(summary.failed, 1);
    assert!(out.contains("has pagination metadata ... ok"));
    assert!(out.contains("has valid pagination values ... FAILED"));
    assert!(out.contains("current_page: expected 0 to be >= 1"));
    assert!(out.contains("has items array ... FAILED"));
    assert!(out.contains("to be an Array"));
}

#[test]
fn pointer_selects_enveloped_page() {
    let (summary, _) = check(&["--pointer", "/data", &fixture("enveloped_page.json")]);
    assert_eq!(summary.exit_code(), 0);

    let (summary, _) = check(&[&fixture("enveloped_page.json")]);
    assert_eq!(summary.exit_code(), 1);
}

#[test]
fn input_errors_do_not_stop_other_inputs() {
    let (summary, out) = check(&[
        &fixture("malformed.json"),
        &fixture("does_not_exist.json"),
        &fixture("valid_page.json"),
    ]);
    assert_eq!(
        summary,
        Summary {
            passed: 1,
            failed: 0,
            errored: 2,
        }
    );
    assert_eq!(summary.exit_code(), 2);
    assert!(out.contains("is not a valid JSON document"));
    assert!(out.contains("unable to read"));
}

#[test]
fn unresolved_pointer_is_an_input_error() {
    let (summary, out) = check(&["--pointer", "/payload", &fixture("enveloped_page.json")]);
    assert_eq!(summary.errored, 1);
    assert!(out.contains("pointer /payload does not resolve to a value"));
}

#[test]
fn json_format_is_machine_readable() {
    let (summary, out) = check(&[
        "--format",
        "json",
        &fixture("valid_page.json"),
        &fixture("invalid_page.json"),
    ]);
    assert_eq!(summary.exit_code(), 1);
    let value: serde_json::Value = serde_json::from_str(&out).unwrap();
    let entries = value.as_array().unwrap();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0]["report"]["success"], true);
    assert_eq!(entries[1]["report"]["success"], false);
    assert_eq!(entries[1]["report"]["examples"][1]["status"], "failed");
    assert_eq!(
        entries[1]["report"]["examples"][1]["message"],
        "current_page: expected 0 to be >= 1"
    );
}
