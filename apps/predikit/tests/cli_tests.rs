//! Integration tests for Predikit CLI commands.
//!
//! Uses tempfile for testing batch files.

// Allow unwrap and panic in tests - these are standard for test code
#![allow(clippy::unwrap_used, clippy::panic)]

use predikit::cli::{
    BatchSummary, CliError, Options, cmd_batch, cmd_check, cmd_list, load_batch, render_list,
    render_verdict, resolve_batch,
};
use predikit_core::{PredicateError, PredicateKind, Value};
use std::path::PathBuf;
use tempfile::TempDir;

// =============================================================================
// HELPER FUNCTIONS
// =============================================================================

/// Create a temporary directory for tests.
fn create_temp_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temp dir")
}

/// Write a batch file with the given JSON content.
fn create_batch_file(dir: &TempDir, content: &str) -> PathBuf {
    let path = dir.path().join("cases.json");
    std::fs::write(&path, content).unwrap();
    path
}

fn args(raw: &[&str]) -> Vec<String> {
    raw.iter().map(|s| (*s).to_owned()).collect()
}

// =============================================================================
// CHECK COMMAND TESTS
// =============================================================================

#[test]
fn test_check_major_number() {
    let verdict = cmd_check("isMajorNumber", &args(&["5", "3"]), Options::default()).unwrap();
    assert_eq!(verdict.predicate, PredicateKind::IsMajorNumber);
    assert!(verdict.result);

    let verdict = cmd_check("isMajorNumber", &args(&["3", "5"]), Options::default()).unwrap();
    assert!(!verdict.result);
}

#[test]
fn test_check_accepts_snake_case_names() {
    let verdict =
        cmd_check("is_major_same_number", &args(&["5", "5"]), Options::default()).unwrap();
    assert!(verdict.result);
}

#[test]
fn test_check_negative_numbers() {
    let verdict = cmd_check("isMinorNumber", &args(&["-10", "-2"]), Options::default()).unwrap();
    assert!(verdict.result);
}

#[test]
fn test_check_undefined_token() {
    let verdict = cmd_check("isUndefined", &args(&["undefined"]), Options::default()).unwrap();
    assert!(verdict.result);
    assert_eq!(verdict.args, vec![Value::Undefined]);

    let verdict = cmd_check("isNull", &args(&["undefined"]), Options::default()).unwrap();
    assert!(!verdict.result);
}

#[test]
fn test_check_missing_argument_is_undefined() {
    let verdict = cmd_check("isUndefined", &[], Options::default()).unwrap();
    assert!(verdict.result);
}

#[test]
fn test_check_strict_rejects_missing_argument() {
    let opts = Options {
        strict: true,
        ..Options::default()
    };
    let result = cmd_check("isUndefined", &[], opts);
    assert!(matches!(
        result,
        Err(CliError::Predicate(PredicateError::ArityMismatch { expected: 1, actual: 0, .. }))
    ));
}

#[test]
fn test_check_json_mode() {
    let opts = Options {
        json: true,
        ..Options::default()
    };
    let verdict = cmd_check("isBlankArray", &args(&["[]"]), opts).unwrap();
    assert!(verdict.result);

    let rendered = render_verdict(&verdict, true).unwrap();
    assert_eq!(
        rendered,
        r#"{"predicate":"isBlankArray","args":[[]],"result":true}"#
    );
}

#[test]
fn test_check_json_writes_undefined_as_null() {
    let verdict = cmd_check("is_undefined", &args(&["undefined"]), Options::default()).unwrap();

    let rendered = render_verdict(&verdict, true).unwrap();
    assert_eq!(
        rendered,
        r#"{"predicate":"isUndefined","args":[null],"result":true}"#
    );
    assert_eq!(render_verdict(&verdict, false).unwrap(), "true");
}

#[test]
fn test_check_unknown_predicate() {
    let result = cmd_check("isObject", &args(&["{}"]), Options::default());
    assert!(matches!(
        result,
        Err(CliError::Predicate(PredicateError::UnknownPredicate(_)))
    ));
}

#[test]
fn test_check_invalid_json_argument() {
    let result = cmd_check("isEmptyString", &args(&["not json"]), Options::default());
    assert!(matches!(result, Err(CliError::Json(_))));
}

// =============================================================================
// LIST COMMAND TESTS
// =============================================================================

#[test]
fn test_list_plain_and_json() {
    assert!(cmd_list(Options::default()).is_ok());

    let plain = render_list(false).unwrap();
    assert_eq!(plain.lines().count(), PredicateKind::ALL.len());
    assert!(plain.lines().next().unwrap().starts_with("isArray"));

    let json: serde_json::Value = serde_json::from_str(&render_list(true).unwrap()).unwrap();
    let entries = json.as_array().unwrap();
    assert_eq!(entries.len(), 10);
    assert_eq!(entries[0]["name"], "isArray");
    assert_eq!(entries[0]["rust_name"], "is_array");
    assert_eq!(entries[0]["arity"], 1);
    assert_eq!(entries[7]["name"], "isMajorSameNumber");
    assert_eq!(entries[7]["arity"], 2);
}

// =============================================================================
// BATCH COMMAND TESTS
// =============================================================================

#[test]
fn test_batch_clean_run() {
    let temp = create_temp_dir();
    let path = create_batch_file(
        &temp,
        r#"[
            {"predicate": "isArray", "args": [[1, 2]], "expect": true},
            {"predicate": "isBlankArray", "args": [null], "expect": true},
            {"predicate": "isEmptyString", "args": ["x"], "expect": false},
            {"predicate": "isTrue", "args": [true]},
            {"predicate": "isNull", "args": [0], "expect": false},
            {"predicate": "isMinorSameNumber", "args": [null, 0], "expect": true}
        ]"#,
    );

    let summary = cmd_batch(&path, Options::default()).unwrap();
    assert_eq!(
        summary,
        BatchSummary {
            total: 6,
            truthy: 4,
            mismatched: 0,
        }
    );
    assert!(summary.is_clean());
}

#[test]
fn test_batch_reports_mismatches() {
    let temp = create_temp_dir();
    let path = create_batch_file(
        &temp,
        r#"[
            {"predicate": "isMajorNumber", "args": [3, 5], "expect": true},
            {"predicate": "isUndefined", "expect": true}
        ]"#,
    );

    let summary = cmd_batch(&path, Options::default()).unwrap();
    assert_eq!(summary.total, 2);
    assert_eq!(summary.mismatched, 1);
    assert!(!summary.is_clean());
}

#[test]
fn test_batch_json_mode() {
    let temp = create_temp_dir();
    let path = create_batch_file(&temp, r#"[{"predicate": "isNull", "args": [null]}]"#);

    let opts = Options {
        json: true,
        ..Options::default()
    };
    let summary = cmd_batch(&path, opts).unwrap();
    assert_eq!(summary.truthy, 1);
}

#[test]
fn test_batch_unknown_predicate_aborts() {
    let temp = create_temp_dir();
    let path = create_batch_file(
        &temp,
        r#"[
            {"predicate": "isNull", "args": [null]},
            {"predicate": "isNothing", "args": []}
        ]"#,
    );

    let result = cmd_batch(&path, Options::default());
    assert!(matches!(
        result,
        Err(CliError::Predicate(PredicateError::UnknownPredicate(ref n))) if n == "isNothing"
    ));
}

#[test]
fn test_batch_strict_rejects_arity_before_output() {
    let temp = create_temp_dir();
    let path = create_batch_file(
        &temp,
        r#"[
            {"predicate": "isNull", "args": [null]},
            {"predicate": "isNull", "args": []}
        ]"#,
    );

    let opts = Options {
        strict: true,
        ..Options::default()
    };
    let cases = load_batch(&path).unwrap();
    assert!(matches!(
        resolve_batch(&cases, true),
        Err(CliError::Predicate(PredicateError::ArityMismatch { expected: 1, actual: 0, .. }))
    ));
    assert!(matches!(
        cmd_batch(&path, opts),
        Err(CliError::Predicate(PredicateError::ArityMismatch { .. }))
    ));
}

#[test]
fn test_batch_strict_accepts_exact_arity() {
    let temp = create_temp_dir();
    let path = create_batch_file(
        &temp,
        r#"[
            {"predicate": "isNull", "args": [null], "expect": true},
            {"predicate": "isMinorNumber", "args": [1, 2], "expect": true}
        ]"#,
    );

    let opts = Options {
        strict: true,
        ..Options::default()
    };
    let summary = cmd_batch(&path, opts).unwrap();
    assert_eq!(summary.total, 2);
    assert!(summary.is_clean());
}

#[test]
fn test_batch_missing_file() {
    let temp = create_temp_dir();
    let path = temp.path().join("nope.json");

    let result = load_batch(&path);
    assert!(matches!(result, Err(CliError::Io { .. })));
}

#[test]
fn test_batch_malformed_file() {
    let temp = create_temp_dir();
    let path = create_batch_file(&temp, r#"{"predicate": "isNull"}"#);

    let result = cmd_batch(&path, Options::default());
    assert!(matches!(result, Err(CliError::Json(_))));
}
