//! Classification tests: the `{` rule, file set parsing, diagnostics,
//! and contract violations.

use tryout_decoder::classify;
use tryout_types::{DecodeError, FileSet, Output, StyledRun};

fn files(raw: &str) -> FileSet {
    match classify(raw).expect("classify failed") {
        Output::Files(set) => set,
        other => panic!("expected file set, got {other:?}"),
    }
}

fn diagnostic_runs(raw: &str) -> Vec<StyledRun> {
    match classify(raw).expect("classify failed") {
        Output::Diagnostic(diag) => diag.into_runs(),
        other => panic!("expected diagnostic, got {other:?}"),
    }
}

#[test]
fn test_single_file() {
    let set = files(r#"{"main":"say hi"}"#);
    let expected: FileSet = [("main", "say hi")].into_iter().collect();
    assert_eq!(set, expected);
}

#[test]
fn test_multiple_files_in_order() {
    let set = files(r#"{"load":"scoreboard objectives add __temp__ dummy","main":"say a\nsay b","__if_0":"say c"}"#);
    let names: Vec<&str> = set.iter().map(|(k, _)| k).collect();
    assert_eq!(names, vec!["load", "main", "__if_0"]);
    assert_eq!(set.get("main"), Some("say a\nsay b"));
}

#[test]
fn test_empty_object_is_empty_file_set() {
    assert!(files("{}").is_empty());
}

#[test]
fn test_styled_diagnostic() {
    let runs = diagnostic_runs("\x1b[31mSyntaxError: Unexpected token\x1b[0m");
    assert_eq!(runs, vec![StyledRun::new("SyntaxError: Unexpected token", true, false)]);
}

#[test]
fn test_plain_diagnostic() {
    let runs = diagnostic_runs("Invalid syntax");
    assert_eq!(runs, vec![StyledRun::plain("Invalid syntax")]);
}

#[test]
fn test_leading_whitespace_is_diagnostic() {
    // Only the very first character counts.
    let out = classify(" {\"main\":\"say hi\"}").unwrap();
    assert!(out.is_diagnostic());
}

#[test]
fn test_brace_inside_diagnostic() {
    let runs = diagnostic_runs("1 | if (x) \x1b[31m\x1b[4m{\x1b[0m");
    assert_eq!(
        runs,
        vec![StyledRun::plain("1 | if (x) "), StyledRun::new("{", true, true)]
    );
}

#[test]
fn test_empty_raw_is_empty_diagnostic() {
    match classify("").unwrap() {
        Output::Diagnostic(diag) => assert!(diag.is_empty()),
        other => panic!("expected diagnostic, got {other:?}"),
    }
}

#[test]
fn test_malformed_file_set_is_error() {
    let err = classify(r#"{"main": "say hi""#).unwrap_err();
    assert!(matches!(err, DecodeError::MalformedFileSet(_)));
}

#[test]
fn test_classification_is_total_and_disjoint() {
    let samples = [
        r#"{"a":"b"}"#,
        "{}",
        "x",
        "",
        "\x1b[31m{",
        "}{",
        "\n{}",
    ];
    for raw in samples {
        match classify(raw) {
            Ok(Output::Files(_)) => assert!(raw.starts_with('{'), "{raw:?}"),
            Ok(Output::Diagnostic(_)) => assert!(!raw.starts_with('{'), "{raw:?}"),
            Err(e) => panic!("unexpected error for {raw:?}: {e}"),
        }
    }
}
