//! End-to-end checks through the driver library.

use pretty_assertions::assert_eq;

use asfc::commands::{braces_to, check_to, explain_to, lex_to, parse_to};
use asfc::{check_source, AnalysisOptions, CliError, Options, Outcome, OutputFormat};

const SAMPLE: &str = "a = $CPUPercent.GetStuff() + $CPUPercent.Other()^+ $CPUPercent.NotReported();\nb = $CPUPercent.Another()^";

fn codes(source: &str) -> Vec<(String, usize, usize)> {
    check_source(source, &AnalysisOptions::default())
        .diagnostics
        .iter()
        .map(|d| (d.code.to_string(), d.start_index(), d.end_index()))
        .collect()
}

fn text_options() -> Options {
    Options {
        color: asf_diagnostic::emitter::ColorMode::Never,
        ..Options::default()
    }
}

fn json_options() -> Options {
    Options {
        format: OutputFormat::Json,
        ..Options::default()
    }
}

fn run_check(source: &str, options: &Options) -> (Outcome, String) {
    let mut out = Vec::new();
    let outcome = match check_to("formula.asf", source, options, &mut out, false) {
        Ok(outcome) => outcome,
        Err(error) => panic!("check failed: {error}"),
    };
    (outcome, String::from_utf8_lossy(&out).into_owned())
}

#[test]
fn test_diagnostic_ordering_sample() {
    assert_eq!(
        codes(SAMPLE),
        vec![
            ("parse-error".to_string(), 48, 48),
            ("parse-error".to_string(), 103, 103),
            ("unknown-method-name".to_string(), 16, 23),
            ("unknown-method-name".to_string(), 41, 45),
            ("unknown-method-name".to_string(), 94, 100),
        ]
    );
}

#[test]
fn test_arity_examples() {
    assert!(codes("a = rand()").is_empty());
    let analysis = check_source("a = rand(2, 3)", &AnalysisOptions::default());
    assert_eq!(analysis.diagnostics.len(), 1);
    let message = &analysis.diagnostics[0].message;
    assert!(message.contains("rand") && message.contains('2'), "{message}");
}

#[test]
fn test_keyword_examples() {
    assert!(codes("$NodeDeallocationOption = taskcompletion").is_empty());
    assert_eq!(
        codes("abc = taskcompletion"),
        vec![("invalid-assignment-from-keyword".to_string(), 6, 19)]
    );
}

#[test]
fn test_parse_example() {
    let analysis = check_source("a1=1.0", &AnalysisOptions::default());
    assert!(analysis.diagnostics.is_empty());
    assert_eq!(analysis.formula.to_string(), "a1 = 1;\n");
}

#[test]
fn test_check_text_output() {
    let (outcome, text) = run_check("a = rand(2, 3)", &text_options());
    assert_eq!(outcome, Outcome::Errors);
    assert!(text.starts_with("error[invalid-function-signature]: function `rand` does not take 2 arguments\n"));
    assert!(text.contains("  --> formula.asf:1:5\n"), "{text}");
    assert!(text.ends_with("error: 1 error found\n"), "{text}");
}

#[test]
fn test_check_clean_source_prints_nothing() {
    let (outcome, text) = run_check("a = 1;\nb = a * 2", &text_options());
    assert_eq!(outcome, Outcome::Clean);
    assert_eq!(text, "");
}

#[test]
fn test_check_json_output() {
    let (outcome, text) = run_check("abc = taskcompletion", &json_options());
    assert_eq!(outcome, Outcome::Errors);
    let value: serde_json::Value = serde_json::from_str(&text).unwrap_or_default();
    assert_eq!(value["diagnostics"][0]["code"], "invalid-assignment-from-keyword");
    assert_eq!(value["diagnostics"][0]["start_index"], 6);
    assert_eq!(value["diagnostics"][0]["end_index"], 19);
    assert_eq!(value["summary"]["errors"], 1);
}

#[test]
fn test_check_error_limit_counts_suppressed() {
    let options = Options {
        error_limit: 1,
        ..text_options()
    };
    let (_, text) = run_check(SAMPLE, &options);
    assert_eq!(text.matches("error[").count(), 1);
    assert!(text.ends_with("error: 5 errors found\n"), "{text}");
}

#[test]
fn test_lex_text() {
    let mut out = Vec::new();
    let result = lex_to("a=1", &Options::default(), &mut out);
    assert!(matches!(result, Ok(Outcome::Clean)));
    let text = String::from_utf8_lossy(&out);
    let lines: Vec<_> = text.lines().collect();
    assert_eq!(lines[0], "3 tokens");
    assert!(lines[1].contains("Identifier") && lines[1].ends_with("\"a\""));
}

#[test]
fn test_lex_json_has_coloring_fields() {
    let mut out = Vec::new();
    let result = lex_to("$CPUPercent.", &json_options(), &mut out);
    assert!(result.is_ok());
    let value: serde_json::Value = serde_json::from_slice(&out).unwrap_or_default();
    assert_eq!(value[1]["start_index"], 11);
    assert_eq!(value[1]["kind"], "Dot");
    assert_eq!(value[1]["text"], ".");
    assert!(value[1]["triggers"].as_u64().is_some_and(|bits| bits != 0));
}

#[test]
fn test_parse_reports_errors() {
    let mut out = Vec::new();
    let result = parse_to("a = 1 ^; b = max(1,2)", &Options::default(), &mut out);
    assert!(matches!(result, Ok(Outcome::Errors)));
    let text = String::from_utf8_lossy(&out);
    assert_eq!(
        text,
        "Assignments: 2\n  0..=4  a = 1\n  9..=20  b = max(1, 2)\nErrors: 1\n  6..=6  expected `;` or end of input, found `^`\n"
    );
}

#[test]
fn test_braces_both_strategies() {
    let mut out = Vec::new();
    let result = braces_to("a = (1 + (10 / 5) + 3)", &Options::default(), &mut out);
    assert!(result.is_ok());
    assert_eq!(String::from_utf8_lossy(&out), "9 16\n4 21\n");

    let mut out = Vec::new();
    let result = braces_to("a = 1 + (10 / 5) + 3)", &json_options(), &mut out);
    assert!(result.is_ok());
    let value: serde_json::Value = serde_json::from_slice(&out).unwrap_or_default();
    assert_eq!(value, serde_json::json!([{ "left": 8, "right": 15 }]));
}

#[test]
fn test_explain() {
    let mut out = Vec::new();
    let result = explain_to("Unknown-Method-Name", &mut out);
    assert!(matches!(result, Ok(Outcome::Clean)));
    assert!(String::from_utf8_lossy(&out).starts_with("unknown-method-name (error)\n\n"));

    let result = explain_to("E0001", Vec::new());
    assert!(matches!(result, Err(CliError::UnknownCode(_))));
}

#[test]
fn test_missing_file() {
    let result = asfc::commands::read_input("/definitely/not/here.asf");
    assert!(matches!(result, Err(CliError::NotFound { .. })));
}
