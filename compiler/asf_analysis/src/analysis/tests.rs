use pretty_assertions::assert_eq;

use super::*;
use asf_diagnostic::ErrorCode;

const SAMPLE: &str = "a = $CPUPercent.GetStuff() + $CPUPercent.Other()^+ $CPUPercent.NotReported();\nb = $CPUPercent.Another()^";

fn inclusive(analysis: &Analysis<'_>) -> Vec<(ErrorCode, usize, usize)> {
    analysis
        .diagnostics
        .iter()
        .map(|d| (d.code, d.start_index(), d.end_index()))
        .collect()
}

#[test]
fn test_parse_errors_precede_semantic_diagnostics() {
    let analysis = analyze(SAMPLE, &AnalysisOptions::default());
    assert_eq!(
        inclusive(&analysis),
        vec![
            (ErrorCode::ParseError, 48, 48),
            (ErrorCode::ParseError, 103, 103),
            (ErrorCode::UnknownMethodName, 16, 23),
            (ErrorCode::UnknownMethodName, 41, 45),
            (ErrorCode::UnknownMethodName, 94, 100),
        ]
    );
    assert_eq!(analysis.error_count(), 5);
}

#[test]
fn test_semantic_diagnostics_sorted_by_start() {
    let analysis = analyze("a = foo(bar(1))", &AnalysisOptions::default());
    let starts: Vec<_> = analysis.diagnostics.iter().map(Diagnostic::start_index).collect();
    assert_eq!(starts, vec![4, 8]);
}

#[test]
fn test_ties_keep_rule_order() {
    // Both start at the receiver; rule order breaks the tie.
    let analysis = analyze("a = x.Count(1)", &AnalysisOptions::default());
    assert_eq!(
        inclusive(&analysis),
        vec![
            (ErrorCode::InvalidMethodSignature, 4, 13),
            (ErrorCode::InvalidMethodInvocationTarget, 4, 4),
        ]
    );
}

#[test]
fn test_clean_source() {
    let analysis = analyze("a = (1 + (10 / 5) + 3)", &AnalysisOptions::default());
    assert!(!analysis.has_errors());
    assert_eq!(analysis.braces, vec![BraceMatch::new(9, 16), BraceMatch::new(4, 21)]);
    assert_eq!(analysis.formula.assignments.len(), 1);
    let rebuilt: String = analysis.tokens.iter().map(|t| t.text).collect();
    assert_eq!(rebuilt, "a = (1 + (10 / 5) + 3)");
}

#[test]
fn test_auto_braces_fall_back_to_tokens() {
    let analysis = analyze("a = 1 + (10 / 5) + 3)", &AnalysisOptions::default());
    assert!(analysis.has_errors());
    assert_eq!(analysis.braces, vec![BraceMatch::new(8, 15)]);
}

#[test]
fn test_forced_syntax_braces_on_broken_input() {
    let options = AnalysisOptions {
        brace_strategy: BraceStrategy::Syntax,
        ..AnalysisOptions::default()
    };
    // The broken statement is dropped, so only the valid one contributes.
    let analysis = analyze("a = (1; b = (2)", &options);
    assert_eq!(analysis.braces, vec![BraceMatch::new(12, 14)]);
}

#[test]
fn test_error_limit_suppresses() {
    let options = AnalysisOptions {
        config: DiagnosticConfig {
            error_limit: 2,
            deduplicate: true,
        },
        ..AnalysisOptions::default()
    };
    let analysis = analyze(SAMPLE, &options);
    assert_eq!(analysis.diagnostics.len(), 2);
    assert!(analysis.diagnostics.iter().all(Diagnostic::is_parse_error));
    assert_eq!(analysis.suppressed, 3);
}

#[test]
fn test_empty_source() {
    let analysis = analyze("", &AnalysisOptions::default());
    assert!(analysis.tokens.is_empty());
    assert!(analysis.diagnostics.is_empty());
    assert!(analysis.braces.is_empty());
}

#[test]
fn test_deeply_nested_formula_analyzes_and_drops() {
    let source = format!("a = {}1", "-".repeat(20_000));
    let analysis = analyze(&source, &AnalysisOptions::default());
    assert!(analysis.diagnostics.is_empty());
    assert_eq!(analysis.formula.assignments.len(), 1);
    drop(analysis);
}
