use pretty_assertions::assert_eq;

use super::*;
use asf_ir::Span;
use asf_parse::parse;

fn check(source: &str) -> Vec<Diagnostic> {
    let output = parse(source);
    assert!(!output.has_errors(), "{source:?}: {:?}", output.errors);
    run_rules(&output.formula)
}

fn summary(source: &str) -> Vec<(ErrorCode, Span)> {
    check(source).into_iter().map(|d| (d.code, d.span)).collect()
}

#[test]
fn test_registry_order() {
    let codes: Vec<_> = RuleRegistry::new().rules.iter().map(|rule| rule.code()).collect();
    assert_eq!(
        codes,
        vec![
            ErrorCode::UnknownFunctionName,
            ErrorCode::UnknownMethodName,
            ErrorCode::InvalidFunctionSignature,
            ErrorCode::InvalidMethodSignature,
            ErrorCode::InvalidMethodInvocationTarget,
            ErrorCode::InvalidAssignmentToDeallocationOption,
            ErrorCode::InvalidAssignmentFromKeyword,
        ]
    );
}

#[test]
fn test_clean_formula() {
    let source = "$TargetDedicatedNodes = max(0, min(avg($CPUPercent.GetSample(TimeInterval_Minute * 5)), 10));\n\
                  $NodeDeallocationOption = taskcompletion;";
    assert!(check(source).is_empty());
}

#[test]
fn test_arity_matches_an_overload() {
    assert!(check("a = rand()").is_empty());
    assert!(check("a = time(); b = time(\"2024-01-01\")").is_empty());
    assert!(check("a = $CPUPercent.GetSample(1, 2, 3)").is_empty());
}

#[test]
fn test_arity_mismatch_names_function_and_count() {
    let diagnostics = check("a = rand(2, 3)");
    assert_eq!(diagnostics.len(), 1);
    let diagnostic = &diagnostics[0];
    assert_eq!(diagnostic.code, ErrorCode::InvalidFunctionSignature);
    assert_eq!(diagnostic.message, "function `rand` does not take 2 arguments");
    assert_eq!(diagnostic.span, Span::new(4, 14));
    assert_eq!(diagnostic.notes, vec!["expected `rand(): double`".to_string()]);
}

#[test]
fn test_method_arity_mismatch() {
    let diagnostics = check("a = $CPUPercent.Count(1)");
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].code, ErrorCode::InvalidMethodSignature);
    assert_eq!(diagnostics[0].message, "method `Count` does not take 1 argument");
    assert_eq!(diagnostics[0].span, Span::new(4, 24));
}

#[test]
fn test_unknown_function_skips_arity() {
    assert_eq!(
        summary("a = foo(1)"),
        vec![(ErrorCode::UnknownFunctionName, Span::new(4, 7))]
    );
    assert_eq!(
        summary("a = Rand()"),
        vec![(ErrorCode::UnknownFunctionName, Span::new(4, 8))]
    );
}

#[test]
fn test_unknown_method_on_sampling_variable() {
    assert_eq!(
        summary("a = $CPUPercent.GetStuff()"),
        vec![(ErrorCode::UnknownMethodName, Span::new(16, 24))]
    );
}

#[test]
fn test_invalid_invocation_target() {
    let diagnostics = check("a = b.Count()");
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].code, ErrorCode::InvalidMethodInvocationTarget);
    assert_eq!(diagnostics[0].message, "`b` is not a sampling variable");
    assert_eq!(diagnostics[0].span, Span::new(4, 5));
}

#[test]
fn test_keyword_assignment_rules() {
    assert!(check("$NodeDeallocationOption = taskcompletion").is_empty());

    let diagnostics = check("abc = taskcompletion");
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].code, ErrorCode::InvalidAssignmentFromKeyword);
    assert_eq!(diagnostics[0].span, Span::new(6, 20));
    assert_eq!(
        diagnostics[0].message,
        "keyword `taskcompletion` cannot be assigned to `abc`"
    );

    assert_eq!(
        summary("$NodeDeallocationOption = 1"),
        vec![(ErrorCode::InvalidAssignmentToDeallocationOption, Span::new(26, 27))]
    );
}

#[test]
fn test_output_grouped_by_rule() {
    assert_eq!(
        summary("a = foo() + $X.Bad(); b = rand(1)"),
        vec![
            (ErrorCode::UnknownFunctionName, Span::new(4, 7)),
            (ErrorCode::UnknownMethodName, Span::new(15, 18)),
            (ErrorCode::InvalidFunctionSignature, Span::new(26, 33)),
            (ErrorCode::InvalidMethodInvocationTarget, Span::new(12, 14)),
        ]
    );
}

#[test]
fn test_within_a_rule_nested_calls_report_first() {
    assert_eq!(
        summary("a = foo(bar(1))"),
        vec![
            (ErrorCode::UnknownFunctionName, Span::new(8, 11)),
            (ErrorCode::UnknownFunctionName, Span::new(4, 7)),
        ]
    );
}

#[test]
fn test_custom_registry() {
    let registry = RuleRegistry::with_rules(vec![Box::new(UnknownMethodName)]);
    let output = parse("a = foo(); b = $CPUPercent.Nope()");
    let diagnostics = registry.run(&output.formula);
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].code, ErrorCode::UnknownMethodName);
}
