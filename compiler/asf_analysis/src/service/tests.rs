use pretty_assertions::assert_eq;

use super::*;
use asf_parse::parse;

#[test]
fn test_brace_match_at_either_delimiter() {
    let braces = [BraceMatch::new(9, 16), BraceMatch::new(4, 21)];
    assert_eq!(brace_match_at(&braces, 9), Some(BraceMatch::new(9, 16)));
    assert_eq!(brace_match_at(&braces, 21), Some(BraceMatch::new(4, 21)));
    // Caret just after the closing paren.
    assert_eq!(brace_match_at(&braces, 17), Some(BraceMatch::new(9, 16)));
    assert_eq!(brace_match_at(&braces, 12), None);
    assert_eq!(brace_match_at(&[], 0), None);
}

#[test]
fn test_member_target_after_dot() {
    let source = "a = $CPUPercent.";
    let target = member_target_at(source, source.len()).map(|t| t.text);
    assert_eq!(target, Some("$CPUPercent"));
}

#[test]
fn test_member_target_with_partial_name_and_trivia() {
    let source = "a = $CPUPercent . GetS";
    assert_eq!(member_target_at(source, source.len()).map(|t| t.text), Some("$CPUPercent"));
    assert_eq!(member_target_at(source, 4), None);
}

#[test]
fn test_member_target_requires_identifier() {
    assert_eq!(member_target_at("a = 1.", 6).map(|t| t.kind), None);
    assert_eq!(member_target_at("a = (b).", 8), None);
    assert_eq!(member_target_at("", 10), None);
}

#[test]
fn test_member_target_off_char_boundary() {
    assert_eq!(member_target_at("é.", 1), None);
}

#[test]
fn test_user_identifiers_first_assignment_order() {
    let output = parse("b = 1; a = 2; b = a; $TargetDedicatedNodes = b");
    assert_eq!(
        user_identifiers(&output.formula),
        vec!["b", "a", "$TargetDedicatedNodes"]
    );
}

#[test]
fn test_completion_items() {
    let output = parse("myVar = 1; $TargetDedicatedNodes = myVar");
    let items = completion_items(&output.formula);
    assert_eq!(items[0], CompletionItem::new("myVar", CompletionKind::Variable));
    let service: Vec<_> = items
        .iter()
        .filter(|i| i.label == "$TargetDedicatedNodes")
        .map(|i| i.kind)
        .collect();
    assert_eq!(service, vec![CompletionKind::ServiceVariable]);
    let rand = items.iter().find(|i| i.label == "rand");
    assert_eq!(rand.and_then(|i| i.detail.as_deref()), Some("rand(): double"));
    assert!(items
        .iter()
        .any(|i| i.label == "requeue" && i.kind == CompletionKind::Keyword));
}

#[test]
fn test_member_completions() {
    let source = "a = $CPUPercent.";
    let labels: Vec<_> = member_completions(source, source.len())
        .into_iter()
        .map(|i| i.label)
        .collect();
    assert!(labels.contains(&"GetSample".to_string()));
    assert!(labels.contains(&"Count".to_string()));
    assert_eq!(labels.len(), signatures::methods().entries().len());
    assert!(member_completions(source, 16)
        .iter()
        .all(|i| i.kind == CompletionKind::Method));
    assert!(member_completions("a = b.", 6).is_empty());
}
