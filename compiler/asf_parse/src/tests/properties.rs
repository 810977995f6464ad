//! Totality and span invariants on arbitrary input.

use proptest::prelude::*;

use crate::parse;

#[test]
fn test_deeply_nested_parentheses() {
    let depth = 5_000;
    let source = format!("a = {}1{}", "(".repeat(depth), ")".repeat(depth));
    let output = parse(&source);
    assert!(!output.has_errors());
    assert_eq!(output.formula.assignments.len(), 1);
}

#[test]
fn test_deeply_nested_unary() {
    let source = format!("a = {}1", "-".repeat(20_000));
    assert!(!parse(&source).has_errors());
}

proptest! {
    #[test]
    fn prop_parse_is_total(source in any::<String>()) {
        let output = parse(&source);
        prop_assert_eq!(output.formula.span.start, 0);
        prop_assert_eq!(output.formula.span.end as usize, source.len());
    }

    #[test]
    fn prop_errors_and_assignments_in_source_order(
        source in "[a-c$ 0-9.;=+*/()<>!&|?:,^\n-]{0,64}"
    ) {
        let output = parse(&source);
        for pair in output.errors.windows(2) {
            prop_assert!(pair[0].span.start <= pair[1].span.start);
        }
        for pair in output.formula.assignments.windows(2) {
            prop_assert!(pair[0].span.end <= pair[1].span.start);
        }
        for assignment in &output.formula.assignments {
            prop_assert!(assignment.span.end as usize <= source.len());
        }
    }
}
