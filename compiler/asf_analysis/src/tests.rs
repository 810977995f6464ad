//! Totality of the full pass on arbitrary input.

use proptest::prelude::*;

use super::*;

proptest! {
    #[test]
    fn prop_analyze_is_total(source in any::<String>()) {
        let analysis = analyze(&source, &AnalysisOptions::default());
        let rebuilt: String = analysis.tokens.iter().map(|t| t.text).collect();
        prop_assert_eq!(&rebuilt, &source);
    }

    #[test]
    fn prop_diagnostics_in_reporting_order(
        source in "[a-c$ 0-9.;=+*/()<>!&|?:,^\n-]{0,64}|\\$CPUPercent\\.[A-Za-z]{1,8}\\([0-9, ]{0,6}\\)"
    ) {
        let analysis = analyze(&source, &AnalysisOptions::default());
        let parse_errors = analysis
            .diagnostics
            .iter()
            .take_while(|d| d.is_parse_error())
            .count();
        prop_assert!(analysis.diagnostics[parse_errors..].iter().all(|d| !d.is_parse_error()));
        for group in [&analysis.diagnostics[..parse_errors], &analysis.diagnostics[parse_errors..]] {
            for pair in group.windows(2) {
                prop_assert!(pair[0].span.start <= pair[1].span.start);
            }
        }
    }

    #[test]
    fn prop_brace_pairs_are_ordered(source in "[a1+( )]{0,40}") {
        let analysis = analyze(&source, &AnalysisOptions::default());
        let bytes = source.as_bytes();
        for pair in &analysis.braces {
            prop_assert!(pair.left < pair.right);
            prop_assert_eq!(bytes[pair.left], b'(');
            prop_assert_eq!(bytes[pair.right], b')');
        }
    }
}
