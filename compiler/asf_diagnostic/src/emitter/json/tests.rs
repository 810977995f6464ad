use pretty_assertions::assert_eq;
use serde_json::json;

use super::*;
use asf_ir::Span;

fn parse(output: Vec<u8>) -> serde_json::Value {
    serde_json::from_slice(&output).unwrap()
}

#[test]
fn test_entries_without_source() {
    let mut emitter = JsonEmitter::new(Vec::new());
    emitter.emit(&Diagnostic::new(
        ErrorCode::InvalidFunctionSignature,
        "no overload of `rand` takes 2 arguments",
        Span::new(4, 14),
    ));
    emitter.flush();

    assert_eq!(
        parse(emitter.into_inner()),
        json!({
            "diagnostics": [{
                "code": "invalid-function-signature",
                "severity": "error",
                "message": "no overload of `rand` takes 2 arguments",
                "start_index": 4,
                "end_index": 13,
            }]
        })
    );
}

#[test]
fn test_entries_with_source_and_summary() {
    let source = "a = 1;\nb = foo()";
    let mut emitter = JsonEmitter::new(Vec::new()).with_source(source);
    emitter.emit(
        &Diagnostic::new(
            ErrorCode::UnknownFunctionName,
            "unknown function `foo`",
            Span::new(11, 14),
        )
        .with_note("built-in functions are lowercase"),
    );
    emitter.emit_summary(1, 0);
    emitter.flush();

    assert_eq!(
        parse(emitter.into_inner()),
        json!({
            "diagnostics": [{
                "code": "unknown-function-name",
                "severity": "error",
                "message": "unknown function `foo`",
                "start_index": 11,
                "end_index": 13,
                "line": 2,
                "column": 5,
                "notes": ["built-in functions are lowercase"],
            }],
            "summary": {"errors": 1, "warnings": 0}
        })
    );
}

#[test]
fn test_empty_run_is_valid_json() {
    let mut emitter = JsonEmitter::new(Vec::new());
    emitter.flush();
    assert_eq!(parse(emitter.into_inner()), json!({"diagnostics": []}));
}

#[test]
fn test_message_escaping() {
    let mut emitter = JsonEmitter::new(Vec::new());
    emitter.emit(&Diagnostic::new(
        ErrorCode::ParseError,
        "unexpected `\"abc`",
        Span::new(0, 4),
    ));
    emitter.flush();
    let value = parse(emitter.into_inner());
    assert_eq!(value["diagnostics"][0]["message"], json!("unexpected `\"abc`"));
}
