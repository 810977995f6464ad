//! The reserved deallocation-option variable and its keywords.
//!
//! `$NodeDeallocationOption` may only be assigned a deallocation keyword,
//! and a deallocation keyword may only be assigned to it.

use asf_diagnostic::{Diagnostic, ErrorCode};
use asf_ir::declarations::{DEALLOCATION_KEYWORDS, DEALLOCATION_OPTION_VARIABLE};
use asf_ir::{ExprKind, Node};

use super::Rule;

pub struct InvalidAssignmentToDeallocationOption;

impl Rule for InvalidAssignmentToDeallocationOption {
    fn code(&self) -> ErrorCode {
        ErrorCode::InvalidAssignmentToDeallocationOption
    }

    fn check(&self, node: Node<'_>, out: &mut Vec<Diagnostic>) {
        let Node::Assignment(assignment) = node else {
            return;
        };
        if assignment.identifier.name == DEALLOCATION_OPTION_VARIABLE
            && !assignment.expression.is_keyword()
        {
            out.push(Diagnostic::new(
                self.code(),
                format!(
                    "`{DEALLOCATION_OPTION_VARIABLE}` must be assigned one of: {}",
                    DEALLOCATION_KEYWORDS.join(", ")
                ),
                assignment.expression.span,
            ));
        }
    }
}

pub struct InvalidAssignmentFromKeyword;

impl Rule for InvalidAssignmentFromKeyword {
    fn code(&self) -> ErrorCode {
        ErrorCode::InvalidAssignmentFromKeyword
    }

    fn check(&self, node: Node<'_>, out: &mut Vec<Diagnostic>) {
        let Node::Assignment(assignment) = node else {
            return;
        };
        let ExprKind::Keyword(keyword) = &assignment.expression.kind else {
            return;
        };
        if assignment.identifier.name != DEALLOCATION_OPTION_VARIABLE {
            out.push(
                Diagnostic::new(
                    self.code(),
                    format!(
                        "keyword `{keyword}` cannot be assigned to `{}`",
                        assignment.identifier.name
                    ),
                    assignment.expression.span,
                )
                .with_note(format!(
                    "deallocation keywords can only be assigned to `{DEALLOCATION_OPTION_VARIABLE}`"
                )),
            );
        }
    }
}
