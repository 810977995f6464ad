use asf_ir::{ExprKind, Formula, Node, Visitor};

use super::BraceMatch;

/// Collects the delimiter pair of every parenthesized expression, call and
/// method invocation, in visit order.
#[derive(Debug, Default)]
pub struct SyntaxBraceMatcher {
    matches: Vec<BraceMatch>,
}

impl SyntaxBraceMatcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn into_matches(self) -> Vec<BraceMatch> {
        self.matches
    }
}

impl<'ast> Visitor<'ast> for SyntaxBraceMatcher {
    fn visit(&mut self, node: Node<'ast>) {
        let Node::Expr(expr) = node else { return };
        match &expr.kind {
            ExprKind::Parenthesized { parens, .. }
            | ExprKind::FunctionCall { parens, .. }
            | ExprKind::MethodInvocation { parens, .. } => {
                self.matches.push(BraceMatch::from(*parens));
            }
            _ => {}
        }
    }
}

/// Brace pairs of `formula`, inner before outer.
#[tracing::instrument(level = "debug", skip_all)]
pub fn match_syntax(formula: &Formula) -> Vec<BraceMatch> {
    let mut matcher = SyntaxBraceMatcher::new();
    formula.accept(&mut matcher);
    matcher.into_matches()
}
