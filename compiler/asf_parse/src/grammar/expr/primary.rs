//! Primary expressions.
//!
//! ```text
//! primary   = NUMBER | STRING | KEYWORD
//!           | IDENTIFIER [ "(" args ")" | "." IDENTIFIER "(" args ")" ]
//!           | "(" expression ")"
//! args      = [ expression { "," expression } ]
//! ```

use asf_ir::{Delimiters, Expr, ExprKind, Identifier, Token, TokenKind};

use crate::{ErrorContext, ParseError, Parser};

impl<'src> Parser<'src> {
    pub(crate) fn parse_primary(&mut self) -> Result<Expr, ParseError> {
        let token = self.peek();
        match token.kind {
            TokenKind::Number => {
                self.bump();
                let value = token
                    .text
                    .parse::<f64>()
                    .map_err(|_| ParseError::new(token.span, format!("invalid number `{}`", token.text)))?;
                Ok(Expr::new(ExprKind::Double(value), token.span))
            }
            TokenKind::String => {
                self.bump();
                Ok(Expr::new(ExprKind::String(unquote(token.text).to_string()), token.span))
            }
            TokenKind::Keyword => {
                self.bump();
                Ok(Expr::new(ExprKind::Keyword(token.text.to_string()), token.span))
            }
            TokenKind::Identifier => {
                self.bump();
                self.parse_name_suffix(token)
            }
            TokenKind::LeftParen => self.parse_parenthesized(),
            _ => Err(ParseError::expected("expression", &token)
                .in_context(ErrorContext::Expression)),
        }
    }

    /// After an identifier: a call, a method invocation, or a bare name.
    fn parse_name_suffix(&mut self, name: Token<'src>) -> Result<Expr, ParseError> {
        match self.peek().kind {
            TokenKind::LeftParen => {
                let (arguments, parens) = self
                    .parse_arguments()
                    .map_err(|e| e.in_context(ErrorContext::ArgumentList))?;
                Ok(Expr::new(
                    ExprKind::FunctionCall {
                        function: Identifier::new(name.text, name.span),
                        arguments,
                        parens,
                    },
                    name.span.merge(parens.close),
                ))
            }
            TokenKind::Dot => {
                self.bump();
                let (method, arguments, parens) = self
                    .parse_invocation_tail()
                    .map_err(|e| e.in_context(ErrorContext::MethodInvocation))?;
                Ok(Expr::new(
                    ExprKind::MethodInvocation {
                        object: Identifier::new(name.text, name.span),
                        method,
                        arguments,
                        parens,
                    },
                    name.span.merge(parens.close),
                ))
            }
            _ => Ok(Expr::new(ExprKind::Identifier(name.text.to_string()), name.span)),
        }
    }

    fn parse_invocation_tail(&mut self) -> Result<(Identifier, Vec<Expr>, Delimiters), ParseError> {
        let method = self.expect(TokenKind::Identifier)?;
        let (arguments, parens) = self.parse_arguments()?;
        Ok((Identifier::new(method.text, method.span), arguments, parens))
    }

    /// `"(" [ expression { "," expression } ] ")"`
    fn parse_arguments(&mut self) -> Result<(Vec<Expr>, Delimiters), ParseError> {
        let open = self.expect(TokenKind::LeftParen)?;
        let mut arguments = Vec::new();

        if let Some(close) = self.lexer.eat(TokenKind::RightParen) {
            return Ok((arguments, Delimiters { open: open.span, close: close.span }));
        }

        loop {
            arguments.push(self.parse_expr()?);
            let token = self.peek();
            match token.kind {
                TokenKind::Comma => {
                    self.bump();
                }
                TokenKind::RightParen => {
                    self.bump();
                    return Ok((arguments, Delimiters { open: open.span, close: token.span }));
                }
                _ => {
                    return Err(ParseError::expected_one_of(
                        &[TokenKind::Comma, TokenKind::RightParen],
                        &token,
                    ))
                }
            }
        }
    }

    fn parse_parenthesized(&mut self) -> Result<Expr, ParseError> {
        let open = self.bump();
        let inner = self
            .parse_expr()
            .map_err(|e| e.in_context(ErrorContext::Parenthesized))?;
        let close = self
            .expect(TokenKind::RightParen)
            .map_err(|e| e.in_context(ErrorContext::Parenthesized))?;
        Ok(Expr::new(
            ExprKind::Parenthesized {
                inner: Box::new(inner),
                parens: Delimiters {
                    open: open.span,
                    close: close.span,
                },
            },
            open.span.merge(close.span),
        ))
    }
}

/// String literal text without its surrounding quotes.
fn unquote(text: &str) -> &str {
    text.strip_prefix('"')
        .and_then(|rest| rest.strip_suffix('"'))
        .unwrap_or(text)
}

#[cfg(test)]
mod tests {
    use super::unquote;

    #[test]
    fn test_unquote() {
        assert_eq!(unquote("\"abc\""), "abc");
        assert_eq!(unquote("\"\""), "");
        assert_eq!(unquote("x"), "x");
    }
}
