//! Recursive-descent parser for path expressions
//!
//! Operator precedence, lowest first: `or`, `and`, equality (`=`, `!=`),
//! relational (`<`, `<=`, `>`, `>=`), unary minus, union (`|`), then paths
//! and primary expressions.

mod expressions;
mod steps;

use std::collections::VecDeque;

use super::ast::Expr;
use super::compiled::CompiledPath;
use super::tokenizer::Tokenizer;
use super::tokens::{Spanned, Token};
use crate::error::{QueryResult, invalid_expression_error};

/// Parser state over a tokenized expression
pub struct PathParser<'a> {
    pub(crate) input: &'a str,
    pub(crate) tokens: VecDeque<Spanned>,
}

impl<'a> PathParser<'a> {
    /// Tokenize `input` and prepare to parse it
    ///
    /// # Errors
    ///
    /// Returns `QueryError::InvalidExpression` when tokenization fails.
    pub fn new(input: &'a str) -> QueryResult<Self> {
        let tokens = Tokenizer::new(input).tokenize()?;
        Ok(Self { input, tokens })
    }

    /// Compile a path expression
    ///
    /// # Errors
    ///
    /// Returns `QueryError::InvalidExpression` with the offending position for
    /// malformed input, or `UnknownFunction`/`WrongArity` for bad calls.
    pub fn compile(input: &str) -> QueryResult<CompiledPath> {
        let mut parser = PathParser::new(input)?;
        let ast = parser.parse()?;
        tracing::trace!(
            target: "jsonquery::xpath",
            expression = %input,
            "compiled path expression"
        );
        Ok(CompiledPath::new(input, ast))
    }

    /// Parse the complete expression
    ///
    /// # Errors
    ///
    /// Returns an error when the expression is malformed or has trailing
    /// tokens.
    pub fn parse(&mut self) -> QueryResult<Expr> {
        if matches!(self.peek_token(), Some(Token::EOF) | None) {
            return Err(invalid_expression_error(
                self.input,
                "empty path expression",
                Some(0),
            ));
        }

        let expr = self.parse_expression()?;
        match self.peek_token() {
            Some(Token::EOF) | None => Ok(expr),
            Some(token) => Err(invalid_expression_error(
                self.input,
                &format!("unexpected token '{}'", token.as_debug_str()),
                Some(self.position()),
            )),
        }
    }

    #[inline]
    pub(crate) fn peek_token(&self) -> Option<&Token> {
        self.tokens.front().map(|spanned| &spanned.token)
    }

    #[inline]
    pub(crate) fn peek_nth(&self, n: usize) -> Option<&Token> {
        self.tokens.get(n).map(|spanned| &spanned.token)
    }

    #[inline]
    pub(crate) fn consume_token(&mut self) -> Option<Token> {
        self.tokens.pop_front().map(|spanned| spanned.token)
    }

    /// Character offset of the next token
    #[inline]
    pub(crate) fn position(&self) -> usize {
        self.tokens
            .front()
            .map_or_else(|| self.input.chars().count(), |spanned| spanned.position)
    }

    pub(crate) fn expect_token(&mut self, expected: &Token) -> QueryResult<()> {
        match self.peek_token() {
            Some(token) if token == expected => {
                self.consume_token();
                Ok(())
            }
            Some(token) => Err(invalid_expression_error(
                self.input,
                &format!(
                    "expected '{}', found '{}'",
                    expected.as_debug_str(),
                    token.as_debug_str()
                ),
                Some(self.position()),
            )),
            None => Err(invalid_expression_error(
                self.input,
                &format!("expected '{}'", expected.as_debug_str()),
                None,
            )),
        }
    }

    pub(crate) fn error(&self, message: &str) -> crate::error::QueryError {
        invalid_expression_error(self.input, message, Some(self.position()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::QueryError;
    use crate::xpath::ast::{Axis, ComparisonOp, LocationPath, NodeTest, Step};

    fn parse(input: &str) -> Expr {
        PathParser::new(input)
            .and_then(|mut parser| parser.parse())
            .expect("valid expression")
    }

    #[test]
    fn parses_absolute_child_path() {
        assert_eq!(
            parse("/root/a"),
            Expr::Path(LocationPath {
                absolute: true,
                steps: vec![
                    Step::new(Axis::Child, NodeTest::Name("root".into())),
                    Step::new(Axis::Child, NodeTest::Name("a".into())),
                ],
            })
        );
    }

    #[test]
    fn expands_double_slash() {
        let Expr::Path(path) = parse("//v") else {
            panic!("expected a location path");
        };
        assert!(path.absolute);
        assert_eq!(path.steps[0], Step::descendant_or_self());
        assert_eq!(path.steps[1], Step::new(Axis::Child, NodeTest::Name("v".into())));
    }

    #[test]
    fn parses_predicates_and_comparisons() {
        let Expr::Path(path) = parse("a[@index = '1'][2]") else {
            panic!("expected a location path");
        };
        let step = &path.steps[0];
        assert_eq!(step.predicates.len(), 2);
        assert!(matches!(
            &step.predicates[0],
            Expr::Comparison { operator: ComparisonOp::Equal, .. }
        ));
        assert_eq!(step.predicates[1], Expr::Number(2.0));
    }

    #[test]
    fn parses_unions_and_explicit_axes() {
        let expr = parse("a | ancestor-or-self::*");
        let Expr::Union(parts) = expr else {
            panic!("expected a union");
        };
        assert_eq!(parts.len(), 2);
        assert_eq!(
            parts[1],
            Expr::Path(LocationPath {
                absolute: false,
                steps: vec![Step::new(Axis::AncestorOrSelf, NodeTest::Wildcard)],
            })
        );
    }

    #[test]
    fn and_binds_tighter_than_or() {
        let expr = parse("a or b and c");
        let Expr::Or(_, right) = expr else {
            panic!("expected or at the top");
        };
        assert!(matches!(*right, Expr::And(_, _)));
    }

    #[test]
    fn reports_error_positions() {
        let err = PathParser::compile("/root/[1]").expect_err("missing step");
        assert!(matches!(err, QueryError::InvalidExpression { position: 6, .. }));

        let err = PathParser::compile("a]").expect_err("trailing bracket");
        assert!(matches!(err, QueryError::InvalidExpression { position: 1, .. }));

        let err = PathParser::compile("").expect_err("empty");
        assert!(matches!(err, QueryError::InvalidExpression { position: 0, .. }));
    }

    #[test]
    fn rejects_unknown_axes_and_functions() {
        assert!(matches!(
            PathParser::compile("sideways::a"),
            Err(QueryError::InvalidExpression { .. })
        ));
        assert!(matches!(
            PathParser::compile("a[frobnicate()]"),
            Err(QueryError::UnknownFunction { ref name }) if name == "frobnicate"
        ));
        assert!(matches!(
            PathParser::compile("a[count()]"),
            Err(QueryError::WrongArity { found: 0, .. })
        ));
    }

    #[test]
    fn attribute_steps_must_be_last() {
        assert!(PathParser::compile("a/@index").is_ok());
        assert!(PathParser::compile("a/@index/b").is_err());
        assert!(PathParser::compile("a/@index[1]").is_err());
    }
}
