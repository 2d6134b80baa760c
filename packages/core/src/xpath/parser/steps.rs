//! Location path and step parsing

use super::PathParser;
use crate::error::QueryResult;
use crate::xpath::ast::{Axis, Expr, LocationPath, NodeTest, Step};
use crate::xpath::tokens::Token;

impl PathParser<'_> {
    pub(crate) fn parse_location_path(&mut self) -> QueryResult<LocationPath> {
        let mut steps = Vec::new();

        let absolute = match self.peek_token() {
            Some(Token::Slash) => {
                self.consume_token();
                if !self.peek_token().is_some_and(Token::starts_step) {
                    // Bare `/` selects the document node
                    return Ok(LocationPath {
                        absolute: true,
                        steps,
                    });
                }
                true
            }
            Some(Token::DoubleSlash) => {
                self.consume_token();
                steps.push(Step::descendant_or_self());
                true
            }
            _ => false,
        };

        steps.push(self.parse_step()?);
        self.parse_trailing_steps(&mut steps)?;
        Ok(LocationPath { absolute, steps })
    }

    /// Parse `/step` and `//step` continuations
    pub(crate) fn parse_trailing_steps(&mut self, steps: &mut Vec<Step>) -> QueryResult<()> {
        loop {
            match self.peek_token() {
                Some(Token::Slash) => {
                    self.consume_token();
                }
                Some(Token::DoubleSlash) => {
                    self.consume_token();
                    steps.push(Step::descendant_or_self());
                }
                _ => return Ok(()),
            }

            if steps.last().is_some_and(|step| step.axis == Axis::Attribute) {
                return Err(self.error("attribute steps must end the path"));
            }
            steps.push(self.parse_step()?);
        }
    }

    fn parse_step(&mut self) -> QueryResult<Step> {
        match self.peek_token() {
            Some(Token::Dot) => {
                self.consume_token();
                return Ok(Step::new(Axis::SelfNode, NodeTest::Node));
            }
            Some(Token::DoubleDot) => {
                self.consume_token();
                return Ok(Step::new(Axis::Parent, NodeTest::Node));
            }
            _ => {}
        }

        let axis = self.parse_axis()?;
        let test = self.parse_node_test()?;
        let predicates = self.parse_predicates()?;

        if axis == Axis::Attribute && !predicates.is_empty() {
            return Err(self.error("predicates are not supported on attribute steps"));
        }

        Ok(Step {
            axis,
            test,
            predicates,
        })
    }

    fn parse_axis(&mut self) -> QueryResult<Axis> {
        if matches!(self.peek_token(), Some(Token::At)) {
            self.consume_token();
            return Ok(Axis::Attribute);
        }

        if let (Some(Token::Name(name)), Some(Token::ColonColon)) =
            (self.peek_token(), self.peek_nth(1))
        {
            let Some(axis) = Axis::from_name(name) else {
                let message = format!("unknown axis '{name}'");
                return Err(self.error(&message));
            };
            self.consume_token();
            self.consume_token();
            return Ok(axis);
        }

        Ok(Axis::Child)
    }

    fn parse_node_test(&mut self) -> QueryResult<NodeTest> {
        match self.peek_token() {
            Some(Token::Star) => {
                self.consume_token();
                Ok(NodeTest::Wildcard)
            }
            Some(Token::Name(name))
                if name == "node" && matches!(self.peek_nth(1), Some(Token::LeftParen)) =>
            {
                self.consume_token();
                self.consume_token();
                self.expect_token(&Token::RightParen)?;
                Ok(NodeTest::Node)
            }
            Some(Token::Name(_)) => match self.consume_token() {
                Some(Token::Name(name)) => Ok(NodeTest::Name(name)),
                _ => Err(self.error("expected a name")),
            },
            _ => Err(self.error("expected a node test")),
        }
    }

    pub(crate) fn parse_predicates(&mut self) -> QueryResult<Vec<Expr>> {
        let mut predicates = Vec::new();
        while matches!(self.peek_token(), Some(Token::LeftBracket)) {
            self.consume_token();
            if matches!(self.peek_token(), Some(Token::RightBracket)) {
                return Err(self.error("empty predicate"));
            }
            predicates.push(self.parse_expression()?);
            self.expect_token(&Token::RightBracket)?;
        }
        Ok(predicates)
    }
}
