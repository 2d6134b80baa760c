//! Operator and primary expression parsing

use super::PathParser;
use crate::error::QueryResult;
use crate::xpath::ast::{ComparisonOp, Expr};
use crate::xpath::evaluator::functions;
use crate::xpath::tokens::Token;

impl PathParser<'_> {
    pub(crate) fn parse_expression(&mut self) -> QueryResult<Expr> {
        self.parse_or()
    }

    fn parse_or(&mut self) -> QueryResult<Expr> {
        let mut left = self.parse_and()?;
        while self.peek_keyword("or") {
            self.consume_token();
            let right = self.parse_and()?;
            left = Expr::Or(Box::new(left), Box::new(right));
        }
        Ok(left)
    }

    fn parse_and(&mut self) -> QueryResult<Expr> {
        let mut left = self.parse_equality()?;
        while self.peek_keyword("and") {
            self.consume_token();
            let right = self.parse_equality()?;
            left = Expr::And(Box::new(left), Box::new(right));
        }
        Ok(left)
    }

    fn parse_equality(&mut self) -> QueryResult<Expr> {
        let mut left = self.parse_relational()?;
        loop {
            let operator = match self.peek_token() {
                Some(Token::Equal) => ComparisonOp::Equal,
                Some(Token::NotEqual) => ComparisonOp::NotEqual,
                _ => break,
            };
            self.consume_token();
            let right = self.parse_relational()?;
            left = Expr::Comparison {
                left: Box::new(left),
                operator,
                right: Box::new(right),
            };
        }
        Ok(left)
    }

    fn parse_relational(&mut self) -> QueryResult<Expr> {
        let mut left = self.parse_unary()?;
        loop {
            let operator = match self.peek_token() {
                Some(Token::Less) => ComparisonOp::Less,
                Some(Token::LessEq) => ComparisonOp::LessEq,
                Some(Token::Greater) => ComparisonOp::Greater,
                Some(Token::GreaterEq) => ComparisonOp::GreaterEq,
                _ => break,
            };
            self.consume_token();
            let right = self.parse_unary()?;
            left = Expr::Comparison {
                left: Box::new(left),
                operator,
                right: Box::new(right),
            };
        }
        Ok(left)
    }

    fn parse_unary(&mut self) -> QueryResult<Expr> {
        if matches!(self.peek_token(), Some(Token::Minus)) {
            self.consume_token();
            let operand = self.parse_unary()?;
            return Ok(Expr::Negate(Box::new(operand)));
        }
        self.parse_union()
    }

    fn parse_union(&mut self) -> QueryResult<Expr> {
        let first = self.parse_path_expression()?;
        if !matches!(self.peek_token(), Some(Token::Pipe)) {
            return Ok(first);
        }

        let mut members = vec![first];
        while matches!(self.peek_token(), Some(Token::Pipe)) {
            self.consume_token();
            members.push(self.parse_path_expression()?);
        }
        Ok(Expr::Union(members))
    }

    /// Location path, or a primary expression with optional predicates and steps
    fn parse_path_expression(&mut self) -> QueryResult<Expr> {
        match self.peek_token() {
            Some(Token::Slash | Token::DoubleSlash) => {
                Ok(Expr::Path(self.parse_location_path()?))
            }
            Some(Token::Literal(_) | Token::Number(_) | Token::LeftParen) => {
                self.parse_filter_expression()
            }
            Some(Token::Name(name))
                if name != "node" && matches!(self.peek_nth(1), Some(Token::LeftParen)) =>
            {
                self.parse_filter_expression()
            }
            Some(token) if token.starts_step() => Ok(Expr::Path(self.parse_location_path()?)),
            Some(Token::EOF) | None => Err(self.error("unexpected end of expression")),
            Some(token) => {
                let message = format!("unexpected token '{}'", token.as_debug_str());
                Err(self.error(&message))
            }
        }
    }

    fn parse_filter_expression(&mut self) -> QueryResult<Expr> {
        let base = self.parse_primary()?;
        let predicates = self.parse_predicates()?;

        let mut steps = Vec::new();
        if matches!(self.peek_token(), Some(Token::Slash | Token::DoubleSlash)) {
            self.parse_trailing_steps(&mut steps)?;
        }

        if predicates.is_empty() && steps.is_empty() {
            return Ok(base);
        }
        Ok(Expr::Filter {
            base: Box::new(base),
            predicates,
            steps,
        })
    }

    fn parse_primary(&mut self) -> QueryResult<Expr> {
        match self.consume_token() {
            Some(Token::Literal(text)) => Ok(Expr::Literal(text)),
            Some(Token::Number(number)) => Ok(Expr::Number(number)),
            Some(Token::LeftParen) => {
                let inner = self.parse_expression()?;
                self.expect_token(&Token::RightParen)?;
                Ok(inner)
            }
            Some(Token::Name(name)) => self.parse_function_call(name),
            _ => Err(self.error("expected a primary expression")),
        }
    }

    /// Parse the argument list of `name(`; the name is already consumed
    fn parse_function_call(&mut self, name: String) -> QueryResult<Expr> {
        self.expect_token(&Token::LeftParen)?;

        let mut args = Vec::new();
        if matches!(self.peek_token(), Some(Token::RightParen)) {
            self.consume_token();
        } else {
            loop {
                args.push(self.parse_expression()?);
                match self.peek_token() {
                    Some(Token::Comma) => {
                        self.consume_token();
                    }
                    Some(Token::RightParen) => {
                        self.consume_token();
                        break;
                    }
                    _ => return Err(self.error("expected ',' or ')' in argument list")),
                }
            }
        }

        functions::check_call(&name, args.len())?;
        Ok(Expr::Function { name, args })
    }

    fn peek_keyword(&self, keyword: &str) -> bool {
        matches!(self.peek_token(), Some(Token::Name(name)) if name == keyword)
    }
}
