//! Core tokenizer state and dispatch loop

use std::collections::VecDeque;

use crate::error::QueryResult;
use crate::xpath::tokens::{Spanned, Token};

/// Splits a path expression into tokens
pub struct Tokenizer {
    pub(crate) input: String,
    pub(crate) tokens: VecDeque<Spanned>,
}

impl Tokenizer {
    #[inline]
    #[must_use]
    pub fn new(input: &str) -> Self {
        Self {
            input: input.to_string(),
            tokens: VecDeque::new(),
        }
    }

    /// Tokenize the whole input, terminating the sequence with `Token::EOF`
    ///
    /// # Errors
    ///
    /// Returns `QueryError::InvalidExpression` for unexpected characters and
    /// unterminated literals.
    pub fn tokenize(mut self) -> QueryResult<VecDeque<Spanned>> {
        use super::{characters, literals, operators};

        let chars: Vec<char> = self.input.chars().collect();
        let mut i = 0;

        while i < chars.len() {
            match chars[i] {
                ' ' | '\t' | '\n' | '\r' => {
                    // Skip whitespace
                }
                '\'' | '"' => {
                    i = literals::parse_string_literal(&mut self, &chars, i)?;
                }
                c if c.is_ascii_digit() => {
                    i = literals::parse_number_literal(&mut self, &chars, i)?;
                }
                '.' if chars.get(i + 1).is_some_and(char::is_ascii_digit) => {
                    i = literals::parse_number_literal(&mut self, &chars, i)?;
                }
                '=' | '!' | '<' | '>' | '|' | '-' => {
                    i = operators::parse_operator(&mut self, &chars, i)?;
                }
                _ => {
                    i = characters::parse_character_token(&mut self, &chars, i)?;
                }
            }
            i += 1;
        }

        self.push(Token::EOF, chars.len());
        Ok(self.tokens)
    }

    #[inline]
    pub(crate) fn push(&mut self, token: Token, position: usize) {
        self.tokens.push_back(Spanned { token, position });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(input: &str) -> Vec<Token> {
        Tokenizer::new(input)
            .tokenize()
            .expect("valid expression")
            .into_iter()
            .map(|spanned| spanned.token)
            .collect()
    }

    #[test]
    fn tokenizes_paths_and_predicates() {
        assert_eq!(
            tokens("//series/values[@index='1']"),
            vec![
                Token::DoubleSlash,
                Token::Name("series".into()),
                Token::Slash,
                Token::Name("values".into()),
                Token::LeftBracket,
                Token::At,
                Token::Name("index".into()),
                Token::Equal,
                Token::Literal("1".into()),
                Token::RightBracket,
                Token::EOF,
            ]
        );
    }

    #[test]
    fn names_keep_dashes_dots_and_underscores() {
        assert_eq!(
            tokens("following-sibling::list_member.x"),
            vec![
                Token::Name("following-sibling".into()),
                Token::ColonColon,
                Token::Name("list_member.x".into()),
                Token::EOF,
            ]
        );
    }

    #[test]
    fn numbers_and_minus() {
        assert_eq!(
            tokens("-2.5 != .5"),
            vec![
                Token::Minus,
                Token::Number(2.5),
                Token::NotEqual,
                Token::Number(0.5),
                Token::EOF,
            ]
        );
    }

    #[test]
    fn rejects_unterminated_literals() {
        assert!(Tokenizer::new("a[@x='1]").tokenize().is_err());
    }

    #[test]
    fn records_token_positions() {
        let spanned = Tokenizer::new("a / b").tokenize().expect("valid expression");
        let positions: Vec<usize> = spanned.iter().map(|s| s.position).collect();
        assert_eq!(positions, [0, 2, 4, 5]);
    }
}
