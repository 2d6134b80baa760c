//! Operator tokenization

use super::core::Tokenizer;
use crate::error::{QueryResult, invalid_expression_error};
use crate::xpath::tokens::Token;

/// Parse comparison, union and minus operators
pub(crate) fn parse_operator(
    tokenizer: &mut Tokenizer,
    chars: &[char],
    i: usize,
) -> QueryResult<usize> {
    let next = chars.get(i + 1).copied();
    let (token, consumed) = match (chars[i], next) {
        ('=', _) => (Token::Equal, 1),
        ('!', Some('=')) => (Token::NotEqual, 2),
        ('<', Some('=')) => (Token::LessEq, 2),
        ('<', _) => (Token::Less, 1),
        ('>', Some('=')) => (Token::GreaterEq, 2),
        ('>', _) => (Token::Greater, 1),
        ('|', _) => (Token::Pipe, 1),
        ('-', _) => (Token::Minus, 1),
        ('!', _) => {
            return Err(invalid_expression_error(
                &tokenizer.input,
                "'!' must be followed by '='",
                Some(i),
            ));
        }
        (c, _) => {
            return Err(invalid_expression_error(
                &tokenizer.input,
                &format!("unexpected operator character '{c}'"),
                Some(i),
            ));
        }
    };

    tokenizer.push(token, i);
    Ok(i + consumed - 1)
}
