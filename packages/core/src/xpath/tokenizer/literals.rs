//! String and number literal tokenization

use super::core::Tokenizer;
use crate::error::{QueryResult, invalid_expression_error};
use crate::xpath::tokens::Token;

/// Parse a quoted string literal; there are no escape sequences, the other
/// quote character may appear freely inside
pub(crate) fn parse_string_literal(
    tokenizer: &mut Tokenizer,
    chars: &[char],
    i: usize,
) -> QueryResult<usize> {
    let quote = chars[i];
    let Some(length) = chars[i + 1..].iter().position(|&c| c == quote) else {
        return Err(invalid_expression_error(
            &tokenizer.input,
            "unterminated string literal",
            Some(i),
        ));
    };

    let end = i + 1 + length;
    let literal: String = chars[i + 1..end].iter().collect();
    tokenizer.push(Token::Literal(literal), i);
    Ok(end)
}

/// Parse an unsigned number literal (`12`, `3.5`, `.5`)
pub(crate) fn parse_number_literal(
    tokenizer: &mut Tokenizer,
    chars: &[char],
    i: usize,
) -> QueryResult<usize> {
    let start = i;
    let mut end = i;
    let mut seen_dot = false;

    while end < chars.len() {
        match chars[end] {
            c if c.is_ascii_digit() => {}
            '.' if !seen_dot && chars.get(end + 1) != Some(&'.') => seen_dot = true,
            _ => break,
        }
        end += 1;
    }

    let text: String = chars[start..end].iter().collect();
    let number = text.parse::<f64>().map_err(|_| {
        invalid_expression_error(
            &tokenizer.input,
            &format!("invalid number literal '{text}'"),
            Some(start),
        )
    })?;

    tokenizer.push(Token::Number(number), start);
    Ok(end - 1)
}
