//! Punctuation and name tokenization

use super::core::Tokenizer;
use crate::config::validation::is_name_char;
use crate::error::{QueryResult, invalid_expression_error};
use crate::xpath::tokens::Token;

/// Parse punctuation tokens and names
pub(crate) fn parse_character_token(
    tokenizer: &mut Tokenizer,
    chars: &[char],
    i: usize,
) -> QueryResult<usize> {
    let next = chars.get(i + 1).copied();
    match chars[i] {
        '/' if next == Some('/') => {
            tokenizer.push(Token::DoubleSlash, i);
            Ok(i + 1)
        }
        '/' => {
            tokenizer.push(Token::Slash, i);
            Ok(i)
        }
        '.' if next == Some('.') => {
            tokenizer.push(Token::DoubleDot, i);
            Ok(i + 1)
        }
        '.' => {
            tokenizer.push(Token::Dot, i);
            Ok(i)
        }
        ':' if next == Some(':') => {
            tokenizer.push(Token::ColonColon, i);
            Ok(i + 1)
        }
        '@' => {
            tokenizer.push(Token::At, i);
            Ok(i)
        }
        '*' => {
            tokenizer.push(Token::Star, i);
            Ok(i)
        }
        '[' => {
            tokenizer.push(Token::LeftBracket, i);
            Ok(i)
        }
        ']' => {
            tokenizer.push(Token::RightBracket, i);
            Ok(i)
        }
        '(' => {
            tokenizer.push(Token::LeftParen, i);
            Ok(i)
        }
        ')' => {
            tokenizer.push(Token::RightParen, i);
            Ok(i)
        }
        ',' => {
            tokenizer.push(Token::Comma, i);
            Ok(i)
        }
        c if c.is_alphabetic() || c == '_' => Ok(parse_name(tokenizer, chars, i)),
        c => Err(invalid_expression_error(
            &tokenizer.input,
            &format!("unexpected character '{c}'"),
            Some(i),
        )),
    }
}

/// Parse a name; a trailing `.` that starts `..` is left for the next token
fn parse_name(tokenizer: &mut Tokenizer, chars: &[char], start: usize) -> usize {
    let mut end = start + 1;
    while end < chars.len() && is_name_char(chars[end]) {
        if chars[end] == '.' && chars.get(end + 1) == Some(&'.') {
            break;
        }
        end += 1;
    }

    let name: String = chars[start..end].iter().collect();
    tokenizer.push(Token::Name(name), start);
    end - 1
}
