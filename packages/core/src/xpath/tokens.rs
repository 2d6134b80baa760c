//! Token definitions for path expression lexical analysis

/// Tokens produced by the path expression tokenizer
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    // Structural tokens
    /// Step separator (/)
    Slash,
    /// Descendant-or-self separator (//)
    DoubleSlash,
    /// Context node (.)
    Dot,
    /// Parent node (..)
    DoubleDot,
    /// Attribute axis abbreviation (@)
    At,
    /// Name wildcard (*)
    Star,
    /// Left bracket ([)
    LeftBracket,
    /// Right bracket (])
    RightBracket,
    /// Left parenthesis (()
    LeftParen,
    /// Right parenthesis ())
    RightParen,
    /// Argument separator (,)
    Comma,
    /// Union operator (|)
    Pipe,
    /// Axis separator (::)
    ColonColon,

    // Operators
    /// Equality (=)
    Equal,
    /// Inequality (!=)
    NotEqual,
    /// Less than (<)
    Less,
    /// Less than or equal (<=)
    LessEq,
    /// Greater than (>)
    Greater,
    /// Greater than or equal (>=)
    GreaterEq,
    /// Unary minus (-)
    Minus,

    // Literals
    /// Quoted string literal
    Literal(String),
    /// Numeric literal
    Number(f64),

    /// Element name, axis name, function name or `and`/`or`
    Name(String),

    /// End of input
    EOF,
}

impl Token {
    /// Check if token is a comparison operator
    #[inline]
    #[must_use]
    pub fn is_comparison_operator(&self) -> bool {
        matches!(
            self,
            Token::Equal
                | Token::NotEqual
                | Token::Less
                | Token::LessEq
                | Token::Greater
                | Token::GreaterEq
        )
    }

    /// Check if token can start a location step
    #[inline]
    #[must_use]
    pub fn starts_step(&self) -> bool {
        matches!(
            self,
            Token::Name(_) | Token::Star | Token::At | Token::Dot | Token::DoubleDot
        )
    }

    /// Get string representation for error messages
    #[must_use]
    pub fn as_debug_str(&self) -> &str {
        match self {
            Token::Slash => "/",
            Token::DoubleSlash => "//",
            Token::Dot => ".",
            Token::DoubleDot => "..",
            Token::At => "@",
            Token::Star => "*",
            Token::LeftBracket => "[",
            Token::RightBracket => "]",
            Token::LeftParen => "(",
            Token::RightParen => ")",
            Token::Comma => ",",
            Token::Pipe => "|",
            Token::ColonColon => "::",
            Token::Equal => "=",
            Token::NotEqual => "!=",
            Token::Less => "<",
            Token::LessEq => "<=",
            Token::Greater => ">",
            Token::GreaterEq => ">=",
            Token::Minus => "-",
            Token::Literal(_) => "string literal",
            Token::Number(_) => "number",
            Token::Name(name) => name,
            Token::EOF => "end of expression",
        }
    }
}

/// Token paired with the character offset where it starts
#[derive(Debug, Clone, PartialEq)]
pub struct Spanned {
    pub token: Token,
    pub position: usize,
}
