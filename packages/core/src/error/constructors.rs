//! Error construction helpers shared by the encoder and the path engine.

use super::types::{ConversionError, QueryError};

/// Build an `InvalidExpression` error for a path expression
///
/// `position` is the character offset in `expression`; `None` points past the end.
#[must_use]
pub fn invalid_expression_error(
    expression: &str,
    message: &str,
    position: Option<usize>,
) -> QueryError {
    QueryError::InvalidExpression {
        expression: expression.to_string(),
        message: message.to_string(),
        position: position.unwrap_or_else(|| expression.chars().count()),
    }
}

/// Build a `NotANodeSet` error for an expression that evaluated to a scalar
#[must_use]
pub fn not_a_node_set_error(expression: &str, message: &str) -> QueryError {
    QueryError::NotANodeSet {
        expression: expression.to_string(),
        message: message.to_string(),
    }
}

/// Build an `UnknownNode` error for an id outside a tree of `size` nodes
#[must_use]
pub fn unknown_node_error(node: usize, size: usize) -> QueryError {
    QueryError::UnknownNode { node, size }
}

/// Build an `Unsupported` conversion error from a type name and string form
pub fn unsupported_value_error(
    type_name: impl Into<String>,
    repr: impl Into<String>,
) -> ConversionError {
    ConversionError::Unsupported {
        type_name: type_name.into(),
        repr: repr.into(),
    }
}
