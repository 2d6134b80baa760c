//! Error types for encoding values and evaluating path expressions.

/// Result type for encoding operations
pub type CodecResult<T> = Result<T, ConversionError>;

/// Result type for path compilation and evaluation
pub type QueryResult<T> = Result<T, QueryError>;

/// Raised when a value cannot be represented as an attributed tree
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConversionError {
    #[error("Object of type '{type_name}' ({repr}) cannot be converted to a tree")]
    Unsupported { type_name: String, repr: String },

    #[error("Value nesting exceeds the configured maximum depth of {max_depth}")]
    DepthExceeded { max_depth: usize },

    #[error("Document root must be a mapping or a composite value, found '{type_name}'")]
    NotAMapping { type_name: String },
}

impl ConversionError {
    /// Name of the runtime type that could not be converted, when known
    #[must_use]
    pub fn type_name(&self) -> Option<&str> {
        match self {
            Self::Unsupported { type_name, .. } | Self::NotAMapping { type_name } => {
                Some(type_name)
            }
            Self::DepthExceeded { .. } => None,
        }
    }
}

/// Path expression errors with the offending expression attached
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum QueryError {
    #[error("Invalid path expression '{expression}' at position {position}: {message}")]
    InvalidExpression {
        expression: String,
        message: String,
        position: usize,
    },

    #[error("Path expression '{expression}' does not select nodes: {message}")]
    NotANodeSet { expression: String, message: String },

    #[error("Unknown function '{name}' in path expression")]
    UnknownFunction { name: String },

    #[error("Function '{name}' expects {expected} argument(s), found {found}")]
    WrongArity {
        name: String,
        expected: String,
        found: usize,
    },

    #[error("Node {node} is not part of the queried tree ({size} nodes)")]
    UnknownNode { node: usize, size: usize },
}
