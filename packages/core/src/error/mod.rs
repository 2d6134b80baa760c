//! Codec and query error handling
//!
//! Encoding failures are fatal and reported through [`ConversionError`].
//! Path expression failures are reported through [`QueryError`]. Decoding never
//! fails; missing metadata falls back to permissive defaults instead.

pub mod constructors;
mod types;

pub use constructors::{
    invalid_expression_error, not_a_node_set_error, unknown_node_error, unsupported_value_error,
};
pub use types::{CodecResult, ConversionError, QueryError, QueryResult};
