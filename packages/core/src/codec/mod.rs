//! Bidirectional value/tree codec
//!
//! The [`Encoder`] turns a [`Value`](crate::value::Value) into an attributed
//! tree; the [`Decoder`] turns any node sequence selected from such a tree
//! back into a value. Shape, type and list order survive the trip through the
//! `datatype`, `list_member` and `index` attributes defined in [`attributes`].

pub mod attributes;
mod decoder;
mod encoder;
mod fallback;

pub use decoder::Decoder;
pub use encoder::Encoder;
pub use fallback::{ArrayFallback, MatrixFallback, NoFallback};

use crate::config::CodecConfig;
use crate::error::CodecResult;
use crate::tree::{NodeId, Tree};
use crate::value::Value;

/// Encode a whole document with the default configuration
///
/// # Errors
///
/// Returns a `ConversionError` when the document is not a mapping or contains
/// a value with no enumerable structure.
pub fn to_tree(document: &Value) -> CodecResult<Tree> {
    Encoder::new(&CodecConfig::default()).encode_document(document)
}

/// Decode a node sequence with the default configuration and no array fallback
pub fn decode(tree: &mut Tree, nodes: &[NodeId]) -> Value {
    Decoder::new(&CodecConfig::default()).decode(tree, nodes)
}
