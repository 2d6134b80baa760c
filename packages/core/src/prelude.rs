//! Types most callers need to encode, query and decode

pub use crate::codec::{
    ArrayFallback, Decoder, Encoder, MatrixFallback, NoFallback, decode, to_tree,
};
pub use crate::config::{CodecConfig, ConfigurationError, DecodeMode, Validator};
pub use crate::error::{CodecResult, ConversionError, QueryError, QueryResult};
pub use crate::selection::Selection;
pub use crate::tree::{NodeId, NodeKind, NodeRef, Tree};
pub use crate::value::{Callable, Composite, EnumerableFields, FieldLayout, Mapping, Opaque, Value};
pub use crate::xpath::{CompiledPath, PathEngine, PathValue, QueryEngine};
