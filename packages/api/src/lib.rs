//! # jsonquery
//!
//! Query JSON documents with path expressions. Documents are encoded into an
//! attributed element tree that records each value's type, list membership
//! and list position, the path selects nodes from that tree, and the selected
//! nodes are decoded back into a [`Value`].
//!
//! ```rust
//! use jsonquery::{Value, query_json};
//!
//! let readings = query_json(r#"{"site": {"flow": [1.5, 2.5]}}"#, "//flow")
//!     .expect("valid document and path");
//! assert_eq!(readings, Value::from(vec![1.5, 2.5]));
//! ```
//!
//! The [`JsonQuery`] builder exposes the same cycle with a configurable
//! codec, engine and array fallback.

#![deny(unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]

pub mod builder;
pub mod error;
pub mod source;

use std::io::Read;
use std::path::Path;

pub use builder::{JsonQuery, PathNotSet, PathSet};
pub use error::{JsonQueryError, Result};
pub use source::JsonSource;

// Re-export the codec types callers handle directly
pub use jsonquery_core::prelude::*;
pub use jsonquery_core::{codec, config, tree, value, xpath};

/// Encode a document into a tree with the default configuration
///
/// # Errors
///
/// Returns `JsonQueryError::Conversion` when the document is not a mapping or
/// holds a value with no tree form.
pub fn to_tree(document: &Value) -> Result<Tree> {
    Ok(jsonquery_core::codec::to_tree(document)?)
}

/// Encode `document` and select nodes with the built-in path engine
///
/// # Errors
///
/// Returns `JsonQueryError::Conversion` for unencodable documents and
/// `JsonQueryError::Query` for invalid paths.
pub fn query(document: &Value, path: &str) -> Result<Selection> {
    let tree = to_tree(document)?;
    Ok(Selection::run(tree, &PathEngine::new(), path)?)
}

/// Encode `document`, select nodes with `path` and decode them
///
/// A result holding a single tag collapses to that tag's value.
///
/// # Errors
///
/// Returns `JsonQueryError::Conversion` for unencodable documents and
/// `JsonQueryError::Query` for invalid paths.
pub fn query_as_value(document: &Value, path: &str) -> Result<Value> {
    let mut selection = query(document, path)?;
    let config = CodecConfig::default();
    Ok(selection.decode(&Decoder::new(&config)))
}

/// Parse JSON text and encode it
///
/// # Errors
///
/// Returns `JsonQueryError::Json` for malformed text and
/// `JsonQueryError::Conversion` for unencodable documents.
pub fn from_json_str(text: &str) -> Result<Tree> {
    JsonQuery::json(text).tree()
}

/// Read JSON from `reader` and encode it
///
/// # Errors
///
/// Returns `JsonQueryError::Json` for read failures or malformed text and
/// `JsonQueryError::Conversion` for unencodable documents.
pub fn from_json_reader<R: Read>(reader: R) -> Result<Tree> {
    let document = source::read_value(reader)?;
    to_tree(&document)
}

/// Read a JSON file and encode it
///
/// # Errors
///
/// Returns `JsonQueryError::Io` when the file cannot be read, plus the errors
/// of [`from_json_str`].
pub fn from_json_file(path: impl AsRef<Path>) -> Result<Tree> {
    JsonQuery::file(path.as_ref()).tree()
}

/// Query JSON text and decode the result
///
/// # Errors
///
/// See [`query_as_value`]; malformed text is `JsonQueryError::Json`.
pub fn query_json(text: &str, path: &str) -> Result<Value> {
    JsonQuery::json(text).path(path).value()
}

/// Query a JSON file and decode the result
///
/// # Errors
///
/// See [`query_json`]; unreadable files are `JsonQueryError::Io`.
pub fn query_json_file(file: impl AsRef<Path>, path: &str) -> Result<Value> {
    JsonQuery::file(file.as_ref()).path(path).value()
}

/// Query a document given as a value, JSON text or the path of a JSON file
///
/// Strings naming an existing file are read from disk; any other string is
/// parsed as JSON text.
///
/// # Errors
///
/// See [`query_json_file`].
pub fn query_source(source: impl Into<JsonSource>, path: &str) -> Result<Value> {
    JsonQuery::source(source).path(path).value()
}
