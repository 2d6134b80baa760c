//! # jsonquery core
//!
//! Encodes dynamic values into attributed element trees, selects nodes from
//! those trees with path expressions, and decodes the selected nodes back
//! into values.
//!
//! ## Layers
//!
//! - [`value`]: the dynamic value model and its `serde_json` bridge
//! - [`tree`]: arena-backed element tree with string attributes and text
//! - [`codec`]: the encoder, the decoder and the optional array fallback
//! - [`xpath`]: the built-in path engine and the [`QueryEngine`] seam
//! - [`selection`]: a tree bundled with the nodes a query selected from it
//!
//! ```rust
//! use jsonquery_core::prelude::*;
//!
//! let document: Value = [
//!     ("title", Value::from("report")),
//!     ("values", Value::from(vec![1.5, 2.5])),
//! ]
//! .into_iter()
//! .collect();
//!
//! let tree = to_tree(&document).expect("document encodes");
//! let config = CodecConfig::default();
//! let mut selection = Selection::run(tree, &PathEngine::new(), "//values")
//!     .expect("valid path");
//! let value = selection.decode(&Decoder::new(&config));
//!
//! assert_eq!(value, Value::from(vec![1.5, 2.5]));
//! ```

#![deny(unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]

pub mod codec;
pub mod config;
pub mod error;
pub mod selection;
pub mod tree;
pub mod value;
pub mod xpath;

pub mod prelude;

pub use crate::prelude::*;
