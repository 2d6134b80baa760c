//! Path queries over attributed trees
//!
//! A small XPath 1.0 subset evaluated against [`Tree`] element nodes. The
//! codec never depends on this module directly: callers pass any
//! [`QueryEngine`] to the selection layer, and [`PathEngine`] is the one the
//! crate ships.
//!
//! # Examples
//!
//! ```rust
//! use jsonquery_core::codec::to_tree;
//! use jsonquery_core::value::Value;
//! use jsonquery_core::xpath::{PathEngine, QueryEngine};
//!
//! let value: Value = [("a", Value::from(1)), ("b", Value::from("x"))]
//!     .into_iter()
//!     .collect();
//! let tree = to_tree(&value).expect("mapping encodes");
//!
//! let nodes = PathEngine::new().select(&tree, "/root/b").expect("valid path");
//! assert_eq!(nodes.len(), 1);
//! assert_eq!(tree.text(nodes[0]), Some("x"));
//! ```

pub mod ast;
mod compiled;
mod evaluator;
mod parser;
mod tokenizer;
pub mod tokens;

pub use compiled::CompiledPath;
pub use evaluator::PathValue;
pub use parser::PathParser;
pub use tokenizer::Tokenizer;

use crate::error::QueryResult;
use crate::tree::{NodeId, Tree};

/// Anything that can turn a path expression into an ordered node sequence
pub trait QueryEngine {
    /// Select nodes of `tree` matched by `path`, in document order
    ///
    /// # Errors
    ///
    /// Returns a `QueryError` for malformed expressions or expressions that
    /// do not select nodes.
    fn select(&self, tree: &Tree, path: &str) -> QueryResult<Vec<NodeId>>;
}

impl<F> QueryEngine for F
where
    F: Fn(&Tree, &str) -> QueryResult<Vec<NodeId>>,
{
    fn select(&self, tree: &Tree, path: &str) -> QueryResult<Vec<NodeId>> {
        self(tree, path)
    }
}

/// The built-in path engine
#[derive(Debug, Clone, Copy, Default)]
pub struct PathEngine;

impl PathEngine {
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Compile an expression for repeated evaluation
    ///
    /// # Errors
    ///
    /// See [`PathParser::compile`].
    pub fn compile(&self, path: &str) -> QueryResult<CompiledPath> {
        PathParser::compile(path)
    }
}

impl QueryEngine for PathEngine {
    fn select(&self, tree: &Tree, path: &str) -> QueryResult<Vec<NodeId>> {
        PathParser::compile(path)?.select(tree)
    }
}
