//! Compiled path expressions

use std::fmt;

use super::ast::Expr;
use super::evaluator::{Context, Evaluator, PathValue};
use crate::error::{QueryResult, not_a_node_set_error};
use crate::tree::{NodeId, Tree};

/// A parsed path expression that can be evaluated against any number of trees
#[derive(Debug, Clone, PartialEq)]
pub struct CompiledPath {
    expression: String,
    ast: Expr,
}

impl CompiledPath {
    pub(crate) fn new(expression: &str, ast: Expr) -> Self {
        Self {
            expression: expression.to_string(),
            ast,
        }
    }

    /// Source text of the expression
    #[inline]
    #[must_use]
    pub fn expression(&self) -> &str {
        &self.expression
    }

    #[inline]
    #[must_use]
    pub fn ast(&self) -> &Expr {
        &self.ast
    }

    /// Evaluate the expression
    ///
    /// Relative expressions start at the root element, or at the document
    /// node when the tree has no root element yet.
    ///
    /// # Errors
    ///
    /// Returns `QueryError::NotANodeSet` when a sub-expression that must
    /// select nodes evaluates to a scalar.
    pub fn evaluate(&self, tree: &Tree) -> QueryResult<PathValue> {
        let start = tree.root().unwrap_or_else(|| tree.document());
        Evaluator::new(tree, &self.expression).evaluate(&self.ast, Context::single(start))
    }

    /// Evaluate the expression and return the selected nodes in document order
    ///
    /// # Errors
    ///
    /// Returns `QueryError::NotANodeSet` when the expression evaluates to
    /// anything other than element or document nodes.
    pub fn select(&self, tree: &Tree) -> QueryResult<Vec<NodeId>> {
        match self.evaluate(tree)? {
            PathValue::Nodes(nodes) => {
                tracing::debug!(
                    target: "jsonquery::xpath",
                    expression = %self.expression,
                    selected = nodes.len(),
                    "path selection complete"
                );
                Ok(nodes)
            }
            other => Err(not_a_node_set_error(
                &self.expression,
                &format!("expression evaluates to a {}", other.kind()),
            )),
        }
    }
}

impl fmt::Display for CompiledPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.expression)
    }
}
