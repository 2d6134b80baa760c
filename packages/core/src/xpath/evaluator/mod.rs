//! Evaluation of compiled path expressions against a tree

mod axes;
mod compare;
pub(crate) mod functions;

use crate::error::{QueryResult, not_a_node_set_error};
use crate::tree::{NodeId, Tree};
use crate::xpath::ast::{Axis, Expr, LocationPath, Step};

pub(crate) use compare::{number_to_text, text_to_number};

/// Result of evaluating a path expression
#[derive(Debug, Clone, PartialEq)]
pub enum PathValue {
    /// Element or document nodes in document order without duplicates
    Nodes(Vec<NodeId>),
    /// Attribute values selected by a trailing `@name` step
    Attributes(Vec<String>),
    Number(f64),
    Boolean(bool),
    Text(String),
}

impl PathValue {
    /// Short kind name used in error messages
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            PathValue::Nodes(_) => "node-set",
            PathValue::Attributes(_) => "attribute set",
            PathValue::Number(_) => "number",
            PathValue::Boolean(_) => "boolean",
            PathValue::Text(_) => "string",
        }
    }
}

/// Dynamic evaluation context
#[derive(Debug, Clone, Copy)]
pub(crate) struct Context {
    pub(crate) node: NodeId,
    pub(crate) position: usize,
    pub(crate) size: usize,
}

impl Context {
    pub(crate) fn single(node: NodeId) -> Self {
        Self {
            node,
            position: 1,
            size: 1,
        }
    }
}

pub(crate) struct Evaluator<'t> {
    pub(crate) tree: &'t Tree,
    pub(crate) expression: &'t str,
    ranks: Vec<usize>,
}

impl<'t> Evaluator<'t> {
    pub(crate) fn new(tree: &'t Tree, expression: &'t str) -> Self {
        Self {
            tree,
            expression,
            ranks: tree.document_order(),
        }
    }

    pub(crate) fn evaluate(&self, expr: &Expr, ctx: Context) -> QueryResult<PathValue> {
        match expr {
            Expr::Path(path) => self.evaluate_location_path(path, ctx),
            Expr::Filter {
                base,
                predicates,
                steps,
            } => {
                let mut nodes = self.node_set(base, ctx, "filtered expression")?;
                for predicate in predicates {
                    nodes = self.filter(nodes, predicate)?;
                }
                self.apply_steps(nodes, steps)
            }
            Expr::Union(members) => {
                let mut nodes = Vec::new();
                for member in members {
                    nodes.extend(self.node_set(member, ctx, "union operand")?);
                }
                Ok(PathValue::Nodes(self.in_document_order(nodes)))
            }
            Expr::Or(left, right) => Ok(PathValue::Boolean(
                self.boolean(left, ctx)? || self.boolean(right, ctx)?,
            )),
            Expr::And(left, right) => Ok(PathValue::Boolean(
                self.boolean(left, ctx)? && self.boolean(right, ctx)?,
            )),
            Expr::Comparison {
                left,
                operator,
                right,
            } => {
                let left = self.evaluate(left, ctx)?;
                let right = self.evaluate(right, ctx)?;
                Ok(PathValue::Boolean(self.compare(&left, *operator, &right)))
            }
            Expr::Negate(operand) => {
                let value = self.evaluate(operand, ctx)?;
                Ok(PathValue::Number(-self.to_number(&value)))
            }
            Expr::Literal(text) => Ok(PathValue::Text(text.clone())),
            Expr::Number(number) => Ok(PathValue::Number(*number)),
            Expr::Function { name, args } => self.call_function(name, args, ctx),
        }
    }

    fn evaluate_location_path(
        &self,
        path: &LocationPath,
        ctx: Context,
    ) -> QueryResult<PathValue> {
        let start = if path.absolute {
            self.tree.document()
        } else {
            ctx.node
        };
        self.apply_steps(vec![start], &path.steps)
    }

    fn apply_steps(&self, mut nodes: Vec<NodeId>, steps: &[Step]) -> QueryResult<PathValue> {
        for step in steps {
            if step.axis == Axis::Attribute {
                let values = nodes
                    .iter()
                    .flat_map(|&node| axes::attribute_values(self.tree, node, &step.test))
                    .collect();
                return Ok(PathValue::Attributes(values));
            }

            let mut selected = Vec::new();
            for &node in &nodes {
                let mut candidates: Vec<NodeId> = axes::axis_nodes(self.tree, node, step.axis)
                    .into_iter()
                    .filter(|&candidate| axes::matches_test(self.tree, candidate, &step.test))
                    .collect();
                for predicate in &step.predicates {
                    candidates = self.filter(candidates, predicate)?;
                }
                selected.extend(candidates);
            }
            nodes = self.in_document_order(selected);
        }
        Ok(PathValue::Nodes(nodes))
    }

    /// Keep the nodes for which `predicate` holds, numbering them in the given order
    fn filter(&self, nodes: Vec<NodeId>, predicate: &Expr) -> QueryResult<Vec<NodeId>> {
        let size = nodes.len();
        let mut kept = Vec::with_capacity(size);
        for (offset, node) in nodes.into_iter().enumerate() {
            let ctx = Context {
                node,
                position: offset + 1,
                size,
            };
            let keep = match self.evaluate(predicate, ctx)? {
                #[allow(clippy::cast_precision_loss)]
                PathValue::Number(number) => number == ctx.position as f64,
                other => self.to_boolean(&other),
            };
            if keep {
                kept.push(node);
            }
        }
        Ok(kept)
    }

    pub(crate) fn node_set(
        &self,
        expr: &Expr,
        ctx: Context,
        role: &str,
    ) -> QueryResult<Vec<NodeId>> {
        match self.evaluate(expr, ctx)? {
            PathValue::Nodes(nodes) => Ok(nodes),
            other => Err(not_a_node_set_error(
                self.expression,
                &format!("{role} evaluates to a {}", other.kind()),
            )),
        }
    }

    fn boolean(&self, expr: &Expr, ctx: Context) -> QueryResult<bool> {
        let value = self.evaluate(expr, ctx)?;
        Ok(self.to_boolean(&value))
    }

    /// Sort by document order and drop duplicates
    pub(crate) fn in_document_order(&self, mut nodes: Vec<NodeId>) -> Vec<NodeId> {
        nodes.sort_by_key(|node| self.ranks[node.index()]);
        nodes.dedup();
        nodes
    }

    pub(crate) fn to_boolean(&self, value: &PathValue) -> bool {
        match value {
            PathValue::Nodes(nodes) => !nodes.is_empty(),
            PathValue::Attributes(values) => !values.is_empty(),
            PathValue::Number(number) => *number != 0.0 && !number.is_nan(),
            PathValue::Boolean(flag) => *flag,
            PathValue::Text(text) => !text.is_empty(),
        }
    }

    pub(crate) fn to_text(&self, value: &PathValue) -> String {
        match value {
            PathValue::Nodes(nodes) => nodes
                .first()
                .map(|&node| self.tree.string_value(node))
                .unwrap_or_default(),
            PathValue::Attributes(values) => values.first().cloned().unwrap_or_default(),
            PathValue::Number(number) => number_to_text(*number),
            PathValue::Boolean(flag) => flag.to_string(),
            PathValue::Text(text) => text.clone(),
        }
    }

    pub(crate) fn to_number(&self, value: &PathValue) -> f64 {
        match value {
            PathValue::Number(number) => *number,
            PathValue::Boolean(flag) => f64::from(u8::from(*flag)),
            other => text_to_number(&self.to_text(other)),
        }
    }

    /// String values of a node-like result, `None` for scalars
    pub(crate) fn member_texts(&self, value: &PathValue) -> Option<Vec<String>> {
        match value {
            PathValue::Nodes(nodes) => Some(
                nodes
                    .iter()
                    .map(|&node| self.tree.string_value(node))
                    .collect(),
            ),
            PathValue::Attributes(values) => Some(values.clone()),
            _ => None,
        }
    }
}
