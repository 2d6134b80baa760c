//! Query results bundled with the tree they were selected from

use crate::codec::Decoder;
use crate::error::{QueryResult, unknown_node_error};
use crate::tree::{NodeId, NodeRef, Tree};
use crate::value::{Mapping, Value};
use crate::xpath::QueryEngine;

/// A tree together with the ordered nodes a path expression selected from it
///
/// Decoding takes `&mut self` because repeated tags are marked as list
/// members on the tree itself.
#[derive(Debug, Clone)]
pub struct Selection {
    tree: Tree,
    nodes: Vec<NodeId>,
}

impl Selection {
    /// Run `path` through `engine` against `tree`
    ///
    /// # Errors
    ///
    /// Propagates the engine's `QueryError`, and returns
    /// `QueryError::UnknownNode` when the engine hands back an id from
    /// outside `tree`.
    pub fn run(tree: Tree, engine: &dyn QueryEngine, path: &str) -> QueryResult<Self> {
        let nodes = engine.select(&tree, path)?;
        check_nodes(&tree, &nodes)?;
        tracing::debug!(
            target: "jsonquery::selection",
            path = %path,
            matched = nodes.len(),
            "query executed"
        );
        Ok(Self { tree, nodes })
    }

    /// Wrap nodes that were selected by other means
    ///
    /// # Errors
    ///
    /// Returns `QueryError::UnknownNode` when an id lies outside `tree`.
    pub fn from_nodes(tree: Tree, nodes: Vec<NodeId>) -> QueryResult<Self> {
        check_nodes(&tree, &nodes)?;
        Ok(Self { tree, nodes })
    }

    #[inline]
    #[must_use]
    pub fn nodes(&self) -> &[NodeId] {
        &self.nodes
    }

    /// Borrowed views of the selected nodes, in selection order
    pub fn iter(&self) -> impl Iterator<Item = NodeRef<'_>> + '_ {
        self.nodes.iter().map(|&id| self.tree.node(id))
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn tree(&self) -> &Tree {
        &self.tree
    }

    /// Decode the selection, collapsing a single-key result to its value
    pub fn decode(&mut self, decoder: &Decoder<'_>) -> Value {
        decoder.decode(&mut self.tree, &self.nodes)
    }

    /// Decode the selection into its per-tag mapping without collapsing
    pub fn decode_mapping(&mut self, decoder: &Decoder<'_>) -> Mapping {
        decoder.decode_mapping(&mut self.tree, &self.nodes)
    }

    #[must_use]
    pub fn into_parts(self) -> (Tree, Vec<NodeId>) {
        (self.tree, self.nodes)
    }
}

fn check_nodes(tree: &Tree, nodes: &[NodeId]) -> QueryResult<()> {
    match nodes.iter().find(|&&id| !tree.contains(id)) {
        Some(id) => Err(unknown_node_error(id.index(), tree.len())),
        None => Ok(()),
    }
}

#[cfg(test)]
mod selection_tests {
    use super::*;
    use crate::codec::attributes::LIST_MEMBER;
    use crate::codec::to_tree;
    use crate::config::CodecConfig;
    use crate::error::QueryError;
    use crate::xpath::{PathEngine, QueryEngine};

    #[test]
    fn selects_and_decodes() {
        let document: Value = [("a", Value::from(1)), ("b", Value::from("x"))]
            .into_iter()
            .collect();
        let tree = to_tree(&document).expect("encodes");

        let mut selection = Selection::run(tree, &PathEngine::new(), "/root/a")
            .expect("valid path");
        assert_eq!(selection.len(), 1);
        assert_eq!(selection.iter().next().map(NodeRef::tag), Some("a"));

        let config = CodecConfig::default();
        assert_eq!(selection.decode(&Decoder::new(&config)), Value::Int(1));
    }

    #[test]
    fn decoding_marks_repeated_tags_on_the_owned_tree() {
        let mut tree = Tree::new();
        let root = tree.create_element("root");
        let document = tree.document();
        tree.append_child(document, root);
        let first = tree.create_element("x");
        let second = tree.create_element("x");
        tree.append_child(root, first);
        tree.append_child(root, second);

        let mut selection =
            Selection::from_nodes(tree, vec![first, second]).expect("ids belong to the tree");
        let config = CodecConfig::default().with_missing_attribute_warnings(false);
        selection.decode(&Decoder::new(&config));

        assert!(selection
            .iter()
            .all(|node| node.attribute(LIST_MEMBER) == Some("true")));
    }

    #[test]
    fn ids_from_a_larger_tree_are_rejected() {
        let document: Value = [("a", Value::from(vec![1, 2, 3]))].into_iter().collect();
        let larger = to_tree(&document).expect("encodes");
        let foreign = PathEngine::new()
            .select(&larger, "/root/a")
            .expect("valid path");
        let last = foreign.last().copied().expect("three members");

        let err = Selection::from_nodes(Tree::new(), foreign).expect_err("ids outside the tree");
        assert!(matches!(err, QueryError::UnknownNode { size: 1, .. }));

        let small_document: Value = [("b", Value::from(1))].into_iter().collect();
        let small = to_tree(&small_document).expect("encodes");
        let leaky = move |_: &Tree, _: &str| -> QueryResult<Vec<NodeId>> { Ok(vec![last]) };
        let err = Selection::run(small, &leaky, "ignored").expect_err("engine returned a foreign id");
        assert!(matches!(err, QueryError::UnknownNode { node, .. } if node == last.index()));
    }

    #[test]
    fn closures_act_as_engines() {
        let document: Value = [("a", Value::from(1))].into_iter().collect();
        let tree = to_tree(&document).expect("encodes");

        let nothing = |_: &Tree, _: &str| -> QueryResult<Vec<NodeId>> { Ok(Vec::new()) };
        let mut selection = Selection::run(tree, &nothing, "ignored").expect("no error");
        assert!(selection.is_empty());

        let config = CodecConfig::default();
        assert_eq!(
            selection.decode(&Decoder::new(&config)),
            Value::Mapping(Mapping::new())
        );
    }
}
