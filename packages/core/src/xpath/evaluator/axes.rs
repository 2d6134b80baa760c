//! Axis traversal and node tests

use crate::tree::{NodeId, NodeKind, Tree};
use crate::xpath::ast::{Axis, NodeTest};

/// Nodes along `axis` from `node`, forward axes in document order and
/// reverse axes nearest first
pub(super) fn axis_nodes(tree: &Tree, node: NodeId, axis: Axis) -> Vec<NodeId> {
    match axis {
        Axis::Child => tree.children(node).to_vec(),
        Axis::Descendant => tree.descendants(node),
        Axis::DescendantOrSelf => {
            let mut nodes = vec![node];
            nodes.extend(tree.descendants(node));
            nodes
        }
        Axis::SelfNode => vec![node],
        Axis::Parent => tree.parent(node).into_iter().collect(),
        Axis::Ancestor => tree.ancestors(node),
        Axis::AncestorOrSelf => {
            let mut nodes = vec![node];
            nodes.extend(tree.ancestors(node));
            nodes
        }
        Axis::FollowingSibling => {
            let siblings = siblings(tree, node);
            match siblings.iter().position(|&sibling| sibling == node) {
                Some(at) => siblings[at + 1..].to_vec(),
                None => Vec::new(),
            }
        }
        Axis::PrecedingSibling => {
            let siblings = siblings(tree, node);
            match siblings.iter().position(|&sibling| sibling == node) {
                Some(at) => siblings[..at].iter().rev().copied().collect(),
                None => Vec::new(),
            }
        }
        // Attribute steps produce values, not nodes
        Axis::Attribute => Vec::new(),
    }
}

fn siblings(tree: &Tree, node: NodeId) -> &[NodeId] {
    tree.parent(node)
        .map_or(&[][..], |parent| tree.children(parent))
}

pub(super) fn matches_test(tree: &Tree, node: NodeId, test: &NodeTest) -> bool {
    match test {
        NodeTest::Node => true,
        NodeTest::Wildcard => tree.kind(node) == NodeKind::Element,
        NodeTest::Name(name) => tree.kind(node) == NodeKind::Element && tree.tag(node) == name,
    }
}

pub(super) fn attribute_values(tree: &Tree, node: NodeId, test: &NodeTest) -> Vec<String> {
    match test {
        NodeTest::Name(name) => tree
            .attribute(node, name)
            .map(str::to_string)
            .into_iter()
            .collect(),
        NodeTest::Wildcard | NodeTest::Node => tree
            .attributes(node)
            .map(|(_, value)| value.to_string())
            .collect(),
    }
}
