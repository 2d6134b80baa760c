//! Node storage and borrowed node handles

use indexmap::IndexMap;

use super::Tree;

/// Handle to a node inside a [`Tree`]
///
/// Ids are only meaningful for the tree that created them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    /// Arena slot of this node
    #[inline]
    #[must_use]
    pub fn index(self) -> usize {
        self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    /// Synthetic node above the root element
    Document,
    Element,
}

#[derive(Debug, Clone)]
pub(crate) struct NodeData {
    pub(crate) kind: NodeKind,
    pub(crate) tag: String,
    pub(crate) attributes: IndexMap<String, String>,
    pub(crate) text: Option<String>,
    pub(crate) children: Vec<NodeId>,
    pub(crate) parent: Option<NodeId>,
}

impl NodeData {
    pub(crate) fn new(kind: NodeKind, tag: String) -> Self {
        Self {
            kind,
            tag,
            attributes: IndexMap::new(),
            text: None,
            children: Vec::new(),
            parent: None,
        }
    }
}

/// Read-only view of one node together with its tree
#[derive(Clone, Copy)]
pub struct NodeRef<'a> {
    tree: &'a Tree,
    id: NodeId,
}

impl<'a> NodeRef<'a> {
    pub(crate) fn new(tree: &'a Tree, id: NodeId) -> Self {
        Self { tree, id }
    }

    #[inline]
    #[must_use]
    pub fn id(self) -> NodeId {
        self.id
    }

    #[must_use]
    pub fn kind(self) -> NodeKind {
        self.tree.kind(self.id)
    }

    #[must_use]
    pub fn tag(self) -> &'a str {
        self.tree.tag(self.id)
    }

    #[must_use]
    pub fn attribute(self, name: &str) -> Option<&'a str> {
        self.tree.attribute(self.id, name)
    }

    pub fn attributes(self) -> impl Iterator<Item = (&'a str, &'a str)> + 'a {
        self.tree.attributes(self.id)
    }

    #[must_use]
    pub fn text(self) -> Option<&'a str> {
        self.tree.text(self.id)
    }

    pub fn children(self) -> impl Iterator<Item = NodeRef<'a>> + 'a {
        let tree = self.tree;
        tree.children(self.id)
            .iter()
            .map(move |&child| NodeRef::new(tree, child))
    }

    #[must_use]
    pub fn parent(self) -> Option<NodeRef<'a>> {
        self.tree
            .parent(self.id)
            .map(|parent| NodeRef::new(self.tree, parent))
    }

    /// `true` when the node holds text and no children
    #[must_use]
    pub fn is_leaf(self) -> bool {
        self.tree.children(self.id).is_empty() && self.tree.text(self.id).is_some()
    }
}

impl std::fmt::Debug for NodeRef<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NodeRef")
            .field("id", &self.id)
            .field("tag", &self.tag())
            .field("attributes", &self.attributes().collect::<Vec<_>>())
            .field("text", &self.text())
            .finish()
    }
}
