//! Arena-backed tree storage and the node capability set used by the codec

use super::node::{NodeData, NodeId, NodeKind, NodeRef};

/// Arena owning every node of one encoded document
///
/// # Panics
///
/// Accessors taking a [`NodeId`] panic when the id lies outside this arena.
/// Ids coming from another tree can be checked with [`Tree::contains`].
#[derive(Debug, Clone)]
pub struct Tree {
    nodes: Vec<NodeData>,
    document: NodeId,
}

impl Default for Tree {
    fn default() -> Self {
        Self::new()
    }
}

impl Tree {
    /// Create a tree holding only the synthetic document node
    #[must_use]
    pub fn new() -> Self {
        Self {
            nodes: vec![NodeData::new(NodeKind::Document, String::new())],
            document: NodeId(0),
        }
    }

    /// The synthetic document node
    #[inline]
    #[must_use]
    pub fn document(&self) -> NodeId {
        self.document
    }

    /// The document element, once one has been appended to the document node
    #[must_use]
    pub fn root(&self) -> Option<NodeId> {
        self.children(self.document).first().copied()
    }

    /// Total number of nodes, the document node included
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// `true` when nothing but the document node exists
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.len() == 1
    }

    /// `true` when `id` addresses a slot of this arena
    #[inline]
    #[must_use]
    pub fn contains(&self, id: NodeId) -> bool {
        id.0 < self.nodes.len()
    }

    /// Create a detached element with the given tag
    pub fn create_element(&mut self, tag: impl Into<String>) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(NodeData::new(NodeKind::Element, tag.into()));
        id
    }

    #[must_use]
    pub fn node(&self, id: NodeId) -> NodeRef<'_> {
        NodeRef::new(self, id)
    }

    #[inline]
    #[must_use]
    pub fn kind(&self, id: NodeId) -> NodeKind {
        self.nodes[id.0].kind
    }

    #[inline]
    #[must_use]
    pub fn tag(&self, id: NodeId) -> &str {
        &self.nodes[id.0].tag
    }

    #[must_use]
    pub fn attribute(&self, id: NodeId, name: &str) -> Option<&str> {
        self.nodes[id.0].attributes.get(name).map(String::as_str)
    }

    /// Attributes in the order they were first set
    pub fn attributes(&self, id: NodeId) -> impl Iterator<Item = (&str, &str)> {
        self.nodes[id.0]
            .attributes
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }

    /// Set an attribute, keeping its original position when it already exists
    pub fn set_attribute(&mut self, id: NodeId, name: &str, value: impl Into<String>) {
        let value = value.into();
        let attributes = &mut self.nodes[id.0].attributes;
        match attributes.get_mut(name) {
            Some(existing) => *existing = value,
            None => {
                attributes.insert(name.to_string(), value);
            }
        }
    }

    #[must_use]
    pub fn text(&self, id: NodeId) -> Option<&str> {
        self.nodes[id.0].text.as_deref()
    }

    pub fn set_text(&mut self, id: NodeId, text: impl Into<String>) {
        self.nodes[id.0].text = Some(text.into());
    }

    /// Children in insertion order
    #[inline]
    #[must_use]
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        &self.nodes[id.0].children
    }

    #[inline]
    #[must_use]
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.nodes[id.0].parent
    }

    /// Append `child` as the last child of `parent`
    ///
    /// A child that already has a parent is moved. The document node cannot
    /// become a child.
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) {
        if self.kind(child) == NodeKind::Document {
            tracing::warn!(
                target: "jsonquery::tree",
                "refusing to append the document node as a child"
            );
            return;
        }

        if let Some(previous) = self.nodes[child.0].parent.take() {
            self.nodes[previous.0].children.retain(|&id| id != child);
        }

        self.nodes[child.0].parent = Some(parent);
        self.nodes[parent.0].children.push(child);
    }

    /// Descendants of `id` in document order, `id` itself excluded
    #[must_use]
    pub fn descendants(&self, id: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut stack: Vec<NodeId> = self.children(id).iter().rev().copied().collect();
        while let Some(next) = stack.pop() {
            out.push(next);
            stack.extend(self.children(next).iter().rev().copied());
        }
        out
    }

    /// Ancestors of `id` from its parent up to the document node
    #[must_use]
    pub fn ancestors(&self, id: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut current = self.parent(id);
        while let Some(node) = current {
            out.push(node);
            current = self.parent(node);
        }
        out
    }

    /// Document-order rank of every node, indexed by arena slot
    ///
    /// Nodes not connected to the document node rank after all connected ones.
    #[must_use]
    pub fn document_order(&self) -> Vec<usize> {
        let mut ranks = vec![usize::MAX; self.nodes.len()];
        ranks[self.document.0] = 0;
        for (rank, id) in self.descendants(self.document).into_iter().enumerate() {
            ranks[id.0] = rank + 1;
        }
        ranks
    }

    /// Concatenated text of `id` and all of its descendants
    #[must_use]
    pub fn string_value(&self, id: NodeId) -> String {
        let mut out = self.text(id).unwrap_or_default().to_string();
        for descendant in self.descendants(id) {
            if let Some(text) = self.text(descendant) {
                out.push_str(text);
            }
        }
        out
    }
}
