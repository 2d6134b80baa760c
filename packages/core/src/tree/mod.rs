//! Attributed, ordered tree
//!
//! Every node lives in a [`Tree`] arena and is addressed by a copyable
//! [`NodeId`]. Children are owned by their parent's child list; the parent
//! link is a plain id, so walking upwards never borrows the parent.
//!
//! A tree always starts with a synthetic document node. The encoded document
//! element is appended to it as the root element, which lets absolute path
//! expressions such as `/root/a` resolve the way they would on an XML
//! document.

mod arena;
mod node;
mod render;

pub use arena::Tree;
pub use node::{NodeId, NodeKind, NodeRef};
