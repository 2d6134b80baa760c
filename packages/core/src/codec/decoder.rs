//! Node sequence to value decoding

use indexmap::IndexMap;

use super::attributes::{DATATYPE, INDEX, LIST_MEMBER, TRUE, datatype};
use super::fallback::{ArrayFallback, NoFallback};
use crate::config::{CodecConfig, DecodeMode};
use crate::tree::{NodeId, Tree};
use crate::value::{Mapping, Value};

static NO_FALLBACK: NoFallback = NoFallback;

/// Rebuilds values from nodes selected out of an encoded tree
///
/// Decoding never fails: nodes with missing or malformed metadata decode
/// with permissive defaults (text for a missing `datatype`, `0` for a missing
/// `index`) so siblings are never lost because of one bad node.
pub struct Decoder<'a> {
    config: &'a CodecConfig,
    fallback: &'a dyn ArrayFallback,
}

/// Nodes sharing a tag, in first-encounter order
enum Group {
    Single(NodeId),
    Many(Vec<NodeId>),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Datatype {
    Dict,
    Float,
    Int,
    Bool,
    None,
    Other,
}

impl<'a> Decoder<'a> {
    #[must_use]
    pub fn new(config: &'a CodecConfig) -> Self {
        Self {
            config,
            fallback: &NO_FALLBACK,
        }
    }

    /// Use `fallback` for results that keep more than one key
    #[must_use]
    pub fn with_fallback(mut self, fallback: &'a dyn ArrayFallback) -> Self {
        self.fallback = fallback;
        self
    }

    /// Decode `nodes` and apply the collapse rule
    ///
    /// A result with exactly one tag unwraps to that tag's value. Results with
    /// more tags stay a mapping, unless an available array fallback converts
    /// them.
    pub fn decode(&self, tree: &mut Tree, nodes: &[NodeId]) -> Value {
        let results = self.decode_mapping(tree, nodes);
        self.collapse(results)
    }

    /// Decode `nodes` into a tag-keyed mapping without collapsing it
    ///
    /// Every node of a repeated tag gets `list_member="true"` written back to
    /// the tree.
    pub fn decode_mapping(&self, tree: &mut Tree, nodes: &[NodeId]) -> Mapping {
        let mut groups: IndexMap<String, Group> = IndexMap::new();
        for &node in nodes {
            let tag = tree.tag(node);
            match groups.get_mut(tag) {
                None => {
                    groups.insert(tag.to_string(), Group::Single(node));
                }
                Some(Group::Many(members)) => members.push(node),
                Some(group) => {
                    if let Group::Single(first) = *group {
                        *group = Group::Many(vec![first, node]);
                    }
                }
            }
        }

        for group in groups.values_mut() {
            if let Group::Many(members) = group {
                for &member in members.iter() {
                    tree.set_attribute(member, LIST_MEMBER, TRUE);
                }
                self.order_members(tree, members);
            }
        }

        let mut results = Mapping::with_capacity(groups.len());
        for (tag, group) in groups {
            let value = match group {
                Group::Many(members) => Value::Sequence(
                    members
                        .into_iter()
                        .map(|member| self.decode_member(tree, member))
                        .collect(),
                ),
                Group::Single(node) if self.is_lone_list_member(tree, node) => {
                    Value::Sequence(vec![self.decode_member(tree, node)])
                }
                Group::Single(node) => self.decode_single(tree, &tag, node),
            };
            results.insert(tag, value);
        }

        tracing::trace!(
            target: "jsonquery::decoder",
            nodes = nodes.len(),
            keys = results.len(),
            "decoded node sequence"
        );

        results
    }

    fn collapse(&self, results: Mapping) -> Value {
        match results.len() {
            1 => results.into_iter().next().map_or(Value::Null, |(_, value)| value),
            n if n > 1 && self.fallback.is_available() => self.fallback.convert(results),
            _ => Value::Mapping(results),
        }
    }

    /// Stable sort of a repeated-tag group
    ///
    /// In `Reference` mode the key is the `index` of each member's parent;
    /// in `Faithful` mode it is the member's own `index`.
    fn order_members(&self, tree: &Tree, members: &mut [NodeId]) {
        let mode = self.config.decode_mode;
        members.sort_by_key(|&member| {
            let source = match mode {
                DecodeMode::Reference => tree.parent(member),
                DecodeMode::Faithful => Some(member),
            };
            source.map_or(0, |node| self.index_of(tree, node))
        });
    }

    /// A one-element sequence still carries `list_member="true"`; only
    /// `Faithful` mode reads it back as a list
    fn is_lone_list_member(&self, tree: &Tree, node: NodeId) -> bool {
        self.config.decode_mode == DecodeMode::Faithful
            && tree.attribute(node, LIST_MEMBER) == Some(TRUE)
    }

    fn index_of(&self, tree: &Tree, node: NodeId) -> i64 {
        match tree.attribute(node, INDEX) {
            Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
                tracing::warn!(
                    target: "jsonquery::decoder",
                    tag = %tree.tag(node),
                    index = %raw,
                    "malformed index attribute, using 0"
                );
                0
            }),
            None => {
                if self.config.decode_mode == DecodeMode::Faithful
                    && self.config.warn_on_missing_attributes
                {
                    tracing::warn!(
                        target: "jsonquery::decoder",
                        tag = %tree.tag(node),
                        "list member has no index attribute, using 0"
                    );
                }
                0
            }
        }
    }

    fn decode_member(&self, tree: &mut Tree, node: NodeId) -> Value {
        let children = tree.children(node).to_vec();
        let datatype = self.datatype(tree, node);

        match self.config.decode_mode {
            DecodeMode::Reference => {
                if !children.is_empty() {
                    self.decode(tree, &children)
                } else if matches!(datatype, Datatype::Float | Datatype::Int) {
                    // int members decode as floats in the reference rules
                    parse_float(tree, node)
                } else {
                    text_value(tree, node)
                }
            }
            DecodeMode::Faithful => {
                if !children.is_empty() || datatype == Datatype::Dict {
                    Value::Mapping(self.decode_mapping(tree, &children))
                } else {
                    parse_scalar(tree, node, datatype)
                }
            }
        }
    }

    fn decode_single(&self, tree: &mut Tree, tag: &str, node: NodeId) -> Value {
        let children = tree.children(node).to_vec();
        let datatype = self.datatype(tree, node);

        match self.config.decode_mode {
            DecodeMode::Reference => match datatype {
                Datatype::Dict => {
                    // every child lands under the outer tag, the last one wins
                    let mut child_results = Mapping::new();
                    for child in children {
                        let nested = self.decode(tree, &[child]);
                        child_results.insert(tag.to_string(), nested);
                    }
                    Value::Mapping(child_results)
                }
                Datatype::Float => parse_float(tree, node),
                Datatype::Int => parse_int(tree, node),
                _ => text_value(tree, node),
            },
            DecodeMode::Faithful => {
                if !children.is_empty() || datatype == Datatype::Dict {
                    Value::Mapping(self.decode_mapping(tree, &children))
                } else {
                    parse_scalar(tree, node, datatype)
                }
            }
        }
    }

    fn datatype(&self, tree: &Tree, node: NodeId) -> Datatype {
        let Some(name) = tree.attribute(node, DATATYPE) else {
            if self.config.warn_on_missing_attributes {
                tracing::warn!(
                    target: "jsonquery::decoder",
                    tag = %tree.tag(node),
                    "node has no datatype attribute, decoding as text"
                );
            }
            return Datatype::Other;
        };

        match name {
            datatype::DICT => Datatype::Dict,
            datatype::FLOAT => Datatype::Float,
            datatype::INT => Datatype::Int,
            datatype::BOOL => Datatype::Bool,
            datatype::NONE => Datatype::None,
            _ => Datatype::Other,
        }
    }
}

impl std::fmt::Debug for Decoder<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Decoder")
            .field("config", self.config)
            .field("fallback_available", &self.fallback.is_available())
            .finish()
    }
}

fn text_value(tree: &Tree, node: NodeId) -> Value {
    tree.text(node)
        .map_or(Value::Null, |text| Value::String(text.to_string()))
}

fn parse_scalar(tree: &Tree, node: NodeId, datatype: Datatype) -> Value {
    match datatype {
        Datatype::Float => parse_float(tree, node),
        Datatype::Int => parse_int(tree, node),
        Datatype::Bool => match tree.text(node) {
            Some("true") => Value::Bool(true),
            Some("false") => Value::Bool(false),
            _ => text_value(tree, node),
        },
        Datatype::None => Value::Null,
        Datatype::Dict | Datatype::Other => text_value(tree, node),
    }
}

fn parse_float(tree: &Tree, node: NodeId) -> Value {
    let Some(text) = tree.text(node) else {
        return Value::Null;
    };
    text.trim().parse::<f64>().map_or_else(
        |_| {
            tracing::warn!(
                target: "jsonquery::decoder",
                tag = %tree.tag(node),
                text,
                "float node holds non-numeric text"
            );
            Value::String(text.to_string())
        },
        Value::Float,
    )
}

fn parse_int(tree: &Tree, node: NodeId) -> Value {
    let Some(text) = tree.text(node) else {
        return Value::Null;
    };
    text.trim().parse::<i64>().map_or_else(
        |_| {
            tracing::warn!(
                target: "jsonquery::decoder",
                tag = %tree.tag(node),
                text,
                "int node holds non-integer text"
            );
            Value::String(text.to_string())
        },
        Value::Int,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::Encoder;
    use crate::codec::fallback::MatrixFallback;

    fn leaf(tree: &mut Tree, parent: NodeId, tag: &str, datatype: Option<&str>, text: &str) -> NodeId {
        let node = tree.create_element(tag);
        if let Some(datatype) = datatype {
            tree.set_attribute(node, DATATYPE, datatype);
        }
        tree.set_text(node, text);
        tree.append_child(parent, node);
        node
    }

    fn bare_root() -> (Tree, NodeId) {
        let mut tree = Tree::new();
        let root = tree.create_element("root");
        let document = tree.document();
        tree.append_child(document, root);
        (tree, root)
    }

    #[test]
    fn missing_datatype_decodes_as_text() {
        let (mut tree, root) = bare_root();
        let a = leaf(&mut tree, root, "a", None, "42");
        let b = leaf(&mut tree, root, "b", Some("int"), "7");

        let config = CodecConfig::default().with_missing_attribute_warnings(false);
        let decoded = Decoder::new(&config).decode(&mut tree, &[a, b]);
        let expected: Value = [("a", Value::from("42")), ("b", Value::Int(7))]
            .into_iter()
            .collect();
        assert_eq!(decoded, expected);
    }

    #[test]
    fn malformed_numbers_fall_back_to_text() {
        let (mut tree, root) = bare_root();
        let a = leaf(&mut tree, root, "a", Some("int"), "seven");
        let b = leaf(&mut tree, root, "b", Some("float"), "1.5");

        let config = CodecConfig::default();
        let decoded = Decoder::new(&config).decode(&mut tree, &[a, b]);
        assert_eq!(decoded.get("a"), Some(&Value::from("seven")));
        assert_eq!(decoded.get("b"), Some(&Value::Float(1.5)));
    }

    #[test]
    fn repeated_tags_are_marked_as_list_members() {
        let (mut tree, root) = bare_root();
        let first = leaf(&mut tree, root, "v", Some("str"), "x");
        let second = leaf(&mut tree, root, "v", Some("str"), "y");

        let config = CodecConfig::default();
        let decoded = Decoder::new(&config).decode(&mut tree, &[first, second]);
        assert_eq!(decoded, Value::from(vec!["x", "y"]));
        assert_eq!(tree.attribute(first, LIST_MEMBER), Some("true"));
        assert_eq!(tree.attribute(second, LIST_MEMBER), Some("true"));
    }

    #[test]
    fn empty_selection_decodes_to_empty_mapping() {
        let (mut tree, _) = bare_root();
        let decoded = Decoder::new(&CodecConfig::default()).decode(&mut tree, &[]);
        assert_eq!(decoded, Value::Mapping(Mapping::new()));
    }

    #[test]
    fn fallback_applies_only_to_multi_key_results() {
        let document: Value = [
            ("x", Value::from(vec![1, 2])),
            ("y", Value::from(vec![3, 4])),
            ("z", Value::from(vec![5, 6])),
        ]
        .into_iter()
        .collect();
        let config = CodecConfig::default();
        let mut tree = Encoder::new(&config)
            .encode_document(&document)
            .expect("encodable");
        let root = tree.root().expect("root element");
        let children = tree.children(root).to_vec();

        let decoded = Decoder::new(&config)
            .with_fallback(&MatrixFallback)
            .decode(&mut tree, &children);
        assert_eq!(
            decoded,
            Value::Sequence(vec![
                Value::from(vec![1.0, 2.0]),
                Value::from(vec![3.0, 4.0]),
                Value::from(vec![5.0, 6.0]),
            ])
        );

        let x_only: Vec<NodeId> = children[..2].to_vec();
        let single = Decoder::new(&config)
            .with_fallback(&MatrixFallback)
            .decode(&mut tree, &x_only);
        assert_eq!(single, Value::from(vec![1.0, 2.0]));
    }
}
