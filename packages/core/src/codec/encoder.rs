//! Value to tree encoding

use hashbrown::HashMap;

use super::attributes::{self, DATATYPE, INDEX, LIST_MEMBER, datatype};
use crate::config::CodecConfig;
use crate::error::{CodecResult, ConversionError, unsupported_value_error};
use crate::tree::{NodeId, Tree};
use crate::value::{Composite, Value};

/// Builds an attributed tree from dynamic values
///
/// Nodes are allocated in the encoder's own [`Tree`]; [`Encoder::encode`]
/// returns detached sibling nodes that the caller appends wherever they
/// belong.
#[derive(Debug)]
pub struct Encoder<'c> {
    config: &'c CodecConfig,
    tree: Tree,
    depth: usize,
}

impl<'c> Encoder<'c> {
    #[must_use]
    pub fn new(config: &'c CodecConfig) -> Self {
        Self {
            config,
            tree: Tree::new(),
            depth: 0,
        }
    }

    /// Encode a top-level mapping (or composite) under a synthetic root
    /// element and return the finished tree
    ///
    /// The root's children are the concatenated nodes of every entry, in
    /// entry order.
    ///
    /// # Errors
    ///
    /// Returns `ConversionError::NotAMapping` when `document` has no keyed
    /// entries, or any error raised while encoding an entry.
    pub fn encode_document(mut self, document: &Value) -> CodecResult<Tree> {
        let entries: Vec<(&str, &Value)> = match document {
            Value::Mapping(map) => map.iter().map(|(k, v)| (k.as_str(), v)).collect(),
            Value::Composite(composite) => Self::visible_fields(composite),
            other => {
                return Err(ConversionError::NotAMapping {
                    type_name: other.type_name().to_string(),
                });
            }
        };

        let root = self.tree.create_element(self.config.root_tag.clone());
        self.tree.set_attribute(root, DATATYPE, datatype::DICT);
        self.tree.set_attribute(root, LIST_MEMBER, attributes::FALSE);
        let document_node = self.tree.document();
        self.tree.append_child(document_node, root);

        for (key, value) in entries {
            for node in self.encode(key, value)? {
                self.tree.append_child(root, node);
            }
        }

        tracing::debug!(
            target: "jsonquery::encoder",
            root_tag = %self.config.root_tag,
            nodes = self.tree.len(),
            "encoded document"
        );

        Ok(self.tree)
    }

    /// Encode `value` under the name `key`
    ///
    /// Produces one node, or one node per element (recursively) for
    /// sequences.
    ///
    /// # Errors
    ///
    /// Returns `ConversionError::Unsupported` for callables and opaque
    /// values, and `ConversionError::DepthExceeded` past `max_depth`.
    pub fn encode(&mut self, key: &str, value: &Value) -> CodecResult<Vec<NodeId>> {
        match value {
            Value::Null | Value::Bool(_) | Value::Int(_) | Value::Float(_) | Value::String(_) => {
                Ok(vec![self.encode_atomic(key, value)])
            }
            Value::Mapping(map) => {
                let entries: Vec<(&str, &Value)> =
                    map.iter().map(|(k, v)| (k.as_str(), v)).collect();
                self.nested(|encoder| encoder.encode_keyed(key, datatype::DICT, entries))
            }
            Value::Sequence(items) => self.nested(|encoder| encoder.encode_sequence(key, items)),
            Value::Composite(composite) => {
                let fields = Self::visible_fields(composite);
                self.nested(|encoder| encoder.encode_keyed(key, composite.type_name(), fields))
            }
            Value::Callable(_) | Value::Opaque(_) => {
                Err(unsupported_value_error(value.type_name(), value.to_string()))
            }
        }
    }

    /// Take the tree built so far
    #[must_use]
    pub fn into_tree(self) -> Tree {
        self.tree
    }

    #[must_use]
    pub fn tree(&self) -> &Tree {
        &self.tree
    }

    fn nested<F>(&mut self, encode: F) -> CodecResult<Vec<NodeId>>
    where
        F: FnOnce(&mut Self) -> CodecResult<Vec<NodeId>>,
    {
        if self.depth >= self.config.max_depth {
            return Err(ConversionError::DepthExceeded {
                max_depth: self.config.max_depth,
            });
        }
        self.depth += 1;
        let result = encode(self);
        self.depth -= 1;
        result
    }

    fn encode_atomic(&mut self, key: &str, value: &Value) -> NodeId {
        let node = self.tree.create_element(key);
        self.tree.set_attribute(node, DATATYPE, value.type_name());
        self.tree.set_attribute(node, LIST_MEMBER, attributes::FALSE);
        if let Some(text) = value.to_text() {
            self.tree.set_text(node, text);
        }
        node
    }

    /// Mappings and composites: one element holding every entry's nodes, with
    /// repeated tags among those nodes turned into indexed list members
    fn encode_keyed(
        &mut self,
        key: &str,
        type_name: &str,
        entries: Vec<(&str, &Value)>,
    ) -> CodecResult<Vec<NodeId>> {
        let element = self.tree.create_element(key);
        self.tree.set_attribute(element, DATATYPE, type_name);
        self.tree.set_attribute(element, LIST_MEMBER, attributes::FALSE);

        let mut found_nodes = Vec::new();
        for (sub_key, sub_value) in entries {
            found_nodes.extend(self.encode(sub_key, sub_value)?);
        }

        let mut found_tags: HashMap<&str, usize> = HashMap::new();
        for &node in &found_nodes {
            *found_tags.entry(self.tree.tag(node)).or_default() += 1;
        }
        let mut next_index: HashMap<String, usize> = found_tags
            .into_iter()
            .filter(|&(_, count)| count > 1)
            .map(|(tag, _)| (tag.to_string(), 0))
            .collect();

        for &node in &found_nodes {
            if let Some(index) = next_index.get_mut(self.tree.tag(node)) {
                self.tree.set_attribute(node, LIST_MEMBER, attributes::TRUE);
                self.tree.set_attribute(node, INDEX, index.to_string());
                *index += 1;
            }
            self.tree.append_child(element, node);
        }

        tracing::trace!(
            target: "jsonquery::encoder",
            key,
            type_name,
            children = found_nodes.len(),
            "encoded keyed value"
        );

        Ok(vec![element])
    }

    fn encode_sequence(&mut self, key: &str, items: &[Value]) -> CodecResult<Vec<NodeId>> {
        let mut elements = Vec::with_capacity(items.len());
        for (list_index, item) in items.iter().enumerate() {
            for node in self.encode(key, item)? {
                self.tree.set_attribute(node, LIST_MEMBER, attributes::TRUE);
                self.tree.set_attribute(node, INDEX, list_index.to_string());
                elements.push(node);
            }
        }
        Ok(elements)
    }

    /// Composite fields in encoding order, callables left out
    fn visible_fields(composite: &Composite) -> Vec<(&str, &Value)> {
        composite
            .fields()
            .into_iter()
            .filter(|(_, value)| !value.is_callable())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::{Callable, Mapping, Opaque};

    fn attr(tree: &Tree, node: NodeId, name: &str) -> Option<String> {
        tree.attribute(node, name).map(str::to_string)
    }

    #[test]
    fn atomic_values_become_single_leaves() {
        let config = CodecConfig::default();
        let mut encoder = Encoder::new(&config);
        let nodes = encoder.encode("ratio", &Value::Float(0.5)).expect("encodable");
        let tree = encoder.into_tree();

        assert_eq!(nodes.len(), 1);
        assert_eq!(tree.tag(nodes[0]), "ratio");
        assert_eq!(tree.text(nodes[0]), Some("0.5"));
        assert_eq!(attr(&tree, nodes[0], DATATYPE).as_deref(), Some("float"));
        assert_eq!(attr(&tree, nodes[0], LIST_MEMBER).as_deref(), Some("false"));
        assert_eq!(attr(&tree, nodes[0], INDEX), None);
    }

    #[test]
    fn sequences_fan_out_into_indexed_siblings() {
        let config = CodecConfig::default();
        let mut encoder = Encoder::new(&config);
        let nodes = encoder
            .encode("a", &Value::from(vec![10, 20, 30]))
            .expect("encodable");
        let tree = encoder.into_tree();

        assert_eq!(nodes.len(), 3);
        for (i, node) in nodes.iter().enumerate() {
            assert_eq!(tree.tag(*node), "a");
            assert_eq!(attr(&tree, *node, LIST_MEMBER).as_deref(), Some("true"));
            assert_eq!(attr(&tree, *node, INDEX), Some(i.to_string()));
        }
    }

    #[test]
    fn nested_sequences_are_reindexed_by_the_enclosing_mapping() {
        let config = CodecConfig::default();
        let mut encoder = Encoder::new(&config);
        let value: Value = [("grid", Value::from(vec![vec![1, 2], vec![3]]))]
            .into_iter()
            .collect();
        let nodes = encoder.encode("outer", &value).expect("encodable");
        let tree = encoder.into_tree();

        let children = tree.children(nodes[0]);
        let indices: Vec<_> = children
            .iter()
            .map(|&c| attr(&tree, c, INDEX).expect("indexed"))
            .collect();
        assert_eq!(indices, ["0", "1", "2"]);
    }

    #[test]
    fn callables_are_rejected_outside_composites() {
        let config = CodecConfig::default();
        let mut encoder = Encoder::new(&config);
        let err = encoder
            .encode("f", &Value::Callable(Callable::new("handler")))
            .expect_err("callables cannot be encoded");
        assert_eq!(
            err,
            ConversionError::Unsupported {
                type_name: "function".into(),
                repr: "<function handler>".into(),
            }
        );
    }

    #[test]
    fn opaque_values_report_type_and_repr() {
        let config = CodecConfig::default();
        let mut encoder = Encoder::new(&config);
        let err = encoder
            .encode("sock", &Value::Opaque(Opaque::new("Socket", "<socket fd=3>")))
            .expect_err("opaque values cannot be encoded");
        assert_eq!(err.type_name(), Some("Socket"));
        assert!(err.to_string().contains("<socket fd=3>"));
    }

    #[test]
    fn depth_limit_is_enforced() {
        let config = CodecConfig::default().with_max_depth(2);
        let mut value = Value::Int(1);
        for _ in 0..3 {
            let mut map = Mapping::new();
            map.insert("n".into(), value);
            value = Value::Mapping(map);
        }

        let mut encoder = Encoder::new(&config);
        assert_eq!(
            encoder.encode("deep", &value),
            Err(ConversionError::DepthExceeded { max_depth: 2 })
        );
    }

    #[test]
    fn document_must_be_keyed() {
        let config = CodecConfig::default();
        let err = Encoder::new(&config)
            .encode_document(&Value::from(vec![1, 2]))
            .expect_err("sequences are not documents");
        assert!(matches!(err, ConversionError::NotAMapping { ref type_name } if type_name == "list"));
    }
}
