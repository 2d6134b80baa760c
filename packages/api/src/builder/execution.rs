//! Terminal methods that run the query

use jsonquery_core::codec::{Decoder, Encoder};
use jsonquery_core::config::{CodecConfig, Validator};
use jsonquery_core::selection::Selection;
use jsonquery_core::tree::Tree;
use jsonquery_core::value::Value;
use serde::de::DeserializeOwned;

use crate::builder::core::{JsonQuery, PathSet};
use crate::error::Result;
use crate::source::JsonSource;

impl<S> JsonQuery<S> {
    /// Load and encode the document
    ///
    /// # Errors
    ///
    /// Returns a `JsonQueryError` when the configuration is invalid, the
    /// document cannot be loaded, or it cannot be encoded.
    pub fn tree(self) -> Result<Tree> {
        load_tree(self.source, &self.config, self.debug_enabled)
    }
}

impl JsonQuery<PathSet> {
    /// Run the path and return the tree with the selected nodes
    ///
    /// # Errors
    ///
    /// Returns a `JsonQueryError` for load, encode or query failures.
    pub fn nodes(self) -> Result<Selection> {
        let tree = load_tree(self.source, &self.config, self.debug_enabled)?;
        let selection = Selection::run(tree, self.engine.as_ref(), &self.state.path)?;
        if self.debug_enabled {
            log::debug!(
                "JsonQuery: '{}' matched {} nodes",
                self.state.path,
                selection.len()
            );
        }
        Ok(selection)
    }

    /// Run the path and decode the selected nodes
    ///
    /// # Errors
    ///
    /// Returns a `JsonQueryError` for load, encode or query failures.
    /// Decoding itself never fails.
    pub fn value(self) -> Result<Value> {
        let tree = load_tree(self.source, &self.config, self.debug_enabled)?;
        let mut selection = Selection::run(tree, self.engine.as_ref(), &self.state.path)?;

        let decoder = Decoder::new(&self.config).with_fallback(self.fallback.as_ref());
        let value = selection.decode(&decoder);
        if self.debug_enabled {
            log::debug!(
                "JsonQuery: '{}' decoded {} nodes into a {}",
                self.state.path,
                selection.len(),
                value.type_name()
            );
        }
        Ok(value)
    }

    /// Run the path, decode the selected nodes and deserialize the result
    ///
    /// # Errors
    ///
    /// Returns the errors of [`JsonQuery::value`], plus `JsonQueryError::Json`
    /// when the decoded value does not fit `T`.
    pub fn deserialize<T: DeserializeOwned>(self) -> Result<T> {
        let value = self.value()?;
        Ok(serde_json::from_value(serde_json::Value::from(value))?)
    }
}

fn load_tree(source: JsonSource, config: &CodecConfig, debug_enabled: bool) -> Result<Tree> {
    config.validate()?;
    let document = source.load()?;
    let tree = Encoder::new(config).encode_document(&document)?;
    if debug_enabled {
        log::debug!(
            "JsonQuery: encoded document into {} nodes under <{}>",
            tree.len(),
            config.root_tag
        );
    }
    Ok(tree)
}
