//! Codec configuration
//!
//! [`CodecConfig`] controls how values are encoded into trees and how matched
//! nodes are decoded back. Defaults live in `defaults.rs`; validation rules in
//! `validation.rs`.

mod defaults;
pub mod validation;

pub use defaults::{DEFAULT_MAX_DEPTH, DEFAULT_ROOT_TAG};
pub use validation::{ConfigResult, ConfigurationError, Validator};

/// How the decoder interprets list ordering, list numbers and nested mappings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DecodeMode {
    /// Reproduces the reference decoding rules exactly:
    /// repeated tags are ordered by the `index` of each node's parent,
    /// `int` list members decode as floats, and a single `dict` node stores
    /// every decoded child under its own outer tag.
    #[default]
    Reference,
    /// Orders repeated tags by each node's own `index`, keeps integers
    /// integral, restores `bool`/`none` scalars, and rebuilds nested mappings
    /// under their children's tags.
    Faithful,
}

/// Configuration shared by the encoder and the decoder
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodecConfig {
    /// Tag of the synthetic element that holds the encoded document
    pub root_tag: String,
    /// Maximum container nesting accepted by the encoder
    pub max_depth: usize,
    /// Decoding rule set
    pub decode_mode: DecodeMode,
    /// Emit a warning when a decoded node lacks `datatype` or `index`
    pub warn_on_missing_attributes: bool,
}

impl CodecConfig {
    /// Create a configuration with default settings
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the root element tag
    #[must_use]
    pub fn with_root_tag(mut self, root_tag: impl Into<String>) -> Self {
        self.root_tag = root_tag.into();
        self
    }

    /// Set the maximum nesting depth accepted by the encoder
    #[must_use]
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Select the decoding rule set
    #[must_use]
    pub fn with_decode_mode(mut self, decode_mode: DecodeMode) -> Self {
        self.decode_mode = decode_mode;
        self
    }

    /// Enable or disable warnings for nodes with missing metadata
    #[must_use]
    pub fn with_missing_attribute_warnings(mut self, enabled: bool) -> Self {
        self.warn_on_missing_attributes = enabled;
        self
    }

    /// Shorthand for [`DecodeMode::Faithful`]
    #[must_use]
    pub fn faithful() -> Self {
        Self::default().with_decode_mode(DecodeMode::Faithful)
    }
}
