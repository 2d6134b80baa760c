//! Default values for `CodecConfig`

use super::{CodecConfig, DecodeMode};

/// Tag of the synthetic document element
pub const DEFAULT_ROOT_TAG: &str = "root";

/// Maximum container nesting accepted by default
pub const DEFAULT_MAX_DEPTH: usize = 512;

impl Default for CodecConfig {
    fn default() -> Self {
        Self {
            root_tag: DEFAULT_ROOT_TAG.to_string(),
            max_depth: DEFAULT_MAX_DEPTH,
            decode_mode: DecodeMode::Reference,
            warn_on_missing_attributes: true,
        }
    }
}
