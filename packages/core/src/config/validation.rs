//! Configuration validation

use super::CodecConfig;

/// Upper bound for `CodecConfig::max_depth`
pub const MAX_ALLOWED_DEPTH: usize = 10_000;

/// Configuration validation result type
pub type ConfigResult<T> = Result<T, ConfigurationError>;

/// Configuration error types
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigurationError {
    #[error("Invalid root tag: {0}")]
    InvalidRootTag(String),

    #[error("Invalid maximum depth: {0}")]
    InvalidDepth(String),
}

/// Configuration validation trait
pub trait Validator {
    /// Validates the configuration settings
    ///
    /// # Errors
    ///
    /// Returns a `ConfigurationError` variant if any validation fails:
    /// - `InvalidRootTag` - if the root tag is empty or not a valid element name
    /// - `InvalidDepth` - if the maximum depth is zero or above `MAX_ALLOWED_DEPTH`
    fn validate(&self) -> ConfigResult<()>;
}

impl Validator for CodecConfig {
    fn validate(&self) -> ConfigResult<()> {
        validate_root_tag(&self.root_tag)?;
        validate_max_depth(self.max_depth)
    }
}

fn validate_root_tag(tag: &str) -> ConfigResult<()> {
    let mut chars = tag.chars();
    let Some(first) = chars.next() else {
        return Err(ConfigurationError::InvalidRootTag(
            "root tag cannot be empty".to_string(),
        ));
    };

    if !(first.is_alphabetic() || first == '_') {
        return Err(ConfigurationError::InvalidRootTag(format!(
            "'{tag}' must start with a letter or underscore"
        )));
    }

    if let Some(bad) = chars.find(|c| !is_name_char(*c)) {
        return Err(ConfigurationError::InvalidRootTag(format!(
            "'{tag}' contains invalid character '{bad}'"
        )));
    }

    Ok(())
}

fn validate_max_depth(max_depth: usize) -> ConfigResult<()> {
    if max_depth == 0 {
        return Err(ConfigurationError::InvalidDepth(
            "max_depth must be greater than zero".to_string(),
        ));
    }

    if max_depth > MAX_ALLOWED_DEPTH {
        return Err(ConfigurationError::InvalidDepth(format!(
            "max_depth cannot exceed {MAX_ALLOWED_DEPTH}"
        )));
    }

    Ok(())
}

/// Characters allowed after the first character of an element name
pub(crate) fn is_name_char(c: char) -> bool {
    c.is_alphanumeric() || matches!(c, '_' | '-' | '.')
}
