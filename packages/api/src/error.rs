//! Errors surfaced by the public API

use std::path::{Path, PathBuf};

use jsonquery_core::config::ConfigurationError;
use jsonquery_core::error::{ConversionError, QueryError};

/// A Result alias where the Err case is [`JsonQueryError`]
pub type Result<T> = std::result::Result<T, JsonQueryError>;

/// Every failure a load, encode, query and decode cycle can produce
#[derive(Debug, thiserror::Error)]
pub enum JsonQueryError {
    #[error(transparent)]
    Conversion(#[from] ConversionError),

    #[error(transparent)]
    Query(#[from] QueryError),

    #[error(transparent)]
    Configuration(#[from] ConfigurationError),

    #[error("Invalid JSON document: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Failed to read '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl JsonQueryError {
    /// Wrap an IO failure with the path that caused it
    #[must_use]
    pub fn io(path: &Path, source: std::io::Error) -> Self {
        Self::Io {
            path: path.to_path_buf(),
            source,
        }
    }

    /// `true` when the failure came from the path expression
    #[must_use]
    pub fn is_query_error(&self) -> bool {
        matches!(self, Self::Query(_))
    }
}
