//! Where a JSON document comes from

use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

use jsonquery_core::value::Value;

use crate::error::{JsonQueryError, Result};

/// A JSON document that has not been loaded yet
#[derive(Debug, Clone, PartialEq)]
pub enum JsonSource {
    /// Already-parsed document
    Value(Value),
    /// JSON text
    Text(String),
    /// Path of a file holding JSON text
    File(PathBuf),
}

impl JsonSource {
    /// Treat `input` as a file path when such a file exists, otherwise as
    /// JSON text
    #[must_use]
    pub fn resolve(input: &str) -> Self {
        let candidate = Path::new(input);
        if candidate.is_file() {
            log::debug!("Resolved JSON source as file: {}", candidate.display());
            Self::File(candidate.to_path_buf())
        } else {
            Self::Text(input.to_string())
        }
    }

    /// Parse the document
    ///
    /// # Errors
    ///
    /// Returns `JsonQueryError::Io` when a file cannot be read and
    /// `JsonQueryError::Json` when the text is not valid JSON.
    pub fn load(self) -> Result<Value> {
        match self {
            Self::Value(value) => Ok(value),
            Self::Text(text) => parse_text(&text),
            Self::File(path) => {
                let text =
                    fs::read_to_string(&path).map_err(|err| JsonQueryError::io(&path, err))?;
                tracing::debug!(
                    target: "jsonquery::source",
                    path = %path.display(),
                    bytes = text.len(),
                    "loaded JSON file"
                );
                parse_text(&text)
            }
        }
    }
}

fn parse_text(text: &str) -> Result<Value> {
    let parsed: serde_json::Value = serde_json::from_str(text)?;
    Ok(parsed.into())
}

/// Parse a JSON document from any reader
///
/// # Errors
///
/// Returns `JsonQueryError::Json` for read failures and malformed JSON.
pub fn read_value<R: Read>(reader: R) -> Result<Value> {
    let parsed: serde_json::Value = serde_json::from_reader(reader)?;
    Ok(parsed.into())
}

impl From<Value> for JsonSource {
    fn from(value: Value) -> Self {
        Self::Value(value)
    }
}

impl From<serde_json::Value> for JsonSource {
    fn from(value: serde_json::Value) -> Self {
        Self::Value(value.into())
    }
}

impl From<&str> for JsonSource {
    fn from(input: &str) -> Self {
        Self::resolve(input)
    }
}

impl From<String> for JsonSource {
    fn from(input: String) -> Self {
        Self::resolve(&input)
    }
}

impl From<&Path> for JsonSource {
    fn from(path: &Path) -> Self {
        Self::File(path.to_path_buf())
    }
}

impl From<PathBuf> for JsonSource {
    fn from(path: PathBuf) -> Self {
        Self::File(path)
    }
}
