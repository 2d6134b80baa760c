//! Core `JsonQuery` structures and configuration methods

use std::fmt;
use std::path::PathBuf;

use jsonquery_core::codec::{ArrayFallback, NoFallback};
use jsonquery_core::config::CodecConfig;
use jsonquery_core::value::Value;
use jsonquery_core::xpath::{PathEngine, QueryEngine};

use crate::source::JsonSource;

/// State marker indicating no path has been set
#[derive(Debug, Clone, Copy)]
pub struct PathNotSet;

/// Path expression the query will run
#[derive(Debug, Clone)]
pub struct PathSet {
    pub path: String,
}

/// Builder for one encode, query and decode cycle
///
/// Type parameter `S` tracks the path state:
/// - `PathNotSet`: the document and settings can be configured, and
///   [`JsonQuery::tree`] is available
/// - `PathSet`: the selection terminals [`JsonQuery::nodes`] and
///   [`JsonQuery::value`] become available
pub struct JsonQuery<S = PathNotSet> {
    pub(crate) source: JsonSource,
    pub(crate) config: CodecConfig,
    pub(crate) engine: Box<dyn QueryEngine>,
    pub(crate) fallback: Box<dyn ArrayFallback>,
    /// Type state - stores actual state data, not just a marker
    pub(crate) state: S,
    pub(crate) debug_enabled: bool,
}

impl JsonQuery<PathNotSet> {
    /// Start from an in-memory document
    #[must_use]
    pub fn new(document: impl Into<Value>) -> Self {
        Self::source(JsonSource::Value(document.into()))
    }

    /// Start from JSON text
    #[must_use]
    pub fn json(text: impl Into<String>) -> Self {
        Self::source(JsonSource::Text(text.into()))
    }

    /// Start from a JSON file
    #[must_use]
    pub fn file(path: impl Into<PathBuf>) -> Self {
        Self::source(JsonSource::File(path.into()))
    }

    /// Start from any [`JsonSource`]; strings are resolved as file paths when
    /// the file exists
    #[must_use]
    pub fn source(source: impl Into<JsonSource>) -> Self {
        Self {
            source: source.into(),
            config: CodecConfig::default(),
            engine: Box::new(PathEngine::new()),
            fallback: Box::new(NoFallback),
            state: PathNotSet,
            debug_enabled: false,
        }
    }

    /// Set the path expression to evaluate
    #[must_use]
    pub fn path(self, path: &str) -> JsonQuery<PathSet> {
        JsonQuery {
            source: self.source,
            config: self.config,
            engine: self.engine,
            fallback: self.fallback,
            state: PathSet {
                path: path.to_string(),
            },
            debug_enabled: self.debug_enabled,
        }
    }
}

impl<S> JsonQuery<S> {
    /// Replace the codec configuration
    #[must_use]
    pub fn config(mut self, config: CodecConfig) -> Self {
        self.config = config;
        self
    }

    /// Evaluate paths with another engine
    #[must_use]
    pub fn engine(mut self, engine: impl QueryEngine + 'static) -> Self {
        self.engine = Box::new(engine);
        self
    }

    /// Post-process multi-key results with an array fallback
    #[must_use]
    pub fn fallback(mut self, fallback: impl ArrayFallback + 'static) -> Self {
        self.fallback = Box::new(fallback);
        self
    }

    /// Enable debug logging for this query
    #[must_use]
    pub fn debug(mut self) -> Self {
        self.debug_enabled = true;
        self
    }
}

impl<S: fmt::Debug> fmt::Debug for JsonQuery<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JsonQuery")
            .field("source", &self.source)
            .field("config", &self.config)
            .field("fallback_available", &self.fallback.is_available())
            .field("state", &self.state)
            .field("debug_enabled", &self.debug_enabled)
            .finish_non_exhaustive()
    }
}
