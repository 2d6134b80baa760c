//! Fluent query builder
//!
//! Configure where the document comes from and how it is encoded, pick a
//! path, then run one of the terminal methods.

pub mod core;
pub mod execution;

pub use self::core::{JsonQuery, PathNotSet, PathSet};
