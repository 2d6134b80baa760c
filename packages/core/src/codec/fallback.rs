//! Optional array representation for multi-key decode results

use crate::value::{Mapping, Value};

/// Post-processing hook applied when a decoded result keeps more than one key
pub trait ArrayFallback {
    /// Whether an array facility is available at all
    fn is_available(&self) -> bool;

    /// Convert a multi-key mapping, or hand it back unchanged
    fn convert(&self, mapping: Mapping) -> Value;
}

/// No array facility: mappings are returned as-is
#[derive(Debug, Clone, Copy, Default)]
pub struct NoFallback;

impl ArrayFallback for NoFallback {
    fn is_available(&self) -> bool {
        false
    }

    fn convert(&self, mapping: Mapping) -> Value {
        Value::Mapping(mapping)
    }
}

/// Turns a mapping of equal-length numeric sequences into a row-per-key
/// matrix
///
/// Any other mapping is returned unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct MatrixFallback;

impl ArrayFallback for MatrixFallback {
    fn is_available(&self) -> bool {
        true
    }

    fn convert(&self, mapping: Mapping) -> Value {
        let mut width = None;
        let rectangular = mapping.values().all(|value| match value {
            Value::Sequence(items) if items.iter().all(|item| item.as_f64().is_some()) => {
                *width.get_or_insert(items.len()) == items.len()
            }
            _ => false,
        });

        if !rectangular || mapping.is_empty() {
            return Value::Mapping(mapping);
        }

        tracing::trace!(
            target: "jsonquery::decoder",
            rows = mapping.len(),
            columns = width.unwrap_or_default(),
            "converted mapping to matrix"
        );
        Value::Sequence(mapping.into_values().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matrix_fallback_builds_rows_in_key_order() {
        let mapping: Mapping = [
            ("x".to_string(), Value::from(vec![1.0, 2.0])),
            ("y".to_string(), Value::from(vec![3, 4])),
        ]
        .into_iter()
        .collect();

        let converted = MatrixFallback.convert(mapping);
        assert_eq!(
            converted,
            Value::Sequence(vec![Value::from(vec![1.0, 2.0]), Value::from(vec![3, 4])])
        );
    }

    #[test]
    fn matrix_fallback_leaves_ragged_or_textual_mappings() {
        let ragged: Mapping = [
            ("x".to_string(), Value::from(vec![1, 2])),
            ("y".to_string(), Value::from(vec![3])),
        ]
        .into_iter()
        .collect();
        assert!(matches!(MatrixFallback.convert(ragged), Value::Mapping(_)));

        let textual: Mapping = [
            ("x".to_string(), Value::from("a")),
            ("y".to_string(), Value::from("b")),
        ]
        .into_iter()
        .collect();
        assert!(matches!(MatrixFallback.convert(textual), Value::Mapping(_)));
    }

    #[test]
    fn no_fallback_is_unavailable() {
        assert!(!NoFallback.is_available());
    }
}
