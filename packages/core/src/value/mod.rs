//! Dynamic value model
//!
//! [`Value`] is the closed set of shapes the codec understands: JSON-like
//! scalars, ordered sequences, ordered mappings and composite objects with
//! enumerable fields. Two extra variants, [`Callable`] and [`Opaque`], describe
//! values that exist at runtime but have no enumerable structure; the encoder
//! rejects them (or skips callables held in composite fields).

mod composite;
mod conversions;

use std::fmt;

use indexmap::IndexMap;

pub use composite::{Callable, Composite, EnumerableFields, FieldLayout, Opaque};

use crate::codec::attributes::datatype;

/// Ordered key/value mapping, iterated in insertion order
pub type Mapping = IndexMap<String, Value>;

/// A dynamically typed document value
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    #[default]
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    String(String),
    Sequence(Vec<Value>),
    Mapping(Mapping),
    Composite(Composite),
    Callable(Callable),
    Opaque(Opaque),
}

impl Value {
    /// Runtime type name recorded in the `datatype` attribute
    #[must_use]
    pub fn type_name(&self) -> &str {
        match self {
            Value::Null => datatype::NONE,
            Value::Bool(_) => datatype::BOOL,
            Value::Int(_) => datatype::INT,
            Value::Float(_) => datatype::FLOAT,
            Value::String(_) => datatype::STR,
            Value::Sequence(_) => datatype::LIST,
            Value::Mapping(_) => datatype::DICT,
            Value::Composite(composite) => composite.type_name(),
            Value::Callable(_) => datatype::FUNCTION,
            Value::Opaque(opaque) => opaque.type_name(),
        }
    }

    /// Whether the value is a single scalar with a text form
    #[inline]
    #[must_use]
    pub fn is_atomic(&self) -> bool {
        matches!(
            self,
            Value::Null | Value::Bool(_) | Value::Int(_) | Value::Float(_) | Value::String(_)
        )
    }

    #[inline]
    #[must_use]
    pub fn is_callable(&self) -> bool {
        matches!(self, Value::Callable(_))
    }

    /// Text stored on a leaf node, `None` for anything that is not atomic
    #[must_use]
    pub fn to_text(&self) -> Option<String> {
        match self {
            Value::Null => Some("null".to_string()),
            Value::Bool(b) => Some(b.to_string()),
            Value::Int(i) => Some(i.to_string()),
            Value::Float(f) => Some(format_float(*f)),
            Value::String(s) => Some(s.clone()),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// Numeric view of `Int` and `Float` values
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Int(i) => Some(*i as f64),
            Value::Float(f) => Some(*f),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_sequence(&self) -> Option<&[Value]> {
        match self {
            Value::Sequence(items) => Some(items),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_mapping(&self) -> Option<&Mapping> {
        match self {
            Value::Mapping(map) => Some(map),
            _ => None,
        }
    }

    /// Look up a key in a mapping or a composite field
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        match self {
            Value::Mapping(map) => map.get(key),
            Value::Composite(composite) => composite.get(key),
            _ => None,
        }
    }

    /// Resolve an object implementing [`EnumerableFields`] into a composite value
    pub fn from_fields<T: EnumerableFields + ?Sized>(object: &T) -> Self {
        Value::Composite(Composite::from_fields(object))
    }
}

/// Shortest text that parses back to the same float, keeping a trailing `.0`
/// on integral values so the text still reads as a float.
#[must_use]
pub fn format_float(value: f64) -> String {
    format!("{value:?}")
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Sequence(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{item}")?;
                }
                f.write_str("]")
            }
            Value::Mapping(map) => {
                f.write_str("{")?;
                for (i, (key, item)) in map.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{key:?}: {item}")?;
                }
                f.write_str("}")
            }
            Value::String(s) => write!(f, "{s:?}"),
            Value::Composite(composite) => write!(f, "{composite}"),
            Value::Callable(callable) => write!(f, "{callable}"),
            Value::Opaque(opaque) => write!(f, "{opaque}"),
            scalar => match scalar.to_text() {
                Some(text) => f.write_str(&text),
                None => Ok(()),
            },
        }
    }
}
