//! Composite objects, callables and opaque runtime values

use std::fmt;

use super::{Mapping, Value};

/// Capability trait for types whose named fields can be enumerated
///
/// Implementors are resolved once, at the encoder boundary, into a
/// [`Value::Composite`] through [`Value::from_fields`].
///
/// ```
/// use jsonquery_core::value::{EnumerableFields, Value};
///
/// struct Point { x: i64, y: i64 }
///
/// impl EnumerableFields for Point {
///     fn type_name(&self) -> &str { "Point" }
///     fn declared_fields(&self) -> Option<&[&str]> { Some(&["x", "y"]) }
///     fn field_values(&self) -> Vec<(String, Value)> {
///         vec![("x".into(), self.x.into()), ("y".into(), self.y.into())]
///     }
/// }
///
/// let value = Value::from_fields(&Point { x: 1, y: 2 });
/// assert_eq!(value.type_name(), "Point");
/// ```
pub trait EnumerableFields {
    /// Type name written to the `datatype` attribute
    fn type_name(&self) -> &str;

    /// Fixed field-name list for record-like types; `None` when the field set
    /// is discovered from `field_values`
    fn declared_fields(&self) -> Option<&[&str]> {
        None
    }

    /// Field name/value pairs in their natural order
    fn field_values(&self) -> Vec<(String, Value)>;
}

/// Where a composite's field names come from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldLayout {
    /// Field set discovered from the stored values, in stored order
    Dynamic,
    /// Explicitly declared field names, iterated in declaration order
    Declared(Vec<String>),
}

/// Object with a type name and named fields
#[derive(Debug, Clone, PartialEq)]
pub struct Composite {
    type_name: String,
    layout: FieldLayout,
    values: Mapping,
}

impl Composite {
    /// Composite whose field set is whatever `values` holds
    pub fn dynamic(type_name: impl Into<String>, values: Mapping) -> Self {
        Self {
            type_name: type_name.into(),
            layout: FieldLayout::Dynamic,
            values,
        }
    }

    /// Composite with a declared field list; names without a stored value are
    /// treated as unset
    pub fn declared<I, S>(type_name: impl Into<String>, names: I, values: Mapping) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            type_name: type_name.into(),
            layout: FieldLayout::Declared(names.into_iter().map(Into::into).collect()),
            values,
        }
    }

    pub fn from_fields<T: EnumerableFields + ?Sized>(object: &T) -> Self {
        let values: Mapping = object.field_values().into_iter().collect();
        match object.declared_fields() {
            Some(names) => Self::declared(object.type_name(), names.iter().copied(), values),
            None => Self::dynamic(object.type_name(), values),
        }
    }

    #[must_use]
    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    #[must_use]
    pub fn layout(&self) -> &FieldLayout {
        &self.layout
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.values.get(name)
    }

    /// Fields in encoding order: stored order for dynamic layouts, declaration
    /// order for declared layouts (unset names are left out)
    #[must_use]
    pub fn fields(&self) -> Vec<(&str, &Value)> {
        match &self.layout {
            FieldLayout::Dynamic => self
                .values
                .iter()
                .map(|(name, value)| (name.as_str(), value))
                .collect(),
            FieldLayout::Declared(names) => names
                .iter()
                .filter_map(|name| {
                    let value = self.values.get(name);
                    if value.is_none() {
                        tracing::trace!(
                            target: "jsonquery::value",
                            type_name = %self.type_name,
                            field = %name,
                            "declared field has no value, skipping"
                        );
                    }
                    value.map(|value| (name.as_str(), value))
                })
                .collect(),
        }
    }
}

impl fmt::Display for Composite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(", self.type_name)?;
        for (i, (name, value)) in self.fields().into_iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{name}={value}")?;
        }
        f.write_str(")")
    }
}

/// A function-like runtime value
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Callable {
    name: String,
}

impl Callable {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for Callable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<function {}>", self.name)
    }
}

/// A runtime value with no enumerable structure
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Opaque {
    type_name: String,
    repr: String,
}

impl Opaque {
    pub fn new(type_name: impl Into<String>, repr: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            repr: repr.into(),
        }
    }

    #[must_use]
    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    #[must_use]
    pub fn repr(&self) -> &str {
        &self.repr
    }
}

impl fmt::Display for Opaque {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.repr)
    }
}
