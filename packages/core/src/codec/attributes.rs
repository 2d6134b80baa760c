//! Attribute names and datatype labels written by the encoder and read by the
//! decoder.

/// Runtime type name of the encoded value
pub const DATATYPE: &str = "datatype";

/// `"true"` when the node is one of several siblings from the same key
pub const LIST_MEMBER: &str = "list_member";

/// Zero-based position among siblings sharing a tag
pub const INDEX: &str = "index";

/// Rendered `list_member` values
pub const TRUE: &str = "true";
pub const FALSE: &str = "false";

/// Datatype labels for the built-in value kinds
pub mod datatype {
    pub const NONE: &str = "none";
    pub const BOOL: &str = "bool";
    pub const INT: &str = "int";
    pub const FLOAT: &str = "float";
    pub const STR: &str = "str";
    pub const LIST: &str = "list";
    pub const DICT: &str = "dict";
    pub const FUNCTION: &str = "function";
}

/// Render a boolean the way `list_member` stores it
#[inline]
#[must_use]
pub fn flag(value: bool) -> &'static str {
    if value { TRUE } else { FALSE }
}
