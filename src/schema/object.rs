//! Object schema builders.
//!
//! Mappings are validated by one of two distinct schema kinds:
//! [`ObjectSchema`] extracts a fixed set of named properties, while
//! [`WildcardSchema`] validates arbitrary keys uniformly against one value
//! schema. Making them separate kinds keeps the two forms mutually
//! exclusive by construction.

use indexmap::IndexMap;
use serde_json::Value;

use super::{Bounds, SchemaSet};

/// A schema matching mappings with a fixed set of named properties.
///
/// Exactly the declared properties are extracted into the result, in
/// declaration order; keys present in the document but not declared are
/// ignored, and declared keys absent from the document are looked up as
/// null (so a property-level `default` fills them).
///
/// # Example
///
/// ```rust
/// use serde_json::json;
/// use yamlshape::{Schema, Validator};
///
/// let validator = Validator::new(
///     Schema::object()
///         .field("name", Schema::string())
///         .field("retries", Schema::number().default(0)),
/// );
///
/// let value = validator.parse("name: fetcher").unwrap();
/// assert_eq!(value, json!({"name": "fetcher", "retries": 0}));
/// ```
#[derive(Debug, Clone)]
pub struct ObjectSchema {
    pub(crate) props: IndexMap<String, SchemaSet>,
    pub(crate) default: Option<Value>,
}

impl ObjectSchema {
    /// Creates a new object schema with no properties.
    pub fn new() -> Self {
        Self {
            props: IndexMap::new(),
            default: None,
        }
    }

    /// Declares a property. Properties are validated in declaration order.
    pub fn field(mut self, name: impl Into<String>, schema: impl Into<SchemaSet>) -> Self {
        self.props.insert(name.into(), schema.into());
        self
    }

    /// Sets the value produced when the document position is absent or null.
    pub fn default(mut self, value: impl Into<Value>) -> Self {
        self.default = Some(value.into());
        self
    }
}

impl Default for ObjectSchema {
    fn default() -> Self {
        Self::new()
    }
}

/// A schema matching mappings of arbitrary keys.
///
/// Every entry's value is validated against the `values` schema position;
/// the result keeps the document's own keys. An optional inclusive length
/// bound constrains the number of entries.
///
/// # Example
///
/// ```rust
/// use yamlshape::{Schema, Validator};
///
/// let validator = Validator::new(
///     Schema::wildcard(Schema::number()).min_len(1),
/// );
///
/// assert!(validator.parse("a: 1\nb: 2").is_ok());
/// assert!(validator.parse("{}").is_err());
/// ```
#[derive(Debug, Clone)]
pub struct WildcardSchema {
    pub(crate) values: SchemaSet,
    pub(crate) default: Option<Value>,
    pub(crate) length: Bounds<usize>,
}

impl WildcardSchema {
    /// Creates a new wildcard schema whose entry values satisfy `values`.
    pub fn new(values: impl Into<SchemaSet>) -> Self {
        Self {
            values: values.into(),
            default: None,
            length: Bounds::default(),
        }
    }

    /// Requires the mapping to hold at least `length` entries (inclusive).
    pub fn min_len(mut self, length: usize) -> Self {
        self.length.min = Some(length);
        self
    }

    /// Requires the mapping to hold at most `length` entries (inclusive).
    pub fn max_len(mut self, length: usize) -> Self {
        self.length.max = Some(length);
        self
    }

    /// Sets the value produced when the document position is absent or null.
    pub fn default(mut self, value: impl Into<Value>) -> Self {
        self.default = Some(value.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fields_keep_declaration_order() {
        let schema = ObjectSchema::new()
            .field("b", crate::Schema::string())
            .field("a", crate::Schema::string());

        let names: Vec<_> = schema.props.keys().collect();
        assert_eq!(names, ["b", "a"]);
    }

    #[test]
    fn test_redeclared_field_replaces_schema_in_place() {
        let schema = ObjectSchema::new()
            .field("a", crate::Schema::string())
            .field("b", crate::Schema::string())
            .field("a", crate::Schema::number());

        let names: Vec<_> = schema.props.keys().collect();
        assert_eq!(names, ["a", "b"]);
        assert!(matches!(
            schema.props["a"].alternatives()[0],
            crate::Schema::Number(_)
        ));
    }

    #[test]
    fn test_wildcard_length_bounds() {
        let schema = WildcardSchema::new(crate::Schema::any()).min_len(1).max_len(4);
        assert_eq!(schema.length.min, Some(1));
        assert_eq!(schema.length.max, Some(4));
    }
}
