//! Array schema builder.

use serde_json::Value;

use super::{Bounds, SchemaSet};

/// A schema matching sequences, with optional inclusive length bounds.
///
/// Every element is validated against the `element` schema position, which
/// may itself be a union of alternatives.
///
/// # Example
///
/// ```rust
/// use yamlshape::{Schema, Validator};
///
/// let validator = Validator::new(
///     Schema::array(Schema::choices(["Teacher", "Driver"])).min_len(1),
/// );
///
/// assert!(validator.parse("- Teacher\n- Driver").is_ok());
/// assert!(validator.parse("[]").is_err());
/// ```
#[derive(Debug, Clone)]
pub struct ArraySchema {
    pub(crate) element: SchemaSet,
    pub(crate) default: Option<Value>,
    pub(crate) length: Bounds<usize>,
}

impl ArraySchema {
    /// Creates a new array schema whose elements satisfy `element`.
    pub fn new(element: impl Into<SchemaSet>) -> Self {
        Self {
            element: element.into(),
            default: None,
            length: Bounds::default(),
        }
    }

    /// Requires the sequence to hold at least `length` items (inclusive).
    pub fn min_len(mut self, length: usize) -> Self {
        self.length.min = Some(length);
        self
    }

    /// Requires the sequence to hold at most `length` items (inclusive).
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
