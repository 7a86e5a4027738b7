//! Scalar schema builders.
//!
//! This module provides the builder structs for the scalar schema kinds:
//! [`AnySchema`], [`BooleanSchema`], [`NumberSchema`], [`StringSchema`],
//! and [`ChoicesSchema`] with its [`ChoiceValue`] literals.

use std::fmt::{self, Display};

use serde_json::Value;

use super::Bounds;

/// A schema matching any node.
///
/// The engine resolves an `any` alternative into a concrete schema built
/// from the node's own shape before dispatch, so `any` accepts every
/// non-null node unconditionally. Its only configuration is a default for
/// absent positions.
///
/// # Example
///
/// ```rust
/// use yamlshape::{Schema, Validator};
///
/// let validator = Validator::new(Schema::any());
/// let value = validator.parse("anything: [1, two, true]").unwrap();
/// assert!(value.is_object());
/// ```
#[derive(Debug, Clone)]
pub struct AnySchema {
    pub(crate) default: Option<Value>,
}

impl AnySchema {
    /// Creates a new `any` schema.
    pub fn new() -> Self {
        Self { default: None }
    }

    /// Sets the value produced when the document position is absent or null.
    pub fn default(mut self, value: impl Into<Value>) -> Self {
        self.default = Some(value.into());
        self
    }
}

impl Default for AnySchema {
    fn default() -> Self {
        Self::new()
    }
}

/// A schema matching boolean scalars.
///
/// Booleans carry no constraints; a matching node is returned as-is.
#[derive(Debug, Clone)]
pub struct BooleanSchema {
    pub(crate) default: Option<Value>,
}

impl BooleanSchema {
    /// Creates a new boolean schema.
    pub fn new() -> Self {
        Self { default: None }
    }

    /// Sets the value produced when the document position is absent or null.
    pub fn default(mut self, value: impl Into<Value>) -> Self {
        self.default = Some(value.into());
        self
    }
}

impl Default for BooleanSchema {
    fn default() -> Self {
        Self::new()
    }
}

/// A schema matching numeric scalars, with optional inclusive bounds.
///
/// # Example
///
/// ```rust
/// use yamlshape::{Schema, Validator};
///
/// let validator = Validator::new(Schema::number().min(1.0).max(5.0));
/// assert!(validator.parse("5").is_ok());
/// assert!(validator.parse("6").is_err());
/// ```
#[derive(Debug, Clone)]
pub struct NumberSchema {
    pub(crate) default: Option<Value>,
    pub(crate) limit: Bounds<f64>,
}

impl NumberSchema {
    /// Creates a new number schema with no bounds.
    pub fn new() -> Self {
        Self {
            default: None,
            limit: Bounds::default(),
        }
    }

    /// Requires the number to be at least `value` (inclusive).
    pub fn min(mut self, value: f64) -> Self {
        self.limit.min = Some(value);
        self
    }

    /// Requires the number to be at most `value` (inclusive).
    pub fn max(mut self, value: f64) -> Self {
        self.limit.max = Some(value);
        self
    }

    /// Sets the value produced when the document position is absent or null.
    pub fn default(mut self, value: impl Into<Value>) -> Self {
        self.default = Some(value.into());
        self
    }
}

impl Default for NumberSchema {
    fn default() -> Self {
        Self::new()
    }
}

/// A schema matching string scalars, with optional inclusive length bounds.
///
/// Lengths are counted in characters, not bytes.
///
/// # Example
///
/// ```rust
/// use yamlshape::{Schema, Validator};
///
/// let validator = Validator::new(Schema::string().min_len(1).max_len(16));
/// assert!(validator.parse("hello").is_ok());
/// assert!(validator.parse("''").is_err());
/// ```
#[derive(Debug, Clone)]
pub struct StringSchema {
    pub(crate) default: Option<Value>,
    pub(crate) length: Bounds<usize>,
}

impl StringSchema {
    /// Creates a new string schema with no length bounds.
    pub fn new() -> Self {
        Self {
            default: None,
            length: Bounds::default(),
        }
    }

    /// Requires the string to be at least `length` characters (inclusive).
    pub fn min_len(mut self, length: usize) -> Self {
        self.length.min = Some(length);
        self
    }

    /// Requires the string to be at most `length` characters (inclusive).
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

impl Default for StringSchema {
    fn default() -> Self {
        Self::new()
    }
}

/// A literal a [`ChoicesSchema`] can match: a number or a string.
///
/// Matching is exact equality with no cross-type coercion; numbers compare
/// as `f64`.
#[derive(Debug, Clone, PartialEq)]
pub enum ChoiceValue {
    /// A numeric literal.
    Number(f64),
    /// A string literal.
    String(String),
}

impl Display for ChoiceValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChoiceValue::Number(n) => write!(f, "{}", n),
            ChoiceValue::String(s) => write!(f, "\"{}\"", s),
        }
    }
}

impl From<&str> for ChoiceValue {
    fn from(value: &str) -> Self {
        ChoiceValue::String(value.to_owned())
    }
}

impl From<String> for ChoiceValue {
    fn from(value: String) -> Self {
        ChoiceValue::String(value)
    }
}

impl From<f64> for ChoiceValue {
    fn from(value: f64) -> Self {
        ChoiceValue::Number(value)
    }
}

impl From<i64> for ChoiceValue {
    fn from(value: i64) -> Self {
        ChoiceValue::Number(value as f64)
    }
}

impl From<i32> for ChoiceValue {
    fn from(value: i32) -> Self {
        ChoiceValue::Number(f64::from(value))
    }
}

impl From<u32> for ChoiceValue {
    fn from(value: u32) -> Self {
        ChoiceValue::Number(f64::from(value))
    }
}

/// A schema matching a number or string scalar equal to one listed literal.
///
/// # Example
///
/// ```rust
/// use yamlshape::{Schema, Validator};
///
/// let validator = Validator::new(Schema::choices(["Teacher", "Driver"]));
/// assert!(validator.parse("Teacher").is_ok());
/// assert!(validator.parse("Pilot").is_err());
/// ```
#[derive(Debug, Clone)]
pub struct ChoicesSchema {
    pub(crate) choices: Vec<ChoiceValue>,
    pub(crate) default: Option<Value>,
}

impl ChoicesSchema {
    /// Creates a new choices schema over the given literals.
    pub fn new<I>(choices: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<ChoiceValue>,
    {
        Self {
            choices: choices.into_iter().map(Into::into).collect(),
            default: None,
        }
    }

    /// Sets the value produced when the document position is absent or null.
    pub fn default(mut self, value: impl Into<Value>) -> Self {
        self.default = Some(value.into());
        self
    }

    /// Whether any literal equals the given number.
    pub(crate) fn contains_number(&self, value: f64) -> bool {
        self.choices
            .iter()
            .any(|choice| matches!(choice, ChoiceValue::Number(n) if *n == value))
    }

    /// Whether any literal equals the given string.
    pub(crate) fn contains_str(&self, value: &str) -> bool {
        self.choices
            .iter()
            .any(|choice| matches!(choice, ChoiceValue::String(s) if s == value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_number_bounds_accumulate() {
        let schema = NumberSchema::new().min(1.0).max(5.0);
        assert_eq!(schema.limit.min, Some(1.0));
        assert_eq!(schema.limit.max, Some(5.0));
    }

    #[test]
    fn test_string_length_bounds() {
        let schema = StringSchema::new().min_len(2).max_len(8);
        assert_eq!(schema.length.min, Some(2));
        assert_eq!(schema.length.max, Some(8));
    }

    #[test]
    fn test_choice_value_conversions() {
        assert_eq!(ChoiceValue::from("a"), ChoiceValue::String("a".into()));
        assert_eq!(ChoiceValue::from(3), ChoiceValue::Number(3.0));
        assert_eq!(ChoiceValue::from(1.5), ChoiceValue::Number(1.5));
    }

    #[test]
    fn test_choices_matching_is_typed() {
        let schema = ChoicesSchema::new(["1"]);
        // The string "1" does not match the number 1.
        assert!(schema.contains_str("1"));
        assert!(!schema.contains_number(1.0));
    }

    #[test]
    fn test_choices_number_matching() {
        let schema = ChoicesSchema::new([1, 2, 3]);
        assert!(schema.contains_number(2.0));
        assert!(!schema.contains_number(4.0));
        assert!(!schema.contains_str("2"));
    }
}
