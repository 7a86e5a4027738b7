//! Schema definitions for validation.
//!
//! A schema describes the shape a document position must have and the value
//! the engine produces for it. The set of schema kinds is closed: any,
//! boolean, number, string, choices, array, fixed-props object, and
//! wildcard object. Every kind may carry a `default` used when the
//! corresponding document position is absent or null.
//!
//! Schemas are built through per-kind builder structs reached from the
//! factory methods on [`Schema`]:
//!
//! ```rust
//! use yamlshape::Schema;
//!
//! let schema = Schema::object()
//!     .field("host", Schema::string().min_len(1))
//!     .field("port", Schema::number().min(1.0).max(65535.0).default(8080));
//! ```
//!
//! A schema position always holds either a single schema or an ordered,
//! non-empty union of alternatives ([`SchemaSet`]), tried left to right:
//!
//! ```rust
//! use yamlshape::Schema;
//!
//! // A job is either one of the known titles, or any other string.
//! let job = Schema::choices(["Teacher", "Driver"]).or(Schema::string());
//! ```

mod array;
mod object;
mod scalar;

pub use array::ArraySchema;
pub use object::{ObjectSchema, WildcardSchema};
pub use scalar::{
    AnySchema, BooleanSchema, ChoiceValue, ChoicesSchema, NumberSchema, StringSchema,
};

use serde_json::Value;

use crate::node::NodeKind;

/// Inclusive lower/upper bounds for a constraint.
///
/// An unset side is unbounded. Used for numeric limits (`f64`) and for
/// string/array/object length limits (`usize`).
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Bounds<T> {
    /// Inclusive lower bound.
    pub min: Option<T>,
    /// Inclusive upper bound.
    pub max: Option<T>,
}

/// A declarative description of the shape one document position must have.
///
/// `Schema` is a closed tagged union; the engine dispatches on it with
/// exhaustive matches. Construct values through the factory methods, which
/// return the per-kind builder structs; builders convert into `Schema` (and
/// into [`SchemaSet`]) implicitly wherever a schema is expected.
#[derive(Debug, Clone)]
pub enum Schema {
    /// Matches any node; resolved to a concrete schema before dispatch.
    Any(AnySchema),
    /// Matches boolean scalars.
    Boolean(BooleanSchema),
    /// Matches numeric scalars, with optional inclusive bounds.
    Number(NumberSchema),
    /// Matches string scalars, with optional inclusive length bounds.
    String(StringSchema),
    /// Matches a scalar equal to one of the listed literals.
    Choices(ChoicesSchema),
    /// Matches sequences, validating each element.
    Array(ArraySchema),
    /// Matches mappings with a fixed set of named properties.
    Object(ObjectSchema),
    /// Matches mappings with arbitrary keys, validating every value.
    Wildcard(WildcardSchema),
}

impl Schema {
    /// Creates a schema matching any node.
    pub fn any() -> AnySchema {
        AnySchema::new()
    }

    /// Creates a schema matching boolean scalars.
    pub fn boolean() -> BooleanSchema {
        BooleanSchema::new()
    }

    /// Creates a schema matching numeric scalars.
    pub fn number() -> NumberSchema {
        NumberSchema::new()
    }

    /// Creates a schema matching string scalars.
    pub fn string() -> StringSchema {
        StringSchema::new()
    }

    /// Creates a schema matching a scalar equal to one listed literal.
    ///
    /// ```rust
    /// use yamlshape::Schema;
    ///
    /// let title = Schema::choices(["Teacher", "Driver"]);
    /// let level = Schema::choices([1, 2, 3]);
    /// ```
    pub fn choices<I>(choices: I) -> ChoicesSchema
    where
        I: IntoIterator,
        I::Item: Into<ChoiceValue>,
    {
        ChoicesSchema::new(choices)
    }

    /// Creates a schema matching sequences whose elements satisfy `element`.
    pub fn array(element: impl Into<SchemaSet>) -> ArraySchema {
        ArraySchema::new(element)
    }

    /// Creates a schema matching mappings with fixed named properties.
    pub fn object() -> ObjectSchema {
        ObjectSchema::new()
    }

    /// Creates a schema matching mappings of arbitrary keys whose values
    /// all satisfy `values`.
    pub fn wildcard(values: impl Into<SchemaSet>) -> WildcardSchema {
        WildcardSchema::new(values)
    }

    /// The default carried by this schema, if any.
    pub(crate) fn default_value(&self) -> Option<&Value> {
        match self {
            Schema::Any(s) => s.default.as_ref(),
            Schema::Boolean(s) => s.default.as_ref(),
            Schema::Number(s) => s.default.as_ref(),
            Schema::String(s) => s.default.as_ref(),
            Schema::Choices(s) => s.default.as_ref(),
            Schema::Array(s) => s.default.as_ref(),
            Schema::Object(s) => s.default.as_ref(),
            Schema::Wildcard(s) => s.default.as_ref(),
        }
    }

    /// Whether a node of the given kind can be validated by this schema.
    ///
    /// Choices accept number and string scalars; every other kind requires
    /// an exact match. `Unknown` nodes match nothing (`Any` never reaches
    /// this check: the engine resolves it to a concrete schema first).
    pub(crate) fn accepts(&self, kind: NodeKind) -> bool {
        match self {
            Schema::Any(_) => true,
            Schema::Boolean(_) => kind == NodeKind::Boolean,
            Schema::Number(_) => kind == NodeKind::Number,
            Schema::String(_) => kind == NodeKind::String,
            Schema::Choices(_) => matches!(kind, NodeKind::Number | NodeKind::String),
            Schema::Array(_) => kind == NodeKind::Array,
            Schema::Object(_) | Schema::Wildcard(_) => kind == NodeKind::Object,
        }
    }

    /// The declared document type of this schema, for diagnostics.
    pub(crate) fn type_name(&self) -> &'static str {
        match self {
            Schema::Any(_) => "any",
            Schema::Boolean(_) => "boolean",
            Schema::Number(_) => "number",
            Schema::String(_) => "string",
            Schema::Choices(_) => "choices",
            Schema::Array(_) => "array",
            Schema::Object(_) | Schema::Wildcard(_) => "object",
        }
    }
}

/// An ordered, non-empty union of schema alternatives for one document
/// position.
///
/// Alternatives are tried left to right; the first structurally-compatible
/// and constraint-satisfying alternative wins. A single schema converts
/// implicitly; unions are built with [`SchemaSet::union`] or by chaining
/// [`or`](SchemaSet::or) on any schema builder.
#[derive(Debug, Clone)]
pub struct SchemaSet {
    alternatives: Vec<Schema>,
}

impl SchemaSet {
    /// Builds a union from an ordered list of alternatives.
    ///
    /// # Panics
    ///
    /// Panics if `alternatives` is empty; a schema position always holds at
    /// least one alternative.
    pub fn union(alternatives: impl IntoIterator<Item = Schema>) -> Self {
        let alternatives: Vec<Schema> = alternatives.into_iter().collect();
        assert!(
            !alternatives.is_empty(),
            "a schema union needs at least one alternative"
        );
        Self { alternatives }
    }

    /// Appends an alternative, keeping the existing order.
    pub fn or(mut self, alternative: impl Into<Schema>) -> Self {
        self.alternatives.push(alternative.into());
        self
    }

    /// The alternatives in declaration order. Never empty.
    pub fn alternatives(&self) -> &[Schema] {
        &self.alternatives
    }
}

impl From<Schema> for SchemaSet {
    fn from(schema: Schema) -> Self {
        Self {
            alternatives: vec![schema],
        }
    }
}

impl From<Vec<Schema>> for SchemaSet {
    fn from(alternatives: Vec<Schema>) -> Self {
        Self::union(alternatives)
    }
}

/// Conversions and union-chaining for the per-kind builder structs.
macro_rules! impl_builder_conversions {
    ($($builder:ident => $variant:ident),* $(,)?) => {$(
        impl From<$builder> for Schema {
            fn from(schema: $builder) -> Self {
                Schema::$variant(schema)
            }
        }

        impl From<$builder> for SchemaSet {
            fn from(schema: $builder) -> Self {
                SchemaSet::from(Schema::$variant(schema))
            }
        }

        impl $builder {
            /// Combines this schema with an alternative into an ordered
            /// union; `self` is tried first.
            pub fn or(self, alternative: impl Into<Schema>) -> SchemaSet {
                SchemaSet::from(Schema::$variant(self)).or(alternative)
            }
        }
    )*};
}

impl_builder_conversions! {
    AnySchema => Any,
    BooleanSchema => Boolean,
    NumberSchema => Number,
    StringSchema => String,
    ChoicesSchema => Choices,
    ArraySchema => Array,
    ObjectSchema => Object,
    WildcardSchema => Wildcard,
}
