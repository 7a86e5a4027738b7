//! The transform engine.
//!
//! [`Validator`] is the sole entry point: it parses raw text through the
//! external document parser and recursively transforms the resulting tree
//! against the schema it was constructed with. Each recursion step follows
//! the same shape:
//!
//! 1. A null (or absent) node takes the first `default` declared by the
//!    alternatives, or fails with `REQUIRED`.
//! 2. The node is classified and the alternatives are filtered down to the
//!    type-compatible candidates; `any` alternatives are first replaced by
//!    a concrete schema synthesized from the node's own shape. No surviving
//!    candidate means `INVALID_TYPE`.
//! 3. The survivors are dispatched to the validator for the node's kind.
//!    Scalar choices are tried before plain number/string constraints and
//!    fall through to them when the same union also declares the scalar's
//!    own type. Number, string, and array constraint unions are
//!    first-success: the first candidate whose bounds hold wins. Object
//!    unions are last-failure-reported: see [`Validator::transform`].
//! 4. Failures inside containers get the local key or index appended to
//!    their path on the way out, so the error reaching the caller carries
//!    the full route from the document root to the failure site.

use std::borrow::Cow;

use serde_json::{Map, Value};
use serde_yaml::{Mapping, Value as Node};

use crate::error::{Error, ErrorCode, SchemaError};
use crate::node::{infer_schema, NodeKind};
use crate::schema::{ArraySchema, Schema, SchemaSet};

/// Validates parsed documents against a fixed root schema.
///
/// A validator is constructed once over a schema (or union of schemas) and
/// can then transform any number of documents. It holds no mutable state:
/// independent instances, or one instance shared across threads, never
/// interfere.
///
/// Validation recurses once per nesting level, so the practical ceiling on
/// document nesting is the platform call stack; no explicit depth guard is
/// applied.
///
/// # Example
///
/// ```rust
/// use serde_json::json;
/// use yamlshape::{Schema, Validator};
///
/// let validator = Validator::new(
///     Schema::object()
///         .field("host", Schema::string().min_len(1))
///         .field("port", Schema::number().min(1.0).max(65535.0).default(8080)),
/// );
///
/// let value = validator.parse("host: example.org").unwrap();
/// assert_eq!(value, json!({"host": "example.org", "port": 8080}));
/// ```
#[derive(Debug, Clone)]
pub struct Validator {
    schema: SchemaSet,
}

// A validator owns immutable data only, so sharing one across threads is
// safe; these assertions keep that true if the schema types change.
const _: () = {
    const fn assert_send<T: Send>() {}
    const fn assert_sync<T: Sync>() {}
    assert_send::<Validator>();
    assert_sync::<Validator>();
};

impl Validator {
    /// Creates a validator bound to the given root schema position.
    pub fn new(schema: impl Into<SchemaSet>) -> Self {
        Self {
            schema: schema.into(),
        }
    }

    /// The root schema position this validator was constructed with.
    pub fn schema(&self) -> &SchemaSet {
        &self.schema
    }

    /// Parses raw text and transforms the resulting document tree against
    /// the root schema.
    ///
    /// # Errors
    ///
    /// [`Error::Document`] if the text is not a well-formed document,
    /// [`Error::Schema`] if the tree fails validation.
    pub fn parse(&self, text: &str) -> Result<Value, Error> {
        let document: Node = serde_yaml::from_str(text)?;
        Ok(self.transform(&document)?)
    }

    /// Transforms an already-parsed document tree against the root schema.
    ///
    /// On failure the returned [`SchemaError`] carries the path from the
    /// failure site to the root of `node`. When every alternative of an
    /// object union fails, the surfaced error is the property failure of
    /// the last fixed-props candidate attempted (length violations, which
    /// are collected separately, surface as `OBJECT_LENGTH_PASSED`
    /// instead). That tie-break is part of the compatible behavior of this
    /// engine, not a relevance ranking.
    pub fn transform(&self, node: &Node) -> Result<Value, SchemaError> {
        self.resolve(node, self.schema.alternatives())
    }

    /// Transforms a document tree against an explicit schema position
    /// instead of the root schema.
    pub fn transform_with(&self, node: &Node, schema: &SchemaSet) -> Result<Value, SchemaError> {
        self.resolve(node, schema.alternatives())
    }

    /// One recursion step: null handling, candidate filtering, dispatch.
    fn resolve(&self, node: &Node, alternatives: &[Schema]) -> Result<Value, SchemaError> {
        if matches!(node, Node::Null) {
            for schema in alternatives {
                if let Some(default) = schema.default_value() {
                    return Ok(default.clone());
                }
            }
            return Err(SchemaError::new(ErrorCode::Required, "value is required"));
        }

        let kind = NodeKind::of(node);
        let mut candidates: Vec<Cow<'_, Schema>> = Vec::new();
        let mut mismatches: Vec<String> = Vec::new();

        for schema in alternatives {
            let schema = match schema {
                // Resolved for this round only; never cached across nodes.
                Schema::Any(_) => Cow::Owned(infer_schema(node)),
                concrete => Cow::Borrowed(concrete),
            };
            if schema.accepts(kind) {
                candidates.push(schema);
            } else if matches!(schema.as_ref(), Schema::Choices(_)) {
                mismatches.push(format!("expected a number or string scalar, got {kind}"));
            } else {
                mismatches.push(format!("expected {}, got {kind}", schema.type_name()));
            }
        }

        if candidates.is_empty() {
            return Err(SchemaError::new(
                ErrorCode::InvalidType,
                mismatches.join("; "),
            ));
        }

        match node {
            // Booleans carry no constraints: returned before any choices
            // or limit logic.
            Node::Bool(value) => Ok(Value::Bool(*value)),
            Node::Number(value) => self.resolve_number(value, &candidates),
            Node::String(value) => self.resolve_string(value, &candidates),
            Node::Sequence(items) => self.resolve_sequence(items, &candidates),
            Node::Mapping(entries) => self.resolve_mapping(entries, &candidates),
            // Null returned above, and no schema accepts an unknown-kind
            // node, so filtering has already rejected everything else.
            other => Err(SchemaError::new(
                ErrorCode::InvalidType,
                format!("unsupported node kind {}", NodeKind::of(other)),
            )),
        }
    }

    fn resolve_number(
        &self,
        value: &serde_yaml::Number,
        candidates: &[Cow<'_, Schema>],
    ) -> Result<Value, SchemaError> {
        let raw = value.as_f64().unwrap_or(f64::NAN);

        if has_choices(candidates) {
            let matched = candidates
                .iter()
                .any(|s| matches!(s.as_ref(), Schema::Choices(c) if c.contains_number(raw)));
            if matched {
                return Ok(number_value(value));
            }
            // A failed choice never blocks a plain number alternative in
            // the same union.
            if !candidates
                .iter()
                .any(|s| matches!(s.as_ref(), Schema::Number(_)))
            {
                return Err(SchemaError::new(
                    ErrorCode::ChoiceDoesntExist,
                    "value matches none of the declared choices",
                ));
            }
        }

        let mut violations: Vec<String> = Vec::new();
        for schema in candidates {
            let Schema::Number(candidate) = schema.as_ref() else {
                continue;
            };
            if let Some(min) = candidate.limit.min {
                if raw < min {
                    violations.push(format!("must be at least {min}, got {raw}"));
                    continue;
                }
            }
            if let Some(max) = candidate.limit.max {
                if raw > max {
                    violations.push(format!("must be at most {max}, got {raw}"));
                    continue;
                }
            }
            // First candidate with no violated bound wins.
            return Ok(number_value(value));
        }

        Err(SchemaError::new(
            ErrorCode::NumberLimitPassed,
            violations.join("; "),
        ))
    }

    fn resolve_string(
        &self,
        value: &str,
        candidates: &[Cow<'_, Schema>],
    ) -> Result<Value, SchemaError> {
        if has_choices(candidates) {
            let matched = candidates
                .iter()
                .any(|s| matches!(s.as_ref(), Schema::Choices(c) if c.contains_str(value)));
            if matched {
                return Ok(Value::String(value.to_owned()));
            }
            if !candidates
                .iter()
                .any(|s| matches!(s.as_ref(), Schema::String(_)))
            {
                return Err(SchemaError::new(
                    ErrorCode::ChoiceDoesntExist,
                    "value matches none of the declared choices",
                ));
            }
        }

        let count = value.chars().count();
        let mut violations: Vec<String> = Vec::new();
        for schema in candidates {
            let Schema::String(candidate) = schema.as_ref() else {
                continue;
            };
            if let Some(min) = candidate.length.min {
                if count < min {
                    violations.push(format!("length must be at least {min}, got {count}"));
                    continue;
                }
            }
            if let Some(max) = candidate.length.max {
                if count > max {
                    violations.push(format!("length must be at most {max}, got {count}"));
                    continue;
                }
            }
            return Ok(Value::String(value.to_owned()));
        }

        Err(SchemaError::new(
            ErrorCode::StringLengthPassed,
            violations.join("; "),
        ))
    }

    fn resolve_sequence(
        &self,
        items: &[Node],
        candidates: &[Cow<'_, Schema>],
    ) -> Result<Value, SchemaError> {
        let mut violations: Vec<String> = Vec::new();
        let mut selected: Option<&ArraySchema> = None;

        for schema in candidates {
            let Schema::Array(candidate) = schema.as_ref() else {
                continue;
            };
            if let Some(min) = candidate.length.min {
                if items.len() < min {
                    violations.push(format!(
                        "length must be at least {min}, got {}",
                        items.len()
                    ));
                    continue;
                }
            }
            if let Some(max) = candidate.length.max {
                if items.len() > max {
                    violations.push(format!("length must be at most {max}, got {}", items.len()));
                    continue;
                }
            }
            selected = Some(candidate);
            break;
        }

        let Some(selected) = selected else {
            return Err(SchemaError::new(
                ErrorCode::ArrayLengthPassed,
                violations.join("; "),
            ));
        };

        // The selected candidate supplies the element schema for every
        // item; no partial array survives a failure.
        let mut elements = Vec::with_capacity(items.len());
        for (index, item) in items.iter().enumerate() {
            match self.resolve(item, selected.element.alternatives()) {
                Ok(value) => elements.push(value),
                Err(err) => return Err(err.at_index(index)),
            }
        }

        Ok(Value::Array(elements))
    }

    fn resolve_mapping(
        &self,
        entries: &Mapping,
        candidates: &[Cow<'_, Schema>],
    ) -> Result<Value, SchemaError> {
        let mut length_violations: Vec<String> = Vec::new();
        let mut last_error: Option<SchemaError> = None;
        let absent = Node::Null;

        'candidates: for schema in candidates {
            match schema.as_ref() {
                Schema::Object(candidate) => {
                    let mut record = Map::new();
                    for (name, prop) in &candidate.props {
                        let item = entries.get(name.as_str()).unwrap_or(&absent);
                        match self.resolve(item, prop.alternatives()) {
                            Ok(value) => {
                                record.insert(name.clone(), value);
                            }
                            Err(err) => {
                                // Remember this candidate's failure and
                                // abandon its remaining properties; the
                                // next alternative may still succeed.
                                last_error = Some(err.at_key(name.clone()));
                                continue 'candidates;
                            }
                        }
                    }
                    return Ok(Value::Object(record));
                }
                Schema::Wildcard(candidate) => {
                    let count = entries.len();
                    if let Some(min) = candidate.length.min {
                        if count < min {
                            length_violations
                                .push(format!("length must be at least {min}, got {count}"));
                            continue 'candidates;
                        }
                    }
                    if let Some(max) = candidate.length.max {
                        if count > max {
                            length_violations
                                .push(format!("length must be at most {max}, got {count}"));
                            continue 'candidates;
                        }
                    }

                    let mut record = Map::new();
                    for (key, item) in entries {
                        let Some(key) = key.as_str() else {
                            return Err(SchemaError::new(
                                ErrorCode::InvalidType,
                                "mapping keys must be strings",
                            ));
                        };
                        match self.resolve(item, candidate.values.alternatives()) {
                            Ok(value) => {
                                record.insert(key.to_owned(), value);
                            }
                            // A wildcard entry failure aborts the whole
                            // union; only length violations fall through.
                            Err(err) => return Err(err.at_key(key)),
                        }
                    }
                    return Ok(Value::Object(record));
                }
                _ => continue 'candidates,
            }
        }

        if !length_violations.is_empty() {
            return Err(SchemaError::new(
                ErrorCode::ObjectLengthPassed,
                length_violations.join("; "),
            ));
        }

        // Filtering guarantees at least one object candidate, and every
        // candidate that did not return recorded a failure above.
        Err(last_error
            .unwrap_or_else(|| SchemaError::new(ErrorCode::InvalidType, "expected object")))
    }
}

fn has_choices(candidates: &[Cow<'_, Schema>]) -> bool {
    candidates
        .iter()
        .any(|s| matches!(s.as_ref(), Schema::Choices(_)))
}

/// Converts a document number into an output value, keeping integers
/// integral. Non-finite floats have no JSON form and degrade to null.
fn number_value(value: &serde_yaml::Number) -> Value {
    if let Some(n) = value.as_i64() {
        Value::from(n)
    } else if let Some(n) = value.as_u64() {
        Value::from(n)
    } else {
        serde_json::Number::from_f64(value.as_f64().unwrap_or(f64::NAN))
            .map(Value::Number)
            .unwrap_or(Value::Null)
    }
}
