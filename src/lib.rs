//! # yamlshape
//!
//! Schema validation for YAML documents that yields typed, defaulted values
//! with precise error paths.
//!
//! ## Overview
//!
//! `yamlshape` validates a parsed document tree against a declarative
//! schema and produces either a strongly-shaped [`serde_json::Value`] or a
//! single structured error identifying exactly where validation failed.
//! Schemas describe the expected shape (objects, arrays, scalars, choice
//! enums), optional constraints (numeric bounds, length bounds), and
//! defaults for absent positions. Any schema position can hold an ordered
//! union of alternatives, tried left to right.
//!
//! ## Core Types
//!
//! - [`Schema`]: the closed set of schema shapes, built through per-kind
//!   builders
//! - [`SchemaSet`]: an ordered, non-empty union of schema alternatives
//! - [`Validator`]: parses and transforms documents against a root schema
//! - [`SchemaError`]: a validation failure with a stable [`ErrorCode`] and
//!   the [`ErrorPath`] from the failure site to the document root
//!
//! ## Example
//!
//! ```rust
//! use serde_json::json;
//! use yamlshape::{ErrorCode, Schema, Validator};
//!
//! let validator = Validator::new(
//!     Schema::object()
//!         .field("name", Schema::string().min_len(1))
//!         .field("job", Schema::array(Schema::choices(["Teacher", "Driver"])))
//!         .field("retired", Schema::boolean().default(false)),
//! );
//!
//! let value = validator
//!     .parse("name: Andrew\njob: [Teacher, Driver]")
//!     .unwrap();
//! assert_eq!(
//!     value,
//!     json!({"name": "Andrew", "job": ["Teacher", "Driver"], "retired": false})
//! );
//!
//! // Failures carry a code and the route to the offending value.
//! let err = validator
//!     .parse("name: Andrew\njob: [Pilot]")
//!     .unwrap_err();
//! match err {
//!     yamlshape::Error::Schema(err) => {
//!         assert_eq!(err.code, ErrorCode::ChoiceDoesntExist);
//!         assert_eq!(err.path.to_string(), "\"job\" -> 0");
//!     }
//!     other => panic!("unexpected error: {other}"),
//! }
//! ```

pub mod error;
pub mod node;
pub mod path;
pub mod schema;
pub mod validator;

pub use error::{Error, ErrorCode, SchemaError};
pub use node::NodeKind;
pub use path::{ErrorPath, PathSegment};
pub use schema::{
    AnySchema, ArraySchema, BooleanSchema, Bounds, ChoiceValue, ChoicesSchema, NumberSchema,
    ObjectSchema, Schema, SchemaSet, StringSchema, WildcardSchema,
};
pub use validator::Validator;
