//! Error types for validation failures.
//!
//! This module provides [`SchemaError`] for structured validation failures
//! carrying a machine-readable code and a failure path, and the top-level
//! [`Error`] returned by [`Validator::parse`](crate::Validator::parse),
//! which also covers malformed input that the document parser rejects.

mod schema_error;

pub use schema_error::{ErrorCode, SchemaError};

/// Top-level error for end-to-end parsing.
///
/// [`Validator::parse`](crate::Validator::parse) can fail in two ways: the
/// raw text is not a well-formed document, or the document does not satisfy
/// the schema. Both are collapsed here so callers can `?` a single type.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The input text could not be parsed into a document tree.
    #[error("malformed document: {0}")]
    Document(#[from] serde_yaml::Error),

    /// The document tree failed schema validation.
    #[error(transparent)]
    Schema(#[from] SchemaError),
}
