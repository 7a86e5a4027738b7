//! Schema validation error type.
//!
//! This module provides [`ErrorCode`], the closed set of machine-readable
//! failure codes, and [`SchemaError`], a single validation failure carrying
//! the code, a human-readable detail, and the path from the failure site to
//! the document root.

use std::fmt::{self, Display};

use crate::path::ErrorPath;

/// Machine-readable validation failure codes.
///
/// The set is closed and stable: programmatic consumers may match on it
/// exhaustively or compare the [`as_str`](ErrorCode::as_str) form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    /// A value was absent or null and no schema alternative supplied a
    /// default.
    Required,
    /// No schema alternative was compatible with the node's type.
    InvalidType,
    /// A numeric value violated every alternative's min/max bounds.
    NumberLimitPassed,
    /// A string's length violated every alternative's length bounds.
    StringLengthPassed,
    /// A scalar matched none of the declared choice literals.
    ChoiceDoesntExist,
    /// A sequence's length violated every alternative's length bounds.
    ArrayLengthPassed,
    /// A mapping's entry count violated every alternative's length bounds.
    ObjectLengthPassed,
}

impl ErrorCode {
    /// Returns the stable string form of this code.
    pub const fn as_str(self) -> &'static str {
        match self {
            ErrorCode::Required => "REQUIRED",
            ErrorCode::InvalidType => "INVALID_TYPE",
            ErrorCode::NumberLimitPassed => "NUMBER_LIMIT_PASSED",
            ErrorCode::StringLengthPassed => "STRING_LENGTH_PASSED",
            ErrorCode::ChoiceDoesntExist => "CHOICE_DOESNT_EXIST",
            ErrorCode::ArrayLengthPassed => "ARRAY_LENGTH_PASSED",
            ErrorCode::ObjectLengthPassed => "OBJECT_LENGTH_PASSED",
        }
    }
}

impl Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single validation failure with full context.
///
/// `SchemaError` captures everything a caller needs to act on a failure:
///
/// - **code**: machine-readable [`ErrorCode`]
/// - **detail**: human-readable description of the underlying cause
/// - **path**: the route from the failure site to the document root
///
/// The rendered message combines the detail with the path when one exists:
/// `value matches none of the declared choices at "job" -> 0`.
///
/// Errors are created with an empty path at the failure site. Each stack
/// frame that supplied a key or index context extends the path with
/// [`at_key`](SchemaError::at_key) / [`at_index`](SchemaError::at_index);
/// both consume the error and return a new value, so a union trying several
/// candidates can never corrupt a sibling branch's path.
///
/// # Example
///
/// ```rust
/// use yamlshape::{ErrorCode, SchemaError};
///
/// let error = SchemaError::new(ErrorCode::Required, "value is required")
///     .at_key("port")
///     .at_key("server");
///
/// assert_eq!(error.code, ErrorCode::Required);
/// assert_eq!(error.to_string(), "value is required at \"server\" -> \"port\"");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct SchemaError {
    /// Machine-readable failure code.
    pub code: ErrorCode,
    /// Human-readable description of the underlying cause, without the path.
    pub detail: String,
    /// The route from the failure site to the document root.
    pub path: ErrorPath,
}

impl SchemaError {
    /// Creates a new error at the failure site, with an empty path.
    pub fn new(code: ErrorCode, detail: impl Into<String>) -> Self {
        Self {
            code,
            detail: detail.into(),
            path: ErrorPath::root(),
        }
    }

    /// Returns a new error whose path is extended with a mapping key.
    pub fn at_key(mut self, name: impl Into<String>) -> Self {
        self.path = self.path.push_key(name);
        self
    }

    /// Returns a new error whose path is extended with a sequence index.
    pub fn at_index(mut self, index: usize) -> Self {
        self.path = self.path.push_index(index);
        self
    }
}

impl Display for SchemaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.detail)?;
        if !self.path.is_empty() {
            write!(f, " at {}", self.path)?;
        }
        Ok(())
    }
}

impl std::error::Error for SchemaError {}

// SchemaError crosses thread boundaries when validation runs on worker
// threads; all fields are owned types, and these assertions keep that true
// if the types change.
const _: () = {
    const fn assert_send<T: Send>() {}
    const fn assert_sync<T: Sync>() {}
    assert_send::<SchemaError>();
    assert_sync::<SchemaError>();
};
