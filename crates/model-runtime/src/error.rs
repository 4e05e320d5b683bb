//! Error types raised by model serialization.

use std::fmt;

use serde_json::Value;
use thiserror::Error;

use crate::path::FieldPath;

// ── Expected types ────────────────────────────────────────────────────────

/// Wire type a model property value is required to have.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExpectedType {
    String,
    Number,
    Boolean,
    Object,
    Array,
}

impl ExpectedType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExpectedType::String => "string",
            ExpectedType::Number => "number",
            ExpectedType::Boolean => "boolean",
            ExpectedType::Object => "object",
            ExpectedType::Array => "array",
        }
    }

    /// Returns true if `val` has this wire type. `null` never matches.
    pub fn matches_value(&self, val: &Value) -> bool {
        match self {
            ExpectedType::String => val.is_string(),
            ExpectedType::Number => val.is_number(),
            ExpectedType::Boolean => val.is_boolean(),
            ExpectedType::Object => val.is_object(),
            ExpectedType::Array => val.is_array(),
        }
    }
}

impl fmt::Display for ExpectedType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// JSON kind name of `val`, used in diagnostics.
pub fn value_kind(val: &Value) -> &'static str {
    match val {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

// ── Errors ────────────────────────────────────────────────────────────────

/// A present, non-null value did not have the type its schema requires.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("{path} must be of type {expected}.")]
pub struct ValidationError {
    path: FieldPath,
    expected: ExpectedType,
}

impl ValidationError {
    pub fn new(path: FieldPath, expected: ExpectedType) -> Self {
        Self { path, expected }
    }

    pub fn path(&self) -> &FieldPath {
        &self.path
    }

    pub fn expected(&self) -> ExpectedType {
        self.expected
    }

    /// RFC 6901 pointer to the offending value.
    pub fn pointer(&self) -> String {
        self.path.to_pointer()
    }
}

/// Errors from the JSON text helpers on [`crate::Model`].
#[derive(Debug, Error)]
pub enum ModelError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn message_names_path_and_type() {
        let err = ValidationError::new(
            FieldPath::property("defaultProgram").key("a"),
            ExpectedType::String,
        );
        assert_eq!(err.to_string(), "defaultProgram[a] must be of type string.");
        assert_eq!(err.pointer(), "/defaultProgram/a");
        assert_eq!(err.expected(), ExpectedType::String);
    }

    #[test]
    fn expected_type_never_matches_null() {
        for ty in [
            ExpectedType::String,
            ExpectedType::Number,
            ExpectedType::Boolean,
            ExpectedType::Object,
            ExpectedType::Array,
        ] {
            assert!(!ty.matches_value(&Value::Null), "{ty}");
        }
        assert!(ExpectedType::String.matches_value(&json!("")));
        assert!(!ExpectedType::String.matches_value(&json!(5)));
    }

    #[test]
    fn value_kind_matrix() {
        assert_eq!(value_kind(&json!(null)), "null");
        assert_eq!(value_kind(&json!(1.5)), "number");
        assert_eq!(value_kind(&json!([])), "array");
        assert_eq!(value_kind(&json!({})), "object");
    }
}
