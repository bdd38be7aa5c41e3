//! # Error Hierarchy
//!
//! Structured error types for the core crate, built with `thiserror`.
//! No `Box<dyn Error>`, no `.unwrap()` outside tests.
//!
//! Subsystem crates (`gala-state`, `gala-engine`) define their own error
//! enums close to the logic that raises them; this module carries only the
//! failures that originate in the foundational types.

use thiserror::Error;

/// Top-level error type for the core crate.
#[derive(Error, Debug)]
pub enum GalaError {
    /// Input failed structural validation (malformed timestamp, bad
    /// identifier format).
    #[error("schema validation error: {0}")]
    SchemaValidation(String),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn schema_validation_display() {
        let err = GalaError::SchemaValidation("missing field".to_string());
        assert!(format!("{err}").contains("missing field"));
    }

    #[test]
    fn json_error_converts() {
        let bad: Result<serde_json::Value, _> = serde_json::from_str("{not json");
        let err: GalaError = bad.unwrap_err().into();
        assert!(matches!(err, GalaError::Json(_)));
    }

    #[test]
    fn all_error_types_are_debug() {
        let e = GalaError::SchemaValidation("test".to_string());
        assert!(!format!("{e:?}").is_empty());
    }
}
