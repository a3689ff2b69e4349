//! Errors for the fallible edges of the crate.
//!
//! Resolution itself never fails. Only ingesting props or configuration
//! from JSON can go wrong.

use thiserror::Error;

/// Error returned when a props bag cannot be built from JSON.
#[derive(Debug, Error)]
pub enum PropsError {
    /// The top-level JSON value was not an object.
    #[error("props must be a JSON object, found {found}")]
    NotAnObject { found: &'static str },

    /// A JSON number could not be represented as `f64`.
    #[error("number at '{key}' is not representable as f64")]
    Number { key: String },

    /// The input was not valid JSON.
    #[error("invalid props JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Error returned when a resolver configuration cannot be parsed.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid resolver config: {0}")]
    Json(#[from] serde_json::Error),
}

/// Name of a JSON value's kind, for error messages.
pub(crate) fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_an_object_display() {
        let err = PropsError::NotAnObject { found: "array" };
        let msg = err.to_string();
        assert!(msg.contains("JSON object"));
        assert!(msg.contains("array"));
    }

    #[test]
    fn test_json_error_converts() {
        let parse = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: PropsError = parse.into();
        assert!(err.to_string().starts_with("invalid props JSON"));
    }

    #[test]
    fn test_json_kind() {
        assert_eq!(json_kind(&serde_json::json!(null)), "null");
        assert_eq!(json_kind(&serde_json::json!([1])), "array");
        assert_eq!(json_kind(&serde_json::json!({"a": 1})), "object");
    }
}
