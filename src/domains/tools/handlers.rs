//! Tool handler trait and helpers shared by tool definitions.

use async_trait::async_trait;
use rmcp::model::JsonObject;
use serde::{Serialize, de::DeserializeOwned};

use super::error::ToolError;
use crate::domains::state::StateStore;

/// Executes a single tool.
///
/// Arguments have already been validated against the tool's input schema
/// when `call` runs. The returned string becomes the single text entry of the
/// result envelope.
#[async_trait]
pub trait ToolHandler: Send + Sync {
    async fn call(&self, args: &JsonObject, state: &StateStore) -> Result<String, ToolError>;
}

/// Convert validated arguments into a typed parameter struct.
pub fn parse_params<T: DeserializeOwned>(args: &JsonObject) -> Result<T, ToolError> {
    serde_json::from_value(serde_json::Value::Object(args.clone()))
        .map_err(|e| ToolError::invalid_arguments(e.to_string()))
}

/// Pretty-print a value with two-space indentation.
pub fn to_pretty_json<T: Serialize + ?Sized>(value: &T) -> Result<String, ToolError> {
    Ok(serde_json::to_string_pretty(value)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    struct Params {
        id: u64,
    }

    #[test]
    fn test_parse_params() {
        let mut args = JsonObject::new();
        args.insert("id".to_string(), serde_json::json!(4));
        args.insert("extra".to_string(), serde_json::json!("ignored"));

        let params: Params = parse_params(&args).unwrap();
        assert_eq!(params.id, 4);
    }

    #[test]
    fn test_parse_params_rejects_fraction() {
        let mut args = JsonObject::new();
        args.insert("id".to_string(), serde_json::json!(4.5));

        let err = parse_params::<Params>(&args).unwrap_err();
        assert!(matches!(err, ToolError::InvalidArguments(_)));
        assert!(!err.is_fatal());
    }

    #[test]
    fn test_pretty_json_indent() {
        let text = to_pretty_json(&serde_json::json!({ "a": 1 })).unwrap();
        assert_eq!(text, "{\n  \"a\": 1\n}");
    }
}
