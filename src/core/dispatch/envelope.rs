//! Response envelopes.
//!
//! Tool calls always produce exactly one text content entry; resource reads
//! produce exactly one text contents entry tagged with the uri and MIME type.

use rmcp::model::{CallToolResult, Content, RawContent, ReadResourceResult, ResourceContents};

/// Successful tool result carrying `text`.
pub fn tool_success(text: impl Into<String>) -> CallToolResult {
    CallToolResult::success(vec![Content::text(text.into())])
}

/// Soft-error tool result (`isError: true`) carrying `text`.
pub fn tool_error(text: impl Into<String>) -> CallToolResult {
    CallToolResult::error(vec![Content::text(text.into())])
}

/// Whether a tool result is flagged as an error.
pub fn is_error(result: &CallToolResult) -> bool {
    result.is_error.unwrap_or(false)
}

/// Text of the first content entry, if it is text.
pub fn first_text(result: &CallToolResult) -> Option<&str> {
    result.content.first().and_then(|c| match &c.raw {
        RawContent::Text(text) => Some(text.text.as_str()),
        _ => None,
    })
}

/// Resource read result with a single text entry.
pub fn resource_text(
    uri: impl Into<String>,
    mime_type: impl Into<String>,
    text: impl Into<String>,
) -> ReadResourceResult {
    ReadResourceResult {
        contents: vec![ResourceContents::TextResourceContents {
            uri: uri.into(),
            mime_type: Some(mime_type.into()),
            text: text.into(),
            meta: None,
        }],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_envelope() {
        let result = tool_success("hello");
        assert!(!is_error(&result));
        assert_eq!(result.content.len(), 1);
        assert_eq!(first_text(&result), Some("hello"));
    }

    #[test]
    fn test_error_envelope_serializes_is_error() {
        let result = tool_error("Unknown tool: nope");
        assert!(is_error(&result));

        let value = serde_json::to_value(&result).unwrap();
        assert_eq!(value["isError"], true);
        assert_eq!(value["content"][0]["type"], "text");
        assert_eq!(value["content"][0]["text"], "Unknown tool: nope");
    }

    #[test]
    fn test_resource_envelope() {
        let result = resource_text("powerapps://data/users", "application/json", "[]");
        let value = serde_json::to_value(&result).unwrap();

        assert_eq!(value["contents"][0]["uri"], "powerapps://data/users");
        assert_eq!(value["contents"][0]["mimeType"], "application/json");
        assert_eq!(value["contents"][0]["text"], "[]");
    }
}
