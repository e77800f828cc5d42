//! Result helpers shared by the catalog tools.

use rmcp::model::{CallToolResult, Content};
use tracing::warn;

/// Successful result carrying `value` as JSON text and, when given, as
/// structured content.
pub fn json_result(value: &serde_json::Value, structured: Option<serde_json::Value>) -> CallToolResult {
    CallToolResult {
        content: vec![Content::text(value.to_string())],
        structured_content: structured,
        is_error: Some(false),
        meta: None,
    }
}

/// Create an error result with a formatted message.
pub fn error_result(message: &str) -> CallToolResult {
    warn!("{}", message);
    CallToolResult::error(vec![Content::text(message.to_string())])
}

/// Render a tool result as the JSON body returned over the HTTP transport.
#[cfg(feature = "http")]
pub fn to_http_response(result: CallToolResult) -> serde_json::Value {
    let mut response = serde_json::json!({
        "content": result.content,
        "isError": result.is_error.unwrap_or(false)
    });

    if let (Some(structured), Some(object)) = (result.structured_content, response.as_object_mut()) {
        object.insert("structuredContent".to_string(), structured);
    }

    response
}

/// Text of the first content block, if it is text.
#[cfg(test)]
pub fn first_text(result: &CallToolResult) -> &str {
    match &result.content[0].raw {
        rmcp::model::RawContent::Text(text) => &text.text,
        _ => panic!("Expected text content"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_result_is_success() {
        let value = serde_json::json!({"id": 1});
        let result = json_result(&value, Some(value.clone()));
        assert_eq!(result.is_error, Some(false));
        assert_eq!(first_text(&result), r#"{"id":1}"#);
        assert_eq!(result.structured_content, Some(value));
    }

    #[test]
    fn test_error_result_is_error() {
        let result = error_result("boom");
        assert_eq!(result.is_error, Some(true));
        assert_eq!(first_text(&result), "boom");
    }

    #[cfg(feature = "http")]
    #[test]
    fn test_http_response_includes_structured_content() {
        let value = serde_json::json!({"id": 1});
        let response = to_http_response(json_result(&value, Some(value.clone())));
        assert_eq!(response["isError"], false);
        assert_eq!(response["structuredContent"], value);
    }
}
