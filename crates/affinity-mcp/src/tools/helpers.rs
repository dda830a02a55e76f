//! Shared helper functions for MCP tool implementations.

use serde_json::{Map, Value};

use affinity_client::ClientError;

/// Serialize a successful upstream body for the MCP caller.
pub fn success_json(body: &Value) -> String {
    serde_json::to_string_pretty(body)
        .unwrap_or_else(|e| failure_message(&format!("Serialization failed: {e}")))
}

/// Map a client error to the uniform `{"error", "details"}` result shape.
///
/// `details` is omitted entirely when the error carries none, so callers
/// can rely on its presence meaning "upstream said something".
pub fn failure_json(err: &ClientError) -> String {
    let mut result = Map::new();
    result.insert("error".to_string(), Value::String(err.to_string()));
    if let Some(details) = err.details() {
        result.insert("details".to_string(), details);
    }
    serde_json::to_string_pretty(&Value::Object(result))
        .unwrap_or_else(|e| failure_message(&format!("Serialization failed: {e}")))
}

fn failure_message(message: &str) -> String {
    format!(r#"{{"error": "{message}"}}"#)
}
