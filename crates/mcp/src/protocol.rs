// MCP protocol types and definitions (JSON-RPC 2.0 over stdio)

use serde::{Deserialize, Serialize};

/// Newest MCP revision this server speaks.
pub const LATEST_PROTOCOL_VERSION: &str = "2025-06-18";

/// Revisions accepted from clients during `initialize`.
pub const SUPPORTED_PROTOCOL_VERSIONS: &[&str] = &["2024-11-05", "2025-03-26", "2025-06-18"];

/// JSON-RPC 2.0 Request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonRpcRequest {
    pub jsonrpc: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<serde_json::Value>,
    pub method: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub params: Option<serde_json::Value>,
}

/// JSON-RPC 2.0 Response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonRpcResponse {
    pub jsonrpc: String,
    pub id: serde_json::Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<JsonRpcError>,
}

impl JsonRpcResponse {
    /// Successful response. A result that fails to serialize becomes an
    /// internal error instead.
    pub fn success(id: impl Into<serde_json::Value>, result: impl Serialize) -> Self {
        match serde_json::to_value(result) {
            Ok(value) => Self {
                jsonrpc: "2.0".to_string(),
                id: id.into(),
                result: Some(value),
                error: None,
            },
            Err(e) => Self::error(id, JsonRpcError::internal_error(e.to_string())),
        }
    }

    pub fn error(id: impl Into<serde_json::Value>, error: JsonRpcError) -> Self {
        Self {
            jsonrpc: "2.0".to_string(),
            id: id.into(),
            result: None,
            error: Some(error),
        }
    }
}

/// JSON-RPC 2.0 Error
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonRpcError {
    pub code: i32,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
}

impl JsonRpcError {
    pub fn parse_error() -> Self {
        Self {
            code: -32700,
            message: "Parse error".to_string(),
            data: None,
        }
    }

    pub fn invalid_request() -> Self {
        Self {
            code: -32600,
            message: "Invalid Request".to_string(),
            data: None,
        }
    }

    pub fn method_not_found(method: &str) -> Self {
        Self {
            code: -32601,
            message: format!("Method not found: {}", method),
            data: None,
        }
    }

    pub fn invalid_params(message: impl Into<String>) -> Self {
        Self {
            code: -32602,
            message: message.into(),
            data: None,
        }
    }

    pub fn internal_error(message: impl Into<String>) -> Self {
        Self {
            code: -32603,
            message: message.into(),
            data: None,
        }
    }
}

// MCP-specific protocol messages

/// Tool definition for MCP
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolSchema {
    pub name: String,
    pub description: String,
    #[serde(rename = "inputSchema")]
    pub input_schema: serde_json::Value,
}

/// List tools response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListToolsResult {
    pub tools: Vec<ToolSchema>,
}

/// Call tool request params
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CallToolParams {
    pub name: String,
    /// Tool arguments. Anything other than an object or null is rejected.
    #[serde(default)]
    pub arguments: Option<serde_json::Map<String, serde_json::Value>>,
}

/// Call tool response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CallToolResult {
    pub content: Vec<ToolContent>,
    #[serde(rename = "isError", skip_serializing_if = "Option::is_none")]
    pub is_error: Option<bool>,
}

impl CallToolResult {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            content: vec![ToolContent::text(text)],
            is_error: None,
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            content: vec![ToolContent::text(text)],
            is_error: Some(true),
        }
    }

    /// Text of the first content block.
    pub fn first_text(&self) -> Option<&str> {
        self.content.first().map(|ToolContent::Text { text }| text.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ToolContent {
    #[serde(rename = "text")]
    Text { text: String },
}

impl ToolContent {
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text { text: text.into() }
    }
}

/// Initialize request params
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InitializeParams {
    #[serde(rename = "protocolVersion")]
    pub protocol_version: String,
    #[serde(default)]
    pub capabilities: serde_json::Value,
    #[serde(rename = "clientInfo", skip_serializing_if = "Option::is_none")]
    pub client_info: Option<ClientInfo>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientInfo {
    pub name: String,
    pub version: String,
}

/// Initialize response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InitializeResult {
    #[serde(rename = "protocolVersion")]
    pub protocol_version: String,
    pub capabilities: ServerCapabilities,
    #[serde(rename = "serverInfo")]
    pub server_info: ServerInfo,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerCapabilities {
    pub tools: Option<ToolsCapability>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolsCapability {
    #[serde(rename = "listChanged")]
    pub list_changed: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerInfo {
    pub name: String,
    pub version: String,
}

/// Pick the revision to answer `initialize` with: the client's if supported,
/// otherwise the newest one known here.
pub fn negotiate_protocol_version(requested: &str) -> &'static str {
    SUPPORTED_PROTOCOL_VERSIONS
        .iter()
        .copied()
        .find(|v| *v == requested)
        .unwrap_or(LATEST_PROTOCOL_VERSION)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_call_tool_result_wire_format() {
        let result = CallToolResult::error("Error: boom");
        let value = serde_json::to_value(&result).unwrap();

        assert_eq!(
            value,
            json!({"content": [{"type": "text", "text": "Error: boom"}], "isError": true})
        );
    }

    #[test]
    fn test_success_result_omits_is_error() {
        let value = serde_json::to_value(CallToolResult::text("{}")).unwrap();
        assert!(value.get("isError").is_none());
    }

    #[test]
    fn test_call_tool_params_without_arguments() {
        let params: CallToolParams = serde_json::from_value(json!({"name": "job_list"})).unwrap();
        assert_eq!(params.name, "job_list");
        assert!(params.arguments.is_none());
    }

    #[test]
    fn test_call_tool_params_require_object_arguments() {
        let params: CallToolParams =
            serde_json::from_value(json!({"name": "job_info", "arguments": {"jobId": "j1"}}))
                .unwrap();
        assert_eq!(params.arguments.unwrap()["jobId"], "j1");

        let nulled: CallToolParams =
            serde_json::from_value(json!({"name": "job_list", "arguments": null})).unwrap();
        assert!(nulled.arguments.is_none());

        for arguments in [json!("drop table"), json!([1]), json!(true)] {
            let parsed = serde_json::from_value::<CallToolParams>(
                json!({"name": "candidate_create", "arguments": arguments}),
            );
            assert!(parsed.is_err());
        }
    }

    #[test]
    fn test_tool_schema_uses_camel_case_input_schema() {
        let schema = ToolSchema {
            name: "x".to_string(),
            description: "y".to_string(),
            input_schema: json!({"type": "object"}),
        };
        let value = serde_json::to_value(schema).unwrap();
        assert!(value.get("inputSchema").is_some());
    }

    #[test]
    fn test_negotiate_protocol_version() {
        assert_eq!(negotiate_protocol_version("2024-11-05"), "2024-11-05");
        assert_eq!(negotiate_protocol_version("1999-01-01"), LATEST_PROTOCOL_VERSION);
    }
}
