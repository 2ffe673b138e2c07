// Forwards tool calls to Ashby. Every tool takes the same path: look up the
// endpoint, POST the arguments, render the envelope as one text block.

use crate::protocol::{CallToolResult, ToolSchema};
use crate::tools::ToolRegistry;
use ashby_sdk::{AshbyClient, AshbyError, Outcome};
use serde::Serialize;
use serde_json::ser::Formatter;
use serde_json::Value;
use std::io;
use tracing::{debug, info, warn};

/// Why a tool call produced no result. `Display` is the text sent back to the
/// MCP client.
#[derive(Debug, thiserror::Error)]
pub enum DispatchError {
    /// Name not in the catalog. No request is made.
    #[error("Error executing {tool}: Unknown tool: {tool}")]
    UnknownTool { tool: String },

    /// No API key configured. No request is made.
    #[error("Error executing {tool}: Ashby connection not established")]
    NotConnected { tool: String },

    /// Ashby answered with a non-2xx status.
    #[error("HTTP Error: {status} - {body}")]
    UpstreamHttp { status: u16, body: String },

    /// Ashby answered 2xx with `success: false`.
    #[error("Error: {}", spaced_json(.errors))]
    Upstream { errors: Value },

    /// Network, decoding or envelope-shape failure.
    #[error("Error executing {tool}: {source}")]
    Unexpected {
        tool: String,
        #[source]
        source: AshbyError,
    },
}

impl DispatchError {
    fn from_client(tool: &str, err: AshbyError) -> Self {
        match err {
            AshbyError::NotConnected => Self::NotConnected {
                tool: tool.to_string(),
            },
            AshbyError::Api { status, body } => Self::UpstreamHttp { status, body },
            source => Self::Unexpected {
                tool: tool.to_string(),
                source,
            },
        }
    }
}

/// Routes `tools/call` to the Ashby API.
pub struct Dispatcher {
    client: AshbyClient,
    registry: ToolRegistry,
}

impl Dispatcher {
    pub fn new(client: AshbyClient, registry: ToolRegistry) -> Self {
        Self { client, registry }
    }

    /// Tool descriptors for `tools/list`, in catalog order.
    pub fn list_tools(&self) -> &[ToolSchema] {
        self.registry.list_schemas()
    }

    /// Perform one call and return the unwrapped `results`.
    pub async fn dispatch(&self, name: &str, arguments: &Value) -> Result<Value, DispatchError> {
        let endpoint = self
            .registry
            .endpoint(name)
            .ok_or_else(|| DispatchError::UnknownTool {
                tool: name.to_string(),
            })?;

        info!(tool = %name, endpoint, "Calling Ashby");

        match self.client.call(endpoint, arguments).await {
            Ok(Outcome::Success(results)) => Ok(results),
            Ok(Outcome::Failure(errors)) => Err(DispatchError::Upstream { errors }),
            Err(e) => Err(DispatchError::from_client(name, e)),
        }
    }

    /// Perform one call and render it as exactly one text block.
    pub async fn call_tool(&self, name: &str, arguments: &Value) -> CallToolResult {
        match self.dispatch(name, arguments).await {
            Ok(results) => {
                debug!(tool = %name, "Ashby call succeeded");
                CallToolResult::text(pretty_json(&results))
            }
            Err(e) => {
                warn!(tool = %name, error = %e, "Ashby call failed");
                CallToolResult::error(e.to_string())
            }
        }
    }
}

/// Two-space indented JSON.
fn pretty_json(value: &Value) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
}

/// Single-line JSON with `", "` between items and `": "` after keys.
fn spaced_json(value: &Value) -> String {
    let mut buf = Vec::new();
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, SpacedFormatter);
    if value.serialize(&mut ser).is_err() {
        return value.to_string();
    }
    String::from_utf8(buf).unwrap_or_else(|_| value.to_string())
}

struct SpacedFormatter;

impl Formatter for SpacedFormatter {
    fn begin_array_value<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_key<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        writer.write_all(b": ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tools::CATALOG;
    use serde_json::json;
    use wiremock::matchers::{any, body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn dispatcher_for(server: &MockServer) -> Dispatcher {
        let client = AshbyClient::builder()
            .base_url(server.uri())
            .api_key("test-key")
            .build()
            .unwrap();
        Dispatcher::new(client, ToolRegistry::ashby())
    }

    fn text(result: &CallToolResult) -> &str {
        result.first_text().unwrap()
    }

    #[tokio::test]
    async fn test_every_tool_posts_to_its_endpoint() {
        let server = MockServer::start().await;

        for tool in CATALOG {
            Mock::given(method("POST"))
                .and(path(tool.endpoint))
                .and(header("Authorization", "Basic dGVzdC1rZXk6"))
                .respond_with(
                    ResponseTemplate::new(200)
                        .set_body_json(json!({"success": true, "results": tool.endpoint})),
                )
                .expect(1)
                .named(tool.name)
                .mount(&server)
                .await;
        }

        let dispatcher = dispatcher_for(&server);
        for tool in CATALOG {
            let result = dispatcher.call_tool(tool.name, &json!({})).await;
            assert_eq!(result.is_error, None, "{}", tool.name);
            assert_eq!(text(&result), format!("\"{}\"", tool.endpoint));
        }
    }

    #[tokio::test]
    async fn test_unknown_tool_makes_no_request() {
        let server = MockServer::start().await;

        Mock::given(any())
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let dispatcher = dispatcher_for(&server);
        let result = dispatcher.call_tool("candidate_delete", &json!({})).await;

        assert_eq!(result.is_error, Some(true));
        assert_eq!(
            text(&result),
            "Error executing candidate_delete: Unknown tool: candidate_delete"
        );
    }

    #[tokio::test]
    async fn test_missing_api_key_makes_no_request() {
        let server = MockServer::start().await;

        Mock::given(any())
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let client = AshbyClient::builder().base_url(server.uri()).build().unwrap();
        let dispatcher = Dispatcher::new(client, ToolRegistry::ashby());

        for tool in CATALOG {
            let result = dispatcher.call_tool(tool.name, &json!({})).await;
            assert_eq!(
                text(&result),
                format!("Error executing {}: Ashby connection not established", tool.name)
            );
            assert_eq!(result.is_error, Some(true));
        }
    }

    #[tokio::test]
    async fn test_success_is_pretty_printed_results() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/candidate.create"))
            .and(body_json(json!({"name": "A", "email": "a@b.com"})))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({"success": true, "results": {"id": "abc"}})),
            )
            .expect(1)
            .mount(&server)
            .await;

        let dispatcher = dispatcher_for(&server);
        let result = dispatcher
            .call_tool("candidate_create", &json!({"name": "A", "email": "a@b.com"}))
            .await;

        assert_eq!(text(&result), "{\n  \"id\": \"abc\"\n}");
        assert_eq!(result.content.len(), 1);
    }

    #[tokio::test]
    async fn test_upstream_logical_error() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({"success": false, "errors": ["Invalid email"]})),
            )
            .mount(&server)
            .await;

        let dispatcher = dispatcher_for(&server);
        let result = dispatcher
            .call_tool("candidate_create", &json!({"name": "A", "email": "nope"}))
            .await;

        assert_eq!(text(&result), "Error: [\"Invalid email\"]");
        assert!(text(&result).contains("Invalid email"));
        assert_eq!(result.is_error, Some(true));
    }

    #[tokio::test]
    async fn test_upstream_errors_use_spaced_separators() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/application.create"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "success": false,
                "errors": [{"field": "jobId", "message": "not found"}, "Invalid candidate"]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let dispatcher = dispatcher_for(&server);
        let result = dispatcher.call_tool("application_create", &json!({})).await;

        assert_eq!(
            text(&result),
            r#"Error: [{"field": "jobId", "message": "not found"}, "Invalid candidate"]"#
        );
    }

    #[test]
    fn test_spaced_json() {
        assert_eq!(spaced_json(&json!(["a", "b"])), r#"["a", "b"]"#);
        assert_eq!(spaced_json(&json!({"a": [1, 2], "b": {}})), r#"{"a": [1, 2], "b": {}}"#);
        assert_eq!(spaced_json(&json!([])), "[]");
        assert_eq!(spaced_json(&json!("plain")), r#""plain""#);
    }

    #[tokio::test]
    async fn test_upstream_error_without_errors_field() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"success": false})))
            .mount(&server)
            .await;

        let dispatcher = dispatcher_for(&server);
        let result = dispatcher.call_tool("job_info", &json!({"jobId": "j1"})).await;

        assert_eq!(text(&result), "Error: [\"Unknown error\"]");
    }

    #[tokio::test]
    async fn test_http_error_carries_status_and_body() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(500).set_body_string("server error"))
            .mount(&server)
            .await;

        let dispatcher = dispatcher_for(&server);
        let result = dispatcher.call_tool("job_list", &json!({})).await;

        assert_eq!(text(&result), "HTTP Error: 500 - server error");
    }

    #[tokio::test]
    async fn test_malformed_body_names_the_tool() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&server)
            .await;

        let dispatcher = dispatcher_for(&server);
        let result = dispatcher.call_tool("user_list", &json!({})).await;

        assert!(text(&result).starts_with("Error executing user_list: "));
        assert_eq!(result.is_error, Some(true));
    }

    #[tokio::test]
    async fn test_non_object_body_names_the_tool() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!(["a", "b"])))
            .mount(&server)
            .await;

        let dispatcher = dispatcher_for(&server);
        let result = dispatcher.call_tool("source_list", &json!({})).await;

        assert!(text(&result).starts_with("Error executing source_list: Unexpected response"));
    }

    #[tokio::test]
    async fn test_network_failure_is_a_text_result() {
        let client = AshbyClient::builder()
            .base_url("http://127.0.0.1:9")
            .api_key("test-key")
            .build()
            .unwrap();
        let dispatcher = Dispatcher::new(client, ToolRegistry::ashby());

        let result = dispatcher.call_tool("offer_list", &json!({})).await;

        assert!(text(&result).starts_with("Error executing offer_list: HTTP error"));
        assert_eq!(result.is_error, Some(true));
    }

    #[tokio::test]
    async fn test_repeated_calls_are_identical() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/job.list"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "success": true,
                "results": [{"id": "j1", "title": "Engineer"}],
                "moreDataAvailable": false
            })))
            .expect(2)
            .mount(&server)
            .await;

        let dispatcher = dispatcher_for(&server);
        let args = json!({"limit": 10});

        let first = dispatcher.call_tool("job_list", &args).await;
        let second = dispatcher.call_tool("job_list", &args).await;

        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_null_arguments_sent_as_empty_object() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/archiveReason.list"))
            .and(body_json(json!({})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"success": true})))
            .expect(1)
            .mount(&server)
            .await;

        let dispatcher = dispatcher_for(&server);
        let result = dispatcher.call_tool("archive_reason_list", &Value::Null).await;

        // No `results` key: the envelope itself comes back.
        assert_eq!(text(&result), "{\n  \"success\": true\n}");
    }

    #[tokio::test]
    async fn test_change_stage_uses_underscore_path() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/application.change_stage"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({"success": true, "results": {}})),
            )
            .expect(1)
            .mount(&server)
            .await;

        let dispatcher = dispatcher_for(&server);
        let result = dispatcher
            .call_tool(
                "application_change_stage",
                &json!({"applicationId": "a1", "interviewStageId": "s1"}),
            )
            .await;

        assert_eq!(text(&result), "{}");
    }
}
