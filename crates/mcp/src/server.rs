// MCP server: JSON-RPC 2.0 over newline-delimited stdio

use crate::dispatcher::Dispatcher;
use crate::protocol::{
    negotiate_protocol_version, CallToolParams, InitializeParams, InitializeResult,
    JsonRpcError, JsonRpcRequest, JsonRpcResponse, ListToolsResult, ServerCapabilities,
    ServerInfo, ToolsCapability, LATEST_PROTOCOL_VERSION,
};
use anyhow::{Context, Result};
use bytes::BytesMut;
use futures::{SinkExt, StreamExt};
use serde_json::Value;
use std::io;
use tokio::io::{AsyncRead, AsyncWrite};
use tokio_util::codec::{Decoder, FramedRead, FramedWrite, LinesCodec, LinesCodecError};

/// Frames larger than this are rejected instead of buffered.
const MAX_FRAME_LENGTH: usize = 8 * 1024 * 1024;

/// One inbound line.
#[derive(Debug, PartialEq)]
enum Frame {
    Line(String),
    /// Not valid UTF-8. The bytes up to the newline are consumed.
    Malformed,
    /// Longer than `MAX_FRAME_LENGTH`. The rest of the line is discarded.
    Oversized,
}

/// `LinesCodec` that reports undecodable lines as frames instead of errors.
///
/// `FramedRead` ends the stream after any decoder error, so only real I/O
/// failures are allowed to surface as `Err`.
struct FrameCodec {
    lines: LinesCodec,
}

impl FrameCodec {
    fn new(max_length: usize) -> Self {
        Self {
            lines: LinesCodec::new_with_max_length(max_length),
        }
    }

    fn classify(decoded: Result<Option<String>, LinesCodecError>) -> io::Result<Option<Frame>> {
        match decoded {
            Ok(line) => Ok(line.map(Frame::Line)),
            Err(LinesCodecError::MaxLineLengthExceeded) => Ok(Some(Frame::Oversized)),
            Err(LinesCodecError::Io(e)) if e.kind() == io::ErrorKind::InvalidData => {
                Ok(Some(Frame::Malformed))
            }
            Err(LinesCodecError::Io(e)) => Err(e),
        }
    }
}

impl Decoder for FrameCodec {
    type Item = Frame;
    type Error = io::Error;

    fn decode(&mut self, buf: &mut BytesMut) -> io::Result<Option<Frame>> {
        Self::classify(self.lines.decode(buf))
    }

    fn decode_eof(&mut self, buf: &mut BytesMut) -> io::Result<Option<Frame>> {
        Self::classify(self.lines.decode_eof(buf))
    }
}

pub struct McpServer {
    dispatcher: Dispatcher,
    info: ServerInfo,
}

impl McpServer {
    pub fn new(dispatcher: Dispatcher, name: impl Into<String>) -> Self {
        Self {
            dispatcher,
            info: ServerInfo {
                name: name.into(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
        }
    }

    /// Serve on the process's stdin/stdout until stdin closes.
    pub async fn start(&self) -> Result<()> {
        tracing::info!(
            name = %self.info.name,
            tools = self.dispatcher.list_tools().len(),
            "MCP server listening on stdio"
        );
        self.serve(tokio::io::stdin(), tokio::io::stdout()).await
    }

    /// Read frames from `reader` and answer on `writer`, one at a time.
    pub async fn serve<R, W>(&self, reader: R, writer: W) -> Result<()>
    where
        R: AsyncRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        let mut frames = FramedRead::new(reader, FrameCodec::new(MAX_FRAME_LENGTH));
        let mut sink = FramedWrite::new(writer, LinesCodec::new());

        while let Some(frame) = frames.next().await {
            let response = match frame.context("Failed to read from transport")? {
                Frame::Line(line) => self.handle_line(&line).await,
                Frame::Malformed => {
                    tracing::warn!("Dropping frame that is not valid UTF-8");
                    Some(JsonRpcResponse::error(Value::Null, JsonRpcError::parse_error()))
                }
                Frame::Oversized => {
                    tracing::warn!(max = MAX_FRAME_LENGTH, "Dropping oversized frame");
                    Some(JsonRpcResponse::error(Value::Null, JsonRpcError::parse_error()))
                }
            };

            if let Some(response) = response {
                Self::send(&mut sink, &response).await?;
            }
        }

        tracing::info!("stdin closed, shutting down");
        Ok(())
    }

    async fn send<W>(sink: &mut FramedWrite<W, LinesCodec>, response: &JsonRpcResponse) -> Result<()>
    where
        W: AsyncWrite + Unpin,
    {
        let line = serde_json::to_string(response).context("Failed to serialize response")?;
        sink.send(line).await.context("Failed to write response")?;
        Ok(())
    }

    /// Handle one raw frame. Returns `None` for blank lines and notifications.
    pub async fn handle_line(&self, line: &str) -> Option<JsonRpcResponse> {
        if line.trim().is_empty() {
            return None;
        }

        let value: Value = match serde_json::from_str(line) {
            Ok(value) => value,
            Err(e) => {
                tracing::warn!(error = %e, "Failed to parse JSON-RPC frame");
                return Some(JsonRpcResponse::error(Value::Null, JsonRpcError::parse_error()));
            }
        };

        let id = value.get("id").cloned();
        match serde_json::from_value::<JsonRpcRequest>(value) {
            Ok(request) => self.handle_request(request).await,
            // Malformed requests still get a reply unless they look like notifications.
            Err(_) => id.map(|id| JsonRpcResponse::error(id, JsonRpcError::invalid_request())),
        }
    }

    /// Route a parsed request to its method handler.
    pub async fn handle_request(&self, request: JsonRpcRequest) -> Option<JsonRpcResponse> {
        tracing::debug!(method = %request.method, "Received request");

        let Some(id) = request.id else {
            if request.method != "notifications/initialized" {
                tracing::debug!(method = %request.method, "Ignoring notification");
            }
            return None;
        };

        let response = match request.method.as_str() {
            "initialize" => self.initialize(id, request.params),
            "ping" => JsonRpcResponse::success(id, serde_json::json!({})),
            "tools/list" => JsonRpcResponse::success(
                id,
                ListToolsResult {
                    tools: self.dispatcher.list_tools().to_vec(),
                },
            ),
            "tools/call" => self.call_tool(id, request.params).await,
            method => JsonRpcResponse::error(id, JsonRpcError::method_not_found(method)),
        };

        Some(response)
    }

    fn initialize(&self, id: Value, params: Option<Value>) -> JsonRpcResponse {
        let protocol_version = params
            .and_then(|p| serde_json::from_value::<InitializeParams>(p).ok())
            .map(|p| {
                if let Some(client) = &p.client_info {
                    tracing::info!(client = %client.name, version = %client.version, "Client connected");
                }
                negotiate_protocol_version(&p.protocol_version)
            })
            .unwrap_or(LATEST_PROTOCOL_VERSION);

        JsonRpcResponse::success(
            id,
            InitializeResult {
                protocol_version: protocol_version.to_string(),
                capabilities: ServerCapabilities {
                    tools: Some(ToolsCapability {
                        list_changed: false,
                    }),
                },
                server_info: self.info.clone(),
            },
        )
    }

    async fn call_tool(&self, id: Value, params: Option<Value>) -> JsonRpcResponse {
        let params: CallToolParams = match params.map(serde_json::from_value) {
            Some(Ok(params)) => params,
            Some(Err(e)) => {
                return JsonRpcResponse::error(
                    id,
                    JsonRpcError::invalid_params(format!("Invalid tools/call params: {e}")),
                )
            }
            None => {
                return JsonRpcResponse::error(
                    id,
                    JsonRpcError::invalid_params("Missing tools/call params"),
                )
            }
        };

        let arguments = Value::Object(params.arguments.unwrap_or_default());
        let result = self.dispatcher.call_tool(&params.name, &arguments).await;
        JsonRpcResponse::success(id, result)
    }
}
