//! Stdio server loop.
//!
//! Messages are newline-delimited JSON on stdin/stdout. Stdout carries
//! protocol traffic only; all logging goes to stderr.

use anyhow::{Context, Result};
use serde_json::Value;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tracing::{debug, error, info};

use crate::protocol::{
    CallToolParams, InitializeResult, JsonRpcError, JsonRpcRequest, JsonRpcResponse,
    ListToolsResult, ServerInfo,
};
use crate::tools::{DispatchError, ToolRegistry};

pub struct McpServer {
    registry: ToolRegistry,
    info: ServerInfo,
}

impl McpServer {
    pub fn new(registry: ToolRegistry, info: ServerInfo) -> Self {
        Self { registry, info }
    }

    /// Handle one request. Returns `None` for notifications.
    pub async fn handle(&self, request: JsonRpcRequest) -> Option<JsonRpcResponse> {
        if request.is_notification() {
            debug!(method = %request.method, "notification");
            return None;
        }
        let id = request.id.clone().unwrap_or(Value::Null);

        let response = match request.method.as_str() {
            "initialize" => {
                let result = InitializeResult::for_server(self.info.clone());
                match serde_json::to_value(result) {
                    Ok(value) => JsonRpcResponse::success(id, value),
                    Err(e) => {
                        JsonRpcResponse::failure(id, JsonRpcError::internal_error(e.to_string()))
                    }
                }
            }
            "ping" => JsonRpcResponse::success(id, Value::Object(Default::default())),
            "tools/list" => {
                let result = ListToolsResult {
                    tools: self.registry.definitions(),
                };
                match serde_json::to_value(result) {
                    Ok(value) => JsonRpcResponse::success(id, value),
                    Err(e) => {
                        JsonRpcResponse::failure(id, JsonRpcError::internal_error(e.to_string()))
                    }
                }
            }
            "tools/call" => self.handle_call(id, request.params).await,
            other => JsonRpcResponse::failure(id, JsonRpcError::method_not_found(other)),
        };

        Some(response)
    }

    async fn handle_call(&self, id: Value, params: Option<Value>) -> JsonRpcResponse {
        let params: CallToolParams = match params
            .ok_or_else(|| "missing params".to_string())
            .and_then(|p| serde_json::from_value(p).map_err(|e| e.to_string()))
        {
            Ok(params) => params,
            Err(message) => {
                return JsonRpcResponse::failure(id, JsonRpcError::invalid_params(message));
            }
        };

        let arguments = params.arguments.unwrap_or_else(|| Value::Object(Default::default()));
        match self.registry.dispatch(&params.name, arguments).await {
            Ok(result) => match serde_json::to_value(result) {
                Ok(value) => JsonRpcResponse::success(id, value),
                Err(e) => {
                    JsonRpcResponse::failure(id, JsonRpcError::internal_error(e.to_string()))
                }
            },
            Err(DispatchError::UnknownTool(name)) => JsonRpcResponse::failure(
                id,
                JsonRpcError::invalid_params(format!("unknown tool: {name}")),
            ),
            Err(err @ DispatchError::Execution { .. }) => {
                error!(tool = %params.name, error = %format!("{err:#}"), "tool execution failed");
                JsonRpcResponse::failure(id, JsonRpcError::internal_error(format!("{err:#}")))
            }
        }
    }

    /// Serve requests from stdin until EOF.
    pub async fn run(self) -> Result<()> {
        info!(server = %self.info.name, tools = self.registry.len(), "serving on stdio");

        let stdin = BufReader::new(tokio::io::stdin());
        let mut stdout = tokio::io::stdout();
        let mut lines = stdin.lines();

        while let Some(line) = lines.next_line().await.context("reading stdin")? {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            let response = match serde_json::from_str::<JsonRpcRequest>(line) {
                Ok(request) => self.handle(request).await,
                Err(e) => {
                    debug!(error = %e, "unparseable message");
                    Some(JsonRpcResponse::failure(
                        Value::Null,
                        JsonRpcError::parse_error(),
                    ))
                }
            };

            if let Some(response) = response {
                let mut out = serde_json::to_string(&response).context("encoding response")?;
                out.push('\n');
                stdout
                    .write_all(out.as_bytes())
                    .await
                    .context("writing stdout")?;
                stdout.flush().await.context("flushing stdout")?;
            }
        }

        info!(server = %self.info.name, "stdin closed, shutting down");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::protocol::{ToolDefinition, MCP_PROTOCOL_VERSION};
    use crate::tools::{object_schema, string_prop, Tool};
    use async_trait::async_trait;
    use serde_json::json;
    use std::sync::Arc;

    struct Shout;

    #[async_trait]
    impl Tool for Shout {
        fn definition(&self) -> ToolDefinition {
            ToolDefinition {
                name: "shout".into(),
                description: "Uppercases the input".into(),
                input_schema: object_schema(
                    vec![("text", string_prop("Text to uppercase"))],
                    vec!["text"],
                ),
            }
        }

        async fn execute(&self, arguments: Value) -> anyhow::Result<String> {
            let text = arguments
                .get("text")
                .and_then(Value::as_str)
                .ok_or_else(|| anyhow::anyhow!("text is required"))?;
            Ok(text.to_uppercase())
        }
    }

    fn server() -> McpServer {
        let mut registry = ToolRegistry::new();
        registry.register(Arc::new(Shout));
        McpServer::new(registry, ServerInfo::new("promptdeck-test", "0.1.0"))
    }

    fn request(id: i64, method: &str, params: Value) -> JsonRpcRequest {
        serde_json::from_value(json!({
            "jsonrpc": "2.0",
            "id": id,
            "method": method,
            "params": params,
        }))
        .unwrap()
    }

    #[tokio::test]
    async fn initialize_reports_protocol_and_server() {
        let response = server()
            .handle(request(1, "initialize", json!({})))
            .await
            .unwrap();
        let result = response.result.unwrap();
        assert_eq!(result["protocolVersion"], MCP_PROTOCOL_VERSION);
        assert_eq!(result["serverInfo"]["name"], "promptdeck-test");
    }

    #[tokio::test]
    async fn list_then_call() {
        let server = server();

        let listed = server
            .handle(request(1, "tools/list", json!({})))
            .await
            .unwrap();
        let tools = &listed.result.unwrap()["tools"];
        assert_eq!(tools[0]["name"], "shout");

        let called = server
            .handle(request(
                2,
                "tools/call",
                json!({"name": "shout", "arguments": {"text": "hi"}}),
            ))
            .await
            .unwrap();
        let result = called.result.unwrap();
        assert_eq!(result["content"][0]["text"], "HI");
    }

    #[tokio::test]
    async fn unknown_method_is_32601() {
        let response = server()
            .handle(request(1, "resources/list", json!({})))
            .await
            .unwrap();
        assert_eq!(response.error.unwrap().code, -32601);
    }

    #[tokio::test]
    async fn unknown_tool_is_32602() {
        let response = server()
            .handle(request(1, "tools/call", json!({"name": "nope"})))
            .await
            .unwrap();
        let error = response.error.unwrap();
        assert_eq!(error.code, -32602);
        assert!(error.message.contains("nope"));
    }

    #[tokio::test]
    async fn failing_tool_is_32603() {
        let response = server()
            .handle(request(
                1,
                "tools/call",
                json!({"name": "shout", "arguments": {}}),
            ))
            .await
            .unwrap();
        assert_eq!(response.error.unwrap().code, -32603);
    }

    #[tokio::test]
    async fn notification_gets_no_response() {
        let request: JsonRpcRequest = serde_json::from_value(json!({
            "jsonrpc": "2.0",
            "method": "notifications/initialized",
        }))
        .unwrap();
        assert!(server().handle(request).await.is_none());
    }
}
