//! Tool trait, registry and dispatch.
//!
//! A tool is a named template generator: it advertises a [`ToolDefinition`]
//! and turns a JSON argument object into a markdown string. The registry
//! owns the catalog for one server and routes `tools/call` by name.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::{json, Value};
use thiserror::Error;
use tracing::warn;

use crate::protocol::{CallToolResult, ToolDefinition};

/// One invocable tool in a server's catalog.
#[async_trait]
pub trait Tool: Send + Sync {
    /// Public metadata: name, description and JSON Schema of the arguments.
    fn definition(&self) -> ToolDefinition;

    /// Render the tool's template for the given arguments.
    ///
    /// Implementations deserialize `arguments` into a typed struct, so a
    /// missing required field surfaces here as an error rather than as a
    /// template with holes in it.
    async fn execute(&self, arguments: Value) -> anyhow::Result<String>;
}

/// Why a dispatch failed. Unknown names and handler failures are distinct
/// cases; callers map them to different wire errors.
#[derive(Debug, Error)]
pub enum DispatchError {
    #[error("unknown tool: {0}")]
    UnknownTool(String),
    #[error("tool {name} failed")]
    Execution {
        name: String,
        #[source]
        source: anyhow::Error,
    },
}

/// Ordered catalog of tools for one server.
///
/// Registration order is listing order. The set is small (a few dozen
/// entries at most) so lookup is a linear scan.
#[derive(Default)]
pub struct ToolRegistry {
    tools: Vec<Arc<dyn Tool>>,
}

impl ToolRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a tool to the catalog. A duplicate name is a bug in the server
    /// wiring; the first registration wins and the duplicate is dropped.
    pub fn register(&mut self, tool: Arc<dyn Tool>) {
        let name = tool.definition().name;
        if self.tools.iter().any(|t| t.definition().name == name) {
            warn!(tool = %name, "duplicate tool registration ignored");
            return;
        }
        self.tools.push(tool);
    }

    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }

    /// Definitions of every registered tool, in registration order.
    pub fn definitions(&self) -> Vec<ToolDefinition> {
        self.tools.iter().map(|t| t.definition()).collect()
    }

    /// Invoke a tool by name and wrap its markdown output as a text result.
    pub async fn dispatch(&self, name: &str, arguments: Value) -> Result<CallToolResult, DispatchError> {
        let tool = self
            .tools
            .iter()
            .find(|t| t.definition().name == name)
            .ok_or_else(|| DispatchError::UnknownTool(name.to_string()))?;

        let text = tool
            .execute(arguments)
            .await
            .map_err(|source| DispatchError::Execution {
                name: name.to_string(),
                source,
            })?;

        Ok(CallToolResult::text(text))
    }
}

/// Build an object schema from `(name, schema)` property pairs and the list
/// of required property names.
pub fn object_schema(properties: Vec<(&str, Value)>, required: Vec<&str>) -> Value {
    let props: serde_json::Map<String, Value> = properties
        .into_iter()
        .map(|(k, v)| (k.to_string(), v))
        .collect();
    json!({
        "type": "object",
        "properties": props,
        "required": required,
    })
}

pub fn string_prop(description: &str) -> Value {
    json!({"type": "string", "description": description})
}

pub fn bool_prop(description: &str) -> Value {
    json!({"type": "boolean", "description": description})
}

pub fn number_prop(description: &str) -> Value {
    json!({"type": "number", "description": description})
}

pub fn string_array_prop(description: &str) -> Value {
    json!({
        "type": "array",
        "items": {"type": "string"},
        "description": description,
    })
}

pub fn enum_prop(description: &str, values: &[&str]) -> Value {
    json!({
        "type": "string",
        "enum": values,
        "description": description,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Echo;

    #[async_trait]
    impl Tool for Echo {
        fn definition(&self) -> ToolDefinition {
            ToolDefinition {
                name: "echo".into(),
                description: "Echoes the message back".into(),
                input_schema: object_schema(
                    vec![("message", string_prop("Text to echo"))],
                    vec!["message"],
                ),
            }
        }

        async fn execute(&self, arguments: Value) -> anyhow::Result<String> {
            let message = arguments
                .get("message")
                .and_then(Value::as_str)
                .ok_or_else(|| anyhow::anyhow!("message is required"))?;
            Ok(message.to_string())
        }
    }

    struct Broken;

    #[async_trait]
    impl Tool for Broken {
        fn definition(&self) -> ToolDefinition {
            ToolDefinition {
                name: "broken".into(),
                description: "Always fails".into(),
                input_schema: object_schema(vec![], vec![]),
            }
        }

        async fn execute(&self, _arguments: Value) -> anyhow::Result<String> {
            anyhow::bail!("boom")
        }
    }

    fn registry() -> ToolRegistry {
        let mut registry = ToolRegistry::new();
        registry.register(Arc::new(Echo));
        registry.register(Arc::new(Broken));
        registry
    }

    #[test]
    fn definitions_follow_registration_order() {
        let names: Vec<String> = registry()
            .definitions()
            .into_iter()
            .map(|d| d.name)
            .collect();
        assert_eq!(names, vec!["echo", "broken"]);
    }

    #[test]
    fn duplicate_registration_keeps_first() {
        let mut registry = registry();
        registry.register(Arc::new(Echo));
        assert_eq!(registry.len(), 2);
    }

    #[tokio::test]
    async fn dispatch_wraps_output_as_text() {
        let result = registry()
            .dispatch("echo", json!({"message": "hi"}))
            .await
            .unwrap();
        let value = serde_json::to_value(&result).unwrap();
        assert_eq!(value["content"][0]["text"], "hi");
    }

    #[tokio::test]
    async fn dispatch_unknown_name() {
        let err = registry().dispatch("nope", json!({})).await.unwrap_err();
        assert!(matches!(err, DispatchError::UnknownTool(name) if name == "nope"));
    }

    #[tokio::test]
    async fn dispatch_reports_handler_failure() {
        let err = registry().dispatch("broken", json!({})).await.unwrap_err();
        match err {
            DispatchError::Execution { name, .. } => assert_eq!(name, "broken"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[tokio::test]
    async fn dispatch_surfaces_missing_required_field() {
        let err = registry().dispatch("echo", json!({})).await.unwrap_err();
        assert!(err.to_string().contains("echo"));
    }

    #[test]
    fn object_schema_shape() {
        let schema = object_schema(
            vec![
                ("topic", string_prop("Topic")),
                ("depth", enum_prop("Depth", &["quick", "deep"])),
            ],
            vec!["topic"],
        );
        assert_eq!(schema["type"], "object");
        assert_eq!(schema["properties"]["topic"]["type"], "string");
        assert_eq!(schema["properties"]["depth"]["enum"][1], "deep");
        assert_eq!(schema["required"][0], "topic");
    }
}
