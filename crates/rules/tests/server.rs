use promptdeck_mcp::protocol::JsonRpcRequest;
use promptdeck_mcp::{McpServer, ServerInfo};
use serde_json::{json, Value};

fn server() -> McpServer {
    McpServer::new(
        promptdeck_rules::registry(),
        ServerInfo::new("promptdeck-rules", "0.1.0"),
    )
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
async fn lists_all_rules_with_descriptions() {
    let response = server()
        .handle(request(1, "tools/list", json!({})))
        .await
        .unwrap();
    let tools = response.result.unwrap()["tools"].as_array().unwrap().clone();
    assert_eq!(tools.len(), 6);

    let zero_trust = tools
        .iter()
        .find(|t| t["name"] == "promptdeck_rule_zero_trust")
        .unwrap();
    assert!(zero_trust["description"]
        .as_str()
        .unwrap()
        .contains("never trust, always verify"));
    assert_eq!(zero_trust["inputSchema"]["required"][0], "architecture");
}

#[tokio::test]
async fn calls_a_rule_end_to_end() {
    let response = server()
        .handle(request(
            2,
            "tools/call",
            json!({
                "name": "promptdeck_rule_multi_org_isolation",
                "arguments": {"architecture": "shared postgres", "tenant_model": "schema-per-tenant"},
            }),
        ))
        .await
        .unwrap();
    let text = response.result.unwrap()["content"][0]["text"]
        .as_str()
        .unwrap()
        .to_string();
    assert!(text.starts_with("# Multi-Organization Isolation Validation"));
    assert!(text.contains("Schema-Per-Tenant Model"));
}

#[tokio::test]
async fn unknown_rule_is_invalid_params() {
    let response = server()
        .handle(request(
            3,
            "tools/call",
            json!({"name": "promptdeck_rule_nonexistent", "arguments": {}}),
        ))
        .await
        .unwrap();
    let error = response.error.unwrap();
    assert_eq!(error.code, -32602);
    assert!(error.message.contains("promptdeck_rule_nonexistent"));
}

#[tokio::test]
async fn missing_required_field_is_internal_error() {
    let response = server()
        .handle(request(
            4,
            "tools/call",
            json!({"name": "promptdeck_rule_zero_trust", "arguments": {}}),
        ))
        .await
        .unwrap();
    let error = response.error.unwrap();
    assert_eq!(error.code, -32603);
    assert!(error.message.contains("promptdeck_rule_zero_trust"));
}
