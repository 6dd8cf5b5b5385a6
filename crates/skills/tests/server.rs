use promptdeck_mcp::protocol::JsonRpcRequest;
use promptdeck_mcp::{McpServer, ServerInfo};
use serde_json::{json, Value};

fn server() -> McpServer {
    McpServer::new(
        promptdeck_skills::registry(),
        ServerInfo::new("promptdeck-skills", "0.1.0"),
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
async fn lists_all_skills() {
    let response = server()
        .handle(request(1, "tools/list", json!({})))
        .await
        .unwrap();
    let tools = response.result.unwrap()["tools"].as_array().unwrap().clone();
    assert_eq!(tools.len(), 11);

    let brainstorming = tools
        .iter()
        .find(|t| t["name"] == "promptdeck_skill_brainstorming")
        .unwrap();
    assert_eq!(brainstorming["inputSchema"]["required"][0], "topic");

    let download = tools
        .iter()
        .find(|t| t["name"] == "promptdeck_skill_download_images")
        .unwrap();
    assert_eq!(download["inputSchema"]["required"][0], "target");
}

#[tokio::test]
async fn calls_a_skill_end_to_end() {
    let response = server()
        .handle(request(
            2,
            "tools/call",
            json!({
                "name": "promptdeck_skill_brainstorming",
                "arguments": {"topic": "onboarding flow", "method": "brainwriting"},
            }),
        ))
        .await
        .unwrap();
    let text = response.result.unwrap()["content"][0]["text"]
        .as_str()
        .unwrap()
        .to_string();
    assert!(text.starts_with("# Brainstorming Session"));
    assert!(text.contains("onboarding flow"));
    assert!(text.contains("Brainwriting (6-3-5 Method)"));
}

#[tokio::test]
async fn unknown_skill_is_invalid_params() {
    let response = server()
        .handle(request(
            3,
            "tools/call",
            json!({"name": "promptdeck_skill_nonexistent", "arguments": {}}),
        ))
        .await
        .unwrap();
    let error = response.error.unwrap();
    assert_eq!(error.code, -32602);
    assert!(error.message.contains("promptdeck_skill_nonexistent"));
}

#[tokio::test]
async fn missing_required_field_is_internal_error() {
    let response = server()
        .handle(request(
            4,
            "tools/call",
            json!({"name": "promptdeck_skill_research", "arguments": {}}),
        ))
        .await
        .unwrap();
    let error = response.error.unwrap();
    assert_eq!(error.code, -32603);
    assert!(error.message.contains("promptdeck_skill_research"));
}
