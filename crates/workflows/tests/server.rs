use promptdeck_mcp::protocol::JsonRpcRequest;
use promptdeck_mcp::{McpServer, ServerInfo};
use serde_json::{json, Value};

fn server() -> McpServer {
    McpServer::new(
        promptdeck_workflows::registry(),
        ServerInfo::new("promptdeck-workflows", "0.1.0"),
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
async fn lists_all_workflows() {
    let response = server()
        .handle(request(1, "tools/list", json!({})))
        .await
        .unwrap();
    let tools = response.result.unwrap()["tools"].as_array().unwrap().clone();
    assert_eq!(tools.len(), 5);

    let hats = tools
        .iter()
        .find(|t| t["name"] == "promptdeck_workflow_six_thinking_hats")
        .unwrap();
    assert!(hats["description"].as_str().unwrap().contains("Six Thinking Hats"));
}

#[tokio::test]
async fn calls_a_workflow_end_to_end() {
    let response = server()
        .handle(request(
            2,
            "tools/call",
            json!({
                "name": "promptdeck_workflow_five_ws",
                "arguments": {"topic": "incident response runbook", "focus_area": "why"},
            }),
        ))
        .await
        .unwrap();
    let text = response.result.unwrap()["content"][0]["text"]
        .as_str()
        .unwrap()
        .to_string();
    assert!(text.starts_with("# Five W's Analysis"));
    assert!(text.contains("**Focus:** WHY"));
}

#[tokio::test]
async fn unknown_workflow_is_invalid_params() {
    let response = server()
        .handle(request(
            3,
            "tools/call",
            json!({"name": "promptdeck_workflow_seven_ss", "arguments": {}}),
        ))
        .await
        .unwrap();
    let error = response.error.unwrap();
    assert_eq!(error.code, -32602);
    assert!(error.message.contains("promptdeck_workflow_seven_ss"));
}
