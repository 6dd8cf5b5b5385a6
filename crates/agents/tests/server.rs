use promptdeck_mcp::protocol::JsonRpcRequest;
use promptdeck_mcp::{McpServer, ServerInfo};
use serde_json::{json, Value};

fn server() -> McpServer {
    McpServer::new(
        promptdeck_agents::registry(),
        ServerInfo::new("promptdeck-agents", "0.1.0"),
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
async fn lists_all_agents() {
    let response = server()
        .handle(request(1, "tools/list", json!({})))
        .await
        .unwrap();
    let tools = response.result.unwrap()["tools"].as_array().unwrap().clone();
    assert_eq!(tools.len(), 11);

    let analyst = tools
        .iter()
        .find(|t| t["name"] == "promptdeck_analyst")
        .unwrap();
    assert_eq!(analyst["inputSchema"]["required"][0], "user_idea");

    let sta = tools
        .iter()
        .find(|t| t["name"] == "promptdeck_security_test_analyst")
        .unwrap();
    assert_eq!(sta["inputSchema"]["required"][0], "security_requirement");
}

#[tokio::test]
async fn calls_an_agent_end_to_end() {
    let response = server()
        .handle(request(
            2,
            "tools/call",
            json!({
                "name": "promptdeck_analyst",
                "arguments": {"user_idea": "a plant watering reminder", "workflow": "five-ws"},
            }),
        ))
        .await
        .unwrap();
    let text = response.result.unwrap()["content"][0]["text"]
        .as_str()
        .unwrap()
        .to_string();
    assert!(text.starts_with("# Analyst - Ideation Session"));
    assert!(text.contains("a plant watering reminder"));
    assert!(text.contains("## Project Brief"));
}

#[tokio::test]
async fn scamper_technique_is_available() {
    let response = server()
        .handle(request(
            3,
            "tools/call",
            json!({
                "name": "promptdeck_brainstorming_coach",
                "arguments": {"topic": "reduce review latency", "technique": "scamper"},
            }),
        ))
        .await
        .unwrap();
    let text = response.result.unwrap()["content"][0]["text"]
        .as_str()
        .unwrap()
        .to_string();
    assert!(text.contains("SCAMPER"));
    assert!(text.contains("**E**liminate"));
}

#[tokio::test]
async fn unknown_agent_is_invalid_params() {
    let response = server()
        .handle(request(
            4,
            "tools/call",
            json!({"name": "promptdeck_nonexistent", "arguments": {}}),
        ))
        .await
        .unwrap();
    let error = response.error.unwrap();
    assert_eq!(error.code, -32602);
    assert!(error.message.contains("promptdeck_nonexistent"));
}

#[tokio::test]
async fn missing_required_field_is_internal_error() {
    let response = server()
        .handle(request(
            5,
            "tools/call",
            json!({"name": "promptdeck_developer", "arguments": {}}),
        ))
        .await
        .unwrap();
    let error = response.error.unwrap();
    assert_eq!(error.code, -32603);
    assert!(error.message.contains("promptdeck_developer"));
}
