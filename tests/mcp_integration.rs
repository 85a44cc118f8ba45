//! Integration tests for MCP protocol handling.
//!
//! These tests drive the server through complete sessions over in-memory
//! buffers and check the JSON-RPC replies.

use std::sync::Arc;

use serde_json::Value;
use ui_catalog_mcp::catalog::builtin;
use ui_catalog_mcp::config::SearchConfig;
use ui_catalog_mcp::mcp::protocol::{parse_message, IncomingMessage, RequestId};
use ui_catalog_mcp::mcp::server::ServerState;
use ui_catalog_mcp::mcp::{LineTransport, McpServer};

const INIT: &str = r#"{"jsonrpc":"2.0","id":1,"method":"initialize","params":{"protocolVersion":"2024-11-05","capabilities":{},"clientInfo":{"name":"test-client","version":"1.0.0"}}}"#;
const INITIALIZED: &str = r#"{"jsonrpc":"2.0","method":"notifications/initialized"}"#;

/// Runs one session and returns every reply line parsed as JSON.
async fn session(lines: &[&str]) -> Vec<Value> {
    let input = lines.join("\n") + "\n";
    let catalog = Arc::new(builtin::catalog().expect("built-in catalog is valid"));
    let mut server = McpServer::with_transport(
        catalog,
        SearchConfig::default(),
        LineTransport::new(input.as_bytes(), Vec::new()),
    );

    server.serve().await.expect("session I/O succeeds");
    assert_eq!(server.state(), ServerState::ShuttingDown);

    let output = String::from_utf8(server.into_transport().into_writer()).expect("UTF-8 output");
    output
        .lines()
        .map(|l| serde_json::from_str(l).expect("reply is JSON"))
        .collect()
}

/// Extracts and parses the text payload of a tools/call reply.
fn tool_payload(reply: &Value) -> Value {
    let text = reply["result"]["content"][0]["text"]
        .as_str()
        .expect("tool reply has text content");
    serde_json::from_str(text).expect("tool text is JSON")
}

// =============================================================================
// Protocol Parsing Tests
// =============================================================================

#[test]
fn test_parse_initialize_request() {
    let result = parse_message(INIT);
    assert!(result.is_ok());

    if let IncomingMessage::Request(req) = result.unwrap() {
        assert_eq!(req.method, "initialize");
        assert_eq!(req.id, RequestId::Number(1));
    } else {
        panic!("Expected Request");
    }
}

#[test]
fn test_parse_notification() {
    let result = parse_message(INITIALIZED);
    assert!(matches!(result, Ok(IncomingMessage::Notification(_))));
}

#[test]
fn test_parse_missing_jsonrpc_version() {
    let json = r#"{
        "id": 1,
        "method": "test"
    }"#;

    assert!(parse_message(json).is_err());
}

// =============================================================================
// Session Tests
// =============================================================================

#[tokio::test]
async fn test_tools_list_after_handshake() {
    let replies = session(&[
        INIT,
        INITIALIZED,
        r#"{"jsonrpc":"2.0","id":2,"method":"tools/list"}"#,
    ])
    .await;

    assert_eq!(replies.len(), 2);
    assert_eq!(replies[0]["result"]["protocolVersion"], "2024-11-05");

    let names: Vec<_> = replies[1]["result"]["tools"]
        .as_array()
        .expect("tools array")
        .iter()
        .filter_map(|t| t["name"].as_str())
        .collect();
    assert!(names.contains(&"get_component"));
    assert!(names.contains(&"list_components_by_category"));
    assert!(names.contains(&"search_components"));
}

#[tokio::test]
async fn test_tools_before_handshake_rejected() {
    let replies = session(&[r#"{"jsonrpc":"2.0","id":"a","method":"tools/list"}"#]).await;

    assert_eq!(replies.len(), 1);
    assert_eq!(replies[0]["id"], "a");
    assert_eq!(replies[0]["error"]["code"], -32600);
}

#[tokio::test]
async fn test_get_component_over_the_wire() {
    let replies = session(&[
        INIT,
        INITIALIZED,
        r#"{"jsonrpc":"2.0","id":2,"method":"tools/call","params":{"name":"get_component","arguments":{"id":"table"}}}"#,
        r#"{"jsonrpc":"2.0","id":3,"method":"tools/call","params":{"name":"get_component","arguments":{"id":"nonexistent-id"}}}"#,
    ])
    .await;

    let found = tool_payload(&replies[1]);
    assert_eq!(found["component"]["name"], "Table");
    assert_eq!(found["component"]["subComponents"][0], "table-row");
    assert!(found["component"]["importStatement"].is_string());
    assert!(found["component"]["props"][0]["type"].is_string());

    assert!(replies[2]["result"].get("isError").is_none());
    assert_eq!(tool_payload(&replies[2])["status"], "not_found");
}

#[tokio::test]
async fn test_search_and_category_over_the_wire() {
    let replies = session(&[
        INIT,
        INITIALIZED,
        r#"{"jsonrpc":"2.0","id":2,"method":"tools/call","params":{"name":"search_components","arguments":{"query":"TOGGLE"}}}"#,
        r#"{"jsonrpc":"2.0","id":3,"method":"tools/call","params":{"name":"list_components_by_category","arguments":{"category":"navigation"}}}"#,
        r#"{"jsonrpc":"2.0","id":4,"method":"tools/call","params":{"name":"search_components","arguments":{"query":""}}}"#,
    ])
    .await;

    let search = tool_payload(&replies[1]);
    let hits: Vec<_> = search["components"]
        .as_array()
        .expect("components array")
        .iter()
        .filter_map(|c| c["id"].as_str())
        .collect();
    assert_eq!(hits, ["checkbox", "switch"]);

    let navigation = tool_payload(&replies[2]);
    assert_eq!(navigation["category"], "navigation");
    assert!(navigation["components"]
        .as_array()
        .expect("components array")
        .iter()
        .all(|c| c["category"] == "navigation"));

    assert_eq!(tool_payload(&replies[3])["total_count"], 0);
}

#[tokio::test]
async fn test_unknown_tool_and_method() {
    let replies = session(&[
        INIT,
        INITIALIZED,
        r#"{"jsonrpc":"2.0","id":2,"method":"tools/call","params":{"name":"delete_component","arguments":{}}}"#,
        r#"{"jsonrpc":"2.0","id":3,"method":"resources/read"}"#,
    ])
    .await;

    assert_eq!(replies[1]["result"]["isError"], true);
    assert_eq!(replies[2]["error"]["code"], -32601);
}

#[tokio::test]
async fn test_bad_search_arguments_are_tool_errors() {
    let replies = session(&[
        INIT,
        INITIALIZED,
        r#"{"jsonrpc":"2.0","id":2,"method":"tools/call","params":{"name":"search_components","arguments":{"query":"table","limit":0}}}"#,
        r#"{"jsonrpc":"2.0","id":3,"method":"tools/call","params":{"name":"search_components","arguments":{"query":"table","offset":-2}}}"#,
        r#"{"jsonrpc":"2.0","id":4,"method":"tools/call","params":{"name":"get_component","arguments":{"id":7}}}"#,
    ])
    .await;

    for reply in &replies[1..] {
        assert_eq!(reply["result"]["isError"], true);
    }
    assert_eq!(
        replies[1]["result"]["content"][0]["text"],
        "Invalid parameter: limit must be a positive integer"
    );
    assert_eq!(
        replies[2]["result"]["content"][0]["text"],
        "Invalid parameter: offset must be a non-negative integer"
    );
    assert_eq!(
        replies[3]["result"]["content"][0]["text"],
        "Invalid parameter: id must be a string"
    );
}
