//! MCP protocol integration test.
//!
//! Verifies the full round-trip: tool discovery via `list_tools`, tool
//! invocation via `call_tool`, and the uniform result shape — including one
//! end-to-end path through a mock Affinity upstream.

use axum::routing::get;
use axum::{Json, Router};
use rmcp::model::{CallToolRequestParams, ClientInfo};
use rmcp::service::{RoleClient, RunningService};
use rmcp::{ClientHandler, ServiceExt};
use serde_json::{json, Value};

use affinity_client::{AffinityApiClient, AffinityApiConfig};
use affinity_mcp::AffinityMcpServer;

#[derive(Debug, Clone, Default)]
struct DummyClient;

impl ClientHandler for DummyClient {
    fn get_info(&self) -> ClientInfo {
        ClientInfo::default()
    }
}

/// Serve `server` over an in-memory duplex transport, returning the
/// connected client handle and the server task.
async fn connect(
    server: AffinityMcpServer,
) -> anyhow::Result<(
    RunningService<RoleClient, DummyClient>,
    tokio::task::JoinHandle<anyhow::Result<()>>,
)> {
    let (server_transport, client_transport) = tokio::io::duplex(4096);

    let server_handle = tokio::spawn(async move {
        let service = server.serve(server_transport).await?;
        service.waiting().await?;
        anyhow::Ok(())
    });

    let client = DummyClient.serve(client_transport).await?;
    Ok((client, server_handle))
}

async fn call_tool_text(
    client: &RunningService<RoleClient, DummyClient>,
    name: &str,
    arguments: Value,
) -> anyhow::Result<String> {
    let result = client
        .call_tool(CallToolRequestParams {
            meta: None,
            name: name.to_string().into(),
            arguments: arguments.as_object().cloned(),
            task: None,
        })
        .await?;

    let text = result
        .content
        .first()
        .and_then(|c| c.raw.as_text())
        .map(|t| t.text.clone())
        .expect("Expected text content");
    Ok(text)
}

fn keyless_server() -> AffinityMcpServer {
    AffinityMcpServer::with_client(AffinityApiClient::new(AffinityApiConfig::without_key(
        "http://127.0.0.1:1",
    )))
}

#[tokio::test]
async fn test_mcp_protocol_list_tools() -> anyhow::Result<()> {
    let (client, server_handle) = connect(keyless_server()).await?;

    let tools = client.list_tools(None).await?;
    let tool_names: Vec<&str> = tools.tools.iter().map(|t| t.name.as_ref()).collect();
    for expected in [
        "get_lists",
        "get_companies",
        "get_company_fields",
        "get_persons",
        "get_person_fields",
        "add",
    ] {
        assert!(
            tool_names.contains(&expected),
            "Expected {expected} in tool list, got: {tool_names:?}"
        );
    }

    client.cancel().await?;
    server_handle.await??;
    Ok(())
}

#[tokio::test]
async fn test_mcp_protocol_call_add() -> anyhow::Result<()> {
    let (client, server_handle) = connect(keyless_server()).await?;

    let text = call_tool_text(&client, "add", json!({"a": 2, "b": 3})).await?;
    assert_eq!(text, "5");

    client.cancel().await?;
    server_handle.await??;
    Ok(())
}

#[tokio::test]
async fn test_mcp_protocol_validation_failure_shape() -> anyhow::Result<()> {
    let (client, server_handle) = connect(AffinityMcpServer::with_client(
        AffinityApiClient::new(AffinityApiConfig::with_key("http://127.0.0.1:1", "key")),
    ))
    .await?;

    let text = call_tool_text(&client, "get_lists", json!({"limit": 0})).await?;
    let parsed: Value = serde_json::from_str(&text)?;
    assert_eq!(parsed["error"], "Limit must be between 1 and 100");

    client.cancel().await?;
    server_handle.await??;
    Ok(())
}

#[tokio::test]
async fn test_mcp_protocol_missing_credential() -> anyhow::Result<()> {
    let (client, server_handle) = connect(keyless_server()).await?;

    let text = call_tool_text(&client, "get_companies", json!({})).await?;
    let parsed: Value = serde_json::from_str(&text)?;
    assert_eq!(
        parsed["error"],
        "AFFINITY_API_KEY environment variable is not set"
    );

    client.cancel().await?;
    server_handle.await??;
    Ok(())
}

#[tokio::test]
async fn test_mcp_protocol_end_to_end_with_mock_upstream() -> anyhow::Result<()> {
    // Mock Affinity upstream serving a canned lists page.
    let app = Router::new().route(
        "/v2/lists",
        get(|| async { Json(json!({"data": [], "pagination": {"nextUrl": null}})) }),
    );
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
    let base_url = format!("http://{}", listener.local_addr()?);
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("serve mock upstream");
    });

    let server = AffinityMcpServer::with_client(AffinityApiClient::new(
        AffinityApiConfig::with_key(base_url, "test-key"),
    ));
    let (client, server_handle) = connect(server).await?;

    let text = call_tool_text(&client, "get_lists", json!({})).await?;
    let parsed: Value = serde_json::from_str(&text)?;
    assert_eq!(parsed, json!({"data": [], "pagination": {"nextUrl": null}}));

    client.cancel().await?;
    server_handle.await??;
    Ok(())
}
