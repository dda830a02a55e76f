//! Affinity MCP Server
//!
//! Model Context Protocol server exposing read-only Affinity CRM lookups
//! (lists, companies, persons, field metadata) to LLM agents over stdio.

use rmcp::ServiceExt;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("affinity_mcp=info".parse()?))
        .with_writer(std::io::stderr)
        .init();

    tracing::info!("affinity-mcp starting (stdio transport)");

    let server = affinity_mcp::AffinityMcpServer::new();
    let transport = rmcp::transport::io::stdio();

    let service = server.serve(transport).await?;
    service.waiting().await?;

    Ok(())
}
