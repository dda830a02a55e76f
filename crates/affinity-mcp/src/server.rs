//! MCP ServerHandler implementation for the Affinity adapter.
//!
//! Exposes read-only Affinity CRM v2 lookups as MCP tools:
//! - `get_lists` — metadata on all lists
//! - `get_companies` — companies with optional id/field filters
//! - `get_company_fields` — field metadata available on companies
//! - `get_persons` — persons with optional id/field filters
//! - `get_person_fields` — field metadata available on persons
//! - `add` — trivial integer addition (example tool)
//!
//! Every tool is a thin wrapper: validate inputs, issue one GET through the
//! shared client, map the outcome to a JSON string. Failures come back as
//! structured `{"error", "details"}` objects, never as protocol faults.

use std::sync::Arc;

use rmcp::handler::server::router::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{Implementation, ProtocolVersion, ServerCapabilities, ServerInfo};
use rmcp::{tool, tool_handler, tool_router, ServerHandler};

use affinity_client::{AffinityApiClient, AffinityApiConfig};

use crate::tools::helpers::{failure_json, success_json};
use crate::tools::{
    AddParams, GetCompaniesParams, GetCompanyFieldsParams, GetListsParams, GetPersonFieldsParams,
    GetPersonsParams,
};

/// Affinity MCP server handler.
///
/// The API client is shared, read-only state; concurrent tool invocations
/// need no coordination.
#[derive(Debug, Clone)]
pub struct AffinityMcpServer {
    tool_router: ToolRouter<Self>,
    client: Arc<AffinityApiClient>,
}

impl Default for AffinityMcpServer {
    fn default() -> Self {
        Self::new()
    }
}

impl AffinityMcpServer {
    /// Create a server with configuration read from the process environment.
    ///
    /// A missing `AFFINITY_API_KEY` does not prevent startup; every tool
    /// call reports it as a structured error instead.
    #[must_use]
    pub fn new() -> Self {
        Self::with_client(AffinityApiClient::from_env())
    }

    /// Create a server over an explicit client.
    #[must_use]
    pub fn with_client(client: AffinityApiClient) -> Self {
        Self {
            tool_router: Self::tool_router(),
            client: Arc::new(client),
        }
    }
}

#[tool_handler(router = self.tool_router)]
impl ServerHandler for AffinityMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2025_03_26,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "affinity-mcp".to_string(),
                title: Some("Affinity MCP Server".to_string()),
                version: env!("CARGO_PKG_VERSION").to_string(),
                description: Some(
                    "MCP server exposing read-only Affinity CRM lookups: lists, companies, \
                     persons, and their field metadata"
                        .to_string(),
                ),
                icons: None,
                website_url: None,
            },
            instructions: Some(
                "Affinity is a relationship-intelligence CRM. Start with get_lists to see \
                 which lists exist, then page through records with get_companies/get_persons \
                 (cursor + limit, limit 1-100, default 100). get_company_fields and \
                 get_person_fields show which field ids and field types can be requested. \
                 Record filters: ids, field_ids, and field_types (enriched, global, \
                 relationship-intelligence). All tools are read-only and return the upstream \
                 JSON body unchanged; failures come back as {\"error\", \"details\"} objects \
                 rather than protocol errors."
                    .to_string(),
            ),
        }
    }
}

#[tool_router(router = tool_router)]
impl AffinityMcpServer {
    /// Get metadata on all Affinity lists.
    #[tool(
        name = "get_lists",
        description = "Get metadata on all Affinity lists. Supports cursor/limit pagination (limit 1-100, default 100). Returns the lists data and pagination info."
    )]
    pub async fn get_lists(&self, Parameters(params): Parameters<GetListsParams>) -> String {
        match self.client.get_lists(params.into()).await {
            Ok(body) => success_json(&body),
            Err(e) => failure_json(&e),
        }
    }

    /// Get all companies, optionally filtered by ids and enriched with
    /// requested field data.
    #[tool(
        name = "get_companies",
        description = "Get all companies in Affinity with basic information and field data. Filter by ids; select field data with field_ids and field_types (enriched, global, relationship-intelligence). Supports cursor/limit pagination (limit 1-100, default 100)."
    )]
    pub async fn get_companies(
        &self,
        Parameters(params): Parameters<GetCompaniesParams>,
    ) -> String {
        match self.client.get_companies(params.into()).await {
            Ok(body) => success_json(&body),
            Err(e) => failure_json(&e),
        }
    }

    /// Get metadata on all company fields.
    #[tool(
        name = "get_company_fields",
        description = "Get metadata on all company fields available in Affinity, including both enriched and custom fields. Supports cursor/limit pagination (limit 1-100, default 100)."
    )]
    pub async fn get_company_fields(
        &self,
        Parameters(params): Parameters<GetCompanyFieldsParams>,
    ) -> String {
        match self.client.get_company_fields(params.into()).await {
            Ok(body) => success_json(&body),
            Err(e) => failure_json(&e),
        }
    }

    /// Get all persons, optionally filtered by ids and enriched with
    /// requested field data.
    #[tool(
        name = "get_persons",
        description = "Get all persons in Affinity with basic information and field data. Filter by ids; select field data with field_ids and field_types (enriched, global, relationship-intelligence). Supports cursor/limit pagination (limit 1-100, default 100)."
    )]
    pub async fn get_persons(&self, Parameters(params): Parameters<GetPersonsParams>) -> String {
        match self.client.get_persons(params.into()).await {
            Ok(body) => success_json(&body),
            Err(e) => failure_json(&e),
        }
    }

    /// Get metadata on all person fields.
    #[tool(
        name = "get_person_fields",
        description = "Get metadata on all person fields available in Affinity, including both enriched and custom fields. Supports cursor/limit pagination (limit 1-100, default 100)."
    )]
    pub async fn get_person_fields(
        &self,
        Parameters(params): Parameters<GetPersonFieldsParams>,
    ) -> String {
        match self.client.get_person_fields(params.into()).await {
            Ok(body) => success_json(&body),
            Err(e) => failure_json(&e),
        }
    }

    /// Add two integers.
    #[tool(name = "add", description = "Add two integers and return the sum.")]
    pub async fn add(&self, Parameters(params): Parameters<AddParams>) -> String {
        (params.a + params.b).to_string()
    }
}
