//! Parameter structs for all MCP tools.
//!
//! Each endpoint tool converts into the client crate's query types via
//! `From`; defaulting happens there so the tool schemas document exactly
//! what the wire carries.

use affinity_client::{EntityQuery, ListQuery};
use schemars::JsonSchema;
use serde::Deserialize;

/// Default page size sent when the caller omits `limit`, matching the
/// upstream API's documented maximum page.
const DEFAULT_LIMIT: i64 = 100;

// ── get_lists ──

/// Parameters for the `get_lists` tool.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct GetListsParams {
    /// Opaque pagination token from a previous page.
    #[schemars(description = "Cursor for the next or previous page")]
    pub cursor: Option<String>,
    /// Page size (1-100, default 100).
    #[schemars(description = "Number of items to include in the page (1-100, default: 100)")]
    pub limit: Option<i64>,
}

impl From<GetListsParams> for ListQuery {
    fn from(p: GetListsParams) -> Self {
        ListQuery {
            cursor: p.cursor,
            limit: p.limit.or(Some(DEFAULT_LIMIT)),
        }
    }
}

// ── get_companies ──

/// Parameters for the `get_companies` tool.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct GetCompaniesParams {
    /// Opaque pagination token from a previous page.
    #[schemars(description = "Cursor for the next or previous page")]
    pub cursor: Option<String>,
    /// Page size (1-100, default 100).
    #[schemars(description = "Number of items to include in the page (1-100, default: 100)")]
    pub limit: Option<i64>,
    /// Company ids to filter by.
    #[schemars(description = "Company IDs to filter by")]
    pub ids: Option<Vec<i64>>,
    /// Field ids to include in the response.
    #[schemars(description = "Field IDs for which to return field data")]
    pub field_ids: Option<Vec<String>>,
    /// Field categories to include: enriched, global, relationship-intelligence.
    #[schemars(
        description = "Field types for which to return field data: enriched, global, relationship-intelligence"
    )]
    pub field_types: Option<Vec<String>>,
}

impl From<GetCompaniesParams> for EntityQuery {
    fn from(p: GetCompaniesParams) -> Self {
        EntityQuery {
            cursor: p.cursor,
            limit: p.limit.or(Some(DEFAULT_LIMIT)),
            ids: p.ids.unwrap_or_default(),
            field_ids: p.field_ids.unwrap_or_default(),
            field_types: p.field_types.unwrap_or_default(),
        }
    }
}

// ── get_company_fields ──

/// Parameters for the `get_company_fields` tool.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct GetCompanyFieldsParams {
    /// Opaque pagination token from a previous page.
    #[schemars(description = "Cursor for the next or previous page")]
    pub cursor: Option<String>,
    /// Page size (1-100, default 100).
    #[schemars(description = "Number of items to include in the page (1-100, default: 100)")]
    pub limit: Option<i64>,
}

impl From<GetCompanyFieldsParams> for ListQuery {
    fn from(p: GetCompanyFieldsParams) -> Self {
        ListQuery {
            cursor: p.cursor,
            limit: p.limit.or(Some(DEFAULT_LIMIT)),
        }
    }
}

// ── get_persons ──

/// Parameters for the `get_persons` tool.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct GetPersonsParams {
    /// Opaque pagination token from a previous page.
    #[schemars(description = "Cursor for the next or previous page")]
    pub cursor: Option<String>,
    /// Page size (1-100, default 100).
    #[schemars(description = "Number of items to include in the page (1-100, default: 100)")]
    pub limit: Option<i64>,
    /// Person ids to filter by.
    #[schemars(description = "Person IDs to filter by")]
    pub ids: Option<Vec<i64>>,
    /// Field ids to include in the response.
    #[schemars(description = "Field IDs for which to return field data")]
    pub field_ids: Option<Vec<String>>,
    /// Field categories to include: enriched, global, relationship-intelligence.
    #[schemars(
        description = "Field types for which to return field data: enriched, global, relationship-intelligence"
    )]
    pub field_types: Option<Vec<String>>,
}

impl From<GetPersonsParams> for EntityQuery {
    fn from(p: GetPersonsParams) -> Self {
        EntityQuery {
            cursor: p.cursor,
            limit: p.limit.or(Some(DEFAULT_LIMIT)),
            ids: p.ids.unwrap_or_default(),
            field_ids: p.field_ids.unwrap_or_default(),
            field_types: p.field_types.unwrap_or_default(),
        }
    }
}

// ── get_person_fields ──

/// Parameters for the `get_person_fields` tool.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct GetPersonFieldsParams {
    /// Opaque pagination token from a previous page.
    #[schemars(description = "Cursor for the next or previous page")]
    pub cursor: Option<String>,
    /// Page size (1-100, default 100).
    #[schemars(description = "Number of items to include in the page (1-100, default: 100)")]
    pub limit: Option<i64>,
}

impl From<GetPersonFieldsParams> for ListQuery {
    fn from(p: GetPersonFieldsParams) -> Self {
        ListQuery {
            cursor: p.cursor,
            limit: p.limit.or(Some(DEFAULT_LIMIT)),
        }
    }
}

// ── add ──

/// Parameters for the `add` tool.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct AddParams {
    /// First addend.
    #[schemars(description = "First addend")]
    pub a: i64,
    /// Second addend.
    #[schemars(description = "Second addend")]
    pub b: i64,
}
