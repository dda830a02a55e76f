//! Query-parameter assembly and input validation.
//!
//! The Affinity v2 API expects multi-valued filters as repeated keys
//! (`ids=1&ids=2`), never as a delimited string, so parameters are carried
//! as an ordered pair list rather than a map. Validation runs while the
//! pairs are assembled, before any request exists.

use std::fmt::Display;

use crate::error::{ClientError, ClientResult};

/// Closed set of accepted `fieldTypes` values.
pub const FIELD_TYPES: [&str; 3] = ["enriched", "global", "relationship-intelligence"];

/// Inclusive page-size bounds accepted by the upstream API.
pub const LIMIT_RANGE: std::ops::RangeInclusive<i64> = 1..=100;

/// Ordered query-string pairs; array values appear once per element.
///
/// Serialized by `reqwest::RequestBuilder::query`, which emits one `k=v`
/// entry per pair in insertion order.
#[derive(Debug, Default, Clone)]
pub struct QueryPairs {
    pairs: Vec<(&'static str, String)>,
}

impl QueryPairs {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a single pair.
    pub fn push(&mut self, key: &'static str, value: impl Display) {
        self.pairs.push((key, value.to_string()));
    }

    /// Append a pair when the value is present.
    pub fn push_opt(&mut self, key: &'static str, value: Option<impl Display>) {
        if let Some(value) = value {
            self.push(key, value);
        }
    }

    /// Append one pair per element, preserving element order.
    pub fn push_repeated<I>(&mut self, key: &'static str, values: I)
    where
        I: IntoIterator,
        I::Item: Display,
    {
        for value in values {
            self.push(key, value);
        }
    }

    #[must_use]
    pub fn as_slice(&self) -> &[(&'static str, String)] {
        &self.pairs
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

/// Range-check a caller-supplied page size.
pub fn validate_limit(limit: Option<i64>) -> ClientResult<()> {
    match limit {
        Some(limit) if !LIMIT_RANGE.contains(&limit) => Err(ClientError::invalid_input(
            "Limit must be between 1 and 100",
        )),
        _ => Ok(()),
    }
}

/// Enum-check `fieldTypes` members against [`FIELD_TYPES`].
///
/// Reports the first invalid element and stops scanning; callers get one
/// offender per round trip, not an aggregate.
pub fn validate_field_types(field_types: &[String]) -> ClientResult<()> {
    for field_type in field_types {
        if !FIELD_TYPES.contains(&field_type.as_str()) {
            return Err(ClientError::invalid_input(format!(
                "Invalid field_type: {field_type}. Must be one of {FIELD_TYPES:?}"
            )));
        }
    }
    Ok(())
}

/// Pagination-only query, used by the lists and field-metadata endpoints.
#[derive(Debug, Default, Clone)]
pub struct ListQuery {
    /// Opaque upstream-issued pagination token, passed through unvalidated.
    pub cursor: Option<String>,
    /// Page size; must lie in [`LIMIT_RANGE`] when present.
    pub limit: Option<i64>,
}

impl ListQuery {
    /// Validate and assemble the wire pairs.
    pub fn into_pairs(self) -> ClientResult<QueryPairs> {
        validate_limit(self.limit)?;

        let mut pairs = QueryPairs::new();
        pairs.push_opt("cursor", self.cursor);
        pairs.push_opt("limit", self.limit);
        Ok(pairs)
    }
}

/// Entity query with id/field filters, used by the companies and persons
/// endpoints.
#[derive(Debug, Default, Clone)]
pub struct EntityQuery {
    /// Opaque upstream-issued pagination token, passed through unvalidated.
    pub cursor: Option<String>,
    /// Page size; must lie in [`LIMIT_RANGE`] when present.
    pub limit: Option<i64>,
    /// Entity id filter; repeated `ids` keys on the wire.
    pub ids: Vec<i64>,
    /// Field ids to include; repeated `fieldIds` keys on the wire.
    pub field_ids: Vec<String>,
    /// Field categories to include; repeated `fieldTypes` keys, each a
    /// member of [`FIELD_TYPES`].
    pub field_types: Vec<String>,
}

impl EntityQuery {
    /// Validate and assemble the wire pairs.
    ///
    /// Checks run in a fixed order (limit, then field_types) so the first
    /// reported failure is deterministic.
    pub fn into_pairs(self) -> ClientResult<QueryPairs> {
        validate_limit(self.limit)?;
        validate_field_types(&self.field_types)?;

        let mut pairs = QueryPairs::new();
        pairs.push_opt("cursor", self.cursor);
        pairs.push_opt("limit", self.limit);
        pairs.push_repeated("ids", self.ids);
        pairs.push_repeated("fieldIds", self.field_ids);
        pairs.push_repeated("fieldTypes", self.field_types);
        Ok(pairs)
    }
}
