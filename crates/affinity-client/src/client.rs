//! Affinity v2 API client.
//!
//! One typed method per endpoint, all funneling through [`AffinityApiClient::get`],
//! the single request/classification seam.

use reqwest::header::ACCEPT;
use reqwest::StatusCode;
use secrecy::{ExposeSecret, SecretString};
use serde_json::Value;

use crate::config::AffinityApiConfig;
use crate::error::{ClientError, ClientResult};
use crate::query::{EntityQuery, ListQuery, QueryPairs};

/// Read-only client for the Affinity v2 API.
///
/// Holds no mutable state after construction; safe to share across
/// concurrent tool invocations behind an `Arc`.
#[derive(Debug, Clone)]
pub struct AffinityApiClient {
    config: AffinityApiConfig,
    http: reqwest::Client,
}

impl AffinityApiClient {
    /// Create a client over the given configuration.
    #[must_use]
    pub fn new(config: AffinityApiConfig) -> Self {
        Self {
            config,
            http: reqwest::Client::new(),
        }
    }

    /// Create a client configured from the process environment.
    #[must_use]
    pub fn from_env() -> Self {
        Self::new(AffinityApiConfig::from_env())
    }

    /// The credential check runs before input validation, matching the
    /// upstream-facing contract: a missing key is reported regardless of
    /// other argument validity.
    fn require_api_key(&self) -> ClientResult<&SecretString> {
        self.config.api_key.as_ref().ok_or(ClientError::MissingApiKey)
    }

    fn build_url(&self, endpoint: &str) -> String {
        format!(
            "{}/{}",
            self.config.base_url.trim_end_matches('/'),
            endpoint.trim_start_matches('/')
        )
    }

    /// Issue one GET against `endpoint` and classify the response.
    ///
    /// Single attempt: no retry, no backoff, no timeout beyond the HTTP
    /// client's defaults. Fails before any I/O when no API key is
    /// configured.
    ///
    /// Classification:
    /// - 200 → parsed JSON body
    /// - 400 → [`ClientError::BadRequest`] carrying the parsed body
    /// - 403 → [`ClientError::Forbidden`] carrying the parsed body
    /// - anything else → [`ClientError::ApiError`] carrying the raw text
    /// - transport failure → [`ClientError::HttpError`]
    pub async fn get(&self, endpoint: &str, query: &QueryPairs) -> ClientResult<Value> {
        let api_key = self.require_api_key()?;

        let url = self.build_url(endpoint);
        tracing::debug!(%url, params = query.len(), "dispatching GET");

        let mut request = self
            .http
            .get(&url)
            .bearer_auth(api_key.expose_secret())
            .header(ACCEPT, "application/json");
        if !query.is_empty() {
            request = request.query(query.as_slice());
        }

        let response = request.send().await?;
        let status = response.status();
        match status {
            StatusCode::OK => Ok(response.json().await?),
            StatusCode::BAD_REQUEST => Err(ClientError::BadRequest {
                details: response.json().await?,
            }),
            StatusCode::FORBIDDEN => Err(ClientError::Forbidden {
                details: response.json().await?,
            }),
            _ => {
                let body = response.text().await.unwrap_or_default();
                Err(ClientError::api_error(status.as_u16(), body))
            }
        }
    }

    /// `GET /v2/lists` — metadata on all lists.
    pub async fn get_lists(&self, query: ListQuery) -> ClientResult<Value> {
        self.require_api_key()?;
        self.get("/v2/lists", &query.into_pairs()?).await
    }

    /// `GET /v2/companies` — companies with optional id/field filters.
    pub async fn get_companies(&self, query: EntityQuery) -> ClientResult<Value> {
        self.require_api_key()?;
        self.get("/v2/companies", &query.into_pairs()?).await
    }

    /// `GET /v2/companies/fields` — field metadata on companies.
    pub async fn get_company_fields(&self, query: ListQuery) -> ClientResult<Value> {
        self.require_api_key()?;
        self.get("/v2/companies/fields", &query.into_pairs()?).await
    }

    /// `GET /v2/persons` — persons with optional id/field filters.
    pub async fn get_persons(&self, query: EntityQuery) -> ClientResult<Value> {
        self.require_api_key()?;
        self.get("/v2/persons", &query.into_pairs()?).await
    }

    /// `GET /v2/persons/fields` — field metadata on persons.
    pub async fn get_person_fields(&self, query: ListQuery) -> ClientResult<Value> {
        self.require_api_key()?;
        self.get("/v2/persons/fields", &query.into_pairs()?).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_url_joins_cleanly() {
        let client = AffinityApiClient::new(AffinityApiConfig::without_key(
            "https://api.affinity.co/",
        ));
        assert_eq!(
            client.build_url("/v2/lists"),
            "https://api.affinity.co/v2/lists"
        );
        assert_eq!(
            client.build_url("v2/lists"),
            "https://api.affinity.co/v2/lists"
        );
    }

    #[tokio::test]
    async fn test_missing_api_key_short_circuits() {
        // Unroutable port: reaching the network would surface HttpError,
        // so MissingApiKey proves no I/O was attempted.
        let client = AffinityApiClient::new(AffinityApiConfig::without_key("http://127.0.0.1:1"));
        let err = client.get_lists(ListQuery::default()).await.unwrap_err();
        assert!(matches!(err, ClientError::MissingApiKey));
    }

    #[tokio::test]
    async fn test_invalid_limit_short_circuits_before_network() {
        let client =
            AffinityApiClient::new(AffinityApiConfig::with_key("http://127.0.0.1:1", "key"));
        let err = client
            .get_persons(EntityQuery {
                limit: Some(101),
                ..EntityQuery::default()
            })
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "Limit must be between 1 and 100");
    }

    #[tokio::test]
    async fn test_invalid_field_type_short_circuits_before_network() {
        let client =
            AffinityApiClient::new(AffinityApiConfig::with_key("http://127.0.0.1:1", "key"));
        let err = client
            .get_companies(EntityQuery {
                field_types: vec!["bogus".to_string()],
                ..EntityQuery::default()
            })
            .await
            .unwrap_err();
        assert!(err.to_string().starts_with("Invalid field_type: bogus."));
    }
}
