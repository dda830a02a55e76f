//! Client configuration.
//!
//! Configuration is read from the environment once, at construction, and
//! injected into [`AffinityApiClient`](crate::AffinityApiClient). Nothing in
//! the client consults the environment afterwards.

use std::env;

use secrecy::SecretString;

/// Default Affinity API host.
pub const DEFAULT_BASE_URL: &str = "https://api.affinity.co";

/// Environment variable holding the bearer credential.
pub const API_KEY_ENV: &str = "AFFINITY_API_KEY";

/// Environment variable overriding the upstream host (tests, proxies).
pub const BASE_URL_ENV: &str = "AFFINITY_BASE_URL";

/// Configuration for [`AffinityApiClient`](crate::AffinityApiClient).
///
/// A missing API key is NOT a construction error: calls made without one
/// fail with a structured [`ClientError::MissingApiKey`](crate::ClientError)
/// instead, so a server can start without credentials and report the
/// problem per call.
#[derive(Debug, Clone)]
pub struct AffinityApiConfig {
    /// Upstream base URL; joined with endpoint paths, trailing slash
    /// insensitive.
    pub base_url: String,
    /// Bearer credential; `None` when the environment does not provide one.
    pub api_key: Option<SecretString>,
}

impl AffinityApiConfig {
    /// Read configuration from the process environment.
    ///
    /// An empty `AFFINITY_API_KEY` counts as absent.
    #[must_use]
    pub fn from_env() -> Self {
        let base_url =
            env::var(BASE_URL_ENV).unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        let api_key = env::var(API_KEY_ENV)
            .ok()
            .filter(|key| !key.is_empty())
            .map(SecretString::from);
        Self { base_url, api_key }
    }

    /// Config pointing at `base_url` with an explicit credential.
    #[must_use]
    pub fn with_key(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            api_key: Some(SecretString::from(api_key.into())),
        }
    }

    /// Config with no credential configured.
    #[must_use]
    pub fn without_key(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            api_key: None,
        }
    }
}
