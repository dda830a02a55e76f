//! # Affinity API Client
//!
//! Read-only client for the Affinity CRM v2 API: lists, companies, persons,
//! and their field metadata.
//!
//! The client is deliberately thin. Each call validates its inputs, issues
//! exactly one outbound GET, and classifies the response into a JSON body or
//! a [`ClientError`]. There is no retry, no caching, and no pagination
//! traversal — `cursor` tokens are handed back to the caller untouched.

pub mod client;
pub mod config;
pub mod error;
pub mod query;

pub use client::AffinityApiClient;
pub use config::AffinityApiConfig;
pub use error::{ClientError, ClientResult};
pub use query::{EntityQuery, ListQuery, QueryPairs};
