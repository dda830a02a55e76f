//! Affinity MCP Server library.
//!
//! Provides the [`AffinityMcpServer`] MCP server handler and tool parameter
//! types. Used by the `affinity-mcp` binary and available for integration
//! testing.

pub mod server;
pub mod tools;

pub use server::AffinityMcpServer;
