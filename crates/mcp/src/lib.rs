//! Shared MCP plumbing for the promptdeck tool servers.
//!
//! Each server binary builds a [`tools::ToolRegistry`], hands it to a
//! [`server::McpServer`] and serves JSON-RPC over stdio.

pub mod protocol;
pub mod server;
pub mod tools;

pub use protocol::{CallToolResult, ServerInfo, ToolDefinition};
pub use server::McpServer;
pub use tools::{DispatchError, Tool, ToolRegistry};
