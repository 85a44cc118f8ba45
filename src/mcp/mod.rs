//! Model Context Protocol (MCP) front end for the component catalog.
//!
//! The server speaks JSON-RPC 2.0 over newline-delimited stdio and maps each
//! tool call onto one catalog query.
//!
//! ```text
//! ┌─────────────┐    ┌─────────────┐    ┌─────────────┐
//! │  Transport  │───▶│   Server    │───▶│   Catalog   │
//! │   (stdio)   │    │ (lifecycle, │    │  (queries)  │
//! │             │◀───│   tools)    │◀───│             │
//! └─────────────┘    └─────────────┘    └─────────────┘
//! ```
//!
//! # Protocol Version
//!
//! This implementation targets MCP protocol version 2024-11-05.

pub mod protocol;
pub mod server;
pub mod transport;

pub use protocol::{JsonRpcError, JsonRpcRequest, JsonRpcResponse, MCP_PROTOCOL_VERSION};
pub use server::McpServer;
pub use transport::{LineTransport, StdioTransport};
