//! ui-catalog-mcp: MCP server for React Native UI component documentation
//!
//! This library holds the documentation catalog for a React Native component
//! library (form inputs, layout, tables, feedback, navigation) and exposes it
//! to AI assistants over the Model Context Protocol.
//!
//! # Architecture
//!
//! - **Catalog**: an immutable, ordered set of component records built once at
//!   startup, answering lookup by id, listing by category and text search
//! - **MCP server**: JSON-RPC over stdio translating tool calls into catalog
//!   queries
//!
//! # Modules
//!
//! - [`catalog`] — Component records, categories and queries
//! - [`config`] — Configuration loading and validation
//! - [`error`] — Error types
//! - [`mcp`] — MCP protocol implementation

pub mod catalog;
pub mod config;
pub mod error;
pub mod mcp;
