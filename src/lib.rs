//! MCP server that resolves named specification documents.
//!
//! Exposes `list_specs` and `fetch_spec` tools over JSON-RPC 2.0 stdio
//! transport. Documents are looked up through an `index.yml` and served
//! from a local docs directory, falling back to a public repository when
//! the local copy is missing or unreadable.

pub mod config;
pub mod handlers;
pub mod protocol;
pub mod remote;
pub mod resolver;
pub mod server;
pub mod service;

pub mod schema;
