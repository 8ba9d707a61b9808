//! Transport layer for the MCP server.
//!
//! - **STDIO** (feature `stdio`, default): the client spawns the server.
//! - **TCP** (feature `tcp`): line-delimited JSON-RPC, one session per
//!   connection.
//! - **HTTP** (feature `http`): stateless JSON-RPC over POST plus `/health`.
//!
//! Every transport serves the same frozen tool registry.

mod config;
mod error;
mod service;

#[cfg(feature = "http")]
pub mod http;

#[cfg(feature = "tcp")]
pub mod tcp;

#[cfg(feature = "stdio")]
pub mod stdio;

pub use config::TransportConfig;
pub use error::{TransportError, TransportResult};
pub use service::TransportService;

#[cfg(any(feature = "tcp", feature = "http"))]
pub use config::ListenConfig;

#[cfg(feature = "http")]
pub use config::HttpConfig;
