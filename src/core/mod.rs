//! Core module containing shared infrastructure components.
//!
//! Configuration, startup errors, the MCP server handler and the transports
//! it can be served on.

pub mod config;
pub mod error;
pub mod server;
pub mod transport;

pub use config::{ApiConfig, Config};
pub use error::{Error, Result};
pub use server::McpServer;
pub use transport::{TransportConfig, TransportError, TransportService};
