//! Mallory MCP Server
//!
//! Exposes the Mallory threat-intelligence API to MCP clients as a fixed
//! catalogue of tools. Each tool wraps one upstream operation, normalizes
//! paginated results into a single envelope and reports failures as a
//! structured `{error, status_code, type}` payload.
//!
//! # Architecture
//!
//! - **api**: the upstream client seam (`IntelligenceApi`) and its HTTP
//!   implementation
//! - **core**: configuration, startup errors, the server handler and transports
//! - **domains::tools**: tool definitions, registry, error classification and
//!   pagination envelope
//!
//! # Example
//!
//! ```rust,no_run
//! use mallory_mcp_server::{Config, McpServer};
//! use mallory_mcp_server::core::TransportService;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env();
//!     let server = McpServer::new(config.clone())?;
//!     TransportService::new(config.transport).run(server).await?;
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod core;
pub mod domains;

pub use core::{Config, Error, McpServer, Result};
