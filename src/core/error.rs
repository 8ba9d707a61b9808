//! Error types and handling for the MCP server.
//!
//! Startup failures (incomplete tool discovery, client construction) are
//! reported through [`Error`] and abort initialization.
//! Failures during a tool call never reach this type; they are turned into
//! a [`ToolError`](crate::domains::tools::ToolError) payload instead.

use thiserror::Error;

/// A specialized Result type for MCP server operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Unified error type for the MCP server.
#[derive(Debug, Error)]
pub enum Error {
    /// Tool discovery or registration failed.
    #[error("Registry error: {0}")]
    Registry(#[from] crate::domains::tools::RegistryError),

    /// The upstream API client could not be built.
    #[error("Client error: {0}")]
    Client(String),
}

impl Error {
    /// Create a new client construction error.
    pub fn client(msg: impl Into<String>) -> Self {
        Self::Client(msg.into())
    }
}
