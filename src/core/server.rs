//! MCP Server implementation and lifecycle management.
//!
//! Startup builds the upstream client, discovers every tool module into a
//! frozen [`ToolRegistry`], and derives the rmcp `ToolRouter` from it.
//! After that, the server only reads shared state; clones are cheap and
//! each transport connection gets its own.

use rmcp::{
    ErrorData as McpError, ServerHandler, handler::server::tool::ToolRouter, model::*,
    tool_handler,
};
use std::sync::Arc;
use tracing::info;

use super::config::Config;
use super::error::{self, Error};
use crate::api::{IntelligenceApi, MalloryClient};
use crate::domains::tools::{ToolContext, ToolRegistry, build_tool_router, router};

/// The main MCP server handler.
#[derive(Clone)]
pub struct McpServer {
    /// Server configuration.
    config: Arc<Config>,

    /// Frozen set of tools.
    registry: Arc<ToolRegistry>,

    /// Tool router for handling tool calls.
    tool_router: ToolRouter<Self>,
}

impl McpServer {
    /// Create a new MCP server backed by the Mallory HTTP client.
    pub fn new(config: Config) -> error::Result<Self> {
        let client = MalloryClient::new(&config.api).map_err(|e| Error::client(e.to_string()))?;
        info!("Using Mallory API at {}", client.base_url());
        Self::with_client(config, Arc::new(client))
    }

    /// Create a server on top of any upstream client implementation.
    ///
    /// Fails if tool discovery is incomplete.
    pub fn with_client(
        config: Config,
        client: Arc<dyn IntelligenceApi>,
    ) -> error::Result<Self> {
        let registry = Arc::new(ToolRegistry::discover(ToolContext::new(client))?);

        Ok(Self {
            tool_router: build_tool_router::<Self>(registry.clone()),
            config: Arc::new(config),
            registry,
        })
    }

    /// Get the server name.
    pub fn name(&self) -> &str {
        &self.config.server.name
    }

    /// Get the server version.
    pub fn version(&self) -> &str {
        &self.config.server.version
    }

    /// Get the server configuration.
    pub fn config(&self) -> &Arc<Config> {
        &self.config
    }

    /// The registered tools.
    pub fn registry(&self) -> &Arc<ToolRegistry> {
        &self.registry
    }

    /// List all available tools.
    pub fn list_tools(&self) -> Vec<Tool> {
        self.registry.get_all_tools()
    }

    /// Call a tool by name, outside of an rmcp session.
    ///
    /// Used by the HTTP transport. An unknown name is a protocol error; a
    /// failed upstream call is an error result, as over stdio.
    pub async fn call_tool(
        &self,
        name: &str,
        arguments: JsonObject,
    ) -> Result<CallToolResult, McpError> {
        info!("Calling tool: {}", name);
        match self.registry.call_tool(name, arguments).await {
            Some(result) => router::to_call_result(name, result),
            None => Err(McpError::invalid_params(
                format!("Unknown tool: {}", name),
                None,
            )),
        }
    }
}

/// ServerHandler implementation with tool_handler macro for automatic tool routing.
#[tool_handler]
impl ServerHandler for McpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(
                "Threat intelligence from Mallory: vulnerabilities, threat actors, \
                 attack patterns, organizations, breaches, products, advisories, \
                 stories, sources, mentions and cross-entity search. Failed calls \
                 return {error, status_code, type}."
                    .to_string(),
            ),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: self.config.server.name.clone(),
                version: self.config.server.version.clone(),
                ..Default::default()
            },
            ..Default::default()
        }
    }
}
