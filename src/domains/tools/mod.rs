//! Tools domain module.
//!
//! Every tool wraps exactly one upstream API operation. The domain provides
//! the machinery shared by all of them:
//!
//! ## Architecture
//!
//! - `definitions/` - Tool declarations, one module per entity area
//! - `definition.rs` - `ToolDefinition` and the invocation wrapper
//! - `handlers.rs` - Error classification (`handle_api_errors`)
//! - `envelope.rs` - Pagination envelope
//! - `registry.rs` - Discovery, registration and lookup
//! - `router.rs` - rmcp ToolRouter built from the registry
//! - `error.rs` - `ToolError` and `RegistryError`

pub mod definition;
pub mod definitions;
pub mod envelope;
mod error;
mod handlers;
mod registry;
pub mod router;

#[cfg(test)]
pub(crate) mod testing;

pub use definition::{IntoPayload, ToolContext, ToolDefinition, ToolResult};
pub use envelope::{PageEnvelope, normalize};
pub use error::{ErrorCategory, RegistryError, ToolError};
pub use handlers::{classify, handle_api_errors};
pub use registry::{LoadFn, RegistryBuilder, ToolModule, ToolRegistry};
pub use router::build_tool_router;
