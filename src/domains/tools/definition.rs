//! Tool definitions and the invocation wrapper bound into each of them.
//!
//! A tool is declared as data: a name, a description, a typed parameter
//! struct and a bound upstream call. [`ToolDefinition::new`] composes the
//! call with argument parsing, [`handle_api_errors`] and the pagination
//! envelope once, at registration time.

use std::fmt;
use std::future::Future;
use std::sync::Arc;

use futures::FutureExt;
use futures::future::BoxFuture;
use rmcp::{
    handler::server::tool::schema_for_type,
    model::{JsonObject, Tool},
};
use schemars::JsonSchema;
use serde::de::DeserializeOwned;
use serde_json::Value;

use super::envelope;
use super::error::ToolError;
use super::handlers::handle_api_errors;
use crate::api::{IntelligenceApi, Page};

/// Shared handle passed to every tool binding.
#[derive(Clone)]
pub struct ToolContext {
    client: Arc<dyn IntelligenceApi>,
}

impl ToolContext {
    pub fn new(client: Arc<dyn IntelligenceApi>) -> Self {
        Self { client }
    }

    /// The upstream client shared by all tools.
    pub fn client(&self) -> Arc<dyn IntelligenceApi> {
        self.client.clone()
    }
}

/// Result of a single tool call.
pub type ToolResult = Result<Value, ToolError>;

type Invoke = dyn Fn(JsonObject) -> BoxFuture<'static, ToolResult> + Send + Sync;

/// Converts an upstream success value into the payload sent to callers.
///
/// Pages go through the pagination envelope; records pass through as-is.
pub trait IntoPayload {
    fn into_payload(self) -> ToolResult;
}

impl IntoPayload for Value {
    fn into_payload(self) -> ToolResult {
        Ok(self)
    }
}

impl IntoPayload for Page {
    fn into_payload(self) -> ToolResult {
        serde_json::to_value(envelope::normalize(self))
            .map_err(|e| ToolError::general(e.to_string()))
    }
}

/// A registered tool.
#[derive(Clone)]
pub struct ToolDefinition {
    name: &'static str,
    description: &'static str,
    input_schema: Arc<JsonObject>,
    invoke: Arc<Invoke>,
}

impl ToolDefinition {
    /// Bind `call` to a tool named `name`.
    ///
    /// Arguments are deserialized into `P` (serde defaults fill in missing
    /// optional parameters). A malformed argument object is reported like
    /// any other unrecognized failure.
    pub fn new<P, T, F, Fut>(
        name: &'static str,
        description: &'static str,
        ctx: &ToolContext,
        call: F,
    ) -> Self
    where
        P: DeserializeOwned + JsonSchema + Send + 'static,
        T: IntoPayload + Send + 'static,
        F: Fn(Arc<dyn IntelligenceApi>, P) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = anyhow::Result<T>> + Send + 'static,
    {
        let client = ctx.client();
        let call = Arc::new(call);

        let invoke = move |arguments: JsonObject| {
            let client = client.clone();
            let call = call.clone();
            async move {
                let output = handle_api_errors(async move {
                    let params: P = serde_json::from_value(Value::Object(arguments))?;
                    call(client, params).await
                })
                .await?;
                output.into_payload()
            }
            .boxed()
        };

        Self {
            name,
            description,
            input_schema: Arc::new(schema_for_type::<P>()),
            invoke: Arc::new(invoke),
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn description(&self) -> &'static str {
        self.description
    }

    /// JSON Schema of the accepted arguments.
    pub fn input_schema(&self) -> Arc<JsonObject> {
        self.input_schema.clone()
    }

    /// Run the tool. Never fails outside of the returned [`ToolError`].
    pub fn call(&self, arguments: JsonObject) -> BoxFuture<'static, ToolResult> {
        (self.invoke)(arguments)
    }

    /// Tool metadata as advertised over MCP.
    pub fn to_tool(&self) -> Tool {
        Tool {
            name: self.name.into(),
            description: Some(self.description.into()),
            input_schema: self.input_schema.clone(),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: None,
        }
    }
}

impl fmt::Debug for ToolDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ToolDefinition")
            .field("name", &self.name)
            .field("description", &self.description)
            .finish_non_exhaustive()
    }
}
