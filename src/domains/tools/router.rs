//! Tool Router - builds the rmcp ToolRouter from the frozen registry.
//!
//! Each registered definition becomes one dynamic route. Successful calls
//! return the JSON payload as text content; a [`ToolError`] is returned as
//! an error result carrying `{error, status_code, type}`.

use std::sync::Arc;

use futures::FutureExt;
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute, ToolRouter},
    model::{CallToolResult, Content},
};
use tracing::{info, warn};

use super::definition::{ToolDefinition, ToolResult};
use super::registry::ToolRegistry;

/// Build the tool router with all registered tools.
pub fn build_tool_router<S>(registry: Arc<ToolRegistry>) -> ToolRouter<S>
where
    S: Send + Sync + 'static,
{
    registry
        .definitions()
        .cloned()
        .fold(ToolRouter::new(), |router, definition| {
            router.with_route(create_route(definition))
        })
}

/// Create the dynamic route for one definition.
fn create_route<S>(definition: ToolDefinition) -> ToolRoute<S>
where
    S: Send + Sync + 'static,
{
    ToolRoute::new_dyn(definition.to_tool(), move |ctx: ToolCallContext<'_, S>| {
        let args = ctx.arguments.clone().unwrap_or_default();
        let definition = definition.clone();
        async move {
            info!("Calling tool: {}", definition.name());
            let result = definition.call(args).await;
            to_call_result(definition.name(), result)
        }
        .boxed()
    })
}

/// Convert a tool outcome into the MCP result shape.
pub fn to_call_result(name: &str, result: ToolResult) -> Result<CallToolResult, McpError> {
    match result {
        Ok(payload) => Ok(CallToolResult::success(vec![Content::json(payload)?])),
        Err(err) => {
            warn!("Tool {} failed: {}", name, err);
            Ok(CallToolResult::error(vec![Content::json(err.to_json())?]))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::tools::testing::FakeApi;
    use crate::domains::tools::{ErrorCategory, ToolError};
    use rmcp::model::RawContent;
    use serde_json::json;

    struct TestServer {}

    fn text_of(result: &CallToolResult) -> serde_json::Value {
        match &result.content[0].raw {
            RawContent::Text(text) => serde_json::from_str(&text.text).unwrap(),
            other => panic!("unexpected content: {:?}", other),
        }
    }

    #[test]
    fn test_build_router() {
        let registry = Arc::new(ToolRegistry::discover(FakeApi::new().context()).unwrap());
        let router: ToolRouter<TestServer> = build_tool_router(registry.clone());
        let tools = router.list_all();
        assert_eq!(tools.len(), 37);

        let names: Vec<_> = tools.iter().map(|t| t.name.as_ref()).collect();
        assert!(names.contains(&"get_advisory"));
        assert!(names.contains(&"list_mentions_vulnerabilities"));
        assert!(names.contains(&"get_organization_breaches"));
    }

    #[test]
    fn test_registry_matches_router() {
        let registry = Arc::new(ToolRegistry::discover(FakeApi::new().context()).unwrap());
        let router: ToolRouter<TestServer> = build_tool_router(registry.clone());
        let router_tools = router.list_all();
        let router_names: Vec<_> = router_tools.iter().map(|t| t.name.as_ref()).collect();

        assert_eq!(registry.len(), router_names.len());
        for name in registry.tool_names() {
            assert!(router_names.contains(&name));
        }
    }

    #[test]
    fn test_success_result() {
        let result = to_call_result("t", Ok(json!({"id": 1}))).unwrap();
        assert_eq!(result.is_error, Some(false));
        assert_eq!(text_of(&result), json!({"id": 1}));
    }

    #[test]
    fn test_error_result_carries_tool_error() {
        let err = ToolError::new(ErrorCategory::NotFound, "no such id", Some(404));
        let result = to_call_result("t", Err(err)).unwrap();
        assert_eq!(result.is_error, Some(true));
        assert_eq!(
            text_of(&result),
            json!({"error": "no such id", "status_code": 404, "type": "not_found"})
        );
    }
}
