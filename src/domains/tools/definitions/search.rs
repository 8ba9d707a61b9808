//! Cross-entity search.

use schemars::JsonSchema;
use serde::Deserialize;

use crate::api::QueryParams;
use crate::domains::tools::definition::{ToolContext, ToolDefinition};
use crate::domains::tools::error::RegistryError;
use crate::domains::tools::registry::ToolModule;

pub const MODULE: ToolModule = ToolModule {
    name: "search",
    load,
};

/// Parameters for the search tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct SearchParams {
    /// Search query string.
    pub q: String,

    /// Additional API query parameters (e.g. limit, offset), forwarded verbatim.
    #[serde(flatten)]
    pub extra: QueryParams,
}

fn load(ctx: &ToolContext) -> Result<Vec<ToolDefinition>, RegistryError> {
    Ok(vec![ToolDefinition::new(
        "search",
        "Search across all entity types (vulnerabilities, threat actors, malware, etc.). Use for open-ended intel lookup and finding entities by keyword or name.",
        ctx,
        |api, p: SearchParams| async move { api.search(&p.q, &p.extra).await },
    )])
}
