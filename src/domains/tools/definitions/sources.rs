//! Intelligence source metadata.

use schemars::JsonSchema;
use serde::Deserialize;

use crate::api::{EntityKind, ListQuery};
use crate::domains::tools::definition::{ToolContext, ToolDefinition};
use crate::domains::tools::error::RegistryError;
use crate::domains::tools::registry::ToolModule;

pub const MODULE: ToolModule = ToolModule {
    name: "sources",
    load,
};

fn default_source_limit() -> u64 {
    50
}

/// Pagination for the source catalog, which uses a larger default page.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct SourceListParams {
    /// Pagination offset.
    #[serde(default)]
    pub offset: u64,

    /// Maximum number of items per page.
    #[serde(default = "default_source_limit")]
    #[schemars(range(min = 1))]
    pub limit: u64,
}

fn load(ctx: &ToolContext) -> Result<Vec<ToolDefinition>, RegistryError> {
    Ok(vec![ToolDefinition::new(
        "list_sources",
        "List intelligence sources (feeds, blogs, etc.) in the platform. Use for discovering available sources and source metadata.",
        ctx,
        |api, p: SourceListParams| async move {
            api.list(EntityKind::Sources, &ListQuery::page(p.offset, p.limit))
                .await
        },
    )])
}
