//! Intelligence story tools.

use super::common::{NoParams, filtered_list_tool, get_tool};
use crate::api::EntityKind;
use crate::domains::tools::definition::{ToolContext, ToolDefinition};
use crate::domains::tools::error::RegistryError;
use crate::domains::tools::registry::ToolModule;

pub const MODULE: ToolModule = ToolModule {
    name: "stories",
    load,
};

fn load(ctx: &ToolContext) -> Result<Vec<ToolDefinition>, RegistryError> {
    let kind = EntityKind::Stories;
    Ok(vec![
        get_tool(
            "get_story",
            "Get an intelligence story by UUID or identifier. Use for full story content, references, entities and related events.",
            ctx,
            kind,
        ),
        filtered_list_tool(
            "list_stories",
            "List or search intelligence stories with optional filters and pagination. Use for recent intel and topic-based discovery.",
            ctx,
            kind,
        ),
        ToolDefinition::new(
            "list_story_topics",
            "List available story topics for filtering. Use for discovering the topic taxonomy.",
            ctx,
            |api, _: NoParams| async move { api.topics().await },
        ),
    ])
}
