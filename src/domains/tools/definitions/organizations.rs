//! Organization (breach target) tools.

use super::common::{filtered_list_tool, get_tool, relation_tool, trending_tool};
use crate::api::EntityKind;
use crate::domains::tools::definition::{ToolContext, ToolDefinition};
use crate::domains::tools::error::RegistryError;
use crate::domains::tools::registry::ToolModule;

pub const MODULE: ToolModule = ToolModule {
    name: "organizations",
    load,
};

fn load(ctx: &ToolContext) -> Result<Vec<ToolDefinition>, RegistryError> {
    let kind = EntityKind::Organizations;
    Ok(vec![
        get_tool(
            "get_organization",
            "Get an organization by UUID or name. Use for breach targets, company intel, linked breaches and products.",
            ctx,
            kind,
        ),
        filtered_list_tool(
            "list_organizations",
            "List or search organizations with optional filters (e.g. name:, uuid:) and pagination. Use for discovering breached or tracked organizations.",
            ctx,
            kind,
        ),
        trending_tool(
            "list_trending_organizations",
            "List organizations trending over a time period (1d, 7d or 30d). Use for recent breach or reporting focus.",
            ctx,
            kind,
        ),
        relation_tool(
            "get_organization_breaches",
            "Get breaches associated with an organization. Use for breach history and incident timelines.",
            ctx,
            kind,
            "breaches",
        ),
    ])
}
