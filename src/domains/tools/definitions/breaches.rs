//! Breach intelligence tools.

use super::common::{get_tool, relation_tool, sorted_list_tool};
use crate::api::EntityKind;
use crate::domains::tools::definition::{ToolContext, ToolDefinition};
use crate::domains::tools::error::RegistryError;
use crate::domains::tools::registry::ToolModule;

pub const MODULE: ToolModule = ToolModule {
    name: "breaches",
    load,
};

fn load(ctx: &ToolContext) -> Result<Vec<ToolDefinition>, RegistryError> {
    let kind = EntityKind::Breaches;
    Ok(vec![
        get_tool(
            "get_breach",
            "Get a breach by UUID or identifier. Use for breach details, affected organizations and timeline.",
            ctx,
            kind,
        ),
        sorted_list_tool(
            "list_breaches",
            "List breaches with pagination and sorting. Use for breach catalogs and recent incidents.",
            ctx,
            kind,
        ),
        relation_tool(
            "get_breach_organizations",
            "Get organizations associated with a breach. Use for affected entities and the scope of a breach.",
            ctx,
            kind,
            "organizations",
        ),
    ])
}
