//! Threat actor intelligence tools.

use super::common::{
    filtered_list_tool, get_tool, relation_tool, sorted_feed_tool, trending_tool,
};
use crate::api::EntityKind;
use crate::domains::tools::definition::{ToolContext, ToolDefinition};
use crate::domains::tools::error::RegistryError;
use crate::domains::tools::registry::ToolModule;

pub const MODULE: ToolModule = ToolModule {
    name: "threat_actors",
    load,
};

fn load(ctx: &ToolContext) -> Result<Vec<ToolDefinition>, RegistryError> {
    let kind = EntityKind::ThreatActors;
    Ok(vec![
        get_tool(
            "get_threat_actor",
            "Get a threat actor by UUID or name (e.g. dark_cloud_shield). Use for TTPs, attribution, sophistication and target sectors or regions.",
            ctx,
            kind,
        ),
        filtered_list_tool(
            "list_threat_actors",
            "List or search threat actors with optional filters (e.g. name:, uuid:) and pagination. Use for discovering actors, building briefings and comparing actors.",
            ctx,
            kind,
        ),
        trending_tool(
            "list_trending_threat_actors",
            "List threat actors trending over a time period (1d, 7d or 30d). Use for active threats and current reporting focus.",
            ctx,
            kind,
        ),
        // Served by the mentions collection, with sorting.
        sorted_feed_tool(
            "list_mentioned_threat_actors",
            "List recent threat actor mentions from intelligence sources. Use for emerging threats, latest reporting and situational awareness.",
            ctx,
            EntityKind::Mentions,
            "actors",
        ),
        relation_tool(
            "get_threat_actor_attack_patterns",
            "Get MITRE ATT&CK patterns associated with a threat actor. Use for TTP mapping, detection engineering and adversary emulation.",
            ctx,
            kind,
            "attack-patterns",
        ),
    ])
}
