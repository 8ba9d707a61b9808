//! MITRE ATT&CK technique tools.

use super::common::{filtered_list_tool, get_tool, relation_tool};
use crate::api::EntityKind;
use crate::domains::tools::definition::{ToolContext, ToolDefinition};
use crate::domains::tools::error::RegistryError;
use crate::domains::tools::registry::ToolModule;

pub const MODULE: ToolModule = ToolModule {
    name: "attack_patterns",
    load,
};

fn load(ctx: &ToolContext) -> Result<Vec<ToolDefinition>, RegistryError> {
    let kind = EntityKind::AttackPatterns;
    Ok(vec![
        get_tool(
            "get_attack_pattern",
            "Get an attack pattern (MITRE ATT&CK technique) by UUID or technique ID. Use for TTP details, detection guidance, related actors and malware.",
            ctx,
            kind,
        ),
        filtered_list_tool(
            "list_attack_patterns",
            "List or search attack patterns with optional filters and pagination. Use for browsing techniques, mapping TTPs and detection coverage.",
            ctx,
            kind,
        ),
        relation_tool(
            "get_attack_pattern_threat_actors",
            "Get threat actors associated with an attack pattern. Use for attribution and actor TTP mapping.",
            ctx,
            kind,
            "threat-actors",
        ),
        relation_tool(
            "get_attack_pattern_malware",
            "Get malware associated with an attack pattern. Use for malware TTP mapping and detection engineering.",
            ctx,
            kind,
            "malware",
        ),
    ])
}
