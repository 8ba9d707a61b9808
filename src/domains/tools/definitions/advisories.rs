//! Technology product advisory tools.

use super::common::{get_tool, relation_tool, sorted_list_tool};
use crate::api::EntityKind;
use crate::domains::tools::definition::{ToolContext, ToolDefinition};
use crate::domains::tools::error::RegistryError;
use crate::domains::tools::registry::ToolModule;

pub const MODULE: ToolModule = ToolModule {
    name: "advisories",
    load,
};

fn load(ctx: &ToolContext) -> Result<Vec<ToolDefinition>, RegistryError> {
    let kind = EntityKind::Advisories;
    Ok(vec![
        get_tool(
            "get_advisory",
            "Get a technology product advisory by UUID or identifier. Use for vendor advisory details, patching guidance and linked CVEs.",
            ctx,
            kind,
        ),
        sorted_list_tool(
            "list_advisories",
            "List technology product advisories with pagination and sorting. Use for advisory catalogs and recent vendor bulletins. Returns items, total, offset, limit and has_more.",
            ctx,
            kind,
        ),
        relation_tool(
            "get_advisory_vulnerabilities",
            "Get vulnerabilities associated with an advisory. Use for the CVE coverage of a vendor advisory.",
            ctx,
            kind,
            "vulnerabilities",
        ),
    ])
}
