//! Entity mentions reported by intelligence sources.

use super::common::{feed_tool, page_list_tool};
use crate::api::EntityKind;
use crate::domains::tools::definition::{ToolContext, ToolDefinition};
use crate::domains::tools::error::RegistryError;
use crate::domains::tools::registry::ToolModule;

pub const MODULE: ToolModule = ToolModule {
    name: "mentions",
    load,
};

fn load(ctx: &ToolContext) -> Result<Vec<ToolDefinition>, RegistryError> {
    let kind = EntityKind::Mentions;
    Ok(vec![
        page_list_tool(
            "list_mentions",
            "List recent mentions across entity types. Use for the latest intel coverage and cross-entity activity.",
            ctx,
            kind,
        ),
        feed_tool(
            "list_mentions_actors",
            "List recent threat actor mentions from intelligence sources. Use for emerging threats and the latest actor reporting.",
            ctx,
            kind,
            "actors",
        ),
        feed_tool(
            "list_mentions_vulnerabilities",
            "List recent vulnerability mentions from intelligence sources. Use for CVE discussion in intel and trending CVEs in reporting.",
            ctx,
            kind,
            "vulnerabilities",
        ),
    ])
}
