//! Technology product tools.

use super::common::{filtered_list_tool, get_tool, relation_tool};
use crate::api::EntityKind;
use crate::domains::tools::definition::{ToolContext, ToolDefinition};
use crate::domains::tools::error::RegistryError;
use crate::domains::tools::registry::ToolModule;

pub const MODULE: ToolModule = ToolModule {
    name: "products",
    load,
};

fn load(ctx: &ToolContext) -> Result<Vec<ToolDefinition>, RegistryError> {
    let kind = EntityKind::Products;
    Ok(vec![
        get_tool(
            "get_product",
            "Get a technology product by UUID or name. Use for product details, linked advisories and vulnerability scope.",
            ctx,
            kind,
        ),
        filtered_list_tool(
            "list_products",
            "List or search technology products with optional filters and pagination. Use for product catalogs, vendor mapping and affected software.",
            ctx,
            kind,
        ),
        relation_tool(
            "get_product_advisories",
            "Get security advisories for a technology product. Use for vendor advisories and patching guidance.",
            ctx,
            kind,
            "advisories",
        ),
    ])
}
