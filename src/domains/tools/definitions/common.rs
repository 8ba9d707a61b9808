//! Parameter types and binders shared by the tool modules.
//!
//! Every tool in the catalogue is one of a handful of shapes (fetch by
//! identifier, filtered list, trending list, relation, ...). The binders
//! below turn a shape plus an entity kind into a [`ToolDefinition`], so a
//! tool module is nothing but a list of declarations.

use schemars::JsonSchema;
use serde::Deserialize;

use crate::api::{EntityKind, ListQuery, PageQuery, SortOrder, TrendingPeriod};
use crate::domains::tools::definition::{ToolContext, ToolDefinition};

/// Default page size for list tools.
pub fn default_limit() -> u64 {
    10
}

pub fn default_sort() -> String {
    "created_at".to_string()
}

/// Empty filters mean "no filter".
pub fn non_empty(filter: &str) -> Option<String> {
    if filter.is_empty() {
        None
    } else {
        Some(filter.to_string())
    }
}

// ============================================================================
// Parameter shapes
// ============================================================================

/// Lookup of a single entity.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct IdentifierParams {
    /// Entity UUID, name or external identifier (e.g. a CVE ID).
    pub identifier: String,
}

/// Filtered, sorted and paginated list.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct FilteredListParams {
    /// Optional filter expression (e.g. `name:`, `uuid:`, `cve:`). Empty means no filter.
    #[serde(default)]
    pub filter: String,

    /// Pagination offset.
    #[serde(default)]
    pub offset: u64,

    /// Maximum number of items per page.
    #[serde(default = "default_limit")]
    #[schemars(range(min = 1))]
    pub limit: u64,

    /// Field to sort by.
    #[serde(default = "default_sort")]
    pub sort: String,

    /// Sort direction.
    #[serde(default)]
    pub order: SortOrder,
}

impl FilteredListParams {
    pub fn to_query(&self) -> ListQuery {
        ListQuery::page(self.offset, self.limit)
            .with_filter(non_empty(&self.filter))
            .sorted(self.sort.clone(), self.order)
    }
}

/// Sorted and paginated list without a filter.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct SortedPageParams {
    /// Pagination offset.
    #[serde(default)]
    pub offset: u64,

    /// Maximum number of items per page.
    #[serde(default = "default_limit")]
    #[schemars(range(min = 1))]
    pub limit: u64,

    /// Field to sort by.
    #[serde(default = "default_sort")]
    pub sort: String,

    /// Sort direction.
    #[serde(default)]
    pub order: SortOrder,
}

impl SortedPageParams {
    pub fn to_query(&self) -> ListQuery {
        ListQuery::page(self.offset, self.limit).sorted(self.sort.clone(), self.order)
    }
}

/// Plain pagination.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct PageParams {
    /// Pagination offset.
    #[serde(default)]
    pub offset: u64,

    /// Maximum number of items per page.
    #[serde(default = "default_limit")]
    #[schemars(range(min = 1))]
    pub limit: u64,
}

impl PageParams {
    pub fn to_query(&self) -> ListQuery {
        ListQuery::page(self.offset, self.limit)
    }
}

/// Trending entities over a time window.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct TrendingParams {
    /// Time window: 1d, 7d or 30d.
    #[serde(default)]
    pub period: TrendingPeriod,

    /// Pagination offset.
    #[serde(default)]
    pub offset: u64,

    /// Maximum number of items.
    #[serde(default = "default_limit")]
    #[schemars(range(min = 1))]
    pub limit: u64,
}

/// Records linked to one entity.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct RelationParams {
    /// Entity UUID, name or external identifier.
    pub identifier: String,

    /// Pagination offset.
    #[serde(default)]
    pub offset: u64,

    /// Maximum number of items.
    #[serde(default = "default_limit")]
    #[schemars(range(min = 1))]
    pub limit: u64,
}

/// Tools that take no arguments.
#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
pub struct NoParams {}

// ============================================================================
// Binders
// ============================================================================

/// `get(identifier)` on `kind`.
pub fn get_tool(
    name: &'static str,
    description: &'static str,
    ctx: &ToolContext,
    kind: EntityKind,
) -> ToolDefinition {
    ToolDefinition::new(name, description, ctx, move |api, p: IdentifierParams| async move {
        api.get(kind, &p.identifier).await
    })
}

/// `list(filter?, offset, limit, sort, order)` on `kind`.
pub fn filtered_list_tool(
    name: &'static str,
    description: &'static str,
    ctx: &ToolContext,
    kind: EntityKind,
) -> ToolDefinition {
    ToolDefinition::new(name, description, ctx, move |api, p: FilteredListParams| async move {
        api.list(kind, &p.to_query()).await
    })
}

/// `list(offset, limit, sort, order)` on `kind`.
pub fn sorted_list_tool(
    name: &'static str,
    description: &'static str,
    ctx: &ToolContext,
    kind: EntityKind,
) -> ToolDefinition {
    ToolDefinition::new(name, description, ctx, move |api, p: SortedPageParams| async move {
        api.list(kind, &p.to_query()).await
    })
}

/// `list(offset, limit)` on `kind`.
pub fn page_list_tool(
    name: &'static str,
    description: &'static str,
    ctx: &ToolContext,
    kind: EntityKind,
) -> ToolDefinition {
    ToolDefinition::new(name, description, ctx, move |api, p: PageParams| async move {
        api.list(kind, &p.to_query()).await
    })
}

/// `trending(period, offset, limit)` on `kind`.
pub fn trending_tool(
    name: &'static str,
    description: &'static str,
    ctx: &ToolContext,
    kind: EntityKind,
) -> ToolDefinition {
    ToolDefinition::new(name, description, ctx, move |api, p: TrendingParams| async move {
        api.trending(kind, p.period, PageQuery::new(p.offset, p.limit))
            .await
    })
}

/// Paginated sub-collection `kind/feed`.
pub fn feed_tool(
    name: &'static str,
    description: &'static str,
    ctx: &ToolContext,
    kind: EntityKind,
    feed: &'static str,
) -> ToolDefinition {
    ToolDefinition::new(name, description, ctx, move |api, p: PageParams| async move {
        api.feed(kind, feed, &p.to_query()).await
    })
}

/// Sorted sub-collection `kind/feed`.
pub fn sorted_feed_tool(
    name: &'static str,
    description: &'static str,
    ctx: &ToolContext,
    kind: EntityKind,
    feed: &'static str,
) -> ToolDefinition {
    ToolDefinition::new(name, description, ctx, move |api, p: SortedPageParams| async move {
        api.feed(kind, feed, &p.to_query()).await
    })
}

/// Paginated relation `kind/{identifier}/relation`.
pub fn relation_tool(
    name: &'static str,
    description: &'static str,
    ctx: &ToolContext,
    kind: EntityKind,
    relation: &'static str,
) -> ToolDefinition {
    ToolDefinition::new(name, description, ctx, move |api, p: RelationParams| async move {
        api.related(
            kind,
            &p.identifier,
            relation,
            Some(PageQuery::new(p.offset, p.limit)),
        )
        .await
    })
}

/// Unpaginated relation `kind/{identifier}/relation`.
pub fn detail_tool(
    name: &'static str,
    description: &'static str,
    ctx: &ToolContext,
    kind: EntityKind,
    relation: &'static str,
) -> ToolDefinition {
    ToolDefinition::new(name, description, ctx, move |api, p: IdentifierParams| async move {
        api.related(kind, &p.identifier, relation, None).await
    })
}
