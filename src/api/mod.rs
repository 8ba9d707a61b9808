//! Upstream intelligence API.
//!
//! The tools domain only depends on the [`IntelligenceApi`] trait. Each
//! operation either returns a record, a [`Page`], or fails. Recognized
//! failures are raised as [`ApiError`]; anything else (network faults,
//! malformed responses) is an opaque `anyhow::Error`.
//!
//! [`MalloryClient`] is the HTTP implementation used by the server.

mod client;
mod error;
mod types;

use async_trait::async_trait;
use serde_json::Value;

pub use client::MalloryClient;
pub use error::ApiError;
pub use types::{EntityKind, ListQuery, Page, PageQuery, SortOrder, TrendingPeriod};

/// JSON object of extra query parameters.
pub type QueryParams = serde_json::Map<String, Value>;

/// Operations offered by the intelligence API.
///
/// Implementations are shared across concurrent tool calls and must not
/// assume exclusive access.
#[async_trait]
pub trait IntelligenceApi: Send + Sync {
    /// Fetch a single entity by UUID, name or external identifier.
    async fn get(&self, kind: EntityKind, identifier: &str) -> anyhow::Result<Value>;

    /// List a collection.
    async fn list(&self, kind: EntityKind, query: &ListQuery) -> anyhow::Result<Page>;

    /// Entities trending over `period`.
    async fn trending(
        &self,
        kind: EntityKind,
        period: TrendingPeriod,
        page: PageQuery,
    ) -> anyhow::Result<Page>;

    /// A named sub-collection, e.g. `vulnerabilities/exploited`.
    async fn feed(&self, kind: EntityKind, feed: &str, query: &ListQuery)
    -> anyhow::Result<Page>;

    /// Records linked to one entity, e.g. `threat-actors/{id}/attack-patterns`.
    async fn related(
        &self,
        kind: EntityKind,
        identifier: &str,
        relation: &str,
        page: Option<PageQuery>,
    ) -> anyhow::Result<Value>;

    /// Story topic taxonomy.
    async fn topics(&self) -> anyhow::Result<Value>;

    /// Cross-entity search.
    async fn search(&self, q: &str, extra: &QueryParams) -> anyhow::Result<Value>;
}
