//! Request and response types shared by every upstream operation.

use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Entity collections exposed by the intelligence API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    Advisories,
    AttackPatterns,
    Breaches,
    Mentions,
    Organizations,
    Products,
    Sources,
    Stories,
    ThreatActors,
    Vulnerabilities,
}

impl EntityKind {
    /// URL path segment of the collection.
    pub fn as_path(&self) -> &'static str {
        match self {
            Self::Advisories => "advisories",
            Self::AttackPatterns => "attack-patterns",
            Self::Breaches => "breaches",
            Self::Mentions => "mentions",
            Self::Organizations => "organizations",
            Self::Products => "products",
            Self::Sources => "sources",
            Self::Stories => "stories",
            Self::ThreatActors => "threat-actors",
            Self::Vulnerabilities => "vulnerabilities",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_path())
    }
}

/// Sort direction for list endpoints.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

impl SortOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }
}

/// Window used by the trending endpoints.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub enum TrendingPeriod {
    #[serde(rename = "1d")]
    Day,
    #[default]
    #[serde(rename = "7d")]
    Week,
    #[serde(rename = "30d")]
    Month,
}

impl TrendingPeriod {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Day => "1d",
            Self::Week => "7d",
            Self::Month => "30d",
        }
    }
}

/// Offset/limit pair for relation and trending endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageQuery {
    pub offset: u64,
    pub limit: u64,
}

impl PageQuery {
    pub fn new(offset: u64, limit: u64) -> Self {
        Self { offset, limit }
    }
}

/// Query for list-style endpoints.
///
/// `filter`, `sort` and `order` are only sent when present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListQuery {
    pub filter: Option<String>,
    pub offset: u64,
    pub limit: u64,
    pub sort: Option<String>,
    pub order: Option<SortOrder>,
}

impl ListQuery {
    /// A plain page request without filter or sorting.
    pub fn page(offset: u64, limit: u64) -> Self {
        Self {
            filter: None,
            offset,
            limit,
            sort: None,
            order: None,
        }
    }

    pub fn with_filter(mut self, filter: Option<String>) -> Self {
        self.filter = filter;
        self
    }

    pub fn sorted(mut self, sort: impl Into<String>, order: SortOrder) -> Self {
        self.sort = Some(sort.into());
        self.order = Some(order);
        self
    }

    /// Query-string pairs in a stable order.
    pub fn to_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::with_capacity(5);
        if let Some(filter) = &self.filter {
            pairs.push(("filter", filter.clone()));
        }
        pairs.push(("offset", self.offset.to_string()));
        pairs.push(("limit", self.limit.to_string()));
        if let Some(sort) = &self.sort {
            pairs.push(("sort", sort.clone()));
        }
        if let Some(order) = self.order {
            pairs.push(("order", order.as_str().to_string()));
        }
        pairs
    }
}

/// A page of records as returned by the upstream client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page {
    pub items: Vec<Value>,
    pub total: u64,
    pub offset: u64,
    pub limit: u64,
    pub has_more: bool,
}
