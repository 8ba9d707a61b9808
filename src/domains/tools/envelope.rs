//! Pagination envelope returned by every list-style tool.

use serde::Serialize;
use serde_json::Value;

use crate::api::Page;

/// Fixed-shape page as seen by tool callers.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PageEnvelope {
    pub items: Vec<Value>,
    pub total: u64,
    pub offset: u64,
    pub limit: u64,
    pub has_more: bool,
}

/// Republish an upstream page without touching its contents.
///
/// `has_more` is copied as-is, even when it disagrees with
/// `offset + items.len() < total`.
pub fn normalize(page: Page) -> PageEnvelope {
    PageEnvelope {
        items: page.items,
        total: page.total,
        offset: page.offset,
        limit: page.limit,
        has_more: page.has_more,
    }
}
