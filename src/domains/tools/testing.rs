//! In-memory upstream client for tool tests.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use serde_json::{Value, json};

use crate::api::{
    ApiError, EntityKind, IntelligenceApi, ListQuery, Page, PageQuery, QueryParams,
    TrendingPeriod,
};

use super::definition::ToolContext;

/// An upstream call as seen by the fake.
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    Get(EntityKind, String),
    List(EntityKind, ListQuery),
    Trending(EntityKind, TrendingPeriod, PageQuery),
    Feed(EntityKind, String, ListQuery),
    Related(EntityKind, String, String, Option<PageQuery>),
    Topics,
    Search(String, QueryParams),
}

/// Records every call and answers with canned data, or with `failure` when set.
#[derive(Default)]
pub struct FakeApi {
    calls: Mutex<Vec<Call>>,
    failure: Mutex<Option<ApiError>>,
}

impl FakeApi {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn failing(err: ApiError) -> Arc<Self> {
        let api = Self::default();
        *api.failure.lock().unwrap() = Some(err);
        Arc::new(api)
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub fn last_call(&self) -> Option<Call> {
        self.calls.lock().unwrap().last().cloned()
    }

    pub fn context(self: &Arc<Self>) -> ToolContext {
        ToolContext::new(self.clone())
    }

    fn record(&self, call: Call) -> anyhow::Result<()> {
        self.calls.lock().unwrap().push(call);
        match self.failure.lock().unwrap().clone() {
            Some(err) => Err(err.into()),
            None => Ok(()),
        }
    }
}

/// Page used for every paginated answer.
pub fn sample_page() -> Page {
    Page {
        items: vec![json!({"uuid": "a"}), json!({"uuid": "b"})],
        total: 5,
        offset: 0,
        limit: 2,
        has_more: true,
    }
}

#[async_trait]
impl IntelligenceApi for FakeApi {
    async fn get(&self, kind: EntityKind, identifier: &str) -> anyhow::Result<Value> {
        self.record(Call::Get(kind, identifier.to_string()))?;
        Ok(json!({"kind": kind, "identifier": identifier}))
    }

    async fn list(&self, kind: EntityKind, query: &ListQuery) -> anyhow::Result<Page> {
        self.record(Call::List(kind, query.clone()))?;
        Ok(sample_page())
    }

    async fn trending(
        &self,
        kind: EntityKind,
        period: TrendingPeriod,
        page: PageQuery,
    ) -> anyhow::Result<Page> {
        self.record(Call::Trending(kind, period, page))?;
        Ok(sample_page())
    }

    async fn feed(
        &self,
        kind: EntityKind,
        feed: &str,
        query: &ListQuery,
    ) -> anyhow::Result<Page> {
        self.record(Call::Feed(kind, feed.to_string(), query.clone()))?;
        Ok(sample_page())
    }

    async fn related(
        &self,
        kind: EntityKind,
        identifier: &str,
        relation: &str,
        page: Option<PageQuery>,
    ) -> anyhow::Result<Value> {
        self.record(Call::Related(
            kind,
            identifier.to_string(),
            relation.to_string(),
            page,
        ))?;
        Ok(json!([{"relation": relation}]))
    }

    async fn topics(&self) -> anyhow::Result<Value> {
        self.record(Call::Topics)?;
        Ok(json!(["ransomware", "espionage"]))
    }

    async fn search(&self, q: &str, extra: &QueryParams) -> anyhow::Result<Value> {
        self.record(Call::Search(q.to_string(), extra.clone()))?;
        Ok(json!({"query": q, "results": []}))
    }
}
