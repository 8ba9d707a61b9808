//! HTTP client for the Mallory API.

use async_trait::async_trait;
use reqwest::{StatusCode, Url};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::debug;

use super::{
    ApiError, EntityKind, IntelligenceApi, ListQuery, Page, PageQuery, QueryParams,
    TrendingPeriod,
};
use crate::core::config::ApiConfig;

const NO_QUERY: &[(&str, &str)] = &[];

/// Async client for the Mallory REST API.
///
/// Cloning is cheap; the underlying connection pool is shared.
#[derive(Clone)]
pub struct MalloryClient {
    http: reqwest::Client,
    base_url: Url,
    api_key: Option<String>,
}

/// Page as sent on the wire. Some endpoints name the records `data` and
/// omit `has_more`.
#[derive(Debug, Deserialize)]
struct WirePage {
    #[serde(alias = "data")]
    items: Vec<Value>,
    total: u64,
    offset: u64,
    limit: u64,
    has_more: Option<bool>,
}

impl From<WirePage> for Page {
    fn from(wire: WirePage) -> Self {
        let has_more = wire
            .has_more
            .unwrap_or(wire.offset.saturating_add(wire.items.len() as u64) < wire.total);
        Page {
            items: wire.items,
            total: wire.total,
            offset: wire.offset,
            limit: wire.limit,
            has_more,
        }
    }
}

impl MalloryClient {
    /// Build a client from the API configuration.
    ///
    /// A missing API key is allowed; requests are then sent anonymously.
    pub fn new(config: &ApiConfig) -> anyhow::Result<Self> {
        let base_url = Url::parse(&config.base_url)?;
        if base_url.cannot_be_a_base() {
            anyhow::bail!("Base URL cannot carry a path: {}", config.base_url);
        }

        let http = reqwest::Client::builder()
            .user_agent(concat!("mallory-mcp-server/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            http,
            base_url,
            api_key: config.api_key.clone(),
        })
    }

    /// Base URL requests are resolved against.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn endpoint(&self, segments: &[&str]) -> anyhow::Result<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| anyhow::anyhow!("Invalid base URL: {}", self.base_url))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    async fn fetch<T, Q>(&self, segments: &[&str], query: &Q) -> anyhow::Result<T>
    where
        T: DeserializeOwned,
        Q: serde::Serialize + ?Sized,
    {
        let url = self.endpoint(segments)?;
        debug!("GET {}", url);

        let mut request = self.http.get(url).query(query);
        if let Some(key) = &self.api_key {
            request = request.bearer_auth(key);
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::from_status(status.as_u16(), error_message(status, &body)).into());
        }

        Ok(response.json::<T>().await?)
    }

    async fn fetch_page(&self, segments: &[&str], query: &ListQuery) -> anyhow::Result<Page> {
        let wire: WirePage = self.fetch(segments, &query.to_pairs()).await?;
        Ok(wire.into())
    }
}

/// Pull a human-readable message out of an error response body.
fn error_message(status: StatusCode, body: &str) -> String {
    if let Ok(Value::Object(map)) = serde_json::from_str::<Value>(body) {
        for key in ["detail", "message", "error"] {
            if let Some(Value::String(message)) = map.get(key) {
                return message.clone();
            }
        }
    }

    let body = body.trim();
    if !body.is_empty() {
        return body.to_string();
    }

    status
        .canonical_reason()
        .map(str::to_string)
        .unwrap_or_else(|| format!("HTTP {}", status.as_u16()))
}

fn query_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[async_trait]
impl IntelligenceApi for MalloryClient {
    async fn get(&self, kind: EntityKind, identifier: &str) -> anyhow::Result<Value> {
        self.fetch(&[kind.as_path(), identifier], NO_QUERY).await
    }

    async fn list(&self, kind: EntityKind, query: &ListQuery) -> anyhow::Result<Page> {
        self.fetch_page(&[kind.as_path()], query).await
    }

    async fn trending(
        &self,
        kind: EntityKind,
        period: TrendingPeriod,
        page: PageQuery,
    ) -> anyhow::Result<Page> {
        let query = [
            ("period", period.as_str().to_string()),
            ("offset", page.offset.to_string()),
            ("limit", page.limit.to_string()),
        ];
        let wire: WirePage = self.fetch(&[kind.as_path(), "trending"], &query).await?;
        Ok(wire.into())
    }

    async fn feed(
        &self,
        kind: EntityKind,
        feed: &str,
        query: &ListQuery,
    ) -> anyhow::Result<Page> {
        self.fetch_page(&[kind.as_path(), feed], query).await
    }

    async fn related(
        &self,
        kind: EntityKind,
        identifier: &str,
        relation: &str,
        page: Option<PageQuery>,
    ) -> anyhow::Result<Value> {
        let query: Vec<(&str, String)> = page
            .map(|p| {
                vec![
                    ("offset", p.offset.to_string()),
                    ("limit", p.limit.to_string()),
                ]
            })
            .unwrap_or_default();
        self.fetch(&[kind.as_path(), identifier, relation], &query)
            .await
    }

    async fn topics(&self) -> anyhow::Result<Value> {
        self.fetch(&[EntityKind::Stories.as_path(), "topics"], NO_QUERY)
            .await
    }

    async fn search(&self, q: &str, extra: &QueryParams) -> anyhow::Result<Value> {
        let mut query = vec![("q".to_string(), q.to_string())];
        query.extend(extra.iter().map(|(k, v)| (k.clone(), query_value(v))));
        self.fetch(&["search"], &query).await
    }
}
