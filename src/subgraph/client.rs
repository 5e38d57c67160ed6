use std::sync::Arc;

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use tracing::{debug, info, warn};

use crate::config::GraphConfig;
use crate::error::FetchError;
use crate::model::LiquidityPosition;

use super::demo::demo_positions;
use super::query::{TOP_POOLS_QUERY, parse_pools};

/// Longest response excerpt kept in a status error.
const ERROR_BODY_LIMIT: usize = 200;

// ── Position source trait ───────────────────────────────────────────

/// Something the dashboard can load positions from.
///
/// Implementations never fail: whatever goes wrong is absorbed and turned
/// into a usable list.
#[async_trait]
pub trait PositionSource: Send + Sync {
    async fn fetch_positions(&self) -> Vec<LiquidityPosition>;

    /// Short name for logs.
    fn name(&self) -> &'static str;
}

// ── Subgraph source ─────────────────────────────────────────────────

/// Live source: one GraphQL query against The Graph gateway, demo data
/// on any failure.
pub struct SubgraphSource {
    client: reqwest::Client,
    config: GraphConfig,
}

impl SubgraphSource {
    pub fn new(config: GraphConfig) -> Result<Self> {
        let mut builder = reqwest::Client::builder().user_agent("base-leaderboard/0.1");
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().context("creating HTTP client")?;
        Ok(SubgraphSource { client, config })
    }

    pub fn config(&self) -> &GraphConfig {
        &self.config
    }
}

#[async_trait]
impl PositionSource for SubgraphSource {
    async fn fetch_positions(&self) -> Vec<LiquidityPosition> {
        fetch_positions(&self.client, &self.config).await
    }

    fn name(&self) -> &'static str {
        "subgraph"
    }
}

// ── Demo source ─────────────────────────────────────────────────────

/// Offline source that always yields the demo dataset.
pub struct DemoSource;

#[async_trait]
impl PositionSource for DemoSource {
    async fn fetch_positions(&self) -> Vec<LiquidityPosition> {
        demo_positions()
    }

    fn name(&self) -> &'static str {
        "demo"
    }
}

/// Pick the live subgraph source, or the offline demo source.
pub fn select_source(config: GraphConfig, demo: bool) -> Result<Arc<dyn PositionSource>> {
    if demo {
        Ok(Arc::new(DemoSource))
    } else {
        Ok(Arc::new(SubgraphSource::new(config)?))
    }
}

// ── Fetching ────────────────────────────────────────────────────────

/// Fetch the top pools and map them to positions.
///
/// Always resolves to a list: network errors, bad statuses, malformed or
/// empty responses are logged and replaced by the demo dataset.
pub async fn fetch_positions(
    client: &reqwest::Client,
    config: &GraphConfig,
) -> Vec<LiquidityPosition> {
    if !config.has_api_key() {
        warn!("no {} set, the gateway will reject the query", crate::config::API_KEY_ENV);
    }

    match try_fetch(client, config).await {
        Ok(positions) => {
            info!(count = positions.len(), "loaded live pools from subgraph");
            positions
        }
        Err(e) => {
            warn!(error = %e, "subgraph fetch failed, using demo data");
            demo_positions()
        }
    }
}

async fn try_fetch(
    client: &reqwest::Client,
    config: &GraphConfig,
) -> Result<Vec<LiquidityPosition>, FetchError> {
    let body = serde_json::json!({ "query": TOP_POOLS_QUERY });

    debug!(subgraph = %config.subgraph_id, "querying top pools");
    let resp = client
        .post(config.endpoint())
        .header(CONTENT_TYPE, "application/json")
        .json(&body)
        .send()
        .await?;

    let status = resp.status();
    let text = resp.text().await?;
    debug!(status = status.as_u16(), body = %text, "subgraph response");

    if !status.is_success() {
        return Err(FetchError::Status {
            status: status.as_u16(),
            body: text.chars().take(ERROR_BODY_LIMIT).collect(),
        });
    }

    parse_pools(&text)
}
