use chrono::{DateTime, SecondsFormat, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::model::LiquidityPosition;
use crate::subgraph::demo::is_demo;

use super::format::{explorer_url, format_fixed, format_usd, truncate_address};
use super::stats::Summary;

// ── Data mode ───────────────────────────────────────────────────────

/// Which banner the dashboard shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum DataMode {
    /// The demo dataset is on screen.
    Demo,
    /// Positions came from the subgraph.
    Live,
}

impl DataMode {
    /// `None` for an empty list: no banner at all.
    ///
    /// Decided by the first id alone (see [`is_demo`]).
    pub fn detect(positions: &[LiquidityPosition]) -> Option<Self> {
        if positions.is_empty() {
            None
        } else if is_demo(positions) {
            Some(DataMode::Demo)
        } else {
            Some(DataMode::Live)
        }
    }
}

// ── Rows ────────────────────────────────────────────────────────────

/// One table row, with both raw values and display strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct LeaderboardRow {
    /// 1-based, in fetch order.
    pub rank: usize,
    pub address: String,
    pub short_address: String,
    pub explorer_url: String,
    /// `token0/token1`.
    pub pool: String,
    pub liquidity_tokens: f64,
    pub liquidity_tokens_display: String,
    pub reserve_usd: f64,
    pub reserve_usd_display: String,
}

impl LeaderboardRow {
    fn new(rank: usize, pos: &LiquidityPosition) -> Self {
        let liquidity_tokens = pos.liquidity_tokens();
        let reserve_usd = pos.reserve_usd();
        LeaderboardRow {
            rank,
            address: pos.user.id.clone(),
            short_address: truncate_address(&pos.user.id),
            explorer_url: explorer_url(&pos.user.id),
            pool: pos.pair.label(),
            liquidity_tokens,
            liquidity_tokens_display: format_fixed(liquidity_tokens),
            reserve_usd,
            reserve_usd_display: format_usd(reserve_usd),
        }
    }
}

/// Table rows in list order. Rows are never re-sorted.
pub fn rows(positions: &[LiquidityPosition]) -> Vec<LeaderboardRow> {
    positions
        .iter()
        .enumerate()
        .map(|(i, pos)| LeaderboardRow::new(i + 1, pos))
        .collect()
}

// ── Report ──────────────────────────────────────────────────────────

/// Everything the dashboard renders for one loaded list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct LeaderboardReport {
    pub mode: Option<DataMode>,
    pub summary: Summary,
    pub rows: Vec<LeaderboardRow>,
    /// RFC 3339 time the list was loaded.
    pub loaded_at: String,
}

impl LeaderboardReport {
    pub fn build(positions: &[LiquidityPosition], loaded_at: DateTime<Utc>) -> Self {
        LeaderboardReport {
            mode: DataMode::detect(positions),
            summary: Summary::compute(positions),
            rows: rows(positions),
            loaded_at: loaded_at.to_rfc3339_opts(SecondsFormat::Secs, true),
        }
    }
}
