use anyhow::{Context, Result};
use serde::Serialize;

use crate::leaderboard::{LeaderboardReport, LeaderboardRow};

/// Flat CSV record for one table row.
#[derive(Serialize)]
struct CsvRow<'a> {
    rank: usize,
    address: &'a str,
    pool: &'a str,
    liquidity_tokens: &'a str,
    reserve_usd: &'a str,
}

impl<'a> From<&'a LeaderboardRow> for CsvRow<'a> {
    fn from(row: &'a LeaderboardRow) -> Self {
        CsvRow {
            rank: row.rank,
            address: &row.address,
            pool: &row.pool,
            liquidity_tokens: &row.liquidity_tokens_display,
            reserve_usd: &row.reserve_usd_display,
        }
    }
}

/// Table rows as CSV with a header line. Addresses are written in full.
pub fn render_csv(report: &LeaderboardReport) -> Result<String> {
    let mut wtr = csv::Writer::from_writer(Vec::new());
    for row in &report.rows {
        wtr.serialize(CsvRow::from(row))?;
    }
    let bytes = wtr
        .into_inner()
        .map_err(|e| anyhow::anyhow!("flushing CSV output: {}", e.error()))?;
    String::from_utf8(bytes).context("CSV output is not UTF-8")
}

/// The report as pretty-printed JSON.
pub fn render_json(report: &LeaderboardReport) -> Result<String> {
    serde_json::to_string_pretty(report).context("serializing leaderboard report")
}
