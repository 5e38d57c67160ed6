use anyhow::Context;
use schemars::schema_for;

use crate::leaderboard::LeaderboardReport;

/// JSON Schema of the leaderboard report served at `/api/leaderboard`.
pub fn report_schema() -> anyhow::Result<serde_json::Value> {
    serde_json::to_value(schema_for!(LeaderboardReport)).context("serializing report schema")
}

/// Print the report schema to stdout.
pub fn run() -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(&report_schema()?)?;
    println!("{json}");
    Ok(())
}
