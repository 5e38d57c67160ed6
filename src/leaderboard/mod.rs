//! Aggregation over a loaded position list: summary statistics, table rows
//! and display formatting.

pub mod format;
pub mod report;
pub mod stats;

pub use report::{DataMode, LeaderboardReport, LeaderboardRow, rows};
pub use stats::{NO_PAIR, Summary, top_pair, total_liquidity, unique_providers};
