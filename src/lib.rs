//! Liquidity leaderboard for Uniswap V3 pools on Base.
//!
//! The fetcher ([`subgraph`]) runs one query against The Graph and falls
//! back to a demo dataset on any failure; the view ([`view`]) loads it once
//! and [`leaderboard`] / [`render`] turn the list into summary cards and a
//! ranked table.

pub mod config;
pub mod error;
pub mod leaderboard;
pub mod model;
pub mod render;
pub mod schema;
#[cfg(feature = "full")]
pub mod server;
pub mod subgraph;
pub mod view;
