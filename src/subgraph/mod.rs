//! Data fetcher: the top-pools query against the Uniswap V3 Base subgraph
//! and the demo dataset it falls back to.

#[cfg(feature = "full")]
mod client;
pub mod demo;
pub mod query;

#[cfg(feature = "full")]
pub use client::{DemoSource, PositionSource, SubgraphSource, fetch_positions, select_source};
pub use demo::{DEMO_FIRST_ID, demo_positions, is_demo};
pub use query::{TOP_POOLS_QUERY, parse_pools};
