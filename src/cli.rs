use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use std::time::Duration;

use base_leaderboard::config::GraphConfig;

/// Liquidity leaderboard for Uniswap V3 pools on Base, served from
/// The Graph. Falls back to demo data when the subgraph is unavailable.
#[derive(Parser)]
#[command(name = "base-leaderboard", version, about)]
pub struct Cli {
    #[command(flatten)]
    pub graph: GraphArgs,

    /// Log debug output, including raw subgraph responses
    #[arg(long, short, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Args)]
pub struct GraphArgs {
    /// The Graph gateway API key (default: $GRAPH_API_KEY)
    #[arg(long, global = true)]
    pub api_key: Option<String>,

    /// Subgraph to query (default: Uniswap V3 on Base)
    #[arg(long, global = true)]
    pub subgraph_id: Option<String>,

    /// Gateway base URL
    #[arg(long, global = true)]
    pub gateway_url: Option<String>,

    /// Request timeout in seconds (default: no explicit timeout)
    #[arg(long, global = true)]
    pub timeout_secs: Option<u64>,
}

impl GraphArgs {
    pub fn into_config(self) -> GraphConfig {
        let mut config = GraphConfig::with_api_key(self.api_key);
        if let Some(id) = self.subgraph_id {
            config.subgraph_id = id;
        }
        if let Some(url) = self.gateway_url {
            config.gateway_url = url;
        }
        config.timeout = self.timeout_secs.map(Duration::from_secs);
        config
    }
}

#[derive(Subcommand)]
pub enum Command {
    /// Serve the dashboard over HTTP
    Serve {
        /// Address to bind
        #[arg(long, default_value = "127.0.0.1")]
        host: String,

        /// Port to listen on
        #[arg(long, default_value = "3000")]
        port: u16,

        /// Serve the demo dataset without querying the subgraph
        #[arg(long)]
        demo: bool,
    },

    /// Fetch once and render the leaderboard
    Render {
        /// Output format: html (default), ascii, json, or csv
        #[arg(long, default_value = "html")]
        format: String,

        /// Output file path (default: stdout)
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,

        /// Render the demo dataset without querying the subgraph
        #[arg(long)]
        demo: bool,
    },

    /// Output the JSON schema of the leaderboard report
    Schema,
}
