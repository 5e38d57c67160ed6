use std::time::Duration;

/// Environment variable holding The Graph gateway API key.
pub const API_KEY_ENV: &str = "GRAPH_API_KEY";

/// Used when no key is configured. The gateway rejects it, so the
/// dashboard ends up on demo data.
pub const PLACEHOLDER_API_KEY: &str = "YOUR_API_KEY_HERE";

/// The Graph decentralized network gateway.
pub const DEFAULT_GATEWAY_URL: &str = "https://gateway-arbitrum.network.thegraph.com/api";

/// Uniswap V3 subgraph on Base.
pub const DEFAULT_SUBGRAPH_ID: &str = "5zvR82QoaXYFyDEKLZ9t6v9adgnptxYpKpSbxtgVENFV";

/// Where and how to reach the subgraph.
#[derive(Debug, Clone)]
pub struct GraphConfig {
    pub api_key: String,
    pub subgraph_id: String,
    pub gateway_url: String,
    /// `None` keeps the HTTP client's default.
    pub timeout: Option<Duration>,
}

impl Default for GraphConfig {
    fn default() -> Self {
        GraphConfig {
            api_key: PLACEHOLDER_API_KEY.to_string(),
            subgraph_id: DEFAULT_SUBGRAPH_ID.to_string(),
            gateway_url: DEFAULT_GATEWAY_URL.to_string(),
            timeout: None,
        }
    }
}

impl GraphConfig {
    /// Resolve the API key: explicit value, then `GRAPH_API_KEY`, then the
    /// placeholder. The key's format is never checked.
    pub fn with_api_key(api_key: Option<String>) -> Self {
        let api_key = api_key
            .or_else(|| std::env::var(API_KEY_ENV).ok())
            .filter(|k| !k.trim().is_empty())
            .unwrap_or_else(|| PLACEHOLDER_API_KEY.to_string());
        GraphConfig {
            api_key,
            ..Default::default()
        }
    }

    /// Full query endpoint: `<gateway>/<key>/subgraphs/id/<subgraph>`.
    pub fn endpoint(&self) -> String {
        format!(
            "{}/{}/subgraphs/id/{}",
            self.gateway_url.trim_end_matches('/'),
            self.api_key,
            self.subgraph_id
        )
    }

    pub fn has_api_key(&self) -> bool {
        self.api_key != PLACEHOLDER_API_KEY
    }
}
