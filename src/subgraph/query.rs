use serde::Deserialize;

use crate::error::FetchError;
use crate::model::{LiquidityPosition, MAX_POSITIONS, Pair, Token, User};

/// Top pools by locked value, largest first.
pub const TOP_POOLS_QUERY: &str = r#"{
    pools(first: 10, orderBy: totalValueLockedUSD, orderDirection: desc) {
        id
        token0 {
            symbol
            id
        }
        token1 {
            symbol
            id
        }
        totalValueLockedUSD
        volumeUSD
        liquidity
    }
}"#;

// ── GraphQL response types ──────────────────────────────────────────

#[derive(Debug, Deserialize)]
struct GraphQlResponse {
    data: Option<PoolsData>,
    errors: Option<Vec<GraphQlError>>,
}

#[derive(Debug, Deserialize)]
struct GraphQlError {
    message: String,
}

#[derive(Debug, Deserialize)]
struct PoolsData {
    pools: Option<Vec<PoolRecord>>,
}

/// Every field is required: a record missing any of them fails the whole
/// response instead of producing a half-filled row.
#[derive(Debug, Deserialize)]
struct PoolRecord {
    id: String,
    token0: TokenRecord,
    token1: TokenRecord,
    #[serde(rename = "totalValueLockedUSD")]
    total_value_locked_usd: String,
    #[serde(rename = "volumeUSD")]
    volume_usd: String,
    liquidity: String,
}

#[derive(Debug, Deserialize)]
struct TokenRecord {
    symbol: String,
}

impl PoolRecord {
    /// The source only has pool-level data, so the pool id doubles as the
    /// position id and the provider id.
    fn into_position(self) -> LiquidityPosition {
        LiquidityPosition {
            id: self.id.clone(),
            user: User {
                id: self.id.clone(),
            },
            pair: Pair {
                id: self.id,
                token0: Token {
                    symbol: self.token0.symbol,
                },
                token1: Token {
                    symbol: self.token1.symbol,
                },
                reserve_usd: self.total_value_locked_usd,
                volume_usd: Some(self.volume_usd),
            },
            liquidity_token_balance: self.liquidity,
        }
    }
}

// ── Parsing ─────────────────────────────────────────────────────────

/// Turn a raw subgraph response body into positions.
///
/// Fails on non-JSON bodies, shape mismatches and empty pool lists. At most
/// `MAX_POSITIONS` pools are kept, in response order.
pub fn parse_pools(body: &str) -> Result<Vec<LiquidityPosition>, FetchError> {
    let resp: GraphQlResponse = serde_json::from_str(body)?;

    let pools = resp.data.and_then(|d| d.pools).unwrap_or_default();
    if pools.is_empty() {
        if let Some(errors) = resp.errors.filter(|e| !e.is_empty()) {
            return Err(FetchError::GraphQl(
                errors
                    .iter()
                    .map(|e| e.message.as_str())
                    .collect::<Vec<_>>()
                    .join("; "),
            ));
        }
        return Err(FetchError::EmptyPools);
    }

    Ok(pools
        .into_iter()
        .take(MAX_POSITIONS)
        .map(PoolRecord::into_position)
        .collect())
}
