use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::decimal::parse_decimal;

/// Upper bound on the number of positions in one fetch result.
pub const MAX_POSITIONS: usize = 10;

/// One row of the leaderboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct LiquidityPosition {
    /// Opaque identifier, unique within one fetch result.
    pub id: String,
    pub user: User,
    pub pair: Pair,
    /// Provider's share, as a decimal string.
    pub liquidity_token_balance: String,
}

/// Liquidity provider. For pool-level sources the id is the pool address.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct User {
    pub id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Token {
    pub symbol: String,
}

/// The pool a position sits in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Pair {
    pub id: String,
    pub token0: Token,
    pub token1: Token,
    /// USD value locked in the pool, as a decimal string.
    #[serde(rename = "reserveUSD")]
    pub reserve_usd: String,
    /// Cumulative USD volume, as a decimal string.
    #[serde(rename = "volumeUSD", default, skip_serializing_if = "Option::is_none")]
    pub volume_usd: Option<String>,
}

impl Pair {
    /// Display label, e.g. `WETH/USDC`.
    pub fn label(&self) -> String {
        format!("{}/{}", self.token0.symbol, self.token1.symbol)
    }
}

impl LiquidityPosition {
    /// Locked value in USD; unparseable strings count as zero.
    pub fn reserve_usd(&self) -> f64 {
        parse_decimal(&self.pair.reserve_usd)
    }

    /// Liquidity token balance; unparseable strings count as zero.
    pub fn liquidity_tokens(&self) -> f64 {
        parse_decimal(&self.liquidity_token_balance)
    }
}
