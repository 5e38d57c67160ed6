use crate::model::{LiquidityPosition, Pair, Token, User};

/// Id of the first demo row. The dashboard compares the first fetched id
/// against it to decide between the demo and live banners.
pub const DEMO_FIRST_ID: &str = "0x1";

/// Fixed sample of Base liquidity positions shown when the subgraph is
/// unavailable.
#[rustfmt::skip]
pub fn demo_positions() -> Vec<LiquidityPosition> {
    vec![
        demo("0x1", "0x742d35Cc6634C0532925a3b844Bc9e7595f0bEb1", "WETH", "USDC", "24500000.50", "156000000", "12450.25"),
        demo("0x2", "0x8B3192f5eEBD8579568A2Ed41E6FEB402f93f73F", "WETH", "DAI", "18200000.75", "89000000", "9875.50"),
        demo("0x3", "0xdF3e18d64BC6A983f673Ab319CCaE4f1a57C7097", "cbETH", "USDC", "15800000.30", "67000000", "8234.80"),
        demo("0x4", "0x1234567890abcdef1234567890abcdef12345678", "AERO", "USDC", "12300000.00", "45000000", "6543.20"),
        demo("0x5", "0xabcdef1234567890abcdef1234567890abcdef12", "WETH", "AERO", "9800000.45", "32000000", "5432.10"),
        demo("0x6", "0x9876543210fedcba9876543210fedcba98765432", "USDbC", "USDC", "8500000.90", "28000000", "4321.00"),
        demo("0x7", "0x1111111111111111111111111111111111111111", "WETH", "USDT", "7200000.60", "21000000", "3987.50"),
        demo("0x8", "0x2222222222222222222222222222222222222222", "cbBTC", "WETH", "6500000.25", "18000000", "3456.75"),
        demo("0x9", "0x3333333333333333333333333333333333333333", "USDC", "DAI", "5800000.80", "15000000", "2987.30"),
        demo("0x10", "0x4444444444444444444444444444444444444444", "WETH", "LINK", "4900000.15", "12000000", "2543.90"),
    ]
}

/// Whether a fetch result looks like the demo dataset.
///
/// Only the first id is checked, so a live source whose top pool happens
/// to be `0x1` is reported as demo data as well.
pub fn is_demo(positions: &[LiquidityPosition]) -> bool {
    positions.first().is_some_and(|p| p.id == DEMO_FIRST_ID)
}

fn demo(
    id: &str,
    user: &str,
    token0: &str,
    token1: &str,
    reserve_usd: &str,
    volume_usd: &str,
    balance: &str,
) -> LiquidityPosition {
    LiquidityPosition {
        id: id.to_string(),
        user: User {
            id: user.to_string(),
        },
        pair: Pair {
            id: id.to_string(),
            token0: Token {
                symbol: token0.to_string(),
            },
            token1: Token {
                symbol: token1.to_string(),
            },
            reserve_usd: reserve_usd.to_string(),
            volume_usd: Some(volume_usd.to_string()),
        },
        liquidity_token_balance: balance.to_string(),
    }
}
