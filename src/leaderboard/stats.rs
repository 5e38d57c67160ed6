use std::collections::{HashMap, HashSet};

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::model::LiquidityPosition;

use super::format::format_millions;

/// Shown as the top pair when there are no positions.
pub const NO_PAIR: &str = "N/A";

/// Summary cards above the table. Recomputed from the list on every render.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Summary {
    /// Sum of pool reserves in USD.
    pub total_liquidity: f64,
    /// `total_liquidity` in millions, e.g. `$113.50M`.
    pub total_liquidity_display: String,
    /// Most frequent `token0/token1` label.
    pub top_pair: String,
    /// Distinct provider addresses.
    pub unique_providers: usize,
}

impl Summary {
    pub fn compute(positions: &[LiquidityPosition]) -> Self {
        let total = total_liquidity(positions);
        Summary {
            total_liquidity: total,
            total_liquidity_display: format_millions(total),
            top_pair: top_pair(positions),
            unique_providers: unique_providers(positions),
        }
    }
}

/// Sum of `pair.reserveUSD`; unparseable values count as zero.
pub fn total_liquidity(positions: &[LiquidityPosition]) -> f64 {
    positions.iter().map(LiquidityPosition::reserve_usd).sum()
}

pub fn unique_providers(positions: &[LiquidityPosition]) -> usize {
    positions
        .iter()
        .map(|p| p.user.id.as_str())
        .collect::<HashSet<_>>()
        .len()
}

/// The pair label seen most often. Equal counts keep first-seen order.
pub fn top_pair(positions: &[LiquidityPosition]) -> String {
    let mut counts: Vec<(String, usize)> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for pos in positions {
        let label = pos.pair.label();
        match index.get(&label) {
            Some(&i) => counts[i].1 += 1,
            None => {
                index.insert(label.clone(), counts.len());
                counts.push((label, 1));
            }
        }
    }

    // Stable sort: ties stay in first-seen order
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts
        .into_iter()
        .next()
        .map(|(label, _)| label)
        .unwrap_or_else(|| NO_PAIR.to_string())
}
