use crate::leaderboard::{DataMode, LeaderboardReport};

const HEADERS: [&str; 5] = ["Rank", "User Address", "Pool", "Liquidity Tokens", "Reserve USD"];

/// Columns aligned to the right.
const NUMERIC: [bool; 5] = [true, false, false, true, true];

/// Plain-text leaderboard for terminals.
pub fn render_ascii(report: &LeaderboardReport) -> String {
    let mut out = String::new();

    match report.mode {
        Some(DataMode::Demo) => {
            out.push_str("[demo] Sample data from Base DeFi protocols (set GRAPH_API_KEY for live data)\n\n")
        }
        Some(DataMode::Live) => {
            out.push_str("[live] Uniswap V3 on Base via The Graph Network\n\n")
        }
        None => {}
    }

    let s = &report.summary;
    out.push_str(&format!(
        "Total Liquidity: {}   Top Pair: {}   Unique Providers: {}\n\n",
        s.total_liquidity_display, s.top_pair, s.unique_providers
    ));

    let cells: Vec<[String; 5]> = report
        .rows
        .iter()
        .map(|r| {
            [
                r.rank.to_string(),
                r.short_address.clone(),
                r.pool.clone(),
                r.liquidity_tokens_display.clone(),
                r.reserve_usd_display.clone(),
            ]
        })
        .collect();

    let mut widths = HEADERS.map(|h| h.chars().count());
    for row in &cells {
        for (w, cell) in widths.iter_mut().zip(row) {
            *w = (*w).max(cell.chars().count());
        }
    }

    let header = HEADERS.map(str::to_string);
    out.push_str(&line(&header, &widths));
    out.push_str(&separator(&widths));
    for row in &cells {
        out.push_str(&line(row, &widths));
    }

    out
}

fn line(cells: &[String; 5], widths: &[usize; 5]) -> String {
    let padded: Vec<String> = cells
        .iter()
        .zip(widths)
        .zip(NUMERIC)
        .map(|((cell, &w), numeric)| {
            // `{:>w$}` pads by char count, which keeps `…` aligned
            if numeric {
                format!("{cell:>w$}")
            } else {
                format!("{cell:<w$}")
            }
        })
        .collect();
    format!("{}\n", padded.join("  ").trim_end())
}

fn separator(widths: &[usize; 5]) -> String {
    let dashes: Vec<String> = widths.iter().map(|&w| "-".repeat(w)).collect();
    format!("{}\n", dashes.join("  "))
}
