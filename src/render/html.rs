use std::fmt::Write;

use crate::leaderboard::{DataMode, LeaderboardReport};
use crate::view::ViewState;

const TITLE: &str = "Base DeFi Leaderboard";
const PROVIDER_URL: &str = "https://thegraph.com";

/// Seconds between reloads of the loading page.
const LOADING_REFRESH_SECS: u32 = 1;

const STYLE: &str = "\
body{margin:0;background:#030712;color:#f3f4f6;font-family:system-ui,sans-serif}\
main{max-width:80rem;margin:0 auto;padding:1.5rem}\
h1{color:#60a5fa;font-size:2.25rem;margin-bottom:2rem}\
.banner{border-radius:.5rem;padding:1rem;margin-bottom:1.5rem;font-size:.875rem}\
.banner.demo{background:#1e3a8a33;border:1px solid #1e40af;color:#93c5fd}\
.banner.live{background:#14532d33;border:1px solid #166534;color:#86efac}\
.cards{display:grid;grid-template-columns:repeat(3,1fr);gap:1rem;margin-bottom:2rem}\
.card{background:#111827;border:1px solid #1f2937;border-radius:.5rem;padding:1.25rem}\
.card .label{color:#9ca3af;font-size:.875rem}\
.card .value{font-size:1.5rem;font-weight:700}\
table{width:100%;border-collapse:collapse;background:#111827}\
th,td{padding:1rem 1.5rem;text-align:left;border-bottom:1px solid #1f2937}\
th{color:#9ca3af;font-size:.875rem}\
.num{text-align:right;font-family:monospace}\
a{color:#60a5fa}\
.spinner{width:3rem;height:3rem;margin:5rem auto 1rem;border-radius:50%;\
border-bottom:2px solid #60a5fa;animation:spin 1s linear infinite}\
@keyframes spin{to{transform:rotate(360deg)}}\
footer{margin-top:2rem;text-align:center;color:#6b7280;font-size:.875rem}";

/// Render the whole page for the current view state.
pub fn render_page(state: &ViewState) -> String {
    match state.report() {
        None => render_loading(),
        Some(report) => render_loaded(&report),
    }
}

/// Loading indicator and nothing else. Reloads itself until data is there.
pub fn render_loading() -> String {
    let body = "<div class=\"spinner\"></div>\n\
                <p style=\"text-align:center;color:#9ca3af\">Loading leaderboard data…</p>\n";
    page(
        &format!("<meta http-equiv=\"refresh\" content=\"{LOADING_REFRESH_SECS}\">"),
        body,
    )
}

pub fn render_loaded(report: &LeaderboardReport) -> String {
    let mut body = String::new();

    match report.mode {
        Some(DataMode::Demo) => body.push_str(
            "<div class=\"banner demo\">📊 <strong>Demo Mode:</strong> Displaying sample \
             liquidity data from Base DeFi protocols. Set <code>GRAPH_API_KEY</code> to \
             connect to live data.</div>\n",
        ),
        Some(DataMode::Live) => body.push_str(
            "<div class=\"banner live\">✅ <strong>Live Data:</strong> Connected to \
             Uniswap V3 on Base via The Graph Network</div>\n",
        ),
        None => {}
    }

    let summary = &report.summary;
    body.push_str("<div class=\"cards\">\n");
    card(&mut body, "Total Liquidity", &summary.total_liquidity_display, "#4ade80");
    card(&mut body, "Top Pair", &summary.top_pair, "#60a5fa");
    card(&mut body, "Unique Providers", &summary.unique_providers.to_string(), "#c084fc");
    body.push_str("</div>\n");

    body.push_str(
        "<table>\n<thead><tr><th>Rank</th><th>User Address</th><th>Pool</th>\
         <th class=\"num\">Liquidity Tokens</th><th class=\"num\">Reserve USD</th></tr></thead>\n<tbody>\n",
    );
    for row in &report.rows {
        let _ = writeln!(
            body,
            "<tr><td>{}</td>\
             <td><a href=\"{}\" target=\"_blank\" rel=\"noopener noreferrer\">{}</a></td>\
             <td>{}</td><td class=\"num\">{}</td><td class=\"num\">{}</td></tr>",
            row.rank,
            escape(&row.explorer_url),
            escape(&row.short_address),
            escape(&row.pool),
            escape(&row.liquidity_tokens_display),
            escape(&row.reserve_usd_display),
        );
    }
    body.push_str("</tbody>\n</table>\n");

    let _ = writeln!(
        body,
        "<footer>Loaded {} • <a href=\"{PROVIDER_URL}\" target=\"_blank\" \
         rel=\"noopener noreferrer\">Powered by The Graph</a></footer>",
        escape(&report.loaded_at),
    );

    page("", &body)
}

fn card(out: &mut String, label: &str, value: &str, color: &str) {
    let _ = writeln!(
        out,
        "<div class=\"card\"><div class=\"label\">{}</div>\
         <div class=\"value\" style=\"color:{color}\">{}</div></div>",
        escape(label),
        escape(value),
    );
}

fn page(head_extra: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <title>{TITLE}</title>\n{head_extra}\n<style>{STYLE}</style>\n</head>\n\
         <body>\n<main>\n<h1>{TITLE}</h1>\n{body}</main>\n</body>\n</html>\n"
    )
}

/// Escape text for HTML content and double-quoted attributes.
pub fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
