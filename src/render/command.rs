use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result, bail};
use indicatif::{ProgressBar, ProgressStyle};

use crate::subgraph::PositionSource;
use crate::view::DashboardView;

use super::{render_ascii, render_csv, render_json, render_loaded};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Html,
    Ascii,
    Json,
    Csv,
}

impl OutputFormat {
    pub fn parse(s: &str) -> Result<Self> {
        match s {
            "html" => Ok(OutputFormat::Html),
            "ascii" => Ok(OutputFormat::Ascii),
            "json" => Ok(OutputFormat::Json),
            "csv" => Ok(OutputFormat::Csv),
            other => bail!("Unknown format '{other}'. Use: html, ascii, json, csv"),
        }
    }
}

/// Entry point for the `render` command: load once, render once.
pub fn run(source: Arc<dyn PositionSource>, format: &str, output: Option<&Path>) -> Result<()> {
    let format = OutputFormat::parse(format)?;

    let rt = tokio::runtime::Runtime::new().context("creating async runtime")?;
    let loaded = rt.block_on(async {
        let view = DashboardView::spawn(source);

        let spinner = ProgressBar::new_spinner();
        if let Ok(style) = ProgressStyle::default_spinner().template("  {spinner} {msg}") {
            spinner.set_style(style);
        }
        spinner.set_message("Loading leaderboard data…");
        spinner.enable_steady_tick(Duration::from_millis(100));

        let loaded = view.loaded().await;
        spinner.finish_and_clear();
        loaded.context("leaderboard fetch did not complete")
    })?;

    let report = loaded.report();
    let text = match format {
        OutputFormat::Html => render_loaded(&report),
        OutputFormat::Ascii => render_ascii(&report),
        OutputFormat::Json => render_json(&report)?,
        OutputFormat::Csv => render_csv(&report)?,
    };
    write_output(&text, output)
}

fn write_output(content: &str, output: Option<&Path>) -> Result<()> {
    match output {
        Some(path) => {
            std::fs::write(path, content)
                .with_context(|| format!("writing {}", path.display()))?;
            println!("Wrote {}", path.display());
        }
        None => print!("{content}"),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_format() {
        assert_eq!(OutputFormat::parse("html").unwrap(), OutputFormat::Html);
        assert_eq!(OutputFormat::parse("csv").unwrap(), OutputFormat::Csv);
        assert!(OutputFormat::parse("pdf").is_err());
    }
}
