use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use base_leaderboard::{render, schema, server, subgraph};

mod cli;

fn main() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();
    init_tracing(cli.verbose);

    let graph = cli.graph.into_config();

    match cli.command {
        cli::Command::Serve { host, port, demo } => {
            let source = subgraph::select_source(graph, demo)?;
            let rt = tokio::runtime::Runtime::new().context("creating async runtime")?;
            rt.block_on(server::serve(&host, port, source))
        }
        cli::Command::Render {
            format,
            output,
            demo,
        } => render::run(subgraph::select_source(graph, demo)?, &format, output.as_deref()),
        cli::Command::Schema => schema::run(),
    }
}

/// Logs go to stderr so rendered output on stdout stays clean.
/// `RUST_LOG` takes precedence over `--verbose`.
fn init_tracing(verbose: bool) {
    let default = if verbose { "base_leaderboard=debug,info" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
