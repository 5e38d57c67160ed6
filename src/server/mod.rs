//! HTTP surface: the rendered dashboard plus its JSON report.

pub mod error;
pub mod handlers;
pub mod state;

use std::sync::Arc;

use anyhow::{Context, Result};
use axum::Router;
use axum::routing::get;
use tower_http::cors::{Any, CorsLayer};
use tracing::{info, warn};

use crate::subgraph::PositionSource;

use state::AppState;

pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(handlers::index))
        .route("/health", get(|| async { "ok" }))
        .route("/api/leaderboard", get(handlers::leaderboard))
        .route("/api/schema", get(handlers::schema))
        .fallback(handlers::not_found)
        .layer(cors)
        .with_state(state)
}

/// Start loading the dashboard and serve it until Ctrl-C.
pub async fn serve(host: &str, port: u16, source: Arc<dyn PositionSource>) -> Result<()> {
    info!(source = source.name(), "starting dashboard");
    let state = AppState::new(source);
    let app = router(state);

    let addr = format!("{host}:{port}");
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("binding to {addr}"))?;

    println!("base-leaderboard listening on {addr}");
    println!("  Dashboard: GET  http://{addr}/");
    println!("  Report:    GET  http://{addr}/api/leaderboard");
    println!("  Schema:    GET  http://{addr}/api/schema");
    println!("  Health:    GET  http://{addr}/health");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("running server")?;

    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("shutting down"),
        Err(e) => {
            warn!(error = %e, "cannot listen for Ctrl-C, serving until killed");
            std::future::pending::<()>().await;
        }
    }
}
