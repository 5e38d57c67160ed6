#![allow(dead_code)]

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use axum::Router;
use axum::http::{StatusCode, Uri, header};
use axum::response::IntoResponse;
use tokio::sync::{Mutex, Notify};

use base_leaderboard::config::GraphConfig;
use base_leaderboard::model::LiquidityPosition;
use base_leaderboard::subgraph::{PositionSource, demo_positions};

// ── Mock subgraph gateway ───────────────────────────────────────────

/// A request the mock gateway received.
#[derive(Debug, Clone)]
pub struct Recorded {
    pub path: String,
    pub content_type: Option<String>,
    pub body: String,
}

pub struct MockGateway {
    pub base_url: String,
    pub requests: Arc<Mutex<Vec<Recorded>>>,
}

impl MockGateway {
    /// Graph config pointing at this gateway.
    pub fn config(&self) -> GraphConfig {
        GraphConfig {
            api_key: "test-key".to_string(),
            gateway_url: self.base_url.clone(),
            ..Default::default()
        }
    }

    pub async fn hits(&self) -> usize {
        self.requests.lock().await.len()
    }
}

/// Serve a canned response for every request on a random local port.
pub async fn spawn_gateway(status: StatusCode, body: impl Into<String>) -> MockGateway {
    let body: String = body.into();
    let requests: Arc<Mutex<Vec<Recorded>>> = Arc::new(Mutex::new(Vec::new()));
    let recorder = requests.clone();

    let app = Router::new().fallback(move |uri: Uri, headers: axum::http::HeaderMap, req_body: String| {
        let recorder = recorder.clone();
        let body = body.clone();
        async move {
            recorder.lock().await.push(Recorded {
                path: uri.path().to_string(),
                content_type: headers
                    .get(header::CONTENT_TYPE)
                    .and_then(|v| v.to_str().ok())
                    .map(str::to_string),
                body: req_body,
            });
            (status, [(header::CONTENT_TYPE, "application/json")], body).into_response()
        }
    });

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    MockGateway {
        base_url: format!("http://{addr}/api"),
        requests,
    }
}

/// A subgraph response with `n` pools, `0xpool0` first.
pub fn pools_response(n: usize) -> String {
    let pools: Vec<serde_json::Value> = (0..n)
        .map(|i| {
            let token1 = if i % 2 == 0 { "USDC" } else { "cbBTC" };
            serde_json::json!({
                "id": format!("0xpool{i}"),
                "token0": { "symbol": "WETH", "id": "0x4200000000000000000000000000000000000006" },
                "token1": { "symbol": token1, "id": "0x0" },
                "totalValueLockedUSD": format!("{}", (n - i) * 1_000_000),
                "volumeUSD": "1000",
                "liquidity": "42",
            })
        })
        .collect();
    serde_json::json!({ "data": { "pools": pools } }).to_string()
}

// ── Test sources ────────────────────────────────────────────────────

/// Source that blocks until released and counts how often it was asked.
pub struct GatedSource {
    pub calls: AtomicUsize,
    pub completed: AtomicUsize,
    pub release: Notify,
    pub positions: Vec<LiquidityPosition>,
}

impl GatedSource {
    pub fn new(positions: Vec<LiquidityPosition>) -> Arc<Self> {
        Arc::new(GatedSource {
            calls: AtomicUsize::new(0),
            completed: AtomicUsize::new(0),
            release: Notify::new(),
            positions,
        })
    }

    pub fn demo() -> Arc<Self> {
        Self::new(demo_positions())
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn completed(&self) -> usize {
        self.completed.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl PositionSource for GatedSource {
    async fn fetch_positions(&self) -> Vec<LiquidityPosition> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.release.notified().await;
        self.completed.fetch_add(1, Ordering::SeqCst);
        self.positions.clone()
    }

    fn name(&self) -> &'static str {
        "gated"
    }
}
