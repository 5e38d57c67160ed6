mod common;

use axum::http::StatusCode;

use base_leaderboard::config::{DEFAULT_SUBGRAPH_ID, GraphConfig};
use base_leaderboard::subgraph::{
    DEMO_FIRST_ID, PositionSource, SubgraphSource, demo_positions, fetch_positions,
};

use common::*;

fn client() -> reqwest::Client {
    reqwest::Client::new()
}

// ── Live path ────────────────────────────────────────────────────────

#[tokio::test]
async fn test_live_pools_are_mapped() {
    let gateway = spawn_gateway(StatusCode::OK, pools_response(3)).await;

    let positions = fetch_positions(&client(), &gateway.config()).await;

    assert_eq!(positions.len(), 3);
    assert_eq!(positions[0].id, "0xpool0");
    assert_eq!(positions[0].user.id, "0xpool0");
    assert_eq!(positions[0].pair.id, "0xpool0");
    assert_eq!(positions[0].pair.reserve_usd, "3000000");
    assert_eq!(positions[0].pair.volume_usd.as_deref(), Some("1000"));
    assert_eq!(positions[0].liquidity_token_balance, "42");
    assert_eq!(positions[1].pair.label(), "WETH/cbBTC");
    assert_ne!(positions[0].id, DEMO_FIRST_ID);
}

#[tokio::test]
async fn test_sends_single_graphql_post() {
    let gateway = spawn_gateway(StatusCode::OK, pools_response(1)).await;

    fetch_positions(&client(), &gateway.config()).await;

    let requests = gateway.requests.lock().await.clone();
    assert_eq!(requests.len(), 1);

    let req = &requests[0];
    assert_eq!(
        req.path,
        format!("/api/test-key/subgraphs/id/{DEFAULT_SUBGRAPH_ID}")
    );
    assert_eq!(req.content_type.as_deref(), Some("application/json"));

    let body: serde_json::Value = serde_json::from_str(&req.body).unwrap();
    let query = body["query"].as_str().unwrap();
    assert!(query.contains("pools(first: 10, orderBy: totalValueLockedUSD, orderDirection: desc)"));
    assert!(query.contains("liquidity"));
}

#[tokio::test]
async fn test_live_result_bounded_to_ten() {
    let gateway = spawn_gateway(StatusCode::OK, pools_response(12)).await;

    let positions = fetch_positions(&client(), &gateway.config()).await;

    assert_eq!(positions.len(), 10);
    assert_eq!(positions[9].id, "0xpool9");
}

// ── Fallback path ────────────────────────────────────────────────────

#[tokio::test]
async fn test_empty_pools_fall_back_to_demo() {
    let gateway = spawn_gateway(StatusCode::OK, r#"{"data":{"pools":[]}}"#).await;

    let positions = fetch_positions(&client(), &gateway.config()).await;

    assert_eq!(positions, demo_positions());
}

#[tokio::test]
async fn test_graphql_errors_fall_back_to_demo() {
    let gateway = spawn_gateway(
        StatusCode::OK,
        r#"{"errors":[{"message":"auth error: malformed API key"}]}"#,
    )
    .await;

    let positions = fetch_positions(&client(), &gateway.config()).await;

    assert_eq!(positions, demo_positions());
}

#[tokio::test]
async fn test_error_status_falls_back_to_demo() {
    // Even a well-formed body is ignored on a non-2xx status
    let gateway = spawn_gateway(StatusCode::INTERNAL_SERVER_ERROR, pools_response(3)).await;

    let positions = fetch_positions(&client(), &gateway.config()).await;

    assert_eq!(positions, demo_positions());
    assert_eq!(gateway.hits().await, 1);
}

#[tokio::test]
async fn test_non_json_falls_back_to_demo() {
    let gateway = spawn_gateway(StatusCode::OK, "<html>upstream timeout</html>").await;

    let positions = fetch_positions(&client(), &gateway.config()).await;

    assert_eq!(positions, demo_positions());
}

#[tokio::test]
async fn test_garbled_record_falls_back_to_demo() {
    let body = r#"{"data":{"pools":[
        {"id":"0xa","token0":{"symbol":"WETH"},"token1":{"symbol":"USDC"},
         "totalValueLockedUSD":"10","volumeUSD":"1","liquidity":"1"},
        {"id":"0xb","token0":null,"token1":{"symbol":"USDC"},
         "totalValueLockedUSD":"5","volumeUSD":"1","liquidity":"1"}
    ]}}"#;
    let gateway = spawn_gateway(StatusCode::OK, body).await;

    let positions = fetch_positions(&client(), &gateway.config()).await;

    // No partial list: the good first record is dropped too
    assert_eq!(positions, demo_positions());
}

#[tokio::test]
async fn test_unreachable_gateway_falls_back_to_demo() {
    // Grab a free port, then close it
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let config = GraphConfig {
        gateway_url: format!("http://{addr}/api"),
        ..Default::default()
    };
    let positions = fetch_positions(&client(), &config).await;

    assert_eq!(positions, demo_positions());
}

// ── Source trait ─────────────────────────────────────────────────────

#[tokio::test]
async fn test_subgraph_source_uses_config() {
    let gateway = spawn_gateway(StatusCode::OK, pools_response(2)).await;
    let mut config = gateway.config();
    config.timeout = Some(std::time::Duration::from_secs(5));

    let source = SubgraphSource::new(config).unwrap();
    assert_eq!(source.name(), "subgraph");
    assert_eq!(source.config().api_key, "test-key");
    assert_eq!(source.config().timeout, Some(std::time::Duration::from_secs(5)));
    assert!(source.config().endpoint().starts_with(&gateway.base_url));

    let positions = source.fetch_positions().await;
    assert_eq!(positions.len(), 2);
    assert_eq!(gateway.hits().await, 1);
}
