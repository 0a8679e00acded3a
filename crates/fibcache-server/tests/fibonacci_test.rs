//! Integration tests for the Fibonacci endpoint.

mod helpers;

use axum::http::StatusCode;
use fibcache_core::{CacheStore, MemoryStore, engine};
use fibcache_server::create_router;
use helpers::{TestClient, client, client_with_broken_store, test_state};

#[tokio::test]
async fn computes_f5_on_a_cold_cache() {
    let (store, state) = test_state();
    let client = TestClient::new(create_router(state));

    let response = client.get("/fibonacci/5").await;
    response.assert_status(StatusCode::OK);

    let body = response.json();
    assert_eq!(body["n"].as_i64(), Some(5));
    assert_eq!(body["fibonacci"].as_u64(), Some(5));
    assert_eq!(body["stats"]["cache_hits"].as_u64(), Some(0));
    assert_eq!(body["stats"]["cache_misses"].as_u64(), Some(4));
    assert_eq!(body["stats"]["cache_miss_rate_percent"].as_f64(), Some(100.0));

    // Indices 2..=5 were backfilled into the store.
    assert_eq!(store.len(), 4);
    assert_eq!(store.get("fib:4").await.unwrap().as_deref(), Some("3"));
}

#[tokio::test]
async fn repeat_request_is_a_direct_hit() {
    let client = client();

    client.get("/fibonacci/5").await.assert_status(StatusCode::OK);
    let body = client.get("/fibonacci/5").await.json();

    assert_eq!(body["fibonacci"].as_u64(), Some(5));
    assert_eq!(body["stats"]["cache_hits"].as_u64(), Some(1));
    assert_eq!(body["stats"]["cache_misses"].as_u64(), Some(0));
    assert_eq!(body["stats"]["cache_miss_rate_percent"].as_f64(), Some(0.0));
}

#[tokio::test]
async fn extends_from_a_cached_checkpoint() {
    let client = client();

    client.get("/fibonacci/5").await.assert_status(StatusCode::OK);
    let body = client.get("/fibonacci/7").await.json();

    assert_eq!(body["fibonacci"].as_u64(), Some(13));
    assert_eq!(body["stats"]["cache_hits"].as_u64(), Some(2));
    assert_eq!(body["stats"]["cache_misses"].as_u64(), Some(2));
    assert_eq!(body["stats"]["cache_miss_rate_percent"].as_f64(), Some(50.0));
}

#[tokio::test]
async fn base_cases_bypass_the_store() {
    let (store, state) = test_state();
    let client = TestClient::new(create_router(state));

    for (n, expected) in [(0u64, 0u64), (1, 1)] {
        let body = client.get(&format!("/fibonacci/{n}")).await.json();
        assert_eq!(body["fibonacci"].as_u64(), Some(expected));
        assert_eq!(body["stats"]["cache_hits"].as_u64(), Some(0));
        assert_eq!(body["stats"]["cache_misses"].as_u64(), Some(0));
    }

    assert!(store.is_empty());
}

#[tokio::test]
async fn reports_computation_time() {
    let body = client().get("/fibonacci/20").await.json();

    let elapsed = body["computation_time_ms"].as_f64().unwrap();
    assert!(elapsed >= 0.0);
}

#[tokio::test]
async fn negative_index_is_rejected() {
    let response = client().get("/fibonacci/-1").await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body = response.json();
    assert!(body["error"].as_str().unwrap().contains("negative"));
}

#[tokio::test]
async fn oversized_index_is_rejected() {
    let response = client().get("/fibonacci/100001").await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body = response.json();
    assert!(body["error"].as_str().unwrap().contains("max 100,000"));
}

#[tokio::test]
async fn non_numeric_index_is_a_client_error() {
    let response = client().get("/fibonacci/twelve").await;

    response.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn large_results_serialize_with_full_precision() {
    // F(300) overflows every fixed-width integer; the JSON body must carry
    // the exact decimal expansion.
    let reference = engine::compute(&MemoryStore::new(), 300).await.unwrap();
    let expected = reference.value.to_string();
    assert!(expected.len() > 39);

    let body = client().get("/fibonacci/300").await.json();
    assert_eq!(body["fibonacci"].to_string(), expected);
}

#[tokio::test]
async fn store_failure_surfaces_as_internal_error() {
    let response = client_with_broken_store().get("/fibonacci/5").await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    let body = response.json();
    assert!(body["error"].as_str().unwrap().contains("unavailable"));
}
