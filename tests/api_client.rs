//! REST client behavior against a scripted backend.

mod common;

use libris::api::{ApiClient, ApiError};
use libris::config::ServerConfig;
use libris::model::EntityId;

use common::mock_api::{MockApi, MockResponse};

fn client_for(base_url: String) -> ApiClient {
    ApiClient::new(&ServerConfig {
        base_url,
        connect_timeout_seconds: 2,
    })
}

#[tokio::test(flavor = "multi_thread")]
async fn decodes_a_successful_book() {
    let api = MockApi::start().await;
    api.push(
        "/api/books/42",
        MockResponse::json(r#"{"id": 42, "title": "Dune", "price": 9.99}"#),
    )
    .await;

    let book = client_for(api.base_url())
        .book(EntityId::new(42))
        .await
        .expect("book decodes");
    assert_eq!(book.id, EntityId::new(42));
    assert_eq!(book.price, Some(9.99));
}

#[tokio::test(flavor = "multi_thread")]
async fn four_oh_four_maps_to_not_found() {
    let api = MockApi::start().await;
    api.push("/api/books/9", MockResponse::not_found()).await;

    let error = client_for(api.base_url())
        .book(EntityId::new(9))
        .await
        .expect_err("missing entity");
    assert!(matches!(error, ApiError::NotFound));
}

#[tokio::test(flavor = "multi_thread")]
async fn server_errors_carry_status_and_body_excerpt() {
    let api = MockApi::start().await;
    api.push("/api/authors", MockResponse::error(503, "maintenance"))
        .await;

    let error = client_for(api.base_url())
        .authors()
        .await
        .expect_err("server down");
    match error {
        ApiError::Server { status, message } => {
            assert_eq!(status, 503);
            assert!(message.contains("maintenance"));
        }
        other => panic!("expected server error, got {other:?}"),
    }
}

#[tokio::test(flavor = "multi_thread")]
async fn invalid_json_maps_to_decode_error() {
    let api = MockApi::start().await;
    api.push("/api/authors/7", MockResponse::json("{not json"))
        .await;

    let error = client_for(api.base_url())
        .author(EntityId::new(7))
        .await
        .expect_err("bad payload");
    assert!(matches!(error, ApiError::Decode { .. }));
    assert_eq!(error.kind(), "decode");
}

#[tokio::test(flavor = "multi_thread")]
async fn unreachable_host_maps_to_transport_error() {
    // Nothing listens on this port.
    let client = client_for("http://127.0.0.1:1".to_string());
    let error = client
        .book(EntityId::new(1))
        .await
        .expect_err("no listener");
    assert!(matches!(error, ApiError::Transport { .. }));
    assert_eq!(error.kind(), "transport");
}

#[tokio::test(flavor = "multi_thread")]
async fn endpoints_hit_the_expected_paths() {
    let api = MockApi::start().await;
    api.push("/api/books", MockResponse::json("[]")).await;
    api.push("/api/authors", MockResponse::json("[]")).await;
    api.push("/api/authors/7", MockResponse::json(r#"{"id": 7}"#))
        .await;

    let client = client_for(api.base_url());
    client.books().await.expect("book list");
    client.authors().await.expect("author list");
    client.author(EntityId::new(7)).await.expect("author");

    let paths: Vec<String> = api
        .captured_requests()
        .await
        .into_iter()
        .map(|request| request.path)
        .collect();
    assert_eq!(paths, vec!["/api/books", "/api/authors", "/api/authors/7"]);
}
