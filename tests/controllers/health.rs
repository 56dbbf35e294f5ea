use axum::{body::Body, extract::Request, http::StatusCode};
use mangashelf::controllers::health::HealthResponse;

use crate::{AppStateTest, read_json, spawn_app};

#[tokio::test]
async fn should_be_ok() {
    let test_state = AppStateTest::new(false).await;

    let request = Request::builder().uri("/health").body(Body::empty()).unwrap();

    let response = test_state.generate_response(request).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(response.headers().contains_key("x-request-id"));

    let body: HealthResponse = read_json(response).await;
    assert_eq!(body.status, "ok");
}

#[tokio::test]
async fn should_be_ok_over_the_network() {
    let address = spawn_app().await;

    let response = reqwest::Client::new()
        .get(format!("{}/health", address))
        .send()
        .await
        .expect("Failed to execute request.");

    assert!(response.status().is_success());

    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body, serde_json::json!({ "status": "ok" }));
}

#[tokio::test]
async fn unknown_route_is_not_found() {
    let test_state = AppStateTest::new(false).await;

    let request = Request::builder().uri("/missing").body(Body::empty()).unwrap();

    let response = test_state.generate_response(request).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
