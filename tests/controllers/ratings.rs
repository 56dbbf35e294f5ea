use axum::http::StatusCode;
use mangashelf::model::{Rating, Role};
use serde_json::json;

use crate::{AppStateTest, empty_request, json_request, read_json};

#[tokio::test]
#[ignore = "requires database"]
async fn store_should_upsert_score_and_keep_created_at() {
    let mut test_state = AppStateTest::new(true).await;

    let (_, token) = test_state.generate_jwt_with_user(Role::User).await;

    let response = test_state
        .generate_response(json_request(
            "POST",
            "/user/ratings",
            Some(&token),
            json!({ "manga_id": "m1", "score": 6 }),
        ))
        .await;
    assert_eq!(response.status(), StatusCode::OK);
    let first: Rating = read_json(response).await;

    let response = test_state
        .generate_response(json_request(
            "POST",
            "/user/ratings",
            Some(&token),
            json!({ "manga_id": "m1", "score": 9 }),
        ))
        .await;
    assert_eq!(response.status(), StatusCode::OK);
    let second: Rating = read_json(response).await;

    assert_eq!(first.id, second.id);
    assert_eq!(first.created_at, second.created_at);
    assert_eq!(second.score, 9);

    let response = test_state
        .generate_response(empty_request("GET", "/user/ratings", Some(&token)))
        .await;
    let ratings: Vec<Rating> = read_json(response).await;
    assert_eq!(ratings, vec![second]);

    test_state.cleanup().await;
}

#[tokio::test]
#[ignore = "requires database"]
async fn store_should_accept_out_of_range_score() {
    let mut test_state = AppStateTest::new(true).await;

    let (_, token) = test_state.generate_jwt_with_user(Role::User).await;

    let response = test_state
        .generate_response(json_request(
            "POST",
            "/user/ratings",
            Some(&token),
            json!({ "manga_id": "m1", "score": 42 }),
        ))
        .await;
    assert_eq!(response.status(), StatusCode::OK);

    let rating: Rating = read_json(response).await;
    assert_eq!(rating.score, 42);

    test_state.cleanup().await;
}
