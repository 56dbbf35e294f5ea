use axum::http::StatusCode;
use mangashelf::model::{MangaStatus, ReadingStatus, Role};
use serde_json::json;

use crate::{AppStateTest, empty_request, json_request, read_json};

#[tokio::test]
async fn store_should_be_unauthorized_without_token() {
    let test_state = AppStateTest::new(false).await;

    let response = test_state
        .generate_response(json_request(
            "POST",
            "/user/status",
            None,
            json!({ "manga_id": "m1", "status": "reading" }),
        ))
        .await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
#[ignore = "requires database"]
async fn store_should_leave_one_row_with_latest_status() {
    let mut test_state = AppStateTest::new(true).await;

    let (user, token) = test_state.generate_jwt_with_user(Role::User).await;

    for status in ["reading", "on_hold"] {
        let response = test_state
            .generate_response(json_request(
                "POST",
                "/user/status",
                Some(&token),
                json!({ "manga_id": "m1", "status": status }),
            ))
            .await;
        assert_eq!(response.status(), StatusCode::OK);
    }

    let count: i64 = sqlx::query_scalar(
        "SELECT COUNT(*) FROM manga_statuses WHERE user_id = $1 AND manga_id = 'm1'",
    )
    .bind(user.id)
    .fetch_one(&test_state.app_state.pool)
    .await
    .unwrap();
    assert_eq!(count, 1);

    let response = test_state
        .generate_response(empty_request("GET", "/user/status", Some(&token)))
        .await;
    let statuses: Vec<MangaStatus> = read_json(response).await;
    assert_eq!(statuses.len(), 1);
    assert_eq!(statuses[0].status, ReadingStatus::OnHold);

    test_state.cleanup().await;
}

#[tokio::test]
#[ignore = "requires database"]
async fn store_should_reject_unknown_status() {
    let mut test_state = AppStateTest::new(true).await;

    let (_, token) = test_state.generate_jwt_with_user(Role::User).await;

    let response = test_state
        .generate_response(json_request(
            "POST",
            "/user/status",
            Some(&token),
            json!({ "manga_id": "m1", "status": "finished" }),
        ))
        .await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    test_state.cleanup().await;
}
