use axum::http::StatusCode;
use mangashelf::model::Role;
use serde_json::json;

use crate::{AppStateTest, empty_request, json_request, read_json};

#[tokio::test]
#[ignore = "requires database"]
async fn deleting_user_cascades_to_owned_rows() {
    let mut test_state = AppStateTest::new(true).await;

    let (user, token) = test_state.generate_jwt_with_user(Role::User).await;

    let requests = [
        ("/user/bookmarks", json!({ "manga_id": "m1" })),
        ("/user/history", json!({ "manga_id": "m1", "chapter_id": "c1", "page": 1 })),
        ("/user/ratings", json!({ "manga_id": "m1", "score": 8 })),
        ("/user/status", json!({ "manga_id": "m1", "status": "planned" })),
    ];
    for (uri, body) in requests {
        let response = test_state
            .generate_response(json_request("POST", uri, Some(&token), body))
            .await;
        assert_eq!(response.status(), StatusCode::OK);
    }

    mangashelf::db::user::delete_user(&test_state.app_state.pool, user.id)
        .await
        .unwrap();

    for table in ["bookmarks", "reading_history", "ratings", "manga_statuses"] {
        let count: i64 = sqlx::query_scalar(&format!(
            "SELECT COUNT(*) FROM {} WHERE user_id = $1",
            table
        ))
        .bind(user.id)
        .fetch_one(&test_state.app_state.pool)
        .await
        .unwrap();
        assert_eq!(count, 0, "rows left in {}", table);
    }

    test_state.cleanup().await;
}

#[tokio::test]
#[ignore = "requires database"]
async fn promoted_user_gains_admin_access() {
    let mut test_state = AppStateTest::new(true).await;

    let (user, token) = test_state.generate_jwt_with_user(Role::User).await;

    let response = test_state
        .generate_response(empty_request("GET", "/admin/stats", Some(&token)))
        .await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let body: serde_json::Value = read_json(response).await;
    assert_eq!(
        body["detail"],
        "You do not have permission to access this resource"
    );

    mangashelf::db::user::update_user_role(&test_state.app_state.pool, user.id, Role::Admin)
        .await
        .unwrap();

    // Same token: the role is read from the store on every request.
    let response = test_state
        .generate_response(empty_request("GET", "/admin/stats", Some(&token)))
        .await;
    assert_eq!(response.status(), StatusCode::OK);

    test_state.cleanup().await;
}
