use axum::http::StatusCode;
use mangashelf::model::{BookmarkCount, ReadingStatus, Role, Stats};
use serde_json::json;

use crate::{AppStateTest, empty_request, json_request, read_json};

#[tokio::test]
async fn stats_should_be_unauthorized_without_token() {
    let test_state = AppStateTest::new(false).await;

    let response = test_state
        .generate_response(empty_request("GET", "/admin/stats", None))
        .await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
#[ignore = "requires database"]
async fn stats_should_be_forbidden_for_regular_user() {
    let mut test_state = AppStateTest::new(true).await;

    let (_, token) = test_state.generate_jwt_with_user(Role::User).await;

    let response = test_state
        .generate_response(empty_request("GET", "/admin/stats", Some(&token)))
        .await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    test_state.cleanup().await;
}

#[tokio::test]
#[ignore = "requires database"]
async fn stats_should_be_empty_on_fresh_database() {
    let mut test_state = AppStateTest::new(true).await;

    let (_, token) = test_state.generate_jwt_with_user(Role::Admin).await;

    let response = test_state
        .generate_response(empty_request("GET", "/admin/stats", Some(&token)))
        .await;
    assert_eq!(response.status(), StatusCode::OK);

    let stats: Stats = read_json(response).await;
    assert_eq!(stats.users_total, 1);
    assert!(stats.manga_status_distribution.is_empty());
    assert!(stats.top_bookmarked_manga.is_empty());
    assert_eq!(stats.total_reading_entries, 0);

    test_state.cleanup().await;
}

#[tokio::test]
#[ignore = "requires database"]
async fn stats_should_aggregate_all_users() {
    let mut test_state = AppStateTest::new(true).await;

    let (_, admin_token) = test_state.generate_jwt_with_user(Role::Admin).await;

    // Bookmark counts: m1 x3, m2 x2, then m3..m6 once each.
    let bookmarks: [&[&str]; 3] = [
        &["m1", "m2", "m3", "m4"],
        &["m1", "m2", "m5"],
        &["m1", "m6"],
    ];
    let statuses = ["reading", "reading", "completed"];

    for (manga_ids, status) in bookmarks.iter().zip(statuses) {
        let (_, token) = test_state.generate_jwt_with_user(Role::User).await;

        for manga_id in manga_ids.iter() {
            let response = test_state
                .generate_response(json_request(
                    "POST",
                    "/user/bookmarks",
                    Some(&token),
                    json!({ "manga_id": manga_id }),
                ))
                .await;
            assert_eq!(response.status(), StatusCode::OK);
        }

        let response = test_state
            .generate_response(json_request(
                "POST",
                "/user/status",
                Some(&token),
                json!({ "manga_id": "m1", "status": status }),
            ))
            .await;
        assert_eq!(response.status(), StatusCode::OK);

        let response = test_state
            .generate_response(json_request(
                "POST",
                "/user/history",
                Some(&token),
                json!({ "manga_id": "m1", "chapter_id": "c1", "page": 2 }),
            ))
            .await;
        assert_eq!(response.status(), StatusCode::OK);
    }

    let response = test_state
        .generate_response(empty_request("GET", "/admin/stats", Some(&admin_token)))
        .await;
    assert_eq!(response.status(), StatusCode::OK);

    let stats: Stats = read_json(response).await;
    assert_eq!(stats.users_total, 4);
    assert_eq!(stats.total_reading_entries, 3);
    assert_eq!(stats.manga_status_distribution.len(), 2);
    assert_eq!(
        stats.manga_status_distribution.get(&ReadingStatus::Reading),
        Some(&2)
    );
    assert_eq!(
        stats.manga_status_distribution.get(&ReadingStatus::Completed),
        Some(&1)
    );

    let expected_top = vec![
        BookmarkCount { id: "m1".into(), count: 3 },
        BookmarkCount { id: "m2".into(), count: 2 },
        BookmarkCount { id: "m3".into(), count: 1 },
        BookmarkCount { id: "m4".into(), count: 1 },
        BookmarkCount { id: "m5".into(), count: 1 },
    ];
    assert_eq!(stats.top_bookmarked_manga, expected_top);

    test_state.cleanup().await;
}
