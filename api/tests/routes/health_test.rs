use crate::test_helpers::{get_json_body, get_request, make_app};
use axum::http::StatusCode;
use db::test_utils::setup_test_db;
use tower::ServiceExt;

#[tokio::test]
async fn health_returns_200() {
    let db = setup_test_db().await;
    let app = make_app(db);

    let response = app.oneshot(get_request("/health")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = get_json_body(response).await;
    assert_eq!(json["success"], true);
    assert_eq!(json["data"], "OK");
}
