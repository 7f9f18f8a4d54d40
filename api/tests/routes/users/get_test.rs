use crate::test_helpers::{get_json_body, get_request, make_app};
use axum::http::StatusCode;
use db::test_utils::setup_test_db;
use sea_orm::DatabaseConnection;
use services::identity::{IdentityService, RegisterUser};
use tower::ServiceExt;

async fn seed_user(db: &DatabaseConnection, email: &str, role: &str) {
    IdentityService::register_user(
        db,
        RegisterUser {
            name: "Staff Member".into(),
            email: email.into(),
            role: role.into(),
            password: "staffpassword".into(),
        },
    )
    .await
    .unwrap();
}

#[tokio::test]
async fn list_users_returns_all_without_filter() {
    let db = setup_test_db().await;
    seed_user(&db, "c1@example.com", "counselor").await;
    seed_user(&db, "a1@example.com", "admin").await;

    let app = make_app(db);
    let response = app.oneshot(get_request("/users")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = get_json_body(response).await;
    assert_eq!(json["success"], true);
    assert_eq!(json["data"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn list_users_filters_by_role() {
    let db = setup_test_db().await;
    seed_user(&db, "c1@example.com", "counselor").await;
    seed_user(&db, "c2@example.com", "counselor").await;
    seed_user(&db, "a1@example.com", "admin").await;

    let app = make_app(db);
    let response = app
        .oneshot(get_request("/users?role=counselor"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = get_json_body(response).await;
    let rows = json["data"].as_array().unwrap();
    assert_eq!(rows.len(), 2);
    assert!(rows.iter().all(|u| u["role"] == "counselor"));
}

#[tokio::test]
async fn list_users_unknown_role_is_empty() {
    let db = setup_test_db().await;
    seed_user(&db, "c1@example.com", "counselor").await;

    let app = make_app(db);
    let response = app
        .oneshot(get_request("/users?role=lecturer"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = get_json_body(response).await;
    assert_eq!(json["data"].as_array().unwrap().len(), 0);
}
