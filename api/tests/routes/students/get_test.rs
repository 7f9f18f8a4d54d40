use crate::test_helpers::{get_json_body, get_request, make_app};
use axum::http::StatusCode;
use db::test_utils::setup_test_db;
use sea_orm::DatabaseConnection;
use services::counselor::CounselorService;
use services::identity::{IdentityService, RegisterStudent, RegisterUser};
use services::leave::{CreateLeaveRequest, LeaveService};
use tower::ServiceExt;

async fn seed_student(db: &DatabaseConnection, roll: &str, year: i32) {
    IdentityService::register_student(
        db,
        RegisterStudent {
            name: format!("Student {roll}"),
            roll_number: roll.into(),
            registration_number: format!("REG-{roll}"),
            year,
            password: "studentpass".into(),
        },
    )
    .await
    .unwrap();
}

async fn seed_counselor(db: &DatabaseConnection, email: &str) -> i64 {
    IdentityService::register_user(
        db,
        RegisterUser {
            name: "Carol Dlamini".into(),
            email: email.into(),
            role: "counselor".into(),
            password: "staffpassword".into(),
        },
    )
    .await
    .unwrap()
    .id
}

#[tokio::test]
async fn get_student_includes_counselor() {
    let db = setup_test_db().await;
    seed_student(&db, "R1", 2026).await;
    let counselor_id = seed_counselor(&db, "carol@example.com").await;
    CounselorService::assign_counselor(&db, "R1", counselor_id)
        .await
        .unwrap();

    let app = make_app(db);
    let response = app.oneshot(get_request("/students/R1")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = get_json_body(response).await;
    let data = &json["data"];
    assert_eq!(data["roll_number"], "R1");
    assert_eq!(data["counselor_id"], counselor_id);
    assert_eq!(data["counselor"]["email"], "carol@example.com");
    assert_eq!(data["counselor"]["role"], "counselor");
    assert!(data["counselor"].get("password_hash").is_none());
}

#[tokio::test]
async fn get_student_without_counselor_omits_field() {
    let db = setup_test_db().await;
    seed_student(&db, "R1", 2026).await;

    let app = make_app(db);
    let response = app.oneshot(get_request("/students/R1")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = get_json_body(response).await;
    assert!(json["data"]["counselor_id"].is_null());
    assert!(json["data"].get("counselor").is_none());
}

#[tokio::test]
async fn get_student_not_found() {
    let db = setup_test_db().await;
    let app = make_app(db);

    let response = app.oneshot(get_request("/students/R404")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let json = get_json_body(response).await;
    assert_eq!(json["success"], false);
    assert_eq!(json["message"], "Student not found");
}

#[tokio::test]
async fn list_students_filters_by_year_and_counselor() {
    let db = setup_test_db().await;
    seed_student(&db, "R1", 2025).await;
    seed_student(&db, "R2", 2026).await;
    seed_student(&db, "R3", 2026).await;
    let counselor_id = seed_counselor(&db, "carol@example.com").await;
    CounselorService::assign_counselor(&db, "R2", counselor_id)
        .await
        .unwrap();

    let app = make_app(db);

    let response = app.clone().oneshot(get_request("/students")).await.unwrap();
    let json = get_json_body(response).await;
    assert_eq!(json["data"].as_array().unwrap().len(), 3);

    let response = app
        .clone()
        .oneshot(get_request("/students?year=2026"))
        .await
        .unwrap();
    let json = get_json_body(response).await;
    assert_eq!(json["data"].as_array().unwrap().len(), 2);

    let uri = format!("/students?counselor_id={counselor_id}");
    let response = app.clone().oneshot(get_request(&uri)).await.unwrap();
    let json = get_json_body(response).await;
    let rows = json["data"].as_array().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["roll_number"], "R2");
    assert_eq!(rows[0]["counselor"]["email"], "carol@example.com");

    let uri = format!("/students?year=2025&counselor_id={counselor_id}");
    let response = app.oneshot(get_request(&uri)).await.unwrap();
    let json = get_json_body(response).await;
    assert_eq!(json["data"].as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn list_leave_requests_newest_first() {
    let db = setup_test_db().await;
    seed_student(&db, "R1", 2026).await;

    for reason in ["first", "second", "third"] {
        LeaveService::create(
            &db,
            "R1",
            CreateLeaveRequest {
                reason: reason.into(),
                start_date: chrono::NaiveDate::from_ymd_opt(2026, 9, 1).unwrap(),
                end_date: chrono::NaiveDate::from_ymd_opt(2026, 9, 3).unwrap(),
            },
        )
        .await
        .unwrap();
    }

    let app = make_app(db);
    let response = app
        .oneshot(get_request("/students/R1/leave-requests"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = get_json_body(response).await;
    let reasons: Vec<&str> = json["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["reason"].as_str().unwrap())
        .collect();
    assert_eq!(reasons, vec!["third", "second", "first"]);
}

#[tokio::test]
async fn list_leave_requests_unknown_student() {
    let db = setup_test_db().await;
    let app = make_app(db);

    let response = app
        .oneshot(get_request("/students/R404/leave-requests"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
