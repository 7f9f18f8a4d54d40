use crate::test_helpers::{get_json_body, get_request, json_request, make_app};
use axum::http::StatusCode;
use db::test_utils::setup_test_db;
use sea_orm::DatabaseConnection;
use serde_json::json;
use services::counselor::CounselorService;
use services::identity::{IdentityService, RegisterStudent, RegisterUser};
use services::leave::{CreateLeaveRequest, LeaveService};
use tower::ServiceExt;

async fn seed_student(db: &DatabaseConnection, roll: &str) {
    IdentityService::register_student(
        db,
        RegisterStudent {
            name: format!("Student {roll}"),
            roll_number: roll.into(),
            registration_number: format!("REG-{roll}"),
            year: 2026,
            password: "studentpass".into(),
        },
    )
    .await
    .unwrap();
}

async fn seed_user(db: &DatabaseConnection, email: &str, role: &str) -> i64 {
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
    .unwrap()
    .id
}

fn leave(reason: &str) -> CreateLeaveRequest {
    CreateLeaveRequest {
        reason: reason.into(),
        start_date: chrono::NaiveDate::from_ymd_opt(2026, 9, 1).unwrap(),
        end_date: chrono::NaiveDate::from_ymd_opt(2026, 9, 3).unwrap(),
    }
}

#[tokio::test]
async fn list_for_counselor_includes_student_and_scopes() {
    let db = setup_test_db().await;
    seed_student(&db, "R1").await;
    seed_student(&db, "R2").await;
    let mine = seed_user(&db, "mine@example.com", "counselor").await;
    let other = seed_user(&db, "other@example.com", "counselor").await;

    CounselorService::assign_counselor(&db, "R1", mine).await.unwrap();
    CounselorService::assign_counselor(&db, "R2", other).await.unwrap();

    LeaveService::create(&db, "R1", leave("mine-1")).await.unwrap();
    LeaveService::create(&db, "R2", leave("other-1")).await.unwrap();
    LeaveService::create(&db, "R1", leave("mine-2")).await.unwrap();

    let app = make_app(db);
    let uri = format!("/leave-requests?counselor_id={mine}");
    let response = app.oneshot(get_request(&uri)).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = get_json_body(response).await;
    let rows = json["data"].as_array().unwrap();
    assert_eq!(rows.len(), 2);
    // newest first, only students assigned to this counselor
    assert_eq!(rows[0]["reason"], "mine-2");
    assert_eq!(rows[1]["reason"], "mine-1");
    assert!(rows.iter().all(|r| r["student"]["roll_number"] == "R1"));
}

#[tokio::test]
async fn list_for_counselor_rejects_non_counselor() {
    let db = setup_test_db().await;
    let admin = seed_user(&db, "admin@example.com", "admin").await;

    let app = make_app(db);
    let uri = format!("/leave-requests?counselor_id={admin}");
    let response = app.oneshot(get_request(&uri)).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = get_json_body(response).await;
    assert_eq!(
        json["message"],
        "Counselor does not exist or is not a valid counselor"
    );
}

#[tokio::test]
async fn list_for_counselor_unknown_id() {
    let db = setup_test_db().await;
    let app = make_app(db);

    let response = app
        .oneshot(get_request("/leave-requests?counselor_id=4242"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

/// Full scenario over the HTTP surface: register a student and a counselor,
/// log in, assign, file a leave request and read it back from the
/// counselor's view.
#[tokio::test]
async fn end_to_end_counselor_flow() {
    let db = setup_test_db().await;
    let app = make_app(db);

    let register_student = json!({
        "name": "S1",
        "roll_number": "R1",
        "registration_number": "REG1",
        "year": 2026,
        "password": "pw1secret"
    });
    let response = app
        .clone()
        .oneshot(json_request("POST", "/students/register", &register_student))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let login_ok = json!({ "roll_number": "R1", "password": "pw1secret" });
    let response = app
        .clone()
        .oneshot(json_request("POST", "/students/login", &login_ok))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let json = get_json_body(response).await;
    assert_eq!(json["data"]["roll_number"], "R1");

    let login_bad = json!({ "roll_number": "R1", "password": "wrong" });
    let response = app
        .clone()
        .oneshot(json_request("POST", "/students/login", &login_bad))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let register_counselor = json!({
        "name": "C1",
        "email": "c1@example.com",
        "role": "counselor",
        "password": "staffpassword"
    });
    let response = app
        .clone()
        .oneshot(json_request("POST", "/users/register", &register_counselor))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    let counselor_id = get_json_body(response).await["data"]["id"].as_i64().unwrap();

    let assign = json!({ "counselor_id": counselor_id });
    let response = app
        .clone()
        .oneshot(json_request("PUT", "/students/R1/assign-counselor", &assign))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = app
        .clone()
        .oneshot(get_request("/students/R1"))
        .await
        .unwrap();
    let json = get_json_body(response).await;
    assert_eq!(json["data"]["counselor"]["name"], "C1");

    let leave_req = json!({
        "reason": "medical",
        "start_date": "2026-10-05",
        "end_date": "2026-10-07"
    });
    let response = app
        .clone()
        .oneshot(json_request("POST", "/students/R1/leave-requests", &leave_req))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let uri = format!("/leave-requests?counselor_id={counselor_id}");
    let response = app.oneshot(get_request(&uri)).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let json = get_json_body(response).await;
    let rows = json["data"].as_array().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["reason"], "medical");
    assert_eq!(rows[0]["status"], "pending");
    assert_eq!(rows[0]["student"]["roll_number"], "R1");
}
