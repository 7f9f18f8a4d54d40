use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::NaiveDate;
use common::format_validation_errors;
use sea_orm::DatabaseConnection;
use serde::{Deserialize, Serialize};
use services::identity::{IdentityService, RegisterStudent};
use services::leave::{CreateLeaveRequest, LeaveService};
use validator::Validate;

use crate::response::ApiResponse;
use crate::routes::common::{LeaveRequestResponse, StudentResponse, error_response};

#[derive(Debug, Deserialize, Validate)]
pub struct RegisterStudentRequest {
    #[validate(length(min = 1, message = "Name cannot be empty"))]
    pub name: String,

    #[validate(length(min = 1, message = "Roll number cannot be empty"))]
    pub roll_number: String,

    #[validate(length(min = 1, message = "Registration number cannot be empty"))]
    pub registration_number: String,

    pub year: i32,

    #[validate(length(min = 8, message = "Password must be at least 8 characters"))]
    pub password: String,
}

/// POST /students/register
///
/// Register a new student. The password is hashed before storage and never
/// echoed back.
///
/// ### Request Body
/// ```json
/// {
///   "name": "Asha Naidoo",
///   "roll_number": "R2026-014",
///   "registration_number": "20260014",
///   "year": 2026,
///   "password": "strongpassword"
/// }
/// ```
///
/// ### Responses
/// - `201 Created` + student record
/// - `400 Bad Request` (validation failure)
/// - `409 Conflict` (roll number or registration number already registered)
/// - `500 Internal Server Error`
pub async fn register(
    State(db): State<DatabaseConnection>,
    Json(req): Json<RegisterStudentRequest>,
) -> Response {
    if let Err(e) = req.validate() {
        return (
            StatusCode::BAD_REQUEST,
            Json(ApiResponse::<()>::error(format_validation_errors(&e))),
        )
            .into_response();
    }

    match IdentityService::register_student(
        &db,
        RegisterStudent {
            name: req.name,
            roll_number: req.roll_number,
            registration_number: req.registration_number,
            year: req.year,
            password: req.password,
        },
    )
    .await
    {
        Ok(student) => (
            StatusCode::CREATED,
            Json(ApiResponse::success(
                StudentResponse::from(student),
                "Student registered successfully",
            )),
        )
            .into_response(),
        Err(e) => error_response(e),
    }
}

#[derive(Debug, Deserialize)]
pub struct StudentLoginRequest {
    pub roll_number: String,
    pub password: String,
}

#[derive(Debug, Serialize, Default)]
pub struct StudentLoginResponse {
    pub roll_number: String,
}

/// POST /students/login
///
/// Authenticate a student by roll number. No session or token is issued;
/// the success payload carries the roll number only.
///
/// ### Responses
/// - `200 OK` + `{ "roll_number": "..." }`
/// - `404 Not Found` (unknown roll number)
/// - `401 Unauthorized` (wrong password)
/// - `500 Internal Server Error`
pub async fn login(
    State(db): State<DatabaseConnection>,
    Json(req): Json<StudentLoginRequest>,
) -> Response {
    match IdentityService::login_student(&db, &req.roll_number, &req.password).await {
        Ok(student) => Json(ApiResponse::success(
            StudentLoginResponse {
                roll_number: student.roll_number,
            },
            "Login successful",
        ))
        .into_response(),
        Err(e) => error_response(e),
    }
}

#[derive(Debug, Deserialize, Validate)]
pub struct CreateLeaveRequestBody {
    #[validate(length(min = 1, message = "Reason cannot be empty"))]
    pub reason: String,

    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

/// POST /students/{roll_number}/leave-requests
///
/// File a leave request for a student. Status is fixed to "pending" at
/// creation; there are no transition endpoints.
///
/// ### Responses
/// - `201 Created` + leave request
/// - `400 Bad Request` (validation failure)
/// - `404 Not Found` (unknown student)
/// - `500 Internal Server Error`
pub async fn create_leave_request(
    State(db): State<DatabaseConnection>,
    Path(roll_number): Path<String>,
    Json(req): Json<CreateLeaveRequestBody>,
) -> Response {
    if let Err(e) = req.validate() {
        return (
            StatusCode::BAD_REQUEST,
            Json(ApiResponse::<()>::error(format_validation_errors(&e))),
        )
            .into_response();
    }

    match LeaveService::create(
        &db,
        &roll_number,
        CreateLeaveRequest {
            reason: req.reason,
            start_date: req.start_date,
            end_date: req.end_date,
        },
    )
    .await
    {
        Ok(request) => (
            StatusCode::CREATED,
            Json(ApiResponse::success(
                LeaveRequestResponse::from(request),
                "Leave request created successfully",
            )),
        )
            .into_response(),
        Err(e) => error_response(e),
    }
}
