//! Response views and error mapping shared across route groups.
//!
//! View structs control exactly what leaves the API: `password_hash` never
//! appears in a response body.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::NaiveDate;
use db::models::{leave_request, student, user};
use serde::Serialize;
use services::error::ServiceError;

use crate::response::ApiResponse;

/// Maps a domain failure onto its HTTP status and error envelope.
///
/// NotFound → 404, Validation/InvalidCounselor → 400, InvalidCredentials →
/// 401, DuplicateKey → 409, Store → 500.
pub fn error_response(err: ServiceError) -> Response {
    let status = match &err {
        ServiceError::Validation(_) | ServiceError::InvalidCounselor => StatusCode::BAD_REQUEST,
        ServiceError::InvalidCredentials => StatusCode::UNAUTHORIZED,
        ServiceError::NotFound(_) => StatusCode::NOT_FOUND,
        ServiceError::DuplicateKey(_) => StatusCode::CONFLICT,
        ServiceError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };

    (status, Json(ApiResponse::<()>::error(err.to_string()))).into_response()
}

#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub role: String,
    pub created_at: String,
    pub updated_at: String,
}

impl From<user::Model> for UserResponse {
    fn from(user: user::Model) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
            role: user.role,
            created_at: user.created_at.to_string(),
            updated_at: user.updated_at.to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct StudentResponse {
    pub id: i64,
    pub name: String,
    pub roll_number: String,
    pub registration_number: String,
    pub year: i32,
    pub counselor_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub counselor: Option<UserResponse>,
    pub created_at: String,
    pub updated_at: String,
}

impl From<student::Model> for StudentResponse {
    fn from(student: student::Model) -> Self {
        Self {
            id: student.id,
            name: student.name,
            roll_number: student.roll_number,
            registration_number: student.registration_number,
            year: student.year,
            counselor_id: student.counselor_id,
            counselor: None,
            created_at: student.created_at.to_string(),
            updated_at: student.updated_at.to_string(),
        }
    }
}

impl StudentResponse {
    pub fn with_counselor(student: student::Model, counselor: Option<user::Model>) -> Self {
        let mut view = Self::from(student);
        view.counselor = counselor.map(UserResponse::from);
        view
    }
}

#[derive(Debug, Serialize)]
pub struct LeaveRequestResponse {
    pub id: i64,
    pub student_id: i64,
    pub reason: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub student: Option<StudentResponse>,
    pub created_at: String,
}

impl From<leave_request::Model> for LeaveRequestResponse {
    fn from(request: leave_request::Model) -> Self {
        Self {
            id: request.id,
            student_id: request.student_id,
            reason: request.reason,
            start_date: request.start_date,
            end_date: request.end_date,
            status: request.status,
            student: None,
            created_at: request.created_at.to_string(),
        }
    }
}

impl LeaveRequestResponse {
    pub fn with_student(
        request: leave_request::Model,
        student: Option<student::Model>,
    ) -> Self {
        let mut view = Self::from(request);
        view.student = student.map(StudentResponse::from);
        view
    }
}
