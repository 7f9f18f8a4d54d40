use axum::{
    Json,
    extract::{Path, Query, State},
    response::{IntoResponse, Response},
};
use db::models::{student, user};
use sea_orm::{ColumnTrait, Condition, DatabaseConnection, EntityTrait, QueryFilter};
use serde::Deserialize;
use services::error::ServiceError;
use services::leave::LeaveService;

use crate::response::ApiResponse;
use crate::routes::common::{LeaveRequestResponse, StudentResponse, error_response};

/// GET /students/{roll_number}
///
/// Retrieve a single student; the assigned counselor is included when set.
///
/// ### Responses
/// - `200 OK` + student record
/// - `404 Not Found`
/// - `500 Internal Server Error`
pub async fn get_student(
    State(db): State<DatabaseConnection>,
    Path(roll_number): Path<String>,
) -> Response {
    match student::Entity::find()
        .filter(student::Column::RollNumber.eq(roll_number.as_str()))
        .find_also_related(user::Entity)
        .one(&db)
        .await
    {
        Ok(Some((student, counselor))) => Json(ApiResponse::success(
            StudentResponse::with_counselor(student, counselor),
            "Student retrieved successfully",
        ))
        .into_response(),
        Ok(None) => error_response(ServiceError::NotFound("Student")),
        Err(e) => error_response(ServiceError::Store(e)),
    }
}

#[derive(Debug, Deserialize)]
pub struct ListStudentsQuery {
    pub year: Option<i32>,
    pub counselor_id: Option<i64>,
}

/// GET /students
///
/// List students, optionally filtered by enrollment year and/or assigned
/// counselor. Filters combine conjunctively.
///
/// ### Examples
/// ```http
/// GET /students
/// GET /students?year=2026
/// GET /students?counselor_id=3
/// GET /students?year=2026&counselor_id=3
/// ```
///
/// ### Responses
/// - `200 OK` + list of students (each including its counselor when set)
/// - `500 Internal Server Error`
pub async fn list_students(
    State(db): State<DatabaseConnection>,
    Query(query): Query<ListStudentsQuery>,
) -> Response {
    let mut condition = Condition::all();

    if let Some(year) = query.year {
        condition = condition.add(student::Column::Year.eq(year));
    }

    if let Some(counselor_id) = query.counselor_id {
        condition = condition.add(student::Column::CounselorId.eq(counselor_id));
    }

    match student::Entity::find()
        .filter(condition)
        .find_also_related(user::Entity)
        .all(&db)
        .await
    {
        Ok(rows) => {
            let students: Vec<StudentResponse> = rows
                .into_iter()
                .map(|(student, counselor)| StudentResponse::with_counselor(student, counselor))
                .collect();
            Json(ApiResponse::success(
                students,
                "Students retrieved successfully",
            ))
            .into_response()
        }
        Err(e) => error_response(ServiceError::Store(e)),
    }
}

/// GET /students/{roll_number}/leave-requests
///
/// All leave requests of one student, newest first.
///
/// ### Responses
/// - `200 OK` + ordered list
/// - `404 Not Found` (unknown student)
/// - `500 Internal Server Error`
pub async fn list_leave_requests(
    State(db): State<DatabaseConnection>,
    Path(roll_number): Path<String>,
) -> Response {
    match LeaveService::list_for_student(&db, &roll_number).await {
        Ok(requests) => {
            let requests: Vec<LeaveRequestResponse> =
                requests.into_iter().map(LeaveRequestResponse::from).collect();
            Json(ApiResponse::success(
                requests,
                "Leave requests retrieved successfully",
            ))
            .into_response()
        }
        Err(e) => error_response(e),
    }
}
