use axum::{
    Json,
    extract::{Path, State},
    response::{IntoResponse, Response},
};
use sea_orm::DatabaseConnection;
use serde::Deserialize;
use services::counselor::CounselorService;

use crate::response::ApiResponse;
use crate::routes::common::{StudentResponse, error_response};

#[derive(Debug, Deserialize)]
pub struct AssignCounselorRequest {
    pub counselor_id: i64,
}

/// PUT /students/{roll_number}/assign-counselor
///
/// Assign (or replace) a student's counselor. The referenced user must exist
/// and carry the role "counselor" — the only place role is enforced.
///
/// ### Request Body
/// ```json
/// { "counselor_id": 3 }
/// ```
///
/// ### Responses
/// - `200 OK` + updated student
/// - `400 Bad Request` (user absent or not a counselor)
/// - `404 Not Found` (unknown student; the update never creates)
/// - `500 Internal Server Error`
pub async fn assign_counselor(
    State(db): State<DatabaseConnection>,
    Path(roll_number): Path<String>,
    Json(req): Json<AssignCounselorRequest>,
) -> Response {
    match CounselorService::assign_counselor(&db, &roll_number, req.counselor_id).await {
        Ok(student) => Json(ApiResponse::success(
            StudentResponse::from(student),
            "Counselor assigned successfully",
        ))
        .into_response(),
        Err(e) => error_response(e),
    }
}
