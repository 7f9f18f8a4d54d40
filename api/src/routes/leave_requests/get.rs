use axum::{
    Json,
    extract::{Query, State},
    response::{IntoResponse, Response},
};
use sea_orm::DatabaseConnection;
use serde::Deserialize;
use services::leave::LeaveService;

use crate::response::ApiResponse;
use crate::routes::common::{LeaveRequestResponse, error_response};

#[derive(Debug, Deserialize)]
pub struct ListLeaveRequestsQuery {
    pub counselor_id: i64,
}

/// GET /leave-requests?counselor_id=N
///
/// All leave requests of students assigned to the given counselor, newest
/// first, each annotated with its owning student.
///
/// ### Responses
/// - `200 OK` + ordered list
/// - `400 Bad Request` (user absent or not a counselor)
/// - `500 Internal Server Error`
pub async fn list_leave_requests(
    State(db): State<DatabaseConnection>,
    Query(query): Query<ListLeaveRequestsQuery>,
) -> Response {
    match LeaveService::list_for_counselor(&db, query.counselor_id).await {
        Ok(rows) => {
            let requests: Vec<LeaveRequestResponse> = rows
                .into_iter()
                .map(|(request, student)| LeaveRequestResponse::with_student(request, student))
                .collect();
            Json(ApiResponse::success(
                requests,
                "Leave requests retrieved successfully",
            ))
            .into_response()
        }
        Err(e) => error_response(e),
    }
}
