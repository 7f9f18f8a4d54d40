use chrono::{NaiveDate, Utc};
use common::format_validation_errors;
use db::models::{leave_request, student};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};
use validator::Validate;

use crate::counselor::CounselorService;
use crate::error::ServiceError;

/// Status every request carries at creation. No transition operations exist.
pub const STATUS_PENDING: &str = "pending";

#[derive(Debug, Clone, Validate)]
pub struct CreateLeaveRequest {
    #[validate(length(min = 1, message = "Reason cannot be empty"))]
    pub reason: String,

    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

pub struct LeaveService;

impl LeaveService {
    /// Files a leave request for the student with the given roll number.
    ///
    /// `NotFound` when the student does not exist; the record is created
    /// with status "pending" and timestamped for newest-first listing.
    pub async fn create(
        db: &DatabaseConnection,
        roll_number: &str,
        params: CreateLeaveRequest,
    ) -> Result<leave_request::Model, ServiceError> {
        params
            .validate()
            .map_err(|e| ServiceError::Validation(format_validation_errors(&e)))?;

        let student = student::Entity::find()
            .filter(student::Column::RollNumber.eq(roll_number))
            .one(db)
            .await?
            .ok_or(ServiceError::NotFound("Student"))?;

        let now = Utc::now();
        let active = leave_request::ActiveModel {
            student_id: Set(student.id),
            reason: Set(params.reason),
            start_date: Set(params.start_date),
            end_date: Set(params.end_date),
            status: Set(STATUS_PENDING.to_string()),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        Ok(active.insert(db).await?)
    }

    /// All leave requests of one student, newest first.
    pub async fn list_for_student(
        db: &DatabaseConnection,
        roll_number: &str,
    ) -> Result<Vec<leave_request::Model>, ServiceError> {
        let student = student::Entity::find()
            .filter(student::Column::RollNumber.eq(roll_number))
            .one(db)
            .await?
            .ok_or(ServiceError::NotFound("Student"))?;

        Ok(leave_request::Entity::find()
            .filter(leave_request::Column::StudentId.eq(student.id))
            .order_by_desc(leave_request::Column::CreatedAt)
            .order_by_desc(leave_request::Column::Id)
            .all(db)
            .await?)
    }

    /// Leave requests of every student assigned to the given counselor,
    /// newest first, each annotated with its owning student.
    ///
    /// `InvalidCounselor` when the id does not resolve to a user with the
    /// "counselor" role.
    pub async fn list_for_counselor(
        db: &DatabaseConnection,
        counselor_id: i64,
    ) -> Result<Vec<(leave_request::Model, Option<student::Model>)>, ServiceError> {
        CounselorService::require_counselor(db, counselor_id).await?;

        Ok(leave_request::Entity::find()
            .find_also_related(student::Entity)
            .filter(student::Column::CounselorId.eq(counselor_id))
            .order_by_desc(leave_request::Column::CreatedAt)
            .order_by_desc(leave_request::Column::Id)
            .all(db)
            .await?)
    }
}
