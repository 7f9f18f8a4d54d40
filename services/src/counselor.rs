use chrono::Utc;
use db::models::{student, user};
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set};

use crate::error::ServiceError;

/// Role tag a user must carry to be assignable as a counselor.
pub const COUNSELOR_ROLE: &str = "counselor";

pub struct CounselorService;

impl CounselorService {
    /// Resolves a user id and requires the "counselor" role.
    ///
    /// The check and any subsequent write are separate store operations; a
    /// concurrent role change between them is not guarded against.
    pub async fn require_counselor(
        db: &DatabaseConnection,
        counselor_id: i64,
    ) -> Result<user::Model, ServiceError> {
        match user::Entity::find_by_id(counselor_id).one(db).await? {
            Some(user) if user.role == COUNSELOR_ROLE => Ok(user),
            _ => Err(ServiceError::InvalidCounselor),
        }
    }

    /// Assigns (or replaces) a student's counselor.
    ///
    /// `InvalidCounselor` when the referenced user is absent or not a
    /// counselor; `NotFound` when the student does not exist. The update
    /// never creates a student.
    pub async fn assign_counselor(
        db: &DatabaseConnection,
        roll_number: &str,
        counselor_id: i64,
    ) -> Result<student::Model, ServiceError> {
        let counselor = Self::require_counselor(db, counselor_id).await?;

        let student = student::Entity::find()
            .filter(student::Column::RollNumber.eq(roll_number))
            .one(db)
            .await?
            .ok_or(ServiceError::NotFound("Student"))?;

        let mut active: student::ActiveModel = student.into();
        active.counselor_id = Set(Some(counselor.id));
        active.updated_at = Set(Utc::now());

        let updated = active.update(db).await?;
        tracing::info!(
            roll_number = %updated.roll_number,
            counselor_id = counselor.id,
            "assigned counselor"
        );
        Ok(updated)
    }
}
