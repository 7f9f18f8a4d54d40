use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use serde::Serialize;

/// Represents a registered student in the `students` table.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize)]
#[sea_orm(table_name = "students")]
pub struct Model {
    /// Primary key ID (auto-incremented).
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Display name.
    pub name: String,
    /// Unique roll number, immutable after registration.
    pub roll_number: String,
    /// Unique registration number.
    pub registration_number: String,
    /// Enrollment year.
    pub year: i32,
    /// Securely hashed password string.
    #[serde(skip_serializing)]
    pub password_hash: String,
    /// Assigned counselor. When set, references a user whose role was
    /// "counselor" at assignment time.
    pub counselor_id: Option<i64>,
    /// Timestamp when the student was registered.
    pub created_at: DateTime<Utc>,
    /// Timestamp when the student was last updated.
    pub updated_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Link to the assigned counselor, if any.
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::CounselorId",
        to = "super::user::Column::Id"
    )]
    Counselor,

    /// Leave requests filed by this student.
    #[sea_orm(has_many = "super::leave_request::Entity")]
    LeaveRequests,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Counselor.def()
    }
}

impl Related<super::leave_request::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::LeaveRequests.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
