use chrono::Utc;
use common::format_validation_errors;
use db::models::{student, user};
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set};
use validator::Validate;

use crate::error::ServiceError;
use crate::password::{hash_password, verify_password};

#[derive(Debug, Clone, Validate)]
pub struct RegisterStudent {
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

#[derive(Debug, Clone, Validate)]
pub struct RegisterUser {
    #[validate(length(min = 1, message = "Name cannot be empty"))]
    pub name: String,

    #[validate(email(message = "Invalid email address"))]
    pub email: String,

    // Open string set; only "counselor" carries enforced meaning, and that
    // enforcement happens at assignment time, not here.
    #[validate(length(min = 1, message = "Role cannot be empty"))]
    pub role: String,

    #[validate(length(min = 8, message = "Password must be at least 8 characters"))]
    pub password: String,
}

pub struct IdentityService;

impl IdentityService {
    /// Registers a new student: validates input, hashes the password and
    /// persists the record. Uniqueness of roll number and registration
    /// number is enforced by the store and reported as `DuplicateKey`.
    pub async fn register_student(
        db: &DatabaseConnection,
        params: RegisterStudent,
    ) -> Result<student::Model, ServiceError> {
        params
            .validate()
            .map_err(|e| ServiceError::Validation(format_validation_errors(&e)))?;

        let now = Utc::now();
        let active = student::ActiveModel {
            name: Set(params.name),
            roll_number: Set(params.roll_number),
            registration_number: Set(params.registration_number),
            year: Set(params.year),
            password_hash: Set(hash_password(&params.password)?),
            counselor_id: Set(None),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let created = active.insert(db).await.map_err(ServiceError::from_insert)?;
        tracing::info!(roll_number = %created.roll_number, "registered student");
        Ok(created)
    }

    /// Registers a new staff user, keyed on email. The role string is stored
    /// as given.
    pub async fn register_user(
        db: &DatabaseConnection,
        params: RegisterUser,
    ) -> Result<user::Model, ServiceError> {
        params
            .validate()
            .map_err(|e| ServiceError::Validation(format_validation_errors(&e)))?;

        let now = Utc::now();
        let active = user::ActiveModel {
            name: Set(params.name),
            email: Set(params.email),
            role: Set(params.role),
            password_hash: Set(hash_password(&params.password)?),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let created = active.insert(db).await.map_err(ServiceError::from_insert)?;
        tracing::info!(email = %created.email, role = %created.role, "registered user");
        Ok(created)
    }

    /// Authenticates a student by roll number.
    ///
    /// `NotFound` when no such roll number exists, `InvalidCredentials` when
    /// the digest does not match. The two paths return at different speeds;
    /// that timing side channel is accepted, not closed.
    pub async fn login_student(
        db: &DatabaseConnection,
        roll_number: &str,
        password: &str,
    ) -> Result<student::Model, ServiceError> {
        let student = student::Entity::find()
            .filter(student::Column::RollNumber.eq(roll_number))
            .one(db)
            .await?
            .ok_or(ServiceError::NotFound("Student"))?;

        if !verify_password(password, &student.password_hash) {
            return Err(ServiceError::InvalidCredentials);
        }

        Ok(student)
    }

    /// Authenticates a staff user by email. Same semantics as
    /// [`Self::login_student`].
    pub async fn login_user(
        db: &DatabaseConnection,
        email: &str,
        password: &str,
    ) -> Result<user::Model, ServiceError> {
        let user = user::Entity::find()
            .filter(user::Column::Email.eq(email))
            .one(db)
            .await?
            .ok_or(ServiceError::NotFound("User"))?;

        if !verify_password(password, &user.password_hash) {
            return Err(ServiceError::InvalidCredentials);
        }

        Ok(user)
    }
}
