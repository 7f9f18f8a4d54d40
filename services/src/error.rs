use sea_orm::DbErr;
use thiserror::Error;

/// Failure taxonomy shared by every domain operation.
///
/// Each variant maps to exactly one HTTP status at the API boundary. No
/// operation retries; every failure is terminal for the request that
/// triggered it.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("A record with this {0} already exists")]
    DuplicateKey(&'static str),

    #[error("{0} not found")]
    NotFound(&'static str),

    #[error("Counselor does not exist or is not a valid counselor")]
    InvalidCounselor,

    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Database error: {0}")]
    Store(#[from] DbErr),
}

impl ServiceError {
    /// Translates an insert failure into `DuplicateKey` when a unique
    /// constraint fired, so the taxonomy stays consistent regardless of
    /// which constraint the store reports first.
    pub(crate) fn from_insert(err: DbErr) -> Self {
        let msg = err.to_string();
        if msg.contains("UNIQUE constraint failed") {
            if msg.contains("students.roll_number") {
                return ServiceError::DuplicateKey("roll number");
            }
            if msg.contains("students.registration_number") {
                return ServiceError::DuplicateKey("registration number");
            }
            if msg.contains("users.email") {
                return ServiceError::DuplicateKey("email");
            }
            return ServiceError::DuplicateKey("unique key");
        }
        ServiceError::Store(err)
    }
}
