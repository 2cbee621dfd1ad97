//! Translation of database errors into store errors.

use crate::domain::repositories::StoreError;
use crate::domain::validation::FieldViolation;

/// Check constraints declared in the migrations, with the field they guard.
const CHECK_CONSTRAINTS: &[(&str, &str, &str)] = &[
    (
        "contacts_first_name_required",
        "firstName",
        "First name can not be blank",
    ),
    (
        "contacts_last_name_required",
        "lastName",
        "Last name can not be blank",
    ),
    (
        "users_username_required",
        "username",
        "Username can not be blank",
    ),
    (
        "users_password_required",
        "password",
        "Password can not be blank",
    ),
];

impl From<sqlx::Error> for StoreError {
    fn from(e: sqlx::Error) -> Self {
        if let Some(db) = e.as_database_error() {
            if db.is_unique_violation() {
                return StoreError::UniqueViolation {
                    constraint: db.constraint().unwrap_or("unknown").to_string(),
                };
            }

            if db.is_check_violation()
                && let Some(violation) = db.constraint().and_then(check_violation)
            {
                return StoreError::Validation(vec![violation]);
            }
        }

        StoreError::Backend(e.to_string())
    }
}

/// Maps a check constraint name to the field violation it represents.
pub fn check_violation(constraint: &str) -> Option<FieldViolation> {
    CHECK_CONSTRAINTS
        .iter()
        .find(|(name, _, _)| *name == constraint)
        .map(|(_, field, message)| FieldViolation::new(*field, *message))
}
