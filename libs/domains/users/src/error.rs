use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_helpers::ErrorResponse;
use thiserror::Error;
use uuid::Uuid;

/// Domain error taxonomy.
///
/// Both variants are expected, routine outcomes: `NotFound` starts life
/// as a sentinel (`None`/`false`) at the repository boundary and only
/// becomes an error at the service layer; `DuplicateEmail` always
/// surfaces to the caller.
#[derive(Debug, Error)]
pub enum UserError {
    #[error("User not found: {0}")]
    NotFound(Uuid),

    #[error("User with email '{0}' already exists")]
    DuplicateEmail(String),
}

pub type UserResult<T> = Result<T, UserError>;

impl IntoResponse for UserError {
    fn into_response(self) -> Response {
        let (status, kind, message) = match &self {
            UserError::NotFound(id) => (
                StatusCode::NOT_FOUND,
                "not_found",
                format!("User {} not found", id),
            ),
            UserError::DuplicateEmail(email) => (
                StatusCode::CONFLICT,
                "duplicate_email",
                format!("User with email '{}' already exists", email),
            ),
        };

        (status, Json(ErrorResponse::new(kind, message))).into_response()
    }
}
