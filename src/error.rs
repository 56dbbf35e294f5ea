use axum::{Json, http::StatusCode, response::IntoResponse};
use serde::Serialize;
use validator::ValidationErrors;

use crate::{auth::error::AuthError, db::error::DatabaseError};

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Database error")]
    Database(DatabaseError),

    #[error("Auth error")]
    Auth(AuthError),

    #[error("Validation error")]
    Validation(ValidationErrors),

    #[error("{0}")]
    Conflict(String),

    #[error("Other error: {0}")]
    Other(anyhow::Error),
}

impl From<DatabaseError> for Error {
    fn from(value: DatabaseError) -> Self {
        Self::Database(value)
    }
}

#[derive(Serialize)]
struct ErrorBody {
    detail: String,
}

fn respond(status: StatusCode, detail: impl Into<String>) -> axum::response::Response {
    (
        status,
        Json(ErrorBody {
            detail: detail.into(),
        }),
    )
        .into_response()
}

impl IntoResponse for Error {
    fn into_response(self) -> axum::response::Response {
        match self {
            Error::Database(DatabaseError::DatabaseError(error)) => {
                tracing::error!(err.msg = %error, err.details=?error, "Database Error");

                respond(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
            }
            Error::Auth(auth_error) => match auth_error {
                AuthError::JwtError(error) => {
                    tracing::error!(err.msg = %error, err.details=?error, "JWT Error");

                    respond(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
                }
                AuthError::PasswordError(error) => {
                    tracing::error!(err.msg = %error, err.details=?error, "Password Hash Error");

                    respond(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
                }
                AuthError::Unauthenticated
                | AuthError::UserNotFound
                | AuthError::IncorrectCredential => {
                    respond(StatusCode::UNAUTHORIZED, auth_error.to_string())
                }
                AuthError::Forbidden | AuthError::RegistrationDisabled => {
                    respond(StatusCode::FORBIDDEN, auth_error.to_string())
                }
            },
            Error::Conflict(message) => respond(StatusCode::CONFLICT, message),
            Error::Other(error) => {
                tracing::error!(err.msg = %error, err.details=?error, "Other Error");

                respond(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
            }
            Error::Validation(validation_error) => {
                tracing::warn!(err.msg = %validation_error, "Validation Error");

                respond(StatusCode::BAD_REQUEST, validation_error.to_string())
            }
        }
    }
}
