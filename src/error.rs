use axum::http::StatusCode;
use axum::response::{IntoResponse, Redirect, Response};
use sea_orm::{DbErr, SqlErr};
use thiserror::Error;

/// Everything that can go wrong in the core flows. Handlers intercept the
/// recoverable variants (re-render or redirect with a message); anything that
/// falls through is mapped to a status code below.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("an account with this email already exists")]
    DuplicateAccount,
    #[error("no account with this email exists")]
    UnknownAccount,
    #[error("password does not match")]
    BadCredentials,
    #[error("forbidden")]
    Forbidden,
    #[error("not found")]
    NotFound,
    #[error("authentication required")]
    AuthenticationRequired,
    #[error("{0}")]
    ValidationFailed(String),
    #[error("storage constraint violated: {0}")]
    ConstraintViolation(String),
    #[error("password hashing failed: {0}")]
    Hashing(String),
    #[error(transparent)]
    Database(#[from] DbErr),
}

impl AppError {
    /// Classifies a failed insert/update: constraint breaches (duplicate
    /// title, dangling foreign key) become `ConstraintViolation`, everything
    /// else stays an opaque storage error.
    pub fn from_write_err(err: DbErr) -> Self {
        match err.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(message)) => {
                AppError::ConstraintViolation(message)
            }
            Some(SqlErr::ForeignKeyConstraintViolation(message)) => {
                AppError::ConstraintViolation(message)
            }
            _ => AppError::Database(err),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::Forbidden => StatusCode::FORBIDDEN.into_response(),
            AppError::NotFound => StatusCode::NOT_FOUND.into_response(),
            AppError::AuthenticationRequired | AppError::DuplicateAccount => {
                Redirect::to("/login").into_response()
            }
            AppError::UnknownAccount
            | AppError::BadCredentials
            | AppError::ValidationFailed(_) => {
                (StatusCode::BAD_REQUEST, self.to_string()).into_response()
            }
            AppError::ConstraintViolation(_) => {
                (StatusCode::CONFLICT, self.to_string()).into_response()
            }
            AppError::Hashing(message) => {
                tracing::error!(%message, "credential hashing failed");
                StatusCode::INTERNAL_SERVER_ERROR.into_response()
            }
            AppError::Database(err) => {
                tracing::error!(error = %err, "storage failure");
                StatusCode::INTERNAL_SERVER_ERROR.into_response()
            }
        }
    }
}
