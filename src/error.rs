use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;
use thiserror::Error;
use tracing::error;

use crate::config::AppConfig;

/// Postgres error code for a unique-constraint violation.
const UNIQUE_VIOLATION: &str = "23505";

/// Outcomes of a repository operation that the dispatcher cares about.
/// Store-driver error shapes are translated here and nowhere else.
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("user not found")]
    NotFound,
    #[error("email already exists")]
    Conflict,
    #[error(transparent)]
    Database(#[from] sqlx::Error),
}

impl RepoError {
    /// Maps a write failure, recognizing the store's duplicate-key signal.
    pub fn from_write(err: sqlx::Error) -> Self {
        if is_unique_violation(&err) {
            RepoError::Conflict
        } else {
            RepoError::Database(err)
        }
    }
}

fn is_unique_violation(err: &sqlx::Error) -> bool {
    if let sqlx::Error::Database(db_err) = err {
        return db_err.code().map(|code| code == UNIQUE_VIOLATION).unwrap_or(false);
    }
    false
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

pub type ApiError = (StatusCode, Json<ErrorBody>);

fn body(message: impl Into<String>) -> Json<ErrorBody> {
    Json(ErrorBody {
        error: message.into(),
    })
}

pub fn validation(problems: Vec<String>) -> ApiError {
    (StatusCode::BAD_REQUEST, body(problems.join("; ")))
}

pub fn from_repo(config: &AppConfig, err: RepoError) -> ApiError {
    match err {
        RepoError::NotFound => (StatusCode::NOT_FOUND, body("user not found")),
        RepoError::Conflict => (StatusCode::CONFLICT, body("email already exists")),
        RepoError::Database(err) => internal(config, err),
    }
}

/// Infrastructure failures (pool exhausted, store unreachable, bad statement)
/// all land here. Detail leaves the process only in development mode; the log
/// always gets the full error.
pub fn internal(config: &AppConfig, err: impl std::fmt::Display) -> ApiError {
    error!(error = %err, "store operation failed");
    let message = if config.expose_error_detail() {
        err.to_string()
    } else {
        "internal server error".to_string()
    };
    (StatusCode::INTERNAL_SERVER_ERROR, body(message))
}
