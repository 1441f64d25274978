use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use devfolio_core::error::CoreError;
use devfolio_core::fields::FieldError;
use devfolio_core::technology::LinkOp;
use devfolio_db::DbError;
use serde::Serialize;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds HTTP-specific variants.
/// Implements [`IntoResponse`] to produce `{ "message": ..., "keys": [...] }`.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `devfolio_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A database error from sqlx.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A bad request with a human-readable message.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// An internal error with a human-readable message.
    #[error("Internal error: {0}")]
    InternalError(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

const INTERNAL_MESSAGE: &str = "Internal Server Error";

#[derive(Serialize)]
struct ErrorBody {
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    keys: Option<Vec<&'static str>>,
}

impl From<FieldError> for AppError {
    fn from(err: FieldError) -> Self {
        AppError::Core(CoreError::Validation(err))
    }
}

impl From<DbError> for AppError {
    fn from(err: DbError) -> Self {
        match err {
            DbError::Statement(e) => AppError::Core(e.into()),
            DbError::Sqlx(e) => AppError::Database(e),
        }
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message, keys) = match &self {
            // --- CoreError variants ---
            AppError::Core(core) => classify_core_error(core),

            // --- Database errors ---
            AppError::Database(err) => {
                let (status, message) = classify_sqlx_error(err);
                (status, message, None)
            }

            // --- HTTP-specific errors ---
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg.clone(), None),
            AppError::InternalError(msg) => {
                tracing::error!(error = %msg, "Internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    INTERNAL_MESSAGE.to_string(),
                    None,
                )
            }
        };

        (status, axum::Json(ErrorBody { message, keys })).into_response()
    }
}

fn classify_core_error(err: &CoreError) -> (StatusCode, String, Option<Vec<&'static str>>) {
    let status = match err {
        CoreError::NotFound { .. } | CoreError::TechnologyNotLinked { .. } => {
            StatusCode::NOT_FOUND
        }
        CoreError::Validation(_)
        | CoreError::DuplicateTechnology { .. }
        | CoreError::IncompleteInfoCreation { .. } => StatusCode::BAD_REQUEST,
        CoreError::UnknownTechnology { op, .. } => match op {
            LinkOp::Attach => StatusCode::BAD_REQUEST,
            LinkOp::Detach => StatusCode::NOT_FOUND,
        },
        CoreError::Conflict(_) => StatusCode::CONFLICT,
        CoreError::Internal(msg) => {
            tracing::error!(error = %msg, "Internal core error");
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                INTERNAL_MESSAGE.to_string(),
                None,
            );
        }
    };

    let keys = match err {
        CoreError::Validation(field_err) => field_err.keys().map(<[_]>::to_vec),
        CoreError::IncompleteInfoCreation { keys } => Some(keys.clone()),
        _ => None,
    };

    (status, err.to_string(), keys)
}

/// Classify a sqlx error into an HTTP status and message.
///
/// - `RowNotFound` maps to 404.
/// - Unique constraint violations map to 409, except the project/technology
///   pair which is reported like any other duplicate link (400).
/// - Foreign key, not-null, check and malformed-input errors are caused by
///   the request and map to 400 with the database message.
/// - Everything else maps to 500 with a sanitized message.
fn classify_sqlx_error(err: &sqlx::Error) -> (StatusCode, String) {
    match err {
        sqlx::Error::RowNotFound => (StatusCode::NOT_FOUND, "Resource not found".to_string()),
        sqlx::Error::Database(db_err) => {
            let code = db_err.code();
            match code.as_deref() {
                // PostgreSQL unique constraint violation.
                Some("23505") => {
                    let constraint = db_err.constraint().unwrap_or("unknown");
                    match constraint {
                        "uq_developers_email" => {
                            (StatusCode::CONFLICT, "E-mail already in use!".to_string())
                        }
                        "uq_projects_technologies_pair" => (
                            StatusCode::BAD_REQUEST,
                            "Technology is already applied to this project!".to_string(),
                        ),
                        "uq_developers_developer_info" => (
                            StatusCode::CONFLICT,
                            "Developer info already exists!".to_string(),
                        ),
                        other => (
                            StatusCode::CONFLICT,
                            format!("Duplicate value violates unique constraint: {other}"),
                        ),
                    }
                }
                // FK, not-null, check, bad text representation, bad datetime,
                // datetime overflow, value too long.
                Some("23503" | "23502" | "23514" | "22P02" | "22007" | "22008" | "22001") => {
                    tracing::debug!(error = %db_err, "Client-caused database error");
                    (StatusCode::BAD_REQUEST, db_err.message().to_string())
                }
                _ => {
                    tracing::error!(error = %db_err, "Database error");
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        INTERNAL_MESSAGE.to_string(),
                    )
                }
            }
        }
        other => {
            tracing::error!(error = %other, "Database error");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                INTERNAL_MESSAGE.to_string(),
            )
        }
    }
}
