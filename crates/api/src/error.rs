use axum::extract::rejection::{FormRejection, JsonRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use marquee_core::error::CoreError;
use serde::Serialize;
use validator::ValidationErrors;

use crate::page::Page;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds HTTP-specific variants.
/// The two services render it differently: Fyyur through [`PageError`],
/// trivia through [`ApiError`].
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `marquee_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A database error from sqlx.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// No matching row or an empty result where one was required.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Malformed input or a write that could not be carried out.
    #[error("Unprocessable: {0}")]
    Unprocessable(String),

    /// A server-side fault, e.g. a handler mounted on a route without the
    /// parameters it extracts.
    #[error("Internal error: {0}")]
    InternalError(String),
}

impl AppError {
    /// Whether this error means "nothing matched" rather than a failure.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            AppError::NotFound(_)
                | AppError::Core(CoreError::NotFound { .. })
                | AppError::Database(sqlx::Error::RowNotFound)
        )
    }

    /// Whether the caller sent something unusable.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            AppError::Unprocessable(_) | AppError::Core(CoreError::Validation(_))
        )
    }
}

impl From<ValidationErrors> for AppError {
    fn from(errors: ValidationErrors) -> Self {
        AppError::Core(CoreError::Validation(errors.to_string()))
    }
}

// ---------------------------------------------------------------------------
// Constraint classification
// ---------------------------------------------------------------------------

/// Integrity constraint a failed write ran into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConstraintViolation {
    /// PostgreSQL 23503: a referenced row does not exist.
    ForeignKey,
    /// PostgreSQL 23505: a primary key or unique index already holds the value.
    Unique,
}

/// Classify a sqlx error as an integrity violation, if it is one.
pub fn constraint_violation(err: &sqlx::Error) -> Option<ConstraintViolation> {
    let db_err = err.as_database_error()?;
    match db_err.code().as_deref() {
        Some("23503") => Some(ConstraintViolation::ForeignKey),
        Some("23505") => Some(ConstraintViolation::Unique),
        _ => None,
    }
}

// ---------------------------------------------------------------------------
// Fyyur: error pages
// ---------------------------------------------------------------------------

/// Page-rendering error for the Fyyur site.
///
/// - Not-found kinds render `errors/404.html` with 404.
/// - Malformed submissions render `errors/422.html` with 422.
/// - Everything else is logged and renders `errors/500.html` with 500.
#[derive(Debug, thiserror::Error)]
#[error(transparent)]
pub struct PageError(#[from] pub AppError);

/// Handler result for Fyyur page handlers.
pub type PageResult<T> = Result<T, PageError>;

impl From<CoreError> for PageError {
    fn from(err: CoreError) -> Self {
        PageError(err.into())
    }
}

impl From<sqlx::Error> for PageError {
    fn from(err: sqlx::Error) -> Self {
        PageError(err.into())
    }
}

impl From<FormRejection> for PageError {
    fn from(rejection: FormRejection) -> Self {
        PageError(AppError::Unprocessable(rejection.body_text()))
    }
}

impl IntoResponse for PageError {
    fn into_response(self) -> Response {
        let (status, template) = if self.0.is_not_found() {
            (StatusCode::NOT_FOUND, "errors/404.html")
        } else if self.0.is_client_error() {
            (StatusCode::UNPROCESSABLE_ENTITY, "errors/422.html")
        } else {
            tracing::error!(error = %self.0, "Request failed");
            (StatusCode::INTERNAL_SERVER_ERROR, "errors/500.html")
        };

        (status, Page::new(template, ())).into_response()
    }
}

// ---------------------------------------------------------------------------
// Trivia: JSON error bodies
// ---------------------------------------------------------------------------

/// JSON error for the trivia API.
///
/// Renders `{ "success": false, "error": <status>, "message": ... }`.
/// Not-found kinds map to 404; every other failure (bad input, database
/// errors) maps to 422.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error(transparent)]
    App(#[from] AppError),

    #[error("method not allowed")]
    MethodNotAllowed,
}

/// Handler result for trivia handlers.
pub type ApiResult<T> = Result<T, ApiError>;

#[derive(Debug, Serialize)]
struct ApiErrorBody {
    success: bool,
    error: u16,
    message: &'static str,
}

impl ApiError {
    pub fn not_found(what: impl Into<String>) -> Self {
        ApiError::App(AppError::NotFound(what.into()))
    }

    pub fn unprocessable(why: impl Into<String>) -> Self {
        ApiError::App(AppError::Unprocessable(why.into()))
    }
}

impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        ApiError::App(err.into())
    }
}

impl From<sqlx::Error> for ApiError {
    fn from(err: sqlx::Error) -> Self {
        ApiError::App(err.into())
    }
}

impl From<ValidationErrors> for ApiError {
    fn from(errors: ValidationErrors) -> Self {
        ApiError::App(errors.into())
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::unprocessable(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            ApiError::MethodNotAllowed => (StatusCode::METHOD_NOT_ALLOWED, "method not allowed"),
            ApiError::App(err) if err.is_not_found() => {
                tracing::debug!(error = %err, "Resource not found");
                (StatusCode::NOT_FOUND, "resource not found")
            }
            ApiError::App(err) => {
                if err.is_client_error() {
                    tracing::warn!(error = %err, "Unprocessable request");
                } else {
                    tracing::error!(error = %err, "Request failed");
                }
                (StatusCode::UNPROCESSABLE_ENTITY, "unprocessable")
            }
        };

        let body = ApiErrorBody {
            success: false,
            error: status.as_u16(),
            message,
        };

        (status, axum::Json(body)).into_response()
    }
}
