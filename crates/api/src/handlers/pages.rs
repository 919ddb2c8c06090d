//! Site-wide Fyyur pages.

use axum::http::Uri;

use crate::error::{AppError, PageError};
use crate::page::Page;

/// GET /
pub async fn home() -> Page<()> {
    Page::home()
}

/// Fallback for unknown routes.
pub async fn not_found(uri: Uri) -> PageError {
    tracing::debug!(path = %uri.path(), "No route matched");
    PageError(AppError::NotFound(uri.path().to_string()))
}
