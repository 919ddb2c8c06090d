//! Route definitions for the `/venues` pages.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::venues;
use crate::state::AppState;

/// Routes mounted at `/venues`.
///
/// ```text
/// GET    /                -> list
/// POST   /search          -> search
/// GET    /create          -> create_form
/// POST   /create          -> create_submission
/// GET    /{id}            -> show
/// DELETE /{id}            -> delete
/// GET    /{id}/edit       -> edit_form
/// POST   /{id}/edit       -> edit_submission
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(venues::list))
        .route("/search", post(venues::search))
        .route(
            "/create",
            get(venues::create_form).post(venues::create_submission),
        )
        .route("/{id}", get(venues::show).delete(venues::delete))
        .route(
            "/{id}/edit",
            get(venues::edit_form).post(venues::edit_submission),
        )
}
