//! Route definitions for the `/artists` pages.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::artists;
use crate::state::AppState;

/// Routes mounted at `/artists`.
///
/// ```text
/// GET    /                -> list
/// POST   /search          -> search
/// GET    /create          -> create_form
/// POST   /create          -> create_submission
/// GET    /{id}            -> show
/// GET    /{id}/edit       -> edit_form
/// POST   /{id}/edit       -> edit_submission
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(artists::list))
        .route("/search", post(artists::search))
        .route(
            "/create",
            get(artists::create_form).post(artists::create_submission),
        )
        .route("/{id}", get(artists::show))
        .route(
            "/{id}/edit",
            get(artists::edit_form).post(artists::edit_submission),
        )
}
