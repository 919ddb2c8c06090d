//! Route definitions for the `/shows` pages.

use axum::routing::get;
use axum::Router;

use crate::handlers::shows;
use crate::state::AppState;

/// Routes mounted at `/shows`.
///
/// ```text
/// GET    /                -> list
/// GET    /create          -> create_form
/// POST   /create          -> create_submission
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(shows::list))
        .route(
            "/create",
            get(shows::create_form).post(shows::create_submission),
        )
}
