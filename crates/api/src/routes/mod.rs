pub mod artists;
pub mod health;
pub mod shows;
pub mod trivia;
pub mod venues;

use axum::routing::get;
use axum::Router;

use crate::handlers::{pages, questions};
use crate::state::AppState;

/// Build the Fyyur route tree.
///
/// ```text
/// /                 home page
/// /health           service health
/// /venues/...       venue pages
/// /artists/...      artist pages
/// /shows/...        show pages
/// *                 errors/404.html
/// ```
pub fn fyyur_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(pages::home))
        .merge(health::router())
        .nest("/venues", venues::router())
        .nest("/artists", artists::router())
        .nest("/shows", shows::router())
        .fallback(pages::not_found)
}

/// Build the trivia route tree.
///
/// Unknown paths answer with the JSON 404 body and known paths hit with
/// the wrong method answer with the JSON 405 body.
pub fn trivia_routes() -> Router<AppState> {
    Router::new()
        .merge(health::router())
        .merge(trivia::router())
        .fallback(questions::not_found)
        .method_not_allowed_fallback(questions::method_not_allowed)
}
