//! Route definitions for the trivia API.

use axum::routing::{delete, get, post};
use axum::Router;

use crate::handlers::{categories, questions, quizzes};
use crate::state::AppState;

/// Trivia resource routes.
///
/// ```text
/// GET    /categories                   -> categories::list
/// GET    /categories/{id}/questions    -> categories::questions
/// GET    /questions?page=N             -> questions::list
/// POST   /questions                    -> questions::create_or_search
/// DELETE /questions/{id}               -> questions::delete
/// POST   /quizzes                      -> quizzes::next
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/categories", get(categories::list))
        .route("/categories/{id}/questions", get(categories::questions))
        .route(
            "/questions",
            get(questions::list).post(questions::create_or_search),
        )
        .route("/questions/{id}", delete(questions::delete))
        .route("/quizzes", post(quizzes::next))
}
