//! Handler for the trivia quiz.

use axum::extract::State;
use axum::Json;
use marquee_core::quiz::{next_question, ALL_CATEGORIES};
use marquee_core::types::DbId;
use marquee_db::models::question::Question;
use marquee_db::repositories::{CategoryRepo, QuestionRepo};
use serde::{Deserialize, Serialize};

use crate::error::{ApiError, ApiResult};
use crate::extract::{flexible_int, TriviaJson};
use crate::state::AppState;

/// Category selector sent by the quiz client. `id == 0` means every
/// category.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct QuizCategory {
    #[serde(deserialize_with = "flexible_int")]
    pub id: DbId,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct QuizRequest {
    #[serde(default)]
    pub previous_questions: Vec<DbId>,
    pub quiz_category: QuizCategory,
}

/// Next quiz question, or `{ "success": true }` alone once the quiz is
/// exhausted.
#[derive(Debug, Serialize)]
pub struct QuizResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub question: Option<Question>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub previous_questions: Option<Vec<DbId>>,
    #[serde(rename = "quizCategory", skip_serializing_if = "Option::is_none")]
    pub quiz_category: Option<QuizCategory>,
}

impl QuizResponse {
    fn finished() -> Self {
        Self {
            success: true,
            question: None,
            previous_questions: None,
            quiz_category: None,
        }
    }
}

/// POST /quizzes
pub async fn next(
    State(state): State<AppState>,
    TriviaJson(request): TriviaJson<QuizRequest>,
) -> ApiResult<Json<QuizResponse>> {
    let category_id = request.quiz_category.id;

    let candidates = if category_id == ALL_CATEGORIES {
        QuestionRepo::list(&state.pool).await?
    } else {
        if CategoryRepo::find_by_id(&state.pool, category_id).await?.is_none() {
            return Err(ApiError::not_found(format!("category {category_id}")));
        }
        QuestionRepo::list_by_category(&state.pool, category_id).await?
    };

    let Some(question) = next_question(
        candidates,
        &request.previous_questions,
        state.picker.as_ref(),
    ) else {
        tracing::debug!(category_id, asked = request.previous_questions.len(), "Quiz finished");
        return Ok(Json(QuizResponse::finished()));
    };

    let mut previous_questions = request.previous_questions;
    previous_questions.push(question.id);

    Ok(Json(QuizResponse {
        success: true,
        question: Some(question),
        previous_questions: Some(previous_questions),
        quiz_category: Some(request.quiz_category),
    }))
}
