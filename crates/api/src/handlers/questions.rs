//! Handlers for trivia questions: paginated listing, deletion, creation
//! and search.

use axum::extract::State;
use axum::http::Uri;
use axum::Json;
use marquee_core::forms::validate_not_blank;
use marquee_core::pagination::{page_slice, QUESTIONS_PER_PAGE};
use marquee_core::search::contains_pattern;
use marquee_core::types::DbId;
use marquee_db::models::question::{CreateQuestion, Question};
use marquee_db::repositories::{CategoryRepo, QuestionRepo};
use marquee_db::DbPool;
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::categories::{category_map, CategoryMap};
use crate::error::{ApiError, ApiResult};
use crate::extract::{flexible_int, ApiPath, ApiQuery, TriviaJson};
use crate::query::PageParams;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct QuestionsResponse {
    pub success: bool,
    pub questions: Vec<Question>,
    pub total_questions: usize,
    pub categories: CategoryMap,
    pub current_category: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct DeletedResponse {
    pub success: bool,
    pub deleted: DbId,
    pub total_questions: i64,
}

#[derive(Debug, Serialize)]
pub struct SearchResponse {
    pub success: bool,
    pub questions: Vec<Question>,
    pub total_questions: usize,
}

#[derive(Debug, Serialize)]
pub struct CreatedResponse {
    pub success: bool,
    pub question_created: Question,
}

/// Body of `POST /questions`: either a search or a new question.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum QuestionsRequest {
    Search(SearchRequest),
    Create(NewQuestion),
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SearchRequest {
    #[serde(rename = "searchTerm")]
    pub search_term: String,
}

#[derive(Debug, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct NewQuestion {
    #[validate(custom(function = "validate_not_blank"))]
    pub question: String,
    #[validate(custom(function = "validate_not_blank"))]
    pub answer: String,
    #[validate(range(min = 1, max = 5))]
    #[serde(deserialize_with = "flexible_int")]
    pub difficulty: i32,
    #[serde(deserialize_with = "flexible_int")]
    pub category: DbId,
}

impl From<NewQuestion> for CreateQuestion {
    fn from(new: NewQuestion) -> Self {
        Self {
            question: new.question.trim().to_string(),
            answer: new.answer.trim().to_string(),
            category: new.category,
            difficulty: new.difficulty,
        }
    }
}

/// Either response of `POST /questions`.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum QuestionsPostResponse {
    Search(SearchResponse),
    Created(CreatedResponse),
}

/// GET /questions?page=N
pub async fn list(
    State(state): State<AppState>,
    ApiQuery(params): ApiQuery<PageParams>,
) -> ApiResult<Json<QuestionsResponse>> {
    let all = QuestionRepo::list(&state.pool).await?;
    let page = page_slice(&all, params.page(), QUESTIONS_PER_PAGE);
    if page.is_empty() {
        return Err(ApiError::not_found(format!("questions page {}", params.page())));
    }

    let categories = category_map(&state.pool).await?;
    if categories.is_empty() {
        return Err(ApiError::not_found("categories"));
    }

    Ok(Json(QuestionsResponse {
        success: true,
        questions: page.to_vec(),
        total_questions: all.len(),
        categories,
        current_category: None,
    }))
}

/// DELETE /questions/{id}
///
/// An unknown id is unprocessable rather than not found.
pub async fn delete(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<DbId>,
) -> ApiResult<Json<DeletedResponse>> {
    let total_questions = remove(&state.pool, id).await?;
    tracing::info!(question_id = id, total_questions, "Question deleted");

    Ok(Json(DeletedResponse {
        success: true,
        deleted: id,
        total_questions,
    }))
}

/// POST /questions
pub async fn create_or_search(
    State(state): State<AppState>,
    ApiQuery(params): ApiQuery<PageParams>,
    TriviaJson(body): TriviaJson<QuestionsRequest>,
) -> ApiResult<Json<QuestionsPostResponse>> {
    let response = match body {
        QuestionsRequest::Search(search) => {
            QuestionsPostResponse::Search(search_questions(&state.pool, search, &params).await?)
        }
        QuestionsRequest::Create(new) => {
            QuestionsPostResponse::Created(create_question(&state.pool, new).await?)
        }
    };
    Ok(Json(response))
}

/// Trivia fallback for unknown routes.
pub async fn not_found(uri: Uri) -> ApiError {
    ApiError::not_found(uri.path().to_string())
}

/// Trivia fallback for known routes hit with the wrong method.
pub async fn method_not_allowed() -> ApiError {
    ApiError::MethodNotAllowed
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

async fn search_questions(
    pool: &DbPool,
    search: SearchRequest,
    params: &PageParams,
) -> ApiResult<SearchResponse> {
    let term = search.search_term.trim();
    if term.is_empty() {
        return Err(ApiError::unprocessable("searchTerm must not be blank"));
    }

    let matches = QuestionRepo::search(pool, &contains_pattern(term)).await?;
    let page = page_slice(&matches, params.page(), QUESTIONS_PER_PAGE).to_vec();
    tracing::debug!(term, matches = matches.len(), "Question search");

    Ok(SearchResponse {
        success: true,
        questions: page,
        total_questions: matches.len(),
    })
}

async fn create_question(pool: &DbPool, new: NewQuestion) -> ApiResult<CreatedResponse> {
    new.validate()?;
    if CategoryRepo::find_by_id(pool, new.category).await?.is_none() {
        return Err(ApiError::unprocessable(format!(
            "category {} does not exist",
            new.category
        )));
    }

    let input = CreateQuestion::from(new);
    let mut tx = pool.begin().await?;
    let question = QuestionRepo::create(&mut *tx, &input).await?;
    tx.commit().await?;
    tracing::info!(question_id = question.id, category = question.category, "Question created");

    Ok(CreatedResponse {
        success: true,
        question_created: question,
    })
}

/// Delete and recount in one transaction. Returns the remaining total.
async fn remove(pool: &DbPool, id: DbId) -> ApiResult<i64> {
    let mut tx = pool.begin().await?;
    if !QuestionRepo::delete(&mut *tx, id).await? {
        return Err(ApiError::unprocessable(format!("question {id} does not exist")));
    }
    let total = QuestionRepo::count(&mut *tx).await?;
    tx.commit().await?;
    Ok(total)
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn search_body_parses_as_search() {
        let body: QuestionsRequest = serde_json::from_str(r#"{"searchTerm": "title"}"#).unwrap();
        assert_matches!(body, QuestionsRequest::Search(s) if s.search_term == "title");
    }

    #[test]
    fn question_body_parses_as_create() {
        let body: QuestionsRequest = serde_json::from_str(
            r#"{"question": "Q?", "answer": "A", "difficulty": 2, "category": "3"}"#,
        )
        .unwrap();
        assert_matches!(body, QuestionsRequest::Create(q) if q.category == 3 && q.difficulty == 2);
    }

    #[test]
    fn string_difficulty_parses_as_create() {
        let body: QuestionsRequest = serde_json::from_str(
            r#"{"question":"Q?","answer":"A","difficulty":"3","category":"3"}"#,
        )
        .unwrap();
        assert_matches!(body, QuestionsRequest::Create(q) if q.difficulty == 3 && q.category == 3);
    }

    #[test]
    fn mixed_or_partial_bodies_are_rejected() {
        assert!(serde_json::from_str::<QuestionsRequest>(
            r#"{"searchTerm": "x", "question": "Q?"}"#
        )
        .is_err());
        assert!(serde_json::from_str::<QuestionsRequest>(r#"{"question": "Q?"}"#).is_err());
        assert!(serde_json::from_str::<QuestionsRequest>("{}").is_err());
    }

    #[test]
    fn difficulty_out_of_range_fails_validation() {
        let new = NewQuestion {
            question: "Q?".into(),
            answer: "A".into(),
            difficulty: 6,
            category: 1,
        };
        assert!(new.validate().is_err());
    }

    #[test]
    fn blank_answer_fails_validation() {
        let new = NewQuestion {
            question: "Q?".into(),
            answer: "  ".into(),
            difficulty: 1,
            category: 1,
        };
        assert!(new.validate().is_err());
    }
}
