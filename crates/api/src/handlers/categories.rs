//! Handlers for trivia categories.

use std::collections::BTreeMap;

use axum::extract::State;
use axum::Json;
use marquee_core::pagination::{page_slice, QUESTIONS_PER_PAGE};
use marquee_core::types::DbId;
use marquee_db::models::question::Question;
use marquee_db::repositories::{CategoryRepo, QuestionRepo};
use marquee_db::DbPool;
use serde::Serialize;

use crate::error::{ApiError, ApiResult};
use crate::extract::{ApiPath, ApiQuery};
use crate::query::PageParams;
use crate::state::AppState;

/// Category labels keyed by id, as the trivia client expects them.
pub type CategoryMap = BTreeMap<DbId, String>;

#[derive(Debug, Serialize)]
pub struct CategoriesResponse {
    pub success: bool,
    pub categories: CategoryMap,
    pub total_categories: usize,
}

#[derive(Debug, Serialize)]
pub struct CategoryQuestionsResponse {
    pub success: bool,
    pub questions: Vec<Question>,
    pub total_questions: usize,
    pub current_category: String,
}

/// Every category as `{id: type}`.
pub async fn category_map(pool: &DbPool) -> Result<CategoryMap, sqlx::Error> {
    let categories = CategoryRepo::list(pool).await?;
    Ok(categories.into_iter().map(|c| (c.id, c.kind)).collect())
}

/// GET /categories
pub async fn list(State(state): State<AppState>) -> ApiResult<Json<CategoriesResponse>> {
    let categories = category_map(&state.pool).await?;
    if categories.is_empty() {
        return Err(ApiError::not_found("categories"));
    }

    Ok(Json(CategoriesResponse {
        success: true,
        total_categories: categories.len(),
        categories,
    }))
}

/// GET /categories/{id}/questions
///
/// `total_questions` counts every question in the category, not just the
/// returned page.
pub async fn questions(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<DbId>,
    ApiQuery(params): ApiQuery<PageParams>,
) -> ApiResult<Json<CategoryQuestionsResponse>> {
    let category = CategoryRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| ApiError::not_found(format!("category {id}")))?;

    let all = QuestionRepo::list_by_category(&state.pool, id).await?;
    let page = page_slice(&all, params.page(), QUESTIONS_PER_PAGE).to_vec();

    Ok(Json(CategoryQuestionsResponse {
        success: true,
        questions: page,
        total_questions: all.len(),
        current_category: category.kind,
    }))
}
