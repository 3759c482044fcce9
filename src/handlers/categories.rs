use axum::{extract::State, Json};
use serde::Serialize;
use std::collections::BTreeMap;

use crate::db::{self, try_lock, QuestionFilter};
use crate::domain::category::categories_by_id;
use crate::domain::Question;
use crate::error::{ApiError, ApiPath, ApiResult};
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct CategoriesResponse {
  pub success: bool,
  pub categories: BTreeMap<i64, String>,
}

/// GET /categories
pub async fn list_categories(State(state): State<AppState>) -> ApiResult<Json<CategoriesResponse>> {
  let conn = try_lock(&state.pool)?;
  let categories = db::list_categories(&conn)?;

  if categories.is_empty() {
    return Err(ApiError::NotFound("no categories".into()));
  }

  Ok(Json(CategoriesResponse {
    success: true,
    categories: categories_by_id(&categories),
  }))
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryQuestionsResponse {
  pub success: bool,
  pub questions: Vec<Question>,
  pub current_category: i64,
  pub total_questions: i64,
}

/// GET /categories/{id}/questions
pub async fn questions_by_category(
  State(state): State<AppState>,
  ApiPath(category_id): ApiPath<i64>,
) -> ApiResult<Json<CategoryQuestionsResponse>> {
  let conn = try_lock(&state.pool)?;
  let questions = db::list_questions(&conn, &QuestionFilter::category(category_id))?;

  if questions.is_empty() {
    return Err(ApiError::NotFound(format!("no questions in category {}", category_id)));
  }

  Ok(Json(CategoryQuestionsResponse {
    success: true,
    total_questions: questions.len() as i64,
    questions,
    current_category: category_id,
  }))
}
