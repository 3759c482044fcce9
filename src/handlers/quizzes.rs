use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::db::try_lock;
use crate::domain::Question;
use crate::error::{ApiError, ApiJson, ApiResult};
use crate::state::AppState;
use crate::trivia::next_quiz_question;

/// Category id the quiz front end sends for "All"
pub const ALL_CATEGORIES: i64 = 0;

/// Category ids arrive either as numbers or as numeric strings
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum IdRepr {
  Number(i64),
  Text(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(try_from = "IdRepr")]
pub struct CategoryId(pub i64);

impl TryFrom<IdRepr> for CategoryId {
  type Error = String;

  fn try_from(repr: IdRepr) -> Result<Self, Self::Error> {
    match repr {
      IdRepr::Number(id) => Ok(Self(id)),
      IdRepr::Text(text) => text
        .trim()
        .parse()
        .map(Self)
        .map_err(|_| format!("invalid category id '{}'", text)),
    }
  }
}

/// The front end also echoes the category name as `type`; only the id is read
#[derive(Debug, Deserialize)]
pub struct QuizCategory {
  pub id: CategoryId,
}

#[derive(Debug, Deserialize)]
pub struct QuizRequest {
  #[serde(default)]
  pub previous_questions: Vec<i64>,
  #[serde(default)]
  pub quiz_category: Option<QuizCategory>,
}

impl QuizRequest {
  /// Category filter for the pool; `None` plays across all categories
  pub fn category_filter(&self) -> Option<i64> {
    self
      .quiz_category
      .as_ref()
      .map(|c| c.id.0)
      .filter(|&id| id != ALL_CATEGORIES)
  }
}

#[derive(Debug, Serialize)]
pub struct QuizResponse {
  pub success: bool,
  pub question: Question,
}

/// POST /quizzes
pub async fn next_question(
  State(state): State<AppState>,
  ApiJson(request): ApiJson<QuizRequest>,
) -> ApiResult<Json<QuizResponse>> {
  let previous: HashSet<i64> = request.previous_questions.iter().copied().collect();
  let category = request.category_filter();

  let conn = try_lock(&state.pool)?;
  let question = next_quiz_question(&conn, category, &previous)?
    .ok_or_else(|| ApiError::NotFound("no unseen questions left".into()))?;

  Ok(Json(QuizResponse {
    success: true,
    question,
  }))
}
