//! Question listing, search, creation and deletion handlers.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::db::{self, try_lock};
use crate::domain::category::categories_by_id;
use crate::domain::{NewQuestion, Question, QuestionError};
use crate::error::{ApiError, ApiJson, ApiPath, ApiQuery, ApiResult};
use crate::state::AppState;
use crate::trivia::{self, list_questions_page, normalize_search, PageRequest};

use super::first_page;

// ============================================================================
// Listing
// ============================================================================

#[derive(Debug, Default, Deserialize)]
pub struct ListParams {
  pub page: Option<u32>,
  #[serde(rename = "searchTerm")]
  pub search_term: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ListQuestionsResponse {
  pub success: bool,
  pub questions: Vec<Question>,
  pub categories: BTreeMap<i64, String>,
  #[serde(rename = "currentCategory")]
  pub current_category: Option<i64>,
  pub total_questions: i64,
}

/// GET /questions?page=N&searchTerm=...
pub async fn list_questions(
  State(state): State<AppState>,
  ApiQuery(params): ApiQuery<ListParams>,
) -> ApiResult<Json<ListQuestionsResponse>> {
  let page_number = params.page.unwrap_or(1);
  let request = PageRequest::new(page_number, state.questions_per_page)
    .with_search(params.search_term.as_deref());

  let conn = try_lock(&state.pool)?;
  let page = list_questions_page(&conn, &request)?;

  if page.is_empty() {
    return Err(ApiError::NotFound(format!("page {}", page_number)));
  }

  let categories = db::list_categories(&conn)?;

  Ok(Json(ListQuestionsResponse {
    success: true,
    questions: page.items,
    categories: categories_by_id(&categories),
    current_category: None,
    total_questions: page.total,
  }))
}

// ============================================================================
// POST /questions: search or create
// ============================================================================

/// Raw body accepted by POST /questions
#[derive(Debug, Default, Deserialize)]
pub struct QuestionsPostBody {
  #[serde(rename = "searchTerm")]
  pub search_term: Option<String>,
  pub question: Option<String>,
  pub answer: Option<String>,
  pub difficulty: Option<i64>,
  pub category: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
  pub term: String,
}

/// The two things a POST /questions body can ask for
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuestionsPost {
  Search(SearchRequest),
  Create(NewQuestion),
}

impl TryFrom<QuestionsPostBody> for QuestionsPost {
  type Error = QuestionError;

  /// A non-blank `searchTerm` selects search; anything else must be a valid question
  fn try_from(body: QuestionsPostBody) -> Result<Self, Self::Error> {
    if let Some(term) = normalize_search(body.search_term.as_deref()) {
      return Ok(Self::Search(SearchRequest { term }));
    }

    let question = NewQuestion::validate(
      body.question.as_deref().unwrap_or_default(),
      body.answer.as_deref().unwrap_or_default(),
      body.difficulty,
      body.category,
    )?;
    Ok(Self::Create(question))
  }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResponse {
  pub success: bool,
  pub questions: Vec<Question>,
  pub total_questions: i64,
  pub current_category: Option<i64>,
}

#[derive(Debug, Serialize)]
pub struct CreatedResponse {
  pub success: bool,
  pub created: i64,
  pub questions: Vec<Question>,
  pub total_questions: i64,
}

/// Search and create share a route, so the response shape depends on the body
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum QuestionsPostResponse {
  Search(SearchResponse),
  Created(CreatedResponse),
}

fn run_search(state: &AppState, term: Option<&str>) -> ApiResult<SearchResponse> {
  let request = PageRequest::new(1, state.questions_per_page).with_search(term);
  let conn = try_lock(&state.pool)?;
  let page = list_questions_page(&conn, &request)?;

  Ok(SearchResponse {
    success: true,
    questions: page.items,
    total_questions: page.total,
    current_category: None,
  })
}

/// POST /questions
pub async fn create_or_search_questions(
  State(state): State<AppState>,
  ApiJson(body): ApiJson<QuestionsPostBody>,
) -> ApiResult<Json<QuestionsPostResponse>> {
  match QuestionsPost::try_from(body)? {
    QuestionsPost::Search(search) => {
      let response = run_search(&state, Some(search.term.as_str()))?;
      Ok(Json(QuestionsPostResponse::Search(response)))
    }
    QuestionsPost::Create(question) => {
      let conn = try_lock(&state.pool)?;
      let created = trivia::create_question(&conn, &question)?;
      let page = first_page(&conn, &state)?;

      Ok(Json(QuestionsPostResponse::Created(CreatedResponse {
        success: true,
        created,
        questions: page.items,
        total_questions: page.total,
      })))
    }
  }
}

#[derive(Debug, Deserialize)]
pub struct SearchBody {
  #[serde(rename = "searchTerm")]
  pub search_term: Option<String>,
}

/// POST /questions/search
pub async fn search_questions(
  State(state): State<AppState>,
  ApiJson(body): ApiJson<SearchBody>,
) -> ApiResult<Json<SearchResponse>> {
  Ok(Json(run_search(&state, body.search_term.as_deref())?))
}

// ============================================================================
// Deletion
// ============================================================================

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeletedResponse {
  pub success: bool,
  pub deleted: i64,
  pub questions: Vec<Question>,
  pub total_questions: i64,
}

/// DELETE /questions/{id}
pub async fn delete_question(
  State(state): State<AppState>,
  ApiPath(id): ApiPath<i64>,
) -> ApiResult<Json<DeletedResponse>> {
  let conn = try_lock(&state.pool)?;
  trivia::delete_question(&conn, id)?;
  let page = first_page(&conn, &state)?;

  Ok(Json(DeletedResponse {
    success: true,
    deleted: id,
    questions: page.items,
    total_questions: page.total,
  }))
}
