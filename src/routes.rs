//! HTTP routing and middleware.

use axum::{
  http::{header, Method},
  routing::{delete, get, post},
  Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::error;
use crate::handlers;
use crate::state::AppState;

fn cors() -> CorsLayer {
  CorsLayer::new()
    .allow_origin(Any)
    .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
    .allow_methods([
      Method::GET,
      Method::POST,
      Method::PATCH,
      Method::DELETE,
      Method::OPTIONS,
    ])
}

pub fn router(state: AppState) -> Router {
  Router::new()
    .route("/categories", get(handlers::list_categories))
    .route("/categories/{id}/questions", get(handlers::questions_by_category))
    .route(
      "/questions",
      get(handlers::list_questions).post(handlers::create_or_search_questions),
    )
    .route("/questions/search", post(handlers::search_questions))
    .route("/questions/{id}", delete(handlers::delete_question))
    .route("/quizzes", post(handlers::next_question))
    .fallback(error::not_found)
    .method_not_allowed_fallback(error::method_not_allowed)
    .layer(cors())
    .layer(TraceLayer::new_for_http())
    .with_state(state)
}
