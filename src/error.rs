//! API error taxonomy and its JSON rendering.
//!
//! Every failure leaves the handler as an [`ApiError`] and is rendered as
//! `{"success": false, "error": <status>, "message": <text>}`.

use axum::{
  extract::rejection::{JsonRejection, PathRejection, QueryRejection},
  extract::{FromRequest, FromRequestParts},
  http::StatusCode,
  response::{IntoResponse, Response},
  Json,
};
use serde::Serialize;

use crate::db::DbLockError;
use crate::domain::QuestionError;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
  /// Unparseable input (400)
  #[error("malformed request: {0}")]
  MalformedRequest(String),
  /// Missing id, category or page (404)
  #[error("not found: {0}")]
  NotFound(String),
  /// Known route, wrong verb (405)
  #[error("method not allowed")]
  UnsupportedOperation,
  /// Well-formed input with invalid values (422)
  #[error("validation failed: {0}")]
  Validation(String),
  #[error("database error: {0}")]
  Database(#[from] rusqlite::Error),
  #[error(transparent)]
  Unavailable(#[from] DbLockError),
}

pub type ApiResult<T> = Result<T, ApiError>;

#[derive(Debug, Serialize)]
pub struct ErrorBody {
  pub success: bool,
  pub error: u16,
  pub message: &'static str,
}

impl ApiError {
  pub fn status(&self) -> StatusCode {
    match self {
      Self::MalformedRequest(_) => StatusCode::BAD_REQUEST,
      Self::NotFound(_) => StatusCode::NOT_FOUND,
      Self::UnsupportedOperation => StatusCode::METHOD_NOT_ALLOWED,
      // Storage failures surface as 422 like any other unprocessable request
      Self::Validation(_) | Self::Database(_) | Self::Unavailable(_) => {
        StatusCode::UNPROCESSABLE_ENTITY
      }
    }
  }

  /// Fixed client-facing message per status; details stay in the logs
  pub fn message(&self) -> &'static str {
    match self {
      Self::MalformedRequest(_) => "bad request",
      Self::NotFound(_) => "resource not found",
      Self::UnsupportedOperation => "method not allowed",
      Self::Validation(_) | Self::Database(_) | Self::Unavailable(_) => "unprocessable",
    }
  }
}

impl From<QuestionError> for ApiError {
  fn from(err: QuestionError) -> Self {
    Self::Validation(err.to_string())
  }
}

impl From<JsonRejection> for ApiError {
  fn from(rejection: JsonRejection) -> Self {
    match rejection {
      // Valid JSON, wrong shape or types
      JsonRejection::JsonDataError(e) => Self::Validation(e.body_text()),
      other => Self::MalformedRequest(other.body_text()),
    }
  }
}

impl From<QueryRejection> for ApiError {
  fn from(rejection: QueryRejection) -> Self {
    Self::MalformedRequest(rejection.body_text())
  }
}

impl From<PathRejection> for ApiError {
  fn from(rejection: PathRejection) -> Self {
    // `/questions/abc` does not name any resource
    Self::NotFound(rejection.body_text())
  }
}

impl IntoResponse for ApiError {
  fn into_response(self) -> Response {
    match &self {
      Self::Database(_) | Self::Unavailable(_) => tracing::error!("{}", self),
      _ => tracing::debug!("{}", self),
    }

    let status = self.status();
    let body = ErrorBody {
      success: false,
      error: status.as_u16(),
      message: self.message(),
    };
    (status, Json(body)).into_response()
  }
}

/// `Json` extractor whose rejections render as [`ApiError`]
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(ApiError))]
pub struct ApiJson<T>(pub T);

/// `Query` extractor whose rejections render as [`ApiError`]
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(ApiError))]
pub struct ApiQuery<T>(pub T);

/// `Path` extractor whose rejections render as [`ApiError`]
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(ApiError))]
pub struct ApiPath<T>(pub T);

/// Fallback for unknown routes
pub async fn not_found() -> ApiError {
  ApiError::NotFound("no such route".into())
}

/// Fallback for known routes called with an unsupported method
pub async fn method_not_allowed() -> ApiError {
  ApiError::UnsupportedOperation
}
