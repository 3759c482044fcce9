use rusqlite::Connection;

use crate::db;
use crate::domain::{NewQuestion, QuestionError};
use crate::error::{ApiError, ApiResult};

/// Insert a validated question after checking its category exists
pub fn create_question(conn: &Connection, question: &NewQuestion) -> ApiResult<i64> {
  if !db::category_exists(conn, question.category)? {
    return Err(QuestionError::UnknownCategory(question.category).into());
  }

  let id = db::insert_question(conn, question)?;
  tracing::info!(id, category = question.category, "Created question");
  Ok(id)
}

pub fn delete_question(conn: &Connection, id: i64) -> ApiResult<()> {
  if !db::delete_question(conn, id)? {
    return Err(ApiError::NotFound(format!("question {}", id)));
  }
  tracing::info!(id, "Deleted question");
  Ok(())
}
