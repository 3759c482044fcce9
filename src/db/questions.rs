//! Question CRUD and filtered queries

use rusqlite::types::Value;
use rusqlite::{params, params_from_iter, Connection, OptionalExtension, Result, Row};

use super::schema::FOLD_CASE_FN;
use crate::domain::{NewQuestion, Question};

const QUESTION_COLUMNS: &str = "id, question, answer, category, difficulty";

/// Predicate over the questions table. Empty filter matches everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuestionFilter {
  /// Case-insensitive substring of the question text
  pub search: Option<String>,
  pub category: Option<i64>,
}

impl QuestionFilter {
  pub fn all() -> Self {
    Self::default()
  }

  #[cfg(test)]
  pub fn search(term: impl Into<String>) -> Self {
    Self {
      search: Some(term.into()),
      category: None,
    }
  }

  pub fn category(id: i64) -> Self {
    Self {
      search: None,
      category: Some(id),
    }
  }

  /// Build the WHERE clause and its positional parameters
  fn where_clause(&self) -> (String, Vec<Value>) {
    let mut clauses = Vec::new();
    let mut values = Vec::new();

    if let Some(term) = &self.search {
      values.push(Value::Text(term.clone()));
      clauses.push(format!(
        "instr({f}(question), {f}(?{n})) > 0",
        f = FOLD_CASE_FN,
        n = values.len()
      ));
    }
    if let Some(category) = self.category {
      values.push(Value::Integer(category));
      clauses.push(format!("category = ?{}", values.len()));
    }

    if clauses.is_empty() {
      (String::new(), values)
    } else {
      (format!("WHERE {}", clauses.join(" AND ")), values)
    }
  }
}

fn row_to_question(row: &Row) -> Result<Question> {
  Ok(Question {
    id: row.get(0)?,
    question: row.get(1)?,
    answer: row.get(2)?,
    category: row.get(3)?,
    difficulty: row.get(4)?,
  })
}

pub fn insert_question(conn: &Connection, question: &NewQuestion) -> Result<i64> {
  conn.execute(
    r#"
    INSERT INTO questions (question, answer, category, difficulty)
    VALUES (?1, ?2, ?3, ?4)
    "#,
    params![
      question.question,
      question.answer,
      question.category,
      question.difficulty.value(),
    ],
  )?;
  Ok(conn.last_insert_rowid())
}

pub fn get_question(conn: &Connection, id: i64) -> Result<Option<Question>> {
  conn
    .query_row(
      &format!("SELECT {} FROM questions WHERE id = ?1", QUESTION_COLUMNS),
      params![id],
      row_to_question,
    )
    .optional()
}

/// All matching questions ordered by id
pub fn list_questions(conn: &Connection, filter: &QuestionFilter) -> Result<Vec<Question>> {
  let (where_sql, values) = filter.where_clause();
  let query = format!(
    "SELECT {} FROM questions {} ORDER BY id ASC",
    QUESTION_COLUMNS, where_sql
  );

  let mut stmt = conn.prepare(&query)?;
  let questions = stmt
    .query_map(params_from_iter(values), row_to_question)?
    .collect::<Result<Vec<_>>>()?;
  Ok(questions)
}

/// One window of matching questions ordered by id
pub fn list_questions_range(
  conn: &Connection,
  filter: &QuestionFilter,
  limit: i64,
  offset: i64,
) -> Result<Vec<Question>> {
  let (where_sql, mut values) = filter.where_clause();
  values.push(Value::Integer(limit));
  values.push(Value::Integer(offset));
  let query = format!(
    "SELECT {} FROM questions {} ORDER BY id ASC LIMIT ?{} OFFSET ?{}",
    QUESTION_COLUMNS,
    where_sql,
    values.len() - 1,
    values.len()
  );

  let mut stmt = conn.prepare(&query)?;
  let questions = stmt
    .query_map(params_from_iter(values), row_to_question)?
    .collect::<Result<Vec<_>>>()?;
  Ok(questions)
}

pub fn count_questions(conn: &Connection, filter: &QuestionFilter) -> Result<i64> {
  let (where_sql, values) = filter.where_clause();
  conn.query_row(
    &format!("SELECT COUNT(*) FROM questions {}", where_sql),
    params_from_iter(values),
    |row| row.get(0),
  )
}

/// Delete a question, returning whether a row was removed
pub fn delete_question(conn: &Connection, id: i64) -> Result<bool> {
  let affected = conn.execute("DELETE FROM questions WHERE id = ?1", params![id])?;
  Ok(affected > 0)
}
