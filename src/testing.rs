//! Test utilities for database setup.
//!
//! Reuses the production schema and seed functions so tests never carry
//! their own copy of the table definitions.

use rusqlite::Connection;
use std::sync::MutexGuard;
use tempfile::TempDir;

use crate::db::{self, DbPool};
use crate::domain::NewQuestion;

/// A temporary trivia.db, removed when dropped.
pub struct TestEnv {
  /// Temporary directory (kept alive for database file persistence)
  pub temp: TempDir,
  pub pool: DbPool,
}

impl TestEnv {
  /// Empty database with the full schema
  pub fn new() -> rusqlite::Result<Self> {
    let temp =
      TempDir::new().map_err(|e| rusqlite::Error::ToSqlConversionFailure(Box::new(e)))?;
    let pool = db::init_db(&temp.path().join("trivia.db"))?;
    Ok(Self { temp, pool })
  }

  /// Database with the standard categories and starter questions
  pub fn seeded() -> rusqlite::Result<Self> {
    let env = Self::new()?;
    db::seed_trivia(&env.conn())?;
    Ok(env)
  }

  pub fn conn(&self) -> MutexGuard<'_, Connection> {
    self.pool.lock().unwrap()
  }
}

/// Insert a question with fixed answer and difficulty, returning its id
pub fn add_question(conn: &Connection, text: &str, category: i64) -> i64 {
  let question = NewQuestion::validate(text, "answer", Some(3), Some(category)).unwrap();
  db::insert_question(conn, &question).unwrap()
}

/// Insert categories with the given names, returning their ids
pub fn add_categories(conn: &Connection, kinds: &[&str]) -> Vec<i64> {
  kinds
    .iter()
    .map(|kind| db::insert_category(conn, kind).unwrap())
    .collect()
}
