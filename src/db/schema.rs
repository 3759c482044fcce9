use rusqlite::functions::FunctionFlags;
use rusqlite::{Connection, Result};

/// Unicode-aware lowercase. SQLite's built-in `lower()` only folds ASCII.
pub const FOLD_CASE_FN: &str = "fold_case";

/// Register the scalar functions queries rely on. Per connection.
fn register_functions(conn: &Connection) -> Result<()> {
  conn.create_scalar_function(
    FOLD_CASE_FN,
    1,
    FunctionFlags::SQLITE_UTF8 | FunctionFlags::SQLITE_DETERMINISTIC,
    |ctx| {
      let text = ctx.get::<Option<String>>(0)?;
      Ok(text.map(|t| t.to_lowercase()))
    },
  )
}

pub fn run_migrations(conn: &Connection) -> Result<()> {
  register_functions(conn)?;

  // questions.category has no FOREIGN KEY; category existence is checked
  // before insertion (see trivia::mutations).
  conn.execute_batch(
    r#"
    CREATE TABLE IF NOT EXISTS categories (
      id INTEGER PRIMARY KEY AUTOINCREMENT,
      type TEXT NOT NULL
    );

    CREATE TABLE IF NOT EXISTS questions (
      id INTEGER PRIMARY KEY AUTOINCREMENT,
      question TEXT NOT NULL,
      answer TEXT NOT NULL,
      category INTEGER NOT NULL,
      difficulty INTEGER NOT NULL CHECK (difficulty BETWEEN 1 AND 5)
    );

    CREATE INDEX IF NOT EXISTS idx_questions_category ON questions(category);
    "#,
  )?;

  Ok(())
}

/// Check if a column exists in a table
#[cfg(test)]
fn column_exists(conn: &Connection, table: &str, column: &str) -> bool {
  conn
    .prepare(&format!("SELECT {} FROM {} LIMIT 1", column, table))
    .is_ok()
}
