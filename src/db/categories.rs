//! Category queries

use rusqlite::{params, Connection, Result};

use crate::domain::Category;

pub fn insert_category(conn: &Connection, kind: &str) -> Result<i64> {
  conn.execute("INSERT INTO categories (type) VALUES (?1)", params![kind])?;
  Ok(conn.last_insert_rowid())
}

/// All categories ordered by id
pub fn list_categories(conn: &Connection) -> Result<Vec<Category>> {
  let mut stmt = conn.prepare("SELECT id, type FROM categories ORDER BY id ASC")?;
  let categories = stmt
    .query_map([], |row| Ok(Category::new(row.get(0)?, row.get::<_, String>(1)?)))?
    .collect::<Result<Vec<_>>>()?;
  Ok(categories)
}

pub fn category_exists(conn: &Connection, id: i64) -> Result<bool> {
  conn.query_row(
    "SELECT EXISTS(SELECT 1 FROM categories WHERE id = ?1)",
    params![id],
    |row| row.get(0),
  )
}

pub fn count_categories(conn: &Connection) -> Result<i64> {
  conn.query_row("SELECT COUNT(*) FROM categories", [], |row| row.get(0))
}
