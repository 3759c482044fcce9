//! Random quiz question selection.

use rand::seq::IndexedRandom;
use rand::Rng;
use rusqlite::{Connection, Result};
use std::collections::HashSet;

use crate::db::{self, QuestionFilter};
use crate::domain::Question;

/// Pick uniformly among pool entries whose id is not in `previous`.
///
/// Returns `None` once every candidate has been served.
pub fn select_next<'a, R: Rng + ?Sized>(
  pool: &'a [Question],
  previous: &HashSet<i64>,
  rng: &mut R,
) -> Option<&'a Question> {
  let remaining: Vec<&Question> = pool
    .iter()
    .filter(|q| !previous.contains(&q.id))
    .collect();

  remaining.choose(rng).copied()
}

/// Next unseen question, optionally restricted to one category
pub fn next_quiz_question(
  conn: &Connection,
  category: Option<i64>,
  previous: &HashSet<i64>,
) -> Result<Option<Question>> {
  let filter = category.map(QuestionFilter::category).unwrap_or_default();
  let pool = db::list_questions(conn, &filter)?;

  let picked = select_next(&pool, previous, &mut rand::rng()).cloned();
  if picked.is_none() {
    tracing::debug!(
      ?category,
      pool = pool.len(),
      served = previous.len(),
      "Quiz pool exhausted"
    );
  }
  Ok(picked)
}
