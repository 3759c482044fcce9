//! Application state passed to all handlers.

use crate::config::Config;
use crate::db::DbPool;

#[derive(Clone)]
pub struct AppState {
  pub pool: DbPool,

  /// Page size for question listings
  pub questions_per_page: u32,
}

impl AppState {
  pub fn new(pool: DbPool, questions_per_page: u32) -> Self {
    Self {
      pool,
      questions_per_page,
    }
  }

  pub fn from_config(pool: DbPool, config: &Config) -> Self {
    Self::new(pool, config.questions_per_page)
  }
}
