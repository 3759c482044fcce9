use axum_test::TestServer;
use tempfile::TempDir;

use trivia_api::{
  db::{self, DbPool},
  routes,
  state::AppState,
};

pub const PAGE_SIZE: u32 = 10;

/// Server over a seeded temporary database
pub struct TestApp {
  /// Kept alive so the database file outlives the server
  pub _temp: TempDir,
  pub pool: DbPool,
  pub server: TestServer,
}

impl TestApp {
  pub fn seeded() -> Self {
    let app = Self::empty();
    db::seed_trivia(&app.pool.lock().unwrap()).unwrap();
    app
  }

  /// Schema only, no categories or questions
  pub fn empty() -> Self {
    let temp = TempDir::new().unwrap();
    let pool = db::init_db(&temp.path().join("trivia.db")).unwrap();
    let server = TestServer::new(routes::router(AppState::new(pool.clone(), PAGE_SIZE))).unwrap();
    Self {
      _temp: temp,
      pool,
      server,
    }
  }

  pub fn question_count(&self) -> i64 {
    let conn = self.pool.lock().unwrap();
    db::count_questions(&conn, &db::QuestionFilter::all()).unwrap()
  }
}
