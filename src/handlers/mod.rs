pub mod categories;
pub mod questions;
pub mod quizzes;

use rusqlite::Connection;

use crate::error::ApiResult;
use crate::state::AppState;
use crate::trivia::{list_questions_page, Page, PageRequest};

/// First unfiltered page, returned alongside mutations so the client can refresh
fn first_page(conn: &Connection, state: &AppState) -> ApiResult<Page> {
  Ok(list_questions_page(
    conn,
    &PageRequest::new(1, state.questions_per_page),
  )?)
}

pub use categories::{list_categories, questions_by_category};
pub use questions::{create_or_search_questions, delete_question, list_questions, search_questions};
pub use quizzes::next_question;
