//! Paged, searchable question listing.
//!
//! Pages are 1-based and ordered by question id. A page past the end comes
//! back empty; deciding whether that is an error is left to the caller.

use rusqlite::{Connection, Result};
use serde::Serialize;

use crate::db::{self, QuestionFilter};
use crate::domain::Question;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRequest {
  /// 1-based page number; 0 is never a valid page
  pub page: u32,
  pub page_size: u32,
  pub search: Option<String>,
  pub category: Option<i64>,
}

impl PageRequest {
  pub fn new(page: u32, page_size: u32) -> Self {
    Self {
      page,
      page_size,
      search: None,
      category: None,
    }
  }

  pub fn with_search(mut self, term: Option<&str>) -> Self {
    self.search = normalize_search(term);
    self
  }

  pub fn with_category(mut self, category: Option<i64>) -> Self {
    self.category = category;
    self
  }

  /// Zero-based row offset of the first item on this page
  pub fn offset(&self) -> i64 {
    i64::from(self.page.saturating_sub(1)) * i64::from(self.page_size)
  }

  fn filter(&self) -> QuestionFilter {
    QuestionFilter {
      search: self.search.clone(),
      category: self.category,
    }
  }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Page {
  pub items: Vec<Question>,
  /// Matching rows across all pages
  pub total: i64,
}

impl Page {
  pub fn is_empty(&self) -> bool {
    self.items.is_empty()
  }
}

/// Blank search terms mean "no search"
pub fn normalize_search(term: Option<&str>) -> Option<String> {
  term
    .map(str::trim)
    .filter(|t| !t.is_empty())
    .map(str::to_string)
}

pub fn list_questions_page(conn: &Connection, request: &PageRequest) -> Result<Page> {
  let filter = request.filter();
  let total = db::count_questions(conn, &filter)?;

  if request.page == 0 || request.page_size == 0 {
    return Ok(Page {
      items: Vec::new(),
      total,
    });
  }

  let items = db::list_questions_range(
    conn,
    &filter,
    i64::from(request.page_size),
    request.offset(),
  )?;

  tracing::debug!(
    page = request.page,
    returned = items.len(),
    total,
    "Listed questions"
  );
  Ok(Page { items, total })
}
