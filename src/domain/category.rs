use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A trivia category. Seeded once, read-only afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
  pub id: i64,
  #[serde(rename = "type")]
  pub kind: String,
}

impl Category {
  pub fn new(id: i64, kind: impl Into<String>) -> Self {
    Self {
      id,
      kind: kind.into(),
    }
  }
}

/// Wire format used by the front end: `{"1": "Science", "2": "Art", ...}`
pub fn categories_by_id(categories: &[Category]) -> BTreeMap<i64, String> {
  categories
    .iter()
    .map(|c| (c.id, c.kind.clone()))
    .collect()
}
