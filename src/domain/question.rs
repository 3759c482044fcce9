use serde::{Deserialize, Serialize};

/// Lowest and highest accepted difficulty rating
pub const MIN_DIFFICULTY: i64 = 1;
pub const MAX_DIFFICULTY: i64 = 5;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
  pub id: i64,
  pub question: String,
  pub answer: String,
  pub category: i64,
  pub difficulty: i64,
}

/// Difficulty rating, always within `MIN_DIFFICULTY..=MAX_DIFFICULTY`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Difficulty(i64);

impl Difficulty {
  pub fn new(value: i64) -> Result<Self, QuestionError> {
    if (MIN_DIFFICULTY..=MAX_DIFFICULTY).contains(&value) {
      Ok(Self(value))
    } else {
      Err(QuestionError::DifficultyOutOfRange(value))
    }
  }

  pub fn value(self) -> i64 {
    self.0
  }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum QuestionError {
  #[error("question text must not be empty")]
  BlankQuestion,
  #[error("answer text must not be empty")]
  BlankAnswer,
  #[error("difficulty is required")]
  MissingDifficulty,
  #[error("difficulty must be between 1 and 5, got {0}")]
  DifficultyOutOfRange(i64),
  #[error("category is required")]
  MissingCategory,
  #[error("category {0} does not exist")]
  UnknownCategory(i64),
}

/// A question that passed field validation and is ready for insertion.
///
/// Category existence is not checked here since it needs the store; see
/// `trivia::mutations::create_question`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewQuestion {
  pub question: String,
  pub answer: String,
  pub difficulty: Difficulty,
  pub category: i64,
}

impl NewQuestion {
  pub fn validate(
    question: &str,
    answer: &str,
    difficulty: Option<i64>,
    category: Option<i64>,
  ) -> Result<Self, QuestionError> {
    if question.trim().is_empty() {
      return Err(QuestionError::BlankQuestion);
    }
    if answer.trim().is_empty() {
      return Err(QuestionError::BlankAnswer);
    }
    let difficulty = Difficulty::new(difficulty.ok_or(QuestionError::MissingDifficulty)?)?;
    let category = category.ok_or(QuestionError::MissingCategory)?;

    Ok(Self {
      question: question.to_string(),
      answer: answer.to_string(),
      difficulty,
      category,
    })
  }
}
