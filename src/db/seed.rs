//! Starter data for a fresh database

use rusqlite::{Connection, Result};

use super::{count_categories, insert_category, insert_question};
use crate::domain::NewQuestion;

pub const SEED_CATEGORIES: [&str; 6] = [
  "Science",
  "Art",
  "Geography",
  "History",
  "Entertainment",
  "Sports",
];

// (question, answer, difficulty, category id)
const SEED_QUESTIONS: &[(&str, &str, i64, i64)] = &[
  ("Whose autobiography is entitled 'I Know Why the Caged Bird Sings'?", "Maya Angelou", 2, 4),
  ("What boxer's original name is Cassius Clay?", "Muhammad Ali", 1, 4),
  ("What movie earned Tom Hanks his third straight Oscar nomination, in 1996?", "Apollo 13", 4, 5),
  (
    "What actor did author Anne Rice first denounce, then praise in the role of her beloved Lestat?",
    "Tom Cruise",
    4,
    5,
  ),
  (
    "What was the title of the 1990 fantasy directed by Tim Burton about a young man with multi-bladed appendages?",
    "Edward Scissorhands",
    3,
    5,
  ),
  ("Which is the only team to play in every soccer World Cup tournament?", "Brazil", 3, 6),
  ("Which country won the first ever soccer World Cup in 1930?", "Uruguay", 4, 6),
  ("Who invented Peanut Butter?", "George Washington Carver", 2, 4),
  ("What is the largest lake in Africa?", "Lake Victoria", 2, 3),
  ("In which royal palace would you find the Hall of Mirrors?", "The Palace of Versailles", 3, 3),
  ("The Taj Mahal is located in which Indian city?", "Agra", 2, 3),
  ("Which Dutch graphic artist, initials M C, was a creator of optical illusions?", "Escher", 1, 2),
  ("La Giaconda is better known as what?", "Mona Lisa", 3, 2),
  ("How many paintings did Van Gogh sell in his lifetime?", "One", 4, 2),
  (
    "Which American artist was a pioneer of Abstract Expressionism, and a leading exponent of action painting?",
    "Jackson Pollock",
    2,
    2,
  ),
  ("What is the heaviest organ in the human body?", "The Liver", 4, 1),
  ("Who discovered penicillin?", "Alexander Fleming", 3, 1),
  ("Hematology is a branch of medicine involving the study of what?", "Blood", 4, 1),
  ("Which dung beetle was worshipped by the ancient Egyptians?", "Scarab", 4, 4),
];

/// Insert categories and starter questions. No-op when categories exist.
pub fn seed_trivia(conn: &Connection) -> Result<()> {
  if count_categories(conn)? > 0 {
    return Ok(());
  }

  let tx = conn.unchecked_transaction()?;
  for kind in SEED_CATEGORIES {
    insert_category(&tx, kind)?;
  }
  for &(question, answer, difficulty, category) in SEED_QUESTIONS {
    let new_question = NewQuestion::validate(question, answer, Some(difficulty), Some(category))
      .map_err(|e| rusqlite::Error::ToSqlConversionFailure(Box::new(e)))?;
    insert_question(&tx, &new_question)?;
  }
  tx.commit()?;

  tracing::info!(
    "Seeded {} categories and {} questions",
    SEED_CATEGORIES.len(),
    SEED_QUESTIONS.len()
  );
  Ok(())
}
