//! Question retrieval, quiz selection and validated mutations.

pub mod mutations;
pub mod query;
pub mod selector;

pub use mutations::{create_question, delete_question};
pub use query::{list_questions_page, normalize_search, Page, PageRequest};
pub use selector::{next_quiz_question, select_next};
