//! Selection logic that sits between the store and the HTTP handlers.
//!
//! Everything here works on questions already fetched from the store and
//! performs no I/O.

pub mod pagination;
pub mod quiz;
pub mod search;

pub use pagination::{paginate, QUESTIONS_PER_PAGE};
pub use quiz::{next_question, CategoryFilter, QuestionPicker};
pub use search::search;
