mod categories;
mod questions;
mod quizzes;

use std::collections::BTreeMap;

use crate::db::Category;

use super::error::ApiError;

pub use categories::category_router;
pub use questions::questions_router;
pub use quizzes::quiz_router;

pub type ApiResponse<T> = Result<T, ApiError>;

// the frontend expects categories as an {id: type} object
fn categories_map(categories: Vec<Category>) -> BTreeMap<i64, String> {
    categories.into_iter().map(|c| (c.id, c.kind)).collect()
}
