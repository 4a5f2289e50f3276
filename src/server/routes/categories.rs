use std::collections::BTreeMap;

use axum::{extract::State, routing::get, Json, Router};
use serde::Serialize;
use sqlx::SqlitePool;

use crate::{
    db::{
        queries::{
            categories::{get_all_categories, get_category},
            questions,
        },
        Question,
    },
    server::{app::AppState, error::ApiError, extract::ApiPath},
};

use super::{categories_map, ApiResponse};

#[derive(Serialize)]
struct CategoriesBody {
    success: bool,
    categories: BTreeMap<i64, String>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CategoryQuestionsBody {
    success: bool,
    questions: Vec<Question>,
    total_questions: usize,
    current_category: String,
}

async fn get_categories(State(pool): State<SqlitePool>) -> ApiResponse<Json<CategoriesBody>> {
    let categories = get_all_categories(&pool).await?;
    if categories.is_empty() {
        return Err(ApiError::NotFound("no categories".to_owned()));
    }
    Ok(Json(CategoriesBody {
        success: true,
        categories: categories_map(categories),
    }))
}

async fn get_category_questions(
    State(pool): State<SqlitePool>,
    ApiPath(id): ApiPath<i64>,
) -> ApiResponse<Json<CategoryQuestionsBody>> {
    let category = get_category(&pool, id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("category {id}")))?;
    let questions = questions::get_questions_for_category(&pool, id).await?;
    if questions.is_empty() {
        return Err(ApiError::NotFound(format!(
            "category {id} has no questions"
        )));
    }
    Ok(Json(CategoryQuestionsBody {
        success: true,
        total_questions: questions.len(),
        questions,
        current_category: category.kind,
    }))
}

pub fn category_router() -> Router<AppState> {
    Router::new()
        .route("/categories", get(get_categories))
        .route("/categories/{id}/questions", get(get_category_questions))
}
