use std::collections::BTreeMap;

use axum::{
    extract::State,
    response::{IntoResponse, Response},
    routing::{delete, get},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::SqlitePool;

use crate::{
    db::{
        queries::{categories::get_all_categories, questions},
        NewQuestion, Question,
    },
    server::{
        app::AppState,
        error::ApiError,
        extract::{ApiJson, ApiPath, ApiQuery},
    },
    telemetry::{QUESTIONS_CREATED, QUESTIONS_DELETED},
    trivia::{paginate, search, QUESTIONS_PER_PAGE},
};

use super::{categories_map, ApiResponse};

#[derive(Deserialize)]
struct PageQuery {
    page: Option<u32>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct QuestionsPage {
    success: bool,
    questions: Vec<Question>,
    total_questions: usize,
    categories: BTreeMap<i64, String>,
    current_category: Option<String>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SearchResults {
    success: bool,
    questions: Vec<Question>,
    total_questions: usize,
    current_category: Option<String>,
}

#[derive(Serialize)]
struct Created {
    success: bool,
    created: i64,
}

#[derive(Serialize)]
struct Deleted {
    success: bool,
    deleted: i64,
}

async fn questions_page(
    State(pool): State<SqlitePool>,
    ApiQuery(PageQuery { page }): ApiQuery<PageQuery>,
) -> ApiResponse<Json<QuestionsPage>> {
    let page = page.unwrap_or(1);
    if page == 0 {
        return Err(ApiError::BadRequest("pages start at 1".to_owned()));
    }
    let all = questions::get_all_questions(&pool).await?;
    let page_questions = paginate(&all, page, QUESTIONS_PER_PAGE).to_vec();
    if page_questions.is_empty() {
        return Err(ApiError::NotFound(format!("page {page} is empty")));
    }
    let categories = get_all_categories(&pool).await?;
    Ok(Json(QuestionsPage {
        success: true,
        questions: page_questions,
        total_questions: all.len(),
        categories: categories_map(categories),
        current_category: None,
    }))
}

/// `POST /questions` searches when the body carries a `searchTerm` string and
/// creates otherwise. The create fields are only looked at on the create path.
async fn search_or_create(
    State(pool): State<SqlitePool>,
    ApiJson(body): ApiJson<Value>,
) -> ApiResponse<Response> {
    let Some(fields) = body.as_object() else {
        return Err(ApiError::BadRequest("expected a JSON object".to_owned()));
    };
    match fields.get("searchTerm") {
        Some(Value::String(term)) => {
            let found = search(term, questions::get_all_questions(&pool).await?);
            tracing::debug!("Search for {term:?} matched {} questions", found.len());
            Ok(Json(SearchResults {
                success: true,
                total_questions: found.len(),
                questions: found,
                current_category: None,
            })
            .into_response())
        }
        None | Some(Value::Null) => {
            let new_question: NewQuestion = serde_json::from_value(body)
                .map_err(|e| ApiError::BadRequest(e.to_string()))?;
            let question = questions::create_question(&pool, new_question).await?;
            QUESTIONS_CREATED.inc();
            tracing::info!("Created question {}", question.id);
            Ok(Json(Created {
                success: true,
                created: question.id,
            })
            .into_response())
        }
        Some(other) => Err(ApiError::BadRequest(format!(
            "searchTerm must be a string, got {other}"
        ))),
    }
}

async fn delete_question(
    State(pool): State<SqlitePool>,
    ApiPath(id): ApiPath<i64>,
) -> ApiResponse<Json<Deleted>> {
    questions::delete_question(&pool, id).await?;
    QUESTIONS_DELETED.inc();
    tracing::info!("Deleted question {id}");
    Ok(Json(Deleted {
        success: true,
        deleted: id,
    }))
}

pub fn questions_router() -> Router<AppState> {
    Router::new()
        .route("/questions", get(questions_page).post(search_or_create))
        .route("/questions/{id}", delete(delete_question))
}
