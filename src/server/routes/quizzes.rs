use std::collections::HashSet;

use axum::{extract::State, routing::post, Json, Router};
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;

use crate::{
    db::{
        queries::{categories::get_category, questions::list_questions},
        Question,
    },
    server::{
        app::AppState, deserializers::deserialize_category_filter, error::ApiError,
        extract::ApiJson,
    },
    telemetry::{QUIZ_QUESTIONS_SERVED, QUIZ_ROUNDS_FINISHED},
    trivia::{CategoryFilter, QuestionPicker},
};

use super::ApiResponse;

#[derive(Deserialize)]
struct QuizCategory {
    #[serde(deserialize_with = "deserialize_category_filter")]
    id: CategoryFilter,
}

/// A missing or null `previous_questions` both mean a fresh round.
#[derive(Deserialize)]
struct PlayRequest {
    #[serde(default)]
    previous_questions: Option<HashSet<i64>>,
    quiz_category: QuizCategory,
}

/// `question` is null once the round has used up every eligible question.
#[derive(Serialize)]
struct NextQuestion {
    success: bool,
    question: Option<Question>,
}

async fn play(
    State(pool): State<SqlitePool>,
    State(picker): State<QuestionPicker>,
    ApiJson(request): ApiJson<PlayRequest>,
) -> ApiResponse<Json<NextQuestion>> {
    let filter = request.quiz_category.id;
    if let Some(id) = filter.category_id() {
        if get_category(&pool, id).await?.is_none() {
            return Err(ApiError::NotFound(format!("category {id}")));
        }
    }
    let candidates = list_questions(&pool, filter.category_id()).await?;
    let previous = request.previous_questions.unwrap_or_default();
    let question = picker.pick(filter, &previous, &candidates).cloned();

    let label = filter.label();
    match &question {
        Some(q) => {
            QUIZ_QUESTIONS_SERVED
                .with_label_values(&[label.as_str()])
                .inc();
            tracing::debug!("Serving question {} for category {label}", q.id);
        }
        None => {
            QUIZ_ROUNDS_FINISHED
                .with_label_values(&[label.as_str()])
                .inc();
            tracing::debug!("Quiz over for category {label}");
        }
    }
    Ok(Json(NextQuestion {
        success: true,
        question,
    }))
}

pub fn quiz_router() -> Router<AppState> {
    Router::new().route("/play", post(play))
}
