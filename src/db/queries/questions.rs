use itertools::Itertools;
use serde::{Deserialize, Serialize};
use serde_aux::field_attributes::deserialize_option_number_from_string;
use sqlx::{SqliteConnection, SqlitePool};

use crate::db::{StoreError, StoreResult};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Question {
    pub id: i64,
    pub question: String,
    pub answer: String,
    pub category: i64,
    pub difficulty: i64,
}

/// Fields of a question about to be created. Every field is optional here so
/// that absence is reported as a validation failure instead of a parse error.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NewQuestion {
    #[serde(default)]
    pub question: Option<String>,
    #[serde(default)]
    pub answer: Option<String>,
    #[serde(default, deserialize_with = "deserialize_option_number_from_string")]
    pub category: Option<i64>,
    #[serde(default, deserialize_with = "deserialize_option_number_from_string")]
    pub difficulty: Option<i64>,
}

struct ValidQuestion {
    question: String,
    answer: String,
    category: i64,
    difficulty: i64,
}

impl NewQuestion {
    fn validate(self) -> StoreResult<ValidQuestion> {
        let mut missing = Vec::new();
        let question = non_blank(self.question);
        let answer = non_blank(self.answer);
        if question.is_none() {
            missing.push("question");
        }
        if answer.is_none() {
            missing.push("answer");
        }
        if self.category.is_none() {
            missing.push("category");
        }
        if self.difficulty.is_none() {
            missing.push("difficulty");
        }
        match (question, answer, self.category, self.difficulty) {
            (Some(question), Some(answer), Some(category), Some(difficulty)) => Ok(ValidQuestion {
                question,
                answer,
                category,
                difficulty,
            }),
            _ => Err(StoreError::Validation(format!(
                "missing {}",
                missing.join(", ")
            ))),
        }
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

pub async fn get_all_questions(pool: &SqlitePool) -> sqlx::Result<Vec<Question>> {
    sqlx::query_as::<_, Question>(
        r#"
        SELECT id, question, answer, category, difficulty FROM questions ORDER BY id
        "#,
    )
    .fetch_all(pool)
    .await
}

pub async fn get_questions_for_category(
    pool: &SqlitePool,
    category: i64,
) -> sqlx::Result<Vec<Question>> {
    sqlx::query_as::<_, Question>(
        r#"
        SELECT id, question, answer, category, difficulty
        FROM questions
        WHERE questions.category = ?1
        ORDER BY id
        "#,
    )
    .bind(category)
    .fetch_all(pool)
    .await
}

pub async fn list_questions(
    pool: &SqlitePool,
    category: Option<i64>,
) -> sqlx::Result<Vec<Question>> {
    match category {
        Some(id) => get_questions_for_category(pool, id).await,
        None => get_all_questions(pool).await,
    }
}

pub async fn count_questions(pool: &SqlitePool) -> sqlx::Result<i64> {
    sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM questions")
        .fetch_one(pool)
        .await
}

pub async fn create_question(pool: &SqlitePool, new_question: NewQuestion) -> StoreResult<Question> {
    let valid = new_question.validate()?;
    let question = sqlx::query_as::<_, Question>(
        r#"
        INSERT INTO questions (question, answer, category, difficulty) VALUES (?1, ?2, ?3, ?4)
        RETURNING id, question, answer, category, difficulty
        "#,
    )
    .bind(valid.question)
    .bind(valid.answer)
    .bind(valid.category)
    .bind(valid.difficulty)
    .fetch_one(pool)
    .await?;
    Ok(question)
}

pub async fn delete_question(pool: &SqlitePool, id: i64) -> StoreResult<bool> {
    let deleted = sqlx::query(
        r#"
        DELETE FROM questions WHERE questions.id = ?1
        "#,
    )
    .bind(id)
    .execute(pool)
    .await?
    .rows_affected();
    if deleted == 0 {
        return Err(StoreError::NotFound(id));
    }
    Ok(true)
}

pub async fn import_questions(
    conn: &mut SqliteConnection,
    questions: Vec<Question>,
) -> StoreResult<()> {
    let duplicates = questions.iter().map(|q| q.id).duplicates().collect_vec();
    if !duplicates.is_empty() {
        return Err(StoreError::Validation(format!(
            "duplicate question ids {duplicates:?}"
        )));
    }
    for question in questions {
        sqlx::query(
            r#"
            INSERT INTO questions (id, question, answer, category, difficulty) VALUES (?1, ?2, ?3, ?4, ?5)
            ON CONFLICT (id) DO UPDATE SET
                question = excluded.question,
                answer = excluded.answer,
                category = excluded.category,
                difficulty = excluded.difficulty
            "#,
        )
        .bind(question.id)
        .bind(question.question)
        .bind(question.answer)
        .bind(question.category)
        .bind(question.difficulty)
        .execute(&mut *conn)
        .await?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_question_accepts_numeric_strings() {
        let new: NewQuestion = serde_json::from_str(
            r#"{"question": "Q?", "answer": "A", "category": "3", "difficulty": 2}"#,
        )
        .unwrap();
        assert_eq!(new.category, Some(3));
        assert_eq!(new.difficulty, Some(2));
    }

    #[test]
    fn validation_lists_every_missing_field() {
        let new: NewQuestion = serde_json::from_str(r#"{"question": "  ", "category": 1}"#).unwrap();
        match new.validate() {
            Err(StoreError::Validation(msg)) => {
                assert_eq!(msg, "missing question, answer, difficulty")
            }
            _ => panic!("expected a validation error"),
        }
    }

    #[test]
    fn complete_question_is_valid() {
        let new = NewQuestion {
            question: Some("Who discovered penicillin?".to_owned()),
            answer: Some("Alexander Fleming".to_owned()),
            category: Some(1),
            difficulty: Some(3),
        };
        let valid = new.validate().unwrap();
        assert_eq!(valid.category, 1);
        assert_eq!(valid.difficulty, 3);
    }
}
