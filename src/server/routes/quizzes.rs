use std::collections::HashSet;

use axum::{extract::State, routing::post, Json, Router};
use serde::Deserialize;
use serde_aux::field_attributes::deserialize_option_number_from_string;
use serde_json::{json, Value};
use sqlx::SqlitePool;

use crate::db::queries::questions;
use crate::server::app::AppState;
use crate::server::error::ApiError;
use crate::server::quiz;
use crate::telemetry::QUIZ_QUESTION_CNTR;

/// Sentinel category id meaning "draw from all categories".
const ALL_CATEGORIES: i64 = 0;

#[derive(Deserialize)]
struct QuizBody {
    previous_questions: Option<Vec<i64>>,
    quiz_category: Option<QuizCategory>,
}

#[derive(Deserialize)]
struct QuizCategory {
    #[serde(default, deserialize_with = "deserialize_option_number_from_string")]
    id: Option<i64>,
}

async fn play_quiz(
    State(pool): State<SqlitePool>,
    Json(body): Json<QuizBody>,
) -> Result<Json<Value>, ApiError> {
    let (Some(previous), Some(category)) = (body.previous_questions, body.quiz_category) else {
        return Err(ApiError::BadRequest);
    };
    let category_id = category.id.ok_or(ApiError::BadRequest)?;

    let candidates = if category_id == ALL_CATEGORIES {
        questions::get_all_questions(&pool).await?
    } else {
        questions::get_questions_for_category(&pool, category_id).await?
    };

    let previous: HashSet<i64> = previous.into_iter().collect();
    match quiz::draw(&candidates, &previous, &mut rand::thread_rng()) {
        Some(question) => {
            QUIZ_QUESTION_CNTR
                .with_label_values(&[&question.category.to_string()])
                .inc();
            Ok(Json(json!({
                "success": true,
                "question": question,
            })))
        }
        // pool exhausted, the round is over
        None => Ok(Json(json!({ "success": true }))),
    }
}

pub fn quizzes_router(state: AppState) -> Router {
    Router::new()
        .route("/quizzes", post(play_quiz))
        .with_state(state)
}
