use axum::{
    extract::{Path, Query, State},
    routing::{delete, get, post},
    Json, Router,
};
use serde::Deserialize;
use serde_aux::field_attributes::deserialize_option_number_from_string;
use serde_json::{json, Value};
use sqlx::SqlitePool;

use crate::db::queries::{categories, questions};
use crate::server::app::AppState;
use crate::server::error::ApiError;
use crate::server::pagination::{page_slice, PageQuery};

use super::categories::categories_map;

// Clients send difficulty/category either as numbers or as strings.
#[derive(Deserialize)]
struct NewQuestion {
    question: Option<String>,
    answer: Option<String>,
    #[serde(default, deserialize_with = "deserialize_option_number_from_string")]
    difficulty: Option<i64>,
    #[serde(default, deserialize_with = "deserialize_option_number_from_string")]
    category: Option<i64>,
}

#[derive(Deserialize)]
struct SearchBody {
    #[serde(rename = "searchTerm")]
    search_term: Option<String>,
}

async fn list_questions(
    State(pool): State<SqlitePool>,
    Query(page): Query<PageQuery>,
) -> Result<Json<Value>, ApiError> {
    let selection = questions::get_all_questions(&pool).await?;
    let current = page_slice(&selection, page.page());
    // an explicitly requested page past the end is a missing resource
    if current.is_empty() {
        return Err(ApiError::NotFound);
    }

    let categories = categories::get_all_categories(&pool).await?;

    Ok(Json(json!({
        "success": true,
        "questions": current,
        "total_questions": selection.len(),
        "categories": categories_map(&categories),
    })))
}

async fn create_question(
    State(pool): State<SqlitePool>,
    Query(page): Query<PageQuery>,
    Json(body): Json<NewQuestion>,
) -> Result<Json<Value>, ApiError> {
    let (Some(question), Some(answer), Some(difficulty), Some(category)) =
        (body.question, body.answer, body.difficulty, body.category)
    else {
        return Err(ApiError::Unprocessable);
    };

    let id = questions::create_question(&pool, &question, &answer, category, difficulty)
        .await
        .map_err(|error| {
            tracing::error!("Failed to create question: {error:#}");
            ApiError::Unprocessable
        })?;

    let selection = questions::get_all_questions(&pool).await?;
    let current = page_slice(&selection, page.page());

    Ok(Json(json!({
        "success": true,
        "created": id,
        "question_created": question,
        "questions": current,
        "total_questions": selection.len(),
    })))
}

async fn delete_question(
    State(pool): State<SqlitePool>,
    Path(id): Path<i64>,
) -> Result<Json<Value>, ApiError> {
    let question = questions::get_question_by_id(&pool, id)
        .await?
        .ok_or(ApiError::NotFound)?;

    questions::delete_question(&pool, question.id)
        .await
        .map_err(|error| {
            tracing::error!("Failed to delete question {id}: {error:#}");
            ApiError::Unprocessable
        })?;

    Ok(Json(json!({
        "success": true,
        "deleted": id,
    })))
}

async fn search_questions(
    State(pool): State<SqlitePool>,
    Query(page): Query<PageQuery>,
    Json(body): Json<SearchBody>,
) -> Result<Json<Value>, ApiError> {
    let term = body
        .search_term
        .filter(|term| !term.is_empty())
        .ok_or(ApiError::Unprocessable)?;

    let result = questions::search_questions(&pool, &term).await?;
    if result.is_empty() {
        return Err(ApiError::NotFound);
    }
    let current = page_slice(&result, page.page());

    Ok(Json(json!({
        "success": true,
        "questions": current,
        "total_questions": questions::count_questions(&pool).await?,
    })))
}

pub fn questions_router(state: AppState) -> Router {
    Router::new()
        .route("/questions", get(list_questions).post(create_question))
        .route("/questions/{id}", delete(delete_question))
        .route("/Search_questions", post(search_questions))
        .with_state(state)
}
