use std::collections::BTreeMap;

use axum::{
    extract::{Path, Query, State},
    routing::get,
    Json, Router,
};
use serde_json::{json, Value};
use sqlx::SqlitePool;

use crate::db::queries::{categories, questions};
use crate::db::Category;
use crate::server::app::AppState;
use crate::server::error::ApiError;
use crate::server::pagination::{page_slice, PageQuery};

/// `{"<id>": "<type>"}` map, the shape the frontend expects.
pub(super) fn categories_map(categories: &[Category]) -> BTreeMap<String, String> {
    categories
        .iter()
        .map(|category| (category.id.to_string(), category.kind.clone()))
        .collect()
}

async fn get_categories(State(pool): State<SqlitePool>) -> Result<Json<Value>, ApiError> {
    let categories = categories::get_all_categories(&pool).await?;
    if categories.is_empty() {
        return Err(ApiError::NotFound);
    }

    Ok(Json(json!({
        "success": true,
        "categories": categories_map(&categories),
    })))
}

async fn get_questions_by_category(
    State(pool): State<SqlitePool>,
    Path(id): Path<i64>,
    Query(page): Query<PageQuery>,
) -> Result<Json<Value>, ApiError> {
    let category = categories::get_category(&pool, id)
        .await?
        .ok_or(ApiError::BadRequest)?;

    let selection = questions::get_questions_for_category(&pool, category.id).await?;
    let current = page_slice(&selection, page.page());

    Ok(Json(json!({
        "success": true,
        "questions": current,
        "total_questions": questions::count_questions(&pool).await?,
        "current_category": category.kind,
    })))
}

pub fn category_router(state: AppState) -> Router {
    Router::new()
        .route("/categories", get(get_categories))
        .route("/categories/{id}/questions", get(get_questions_by_category))
        .with_state(state)
}
