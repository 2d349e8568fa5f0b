use axum::{
    extract::{Path, State},
    Json,
};
use std::sync::Arc;
use uuid::Uuid;

use salonbook_core::{
    errors::SalonError,
    models::category::{Category, CreateCategoryRequest, UpdateCategoryRequest},
};
use salonbook_db::models::DbCategory;

use crate::{middleware::error_handling::AppError, ApiState};

fn to_category(db: DbCategory) -> Category {
    Category {
        id: db.id,
        name: db.name,
        description: db.description,
        created_at: db.created_at,
    }
}

#[axum::debug_handler]
pub async fn create_category(
    State(state): State<Arc<ApiState>>,
    Json(payload): Json<CreateCategoryRequest>,
) -> Result<Json<Category>, AppError> {
    let db_category = salonbook_db::repositories::category::create_category(
        &state.db_pool,
        &payload.name,
        payload.description.as_deref(),
    )
    .await
    .map_err(SalonError::Database)?;

    Ok(Json(to_category(db_category)))
}

#[axum::debug_handler]
pub async fn list_categories(
    State(state): State<Arc<ApiState>>,
) -> Result<Json<Vec<Category>>, AppError> {
    let db_categories = salonbook_db::repositories::category::list_categories(&state.db_pool)
        .await
        .map_err(SalonError::Database)?;

    let categories = db_categories.into_iter().map(to_category).collect();

    Ok(Json(categories))
}

#[axum::debug_handler]
pub async fn update_category(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateCategoryRequest>,
) -> Result<Json<Category>, AppError> {
    let db_category = salonbook_db::repositories::category::update_category(
        &state.db_pool,
        id,
        payload.name.as_deref(),
        payload.description.as_deref(),
    )
    .await
    .map_err(SalonError::Database)?
    .ok_or_else(|| SalonError::NotFound(format!("Category with ID {} not found", id)))?;

    Ok(Json(to_category(db_category)))
}

#[axum::debug_handler]
pub async fn delete_category(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<Uuid>,
) -> Result<Json<Category>, AppError> {
    let db_category = salonbook_db::repositories::category::delete_category(&state.db_pool, id)
        .await
        .map_err(SalonError::Database)?
        .ok_or_else(|| SalonError::NotFound(format!("Category with ID {} not found", id)))?;

    Ok(Json(to_category(db_category)))
}
