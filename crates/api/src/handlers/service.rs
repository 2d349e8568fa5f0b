use axum::{
    extract::{Path, State},
    Json,
};
use std::sync::Arc;
use uuid::Uuid;

use salonbook_core::{
    errors::SalonError,
    models::service::{
        CreateServiceRequest, Service, ServiceWithCategory, UpdateServiceRequest,
    },
};
use salonbook_db::models::DbService;

use crate::{middleware::error_handling::AppError, ApiState};

fn to_service(db: DbService) -> Service {
    Service {
        id: db.id,
        name: db.name,
        description: db.description,
        price: db.price,
        duration_minutes: db.duration_minutes,
        category_id: db.category_id,
        available: db.available,
        created_at: db.created_at,
    }
}

#[axum::debug_handler]
pub async fn create_service(
    State(state): State<Arc<ApiState>>,
    Json(payload): Json<CreateServiceRequest>,
) -> Result<Json<Service>, AppError> {
    // Check the category exists when one is referenced
    if let Some(category_id) = payload.category_id {
        let category_exists =
            salonbook_db::repositories::category::get_category_by_id(&state.db_pool, category_id)
                .await
                .map_err(SalonError::Database)?
                .is_some();

        if !category_exists {
            return Err(AppError(SalonError::NotFound(format!(
                "Category with ID {} not found",
                category_id
            ))));
        }
    }

    let db_service = salonbook_db::repositories::service::create_service(
        &state.db_pool,
        &payload.name,
        payload.description.as_deref(),
        payload.price,
        payload.duration_minutes,
        payload.category_id,
        payload.available.unwrap_or(true),
    )
    .await
    .map_err(SalonError::Database)?;

    Ok(Json(to_service(db_service)))
}

#[axum::debug_handler]
pub async fn list_services(
    State(state): State<Arc<ApiState>>,
) -> Result<Json<Vec<ServiceWithCategory>>, AppError> {
    let db_services = salonbook_db::repositories::service::list_services(&state.db_pool)
        .await
        .map_err(SalonError::Database)?;

    let services = db_services
        .into_iter()
        .map(|row| ServiceWithCategory {
            id: row.id,
            name: row.name,
            description: row.description,
            price: row.price,
            duration_minutes: row.duration_minutes,
            category_id: row.category_id,
            category_name: row.category_name,
            available: row.available,
            created_at: row.created_at,
        })
        .collect();

    Ok(Json(services))
}

#[axum::debug_handler]
pub async fn get_service(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<Uuid>,
) -> Result<Json<Service>, AppError> {
    let db_service = salonbook_db::repositories::service::get_service_by_id(&state.db_pool, id)
        .await
        .map_err(SalonError::Database)?
        .ok_or_else(|| SalonError::NotFound(format!("Service with ID {} not found", id)))?;

    Ok(Json(to_service(db_service)))
}

#[axum::debug_handler]
pub async fn update_service(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateServiceRequest>,
) -> Result<Json<Service>, AppError> {
    let db_service = salonbook_db::repositories::service::update_service(
        &state.db_pool,
        id,
        payload.name.as_deref(),
        payload.description.as_deref(),
        payload.price,
        payload.duration_minutes,
        payload.category_id,
        payload.available,
    )
    .await
    .map_err(SalonError::Database)?
    .ok_or_else(|| SalonError::NotFound(format!("Service with ID {} not found", id)))?;

    Ok(Json(to_service(db_service)))
}

#[axum::debug_handler]
pub async fn delete_service(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<Uuid>,
) -> Result<Json<Service>, AppError> {
    let db_service = salonbook_db::repositories::service::delete_service(&state.db_pool, id)
        .await
        .map_err(SalonError::Database)?
        .ok_or_else(|| SalonError::NotFound(format!("Service with ID {} not found", id)))?;

    Ok(Json(to_service(db_service)))
}
