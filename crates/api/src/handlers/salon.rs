use axum::{
    extract::{Path, State},
    Json,
};
use std::sync::Arc;
use uuid::Uuid;

use salonbook_core::{
    errors::SalonError,
    models::salon::{
        AddGalleryImageRequest, GalleryImage, SalonInfo, SiteSettings, UpdateHeroImageRequest,
        UpsertSalonInfoRequest, WorkingHours,
    },
};
use salonbook_db::models::{DbGalleryImage, DbSalonInfo};

use crate::{middleware::error_handling::AppError, ApiState};

fn to_salon_info(db: DbSalonInfo) -> SalonInfo {
    SalonInfo {
        id: db.id,
        name: db.name,
        address: db.address,
        phone_numbers: db.phone_numbers,
        location: db.location,
        description: db.description,
        logo: db.logo,
        working_hours: WorkingHours {
            start: db.working_hours_start,
            end: db.working_hours_end,
        },
        instagram: db.instagram,
        telegram: db.telegram,
        whatsapp: db.whatsapp,
        created_at: db.created_at,
    }
}

fn to_gallery_image(db: DbGalleryImage) -> GalleryImage {
    GalleryImage {
        id: db.id,
        src: db.src,
        alt: db.alt,
    }
}

/// Returns the salon profile shown on the public pages
#[axum::debug_handler]
pub async fn get_salon_info(
    State(state): State<Arc<ApiState>>,
) -> Result<Json<SalonInfo>, AppError> {
    let db_info = salonbook_db::repositories::site::get_salon_info(&state.db_pool)
        .await
        .map_err(SalonError::Database)?
        .ok_or_else(|| SalonError::NotFound("Salon profile has not been set up".to_string()))?;

    Ok(Json(to_salon_info(db_info)))
}

/// Creates or replaces the salon profile
#[axum::debug_handler]
pub async fn upsert_salon_info(
    State(state): State<Arc<ApiState>>,
    Json(payload): Json<UpsertSalonInfoRequest>,
) -> Result<Json<SalonInfo>, AppError> {
    let db_info = salonbook_db::repositories::site::upsert_salon_info(
        &state.db_pool,
        &payload.name,
        &payload.address,
        &payload.phone_numbers,
        &payload.location,
        payload.description.as_deref(),
        &payload.logo,
        &payload.working_hours.start,
        &payload.working_hours.end,
        &payload.instagram,
        payload.telegram.as_deref(),
        payload.whatsapp.as_deref(),
    )
    .await
    .map_err(SalonError::Database)?;

    Ok(Json(to_salon_info(db_info)))
}

/// Returns the site settings: hero image plus the gallery entries
#[axum::debug_handler]
pub async fn get_site_settings(
    State(state): State<Arc<ApiState>>,
) -> Result<Json<SiteSettings>, AppError> {
    let settings = salonbook_db::repositories::site::get_site_settings(&state.db_pool)
        .await
        .map_err(SalonError::Database)?;

    let gallery = salonbook_db::repositories::site::list_gallery_images(&state.db_pool)
        .await
        .map_err(SalonError::Database)?;

    Ok(Json(SiteSettings {
        hero_image: settings.hero_image,
        gallery_images: gallery.into_iter().map(to_gallery_image).collect(),
    }))
}

/// Replaces the hero image reference
#[axum::debug_handler]
pub async fn update_hero_image(
    State(state): State<Arc<ApiState>>,
    Json(payload): Json<UpdateHeroImageRequest>,
) -> Result<Json<SiteSettings>, AppError> {
    let settings =
        salonbook_db::repositories::site::update_hero_image(&state.db_pool, &payload.hero_image)
            .await
            .map_err(SalonError::Database)?;

    let gallery = salonbook_db::repositories::site::list_gallery_images(&state.db_pool)
        .await
        .map_err(SalonError::Database)?;

    Ok(Json(SiteSettings {
        hero_image: settings.hero_image,
        gallery_images: gallery.into_iter().map(to_gallery_image).collect(),
    }))
}

/// Adds an image to the site gallery
#[axum::debug_handler]
pub async fn add_gallery_image(
    State(state): State<Arc<ApiState>>,
    Json(payload): Json<AddGalleryImageRequest>,
) -> Result<Json<GalleryImage>, AppError> {
    let db_image = salonbook_db::repositories::site::add_gallery_image(
        &state.db_pool,
        &payload.src,
        &payload.alt,
    )
    .await
    .map_err(SalonError::Database)?;

    Ok(Json(to_gallery_image(db_image)))
}

/// Removes an image from the site gallery
#[axum::debug_handler]
pub async fn delete_gallery_image(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<Uuid>,
) -> Result<Json<GalleryImage>, AppError> {
    let db_image = salonbook_db::repositories::site::delete_gallery_image(&state.db_pool, id)
        .await
        .map_err(SalonError::Database)?
        .ok_or_else(|| SalonError::NotFound(format!("Gallery image with ID {} not found", id)))?;

    Ok(Json(to_gallery_image(db_image)))
}
