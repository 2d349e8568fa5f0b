use axum::{
    routing::{delete, get, post, put},
    Router,
};
use std::sync::Arc;

use crate::{handlers, ApiState};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route("/api/salon", get(handlers::salon::get_salon_info))
        .route("/api/salon", put(handlers::salon::upsert_salon_info))
        .route(
            "/api/site-settings",
            get(handlers::salon::get_site_settings),
        )
        .route(
            "/api/site-settings",
            put(handlers::salon::update_hero_image),
        )
        .route(
            "/api/site-settings/gallery",
            post(handlers::salon::add_gallery_image),
        )
        .route(
            "/api/site-settings/gallery/:id",
            delete(handlers::salon::delete_gallery_image),
        )
}
