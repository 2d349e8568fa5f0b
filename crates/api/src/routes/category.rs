use axum::{
    routing::{delete, get, post, put},
    Router,
};
use std::sync::Arc;

use crate::{handlers, ApiState};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route("/api/categories", get(handlers::category::list_categories))
        .route("/api/categories", post(handlers::category::create_category))
        .route(
            "/api/categories/:id",
            put(handlers::category::update_category),
        )
        .route(
            "/api/categories/:id",
            delete(handlers::category::delete_category),
        )
}
