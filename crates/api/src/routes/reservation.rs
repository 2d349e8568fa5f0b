use axum::{
    routing::{get, patch, post, put},
    Router,
};
use std::sync::Arc;

use crate::{handlers, ApiState};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route(
            "/api/reservations",
            post(handlers::reservation::create_reservation),
        )
        .route(
            "/api/reservations",
            get(handlers::reservation::list_reservations),
        )
        .route(
            "/api/reservations/:id",
            put(handlers::reservation::update_reservation_status),
        )
        .route(
            "/api/reservations/:id/artist",
            patch(handlers::reservation::assign_artist),
        )
}
