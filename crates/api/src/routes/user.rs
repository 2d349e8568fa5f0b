use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use crate::{handlers, ApiState};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route("/api/auth/register", post(handlers::user::register))
        .route("/api/auth/login", post(handlers::user::login))
        .route("/api/users", get(handlers::user::list_users))
        .route("/api/users/artists", get(handlers::user::list_artists))
}
