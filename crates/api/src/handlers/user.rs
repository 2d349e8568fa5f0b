use axum::{extract::State, Json};
use std::sync::Arc;

use salonbook_core::{
    errors::SalonError,
    models::user::{
        AuthResponse, ListUsersResponse, LoginRequest, RegisterRequest, User, UserRole,
    },
};
use salonbook_db::models::DbUser;

use crate::{
    middleware::{auth, error_handling::AppError},
    ApiState,
};

fn to_user(db: DbUser) -> User {
    User {
        id: db.id,
        username: db.username,
        phone_number: db.phone_number,
        role: UserRole::parse(&db.role).unwrap_or(UserRole::User),
        created_at: db.created_at,
    }
}

/// Registers a new user account and issues a session token
#[axum::debug_handler]
pub async fn register(
    State(state): State<Arc<ApiState>>,
    Json(payload): Json<RegisterRequest>,
) -> Result<Json<AuthResponse>, AppError> {
    if payload.username.is_empty() || payload.phone_number.is_empty() {
        return Err(AppError(SalonError::Validation(
            "Username and phone number are required".to_string(),
        )));
    }

    // Reject duplicate phone numbers up front
    let existing =
        salonbook_db::repositories::user::get_user_by_phone(&state.db_pool, &payload.phone_number)
            .await
            .map_err(SalonError::Database)?;

    if existing.is_some() {
        return Err(AppError(SalonError::Validation(format!(
            "A user with phone number {} already exists",
            payload.phone_number
        ))));
    }

    let password_hash = auth::hash_password(&payload.password)?;

    let db_user = salonbook_db::repositories::user::create_user(
        &state.db_pool,
        &payload.username,
        Some(&password_hash),
        &payload.phone_number,
        UserRole::User.as_str(),
    )
    .await
    .map_err(SalonError::Database)?;

    let secret = state.jwt_secret.as_deref().ok_or_else(|| {
        SalonError::Internal("JWT_SECRET is not configured".to_string().into())
    })?;

    let token = auth::issue_token(&db_user, secret)?;

    Ok(Json(AuthResponse {
        token,
        user_id: db_user.id,
        username: db_user.username,
    }))
}

/// Authenticates a user by phone number and password
#[axum::debug_handler]
pub async fn login(
    State(state): State<Arc<ApiState>>,
    Json(payload): Json<LoginRequest>,
) -> Result<Json<AuthResponse>, AppError> {
    if payload.phone_number.is_empty() || payload.password.is_empty() {
        return Err(AppError(SalonError::Validation(
            "Phone number and password are required".to_string(),
        )));
    }

    let db_user =
        salonbook_db::repositories::user::get_user_by_phone(&state.db_pool, &payload.phone_number)
            .await
            .map_err(SalonError::Database)?
            .ok_or_else(|| SalonError::Authentication("User not found".to_string()))?;

    let password_hash = db_user.password_hash.as_deref().ok_or_else(|| {
        SalonError::Authentication("Account has no password set".to_string())
    })?;

    let is_valid = auth::verify_password(password_hash, &payload.password)?;

    if !is_valid {
        return Err(AppError(SalonError::Authentication(
            "Invalid password".to_string(),
        )));
    }

    let secret = state.jwt_secret.as_deref().ok_or_else(|| {
        SalonError::Internal("JWT_SECRET is not configured".to_string().into())
    })?;

    let token = auth::issue_token(&db_user, secret)?;

    Ok(Json(AuthResponse {
        token,
        user_id: db_user.id,
        username: db_user.username,
    }))
}

/// Lists every registered user
#[axum::debug_handler]
pub async fn list_users(
    State(state): State<Arc<ApiState>>,
) -> Result<Json<ListUsersResponse>, AppError> {
    let db_users = salonbook_db::repositories::user::list_users(&state.db_pool)
        .await
        .map_err(SalonError::Database)?;

    let users = db_users.into_iter().map(to_user).collect();

    Ok(Json(ListUsersResponse { users }))
}

/// Lists users holding the artist role, for reservation assignment
#[axum::debug_handler]
pub async fn list_artists(
    State(state): State<Arc<ApiState>>,
) -> Result<Json<ListUsersResponse>, AppError> {
    let db_users = salonbook_db::repositories::user::list_users_by_role(
        &state.db_pool,
        UserRole::Artist.as_str(),
    )
    .await
    .map_err(SalonError::Database)?;

    let users = db_users.into_iter().map(to_user).collect();

    Ok(Json(ListUsersResponse { users }))
}
