use crate::models::DbUser;
use chrono::Utc;
use eyre::Result;
use sqlx::{Pool, Postgres};
use uuid::Uuid;

pub async fn create_user(
    pool: &Pool<Postgres>,
    username: &str,
    password_hash: Option<&str>,
    phone_number: &str,
    role: &str,
) -> Result<DbUser> {
    let id = Uuid::new_v4();
    let now = Utc::now();

    tracing::debug!("Creating user: id={}, phone_number={}", id, phone_number);

    let user = sqlx::query_as::<_, DbUser>(
        r#"
        INSERT INTO users (id, username, password_hash, phone_number, role, created_at)
        VALUES ($1, $2, $3, $4, $5, $6)
        RETURNING id, username, password_hash, phone_number, role, created_at
        "#,
    )
    .bind(id)
    .bind(username)
    .bind(password_hash)
    .bind(phone_number)
    .bind(role)
    .bind(now)
    .fetch_one(pool)
    .await?;

    Ok(user)
}

pub async fn get_user_by_id(pool: &Pool<Postgres>, id: Uuid) -> Result<Option<DbUser>> {
    let user = sqlx::query_as::<_, DbUser>(
        r#"
        SELECT id, username, password_hash, phone_number, role, created_at
        FROM users
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(user)
}

pub async fn get_user_by_phone(
    pool: &Pool<Postgres>,
    phone_number: &str,
) -> Result<Option<DbUser>> {
    let user = sqlx::query_as::<_, DbUser>(
        r#"
        SELECT id, username, password_hash, phone_number, role, created_at
        FROM users
        WHERE phone_number = $1
        "#,
    )
    .bind(phone_number)
    .fetch_optional(pool)
    .await?;

    Ok(user)
}

pub async fn list_users(pool: &Pool<Postgres>) -> Result<Vec<DbUser>> {
    let users = sqlx::query_as::<_, DbUser>(
        r#"
        SELECT id, username, password_hash, phone_number, role, created_at
        FROM users
        ORDER BY created_at ASC
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(users)
}

pub async fn list_users_by_role(pool: &Pool<Postgres>, role: &str) -> Result<Vec<DbUser>> {
    let users = sqlx::query_as::<_, DbUser>(
        r#"
        SELECT id, username, password_hash, phone_number, role, created_at
        FROM users
        WHERE role = $1
        ORDER BY username ASC
        "#,
    )
    .bind(role)
    .fetch_all(pool)
    .await?;

    Ok(users)
}
