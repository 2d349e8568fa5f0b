use crate::models::{DbService, DbServiceWithCategory};
use chrono::Utc;
use eyre::Result;
use sqlx::{Pool, Postgres};
use uuid::Uuid;

pub async fn create_service(
    pool: &Pool<Postgres>,
    name: &str,
    description: Option<&str>,
    price: Option<i64>,
    duration_minutes: Option<i32>,
    category_id: Option<Uuid>,
    available: bool,
) -> Result<DbService> {
    let id = Uuid::new_v4();
    let now = Utc::now();

    tracing::debug!("Creating service: id={}, name={}", id, name);

    let service = sqlx::query_as::<_, DbService>(
        r#"
        INSERT INTO services (id, name, description, price, duration_minutes, category_id, available, created_at)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
        RETURNING id, name, description, price, duration_minutes, category_id, available, created_at
        "#,
    )
    .bind(id)
    .bind(name)
    .bind(description)
    .bind(price)
    .bind(duration_minutes)
    .bind(category_id)
    .bind(available)
    .bind(now)
    .fetch_one(pool)
    .await?;

    Ok(service)
}

pub async fn get_service_by_id(pool: &Pool<Postgres>, id: Uuid) -> Result<Option<DbService>> {
    let service = sqlx::query_as::<_, DbService>(
        r#"
        SELECT id, name, description, price, duration_minutes, category_id, available, created_at
        FROM services
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(service)
}

pub async fn list_services(pool: &Pool<Postgres>) -> Result<Vec<DbServiceWithCategory>> {
    let services = sqlx::query_as::<_, DbServiceWithCategory>(
        r#"
        SELECT s.id, s.name, s.description, s.price, s.duration_minutes,
               s.category_id, c.name AS category_name, s.available, s.created_at
        FROM services s
        LEFT JOIN categories c ON c.id = s.category_id
        ORDER BY s.name ASC
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(services)
}

pub async fn update_service(
    pool: &Pool<Postgres>,
    id: Uuid,
    name: Option<&str>,
    description: Option<&str>,
    price: Option<i64>,
    duration_minutes: Option<i32>,
    category_id: Option<Uuid>,
    available: Option<bool>,
) -> Result<Option<DbService>> {
    let service = sqlx::query_as::<_, DbService>(
        r#"
        UPDATE services
        SET name = COALESCE($2, name),
            description = COALESCE($3, description),
            price = COALESCE($4, price),
            duration_minutes = COALESCE($5, duration_minutes),
            category_id = COALESCE($6, category_id),
            available = COALESCE($7, available)
        WHERE id = $1
        RETURNING id, name, description, price, duration_minutes, category_id, available, created_at
        "#,
    )
    .bind(id)
    .bind(name)
    .bind(description)
    .bind(price)
    .bind(duration_minutes)
    .bind(category_id)
    .bind(available)
    .fetch_optional(pool)
    .await?;

    Ok(service)
}

pub async fn delete_service(pool: &Pool<Postgres>, id: Uuid) -> Result<Option<DbService>> {
    let service = sqlx::query_as::<_, DbService>(
        r#"
        DELETE FROM services
        WHERE id = $1
        RETURNING id, name, description, price, duration_minutes, category_id, available, created_at
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(service)
}
