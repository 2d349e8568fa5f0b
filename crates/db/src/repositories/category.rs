use crate::models::DbCategory;
use chrono::Utc;
use eyre::Result;
use sqlx::{Pool, Postgres};
use uuid::Uuid;

pub async fn create_category(
    pool: &Pool<Postgres>,
    name: &str,
    description: Option<&str>,
) -> Result<DbCategory> {
    let id = Uuid::new_v4();
    let now = Utc::now();

    let category = sqlx::query_as::<_, DbCategory>(
        r#"
        INSERT INTO categories (id, name, description, created_at)
        VALUES ($1, $2, $3, $4)
        RETURNING id, name, description, created_at
        "#,
    )
    .bind(id)
    .bind(name)
    .bind(description)
    .bind(now)
    .fetch_one(pool)
    .await?;

    Ok(category)
}

pub async fn get_category_by_id(pool: &Pool<Postgres>, id: Uuid) -> Result<Option<DbCategory>> {
    let category = sqlx::query_as::<_, DbCategory>(
        r#"
        SELECT id, name, description, created_at
        FROM categories
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(category)
}

pub async fn list_categories(pool: &Pool<Postgres>) -> Result<Vec<DbCategory>> {
    let categories = sqlx::query_as::<_, DbCategory>(
        r#"
        SELECT id, name, description, created_at
        FROM categories
        ORDER BY name ASC
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(categories)
}

pub async fn update_category(
    pool: &Pool<Postgres>,
    id: Uuid,
    name: Option<&str>,
    description: Option<&str>,
) -> Result<Option<DbCategory>> {
    let category = sqlx::query_as::<_, DbCategory>(
        r#"
        UPDATE categories
        SET name = COALESCE($2, name),
            description = COALESCE($3, description)
        WHERE id = $1
        RETURNING id, name, description, created_at
        "#,
    )
    .bind(id)
    .bind(name)
    .bind(description)
    .fetch_optional(pool)
    .await?;

    Ok(category)
}

pub async fn delete_category(pool: &Pool<Postgres>, id: Uuid) -> Result<Option<DbCategory>> {
    let category = sqlx::query_as::<_, DbCategory>(
        r#"
        DELETE FROM categories
        WHERE id = $1
        RETURNING id, name, description, created_at
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(category)
}
