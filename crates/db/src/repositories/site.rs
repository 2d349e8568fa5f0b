use crate::models::{DbGalleryImage, DbSalonInfo, DbSiteSettings};
use chrono::Utc;
use eyre::Result;
use sqlx::{Pool, Postgres};
use uuid::Uuid;

pub async fn get_salon_info(pool: &Pool<Postgres>) -> Result<Option<DbSalonInfo>> {
    let info = sqlx::query_as::<_, DbSalonInfo>(
        r#"
        SELECT id, name, address, phone_numbers, location, description, logo,
               working_hours_start, working_hours_end, instagram, telegram, whatsapp, created_at
        FROM salon_info
        ORDER BY created_at ASC
        LIMIT 1
        "#,
    )
    .fetch_optional(pool)
    .await?;

    Ok(info)
}

/// Replaces the salon profile; the table holds a single row, updated in
/// place when one already exists.
#[allow(clippy::too_many_arguments)]
pub async fn upsert_salon_info(
    pool: &Pool<Postgres>,
    name: &str,
    address: &str,
    phone_numbers: &[String],
    location: &str,
    description: Option<&str>,
    logo: &str,
    working_hours_start: &str,
    working_hours_end: &str,
    instagram: &str,
    telegram: Option<&str>,
    whatsapp: Option<&str>,
) -> Result<DbSalonInfo> {
    let existing = get_salon_info(pool).await?;

    let info = match existing {
        Some(current) => {
            sqlx::query_as::<_, DbSalonInfo>(
                r#"
                UPDATE salon_info
                SET name = $2, address = $3, phone_numbers = $4, location = $5,
                    description = $6, logo = $7, working_hours_start = $8,
                    working_hours_end = $9, instagram = $10, telegram = $11, whatsapp = $12
                WHERE id = $1
                RETURNING id, name, address, phone_numbers, location, description, logo,
                          working_hours_start, working_hours_end, instagram, telegram, whatsapp, created_at
                "#,
            )
            .bind(current.id)
            .bind(name)
            .bind(address)
            .bind(phone_numbers)
            .bind(location)
            .bind(description)
            .bind(logo)
            .bind(working_hours_start)
            .bind(working_hours_end)
            .bind(instagram)
            .bind(telegram)
            .bind(whatsapp)
            .fetch_one(pool)
            .await?
        }
        None => {
            sqlx::query_as::<_, DbSalonInfo>(
                r#"
                INSERT INTO salon_info
                    (id, name, address, phone_numbers, location, description, logo,
                     working_hours_start, working_hours_end, instagram, telegram, whatsapp, created_at)
                VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13)
                RETURNING id, name, address, phone_numbers, location, description, logo,
                          working_hours_start, working_hours_end, instagram, telegram, whatsapp, created_at
                "#,
            )
            .bind(Uuid::new_v4())
            .bind(name)
            .bind(address)
            .bind(phone_numbers)
            .bind(location)
            .bind(description)
            .bind(logo)
            .bind(working_hours_start)
            .bind(working_hours_end)
            .bind(instagram)
            .bind(telegram)
            .bind(whatsapp)
            .bind(Utc::now())
            .fetch_one(pool)
            .await?
        }
    };

    Ok(info)
}

/// Returns the site settings row, inserting the default one on first use.
pub async fn get_site_settings(pool: &Pool<Postgres>) -> Result<DbSiteSettings> {
    let settings = sqlx::query_as::<_, DbSiteSettings>(
        r#"
        SELECT id, hero_image, created_at
        FROM site_settings
        ORDER BY created_at ASC
        LIMIT 1
        "#,
    )
    .fetch_optional(pool)
    .await?;

    if let Some(settings) = settings {
        return Ok(settings);
    }

    let settings = sqlx::query_as::<_, DbSiteSettings>(
        r#"
        INSERT INTO site_settings (id, hero_image, created_at)
        VALUES ($1, '', $2)
        RETURNING id, hero_image, created_at
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(Utc::now())
    .fetch_one(pool)
    .await?;

    Ok(settings)
}

pub async fn update_hero_image(pool: &Pool<Postgres>, hero_image: &str) -> Result<DbSiteSettings> {
    let current = get_site_settings(pool).await?;

    let settings = sqlx::query_as::<_, DbSiteSettings>(
        r#"
        UPDATE site_settings
        SET hero_image = $2
        WHERE id = $1
        RETURNING id, hero_image, created_at
        "#,
    )
    .bind(current.id)
    .bind(hero_image)
    .fetch_one(pool)
    .await?;

    Ok(settings)
}

pub async fn list_gallery_images(pool: &Pool<Postgres>) -> Result<Vec<DbGalleryImage>> {
    let images = sqlx::query_as::<_, DbGalleryImage>(
        r#"
        SELECT id, src, alt, created_at
        FROM gallery_images
        ORDER BY created_at ASC
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(images)
}

pub async fn add_gallery_image(
    pool: &Pool<Postgres>,
    src: &str,
    alt: &str,
) -> Result<DbGalleryImage> {
    let image = sqlx::query_as::<_, DbGalleryImage>(
        r#"
        INSERT INTO gallery_images (id, src, alt, created_at)
        VALUES ($1, $2, $3, $4)
        RETURNING id, src, alt, created_at
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(src)
    .bind(alt)
    .bind(Utc::now())
    .fetch_one(pool)
    .await?;

    Ok(image)
}

pub async fn delete_gallery_image(
    pool: &Pool<Postgres>,
    id: Uuid,
) -> Result<Option<DbGalleryImage>> {
    let image = sqlx::query_as::<_, DbGalleryImage>(
        r#"
        DELETE FROM gallery_images
        WHERE id = $1
        RETURNING id, src, alt, created_at
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(image)
}
