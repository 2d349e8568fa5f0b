use eyre::Result;
use sqlx::{Pool, Postgres};
use tracing::info;

pub async fn initialize_database(pool: &Pool<Postgres>) -> Result<()> {
    info!("Initializing database schema...");

    // Create users table
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS users (
            id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
            username VARCHAR(255) NOT NULL,
            password_hash VARCHAR(255) NULL,
            phone_number VARCHAR(32) NOT NULL UNIQUE,
            role VARCHAR(32) NOT NULL DEFAULT 'user',
            created_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW()
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Create categories table
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS categories (
            id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
            name VARCHAR(255) NOT NULL,
            description TEXT NULL,
            created_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW()
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Create services table
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS services (
            id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
            name VARCHAR(255) NOT NULL,
            description TEXT NULL,
            price BIGINT NULL,
            duration_minutes INTEGER NULL,
            category_id UUID REFERENCES categories(id) ON DELETE SET NULL,
            available BOOLEAN NOT NULL DEFAULT TRUE,
            created_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW()
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Create reservations table. The service reference is deliberately not
    // a foreign key: bookings outlive catalog rows, and the availability
    // check treats a dangling reference as unresolved.
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS reservations (
            id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
            user_id UUID REFERENCES users(id),
            guest_name VARCHAR(255) NULL,
            guest_phone VARCHAR(32) NULL,
            service_id UUID NOT NULL,
            artist_id UUID REFERENCES users(id),
            date TIMESTAMP WITH TIME ZONE NOT NULL,
            status VARCHAR(32) NOT NULL DEFAULT 'pending',
            notes TEXT NULL,
            created_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW(),
            CONSTRAINT booked_by CHECK (
                user_id IS NOT NULL OR (guest_name IS NOT NULL AND guest_phone IS NOT NULL)
            )
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Create salon_info table
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS salon_info (
            id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
            name VARCHAR(255) NOT NULL,
            address TEXT NOT NULL,
            phone_numbers TEXT[] NOT NULL,
            location TEXT NOT NULL,
            description TEXT NULL,
            logo TEXT NOT NULL,
            working_hours_start VARCHAR(16) NOT NULL,
            working_hours_end VARCHAR(16) NOT NULL,
            instagram VARCHAR(255) NOT NULL,
            telegram VARCHAR(255) NULL,
            whatsapp VARCHAR(255) NULL,
            created_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW()
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Create site_settings table
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS site_settings (
            id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
            hero_image TEXT NOT NULL DEFAULT '',
            created_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW()
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Create gallery_images table
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS gallery_images (
            id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
            src TEXT NOT NULL,
            alt TEXT NOT NULL,
            created_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW()
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Create indexes
    sqlx::query(
        r#"
        CREATE INDEX IF NOT EXISTS idx_services_category_id ON services(category_id);
        CREATE INDEX IF NOT EXISTS idx_reservations_service_id ON reservations(service_id);
        CREATE INDEX IF NOT EXISTS idx_reservations_date ON reservations(date);
        CREATE INDEX IF NOT EXISTS idx_reservations_user_id ON reservations(user_id);
        CREATE INDEX IF NOT EXISTS idx_reservations_artist_id ON reservations(artist_id);
        CREATE INDEX IF NOT EXISTS idx_users_role ON users(role);
        "#,
    )
    .execute(pool)
    .await?;

    info!("Database schema initialized successfully.");
    Ok(())
}
