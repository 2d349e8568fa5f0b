use crate::models::{DbReservation, DbReservationDetails};
use chrono::{DateTime, Utc};
use eyre::Result;
use sqlx::{Pool, Postgres};
use uuid::Uuid;

#[allow(clippy::too_many_arguments)]
pub async fn create_reservation(
    pool: &Pool<Postgres>,
    user_id: Option<Uuid>,
    guest_name: Option<&str>,
    guest_phone: Option<&str>,
    service_id: Uuid,
    artist_id: Option<Uuid>,
    date: DateTime<Utc>,
    notes: Option<&str>,
) -> Result<DbReservation> {
    let id = Uuid::new_v4();
    let now = Utc::now();

    tracing::debug!(
        "Creating reservation: id={}, service_id={}, date={}",
        id,
        service_id,
        date
    );

    let reservation = sqlx::query_as::<_, DbReservation>(
        r#"
        INSERT INTO reservations
            (id, user_id, guest_name, guest_phone, service_id, artist_id, date, status, notes, created_at)
        VALUES ($1, $2, $3, $4, $5, $6, $7, 'pending', $8, $9)
        RETURNING id, user_id, guest_name, guest_phone, service_id, artist_id, date, status, notes, created_at
        "#,
    )
    .bind(id)
    .bind(user_id)
    .bind(guest_name)
    .bind(guest_phone)
    .bind(service_id)
    .bind(artist_id)
    .bind(date)
    .bind(notes)
    .bind(now)
    .fetch_one(pool)
    .await?;

    Ok(reservation)
}

pub async fn get_reservation_by_id(
    pool: &Pool<Postgres>,
    id: Uuid,
) -> Result<Option<DbReservation>> {
    let reservation = sqlx::query_as::<_, DbReservation>(
        r#"
        SELECT id, user_id, guest_name, guest_phone, service_id, artist_id, date, status, notes, created_at
        FROM reservations
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(reservation)
}

/// Lists every reservation with its service and artist joined in, newest
/// booking date first. Left joins keep reservations whose service row has
/// been deleted since the booking was made.
pub async fn list_reservations(pool: &Pool<Postgres>) -> Result<Vec<DbReservationDetails>> {
    let reservations = sqlx::query_as::<_, DbReservationDetails>(
        r#"
        SELECT r.id, r.user_id, r.guest_name, r.guest_phone, r.service_id, r.artist_id,
               r.date, r.status, r.notes, r.created_at,
               s.name AS service_name,
               s.price AS service_price,
               s.duration_minutes AS service_duration_minutes,
               a.username AS artist_username,
               a.phone_number AS artist_phone
        FROM reservations r
        LEFT JOIN services s ON s.id = r.service_id
        LEFT JOIN users a ON a.id = r.artist_id
        ORDER BY r.date DESC
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(reservations)
}

pub async fn update_reservation_status(
    pool: &Pool<Postgres>,
    id: Uuid,
    status: &str,
) -> Result<Option<DbReservation>> {
    let reservation = sqlx::query_as::<_, DbReservation>(
        r#"
        UPDATE reservations
        SET status = $2
        WHERE id = $1
        RETURNING id, user_id, guest_name, guest_phone, service_id, artist_id, date, status, notes, created_at
        "#,
    )
    .bind(id)
    .bind(status)
    .fetch_optional(pool)
    .await?;

    Ok(reservation)
}

pub async fn assign_artist(
    pool: &Pool<Postgres>,
    id: Uuid,
    artist_id: Uuid,
) -> Result<Option<DbReservation>> {
    let reservation = sqlx::query_as::<_, DbReservation>(
        r#"
        UPDATE reservations
        SET artist_id = $2
        WHERE id = $1
        RETURNING id, user_id, guest_name, guest_phone, service_id, artist_id, date, status, notes, created_at
        "#,
    )
    .bind(id)
    .bind(artist_id)
    .fetch_optional(pool)
    .await?;

    Ok(reservation)
}
