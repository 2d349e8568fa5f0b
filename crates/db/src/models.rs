use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbUser {
    pub id: Uuid,
    pub username: String,
    pub password_hash: Option<String>,
    pub phone_number: String,
    pub role: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbCategory {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbService {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub price: Option<i64>,
    pub duration_minutes: Option<i32>,
    pub category_id: Option<Uuid>,
    pub available: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbServiceWithCategory {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub price: Option<i64>,
    pub duration_minutes: Option<i32>,
    pub category_id: Option<Uuid>,
    pub category_name: Option<String>,
    pub available: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbReservation {
    pub id: Uuid,
    pub user_id: Option<Uuid>,
    pub guest_name: Option<String>,
    pub guest_phone: Option<String>,
    pub service_id: Uuid,
    pub artist_id: Option<Uuid>,
    pub date: DateTime<Utc>,
    pub status: String,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Reservation row with its service and artist joined in. The service
/// columns are null when the catalog row has been deleted since the
/// booking was made; `service_name` doubles as the join-hit marker.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbReservationDetails {
    pub id: Uuid,
    pub user_id: Option<Uuid>,
    pub guest_name: Option<String>,
    pub guest_phone: Option<String>,
    pub service_id: Uuid,
    pub artist_id: Option<Uuid>,
    pub date: DateTime<Utc>,
    pub status: String,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub service_name: Option<String>,
    pub service_price: Option<i64>,
    pub service_duration_minutes: Option<i32>,
    pub artist_username: Option<String>,
    pub artist_phone: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbSalonInfo {
    pub id: Uuid,
    pub name: String,
    pub address: String,
    pub phone_numbers: Vec<String>,
    pub location: String,
    pub description: Option<String>,
    pub logo: String,
    pub working_hours_start: String,
    pub working_hours_end: String,
    pub instagram: String,
    pub telegram: Option<String>,
    pub whatsapp: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbSiteSettings {
    pub id: Uuid,
    pub hero_image: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbGalleryImage {
    pub id: Uuid,
    pub src: String,
    pub alt: String,
    pub created_at: DateTime<Utc>,
}
