use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReservationStatus {
    Pending,
    Confirmed,
    Cancelled,
    Completed,
}

impl ReservationStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReservationStatus::Pending => "pending",
            ReservationStatus::Confirmed => "confirmed",
            ReservationStatus::Cancelled => "cancelled",
            ReservationStatus::Completed => "completed",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "pending" => Some(ReservationStatus::Pending),
            "confirmed" => Some(ReservationStatus::Confirmed),
            "cancelled" => Some(ReservationStatus::Cancelled),
            "completed" => Some(ReservationStatus::Completed),
            _ => None,
        }
    }
}

/// Contact details for a booking made without a user account.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GuestInfo {
    pub name: String,
    pub phone_number: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Reservation {
    pub id: Uuid,
    pub user_id: Option<Uuid>,
    pub guest_info: Option<GuestInfo>,
    pub service_id: Uuid,
    pub artist_id: Option<Uuid>,
    pub date: DateTime<Utc>,
    pub status: ReservationStatus,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Summary of the booked service, present when the catalog row still exists.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReservationService {
    pub id: Uuid,
    pub name: String,
    pub price: Option<i64>,
    pub duration_minutes: Option<i32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReservationArtist {
    pub id: Uuid,
    pub username: String,
    pub phone_number: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReservationDetails {
    pub id: Uuid,
    pub user_id: Option<Uuid>,
    pub guest_info: Option<GuestInfo>,
    pub service_id: Uuid,
    pub service: Option<ReservationService>,
    pub artist: Option<ReservationArtist>,
    pub date: DateTime<Utc>,
    pub status: ReservationStatus,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateReservationRequest {
    pub service_id: Uuid,
    pub artist_id: Option<Uuid>,
    pub date: DateTime<Utc>,
    pub notes: Option<String>,
    pub guest_name: Option<String>,
    pub guest_phone_number: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateReservationResponse {
    pub message: String,
    pub reservation: Reservation,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListReservationsResponse {
    pub reservations: Vec<ReservationDetails>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateReservationStatusRequest {
    pub status: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssignArtistRequest {
    pub artist_id: Uuid,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateReservationResponse {
    pub message: String,
    pub reservation: Reservation,
}
