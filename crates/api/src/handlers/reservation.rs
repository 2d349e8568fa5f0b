use axum::{
    extract::{Path, State},
    http::HeaderMap,
    Json,
};
use std::sync::Arc;
use uuid::Uuid;

use salonbook_core::{
    errors::SalonError,
    models::{
        reservation::{
            AssignArtistRequest, CreateReservationRequest, CreateReservationResponse, GuestInfo,
            ListReservationsResponse, Reservation, ReservationArtist, ReservationDetails,
            ReservationService, ReservationStatus, UpdateReservationResponse,
            UpdateReservationStatusRequest,
        },
        user::UserRole,
    },
};
use salonbook_db::models::DbReservation;

use crate::{
    middleware::{auth, error_handling::AppError},
    ApiState,
};

fn to_reservation(db: DbReservation) -> Reservation {
    let guest_info = match (db.guest_name, db.guest_phone) {
        (Some(name), Some(phone_number)) => Some(GuestInfo { name, phone_number }),
        _ => None,
    };

    Reservation {
        id: db.id,
        user_id: db.user_id,
        guest_info,
        service_id: db.service_id,
        artist_id: db.artist_id,
        date: db.date,
        status: ReservationStatus::parse(&db.status).unwrap_or(ReservationStatus::Pending),
        notes: db.notes,
        created_at: db.created_at,
    }
}

/// Creates a reservation for a registered user or a guest
///
/// An authenticated request carries a session token in the `token` header
/// and books on behalf of that user. Without a valid token the request must
/// supply complete guest contact information instead; a request with
/// neither is rejected.
#[axum::debug_handler]
pub async fn create_reservation(
    State(state): State<Arc<ApiState>>,
    headers: HeaderMap,
    Json(payload): Json<CreateReservationRequest>,
) -> Result<Json<CreateReservationResponse>, AppError> {
    let token = headers
        .get("token")
        .and_then(|value| value.to_str().ok());

    // A valid token wins; an invalid or absent one falls back to guest info
    let user_id = match (token, &state.jwt_secret) {
        (Some(token), Some(secret)) => match auth::decode_token(token, secret) {
            Ok(claims) => Some(claims.id),
            Err(err) => {
                tracing::debug!("Token verification failed: {}", err);
                None
            }
        },
        _ => None,
    };

    let guest_info = if user_id.is_none() {
        match (&payload.guest_name, &payload.guest_phone_number) {
            (Some(name), Some(phone)) => Some((name.clone(), phone.clone())),
            _ => {
                return Err(AppError(SalonError::Validation(
                    "Either login or provide guest information".to_string(),
                )));
            }
        }
    } else {
        None
    };

    let db_reservation = salonbook_db::repositories::reservation::create_reservation(
        &state.db_pool,
        user_id,
        guest_info.as_ref().map(|(name, _)| name.as_str()),
        guest_info.as_ref().map(|(_, phone)| phone.as_str()),
        payload.service_id,
        payload.artist_id,
        payload.date,
        payload.notes.as_deref(),
    )
    .await
    .map_err(SalonError::Database)?;

    let response = CreateReservationResponse {
        message: "Reservation created successfully".to_string(),
        reservation: to_reservation(db_reservation),
    };

    Ok(Json(response))
}

/// Lists every reservation with its service and artist details joined in
#[axum::debug_handler]
pub async fn list_reservations(
    State(state): State<Arc<ApiState>>,
) -> Result<Json<ListReservationsResponse>, AppError> {
    let db_reservations =
        salonbook_db::repositories::reservation::list_reservations(&state.db_pool)
            .await
            .map_err(SalonError::Database)?;

    let reservations = db_reservations
        .into_iter()
        .map(|row| {
            let guest_info = match (row.guest_name, row.guest_phone) {
                (Some(name), Some(phone_number)) => Some(GuestInfo { name, phone_number }),
                _ => None,
            };

            let service = row.service_name.map(|name| ReservationService {
                id: row.service_id,
                name,
                price: row.service_price,
                duration_minutes: row.service_duration_minutes,
            });

            let artist = match (row.artist_id, row.artist_username, row.artist_phone) {
                (Some(id), Some(username), Some(phone_number)) => Some(ReservationArtist {
                    id,
                    username,
                    phone_number,
                }),
                _ => None,
            };

            ReservationDetails {
                id: row.id,
                user_id: row.user_id,
                guest_info,
                service_id: row.service_id,
                service,
                artist,
                date: row.date,
                status: ReservationStatus::parse(&row.status)
                    .unwrap_or(ReservationStatus::Pending),
                notes: row.notes,
                created_at: row.created_at,
            }
        })
        .collect();

    Ok(Json(ListReservationsResponse { reservations }))
}

/// Updates the status of a reservation
///
/// Valid statuses are `pending`, `confirmed`, `cancelled` and `completed`;
/// anything else is rejected before touching the database.
#[axum::debug_handler]
pub async fn update_reservation_status(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateReservationStatusRequest>,
) -> Result<Json<UpdateReservationResponse>, AppError> {
    let status = ReservationStatus::parse(&payload.status).ok_or_else(|| {
        SalonError::Validation(format!("Invalid reservation status: {}", payload.status))
    })?;

    let db_reservation = salonbook_db::repositories::reservation::update_reservation_status(
        &state.db_pool,
        id,
        status.as_str(),
    )
    .await
    .map_err(SalonError::Database)?
    .ok_or_else(|| SalonError::NotFound(format!("Reservation with ID {} not found", id)))?;

    let response = UpdateReservationResponse {
        message: "Reservation status updated successfully".to_string(),
        reservation: to_reservation(db_reservation),
    };

    Ok(Json(response))
}

/// Assigns an artist to a reservation
///
/// The target user must exist and hold the artist role.
#[axum::debug_handler]
pub async fn assign_artist(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<Uuid>,
    Json(payload): Json<AssignArtistRequest>,
) -> Result<Json<UpdateReservationResponse>, AppError> {
    // Validate the artist exists and has the artist role
    let artist = salonbook_db::repositories::user::get_user_by_id(&state.db_pool, payload.artist_id)
        .await
        .map_err(SalonError::Database)?
        .filter(|user| user.role == UserRole::Artist.as_str());

    if artist.is_none() {
        return Err(AppError(SalonError::NotFound(format!(
            "Artist with ID {} not found",
            payload.artist_id
        ))));
    }

    let db_reservation = salonbook_db::repositories::reservation::assign_artist(
        &state.db_pool,
        id,
        payload.artist_id,
    )
    .await
    .map_err(SalonError::Database)?
    .ok_or_else(|| SalonError::NotFound(format!("Reservation with ID {} not found", id)))?;

    let response = UpdateReservationResponse {
        message: "Artist assigned to reservation successfully".to_string(),
        reservation: to_reservation(db_reservation),
    };

    Ok(Json(response))
}
