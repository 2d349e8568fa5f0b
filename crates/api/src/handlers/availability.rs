//! # Availability Handlers
//!
//! This module contains the handler that computes bookable time slots for a
//! service on a given day. It is the server side of the reservation form's
//! time picker: the client selects a service and a date, and receives the
//! ordered slot list with each slot flagged available or taken.
//!
//! ## Slot Availability Algorithm
//!
//! The computation itself lives in `salonbook_core::scheduling` and is a
//! pure function. This handler:
//!
//! 1. Resolves the service and its duration (falling back to the default
//!    when the catalog row has no duration)
//! 2. Fetches the salon-wide reservation list with joined service records
//! 3. Keeps only reservations starting on the target date
//! 4. Maps each row to a reservation span, marking the service reference
//!    resolved or unresolved depending on whether the join found a row
//! 5. Generates the slot grid and returns it in ascending order
//!
//! Reservations for other services do not block a slot; the salon runs
//! services in parallel. Availability is recomputed on every request and
//! never cached, so a booking made between two calls is reflected
//! immediately.

use axum::{
    extract::{Query, State},
    Json,
};
use chrono::NaiveDate;
use serde::Deserialize;
use std::sync::Arc;
use uuid::Uuid;

use salonbook_core::{
    errors::SalonError,
    models::time_slot::AvailabilityResponse,
    scheduling::{
        generate_time_slots, BookedService, ReservationSpan, ServiceRef,
        DEFAULT_DURATION_MINUTES,
    },
};

use crate::{middleware::error_handling::AppError, ApiState};

/// Query parameters for the availability endpoint
///
/// # Fields
///
/// * `service_id` - UUID of the service being booked
/// * `date` - Target day in `YYYY-MM-DD` format
#[derive(Debug, Deserialize)]
pub struct AvailabilityQuery {
    /// Service being booked
    pub service_id: Uuid,

    /// Target day in `YYYY-MM-DD` format
    pub date: NaiveDate,
}

/// Computes the bookable slots for a service on a given day
///
/// # Endpoint
///
/// ```text
/// GET /api/availability?service_id=<uuid>&date=2024-01-01
/// ```
///
/// # Returns
///
/// * `Result<Json<AvailabilityResponse>, AppError>` - Ordered slot list with
///   availability flags, or an error if the operation fails
///
/// # Errors
///
/// * `SalonError::NotFound` - Service does not exist
/// * `SalonError::Database` - Database error
#[axum::debug_handler]
pub async fn get_availability(
    State(state): State<Arc<ApiState>>,
    Query(query): Query<AvailabilityQuery>,
) -> Result<Json<AvailabilityResponse>, AppError> {
    // Resolve the service being booked
    let service =
        salonbook_db::repositories::service::get_service_by_id(&state.db_pool, query.service_id)
            .await
            .map_err(SalonError::Database)?
            .ok_or_else(|| {
                SalonError::NotFound(format!("Service with ID {} not found", query.service_id))
            })?;

    let duration_minutes = service
        .duration_minutes
        .map(|minutes| minutes as u32)
        .unwrap_or(DEFAULT_DURATION_MINUTES);

    // Fetch the salon-wide reservation list and keep the target day only
    let reservations =
        salonbook_db::repositories::reservation::list_reservations(&state.db_pool)
            .await
            .map_err(SalonError::Database)?;

    let spans: Vec<ReservationSpan> = reservations
        .into_iter()
        .filter(|reservation| reservation.date.date_naive() == query.date)
        .map(|reservation| ReservationSpan {
            start: reservation.date.naive_utc(),
            // service_name is non-null in the catalog, so a missing value
            // means the left join found no row and the reference is stale.
            service: match reservation.service_name {
                Some(_) => ServiceRef::Resolved(BookedService {
                    id: reservation.service_id,
                    duration_minutes: reservation
                        .service_duration_minutes
                        .map(|minutes| minutes as u32),
                }),
                None => ServiceRef::Id(reservation.service_id),
            },
        })
        .collect();

    let slots = generate_time_slots(duration_minutes, query.date, &spans, query.service_id);

    Ok(Json(AvailabilityResponse {
        service_id: query.service_id,
        date: query.date,
        duration_minutes,
        slots,
    }))
}
