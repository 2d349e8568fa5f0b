//! Appointment slot generation for the booking flow.
//!
//! Slots cover a single calendar day inside the salon's fixed operating
//! window, stepped by the service duration within each hour: a 45-minute
//! service yields 09:00, 09:45, then restarts at 10:00. A slot is
//! available when no existing reservation for the same service overlaps
//! its span; services run in parallel, so bookings for other services
//! never block a slot.
//!
//! Everything here is a pure function of its inputs. Callers fetch the
//! day's reservations, resolve the service duration, and recompute on
//! every change; results are never cached.

use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};
use uuid::Uuid;

use crate::models::time_slot::TimeSlot;

/// First bookable hour of the day.
pub const OPEN_HOUR: u32 = 9;
/// Hour after which no new appointment may start.
pub const CLOSE_HOUR: u32 = 20;
/// Fallback duration when a reservation's service record cannot be resolved.
pub const DEFAULT_DURATION_MINUTES: u32 = 30;

/// Catalog record attached to an existing reservation.
#[derive(Debug, Clone)]
pub struct BookedService {
    pub id: Uuid,
    pub duration_minutes: Option<u32>,
}

/// Service reference carried by an existing reservation.
///
/// The catalog lookup can miss (the service may have been deleted since the
/// booking was made), so a reservation holds either the resolved record or
/// just the stored id. Only a resolved reference with a different id exempts
/// a reservation from the overlap check; an unresolved reference cannot be
/// ruled out and participates with the default duration.
#[derive(Debug, Clone)]
pub enum ServiceRef {
    Id(Uuid),
    Resolved(BookedService),
}

/// An existing reservation reduced to what the overlap check needs: its
/// start in salon-local time and its service reference.
#[derive(Debug, Clone)]
pub struct ReservationSpan {
    pub start: NaiveDateTime,
    pub service: ServiceRef,
}

/// Generates the ordered slot list for `service_id` on `date`.
///
/// Candidates run from `OPEN_HOUR` up to `CLOSE_HOUR`, stepping by
/// `service_duration` minutes within each hour. In the final hour, a
/// candidate whose span would spill past the top of the hour is dropped;
/// earlier hours keep minute-remainder candidates as-is.
///
/// `service_duration` must be positive; the value is a caller precondition
/// and is not validated at runtime.
pub fn generate_time_slots(
    service_duration: u32,
    date: NaiveDate,
    reservations: &[ReservationSpan],
    service_id: Uuid,
) -> Vec<TimeSlot> {
    debug_assert!(service_duration > 0, "service duration must be positive");

    let mut slots = Vec::new();

    for hour in OPEN_HOUR..CLOSE_HOUR {
        for minute in (0..60u32).step_by(service_duration as usize) {
            // Skip if we would exceed the end hour
            if hour == CLOSE_HOUR - 1 && minute + service_duration > 60 {
                continue;
            }

            let time_string = format!("{:02}:{:02}", hour, minute);
            let slot_start = NaiveDateTime::new(
                date,
                NaiveTime::from_hms_opt(hour, minute, 0).unwrap(),
            );

            let is_available =
                !overlaps_existing(slot_start, service_duration, reservations, service_id);

            slots.push(TimeSlot {
                value: time_string.clone(),
                label: time_string,
                available: is_available,
            });
        }
    }

    slots
}

/// Returns true when `[slot_start, slot_start + duration)` intersects an
/// existing reservation for the same service.
pub fn overlaps_existing(
    slot_start: NaiveDateTime,
    duration_minutes: u32,
    reservations: &[ReservationSpan],
    service_id: Uuid,
) -> bool {
    if reservations.is_empty() {
        return false;
    }

    let slot_end = slot_start + Duration::minutes(duration_minutes as i64);

    for reservation in reservations {
        // Skip reservations resolved to a different service
        if let ServiceRef::Resolved(service) = &reservation.service {
            if service.id != service_id {
                continue;
            }
        }

        let reservation_duration = match &reservation.service {
            ServiceRef::Resolved(service) => {
                service.duration_minutes.unwrap_or(DEFAULT_DURATION_MINUTES)
            }
            ServiceRef::Id(_) => DEFAULT_DURATION_MINUTES,
        };

        let reservation_start = reservation.start;
        let reservation_end =
            reservation_start + Duration::minutes(reservation_duration as i64);

        let has_overlap = (slot_start < reservation_end && slot_start >= reservation_start)
            || (slot_end > reservation_start && slot_end <= reservation_end)
            || (slot_start <= reservation_start && slot_end >= reservation_end);

        if has_overlap {
            return true;
        }
    }

    false
}
