use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A candidate appointment start time offered to the booking UI.
///
/// `value` and `label` carry the same zero-padded `HH:MM` string; `available`
/// is false when an existing reservation for the same service overlaps the
/// slot's span.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeSlot {
    pub value: String,
    pub label: String,
    pub available: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AvailabilityResponse {
    pub service_id: Uuid,
    pub date: NaiveDate,
    pub duration_minutes: u32,
    pub slots: Vec<TimeSlot>,
}
