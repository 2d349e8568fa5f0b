use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Service {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub price: Option<i64>,
    pub duration_minutes: Option<i32>,
    pub category_id: Option<Uuid>,
    pub available: bool,
    pub created_at: DateTime<Utc>,
}

/// Service row joined with the name of its category, as listed in the
/// booking UI and the admin panel.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceWithCategory {
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

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateServiceRequest {
    pub name: String,
    pub description: Option<String>,
    pub price: Option<i64>,
    pub duration_minutes: Option<i32>,
    pub category_id: Option<Uuid>,
    #[serde(default)]
    pub available: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateServiceRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<i64>,
    pub duration_minutes: Option<i32>,
    pub category_id: Option<Uuid>,
    pub available: Option<bool>,
}
