use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkingHours {
    pub start: String,
    pub end: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SalonInfo {
    pub id: Uuid,
    pub name: String,
    pub address: String,
    pub phone_numbers: Vec<String>,
    pub location: String,
    pub description: Option<String>,
    pub logo: String,
    pub working_hours: WorkingHours,
    pub instagram: String,
    pub telegram: Option<String>,
    pub whatsapp: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpsertSalonInfoRequest {
    pub name: String,
    pub address: String,
    pub phone_numbers: Vec<String>,
    pub location: String,
    pub description: Option<String>,
    pub logo: String,
    pub working_hours: WorkingHours,
    pub instagram: String,
    pub telegram: Option<String>,
    pub whatsapp: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GalleryImage {
    pub id: Uuid,
    pub src: String,
    pub alt: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteSettings {
    pub hero_image: String,
    pub gallery_images: Vec<GalleryImage>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateHeroImageRequest {
    pub hero_image: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddGalleryImageRequest {
    pub src: String,
    pub alt: String,
}
