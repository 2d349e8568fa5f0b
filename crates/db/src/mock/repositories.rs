use chrono::{DateTime, Utc};
use mockall::mock;
use uuid::Uuid;

use crate::models::{
    DbCategory, DbGalleryImage, DbReservation, DbReservationDetails, DbSalonInfo, DbService,
    DbServiceWithCategory, DbSiteSettings, DbUser,
};

// Mock repositories for testing
mock! {
    pub UserRepo {
        pub async fn create_user(
            &self,
            username: &'static str,
            password_hash: Option<&'static str>,
            phone_number: &'static str,
            role: &'static str,
        ) -> eyre::Result<DbUser>;

        pub async fn get_user_by_id(
            &self,
            id: Uuid,
        ) -> eyre::Result<Option<DbUser>>;

        pub async fn get_user_by_phone(
            &self,
            phone_number: &'static str,
        ) -> eyre::Result<Option<DbUser>>;

        pub async fn list_users(&self) -> eyre::Result<Vec<DbUser>>;

        pub async fn list_users_by_role(
            &self,
            role: &'static str,
        ) -> eyre::Result<Vec<DbUser>>;
    }
}

mock! {
    pub CategoryRepo {
        pub async fn create_category(
            &self,
            name: &'static str,
            description: Option<&'static str>,
        ) -> eyre::Result<DbCategory>;

        pub async fn get_category_by_id(
            &self,
            id: Uuid,
        ) -> eyre::Result<Option<DbCategory>>;

        pub async fn list_categories(&self) -> eyre::Result<Vec<DbCategory>>;

        pub async fn update_category(
            &self,
            id: Uuid,
            name: Option<&'static str>,
            description: Option<&'static str>,
        ) -> eyre::Result<Option<DbCategory>>;

        pub async fn delete_category(
            &self,
            id: Uuid,
        ) -> eyre::Result<Option<DbCategory>>;
    }
}

mock! {
    pub ServiceRepo {
        pub async fn create_service(
            &self,
            name: &'static str,
            description: Option<&'static str>,
            price: Option<i64>,
            duration_minutes: Option<i32>,
            category_id: Option<Uuid>,
            available: bool,
        ) -> eyre::Result<DbService>;

        pub async fn get_service_by_id(
            &self,
            id: Uuid,
        ) -> eyre::Result<Option<DbService>>;

        pub async fn list_services(&self) -> eyre::Result<Vec<DbServiceWithCategory>>;

        pub async fn update_service(
            &self,
            id: Uuid,
            name: Option<&'static str>,
            available: Option<bool>,
        ) -> eyre::Result<Option<DbService>>;

        pub async fn delete_service(
            &self,
            id: Uuid,
        ) -> eyre::Result<Option<DbService>>;
    }
}

mock! {
    pub ReservationRepo {
        pub async fn create_reservation(
            &self,
            user_id: Option<Uuid>,
            guest_name: Option<&'static str>,
            guest_phone: Option<&'static str>,
            service_id: Uuid,
            artist_id: Option<Uuid>,
            date: DateTime<Utc>,
            notes: Option<&'static str>,
        ) -> eyre::Result<DbReservation>;

        pub async fn get_reservation_by_id(
            &self,
            id: Uuid,
        ) -> eyre::Result<Option<DbReservation>>;

        pub async fn list_reservations(&self) -> eyre::Result<Vec<DbReservationDetails>>;

        pub async fn update_reservation_status(
            &self,
            id: Uuid,
            status: &'static str,
        ) -> eyre::Result<Option<DbReservation>>;

        pub async fn assign_artist(
            &self,
            id: Uuid,
            artist_id: Uuid,
        ) -> eyre::Result<Option<DbReservation>>;
    }
}

mock! {
    pub SiteRepo {
        pub async fn get_salon_info(&self) -> eyre::Result<Option<DbSalonInfo>>;

        pub async fn get_site_settings(&self) -> eyre::Result<DbSiteSettings>;

        pub async fn update_hero_image(
            &self,
            hero_image: &'static str,
        ) -> eyre::Result<DbSiteSettings>;

        pub async fn list_gallery_images(&self) -> eyre::Result<Vec<DbGalleryImage>>;

        pub async fn add_gallery_image(
            &self,
            src: &'static str,
            alt: &'static str,
        ) -> eyre::Result<DbGalleryImage>;

        pub async fn delete_gallery_image(
            &self,
            id: Uuid,
        ) -> eyre::Result<Option<DbGalleryImage>>;
    }
}
