use chrono::{TimeZone, Utc};
use pretty_assertions::assert_eq;
use salonbook_core::{
    errors::SalonError,
    models::reservation::{CreateReservationRequest, ReservationStatus},
};
use salonbook_db::models::{DbReservation, DbUser};
use uuid::Uuid;

use crate::test_utils::TestContext;
use salonbook_api::middleware::{auth, error_handling::AppError};

const TEST_SECRET: &str = "test-secret";

// Create a wrapper that mirrors the reservation creation handler: a valid
// session token books for that user, otherwise complete guest contact
// information is required.
async fn test_create_reservation_wrapper(
    ctx: &mut TestContext,
    token: Option<&str>,
    payload: CreateReservationRequest,
) -> Result<DbReservation, AppError> {
    let user_id = match token {
        Some(token) => auth::decode_token(token, TEST_SECRET)
            .ok()
            .map(|claims| claims.id),
        None => None,
    };

    let guest = if user_id.is_none() {
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

    // Leak the guest strings to satisfy the mock's static lifetimes
    let guest_name: Option<&'static str> = guest
        .as_ref()
        .map(|(name, _)| &*Box::leak(name.clone().into_boxed_str()));
    let guest_phone: Option<&'static str> = guest
        .as_ref()
        .map(|(_, phone)| &*Box::leak(phone.clone().into_boxed_str()));

    let reservation = ctx
        .reservation_repo
        .create_reservation(
            user_id,
            guest_name,
            guest_phone,
            payload.service_id,
            payload.artist_id,
            payload.date,
            None,
        )
        .await?;

    Ok(reservation)
}

async fn test_update_status_wrapper(
    ctx: &mut TestContext,
    id: Uuid,
    status: &str,
) -> Result<DbReservation, AppError> {
    let status = ReservationStatus::parse(status).ok_or_else(|| {
        AppError(SalonError::Validation(format!(
            "Invalid reservation status: {}",
            status
        )))
    })?;

    let reservation = ctx
        .reservation_repo
        .update_reservation_status(id, status.as_str())
        .await?
        .ok_or_else(|| {
            AppError(SalonError::NotFound(format!(
                "Reservation with ID {} not found",
                id
            )))
        })?;

    Ok(reservation)
}

async fn test_assign_artist_wrapper(
    ctx: &mut TestContext,
    id: Uuid,
    artist_id: Uuid,
) -> Result<DbReservation, AppError> {
    let artist = ctx
        .user_repo
        .get_user_by_id(artist_id)
        .await?
        .filter(|user| user.role == "artist");

    if artist.is_none() {
        return Err(AppError(SalonError::NotFound(format!(
            "Artist with ID {} not found",
            artist_id
        ))));
    }

    let reservation = ctx
        .reservation_repo
        .assign_artist(id, artist_id)
        .await?
        .ok_or_else(|| {
            AppError(SalonError::NotFound(format!(
                "Reservation with ID {} not found",
                id
            )))
        })?;

    Ok(reservation)
}

fn booking_request(guest_name: Option<&str>, guest_phone: Option<&str>) -> CreateReservationRequest {
    CreateReservationRequest {
        service_id: Uuid::new_v4(),
        artist_id: None,
        date: Utc.with_ymd_and_hms(2024, 1, 1, 10, 0, 0).unwrap(),
        notes: None,
        guest_name: guest_name.map(|g| g.to_string()),
        guest_phone_number: guest_phone.map(|g| g.to_string()),
    }
}

fn artist_user(id: Uuid, role: &str) -> DbUser {
    DbUser {
        id,
        username: "mina".to_string(),
        password_hash: None,
        phone_number: "09121234567".to_string(),
        role: role.to_string(),
        created_at: Utc::now(),
    }
}

fn echo_reservation(
    user_id: Option<Uuid>,
    guest_name: Option<&str>,
    guest_phone: Option<&str>,
    service_id: Uuid,
) -> DbReservation {
    DbReservation {
        id: Uuid::new_v4(),
        user_id,
        guest_name: guest_name.map(|g| g.to_string()),
        guest_phone: guest_phone.map(|g| g.to_string()),
        service_id,
        artist_id: None,
        date: Utc.with_ymd_and_hms(2024, 1, 1, 10, 0, 0).unwrap(),
        status: "pending".to_string(),
        notes: None,
        created_at: Utc::now(),
    }
}

#[tokio::test]
async fn test_create_reservation_requires_guest_info_without_token() {
    let mut ctx = TestContext::new();

    let result =
        test_create_reservation_wrapper(&mut ctx, None, booking_request(None, None)).await;

    assert!(result.is_err());
    match result.unwrap_err().0 {
        SalonError::Validation(_) => {} // Expected
        e => panic!("Expected Validation error, got: {:?}", e),
    }
}

#[tokio::test]
async fn test_create_reservation_incomplete_guest_info_rejected() {
    let mut ctx = TestContext::new();

    let result =
        test_create_reservation_wrapper(&mut ctx, None, booking_request(Some("Sara"), None)).await;

    assert!(result.is_err());
    match result.unwrap_err().0 {
        SalonError::Validation(_) => {} // Expected
        e => panic!("Expected Validation error, got: {:?}", e),
    }
}

#[tokio::test]
async fn test_create_reservation_as_guest() {
    let mut ctx = TestContext::new();

    ctx.reservation_repo
        .expect_create_reservation()
        .returning(|user_id, guest_name, guest_phone, service_id, _, _, _| {
            Ok(echo_reservation(user_id, guest_name, guest_phone, service_id))
        });

    let reservation = test_create_reservation_wrapper(
        &mut ctx,
        None,
        booking_request(Some("Sara"), Some("09120000000")),
    )
    .await
    .unwrap();

    assert_eq!(reservation.user_id, None);
    assert_eq!(reservation.guest_name.as_deref(), Some("Sara"));
    assert_eq!(reservation.guest_phone.as_deref(), Some("09120000000"));
    assert_eq!(reservation.status, "pending");
}

#[tokio::test]
async fn test_create_reservation_with_valid_token() {
    let mut ctx = TestContext::new();
    let user = artist_user(Uuid::new_v4(), "user");
    let token = auth::issue_token(&user, TEST_SECRET).unwrap();

    ctx.reservation_repo
        .expect_create_reservation()
        .returning(|user_id, guest_name, guest_phone, service_id, _, _, _| {
            Ok(echo_reservation(user_id, guest_name, guest_phone, service_id))
        });

    let reservation = test_create_reservation_wrapper(
        &mut ctx,
        Some(&token),
        booking_request(None, None),
    )
    .await
    .unwrap();

    assert_eq!(reservation.user_id, Some(user.id));
    assert_eq!(reservation.guest_name, None);
    assert_eq!(reservation.guest_phone, None);
}

#[tokio::test]
async fn test_create_reservation_invalid_token_falls_back_to_guest() {
    let mut ctx = TestContext::new();

    ctx.reservation_repo
        .expect_create_reservation()
        .returning(|user_id, guest_name, guest_phone, service_id, _, _, _| {
            Ok(echo_reservation(user_id, guest_name, guest_phone, service_id))
        });

    let reservation = test_create_reservation_wrapper(
        &mut ctx,
        Some("not-a-real-token"),
        booking_request(Some("Sara"), Some("09120000000")),
    )
    .await
    .unwrap();

    assert_eq!(reservation.user_id, None);
    assert_eq!(reservation.guest_name.as_deref(), Some("Sara"));
}

#[tokio::test]
async fn test_update_reservation_status_rejects_unknown_status() {
    let mut ctx = TestContext::new();

    let result = test_update_status_wrapper(&mut ctx, Uuid::new_v4(), "rescheduled").await;

    assert!(result.is_err());
    match result.unwrap_err().0 {
        SalonError::Validation(_) => {} // Expected
        e => panic!("Expected Validation error, got: {:?}", e),
    }
}

#[tokio::test]
async fn test_update_reservation_status_not_found() {
    let mut ctx = TestContext::new();

    ctx.reservation_repo
        .expect_update_reservation_status()
        .returning(|_, _| Ok(None));

    let result = test_update_status_wrapper(&mut ctx, Uuid::new_v4(), "confirmed").await;

    assert!(result.is_err());
    match result.unwrap_err().0 {
        SalonError::NotFound(_) => {} // Expected
        e => panic!("Expected NotFound error, got: {:?}", e),
    }
}

#[tokio::test]
async fn test_update_reservation_status_success() {
    let mut ctx = TestContext::new();
    let reservation_id = Uuid::new_v4();

    ctx.reservation_repo
        .expect_update_reservation_status()
        .returning(|id, status| {
            let mut reservation = echo_reservation(None, Some("Sara"), Some("0912"), Uuid::new_v4());
            reservation.id = id;
            reservation.status = status.to_string();
            Ok(Some(reservation))
        });

    let reservation = test_update_status_wrapper(&mut ctx, reservation_id, "confirmed")
        .await
        .unwrap();

    assert_eq!(reservation.id, reservation_id);
    assert_eq!(reservation.status, "confirmed");
}

#[tokio::test]
async fn test_assign_artist_rejects_non_artist() {
    let mut ctx = TestContext::new();
    let artist_id = Uuid::new_v4();

    ctx.user_repo
        .expect_get_user_by_id()
        .returning(|id| Ok(Some(artist_user(id, "user"))));

    let result = test_assign_artist_wrapper(&mut ctx, Uuid::new_v4(), artist_id).await;

    assert!(result.is_err());
    match result.unwrap_err().0 {
        SalonError::NotFound(_) => {} // Expected
        e => panic!("Expected NotFound error, got: {:?}", e),
    }
}

#[tokio::test]
async fn test_assign_artist_success() {
    let mut ctx = TestContext::new();
    let reservation_id = Uuid::new_v4();
    let artist_id = Uuid::new_v4();

    ctx.user_repo
        .expect_get_user_by_id()
        .returning(|id| Ok(Some(artist_user(id, "artist"))));
    ctx.reservation_repo
        .expect_assign_artist()
        .returning(|id, artist_id| {
            let mut reservation = echo_reservation(None, Some("Sara"), Some("0912"), Uuid::new_v4());
            reservation.id = id;
            reservation.artist_id = Some(artist_id);
            Ok(Some(reservation))
        });

    let reservation = test_assign_artist_wrapper(&mut ctx, reservation_id, artist_id)
        .await
        .unwrap();

    assert_eq!(reservation.id, reservation_id);
    assert_eq!(reservation.artist_id, Some(artist_id));
}
