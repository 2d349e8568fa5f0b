use argon2::PasswordVerifier;
use chrono::Utc;
use salonbook_api::middleware::auth;
use salonbook_core::errors::SalonError;
use salonbook_db::models::DbUser;
use uuid::Uuid;

#[tokio::test]
async fn test_error_handling_not_found() {
    // Create a not found error
    let error = SalonError::NotFound("Resource not found".to_string());

    // Map the error to a response
    let response = salonbook_api::middleware::error_handling::map_error(error);

    // Assert the response has the correct status code
    assert_eq!(response.status(), axum::http::StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_error_handling_validation() {
    // Create a validation error
    let error = SalonError::Validation("Invalid input".to_string());

    // Map the error to a response
    let response = salonbook_api::middleware::error_handling::map_error(error);

    // Assert the response has the correct status code
    assert_eq!(response.status(), axum::http::StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_error_handling_authentication() {
    // Create an authentication error
    let error = SalonError::Authentication("Invalid password".to_string());

    // Map the error to a response
    let response = salonbook_api::middleware::error_handling::map_error(error);

    // Assert the response has the correct status code
    assert_eq!(response.status(), axum::http::StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_error_handling_authorization() {
    // Create an authorization error
    let error = SalonError::Authorization("Not authorized".to_string());

    // Map the error to a response
    let response = salonbook_api::middleware::error_handling::map_error(error);

    // Assert the response has the correct status code
    assert_eq!(response.status(), axum::http::StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_error_handling_database() {
    // Create a database error
    let error = SalonError::Database(eyre::eyre!("Database error"));

    // Map the error to a response
    let response = salonbook_api::middleware::error_handling::map_error(error);

    // Assert the response has the correct status code
    assert_eq!(response.status(), axum::http::StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn test_error_handling_internal() {
    // Create an internal error
    let error = SalonError::Internal(Box::new(std::io::Error::new(
        std::io::ErrorKind::Other,
        "Internal error",
    )));

    // Map the error to a response
    let response = salonbook_api::middleware::error_handling::map_error(error);

    // Assert the response has the correct status code
    assert_eq!(response.status(), axum::http::StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn test_hash_password() {
    // Test that password hashing works
    let password = "test_password";
    let hashed = auth::hash_password(password).unwrap();

    // Verify the hash is different from the original password
    assert_ne!(hashed, password);

    // Verify the hash starts with the argon2 prefix
    assert!(hashed.starts_with("$argon2"));
}

#[tokio::test]
async fn test_verify_password() {
    let password = "test_password";
    let hashed = auth::hash_password(password).unwrap();

    // Verify a correct password
    assert!(auth::verify_password(&hashed, password).unwrap());

    // Verify an incorrect password
    assert!(!auth::verify_password(&hashed, "wrong_password").unwrap());

    // Let's also manually test with argon2 that our hash works
    let argon2 = argon2::Argon2::default();
    let parsed_hash = argon2::PasswordHash::new(&hashed).unwrap();
    assert!(argon2
        .verify_password(password.as_bytes(), &parsed_hash)
        .is_ok());
}

fn sample_user() -> DbUser {
    DbUser {
        id: Uuid::new_v4(),
        username: "nasrin".to_string(),
        password_hash: None,
        phone_number: "09121234567".to_string(),
        role: "admin".to_string(),
        created_at: Utc::now(),
    }
}

#[tokio::test]
async fn test_token_round_trip() {
    let user = sample_user();
    let token = auth::issue_token(&user, "secret").unwrap();

    let claims = auth::decode_token(&token, "secret").unwrap();

    assert_eq!(claims.id, user.id);
    assert_eq!(claims.name, user.username);
    assert_eq!(claims.phone_number, user.phone_number);
    assert_eq!(claims.role, user.role);
}

#[tokio::test]
async fn test_token_rejects_wrong_secret() {
    let user = sample_user();
    let token = auth::issue_token(&user, "secret").unwrap();

    assert!(auth::decode_token(&token, "another-secret").is_err());
}

#[tokio::test]
async fn test_token_rejects_garbage() {
    assert!(auth::decode_token("not-a-token", "secret").is_err());
}
