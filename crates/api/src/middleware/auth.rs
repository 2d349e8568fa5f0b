//! # Authentication Module
//!
//! This module provides authentication-related utilities for the salonbook
//! API: password hashing and verification for user accounts, and signed
//! session tokens carried by the booking and admin endpoints.
//!
//! Passwords are hashed with Argon2; session tokens are JWTs signed with
//! the `JWT_SECRET` configured for the server.

use argon2::{
    password_hash::{rand_core::OsRng, SaltString},
    Argon2, PasswordHasher, PasswordVerifier,
};
use chrono::{Duration, Utc};
use eyre::{eyre, Result};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use salonbook_db::models::DbUser;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Session token lifetime in hours.
const TOKEN_TTL_HOURS: i64 = 12;

/// Claims carried by a session token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub id: Uuid,
    pub name: String,
    pub phone_number: String,
    pub role: String,
    pub exp: usize,
}

/// Hashes a password using the Argon2 algorithm
///
/// This function securely hashes passwords before storage in the database,
/// automatically generating a random salt and using industry-standard
/// parameters for Argon2.
///
/// # Security Notes
///
/// - Uses a random salt for each password
/// - Uses default Argon2 parameters (memory: 19MiB, iterations: 3, parallelism: 4)
/// - Returns the password in PHC string format
pub fn hash_password(password: &str) -> Result<String> {
    // Generate a fresh, random salt
    let salt = SaltString::generate(&mut OsRng);

    // Create default Argon2 instance
    let argon2 = Argon2::default();

    // Hash the password with salt
    let password_hash = argon2
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| eyre!("Error hashing password: {}", e))?
        .to_string();

    Ok(password_hash)
}

/// Verifies a plain text password against a stored Argon2 hash.
pub fn verify_password(hash: &str, password: &str) -> Result<bool> {
    let parsed_hash = argon2::PasswordHash::new(hash)
        .map_err(|e| eyre!("Invalid password hash: {}", e))?;

    let is_valid = Argon2::default()
        .verify_password(password.as_bytes(), &parsed_hash)
        .is_ok();

    Ok(is_valid)
}

/// Issues a signed session token for an authenticated user.
///
/// The claims mirror what the booking flow needs to attribute a reservation
/// without a second lookup: user id, display name, phone number and role.
/// Tokens expire after [`TOKEN_TTL_HOURS`].
pub fn issue_token(user: &DbUser, secret: &str) -> Result<String> {
    let exp = (Utc::now() + Duration::hours(TOKEN_TTL_HOURS)).timestamp() as usize;

    let claims = Claims {
        id: user.id,
        name: user.username.clone(),
        phone_number: user.phone_number.clone(),
        role: user.role.clone(),
        exp,
    };

    let token = encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(|e| eyre!("Error signing token: {}", e))?;

    Ok(token)
}

/// Decodes and validates a session token, returning its claims.
pub fn decode_token(token: &str, secret: &str) -> Result<Claims> {
    let data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::default(),
    )
    .map_err(|e| eyre!("Invalid token: {}", e))?;

    Ok(data.claims)
}
