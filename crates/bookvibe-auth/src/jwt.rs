//! JWT issuance and verification.
//!
//! Tokens are HS256-signed with the configured secret. Verification checks
//! the signature and the `exp` claim with no clock leeway, so a token stops
//! working the second its lifetime ends.

use bookvibe_config::JwtConfig;
use bookvibe_core::AppError;
use chrono::Utc;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};

use crate::claims::{Claims, IdentityPayload};

/// Mints a token embedding `payload`, valid for the configured lifetime.
///
/// # Errors
///
/// Returns an internal error if encoding fails.
pub fn issue_token(payload: IdentityPayload, jwt_config: &JwtConfig) -> Result<String, AppError> {
    let now = Utc::now().timestamp().max(0) as usize;
    let lifetime = jwt_config.access_token_expiry.max(0) as usize;

    encode_claims(&Claims::new(payload, now, lifetime), jwt_config)
}

/// Signs already-built claims.
pub fn encode_claims(claims: &Claims, jwt_config: &JwtConfig) -> Result<String, AppError> {
    encode(
        &Header::new(Algorithm::HS256),
        claims,
        &EncodingKey::from_secret(jwt_config.secret.as_bytes()),
    )
    .map_err(AppError::internal)
}

/// Verifies a token and returns its claims.
///
/// # Errors
///
/// Returns an unauthorized error if the signature is invalid, the token has
/// expired, or it is not a well-formed JWT.
pub fn verify_token(token: &str, jwt_config: &JwtConfig) -> Result<Claims, AppError> {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.leeway = 0;
    // Payloads are caller-defined and may carry an `aud` nobody configured.
    validation.validate_aud = false;

    decode::<Claims>(
        token,
        &DecodingKey::from_secret(jwt_config.secret.as_bytes()),
        &validation,
    )
    .map(|data| data.claims)
    .map_err(AppError::unauthorized)
}
