//! Access token claim decoding and expiry checks.

use chrono::Utc;
use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};

use super::AuthError;
use crate::models::auth::TokenClaims;

/// Refresh ahead of expiry by this many seconds.
pub const DEFAULT_EXPIRY_THRESHOLD_SECS: i64 = 60;

/// Decode a token's payload without verifying its signature.
///
/// Trust-the-issuer shortcut so the client can schedule refreshes; this is
/// not a security boundary — the backend validates every token it receives.
/// Malformed input is an error; callers guard for presence first.
pub fn decode_claims(token: &str) -> Result<TokenClaims, AuthError> {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.insecure_disable_signature_validation();
    validation.validate_exp = false;
    decode::<TokenClaims>(token, &DecodingKey::from_secret(&[]), &validation)
        .map(|data| data.claims)
        .map_err(|e| AuthError::TokenError(format!("jwt decode: {e}")))
}

/// True when `threshold_secs` or fewer remain before the token expires.
///
/// A token with exactly `threshold_secs` remaining counts as expiring.
pub fn is_about_to_expire(token: &str, threshold_secs: i64) -> Result<bool, AuthError> {
    let claims = decode_claims(token)?;
    Ok(claims.exp - Utc::now().timestamp() <= threshold_secs)
}
