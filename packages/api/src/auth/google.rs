//! # Google ID-token verification
//!
//! The client signs in with Google Identity Services in the browser and
//! posts the resulting ID token to `/api/auth/google`. This module checks
//! that token against Google's published signing keys and extracts the
//! stable subject id plus profile fields.
//!
//! ## Flow
//!
//! 1. Decode the JWT header to learn which key (`kid`) signed the token.
//! 2. Look the key up in a cached copy of Google's JWKS
//!    (`https://www.googleapis.com/oauth2/v3/certs`). The set is fetched
//!    once per process and refetched a single time when an unknown `kid`
//!    appears, which is how key rotation surfaces.
//! 3. Verify the RS256 signature, the audience (our OAuth client id), the
//!    issuer, and the expiry in one `decode` call.
//!
//! Any verification failure maps to [`ApiError::InvalidCredential`]; only a
//! failed JWKS fetch is treated as a server-side error.

use jsonwebtoken::jwk::{Jwk, JwkSet};
use jsonwebtoken::{decode, decode_header, Algorithm, DecodingKey, Validation};
use serde::Deserialize;
use tokio::sync::{OnceCell, RwLock};

use crate::error::ApiError;

const GOOGLE_JWKS_URL: &str = "https://www.googleapis.com/oauth2/v3/certs";
const GOOGLE_ISSUERS: [&str; 2] = ["accounts.google.com", "https://accounts.google.com"];

/// Identity extracted from a successfully verified ID token.
#[derive(Debug, Clone)]
pub struct VerifiedIdentity {
    /// Google's stable subject identifier (`sub`).
    pub subject_id: String,
    pub name: String,
    pub email: String,
}

/// Claims we read out of the Google ID token. Audience, issuer, and expiry
/// are enforced by the `Validation` settings rather than inspected here.
#[derive(Debug, Deserialize)]
struct GoogleClaims {
    sub: String,
    email: String,
    name: Option<String>,
}

static KEYS: OnceCell<RwLock<JwkSet>> = OnceCell::const_new();

async fn fetch_jwks() -> Result<JwkSet, ApiError> {
    let set = reqwest::Client::new()
        .get(GOOGLE_JWKS_URL)
        .send()
        .await?
        .error_for_status()?
        .json::<JwkSet>()
        .await?;
    Ok(set)
}

async fn cached_jwks() -> Result<&'static RwLock<JwkSet>, ApiError> {
    KEYS.get_or_try_init(|| async { Ok(RwLock::new(fetch_jwks().await?)) })
        .await
}

/// Find the signing key for `kid`, refetching the set once if it is unknown.
async fn signing_key(kid: &str) -> Result<Jwk, ApiError> {
    let lock = cached_jwks().await?;

    if let Some(key) = lock.read().await.find(kid) {
        return Ok(key.clone());
    }

    // Unknown kid: Google rotated its keys since we cached the set.
    let fresh = fetch_jwks().await?;
    let mut set = lock.write().await;
    *set = fresh;
    set.find(kid).cloned().ok_or(ApiError::InvalidCredential)
}

/// Validate a Google-issued ID token and extract the caller's identity.
///
/// Checks signature, issuer, audience (`client_id`), and expiry; any failure
/// is [`ApiError::InvalidCredential`]. No side effects.
pub async fn verify_id_token(
    id_token: &str,
    client_id: &str,
) -> Result<VerifiedIdentity, ApiError> {
    let header = decode_header(id_token).map_err(|_| ApiError::InvalidCredential)?;
    let kid = header.kid.ok_or(ApiError::InvalidCredential)?;

    let key = signing_key(&kid).await?;
    let decoding_key = DecodingKey::from_jwk(&key).map_err(|_| ApiError::InvalidCredential)?;

    let mut validation = Validation::new(Algorithm::RS256);
    validation.set_audience(&[client_id]);
    validation.set_issuer(&GOOGLE_ISSUERS);

    let data = decode::<GoogleClaims>(id_token, &decoding_key, &validation)
        .map_err(|_| ApiError::InvalidCredential)?;

    let GoogleClaims { sub, email, name } = data.claims;
    Ok(VerifiedIdentity {
        subject_id: sub,
        name: name.unwrap_or_else(|| email.clone()),
        email,
    })
}
