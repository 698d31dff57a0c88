//! # Session credential
//!
//! The session is self-contained: an HS256-signed JWT carrying the verified
//! identity, delivered as an HTTP-only cookie. Nothing is stored server-side,
//! so a session stays valid until its expiry or until the browser drops the
//! cookie on logout.
//!
//! Cookie attributes depend on the deployment shape: a cross-site production
//! deployment (frontend and API on different origins) needs
//! `SameSite=None; Secure`, local development keeps `SameSite=Lax` without
//! `Secure`.

use axum_extra::extract::cookie::{Cookie, SameSite};
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::config;
use crate::error::ApiError;

use super::google::VerifiedIdentity;

/// Name of the session cookie.
pub const SESSION_COOKIE: &str = "session";

/// Sessions live for a week; each login reissues a fresh one.
const SESSION_TTL_DAYS: i64 = 7;

/// Claims embedded in the session token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionClaims {
    /// Stable Google subject id; the owner key for all task data.
    pub sub: String,
    pub name: String,
    pub email: String,
    /// Issued-at (Unix timestamp, seconds).
    pub iat: i64,
    /// Expiry (Unix timestamp, seconds).
    pub exp: i64,
}

/// Mint a signed session token for a verified identity.
pub fn issue(identity: &VerifiedIdentity, secret: &str) -> Result<String, ApiError> {
    let now = Utc::now();
    let claims = SessionClaims {
        sub: identity.subject_id.clone(),
        name: identity.name.clone(),
        email: identity.email.clone(),
        iat: now.timestamp(),
        exp: (now + Duration::days(SESSION_TTL_DAYS)).timestamp(),
    };
    let token = encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )?;
    Ok(token)
}

/// Verify a session token's signature and expiry.
pub fn verify(token: &str, secret: &str) -> Result<SessionClaims, ApiError> {
    decode::<SessionClaims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::default(),
    )
    .map(|data| data.claims)
    .map_err(|_| ApiError::InvalidSession)
}

/// Build the session cookie for a freshly issued token.
pub fn session_cookie(token: String) -> Cookie<'static> {
    session_cookie_with(token, config::get().cross_site)
}

fn session_cookie_with(token: String, cross_site: bool) -> Cookie<'static> {
    let mut cookie = Cookie::new(SESSION_COOKIE, token);
    cookie.set_http_only(true);
    cookie.set_path("/");
    cookie.set_max_age(time::Duration::days(SESSION_TTL_DAYS));
    if cross_site {
        cookie.set_same_site(SameSite::None);
        cookie.set_secure(true);
    } else {
        cookie.set_same_site(SameSite::Lax);
        cookie.set_secure(false);
    }
    cookie
}

/// The cookie used to clear the session on logout.
pub fn removal_cookie() -> Cookie<'static> {
    let mut cookie = Cookie::from(SESSION_COOKIE);
    cookie.set_path("/");
    cookie
}

#[cfg(test)]
mod tests {
    use super::*;

    fn identity() -> VerifiedIdentity {
        VerifiedIdentity {
            subject_id: "108234567890".to_string(),
            name: "Ada Lovelace".to_string(),
            email: "ada@example.com".to_string(),
        }
    }

    #[test]
    fn issue_then_verify_roundtrips_the_identity() {
        let token = issue(&identity(), "test-secret").unwrap();
        let claims = verify(&token, "test-secret").unwrap();
        assert_eq!(claims.sub, "108234567890");
        assert_eq!(claims.name, "Ada Lovelace");
        assert_eq!(claims.email, "ada@example.com");
        assert!(claims.exp > claims.iat);
    }

    #[test]
    fn expired_token_fails_verification() {
        let now = Utc::now();
        let claims = SessionClaims {
            sub: "108234567890".into(),
            name: "Ada Lovelace".into(),
            email: "ada@example.com".into(),
            iat: (now - Duration::days(8)).timestamp(),
            exp: (now - Duration::days(1)).timestamp(),
        };
        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(b"test-secret"),
        )
        .unwrap();

        assert!(matches!(
            verify(&token, "test-secret"),
            Err(ApiError::InvalidSession)
        ));
    }

    #[test]
    fn wrong_secret_fails_verification() {
        let token = issue(&identity(), "test-secret").unwrap();
        assert!(matches!(
            verify(&token, "other-secret"),
            Err(ApiError::InvalidSession)
        ));
    }

    #[test]
    fn tampered_token_fails_verification() {
        let token = issue(&identity(), "test-secret").unwrap();
        let mut tampered = token.clone();
        tampered.pop();
        tampered.push(if token.ends_with('A') { 'B' } else { 'A' });
        assert!(matches!(
            verify(&tampered, "test-secret"),
            Err(ApiError::InvalidSession)
        ));
    }

    #[test]
    fn cookie_attributes_follow_deployment_mode() {
        let dev = session_cookie_with("token".into(), false);
        assert_eq!(dev.name(), SESSION_COOKIE);
        assert_eq!(dev.http_only(), Some(true));
        assert_eq!(dev.same_site(), Some(SameSite::Lax));
        assert_eq!(dev.secure(), Some(false));

        let prod = session_cookie_with("token".into(), true);
        assert_eq!(prod.same_site(), Some(SameSite::None));
        assert_eq!(prod.secure(), Some(true));
    }
}
