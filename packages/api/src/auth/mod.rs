//! Authentication: identity verification, session credentials, and the
//! request authorization gate.

mod google;
pub mod session;

pub use google::{verify_id_token, VerifiedIdentity};
pub use session::SessionClaims;

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum_extra::extract::CookieJar;

use crate::config;
use crate::error::ApiError;

/// The verified identity of the caller, extracted from the session cookie.
///
/// Taking this extractor as a handler argument *is* the authorization gate:
/// the request is rejected with 401 before the handler body runs when the
/// cookie is missing or fails verification. The login and logout handlers
/// simply do not take it.
#[derive(Debug, Clone)]
pub struct CurrentUser(pub SessionClaims);

impl<S> FromRequestParts<S> for CurrentUser
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let jar = CookieJar::from_headers(&parts.headers);
        let cookie = jar
            .get(session::SESSION_COOKIE)
            .ok_or(ApiError::Unauthenticated)?;
        let claims = session::verify(cookie.value(), &config::get().session_secret)?;
        Ok(CurrentUser(claims))
    }
}
