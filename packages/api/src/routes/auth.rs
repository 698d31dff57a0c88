//! Authentication endpoints: Google login, session check, logout.

use axum::Json;
use axum_extra::extract::CookieJar;
use serde_json::{json, Value};

use crate::auth::{self, session, CurrentUser};
use crate::config;
use crate::error::ApiError;
use crate::models::{GoogleLogin, MeResponse, UserInfo};

/// `POST /api/auth/google` — verify a Google ID token and set the session
/// cookie. The only unauthenticated entry point besides logout and health.
pub async fn login_google(
    jar: CookieJar,
    Json(body): Json<GoogleLogin>,
) -> Result<(CookieJar, Json<Value>), ApiError> {
    if body.id_token.is_empty() {
        return Err(ApiError::Validation("Missing ID token".to_string()));
    }

    let cfg = config::get();
    let identity = auth::verify_id_token(&body.id_token, &cfg.google_client_id).await?;
    tracing::info!(subject = %identity.subject_id, "google sign-in verified");

    let token = session::issue(&identity, &cfg.session_secret)?;
    let jar = jar.add(session::session_cookie(token));

    Ok((jar, Json(json!({ "message": "Login successful" }))))
}

/// `GET /api/me` — return the identity carried by the session cookie.
pub async fn me(CurrentUser(claims): CurrentUser) -> Json<MeResponse> {
    Json(MeResponse {
        user: UserInfo {
            id: claims.sub,
            name: claims.name,
            email: claims.email,
        },
    })
}

/// `POST /api/logout` — clear the session cookie. Deliberately does not
/// require a valid session: logging out of an expired session still works.
pub async fn logout(jar: CookieJar) -> (CookieJar, Json<Value>) {
    let jar = jar.remove(session::removal_cookie());
    (jar, Json(json!({ "message": "Logged out" })))
}
