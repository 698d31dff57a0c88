//! User identity as seen by the client.
//!
//! There is no `users` table: the stable Google subject id is the partition
//! key for task data, and the profile fields live inside the session
//! credential. [`UserInfo`] is the client-safe projection of those claims.

use serde::{Deserialize, Serialize};

/// User information safe to send to the client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserInfo {
    /// Stable subject identifier from the identity provider.
    pub id: String,
    pub name: String,
    pub email: String,
}

/// Response envelope of `GET /api/me`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeResponse {
    pub user: UserInfo,
}

/// Body of `POST /api/auth/google`: the raw ID token minted by Google
/// Identity Services in the browser.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoogleLogin {
    #[serde(default)]
    pub id_token: String,
}
