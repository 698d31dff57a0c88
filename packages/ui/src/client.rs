//! REST client for the task API.
//!
//! Thin typed wrappers over reqwest. On WASM the requests ride the
//! browser's fetch, so the HTTP-only session cookie travels automatically
//! on same-origin calls; the base URL comes from `window.location`. Any
//! non-success status surfaces as an error via `error_for_status`.

use api::{CreateTask, GoogleLogin, MeResponse, TaskRecord, UpdateTask, UserInfo};

fn base_url() -> String {
    #[cfg(target_arch = "wasm32")]
    {
        web_sys::window()
            .and_then(|w| w.location().origin().ok())
            .unwrap_or_default()
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        std::env::var("API_BASE_URL").unwrap_or_else(|_| "http://localhost:8080".to_string())
    }
}

/// `GET /api/me` — the current session's user, or an error when there is no
/// valid session.
pub async fn fetch_me() -> Result<UserInfo, reqwest::Error> {
    let response = reqwest::Client::new()
        .get(format!("{}/api/me", base_url()))
        .send()
        .await?
        .error_for_status()?;
    Ok(response.json::<MeResponse>().await?.user)
}

/// `POST /api/auth/google` — exchange a Google ID token for a session
/// cookie.
pub async fn login_google(id_token: &str) -> Result<(), reqwest::Error> {
    reqwest::Client::new()
        .post(format!("{}/api/auth/google", base_url()))
        .json(&GoogleLogin {
            id_token: id_token.to_string(),
        })
        .send()
        .await?
        .error_for_status()?;
    Ok(())
}

/// `POST /api/logout` — clear the session cookie.
pub async fn logout() -> Result<(), reqwest::Error> {
    reqwest::Client::new()
        .post(format!("{}/api/logout", base_url()))
        .send()
        .await?
        .error_for_status()?;
    Ok(())
}

/// `GET /api/tasks` — the caller's tasks, oldest first.
pub async fn fetch_tasks() -> Result<Vec<TaskRecord>, reqwest::Error> {
    reqwest::Client::new()
        .get(format!("{}/api/tasks", base_url()))
        .send()
        .await?
        .error_for_status()?
        .json()
        .await
}

/// `POST /api/tasks` — create a task; returns the stored record.
pub async fn create_task(request: &CreateTask) -> Result<TaskRecord, reqwest::Error> {
    reqwest::Client::new()
        .post(format!("{}/api/tasks", base_url()))
        .json(request)
        .send()
        .await?
        .error_for_status()?
        .json()
        .await
}

/// `PUT /api/tasks/{id}` — apply a partial update; returns the updated
/// record.
pub async fn update_task(id: &str, patch: &UpdateTask) -> Result<TaskRecord, reqwest::Error> {
    reqwest::Client::new()
        .put(format!("{}/api/tasks/{id}", base_url()))
        .json(patch)
        .send()
        .await?
        .error_for_status()?
        .json()
        .await
}

/// `DELETE /api/tasks/{id}`.
pub async fn delete_task(id: &str) -> Result<(), reqwest::Error> {
    reqwest::Client::new()
        .delete(format!("{}/api/tasks/{id}", base_url()))
        .send()
        .await?
        .error_for_status()?;
    Ok(())
}
