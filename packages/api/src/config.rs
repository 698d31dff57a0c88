//! Application configuration from environment variables.

use std::sync::OnceLock;

static CONFIG: OnceLock<AppConfig> = OnceLock::new();

/// Server configuration, loaded once per process.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// OAuth client id the Google ID token must be issued for.
    pub google_client_id: String,
    /// HMAC secret for the session credential.
    pub session_secret: String,
    /// Cross-site deployment: frontend and backend on different origins.
    /// Switches the session cookie to `SameSite=None; Secure`.
    pub cross_site: bool,
    /// Origin allowed to call the API with credentials, for split-origin
    /// deployments. `None` means same-origin only (no CORS layer).
    pub frontend_url: Option<String>,
}

/// Get the process-wide configuration, reading the environment on first use.
pub fn get() -> &'static AppConfig {
    CONFIG.get_or_init(|| {
        dotenvy::dotenv().ok();

        let google_client_id = std::env::var("GOOGLE_CLIENT_ID").unwrap_or_default();
        if google_client_id.is_empty() {
            tracing::warn!("GOOGLE_CLIENT_ID is not set; Google sign-in will be rejected");
        }

        let session_secret = std::env::var("SESSION_SECRET").unwrap_or_else(|_| {
            tracing::warn!("SESSION_SECRET is not set, falling back to the development secret");
            "dev-secret".to_string()
        });

        let cross_site = std::env::var("APP_ENV")
            .map(|v| v == "production")
            .unwrap_or(false);

        let frontend_url = std::env::var("FRONTEND_URL").ok().filter(|v| !v.is_empty());

        AppConfig {
            google_client_id,
            session_secret,
            cross_site,
            frontend_url,
        }
    })
}
