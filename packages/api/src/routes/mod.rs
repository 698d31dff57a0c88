//! HTTP route table for the API.

use axum::routing::{get, post, put};
use axum::Router;

mod auth;
mod tasks;

/// Build the `/api/*` router. Stateless: handlers reach the pool and
/// configuration through their process-wide singletons.
pub fn router() -> Router {
    Router::new()
        .route("/api/health", get(health))
        .route("/api/auth/google", post(auth::login_google))
        .route("/api/me", get(auth::me))
        .route("/api/logout", post(auth::logout))
        .route("/api/tasks", get(tasks::list).post(tasks::create))
        .route("/api/tasks/{id}", put(tasks::update).delete(tasks::remove))
}

async fn health() -> &'static str {
    "ok"
}
