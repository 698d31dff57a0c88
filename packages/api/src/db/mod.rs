//! # Database module — PostgreSQL pool and the task store
//!
//! The pool is a lazy, process-wide singleton backed by a
//! [`tokio::sync::OnceCell`]: the first call to [`get_pool`] reads
//! `DATABASE_URL` from the environment (via `dotenvy`), opens the pool, and
//! caches it for every later caller. Handlers never hold connections across
//! requests; each query checks one out of the pool.
//!
//! [`tasks`] holds every query that touches the `tasks` table. All of its
//! accessors take the owner id as a mandatory parameter: scoping by owner is
//! an invariant of the store, not a courtesy of the callers.

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use tokio::sync::OnceCell;

pub mod tasks;

static POOL: OnceCell<PgPool> = OnceCell::const_new();

/// Pool size. The app is a handful of short single-row statements per
/// request, so a small pool goes a long way; `DATABASE_POOL_SIZE` overrides
/// it for bigger deployments.
const DEFAULT_POOL_SIZE: u32 = 5;

/// Get or initialize the database connection pool.
pub async fn get_pool() -> Result<&'static PgPool, sqlx::Error> {
    POOL.get_or_try_init(|| async {
        dotenvy::dotenv().ok();

        let database_url = std::env::var("DATABASE_URL")
            .expect("DATABASE_URL must be set");
        let max_connections = std::env::var("DATABASE_POOL_SIZE")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_POOL_SIZE);

        PgPoolOptions::new()
            .max_connections(max_connections)
            .connect(&database_url)
            .await
    })
    .await
}
