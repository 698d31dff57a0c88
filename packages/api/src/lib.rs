//! # API crate — shared types and server backbone for What To-Do
//!
//! This crate carries everything the frontends and the server share, plus the
//! entire HTTP backend. The split follows one rule: anything behind
//! `#[cfg(not(target_arch = "wasm32"))]` exists only in native (server)
//! builds, while the serde models compile everywhere so the WASM client can
//! talk to the API with the exact wire types the server produces.
//!
//! ## Modules
//!
//! | Module | Native only | Purpose |
//! |--------|-------------|---------|
//! | [`auth`] | yes | Google ID-token verification, session issue/verify, the request authorization gate |
//! | [`config`] | yes | Process-wide configuration from environment variables |
//! | [`db`] | yes | PostgreSQL connection pool (lazy `OnceCell` singleton) and the task store |
//! | [`error`] | yes | `ApiError` taxonomy and its HTTP response mapping |
//! | [`models`] | — | Wire types: `TaskRecord`, `Priority`, request bodies, `UserInfo` |
//! | [`routes`] | yes | The axum router and handlers for `/api/*` |
//!
//! ## Endpoints served by [`routes::router`]
//!
//! - **Authentication**: `POST /api/auth/google`, `GET /api/me`, `POST /api/logout`
//! - **Tasks** (session required): `GET|POST /api/tasks`, `PUT|DELETE /api/tasks/{id}`
//! - **Health**: `GET /api/health`

#[cfg(not(target_arch = "wasm32"))]
pub mod auth;
#[cfg(not(target_arch = "wasm32"))]
pub mod config;
#[cfg(not(target_arch = "wasm32"))]
pub mod db;
#[cfg(not(target_arch = "wasm32"))]
pub mod error;
pub mod models;
#[cfg(not(target_arch = "wasm32"))]
pub mod routes;

pub use models::{CreateTask, GoogleLogin, MeResponse, Priority, TaskRecord, UpdateTask, UserInfo};
