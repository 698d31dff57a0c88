//! Data models for the application.

mod task;
mod user;

#[cfg(not(target_arch = "wasm32"))]
pub use task::Task;
pub use task::{CreateTask, Priority, TaskRecord, UpdateTask};
pub use user::{GoogleLogin, MeResponse, UserInfo};
