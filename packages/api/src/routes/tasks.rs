//! Task CRUD endpoints. Every handler takes [`CurrentUser`], so each
//! operation is scoped to the verified owner before it touches the store.

use axum::extract::Path;
use axum::http::StatusCode;
use axum::Json;
use serde_json::{json, Value};
use uuid::Uuid;

use crate::auth::CurrentUser;
use crate::db::{self, get_pool};
use crate::error::ApiError;
use crate::models::{CreateTask, TaskRecord, UpdateTask};

/// `GET /api/tasks` — all of the caller's tasks, oldest first.
pub async fn list(CurrentUser(claims): CurrentUser) -> Result<Json<Vec<TaskRecord>>, ApiError> {
    let pool = get_pool().await?;
    let tasks = db::tasks::list_for_owner(pool, &claims.sub).await?;
    Ok(Json(tasks.iter().map(|t| t.to_record()).collect()))
}

/// `POST /api/tasks` — create a task for the caller.
pub async fn create(
    CurrentUser(claims): CurrentUser,
    Json(body): Json<CreateTask>,
) -> Result<(StatusCode, Json<TaskRecord>), ApiError> {
    let text = body.text.trim();
    if text.is_empty() {
        return Err(ApiError::Validation("Task text is required".to_string()));
    }

    let pool = get_pool().await?;
    let task = db::tasks::insert(
        pool,
        &claims.sub,
        text,
        body.priority.as_str(),
        &body.due_date,
    )
    .await?;

    Ok((StatusCode::CREATED, Json(task.to_record())))
}

/// `PUT /api/tasks/{id}` — apply the fields present in the body to an owned
/// task. A malformed or unowned id is a plain 404: the store filters by
/// `(id, owner_id)`, so existence is never leaked.
pub async fn update(
    CurrentUser(claims): CurrentUser,
    Path(id): Path<String>,
    Json(patch): Json<UpdateTask>,
) -> Result<Json<TaskRecord>, ApiError> {
    if let Some(text) = &patch.text {
        if text.trim().is_empty() {
            return Err(ApiError::Validation("Task text is required".to_string()));
        }
    }

    let id = Uuid::parse_str(&id).map_err(|_| ApiError::NotFound)?;
    let pool = get_pool().await?;
    let task = db::tasks::update(pool, &claims.sub, id, &patch)
        .await?
        .ok_or(ApiError::NotFound)?;

    Ok(Json(task.to_record()))
}

/// `DELETE /api/tasks/{id}` — remove an owned task.
pub async fn remove(
    CurrentUser(claims): CurrentUser,
    Path(id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    let id = Uuid::parse_str(&id).map_err(|_| ApiError::NotFound)?;
    let pool = get_pool().await?;
    if !db::tasks::delete(pool, &claims.sub, id).await? {
        return Err(ApiError::NotFound);
    }
    Ok(Json(json!({ "success": true })))
}
