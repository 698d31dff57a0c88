//! Task store: every query on the `tasks` table.
//!
//! All accessors take `owner_id` as a required parameter. Update and delete
//! filter on `(id, owner_id)` in a single statement, so a row owned by
//! someone else is indistinguishable from a row that does not exist.

use sqlx::{PgPool, Postgres, QueryBuilder};
use uuid::Uuid;

use crate::models::{Task, UpdateTask};

/// All tasks for an owner, oldest first.
pub async fn list_for_owner(pool: &PgPool, owner_id: &str) -> sqlx::Result<Vec<Task>> {
    sqlx::query_as("SELECT * FROM tasks WHERE owner_id = $1 ORDER BY created_at ASC")
        .bind(owner_id)
        .fetch_all(pool)
        .await
}

/// Insert a new task. `text` must already be trimmed and non-empty;
/// `completed` starts false and timestamps come from the database.
pub async fn insert(
    pool: &PgPool,
    owner_id: &str,
    text: &str,
    priority: &str,
    due_date: &str,
) -> sqlx::Result<Task> {
    sqlx::query_as(
        "INSERT INTO tasks (owner_id, text, priority, due_date)
         VALUES ($1, $2, $3, $4)
         RETURNING *",
    )
    .bind(owner_id)
    .bind(text)
    .bind(priority)
    .bind(due_date)
    .fetch_one(pool)
    .await
}

/// Apply a partial update to an owned task. Returns `None` when no row
/// matches `(id, owner_id)`.
pub async fn update(
    pool: &PgPool,
    owner_id: &str,
    id: Uuid,
    patch: &UpdateTask,
) -> sqlx::Result<Option<Task>> {
    let mut builder = build_update(owner_id, id, patch);
    builder.build_query_as::<Task>().fetch_optional(pool).await
}

/// Delete an owned task. Returns whether a row was actually removed.
pub async fn delete(pool: &PgPool, owner_id: &str, id: Uuid) -> sqlx::Result<bool> {
    let result = sqlx::query("DELETE FROM tasks WHERE id = $1 AND owner_id = $2")
        .bind(id)
        .bind(owner_id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected() > 0)
}

/// Build the partial UPDATE statement. Only fields present in the patch are
/// set; `updated_at` is always bumped, and the WHERE clause always carries
/// the owner scope.
fn build_update(
    owner_id: &str,
    id: Uuid,
    patch: &UpdateTask,
) -> QueryBuilder<'static, Postgres> {
    let mut builder: QueryBuilder<'static, Postgres> =
        QueryBuilder::new("UPDATE tasks SET updated_at = NOW()");

    if let Some(text) = &patch.text {
        builder.push(", text = ");
        builder.push_bind(text.trim().to_string());
    }
    if let Some(completed) = patch.completed {
        builder.push(", completed = ");
        builder.push_bind(completed);
    }
    if let Some(priority) = patch.priority {
        builder.push(", priority = ");
        builder.push_bind(priority.as_str());
    }
    if let Some(due_date) = &patch.due_date {
        builder.push(", due_date = ");
        builder.push_bind(due_date.clone());
    }

    builder.push(" WHERE id = ");
    builder.push_bind(id);
    builder.push(" AND owner_id = ");
    builder.push_bind(owner_id.to_string());
    builder.push(" RETURNING *");
    builder
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Priority;

    fn sample_id() -> Uuid {
        Uuid::nil()
    }

    #[test]
    fn update_sql_always_scopes_by_owner() {
        let empty = UpdateTask::default();
        let sql = build_update("google-sub", sample_id(), &empty)
            .sql()
            .to_string();
        assert!(sql.contains("WHERE id = "));
        assert!(sql.contains("AND owner_id = "));
        assert!(sql.ends_with("RETURNING *"));
    }

    #[test]
    fn update_sql_sets_only_present_fields() {
        let patch = UpdateTask {
            completed: Some(true),
            ..Default::default()
        };
        let sql = build_update("google-sub", sample_id(), &patch)
            .sql()
            .to_string();
        assert!(sql.contains("completed = "));
        assert!(!sql.contains("text = "));
        assert!(!sql.contains("priority = "));
        assert!(!sql.contains("due_date = "));
    }

    #[test]
    fn update_sql_covers_every_field() {
        let patch = UpdateTask {
            text: Some("  repot the monstera  ".into()),
            completed: Some(false),
            priority: Some(Priority::High),
            due_date: Some("2026-08-09".into()),
        };
        let sql = build_update("google-sub", sample_id(), &patch)
            .sql()
            .to_string();
        for fragment in ["text = ", "completed = ", "priority = ", "due_date = "] {
            assert!(sql.contains(fragment), "missing {fragment} in {sql}");
        }
    }
}
