//! Client-side task state and server-backed actions.
//!
//! One state container per concern: [`TaskStore`] owns the task list and
//! the mutations against it. Transient edit state stays local to the
//! widgets; authentication lives in [`crate::auth`].
//!
//! Mutations are not optimistic. Each action calls the API first and folds
//! the server's response into local state, so there is never a rollback
//! path; a failed call logs the error and leaves the list untouched.

use dioxus::prelude::*;

use api::{CreateTask, Priority, TaskRecord, UpdateTask};

use crate::client;

/// A task as the views consume it.
#[derive(Clone, Debug, PartialEq)]
pub struct TaskItem {
    pub id: String,
    pub text: String,
    pub completed: bool,
    pub priority: Priority,
    pub due_date: String,
}

impl From<TaskRecord> for TaskItem {
    fn from(record: TaskRecord) -> Self {
        Self {
            id: record.id,
            text: record.text,
            completed: record.completed,
            priority: record.priority,
            due_date: record.due_date,
        }
    }
}

/// The task list and its actions. Cheap to copy; hand it to callbacks.
#[derive(Clone, Copy)]
pub struct TaskStore {
    pub tasks: Signal<Vec<TaskItem>>,
}

/// Provide the task store to the component tree. Call once, in the view
/// that owns the task list.
pub fn provide_task_store() -> TaskStore {
    let tasks = use_signal(Vec::new);
    use_context_provider(|| TaskStore { tasks })
}

/// Get the task store provided by an ancestor.
pub fn use_task_store() -> TaskStore {
    use_context()
}

impl TaskStore {
    /// Replace the list with the server's current view of it.
    pub async fn load(mut self) {
        match client::fetch_tasks().await {
            Ok(records) => self
                .tasks
                .set(records.into_iter().map(TaskItem::from).collect()),
            Err(e) => tracing::error!("failed to load tasks: {e}"),
        }
    }

    /// Create a task and append the stored record.
    pub async fn add(mut self, text: String, priority: Priority, due_date: String) {
        let request = CreateTask {
            text,
            priority,
            due_date,
        };
        match client::create_task(&request).await {
            Ok(record) => self.tasks.write().push(record.into()),
            Err(e) => tracing::error!("failed to create task: {e}"),
        }
    }

    /// Flip a task's completed flag.
    pub async fn toggle(self, id: String) {
        let completed = self
            .tasks
            .peek()
            .iter()
            .find(|t| t.id == id)
            .map(|t| t.completed);
        let Some(completed) = completed else { return };

        self.apply_patch(
            id,
            UpdateTask {
                completed: Some(!completed),
                ..Default::default()
            },
        )
        .await;
    }

    /// Send a partial update and replace the local record with the server's
    /// response.
    pub async fn apply_patch(mut self, id: String, patch: UpdateTask) {
        if patch.is_empty() {
            return;
        }
        match client::update_task(&id, &patch).await {
            Ok(record) => {
                let updated = TaskItem::from(record);
                let mut tasks = self.tasks.write();
                if let Some(slot) = tasks.iter_mut().find(|t| t.id == id) {
                    *slot = updated;
                }
            }
            Err(e) => tracing::error!("failed to update task: {e}"),
        }
    }

    /// Delete a task and drop it from the list.
    pub async fn remove(mut self, id: String) {
        match client::delete_task(&id).await {
            Ok(()) => self.tasks.write().retain(|t| t.id != id),
            Err(e) => tracing::error!("failed to delete task: {e}"),
        }
    }

    /// Forget everything, e.g. on logout.
    pub fn clear(mut self) {
        self.tasks.set(Vec::new());
    }
}
