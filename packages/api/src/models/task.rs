//! # Task model
//!
//! Defines the two representations of a task:
//!
//! ## [`Task`] (server only)
//!
//! The complete database row from the `tasks` table. It derives
//! [`sqlx::FromRow`] so it can be loaded directly from queries and contains
//! every column:
//!
//! - `id` — primary key (`UUID v4`, assigned by the database).
//! - `owner_id` — the Google subject id of the owning user. Immutable after
//!   creation; every query is filtered by it.
//! - `text`, `completed`, `priority`, `due_date` — the to-do payload.
//!   `due_date` is an ISO `YYYY-MM-DD` string, or empty when no date is set.
//! - `created_at` / `updated_at` — audit timestamps maintained by the store.
//!
//! The [`Task::to_record`] method projects this into a [`TaskRecord`].
//!
//! ## [`TaskRecord`]
//!
//! The client-safe wire shape, `Serialize + Deserialize + PartialEq`, with
//! camelCase field names matching the HTTP interface. It omits `owner_id`
//! (the caller only ever sees their own tasks) and renders ids and
//! timestamps as strings so it works in WASM.

use serde::{Deserialize, Serialize};

#[cfg(not(target_arch = "wasm32"))]
use chrono::{DateTime, Utc};
#[cfg(not(target_arch = "wasm32"))]
use sqlx::FromRow;
#[cfg(not(target_arch = "wasm32"))]
use uuid::Uuid;

/// Task priority. Serialized lowercase on the wire and in the database.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
}

impl Priority {
    /// Parse the lowercase database/wire form. Unknown values fall back to
    /// `None` so callers can choose their own default.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "low" => Some(Priority::Low),
            "medium" => Some(Priority::Medium),
            "high" => Some(Priority::High),
            _ => None,
        }
    }

    /// The lowercase form stored in the database.
    pub fn as_str(self) -> &'static str {
        match self {
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
        }
    }

    /// Display label: "Low", "Medium", "High".
    pub fn label(self) -> &'static str {
        match self {
            Priority::Low => "Low",
            Priority::Medium => "Medium",
            Priority::High => "High",
        }
    }

    /// Sort rank: high sorts before medium sorts before low.
    pub fn rank(self) -> u8 {
        match self {
            Priority::High => 0,
            Priority::Medium => 1,
            Priority::Low => 2,
        }
    }
}

/// Full task row from the database.
#[cfg(not(target_arch = "wasm32"))]
#[derive(Debug, Clone, FromRow)]
pub struct Task {
    pub id: Uuid,
    pub owner_id: String,
    pub text: String,
    pub completed: bool,
    pub priority: String,
    pub due_date: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[cfg(not(target_arch = "wasm32"))]
impl Task {
    /// Convert to the wire representation for client consumption.
    pub fn to_record(&self) -> TaskRecord {
        TaskRecord {
            id: self.id.to_string(),
            text: self.text.clone(),
            completed: self.completed,
            priority: Priority::parse(&self.priority).unwrap_or_default(),
            due_date: self.due_date.clone(),
            created_at: self.created_at.to_rfc3339(),
            updated_at: self.updated_at.to_rfc3339(),
        }
    }
}

/// A task as it crosses the HTTP boundary.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskRecord {
    pub id: String,
    pub text: String,
    pub completed: bool,
    pub priority: Priority,
    pub due_date: String,
    pub created_at: String,
    pub updated_at: String,
}

/// Body of `POST /api/tasks`. Priority defaults to medium and the due date
/// to empty when omitted.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTask {
    pub text: String,
    #[serde(default)]
    pub priority: Priority,
    #[serde(default)]
    pub due_date: String,
}

/// Body of `PUT /api/tasks/{id}`. Only fields present in the request are
/// applied; the client skips serializing the rest.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UpdateTask {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<Priority>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<String>,
}

impl UpdateTask {
    /// True when no field is present, i.e. the patch would change nothing.
    pub fn is_empty(&self) -> bool {
        self.text.is_none()
            && self.completed.is_none()
            && self.priority.is_none()
            && self.due_date.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn priority_defaults_to_medium_when_omitted() {
        let req: CreateTask = serde_json::from_str(r#"{"text":"buy milk"}"#).unwrap();
        assert_eq!(req.priority, Priority::Medium);
        assert_eq!(req.due_date, "");
    }

    #[test]
    fn priority_roundtrips_lowercase() {
        assert_eq!(serde_json::to_string(&Priority::High).unwrap(), r#""high""#);
        assert_eq!(Priority::parse("low"), Some(Priority::Low));
        assert_eq!(Priority::parse("urgent"), None);
    }

    #[test]
    fn priority_rank_orders_high_first() {
        assert!(Priority::High.rank() < Priority::Medium.rank());
        assert!(Priority::Medium.rank() < Priority::Low.rank());
    }

    #[test]
    fn update_task_deserializes_partial_bodies() {
        let patch: UpdateTask = serde_json::from_str(r#"{"completed":true}"#).unwrap();
        assert_eq!(patch.completed, Some(true));
        assert!(patch.text.is_none());
        assert!(patch.priority.is_none());
        assert!(patch.due_date.is_none());

        let empty: UpdateTask = serde_json::from_str("{}").unwrap();
        assert!(empty.is_empty());
    }

    #[test]
    fn update_task_serializes_only_present_fields() {
        let patch = UpdateTask {
            due_date: Some("2026-08-07".to_string()),
            ..Default::default()
        };
        assert_eq!(
            serde_json::to_string(&patch).unwrap(),
            r#"{"dueDate":"2026-08-07"}"#
        );
    }

    #[test]
    fn task_record_uses_camel_case_on_the_wire() {
        let record = TaskRecord {
            id: "1".into(),
            text: "write report".into(),
            completed: false,
            priority: Priority::Medium,
            due_date: "2026-08-09".into(),
            created_at: "2026-08-07T00:00:00+00:00".into(),
            updated_at: "2026-08-07T00:00:00+00:00".into(),
        };
        let json = serde_json::to_string(&record).unwrap();
        assert!(json.contains(r#""dueDate":"2026-08-09""#));
        assert!(json.contains(r#""createdAt""#));
    }
}
