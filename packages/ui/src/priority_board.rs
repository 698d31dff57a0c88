//! Three-column priority board with a full-form edit per card.
//!
//! The edit draft (text, priority, due date of one task) is transient
//! component state; Save emits a full patch via `on_save`, Cancel or empty
//! text reverts without an API call.

use dioxus::prelude::*;

use api::{Priority, UpdateTask};

use crate::state::TaskItem;

#[derive(Clone, PartialEq)]
struct EditDraft {
    id: String,
    text: String,
    priority: Priority,
    due_date: String,
}

#[component]
pub fn PriorityBoard(
    // Filtered task list; the board groups it by priority.
    tasks: Vec<TaskItem>,
    on_toggle: EventHandler<String>,
    on_delete: EventHandler<String>,
    on_save: EventHandler<(String, UpdateTask)>,
) -> Element {
    let mut draft = use_signal(|| Option::<EditDraft>::None);

    let mut save_edit = move || {
        let Some(d) = draft() else {
            return;
        };
        draft.set(None);
        let trimmed = d.text.trim().to_string();
        if trimmed.is_empty() {
            // Empty text cancels the edit instead of calling the API.
            return;
        }
        on_save.call((
            d.id,
            UpdateTask {
                text: Some(trimmed),
                priority: Some(d.priority),
                due_date: Some(d.due_date),
                ..Default::default()
            },
        ));
    };

    let columns = [Priority::Low, Priority::Medium, Priority::High].map(|level| {
        let level_key = level.as_str();
        let title_class = format!("priority-title {level_key}");
        let title = format!("{} Priority", level.label());
        let cards = tasks
            .iter()
            .filter(|t| t.priority == level)
            .cloned()
            .map(|task| {
                let editing = draft().is_some_and(|d| d.id == task.id);
                let toggle_id = task.id.clone();
                let delete_id = task.id.clone();
                let edit_source = task.clone();
                let text_class = if task.completed {
                    format!("todo-text completed {}", task.priority.as_str())
                } else {
                    "todo-text".to_string()
                };
                let badge_class = format!("priority-badge priority-{}", task.priority.as_str());
                let badge_label = task.priority.label();

                rsx! {
                    div { class: "priority-task-card", key: "{task.id}",
                        div { class: "todo-item-column",
                            label { class: "todo-checkbox",
                                input {
                                    r#type: "checkbox",
                                    checked: task.completed,
                                    onchange: move |_| on_toggle.call(toggle_id.clone()),
                                }
                                span { class: "checkmark" }
                            }

                            div { class: "todo-main",
                                if editing {
                                    input {
                                        class: "todo-edit-input",
                                        value: draft().map(|d| d.text).unwrap_or_default(),
                                        autofocus: true,
                                        oninput: move |evt| {
                                            if let Some(mut d) = draft() {
                                                d.text = evt.value();
                                                draft.set(Some(d));
                                            }
                                        },
                                        onkeydown: move |evt| {
                                            if evt.key() == Key::Enter {
                                                save_edit();
                                            } else if evt.key() == Key::Escape {
                                                draft.set(None);
                                            }
                                        },
                                    }
                                    div { class: "todo-edit-meta-row",
                                        select {
                                            class: "todo-edit-priority",
                                            value: draft().map(|d| d.priority.as_str()).unwrap_or("medium"),
                                            onchange: move |evt| {
                                                if let Some(mut d) = draft() {
                                                    d.priority = Priority::parse(&evt.value())
                                                        .unwrap_or_default();
                                                    draft.set(Some(d));
                                                }
                                            },
                                            option { value: "low", "Low" }
                                            option { value: "medium", "Medium" }
                                            option { value: "high", "High" }
                                        }
                                        input {
                                            class: "todo-edit-date",
                                            r#type: "date",
                                            value: draft().map(|d| d.due_date).unwrap_or_default(),
                                            onchange: move |evt| {
                                                if let Some(mut d) = draft() {
                                                    d.due_date = evt.value();
                                                    draft.set(Some(d));
                                                }
                                            },
                                        }
                                    }
                                } else {
                                    span { class: "{text_class}", "{task.text}" }
                                    div { class: "todo-meta",
                                        span { class: "{badge_class}", "{badge_label}" }
                                        if !task.due_date.is_empty() {
                                            span { class: "due-label", "Due: {task.due_date}" }
                                        }
                                    }
                                }
                            }

                            div { class: "todo-actions",
                                if editing {
                                    button {
                                        class: "task-btn edit-btn",
                                        onclick: move |_| save_edit(),
                                        "Save"
                                    }
                                    button {
                                        class: "task-btn delete-btn",
                                        onclick: move |_| draft.set(None),
                                        "Cancel"
                                    }
                                } else {
                                    button {
                                        class: "task-btn edit-btn",
                                        onclick: move |_| {
                                            draft.set(Some(EditDraft {
                                                id: edit_source.id.clone(),
                                                text: edit_source.text.clone(),
                                                priority: edit_source.priority,
                                                due_date: edit_source.due_date.clone(),
                                            }));
                                        },
                                        "Edit"
                                    }
                                    button {
                                        class: "task-btn delete-btn",
                                        onclick: move |_| on_delete.call(delete_id.clone()),
                                        "Delete"
                                    }
                                }
                            }
                        }
                    }
                }
            })
            .collect::<Vec<_>>();

        rsx! {
            div { class: "priority-column", key: "{level_key}",
                h3 { class: "{title_class}", "{title}" }
                {cards.into_iter()}
            }
        }
    });

    rsx! {
        section { class: "board-wrapper",
            div { class: "priority-columns",
                {columns.into_iter()}
            }
        }
    }
}
