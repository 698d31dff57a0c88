//! Filter/sort bar, progress bar, and the inline task list.
//!
//! Inline edit state (one task, one field) is transient component state: a
//! confirmed edit emits a single-field patch via `on_commit`, cancel and
//! empty text revert without touching the API.

use dioxus::prelude::*;

use api::UpdateTask;

use crate::derive::{Filter, SortMode};
use crate::state::TaskItem;

#[derive(Clone, Copy, PartialEq)]
enum InlineField {
    Text,
    DueDate,
}

#[component]
pub fn TaskList(
    // Already filtered and sorted by the caller.
    tasks: Vec<TaskItem>,
    filter: Filter,
    sort_mode: SortMode,
    completed_count: usize,
    total_count: usize,
    progress_percent: u32,
    on_filter: EventHandler<Filter>,
    on_sort: EventHandler<SortMode>,
    on_toggle: EventHandler<String>,
    on_commit: EventHandler<(String, UpdateTask)>,
) -> Element {
    let mut inline_edit = use_signal(|| Option::<(String, InlineField)>::None);
    let mut inline_value = use_signal(String::new);

    let mut cancel_inline = move || {
        inline_edit.set(None);
        inline_value.set(String::new());
    };

    let mut commit_inline = move || {
        let Some((id, field)) = inline_edit() else {
            return;
        };
        let patch = match field {
            InlineField::Text => {
                let trimmed = inline_value().trim().to_string();
                if trimmed.is_empty() {
                    // Empty text reverts the edit without calling the API.
                    cancel_inline();
                    return;
                }
                UpdateTask {
                    text: Some(trimmed),
                    ..Default::default()
                }
            }
            InlineField::DueDate => UpdateTask {
                due_date: Some(inline_value()),
                ..Default::default()
            },
        };
        cancel_inline();
        on_commit.call((id, patch));
    };

    rsx! {
        section { class: "todo-card",
            div { class: "todo-filter-row",
                div { class: "todo-filters",
                    button {
                        class: if filter == Filter::All { "todo-filter active" } else { "todo-filter" },
                        onclick: move |_| on_filter.call(Filter::All),
                        "All"
                    }
                    button {
                        class: if filter == Filter::Completed { "todo-filter active" } else { "todo-filter" },
                        onclick: move |_| on_filter.call(Filter::Completed),
                        "Completed"
                    }
                    select {
                        class: "todo-priority-select todo-sort-select",
                        value: sort_mode.as_str(),
                        onchange: move |evt| {
                            on_sort.call(SortMode::parse(&evt.value()).unwrap_or_default())
                        },
                        option { value: "none", "Sort: Default" }
                        option { value: "dueDate", "Sort: Due date" }
                        option { value: "priority", "Sort: Priority" }
                        option { value: "az", "Sort: A–Z" }
                    }
                }
            }

            div { class: "progress-section",
                div { class: "progress-label-row",
                    span { "Progress" }
                    span {
                        "{completed_count}/{total_count} completed"
                        if total_count > 0 { " • {progress_percent}%" }
                    }
                }
                div { class: "progress-bar",
                    div {
                        class: "progress-bar-fill",
                        style: "width: {progress_percent}%",
                    }
                }
            }

            div { class: "todo-inline-list",
                if tasks.is_empty() {
                    p { class: "todo-inline-empty", "No tasks match this filter yet." }
                }
                for task in tasks.clone() {
                    {
                        let editing_text =
                            inline_edit() == Some((task.id.clone(), InlineField::Text));
                        let editing_date =
                            inline_edit() == Some((task.id.clone(), InlineField::DueDate));
                        let toggle_id = task.id.clone();
                        let text_id = task.id.clone();
                        let empty_date_id = task.id.clone();
                        let date_id = task.id.clone();
                        let text_value = task.text.clone();
                        let date_value = task.due_date.clone();
                        let text_class = if task.completed {
                            format!("inline-task-text completed {}", task.priority.as_str())
                        } else {
                            "inline-task-text".to_string()
                        };
                        let tag_class =
                            format!("inline-priority-tag inline-{}", task.priority.as_str());
                        let tag_label = task.priority.label();

                        rsx! {
                            div { class: "todo-inline-item", key: "{task.id}",
                                label { class: "inline-checkbox",
                                    input {
                                        r#type: "checkbox",
                                        checked: task.completed,
                                        onchange: move |_| on_toggle.call(toggle_id.clone()),
                                    }
                                    span { class: "inline-checkmark" }
                                }

                                if editing_text {
                                    input {
                                        class: "inline-edit-text",
                                        value: inline_value(),
                                        autofocus: true,
                                        oninput: move |evt| inline_value.set(evt.value()),
                                        onkeydown: move |evt| {
                                            if evt.key() == Key::Enter {
                                                commit_inline();
                                            } else if evt.key() == Key::Escape {
                                                cancel_inline();
                                            }
                                        },
                                        onblur: move |_| commit_inline(),
                                    }
                                } else {
                                    span {
                                        class: "{text_class}",
                                        onclick: move |_| {
                                            inline_edit
                                                .set(Some((text_id.clone(), InlineField::Text)));
                                            inline_value.set(text_value.clone());
                                        },
                                        "{task.text}"
                                        // Priority tag only while sorted by priority
                                        if sort_mode == SortMode::Priority {
                                            span { class: "{tag_class}", "{tag_label}" }
                                        }
                                    }
                                }

                                if editing_date {
                                    input {
                                        class: "inline-edit-date",
                                        r#type: "date",
                                        value: inline_value(),
                                        autofocus: true,
                                        onchange: move |evt| inline_value.set(evt.value()),
                                        onkeydown: move |evt| {
                                            if evt.key() == Key::Enter {
                                                commit_inline();
                                            } else if evt.key() == Key::Escape {
                                                cancel_inline();
                                            }
                                        },
                                        onblur: move |_| commit_inline(),
                                    }
                                } else if task.due_date.is_empty() {
                                    span {
                                        class: "inline-due inline-due-empty",
                                        onclick: move |_| {
                                            inline_edit
                                                .set(Some((empty_date_id.clone(), InlineField::DueDate)));
                                            inline_value.set(String::new());
                                        },
                                        "+ Add due date"
                                    }
                                } else {
                                    span {
                                        class: "inline-due",
                                        onclick: move |_| {
                                            inline_edit
                                                .set(Some((date_id.clone(), InlineField::DueDate)));
                                            inline_value.set(date_value.clone());
                                        },
                                        "Due: {task.due_date}"
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
