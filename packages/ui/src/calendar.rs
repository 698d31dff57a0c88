//! Month calendar widget: task markers per day, day selection, and the
//! exact-date task list for the selected day.

use chrono::{Datelike, Local};
use dioxus::prelude::*;

use crate::derive;
use crate::state::TaskItem;

#[component]
pub fn TaskCalendar(tasks: Vec<TaskItem>) -> Element {
    let today = Local::now().date_naive();
    let mut month = use_signal(|| (today.year(), today.month()));
    let mut selected = use_signal(|| today.format("%Y-%m-%d").to_string());

    let (year, month_number) = month();
    let label = derive::month_label(year, month_number);
    let selected_tasks = derive::tasks_on(&tasks, &selected());

    let day_cells = derive::month_cells(year, month_number, &tasks)
        .into_iter()
        .enumerate()
        .map(|(idx, cell)| match cell {
            Some(cell) => {
                let mut class = String::from("calendar-day");
                if cell.has_tasks {
                    class.push_str(" has-task");
                }
                if cell.date == selected() {
                    class.push_str(" selected");
                }
                let date = cell.date.clone();
                rsx! {
                    button {
                        key: "{cell.date}",
                        r#type: "button",
                        class: "{class}",
                        onclick: move |_| selected.set(date.clone()),
                        "{cell.day}"
                    }
                }
            }
            None => rsx! {
                div { key: "pad-{idx}", class: "calendar-day empty" }
            },
        });

    rsx! {
        section { class: "dashboard-widget",
            h3 { class: "dashboard-widget-title", "Task Calendar" }

            div { class: "calendar-header",
                button {
                    r#type: "button",
                    class: "calendar-nav-btn",
                    onclick: move |_| {
                        let (y, m) = month();
                        month.set(derive::prev_month(y, m));
                    },
                    "‹"
                }
                span { class: "calendar-month-label", "{label}" }
                button {
                    r#type: "button",
                    class: "calendar-nav-btn",
                    onclick: move |_| {
                        let (y, m) = month();
                        month.set(derive::next_month(y, m));
                    },
                    "›"
                }
            }

            div { class: "calendar-grid",
                for day in ["Su", "Mo", "Tu", "We", "Th", "Fr", "Sa"] {
                    div { class: "calendar-day-label", key: "{day}", "{day}" }
                }
                {day_cells}
            }

            div { class: "calendar-task-list",
                if selected_tasks.is_empty() {
                    p { class: "calendar-empty", "No tasks due this day." }
                } else {
                    ul {
                        for task in selected_tasks {
                            {
                                let tag_class =
                                    format!("calendar-task-tag calendar-{}", task.priority.as_str());
                                let tag_label = task.priority.label();
                                rsx! {
                                    li { class: "calendar-task-item", key: "{task.id}",
                                        span { class: "calendar-task-text", "{task.text}" }
                                        span { class: "{tag_class}", "{tag_label}" }
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
