//! "Upcoming (next 2 days)" widget.

use dioxus::prelude::*;

use crate::state::TaskItem;

#[component]
pub fn UpcomingWidget(
    // Derived via `derive::upcoming_tasks`.
    tasks: Vec<TaskItem>,
) -> Element {
    rsx! {
        section { class: "dashboard-widget",
            h3 { class: "dashboard-widget-title", "Upcoming (next 2 days)" }
            if tasks.is_empty() {
                p { class: "upcoming-empty", "No tasks due in the next two days." }
            } else {
                div { class: "upcoming-list",
                    for task in tasks {
                        div { class: "upcoming-item", key: "{task.id}",
                            span { class: "upcoming-text", "{task.text}" }
                            span { class: "upcoming-date-pill", "{task.due_date}" }
                        }
                    }
                }
            }
        }
    }
}
