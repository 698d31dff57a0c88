//! Add-task card: text, priority, and optional due date for a new task.

use dioxus::prelude::*;

use api::Priority;

#[component]
pub fn TaskComposer(on_add: EventHandler<(String, Priority, String)>) -> Element {
    let mut text = use_signal(String::new);
    let mut priority = use_signal(|| Priority::Medium);
    let mut due_date = use_signal(String::new);

    let mut submit = move || {
        let trimmed = text().trim().to_string();
        if trimmed.is_empty() {
            return;
        }
        on_add.call((trimmed, priority(), due_date()));
        text.set(String::new());
        priority.set(Priority::Medium);
        due_date.set(String::new());
    };

    rsx! {
        section { class: "todo-card",
            h1 { class: "todo-title", "My Tasks" }

            div { class: "todo-input-row",
                input {
                    class: "todo-input",
                    r#type: "text",
                    placeholder: "Type your task here..",
                    value: text(),
                    oninput: move |evt| text.set(evt.value()),
                    onkeydown: move |evt| {
                        if evt.key() == Key::Enter {
                            submit();
                        }
                    },
                }
                button { class: "todo-add-btn", onclick: move |_| submit(), "+ Add" }
            }

            div { class: "todo-meta-input-row",
                select {
                    class: "todo-priority-select",
                    value: priority().as_str(),
                    onchange: move |evt| {
                        priority.set(Priority::parse(&evt.value()).unwrap_or_default())
                    },
                    option { value: "low", "Low priority" }
                    option { value: "medium", "Medium priority" }
                    option { value: "high", "High priority" }
                }
                input {
                    class: "todo-date-input",
                    r#type: "date",
                    value: due_date(),
                    onchange: move |evt| due_date.set(evt.value()),
                }
            }
        }
    }
}
