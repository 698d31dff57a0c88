//! Free-text notes widget. Purely client-side scratch space.

use dioxus::prelude::*;

#[component]
pub fn NotesWidget() -> Element {
    let mut notes_text = use_signal(String::new);

    rsx! {
        section { class: "dashboard-widget",
            h3 { class: "dashboard-widget-title", "Notes" }
            textarea {
                class: "notes-textarea",
                placeholder: "Jot down quick notes...",
                value: notes_text(),
                oninput: move |evt| notes_text.set(evt.value()),
            }
        }
    }
}
