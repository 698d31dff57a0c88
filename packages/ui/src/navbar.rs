//! Top bar: user name, theme toggle, logout.

use dioxus::prelude::*;

#[component]
pub fn Navbar(
    user_name: Option<String>,
    dark: bool,
    on_toggle_theme: EventHandler<()>,
    on_logout: EventHandler<()>,
) -> Element {
    let name = user_name.unwrap_or_default();

    rsx! {
        header { class: "topbar",
            div { class: "topbar-section topbar-left",
                if !name.is_empty() {
                    span { class: "topbar-username", "{name}" }
                }
            }
            div { class: "topbar-section topbar-center",
                h1 { class: "app-title", "What To-Do 📅" }
            }
            div { class: "topbar-section topbar-right",
                button {
                    class: "theme-toggle-btn",
                    onclick: move |_| on_toggle_theme.call(()),
                    if dark { "☀️ Light" } else { "🌙 Dark" }
                }
                button {
                    class: "logout-btn",
                    onclick: move |_| on_logout.call(()),
                    "Log out"
                }
            }
        }
    }
}
