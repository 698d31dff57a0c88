//! The dashboard: composer and list on the left, priority board in the
//! middle, widgets (upcoming, notes, calendar) on the right.
//!
//! This view owns the per-concern state containers (task store, filter,
//! sort mode) and derives every presentational list through [`ui::derive`]
//! on render. Mutations flow through [`ui::TaskStore`] actions, which apply
//! the server's response to local state.

use chrono::Local;
use dioxus::prelude::*;

use api::{Priority, UpdateTask};
use ui::derive::{self, Filter, SortMode};
use ui::{
    use_auth, AuthState, Navbar, NotesWidget, PriorityBoard, TaskCalendar, TaskComposer, TaskList,
    UpcomingWidget,
};

use crate::Route;

#[component]
pub fn Dashboard() -> Element {
    let mut auth = use_auth();
    let nav = use_navigator();
    let store = ui::provide_task_store();

    let mut filter = use_signal(|| Filter::All);
    let mut sort_mode = use_signal(|| SortMode::None);
    let mut dark = use_signal(|| false);

    // Session check: unauthenticated users go back to the login view
    use_effect(move || {
        let state = auth();
        if !state.loading && state.user.is_none() {
            nav.replace(Route::Login {});
        }
    });

    // Initial task load
    let _loader = use_resource(move || async move {
        store.load().await;
    });

    let tasks = (store.tasks)();
    let filtered = derive::apply_filter(&tasks, filter());
    let sorted = derive::sort_tasks(filtered.clone(), sort_mode());
    let (completed_count, total_count, progress_percent) = derive::progress(&tasks);
    let upcoming = derive::upcoming_tasks(&tasks, Local::now().date_naive());

    let user_name = auth().user.map(|u| u.name);

    let handle_logout = move |_| {
        spawn(async move {
            if let Err(e) = ui::client::logout().await {
                tracing::error!("logout failed: {e}");
            }
            store.clear();
            auth.set(AuthState {
                user: None,
                loading: false,
            });
            nav.push(Route::Login {});
        });
    };

    rsx! {
        div { class: if dark() { "page dark-mode" } else { "page" },
            Navbar {
                user_name,
                dark: dark(),
                on_toggle_theme: move |_| dark.toggle(),
                on_logout: handle_logout,
            }

            main { class: "content",
                div { class: "dashboard-3col",
                    div { class: "col-left",
                        TaskComposer {
                            on_add: move |(text, priority, due_date): (String, Priority, String)| {
                                spawn(async move {
                                    store.add(text, priority, due_date).await;
                                });
                            },
                        }
                        TaskList {
                            tasks: sorted,
                            filter: filter(),
                            sort_mode: sort_mode(),
                            completed_count,
                            total_count,
                            progress_percent,
                            on_filter: move |f| filter.set(f),
                            on_sort: move |s| sort_mode.set(s),
                            on_toggle: move |id: String| {
                                spawn(async move {
                                    store.toggle(id).await;
                                });
                            },
                            on_commit: move |(id, patch): (String, UpdateTask)| {
                                spawn(async move {
                                    store.apply_patch(id, patch).await;
                                });
                            },
                        }
                    }

                    div { class: "col-middle",
                        PriorityBoard {
                            tasks: filtered.clone(),
                            on_toggle: move |id: String| {
                                spawn(async move {
                                    store.toggle(id).await;
                                });
                            },
                            on_delete: move |id: String| {
                                spawn(async move {
                                    store.remove(id).await;
                                });
                            },
                            on_save: move |(id, patch): (String, UpdateTask)| {
                                spawn(async move {
                                    store.apply_patch(id, patch).await;
                                });
                            },
                        }
                    }

                    div { class: "col-right",
                        UpcomingWidget { tasks: upcoming }
                        NotesWidget {}
                        TaskCalendar { tasks: tasks.clone() }
                    }
                }
            }
        }
    }
}
