//! Shared UI for the What To-Do workspace: the auth context, the REST
//! client, client-side task state, pure view derivations, and the dashboard
//! widgets.

mod auth;
pub use auth::{use_auth, AuthProvider, AuthState};

pub mod client;

pub mod derive;

pub mod state;
pub use state::{provide_task_store, use_task_store, TaskItem, TaskStore};

mod google_signin;
pub use google_signin::GoogleSignInButton;

mod navbar;
pub use navbar::Navbar;

mod task_composer;
pub use task_composer::TaskComposer;

mod task_list;
pub use task_list::TaskList;

mod priority_board;
pub use priority_board::PriorityBoard;

mod upcoming;
pub use upcoming::UpcomingWidget;

mod notes;
pub use notes::NotesWidget;

mod calendar;
pub use calendar::TaskCalendar;
