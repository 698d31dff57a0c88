//! Login page: Google sign-in.

use dioxus::prelude::*;

use ui::{use_auth, AuthState, GoogleSignInButton};

use crate::Route;

#[component]
pub fn Login() -> Element {
    let mut auth = use_auth();
    let nav = use_navigator();

    // Already signed in: straight to the dashboard
    use_effect(move || {
        let state = auth();
        if !state.loading && state.user.is_some() {
            nav.replace(Route::Dashboard {});
        }
    });

    // GIS hands us the ID token; trade it for a session cookie, then
    // refresh the auth context before navigating.
    let handle_credential = move |id_token: String| {
        spawn(async move {
            if let Err(e) = ui::client::login_google(&id_token).await {
                tracing::error!("google sign-in failed: {e}");
                return;
            }
            match ui::client::fetch_me().await {
                Ok(user) => {
                    auth.set(AuthState {
                        user: Some(user),
                        loading: false,
                    });
                    nav.push(Route::Dashboard {});
                }
                Err(e) => tracing::error!("session check after login failed: {e}"),
            }
        });
    };

    rsx! {
        document::Script { src: "https://accounts.google.com/gsi/client" }

        div { class: "login-page",
            div { class: "login-card",
                h1 { class: "login-title", "Welcome to What To-Do 🗓️" }
                p { class: "login-subtext", "Organize tasks. Track progress. Stay on pace." }

                GoogleSignInButton { on_credential: handle_credential }

                p { class: "login-hint", "Sign in with your Google account to continue." }

                button {
                    r#type: "button",
                    class: "login-skip",
                    onclick: move |_| {
                        nav.push(Route::Dashboard {});
                    },
                    "Skip for now →"
                }
            }
        }
    }
}
