//! Authentication context and hooks for the UI.

use dioxus::prelude::*;

use api::UserInfo;

use crate::client;

/// Authentication state for the application.
#[derive(Debug, Clone, PartialEq)]
pub struct AuthState {
    pub user: Option<UserInfo>,
    pub loading: bool,
}

impl Default for AuthState {
    fn default() -> Self {
        Self {
            user: None,
            loading: true,
        }
    }
}

/// Get the current authentication state.
/// Returns a signal that updates when the user logs in or out.
pub fn use_auth() -> Signal<AuthState> {
    use_context::<Signal<AuthState>>()
}

/// Provider component that manages authentication state.
/// Wrap your app with this component to enable authentication.
#[component]
pub fn AuthProvider(children: Element) -> Element {
    let mut auth_state = use_signal(AuthState::default);

    // Check the session cookie on mount
    let _ = use_resource(move || async move {
        match client::fetch_me().await {
            Ok(user) => auth_state.set(AuthState {
                user: Some(user),
                loading: false,
            }),
            Err(_) => auth_state.set(AuthState {
                user: None,
                loading: false,
            }),
        }
    });

    use_context_provider(|| auth_state);

    rsx! {
        {children}
    }
}
