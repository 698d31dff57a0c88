//! Google Identity Services sign-in button.
//!
//! Mirrors the GIS JavaScript flow: wait for the `gsi/client` script to
//! define `window.google.accounts.id`, call `initialize` with a callback
//! that receives the credential, then render Google's button into our
//! container element. The page embedding this component is responsible for
//! loading the script tag.

use dioxus::prelude::*;

/// OAuth client id baked in at build time; must match the server's.
#[cfg(target_arch = "wasm32")]
const GOOGLE_CLIENT_ID: Option<&str> = option_env!("GOOGLE_CLIENT_ID");

const BUTTON_CONTAINER_ID: &str = "google-signin-button";

/// Renders the Google sign-in button and emits the ID token ("credential")
/// once the user completes the popup flow.
#[component]
pub fn GoogleSignInButton(on_credential: EventHandler<String>) -> Element {
    use_effect(move || {
        #[cfg(target_arch = "wasm32")]
        {
            spawn(async move {
                // The gsi script loads asynchronously; poll until it is ready.
                for _ in 0..40 {
                    if wasm::init_button(on_credential).is_ok() {
                        return;
                    }
                    gloo_timers::future::sleep(std::time::Duration::from_millis(250)).await;
                }
                tracing::error!("Google Identity Services script did not load");
            });
        }
        // Server-side render has no button to wire up.
        #[cfg(not(target_arch = "wasm32"))]
        let _ = on_credential;
    });

    rsx! {
        div { id: BUTTON_CONTAINER_ID, class: "login-google-btn" }
    }
}

#[cfg(target_arch = "wasm32")]
mod wasm {
    use dioxus::prelude::*;
    use wasm_bindgen::prelude::*;
    use wasm_bindgen::JsCast;

    /// Wire up `google.accounts.id` to our container. Fails (harmlessly)
    /// while the gsi script is still loading.
    pub(super) fn init_button(on_credential: EventHandler<String>) -> Result<(), JsValue> {
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;

        let google = js_sys::Reflect::get(&window, &JsValue::from_str("google"))?;
        if google.is_undefined() {
            return Err(JsValue::from_str("gsi script not ready"));
        }
        let accounts = js_sys::Reflect::get(&google, &JsValue::from_str("accounts"))?;
        let id = js_sys::Reflect::get(&accounts, &JsValue::from_str("id"))?;
        if id.is_undefined() {
            return Err(JsValue::from_str("gsi script not ready"));
        }

        let client_id = super::GOOGLE_CLIENT_ID.unwrap_or_default();
        if client_id.is_empty() {
            tracing::warn!("GOOGLE_CLIENT_ID was not set at build time; sign-in will be rejected");
        }

        let callback = Closure::<dyn FnMut(JsValue)>::new(move |response: JsValue| {
            let credential = js_sys::Reflect::get(&response, &JsValue::from_str("credential"))
                .ok()
                .and_then(|v| v.as_string());
            if let Some(credential) = credential {
                on_credential.call(credential);
            }
        });

        let config = js_sys::Object::new();
        js_sys::Reflect::set(
            &config,
            &JsValue::from_str("client_id"),
            &JsValue::from_str(client_id),
        )?;
        js_sys::Reflect::set(&config, &JsValue::from_str("callback"), callback.as_ref())?;
        call_method(&id, "initialize", &[config.into()])?;

        let document = window
            .document()
            .ok_or_else(|| JsValue::from_str("no document"))?;
        let container = document
            .get_element_by_id(super::BUTTON_CONTAINER_ID)
            .ok_or_else(|| JsValue::from_str("button container missing"))?;

        let options = js_sys::Object::new();
        js_sys::Reflect::set(
            &options,
            &JsValue::from_str("theme"),
            &JsValue::from_str("outline"),
        )?;
        js_sys::Reflect::set(
            &options,
            &JsValue::from_str("size"),
            &JsValue::from_str("large"),
        )?;
        js_sys::Reflect::set(
            &options,
            &JsValue::from_str("width"),
            &JsValue::from_f64(260.0),
        )?;
        call_method(&id, "renderButton", &[container.into(), options.into()])?;

        // GIS keeps calling the credential handler for later sign-ins, so it
        // must live for the page lifetime.
        callback.forget();
        Ok(())
    }

    fn call_method(target: &JsValue, name: &str, args: &[JsValue]) -> Result<JsValue, JsValue> {
        let method: js_sys::Function =
            js_sys::Reflect::get(target, &JsValue::from_str(name))?.dyn_into()?;
        match args {
            [a] => method.call1(target, a),
            [a, b] => method.call2(target, a, b),
            _ => method.call0(target),
        }
    }
}
