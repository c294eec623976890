//! pywebview host-bridge interop.
//!
//! SYSTEM CONTEXT
//! ==============
//! The desktop shell injects its native API into the page as
//! `window.pywebview.api` and fires a `pywebviewready` window event once
//! the surface is callable. Every bridge method returns a promise; all
//! calls here are fire-and-forget; a rejection is logged, never
//! surfaced, since window chrome is cosmetic from the page's view.
//!
//! Requires a browser environment; on the server every function is a
//! no-op.

/// Window event fired by the shell once `window.pywebview.api` exists.
#[cfg(feature = "hydrate")]
const READY_EVENT: &str = "pywebviewready";

/// Push the document title to the host window chrome as soon as the
/// bridge is available: immediately when it already is, otherwise on the
/// ready event.
pub fn install_title_sync() {
    #[cfg(feature = "hydrate")]
    {
        if bridge_api().is_some() {
            push_document_title();
        } else {
            on_bridge_ready(push_document_title);
        }
    }
}

/// Send the current document title to the host window.
pub fn push_document_title() {
    #[cfg(feature = "hydrate")]
    {
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };
        let options = js_sys::Object::new();
        let _ = js_sys::Reflect::set(&options, &"title".into(), &document.title().into());
        call_bridge("set_title", Some(options));
    }
}

/// Minimize the host window.
pub fn minimize_window() {
    #[cfg(feature = "hydrate")]
    call_bridge("minimize", None);
}

/// Maximize the host window.
pub fn maximize_window() {
    #[cfg(feature = "hydrate")]
    call_bridge("maximize", None);
}

/// Close the host window, ending the application.
pub fn close_window() {
    #[cfg(feature = "hydrate")]
    call_bridge("close", None);
}

#[cfg(feature = "hydrate")]
fn on_bridge_ready(handler: fn()) {
    use wasm_bindgen::JsCast;

    let Some(window) = web_sys::window() else {
        return;
    };
    let closure = wasm_bindgen::closure::Closure::wrap(
        Box::new(move |_: web_sys::Event| handler()) as Box<dyn FnMut(web_sys::Event)>,
    );
    let _ = window.add_event_listener_with_callback(READY_EVENT, closure.as_ref().unchecked_ref());
    // Listener lives for the page session.
    closure.forget();
}

#[cfg(feature = "hydrate")]
fn bridge_api() -> Option<js_sys::Object> {
    use wasm_bindgen::JsCast;

    let window = web_sys::window()?;
    let pywebview = js_sys::Reflect::get(window.as_ref(), &"pywebview".into()).ok()?;
    if pywebview.is_undefined() || pywebview.is_null() {
        return None;
    }
    js_sys::Reflect::get(&pywebview, &"api".into())
        .ok()?
        .dyn_into::<js_sys::Object>()
        .ok()
}

#[cfg(feature = "hydrate")]
fn call_bridge(method: &str, options: Option<js_sys::Object>) {
    use wasm_bindgen::JsCast;

    let Some(api) = bridge_api() else {
        leptos::logging::warn!("host bridge unavailable for '{method}'");
        return;
    };
    let Ok(func) = js_sys::Reflect::get(&api, &method.into()) else {
        return;
    };
    let Ok(func) = func.dyn_into::<js_sys::Function>() else {
        leptos::logging::warn!("host bridge has no '{method}' method");
        return;
    };

    let result = match &options {
        Some(opts) => func.call1(&api, opts),
        None => func.call0(&api),
    };
    match result {
        Ok(value) => {
            let Ok(promise) = value.dyn_into::<js_sys::Promise>() else {
                return;
            };
            let method = method.to_owned();
            wasm_bindgen_futures::spawn_local(async move {
                if let Err(err) = wasm_bindgen_futures::JsFuture::from(promise).await {
                    leptos::logging::warn!("host bridge '{method}' rejected: {err:?}");
                }
            });
        }
        Err(err) => {
            leptos::logging::warn!("host bridge '{method}' call failed: {err:?}");
        }
    }
}
