//! Top navigation bar with burger menu and host window controls.

use leptos::prelude::*;

use crate::state::nav::NavState;
use crate::util::host_bridge;

/// Application navbar. The burger and its target menu both bind
/// `is-active` to the shared [`NavState`], and the window-control
/// buttons forward to the host bridge (no-ops outside the webview).
#[component]
pub fn Navbar() -> impl IntoView {
    let nav = expect_context::<RwSignal<NavState>>();
    let toggle = move |_| nav.update(NavState::toggle);

    view! {
        <nav class="navbar" role="navigation" aria-label="main navigation">
            <div class="navbar-brand">
                <a class="navbar-item navbar-item--brand" href="/">"File Conversor"</a>
                <a
                    role="button"
                    class="navbar-burger"
                    class:is-active=move || nav.get().menu_open
                    aria-label="menu"
                    aria-expanded=move || if nav.get().menu_open { "true" } else { "false" }
                    on:click=toggle
                >
                    <span aria-hidden="true"></span>
                    <span aria-hidden="true"></span>
                    <span aria-hidden="true"></span>
                </a>
            </div>
            <div class="navbar-menu" class:is-active=move || nav.get().menu_open>
                <div class="navbar-start">
                    <a class="navbar-item" href="/">"Home"</a>
                </div>
                <div class="navbar-end">
                    <div class="navbar-item navbar-item--window-controls">
                        <button
                            class="button is-small"
                            title="Minimize"
                            aria-label="Minimize window"
                            on:click=move |_| host_bridge::minimize_window()
                        >
                            "_"
                        </button>
                        <button
                            class="button is-small"
                            title="Maximize"
                            aria-label="Maximize window"
                            on:click=move |_| host_bridge::maximize_window()
                        >
                            "□"
                        </button>
                        <button
                            class="button is-small"
                            title="Close"
                            aria-label="Close window"
                            on:click=move |_| host_bridge::close_window()
                        >
                            "✕"
                        </button>
                    </div>
                </div>
            </div>
        </nav>
    }
}
