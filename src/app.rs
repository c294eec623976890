//! Root application component with routing and context providers.
//!
//! DESIGN
//! ======
//! Every store is constructed exactly once here and handed to the UI
//! through context, in a defined order, before any route renders. This
//! replaces ad-hoc "already initialized" guards: there is no second
//! construction path, so idempotence needs no flag.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::modal::ModalDialog;
use crate::components::navbar::Navbar;
use crate::pages::{convert::ConvertPage, home::HomePage};
use crate::state::modal::ModalState;
use crate::state::nav::NavState;
use crate::state::status::StatusBarState;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides all shared state contexts, sets up client-side routing, and
/// installs the host-bridge title sync.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let status = RwSignal::new(StatusBarState::default());
    let modal = RwSignal::new(ModalState::default());
    let nav = RwSignal::new(NavState::default());

    provide_context(status);
    provide_context(modal);
    provide_context(nav);

    // Mirror the document title into the host window chrome once the
    // webview bridge reports ready.
    Effect::new(move || {
        crate::util::host_bridge::install_title_sync();
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/conversor-client.css"/>
        <Title text="File Conversor"/>

        <Router>
            <Navbar/>
            <main class="section">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=(StaticSegment("tool"), ParamSegment("id")) view=ConvertPage/>
                </Routes>
            </main>
            <ModalDialog/>
        </Router>
    }
}
