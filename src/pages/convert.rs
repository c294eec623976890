//! Conversion form page for one tool category.
//!
//! ARCHITECTURE
//! ============
//! The page resolves its tool from the route parameter and renders the
//! conversion form. Submission is intercepted and handed to
//! [`crate::net::submit`]; the status bar below the form tracks the
//! resulting job through the shared status store.

use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::hooks::use_params_map;

use super::tools::{ToolEntry, find_tool, tool_endpoint};
use crate::components::status_bar::StatusBar;
use crate::state::modal::ModalState;
use crate::state::status::StatusBarState;

/// Conversion page, keyed by the `id` route parameter.
#[component]
pub fn ConvertPage() -> impl IntoView {
    let params = use_params_map();
    let tool = move || {
        params
            .read()
            .get("id")
            .and_then(|slug| find_tool(&slug))
    };

    view! {
        {move || match tool() {
            Some(tool) => view! { <ToolForm tool=tool/> }.into_any(),
            None => view! { <p class="notification is-warning">"Tool not found."</p> }.into_any(),
        }}
    }
}

/// The conversion form plus the status bar tracking its job.
#[component]
fn ToolForm(tool: &'static ToolEntry) -> impl IntoView {
    let status = expect_context::<RwSignal<StatusBarState>>();
    let modal = expect_context::<RwSignal<ModalState>>();
    let endpoint = tool_endpoint(tool.slug);
    let action = endpoint.clone();

    // A conversion is in flight until its polling session finishes.
    let busy = move || {
        let state = status.get();
        state.started && !state.finished
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy() {
            return;
        }
        #[cfg(feature = "hydrate")]
        {
            use wasm_bindgen::JsCast;
            let Some(form) = ev
                .target()
                .and_then(|target| target.dyn_into::<web_sys::HtmlFormElement>().ok())
            else {
                return;
            };
            crate::net::submit::submit_form(&form, &endpoint, status, modal);
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&endpoint, modal);
        }
    };

    view! {
        <Title text=format!("{} - File Conversor", tool.title)/>
        <h1 class="title">{tool.title}</h1>
        <p class="subtitle">{tool.subtitle}</p>

        <form class="box" method="post" action=action enctype="multipart/form-data" on:submit=on_submit>
            <div class="field">
                <label class="label" for="files">"Files"</label>
                <input class="input" id="files" type="file" name="files" multiple/>
            </div>
            <div class="field">
                <label class="label" for="format">"Output format"</label>
                <div class="select">
                    <select id="format" name="format">
                        {tool
                            .formats
                            .iter()
                            .map(|format| view! { <option value={*format}>{*format}</option> })
                            .collect_view()}
                    </select>
                </div>
            </div>
            <div class="field">
                <label class="checkbox">
                    <input type="checkbox" name="overwrite"/>
                    " Overwrite existing files"
                </label>
            </div>
            <div class="field">
                <label class="checkbox">
                    <input type="checkbox" name="verbose"/>
                    " Verbose logging"
                </label>
            </div>
            <button class="button is-primary" type="submit" disabled=busy>
                "Convert"
            </button>
        </form>

        <StatusBar/>
    }
}
