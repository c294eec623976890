//! Conversion status bar bound to the status store.

use leptos::prelude::*;

use crate::state::status::{StatusBarState, display_progress};

/// Progress panel for the active conversion job.
///
/// Hidden until a polling session has started. The progress element
/// carries a `value` attribute only while the backend reports a valid
/// percentage; otherwise it renders the indeterminate animation.
#[component]
pub fn StatusBar() -> impl IntoView {
    let status = expect_context::<RwSignal<StatusBarState>>();

    let message_class = move || {
        let state = status.get();
        if state.failed {
            "status-panel__message status-panel__message--failed"
        } else if state.success {
            "status-panel__message status-panel__message--success"
        } else {
            "status-panel__message"
        }
    };

    view! {
        <Show when=move || status.get().started>
            <div class="box status-panel">
                <progress
                    class="progress is-info"
                    max="100"
                    value=move || display_progress(status.get().progress)
                ></progress>
                <p class=message_class>{move || status.get().message}</p>
                <p class="status-panel__elapsed">
                    {move || format!("{} s elapsed", status.get().ticks)}
                </p>
            </div>
        </Show>
    }
}
