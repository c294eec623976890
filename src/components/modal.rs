//! Modal dialog bound to the modal store.
//!
//! All text fields render as text nodes, so backend-supplied error
//! strings can never inject markup.

use leptos::prelude::*;

use crate::state::modal::ModalState;

/// The single application modal. Visibility, content, and closeability
/// all come from [`ModalState`]; close affordances are only rendered
/// while the content is closeable.
#[component]
pub fn ModalDialog() -> impl IntoView {
    let modal = expect_context::<RwSignal<ModalState>>();
    let close = move |_| modal.update(ModalState::dismiss);

    view! {
        <div class="modal" class:is-active=move || modal.get().show>
            <div class="modal-background" on:click=close></div>
            <div class="modal-card">
                <header class="modal-card-head">
                    <p class="modal-card-title">{move || modal.get().title}</p>
                    <Show when=move || modal.get().closeable>
                        <button class="delete" aria-label="close" on:click=close></button>
                    </Show>
                </header>
                <section class="modal-card-body">{move || modal.get().body}</section>
                <footer class="modal-card-foot">{move || modal.get().footer}</footer>
            </div>
        </div>
    }
}
