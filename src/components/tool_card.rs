//! Clickable card for one tool category on the home grid.

use leptos::prelude::*;

use crate::pages::tools::ToolEntry;

/// A card linking to a tool's conversion page.
#[component]
pub fn ToolCard(tool: &'static ToolEntry) -> impl IntoView {
    let href = format!("/tool/{}", tool.slug);

    view! {
        <a class="card tool-card" href=href>
            <div class="card-content">
                <p class="title is-5">{tool.title}</p>
                <p class="subtitle is-6">{tool.subtitle}</p>
            </div>
        </a>
    }
}
