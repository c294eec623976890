//! Home page listing the tool categories.

use leptos::prelude::*;

use super::tools::TOOLS;
use crate::components::tool_card::ToolCard;

/// Home page: a grid of tool-category cards.
#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="home-page">
            <h1 class="title">"File Conversor"</h1>
            <p class="subtitle">"Pick a tool category to get started."</p>
            <div class="home-page__grid">
                {TOOLS
                    .iter()
                    .map(|tool| view! { <ToolCard tool=tool/> })
                    .collect_view()}
            </div>
        </div>
    }
}
