//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render application chrome while reading/writing shared
//! state from Leptos context providers.

pub mod modal;
pub mod navbar;
pub mod status_bar;
pub mod tool_card;
