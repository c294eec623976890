//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`status`, `modal`, `nav`) so individual
//! components can depend on small focused models. Each store is
//! constructed exactly once in [`crate::app::App`] and provided through
//! Leptos context; there is no ambient global registry to look stores
//! up in, and no re-initialization path.

pub mod modal;
pub mod nav;
pub mod status;
