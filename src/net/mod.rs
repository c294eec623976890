//! Networking modules for the backend HTTP API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` handles the raw HTTP calls, `submit` drives the form-submission
//! flow, `status_poller` manages the job-status polling lifecycle, and
//! `types` defines the shared wire schema. `error` carries the fetch
//! failure taxonomy used by all of them.

pub mod api;
pub mod error;
pub mod status_poller;
pub mod submit;
pub mod types;
