//! Fetch failure taxonomy for the backend API calls.
//!
//! ERROR HANDLING
//! ==============
//! Every request failure collapses into one of three shapes: the fetch
//! never produced a response, the backend answered non-2xx, or the body
//! was not the expected JSON. Callers convert these into terminal store
//! state or a modal notification at the operation boundary; nothing is
//! allowed to escape as an unhandled rejection.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// A failed backend request.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum FetchError {
    /// The request never produced a response (offline, refused, aborted).
    #[error("{0}")]
    Transport(String),
    /// The backend answered with a non-success HTTP status.
    #[error("{message}")]
    Http {
        /// Numeric HTTP status code.
        status: u16,
        /// Failure text: backend-supplied when parseable, synthesized
        /// from the response line otherwise.
        message: String,
    },
    /// The response body could not be parsed as the expected JSON shape.
    #[error("invalid response body: {0}")]
    Json(String),
}

/// Failure text for a non-2xx response with no usable backend message.
#[must_use]
pub fn synthesized_http_error(status_text: &str, status: u16, url: &str, method: &str) -> String {
    format!("{status_text} ({status}): {url} ({method})")
}

/// Whether an error text describes a lost-connectivity condition rather
/// than a backend-side failure.
///
/// Matches the fetch rejection wording of the engines pywebview embeds:
/// Chromium/WebView2, Gecko, and WebKit respectively.
#[must_use]
pub fn is_connection_error(text: &str) -> bool {
    ["Failed to fetch", "NetworkError", "Load failed"]
        .iter()
        .any(|needle| text.contains(needle))
}
