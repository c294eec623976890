//! REST API helpers for communicating with the local backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning errors since these endpoints are
//! only meaningful in the browser.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::error::FetchError;
#[cfg(any(test, feature = "hydrate"))]
use super::error::synthesized_http_error;
use super::types::JobStatus;

#[cfg(any(test, feature = "hydrate"))]
fn status_endpoint(job_id: &str) -> String {
    format!("/api/status?status_id={job_id}")
}

/// Failure text for a non-2xx status response.
///
/// The backend answers 404 (unknown id) and 500 (job error) with the same
/// JSON shape as a healthy status, so a parseable body contributes its
/// own failure detail before the synthesized response line is used.
#[cfg(any(test, feature = "hydrate"))]
fn status_failure_message(
    parsed: Option<&JobStatus>,
    status_text: &str,
    status: u16,
    url: &str,
) -> String {
    if let Some(body) = parsed {
        if let Some(exception) = body.exception.as_deref().filter(|e| !e.is_empty()) {
            return exception.to_owned();
        }
        if !body.message.is_empty() {
            return body.message.clone();
        }
    }
    synthesized_http_error(status_text, status, url, "GET")
}

/// Fetch one status snapshot for `job_id` from `GET /api/status`.
///
/// # Errors
///
/// Returns [`FetchError::Transport`] when the request never completes,
/// [`FetchError::Http`] on a non-2xx answer, and [`FetchError::Json`]
/// when a 2xx body is not a valid status document.
pub async fn fetch_job_status(job_id: &str) -> Result<JobStatus, FetchError> {
    #[cfg(feature = "hydrate")]
    {
        let url = status_endpoint(job_id);
        let resp = gloo_net::http::Request::get(&url)
            .send()
            .await
            .map_err(|e| FetchError::Transport(e.to_string()))?;
        if !resp.ok() {
            let parsed = resp.json::<JobStatus>().await.ok();
            return Err(FetchError::Http {
                status: resp.status(),
                message: status_failure_message(
                    parsed.as_ref(),
                    &resp.status_text(),
                    resp.status(),
                    &url,
                ),
            });
        }
        resp.json::<JobStatus>()
            .await
            .map_err(|e| FetchError::Json(e.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = job_id;
        Err(FetchError::Transport("not available on server".to_owned()))
    }
}

/// POST a multipart form body to a conversion endpoint.
///
/// The browser supplies the multipart boundary from the `FormData`
/// value, so no content-type header is set here.
///
/// # Errors
///
/// Returns [`FetchError::Transport`] when the request cannot be built or
/// never completes. Non-2xx answers are returned as responses; the
/// submit flow inspects their bodies itself.
#[cfg(feature = "hydrate")]
pub async fn post_form_data(
    endpoint: &str,
    body: web_sys::FormData,
) -> Result<gloo_net::http::Response, FetchError> {
    gloo_net::http::Request::post(endpoint)
        .body(body)
        .map_err(|e| FetchError::Transport(e.to_string()))?
        .send()
        .await
        .map_err(|e| FetchError::Transport(e.to_string()))
}
