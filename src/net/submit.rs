//! Conversion form submission flow.
//!
//! SYSTEM CONTEXT
//! ==============
//! Serializes the form, POSTs it to the tool endpoint, and on acceptance
//! hands the returned job id to [`super::status_poller`]. Every failure
//! along the way (serialization, transport, HTTP, missing job id) is
//! routed into the modal store; nothing propagates past this module.
//!
//! A malformed JSON body is deliberately tolerated (logged and replaced
//! with an empty object) so the HTTP status line still decides the
//! outcome when the backend answers with a non-JSON error page.

#[cfg(test)]
#[path = "submit_test.rs"]
mod submit_test;

#[cfg(any(test, feature = "hydrate"))]
use super::error::synthesized_http_error;
#[cfg(any(test, feature = "hydrate"))]
use super::types::SubmitReply;
#[cfg(any(test, feature = "hydrate"))]
use crate::state::modal::ModalContent;

/// Shown when a 2xx acceptance carries no job identifier (a tolerated
/// parse failure, or a backend bug); polling an unknown id would only
/// fail one second later with a worse message.
#[cfg(any(test, feature = "hydrate"))]
const MISSING_JOB_ID: &str = "The submission was accepted but no job id was returned.";

/// Failure text for a rejected submission: the backend message when it
/// sent one, the synthesized response line otherwise.
#[cfg(any(test, feature = "hydrate"))]
fn submit_failure_text(reply: &SubmitReply, status_text: &str, status: u16, url: &str) -> String {
    if reply.message.is_empty() {
        synthesized_http_error(status_text, status, url, "POST")
    } else {
        reply.message.clone()
    }
}

#[cfg(any(test, feature = "hydrate"))]
fn submit_error_modal(text: &str) -> ModalContent {
    ModalContent {
        title: "Form Submit Error".to_owned(),
        body: text.to_owned(),
        ..ModalContent::default()
    }
}

/// Submit `form` to `endpoint` and start status polling on success.
///
/// Fire-and-forget from the caller's perspective: the whole sequence runs
/// in a local task and reports only through the two stores.
#[cfg(feature = "hydrate")]
pub fn submit_form(
    form: &web_sys::HtmlFormElement,
    endpoint: &str,
    status: leptos::prelude::RwSignal<crate::state::status::StatusBarState>,
    modal: leptos::prelude::RwSignal<crate::state::modal::ModalState>,
) {
    use leptos::prelude::Update;

    let form = form.clone();
    let endpoint = endpoint.to_owned();
    leptos::task::spawn_local(async move {
        match try_submit(&form, &endpoint).await {
            Ok(job_id) => super::status_poller::start_polling(status, modal, job_id),
            Err(text) => modal.update(|m| m.load(submit_error_modal(&text))),
        }
    });
}

#[cfg(feature = "hydrate")]
async fn try_submit(form: &web_sys::HtmlFormElement, endpoint: &str) -> Result<String, String> {
    let body = crate::util::form::collect_form_data(form)?;
    let resp = super::api::post_form_data(endpoint, body)
        .await
        .map_err(|e| e.to_string())?;

    let value = match resp.json::<serde_json::Value>().await {
        Ok(value) => value,
        Err(err) => {
            leptos::logging::warn!("submit: JSON parse error: {err}");
            serde_json::Value::Object(serde_json::Map::new())
        }
    };
    let reply = SubmitReply::from_value(&value);

    if !resp.ok() {
        return Err(submit_failure_text(
            &reply,
            &resp.status_text(),
            resp.status(),
            endpoint,
        ));
    }
    reply.id.ok_or_else(|| MISSING_JOB_ID.to_owned())
}
