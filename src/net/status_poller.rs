//! Job-status polling lifecycle.
//!
//! ARCHITECTURE
//! ============
//! One polling session per submitted job: [`start_polling`] resets the
//! status store, bumps its session generation, and spawns a loop that
//! alternates one status fetch with one fixed one-second delay until the
//! backend reports a terminal state or a fetch fails. The decision of
//! what a tick result means is the pure [`apply_tick_result`] transition,
//! so the whole state machine is testable without a browser.
//!
//! SYSTEM CONTEXT
//! ==============
//! Ticks are strictly sequential: each fetch is fully awaited before the
//! next delay is scheduled, so a session never has overlapping in-flight
//! status requests. A newer `start_polling` supersedes older sessions: a
//! loop holding a stale generation exits at its next check instead of
//! clobbering the new session's state.

#[cfg(test)]
#[path = "status_poller_test.rs"]
mod status_poller_test;

use std::time::Duration;

#[cfg(feature = "hydrate")]
use leptos::prelude::GetUntracked;
use leptos::prelude::{RwSignal, Update};

use super::error::{FetchError, is_connection_error};
use super::types::{JobState, JobStatus};
use crate::state::modal::{ModalContent, ModalState};
use crate::state::status::StatusBarState;

/// Delay between polls. Fixed cadence, no backoff, no retry limit.
pub const POLL_INTERVAL: Duration = Duration::from_secs(1);

/// Whether the session continues after a tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    /// Non-terminal snapshot: sleep [`POLL_INTERVAL`] and poll again.
    Continue,
    /// Terminal state reached (or the fetch failed): the loop ends.
    Stop,
}

/// Result of applying one tick: an optional modal to surface plus the
/// continue/stop decision.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TickEffect {
    /// Dialog content to load into the modal store, if any.
    pub modal: Option<ModalContent>,
    /// Loop decision.
    pub outcome: TickOutcome,
}

/// Begin polling `job_id`, resetting any session already in flight.
///
/// The first poll happens immediately; stale loops from earlier sessions
/// observe the bumped generation and exit silently.
pub fn start_polling(
    status: RwSignal<StatusBarState>,
    modal: RwSignal<ModalState>,
    job_id: String,
) {
    let Some(session) = status.try_update(|s| s.start(&job_id)) else {
        return;
    };
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(poll_loop(status, modal, job_id, session));
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (modal, session);
    }
}

#[cfg(feature = "hydrate")]
async fn poll_loop(
    status: RwSignal<StatusBarState>,
    modal: RwSignal<ModalState>,
    job_id: String,
    session: u64,
) {
    loop {
        if superseded(status, session) {
            return;
        }
        status.update(StatusBarState::tick);

        let result = super::api::fetch_job_status(&job_id).await;

        if superseded(status, session) {
            return;
        }
        let Some(effect) = status.try_update(|s| apply_tick_result(s, result)) else {
            return;
        };
        if let Some(content) = effect.modal {
            modal.update(|m| m.load(content));
        }
        match effect.outcome {
            TickOutcome::Stop => return,
            TickOutcome::Continue => gloo_timers::future::sleep(POLL_INTERVAL).await,
        }
    }
}

#[cfg(feature = "hydrate")]
fn superseded(status: RwSignal<StatusBarState>, session: u64) -> bool {
    status
        .try_get_untracked()
        .is_none_or(|s| s.session != session)
}

/// Apply one poll result to the status store.
///
/// A healthy snapshot copies `message`/`progress` in and continues unless
/// the backend reported a terminal state. Any fetch failure is itself
/// terminal: the job may well still be running server-side, but the
/// client has no way to tell, so the session fails with a dialog.
pub fn apply_tick_result(
    state: &mut StatusBarState,
    result: Result<JobStatus, FetchError>,
) -> TickEffect {
    match result {
        Ok(job) => {
            state.message = job.message.clone();
            state.progress = job.progress;
            match job.status {
                JobState::Failed => {
                    state.fail();
                    TickEffect {
                        modal: Some(failure_modal(&job)),
                        outcome: TickOutcome::Stop,
                    }
                }
                JobState::Completed => {
                    state.complete();
                    TickEffect {
                        modal: None,
                        outcome: TickOutcome::Stop,
                    }
                }
                JobState::Pending | JobState::Processing => TickEffect {
                    modal: None,
                    outcome: TickOutcome::Continue,
                },
            }
        }
        Err(error) => {
            state.fail();
            TickEffect {
                modal: Some(error_modal(&error)),
                outcome: TickOutcome::Stop,
            }
        }
    }
}

/// Dialog for a backend-reported job failure inside a healthy response.
fn failure_modal(job: &JobStatus) -> ModalContent {
    let detail = job
        .exception
        .as_deref()
        .filter(|e| !e.is_empty())
        .unwrap_or(&job.message);
    ModalContent {
        title: "Conversion failed".to_owned(),
        body: detail.to_owned(),
        ..ModalContent::default()
    }
}

/// Dialog for a failed status fetch. Connectivity failures are
/// non-closeable; the backend process is gone, so there is nothing the
/// user can do from inside the page.
fn error_modal(error: &FetchError) -> ModalContent {
    let text = error.to_string();
    if is_connection_error(&text) {
        ModalContent {
            title: "Lost connection".to_owned(),
            body: text,
            footer: "Restart the application to continue.".to_owned(),
            closeable: false,
        }
    } else {
        ModalContent {
            title: "Job Status Error".to_owned(),
            body: text,
            ..ModalContent::default()
        }
    }
}
