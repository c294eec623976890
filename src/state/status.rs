//! Job-status store backing the status bar.
//!
//! SYSTEM CONTEXT
//! ==============
//! This model is the local, eventually-consistent projection of one
//! backend conversion job. It is mutated only by
//! [`crate::net::status_poller`]: `start` resets it for a new polling
//! session and each poll tick copies the latest snapshot in.

#[cfg(test)]
#[path = "status_test.rs"]
mod status_test;

/// Status-bar state for the active (or last) polling session.
///
/// Invariants: `finished` implies exactly one of `success`/`failed`;
/// `started` is set before the first poll of a session and never reset
/// mid-session; `ticks` increments exactly once per poll.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StatusBarState {
    /// A polling session has begun (stays set after it finishes).
    pub started: bool,
    /// The session reached a terminal state.
    pub finished: bool,
    /// Terminal state was `completed`.
    pub success: bool,
    /// Terminal state was `failed` or the poll itself errored.
    pub failed: bool,
    /// Latest backend progress message.
    pub message: String,
    /// Latest backend progress value; raw, including the backend's `-1`
    /// indeterminate marker. Filter through [`display_progress`] before
    /// binding to a progress element.
    pub progress: Option<i32>,
    /// Number of polls performed this session (one per second).
    pub ticks: u32,
    /// Job handle being polled.
    pub job_id: Option<String>,
    /// Polling generation. Bumped by [`StatusBarState::start`]; a loop
    /// holding a stale generation must exit without touching state.
    pub session: u64,
}

impl StatusBarState {
    /// Reset for a new polling session and return its generation.
    pub fn start(&mut self, job_id: &str) -> u64 {
        self.started = true;
        self.finished = false;
        self.success = false;
        self.failed = false;
        self.message.clear();
        self.progress = None;
        self.ticks = 0;
        self.job_id = Some(job_id.to_owned());
        self.session += 1;
        self.session
    }

    /// Count one poll.
    pub fn tick(&mut self) {
        self.ticks += 1;
    }

    /// Enter the success terminal state.
    pub fn complete(&mut self) {
        self.finished = true;
        self.success = true;
        self.failed = false;
    }

    /// Enter the failure terminal state.
    pub fn fail(&mut self) {
        self.finished = true;
        self.failed = true;
        self.success = false;
    }
}

/// Progress value suitable for a `<progress>` element, or `None` when the
/// bar should render indeterminate (no value attribute).
#[must_use]
pub fn display_progress(progress: Option<i32>) -> Option<i32> {
    progress.filter(|p| (0..=100).contains(p))
}
