use super::*;

// =============================================================
// Defaults
// =============================================================

#[test]
fn default_state_is_idle() {
    let state = StatusBarState::default();
    assert!(!state.started);
    assert!(!state.finished);
    assert!(!state.success);
    assert!(!state.failed);
    assert_eq!(state.ticks, 0);
    assert_eq!(state.job_id, None);
    assert_eq!(state.session, 0);
}

// =============================================================
// start
// =============================================================

#[test]
fn start_marks_started_and_stores_job_id() {
    let mut state = StatusBarState::default();
    state.start("5");
    assert!(state.started);
    assert!(!state.finished);
    assert_eq!(state.job_id.as_deref(), Some("5"));
}

#[test]
fn start_resets_a_finished_session() {
    let mut state = StatusBarState::default();
    state.start("1");
    state.tick();
    state.message = "done".to_owned();
    state.progress = Some(100);
    state.complete();

    state.start("2");
    assert!(state.started);
    assert!(!state.finished);
    assert!(!state.success);
    assert!(!state.failed);
    assert_eq!(state.message, "");
    assert_eq!(state.progress, None);
    assert_eq!(state.ticks, 0);
    assert_eq!(state.job_id.as_deref(), Some("2"));
}

#[test]
fn start_bumps_session_generation() {
    let mut state = StatusBarState::default();
    let first = state.start("1");
    let second = state.start("2");
    assert_eq!(first, 1);
    assert_eq!(second, 2);
    assert_eq!(state.session, 2);
}

// =============================================================
// Terminal transitions
// =============================================================

#[test]
fn complete_sets_exactly_success() {
    let mut state = StatusBarState::default();
    state.start("1");
    state.complete();
    assert!(state.finished);
    assert!(state.success);
    assert!(!state.failed);
}

#[test]
fn fail_sets_exactly_failed() {
    let mut state = StatusBarState::default();
    state.start("1");
    state.fail();
    assert!(state.finished);
    assert!(state.failed);
    assert!(!state.success);
}

#[test]
fn finished_never_holds_both_outcomes() {
    let mut state = StatusBarState::default();
    state.start("1");
    state.fail();
    state.complete();
    assert!(state.success && !state.failed);
    state.fail();
    assert!(state.failed && !state.success);
}

#[test]
fn tick_accumulates_per_poll() {
    let mut state = StatusBarState::default();
    state.start("1");
    state.tick();
    state.tick();
    state.tick();
    assert_eq!(state.ticks, 3);
}

// =============================================================
// display_progress
// =============================================================

#[test]
fn display_progress_passes_valid_range() {
    assert_eq!(display_progress(Some(0)), Some(0));
    assert_eq!(display_progress(Some(42)), Some(42));
    assert_eq!(display_progress(Some(100)), Some(100));
}

#[test]
fn display_progress_drops_indeterminate_markers() {
    assert_eq!(display_progress(Some(-1)), None);
    assert_eq!(display_progress(Some(101)), None);
    assert_eq!(display_progress(None), None);
}
