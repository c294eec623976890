use super::*;

fn processing(progress: i32) -> Result<JobStatus, FetchError> {
    Ok(JobStatus {
        status: JobState::Processing,
        progress: Some(progress),
        message: format!("Converting ... {progress}%"),
        ..JobStatus::default()
    })
}

fn completed() -> Result<JobStatus, FetchError> {
    Ok(JobStatus {
        status: JobState::Completed,
        message: "File processed successfully.".to_owned(),
        ..JobStatus::default()
    })
}

/// Drive the same tick cycle the poll loop runs: count the poll, apply
/// the result, stop when the effect says so.
fn run_session(state: &mut StatusBarState, results: Vec<Result<JobStatus, FetchError>>) -> Vec<TickEffect> {
    let mut effects = Vec::new();
    for result in results {
        state.tick();
        let effect = apply_tick_result(state, result);
        let stop = effect.outcome == TickOutcome::Stop;
        effects.push(effect);
        if stop {
            break;
        }
    }
    effects
}

// =============================================================
// Cadence
// =============================================================

#[test]
fn poll_interval_is_one_second() {
    assert_eq!(POLL_INTERVAL, Duration::from_secs(1));
}

#[test]
fn first_poll_happens_before_any_delay() {
    let mut state = StatusBarState::default();
    state.start("1");
    let effects = run_session(&mut state, vec![completed()]);
    assert_eq!(state.ticks, 1);
    assert!(effects.iter().all(|e| e.outcome == TickOutcome::Stop));
}

// =============================================================
// Happy path
// =============================================================

#[test]
fn processing_snapshot_copies_message_and_progress() {
    let mut state = StatusBarState::default();
    state.start("1");
    let effect = apply_tick_result(&mut state, processing(10));
    assert_eq!(effect.outcome, TickOutcome::Continue);
    assert_eq!(effect.modal, None);
    assert_eq!(state.progress, Some(10));
    assert_eq!(state.message, "Converting ... 10%");
    assert!(!state.finished);
}

#[test]
fn pending_snapshot_keeps_polling() {
    let mut state = StatusBarState::default();
    state.start("1");
    let effect = apply_tick_result(
        &mut state,
        Ok(JobStatus {
            status: JobState::Pending,
            ..JobStatus::default()
        }),
    );
    assert_eq!(effect.outcome, TickOutcome::Continue);
}

#[test]
fn two_processing_then_completed_ends_in_success_after_three_polls() {
    let mut state = StatusBarState::default();
    state.start("1");
    let effects = run_session(&mut state, vec![processing(10), processing(50), completed()]);

    assert_eq!(state.ticks, 3);
    assert!(state.finished);
    assert!(state.success);
    assert!(!state.failed);
    // Two non-terminal effects, each of which schedules one POLL_INTERVAL
    // delay before the next poll.
    let delays = effects
        .iter()
        .filter(|e| e.outcome == TickOutcome::Continue)
        .count();
    assert_eq!(delays, 2);
    assert!(effects.iter().all(|e| e.modal.is_none()));
}

// =============================================================
// Backend-reported failure
// =============================================================

#[test]
fn backend_failure_surfaces_exception_detail_in_modal() {
    let mut state = StatusBarState::default();
    state.start("1");
    let effect = apply_tick_result(
        &mut state,
        Ok(JobStatus {
            status: JobState::Failed,
            message: "Error".to_owned(),
            exception: Some("disk full".to_owned()),
            ..JobStatus::default()
        }),
    );
    assert_eq!(effect.outcome, TickOutcome::Stop);
    assert!(state.failed);
    assert!(!state.success);
    let modal = effect.modal.expect("failure must open a modal");
    assert!(modal.body.contains("disk full"));
    assert!(modal.closeable);
}

#[test]
fn backend_failure_without_exception_uses_message() {
    let mut state = StatusBarState::default();
    state.start("1");
    let effect = apply_tick_result(
        &mut state,
        Ok(JobStatus {
            status: JobState::Failed,
            message: "Error".to_owned(),
            exception: Some(String::new()),
            ..JobStatus::default()
        }),
    );
    assert_eq!(effect.modal.unwrap().body, "Error");
}

// =============================================================
// Fetch failures
// =============================================================

#[test]
fn connection_loss_opens_non_closeable_lost_connection_modal() {
    let mut state = StatusBarState::default();
    state.start("1");
    let effect = apply_tick_result(
        &mut state,
        Err(FetchError::Transport("TypeError: Failed to fetch".to_owned())),
    );
    assert_eq!(effect.outcome, TickOutcome::Stop);
    assert!(state.failed);
    let modal = effect.modal.expect("connection loss must open a modal");
    assert_eq!(modal.title, "Lost connection");
    assert!(!modal.closeable);
    assert!(modal.body.contains("Failed to fetch"));
}

#[test]
fn http_failure_opens_generic_closeable_modal_with_raw_text() {
    let mut state = StatusBarState::default();
    state.start("1");
    let effect = apply_tick_result(
        &mut state,
        Err(FetchError::Http {
            status: 500,
            message: "Internal Server Error (500): /api/status?status_id=1 (GET)".to_owned(),
        }),
    );
    let modal = effect.modal.unwrap();
    assert_eq!(modal.title, "Job Status Error");
    assert!(modal.closeable);
    assert!(modal.body.contains("Internal Server Error (500)"));
    assert!(state.failed);
}

#[test]
fn json_failure_is_terminal() {
    let mut state = StatusBarState::default();
    state.start("1");
    let effect = apply_tick_result(
        &mut state,
        Err(FetchError::Json("expected value at line 1".to_owned())),
    );
    assert_eq!(effect.outcome, TickOutcome::Stop);
    assert!(state.failed);
}

// =============================================================
// Invariants
// =============================================================

#[test]
fn finished_always_implies_exactly_one_outcome() {
    let sequences = vec![
        vec![processing(10), completed()],
        vec![
            processing(10),
            Ok(JobStatus {
                status: JobState::Failed,
                ..JobStatus::default()
            }),
        ],
        vec![Err(FetchError::Transport("offline".to_owned()))],
        vec![completed()],
    ];
    for results in sequences {
        let mut state = StatusBarState::default();
        state.start("1");
        run_session(&mut state, results);
        assert!(state.finished);
        assert!(state.success ^ state.failed);
    }
}
