//! Unit tests for the stream viewer state machine

use dronewatch_dashboard::components::video_feed::StreamViewState;

#[test]
fn test_initial_state_is_loading() {
    let state = StreamViewState::new();

    assert!(state.loading);
    assert!(!state.error);
    assert!(!state.fullscreen);
    assert_eq!(state.generation, 0);
}

#[test]
fn test_load_success_clears_flags() {
    let mut state = StreamViewState::new();
    state.on_loaded();

    assert!(!state.loading);
    assert!(!state.error);
}

#[test]
fn test_load_failure_sets_error() {
    let mut state = StreamViewState::new();
    state.on_error();

    assert!(!state.loading);
    assert!(state.error);
}

#[test]
fn test_retry_from_errored_forces_fresh_identity() {
    let mut state = StreamViewState::new();
    state.on_error();
    let failed_generation = state.generation;

    state.retry();

    assert!(state.loading);
    assert!(!state.error);
    assert_ne!(state.generation, failed_generation);
}

#[test]
fn test_retry_works_from_any_state() {
    let mut state = StreamViewState::new();
    state.on_loaded();
    let generation = state.generation;

    state.retry();

    assert!(state.loading);
    assert_eq!(state.generation, generation + 1);
}

#[test]
fn test_fullscreen_is_independent_of_load_state() {
    let mut state = StreamViewState::new();
    state.on_error();

    state.toggle_fullscreen();
    assert!(state.fullscreen);
    assert!(state.error);
    assert!(!state.loading);

    state.toggle_fullscreen();
    assert!(!state.fullscreen);
    assert!(state.error);
}
