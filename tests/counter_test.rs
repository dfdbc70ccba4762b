//! Unit tests for the counter interpolation math

use dronewatch_dashboard::components::stat_card::{counter_step, ANIMATION_STEPS};

#[test]
fn test_final_step_lands_exactly_on_target() {
    assert_eq!(counter_step(5, 25, ANIMATION_STEPS, ANIMATION_STEPS), 25);
    // Awkward deltas that round badly mid-flight still snap at the end.
    assert_eq!(counter_step(0, 7, ANIMATION_STEPS, ANIMATION_STEPS), 7);
    assert_eq!(counter_step(13, 40, ANIMATION_STEPS, ANIMATION_STEPS), 40);
}

#[test]
fn test_steps_past_the_end_stay_on_target() {
    assert_eq!(
        counter_step(5, 25, ANIMATION_STEPS + 3, ANIMATION_STEPS),
        25
    );
}

#[test]
fn test_intermediate_steps_are_rounded_interpolations() {
    // Halfway from 5 to 25 is exactly 15.
    assert_eq!(counter_step(5, 25, 10, 20), 15);
    // 1/20 of the way from 0 to 7 is 0.35, rounding to 0.
    assert_eq!(counter_step(0, 7, 1, 20), 0);
    // 10/20 of the way from 0 to 7 is 3.5, rounding to 4.
    assert_eq!(counter_step(0, 7, 10, 20), 4);
}

#[test]
fn test_unchanged_target_never_moves() {
    for step in 0..=ANIMATION_STEPS {
        assert_eq!(counter_step(12, 12, step, ANIMATION_STEPS), 12);
    }
}

#[test]
fn test_descending_interpolation() {
    assert_eq!(counter_step(25, 5, 10, 20), 15);
    assert_eq!(counter_step(25, 5, 20, 20), 5);
}

#[test]
fn test_ascending_sequence_is_monotonic() {
    let mut previous = 5;
    for step in 1..=ANIMATION_STEPS {
        let value = counter_step(5, 25, step, ANIMATION_STEPS);
        assert!(value >= previous, "step {} regressed: {} < {}", step, value, previous);
        previous = value;
    }
    assert_eq!(previous, 25);
}

#[test]
fn test_restart_interpolates_from_displayed_value() {
    // A retarget mid-animation resumes from the on-screen value, not the
    // original starting point.
    let displayed = counter_step(0, 20, 10, 20);
    assert_eq!(displayed, 10);

    let first_after_retarget = counter_step(displayed, 50, 1, 20);
    assert_eq!(first_after_retarget, 12);
    assert_eq!(counter_step(displayed, 50, 20, 20), 50);
}
