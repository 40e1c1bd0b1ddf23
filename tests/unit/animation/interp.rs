use super::*;

#[test]
fn clamps_outside_the_input_range() {
    let r = [10.0, 30.0];
    let o = [2.0, 7.0];
    for x in [-100.0, 0.0, 9.999] {
        assert_eq!(clamped_interpolate(x, r, o), 2.0);
    }
    for x in [30.001, 31.0, 1e9] {
        assert_eq!(clamped_interpolate(x, r, o), 7.0);
    }
    assert_eq!(clamped_interpolate(10.0, r, o), 2.0);
    assert_eq!(clamped_interpolate(30.0, r, o), 7.0);
    assert_eq!(clamped_interpolate(20.0, r, o), 4.5);
}

#[test]
fn endpoints_are_exact_for_inexact_outputs() {
    assert_eq!(clamped_interpolate(5.0, [0.0, 5.0], [0.1, 0.3]), 0.3);
    assert_eq!(clamped_interpolate(0.0, [0.0, 5.0], [0.1, 0.3]), 0.1);
}

#[test]
fn degenerate_range_is_a_step() {
    assert_eq!(clamped_interpolate(4.0, [5.0, 5.0], [0.0, 1.0]), 0.0);
    assert_eq!(clamped_interpolate(5.0, [5.0, 5.0], [0.0, 1.0]), 1.0);
    assert_eq!(clamped_interpolate(6.0, [5.0, 5.0], [0.0, 1.0]), 1.0);
}

#[test]
fn descending_range_clamps_in_range_direction() {
    assert_eq!(clamped_interpolate(20.0, [10.0, 0.0], [0.0, 1.0]), 0.0);
    assert_eq!(clamped_interpolate(5.0, [10.0, 0.0], [0.0, 1.0]), 0.5);
    assert_eq!(clamped_interpolate(-3.0, [10.0, 0.0], [0.0, 1.0]), 1.0);
}

#[test]
fn nan_input_does_not_propagate() {
    assert_eq!(clamped_interpolate(f64::NAN, [0.0, 1.0], [3.0, 4.0]), 3.0);
    assert_eq!(clamped_interpolate(f64::INFINITY, [0.0, 1.0], [3.0, 4.0]), 4.0);
}

#[test]
fn fade_in_halfway_is_exact() {
    assert_eq!(fade_in(FrameIndex(10), 0, 20), 0.5);
}

#[test]
fn fade_in_bounds_and_monotonic() {
    let delay = 12;
    let duration = 18;
    assert_eq!(fade_in(FrameIndex(0), delay, duration), 0.0);
    assert_eq!(fade_in(FrameIndex(delay), delay, duration), 0.0);
    assert_eq!(fade_in(FrameIndex(delay + duration), delay, duration), 1.0);
    assert_eq!(fade_in(FrameIndex(500), delay, duration), 1.0);

    let mut prev = 0.0;
    for f in delay..=delay + duration {
        let v = fade_in(FrameIndex(f), delay, duration);
        assert!(v >= prev);
        prev = v;
    }
}

#[test]
fn fade_in_with_zero_duration_is_complete_at_onset() {
    assert_eq!(fade_in(FrameIndex(3), 3, 0), 1.0);
    assert_eq!(fade_in(FrameIndex(0), 3, 0), 1.0);
}

#[test]
fn fade_out_runs_from_one_to_zero() {
    assert_eq!(fade_out(FrameIndex(0), 100, DEFAULT_FADE_FRAMES), 1.0);
    assert_eq!(fade_out(FrameIndex(100), 100, DEFAULT_FADE_FRAMES), 1.0);
    assert_eq!(fade_out(FrameIndex(110), 100, DEFAULT_FADE_FRAMES), 0.5);
    assert_eq!(fade_out(FrameIndex(120), 100, DEFAULT_FADE_FRAMES), 0.0);
    assert_eq!(fade_out(FrameIndex(400), 100, DEFAULT_FADE_FRAMES), 0.0);
}

#[test]
fn visibility_window_is_inclusive() {
    assert!(is_visible(FrameIndex(0), None, None));
    assert!(!is_visible(FrameIndex(9), Some(10), None));
    assert!(is_visible(FrameIndex(10), Some(10), Some(20)));
    assert!(is_visible(FrameIndex(20), Some(10), Some(20)));
    assert!(!is_visible(FrameIndex(21), Some(10), Some(20)));
}
