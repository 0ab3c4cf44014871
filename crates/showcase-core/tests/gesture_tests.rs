// Host-side tests for wheel and swipe gesture classification.

use showcase_core::{swipe_direction, wheel_direction};

#[test]
fn wheel_ignores_noise_on_both_axes() {
    assert_eq!(wheel_direction(0.0, 0.0), None);
    assert_eq!(wheel_direction(9.9, -9.9), None);
    assert_eq!(wheel_direction(-5.0, 3.0), None);
}

#[test]
fn wheel_triggers_once_either_axis_clears_the_floor() {
    assert_eq!(wheel_direction(0.0, 10.0), Some(1));
    assert_eq!(wheel_direction(0.0, -10.0), Some(-1));
    assert_eq!(wheel_direction(12.0, 0.0), Some(1));
    assert_eq!(wheel_direction(-12.0, 0.0), Some(-1));
}

#[test]
fn wheel_dominant_axis_decides_the_sign() {
    // Vertical dominates
    assert_eq!(wheel_direction(15.0, -40.0), Some(-1));
    // Horizontal dominates
    assert_eq!(wheel_direction(-40.0, 15.0), Some(-1));
    assert_eq!(wheel_direction(40.0, -15.0), Some(1));
}

#[test]
fn swipe_threshold_is_strict() {
    // Exactly 50 does not trigger; 51 does.
    assert_eq!(swipe_direction(150.0, 100.0), None);
    assert_eq!(swipe_direction(151.0, 100.0), Some(1));
    assert_eq!(swipe_direction(100.0, 150.0), None);
    assert_eq!(swipe_direction(100.0, 151.0), Some(-1));
}

#[test]
fn swipe_sign_follows_drag_direction() {
    // Finger moved left => positive distance => forward.
    assert_eq!(swipe_direction(300.0, 100.0), Some(1));
    assert_eq!(swipe_direction(100.0, 300.0), Some(-1));
}

#[test]
fn tap_without_movement_is_ignored() {
    assert_eq!(swipe_direction(120.0, 120.0), None);
}
