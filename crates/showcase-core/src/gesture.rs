//! Pure gesture classification for the carousel input adapters.

use crate::constants::{SWIPE_THRESHOLD_PX, WHEEL_NOISE_FLOOR};

/// Direction of a wheel gesture, or `None` when both axes sit under the
/// noise floor. The axis with the larger magnitude decides the sign.
#[inline]
pub fn wheel_direction(delta_x: f64, delta_y: f64) -> Option<i32> {
    if delta_x.abs() < WHEEL_NOISE_FLOOR && delta_y.abs() < WHEEL_NOISE_FLOOR {
        return None;
    }
    let dominant = if delta_y.abs() >= delta_x.abs() {
        delta_y
    } else {
        delta_x
    };
    Some(if dominant > 0.0 { 1 } else { -1 })
}

/// Direction of a swipe or drag gesture from its start and end X positions.
/// Positive distance (finger moved left) advances forward. The threshold is
/// strict: a distance of exactly 50 does not trigger.
#[inline]
pub fn swipe_direction(start_x: f64, end_x: f64) -> Option<i32> {
    let distance = start_x - end_x;
    if distance.abs() <= SWIPE_THRESHOLD_PX {
        return None;
    }
    Some(if distance > 0.0 { 1 } else { -1 })
}
