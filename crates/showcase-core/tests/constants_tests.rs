// Host-side tests pinning the timing constants the web frontend relies on
// for behavioral parity.

use showcase_core::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn timing_constants_match_the_page_contract() {
    assert_eq!(ADVANCE_COOLDOWN_MS, 700);
    assert_eq!(IMAGE_LOAD_FALLBACK_MS, 2000);
    assert_eq!(SWIPE_THRESHOLD_PX, 50.0);
    assert_eq!(WHEEL_NOISE_FLOOR, 10.0);
    assert_eq!(STEP_REVEAL_RATIO, 0.3);
    assert_eq!(AUTO_REVEAL_RATIO, 0.25);
    assert_eq!(PARALLAX_RANGE_PX, 16.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn central_band_fractions_straddle_the_middle() {
    assert!(BAND_TOP_FRACTION > 0.5);
    assert!(BAND_BOTTOM_FRACTION < 0.5);
    assert_eq!(BAND_TOP_FRACTION, 0.75);
    assert_eq!(BAND_BOTTOM_FRACTION, 0.25);
}
