// Host-side tests for the step-reveal cursor and the central viewport band.

use showcase_core::{in_central_band, StepReveal};

#[test]
fn begin_latches_exactly_once() {
    let mut s = StepReveal::new(4);
    assert_eq!(s.begin(), Some(0));
    assert_eq!(s.begin(), None);
    assert_eq!(s.begin(), None);
    assert_eq!(s.current(), Some(0));
}

#[test]
fn advance_before_begin_is_a_noop() {
    let mut s = StepReveal::new(4);
    assert_eq!(s.advance(), None);
    assert_eq!(s.current(), None);
}

#[test]
fn cursor_never_decreases_and_caps_at_last_card() {
    let mut s = StepReveal::new(3);
    s.begin();
    assert_eq!(s.advance(), Some(1));
    assert_eq!(s.advance(), Some(2));
    // All cards revealed: further qualifying gestures are no-ops.
    assert_eq!(s.advance(), None);
    assert_eq!(s.advance(), None);
    assert_eq!(s.current(), Some(2));
}

#[test]
fn empty_section_never_begins() {
    let mut s = StepReveal::new(0);
    assert_eq!(s.begin(), None);
    assert_eq!(s.advance(), None);
}

#[test]
fn single_card_section_reveals_only_card_zero() {
    let mut s = StepReveal::new(1);
    assert_eq!(s.begin(), Some(0));
    assert_eq!(s.advance(), None);
}

#[test]
fn central_band_requires_straddling_the_middle() {
    let vh = 1000.0;
    // Section spanning the whole viewport straddles the band.
    assert!(in_central_band(-200.0, 1200.0, vh));
    // Section top below 75% of the viewport: not yet in the band.
    assert!(!in_central_band(800.0, 1800.0, vh));
    // Section bottom above 25% of the viewport: already past the band.
    assert!(!in_central_band(-900.0, 200.0, vh));
    // Comfortably straddling the center.
    assert!(in_central_band(300.0, 700.0, vh));
}

#[test]
fn central_band_boundaries_are_exclusive() {
    let vh = 1000.0;
    assert!(!in_central_band(750.0, 1200.0, vh));
    assert!(!in_central_band(-200.0, 250.0, vh));
    assert!(in_central_band(749.9, 1200.0, vh));
    assert!(in_central_band(-200.0, 250.1, vh));
}
