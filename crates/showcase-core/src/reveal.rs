//! Monotonic reveal cursor for the step-by-step section.
//!
//! The cursor starts unbegun (the observer latch has not fired yet), moves
//! to card 0 exactly once, and then only ever advances. Revealing is
//! permanent; there is no reverse operation.

use crate::constants::{BAND_BOTTOM_FRACTION, BAND_TOP_FRACTION};

#[derive(Clone, Copy, Debug)]
pub struct StepReveal {
    current: Option<usize>,
    total: usize,
}

impl StepReveal {
    pub fn new(total: usize) -> Self {
        Self {
            current: None,
            total,
        }
    }

    /// Index of the most recently revealed card, if any.
    #[inline]
    pub fn current(&self) -> Option<usize> {
        self.current
    }

    /// One-shot latch fired by the first qualifying intersection event.
    /// Returns `Some(0)` the first time (when any cards exist) and `None`
    /// ever after.
    pub fn begin(&mut self) -> Option<usize> {
        if self.current.is_some() || self.total == 0 {
            return None;
        }
        self.current = Some(0);
        self.current
    }

    /// Reveal the next card, returning its index, or `None` when the
    /// sequence has not begun or every card is already revealed. Callers
    /// engage their cooldown only on `Some`.
    pub fn advance(&mut self) -> Option<usize> {
        let cur = self.current?;
        let next = cur + 1;
        if next >= self.total {
            return None;
        }
        self.current = Some(next);
        log::debug!("step reveal advanced to card {}", next);
        self.current
    }
}

/// Whether a section straddles the central band of the viewport: its top
/// above 75% of the viewport height and its bottom below 25% from the top.
#[inline]
pub fn in_central_band(top: f64, bottom: f64, viewport_h: f64) -> bool {
    top < viewport_h * BAND_TOP_FRACTION && bottom > viewport_h * BAND_BOTTOM_FRACTION
}
