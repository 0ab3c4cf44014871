//! Auto-reveal latches and scroll-linked parallax math.

use crate::constants::PARALLAX_RANGE_PX;

/// Per-section reveal latch. Intersection callbacks can fire repeatedly;
/// the cards are revealed exactly once.
#[derive(Clone, Copy, Debug, Default)]
pub struct SectionReveal {
    revealed: bool,
}

impl SectionReveal {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    /// Returns `true` exactly once, on the first call.
    pub fn reveal_once(&mut self) -> bool {
        if self.revealed {
            return false;
        }
        self.revealed = true;
        true
    }
}

/// Whether any part of a section is inside the viewport.
#[inline]
pub fn intersects_viewport(top: f64, bottom: f64, viewport_h: f64) -> bool {
    top < viewport_h && bottom > 0.0
}

/// Vertical translation for a section's decorative layers, proportional to
/// how far the section top sits from the viewport center.
#[inline]
pub fn layer_offset(top: f64, viewport_h: f64) -> f64 {
    if viewport_h <= 0.0 {
        return 0.0;
    }
    (top - viewport_h / 2.0) / viewport_h * PARALLAX_RANGE_PX
}
