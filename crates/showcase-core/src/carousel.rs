//! Circular index state for the slide carousel.
//!
//! The web frontend owns the DOM; this type owns the active index and the
//! mapping from slide ordinal to position slot. All arithmetic is modular,
//! so the index can never leave `[0, total)` by construction.

/// Active-index state over a fixed number of slides.
#[derive(Clone, Copy, Debug)]
pub struct Carousel {
    index: usize,
    total: usize,
}

impl Carousel {
    /// New carousel starting at slide 0. A zero- or one-slide carousel is
    /// legal and inert.
    pub fn new(total: usize) -> Self {
        Self { index: 0, total }
    }

    #[inline]
    pub fn index(&self) -> usize {
        self.index
    }

    #[inline]
    pub fn total(&self) -> usize {
        self.total
    }

    /// Jump to slide `i`, normalized into range. Accepts any signed value,
    /// so callers can pass `index + direction` without pre-wrapping.
    pub fn go_to(&mut self, i: isize) {
        if self.total == 0 {
            return;
        }
        let n = self.total as isize;
        self.index = i.rem_euclid(n) as usize;
    }

    /// Advance by `direction` (±1).
    pub fn step(&mut self, direction: i32) {
        self.go_to(self.index as isize + direction as isize);
    }

    /// Signed circular distance from the active slide to slide `i`,
    /// normalized into `(-N/2, N/2]` so the wrap-around neighbor takes the
    /// short path, then clamped to `[-2, 2]`. This is the slide's rendered
    /// position slot.
    pub fn slot(&self, i: usize) -> i32 {
        if self.total == 0 {
            return 0;
        }
        let n = self.total as i64;
        let mut delta = i as i64 - self.index as i64;
        // Compare 2*delta against N to avoid fractional N/2; the comparisons
        // are strict, so for even N a tie keeps the raw sign.
        if 2 * delta > n {
            delta -= n;
        } else if 2 * delta < -n {
            delta += n;
        }
        delta.clamp(-2, 2) as i32
    }
}
