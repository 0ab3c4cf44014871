//! Cooldown gates for rate-limited input channels.
//!
//! The gate itself is pure state; the web frontend schedules `reopen` with a
//! `setTimeout` after [`crate::ADVANCE_COOLDOWN_MS`]. While closed, requests
//! on the channel are dropped, never queued. The carousel and the step
//! reveal each own an independent gate.

/// One-shot-per-cooldown gate.
#[derive(Clone, Copy, Debug)]
pub struct Gate {
    open: bool,
}

impl Default for Gate {
    fn default() -> Self {
        Self::new()
    }
}

impl Gate {
    pub fn new() -> Self {
        Self { open: true }
    }

    #[inline]
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Claim the gate. Returns `true` and closes it iff it was open; the
    /// caller is then responsible for scheduling `reopen`.
    pub fn try_close(&mut self) -> bool {
        if !self.open {
            return false;
        }
        self.open = false;
        true
    }

    /// Reopen after the cooldown elapses.
    pub fn reopen(&mut self) {
        self.open = true;
    }
}
