//! Time-window debouncer.
//!
//! A raw level must hold for `window_ms` before it becomes the stable
//! level.  Any change inside the window restarts the wait, so contact
//! bounce never reaches the engine.  Stable-level flips are the only
//! thing reported, which means `Pressed` and `Released` strictly
//! alternate.
//!
//! Timestamps are `u32` milliseconds since boot; differences use
//! wrapping arithmetic so the ~49-day rollover is harmless.

use crate::events::Edge;

/// Default debounce window, milliseconds.
pub const DEBOUNCE_MS: u32 = 50;

#[derive(Debug, Clone, Copy)]
pub struct Debouncer {
    /// Confirmed level (`true` = active).
    stable: bool,
    /// Most recent raw level.
    candidate: bool,
    /// When `candidate` was first seen.
    since_ms: u32,
    window_ms: u32,
}

impl Debouncer {
    /// Starts released.
    pub const fn new(window_ms: u32) -> Self {
        Self {
            stable: false,
            candidate: false,
            since_ms: 0,
            window_ms,
        }
    }

    pub fn window_ms(&self) -> u32 {
        self.window_ms
    }

    /// Current confirmed level.
    pub fn is_active(&self) -> bool {
        self.stable
    }

    /// Feed one raw sample taken at `now_ms`.
    ///
    /// Returns at most one confirmed edge.  A pending level that already
    /// held for the full window is confirmed before a new raw level
    /// replaces it, so late samples (e.g. drained from an ISR queue) do
    /// not swallow real presses.
    pub fn update(&mut self, active: bool, now_ms: u32) -> Option<Edge> {
        let confirmed = self.confirm(now_ms);

        if active != self.candidate {
            self.candidate = active;
            self.since_ms = now_ms;
        }

        confirmed.or_else(|| self.confirm(now_ms))
    }

    /// A `now_ms` earlier than `since_ms` (an ISR timestamp taken after
    /// the tick read the clock) counts as no time elapsed.
    fn confirm(&mut self, now_ms: u32) -> Option<Edge> {
        if self.candidate == self.stable || self.elapsed_ms(now_ms) < self.window_ms {
            return None;
        }
        self.stable = self.candidate;
        Some(if self.stable {
            Edge::Pressed
        } else {
            Edge::Released
        })
    }

    /// Wrapping-aware age of the pending level, clamped at zero.
    fn elapsed_ms(&self, now_ms: u32) -> u32 {
        let delta = now_ms.wrapping_sub(self.since_ms);
        if delta > u32::MAX / 2 { 0 } else { delta }
    }
}

impl Default for Debouncer {
    fn default() -> Self {
        Self::new(DEBOUNCE_MS)
    }
}
