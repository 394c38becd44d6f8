//! Port traits — the boundary between the engine and the outside world.
//!
//! ```text
//!   Fsm ──▶ StateHost (host controller) ──▶ ToneOutput / LightRing / StatusDisplay
//!    ▲
//!    └── Clock (time source for debouncing and tick pacing)
//! ```
//!
//! The engine only ever sees [`StateHost`] and [`Clock`].  The peripheral
//! ports are consumed by the sample host controller, never by the engine.

use crate::fsm::StateId;
use crate::events::EventTag;

// ───────────────────────────────────────────────────────────────
// Host controller port (engine → domain behaviour)
// ───────────────────────────────────────────────────────────────

/// Lifecycle callbacks the engine invokes on the host.
///
/// Called synchronously from the engine's tick, never concurrently.
/// Callbacks must not re-enter the engine.  A returned error ends the
/// tick and surfaces as a [`CallbackFailure`](crate::error::CallbackFailure);
/// a host that prefers to keep running should log and return `Ok`.
///
/// Long blocking work inside a callback (e.g. a multi-second LED
/// animation) stalls polling for its whole duration.
pub trait StateHost {
    /// `state` was just entered because of `event`.
    fn state_entered(&mut self, state: StateId, event: EventTag) -> anyhow::Result<()>;

    /// `state` is being left because of `event`.
    fn state_left(&mut self, state: StateId, event: EventTag) -> anyhow::Result<()>;

    /// Once per tick, for the state the tick ended in.
    fn state_do(&mut self, _state: StateId) -> anyhow::Result<()> {
        Ok(())
    }
}

// ───────────────────────────────────────────────────────────────
// Time port
// ───────────────────────────────────────────────────────────────

/// Monotonic millisecond clock.  Wraps at `u32::MAX`.
pub trait Clock {
    fn now_ms(&self) -> u32;
}

// ───────────────────────────────────────────────────────────────
// Peripheral ports (host → hardware)
// ───────────────────────────────────────────────────────────────

/// Square-wave tone generator (passive buzzer).
pub trait ToneOutput {
    fn play(&mut self, freq_hz: u32);
    fn stop(&mut self);
}

/// Ring animations.  Implementations may block while animating.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RingPattern {
    /// Whole ring flashes red three times.
    Flash,
    /// A single green pixel runs around the ring.
    Chase,
    /// Even then odd pixels light blue.
    Alternate,
    /// Whole ring steps through the rainbow.
    Rainbow,
}

pub trait LightRing {
    fn show(&mut self, pattern: RingPattern);
}

/// What the status display shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayFrame {
    pub title: &'static str,
    pub state: StateId,
    /// Name of the note being played, if any.
    pub note: Option<&'static str>,
}

/// Small text display.  May fail (e.g. I²C error).
pub trait StatusDisplay {
    fn render(&mut self, frame: &DisplayFrame) -> anyhow::Result<()>;
}
