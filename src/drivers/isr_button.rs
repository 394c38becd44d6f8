//! Interrupt-fed button.
//!
//! The GPIO ISR does the minimum: it records the raw level and a
//! timestamp into a per-button [`EdgeChannel`] via [`record_edge`]
//! (non-blocking, drops on overflow).  All debouncing happens in
//! [`IsrButton::poll`], on the tick thread, so the engine stays the only
//! writer of its state.
//!
//! ```text
//!   GPIO ISR ──record_edge()──▶ EdgeChannel ──poll()──▶ Debouncer ──▶ Edge
//!   (any edge)                  (critical-section)      (tick thread)
//! ```

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::Channel;

use super::InputSource;
use super::button::Polarity;
use super::debounce::{DEBOUNCE_MS, Debouncer};
use crate::events::Edge;

/// Raw edges buffered per button between two ticks.
pub const EDGE_CAPACITY: usize = 16;

/// A raw level sample captured in interrupt context.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawEdge {
    /// Pin level after the edge (`true` = high).
    pub high: bool,
    pub at_ms: u32,
}

/// Single-producer (ISR) / single-consumer (tick) raw edge buffer.
/// Declare one `static` per button.
pub type EdgeChannel = Channel<CriticalSectionRawMutex, RawEdge, EDGE_CAPACITY>;

/// ISR entry point.  Returns `false` if the channel was full.
pub fn record_edge(channel: &EdgeChannel, high: bool, at_ms: u32) -> bool {
    channel.try_send(RawEdge { high, at_ms }).is_ok()
}

pub struct IsrButton<'a> {
    channel: &'a EdgeChannel,
    label: &'static str,
    polarity: Polarity,
    debouncer: Debouncer,
    /// Last raw level seen, re-fed each tick so a quiet pin still settles.
    last_high: bool,
}

impl<'a> IsrButton<'a> {
    /// `idle_high` is the pin level at construction (before any edge).
    pub fn new(channel: &'a EdgeChannel, label: &'static str, idle_high: bool) -> Self {
        Self {
            channel,
            label,
            polarity: Polarity::default(),
            debouncer: Debouncer::new(DEBOUNCE_MS),
            last_high: idle_high,
        }
    }

    pub fn with_polarity(mut self, polarity: Polarity) -> Self {
        self.polarity = polarity;
        self
    }

    pub fn with_debounce_ms(mut self, window_ms: u32) -> Self {
        self.debouncer = Debouncer::new(window_ms);
        self
    }

    fn is_active(&self, high: bool) -> bool {
        high == (self.polarity == Polarity::ActiveHigh)
    }
}

impl InputSource for IsrButton<'_> {
    fn label(&self) -> &str {
        self.label
    }

    /// Replays buffered raw edges in arrival order.  Stops at the first
    /// confirmed edge and leaves the rest for the next tick.
    fn poll(&mut self, now_ms: u32) -> Option<Edge> {
        while let Ok(raw) = self.channel.try_receive() {
            self.last_high = raw.high;
            if let Some(edge) = self.debouncer.update(self.is_active(raw.high), raw.at_ms) {
                return Some(edge);
            }
        }
        self.debouncer.update(self.is_active(self.last_high), now_ms)
    }
}
