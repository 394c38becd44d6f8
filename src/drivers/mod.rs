//! Input sources: debouncing, polled and interrupt-fed buttons, host pins.

pub mod button;
pub mod debounce;
pub mod isr_button;
pub mod sim_pin;

use log::warn;

use crate::error::InputError;
use crate::events::Edge;

/// A debounced digital input that the engine polls once per tick.
///
/// Implementations must be non-blocking: debounce state lives in the
/// source and is advanced by `poll`, never by sleeping.
pub trait InputSource {
    /// Human-readable name, used only for logging.
    fn label(&self) -> &str;

    /// Advance the debouncer to `now_ms` and report at most one
    /// confirmed edge.
    fn poll(&mut self, now_ms: u32) -> Option<Edge>;

    /// `false` once the underlying hardware has failed.
    fn is_available(&self) -> bool {
        true
    }
}

/// Lend a source to the engine while the application keeps ownership.
impl<T: InputSource + ?Sized> InputSource for &mut T {
    fn label(&self) -> &str {
        (**self).label()
    }

    fn poll(&mut self, now_ms: u32) -> Option<Edge> {
        (**self).poll(now_ms)
    }

    fn is_available(&self) -> bool {
        (**self).is_available()
    }
}

/// Placeholder for a source whose hardware could not be set up at all.
///
/// Keeps the source's slot (and therefore every later [`SourceId`](crate::events::SourceId))
/// stable while never producing events.
pub struct Unavailable {
    label: &'static str,
}

impl Unavailable {
    pub fn new(label: &'static str) -> Self {
        warn!("{}", InputError::HardwareUnavailable { label });
        Self { label }
    }
}

impl InputSource for Unavailable {
    fn label(&self) -> &str {
        self.label
    }

    fn poll(&mut self, _now_ms: u32) -> Option<Edge> {
        None
    }

    fn is_available(&self) -> bool {
        false
    }
}
