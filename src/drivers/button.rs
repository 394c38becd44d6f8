//! Polled, debounced push-button.
//!
//! ## Hardware
//!
//! Any pin implementing [`embedded_hal::digital::InputPin`].  Wiring is
//! either active-high (pull-down, pressed = high) or active-low
//! (pull-up, pressed = low); see [`Polarity`].
//!
//! ## Failure handling
//!
//! The pin is probed once at construction.  If it cannot be read, the
//! button logs a single warning, records [`InputError::HardwareUnavailable`]
//! and reports no events for the rest of its life.  A read failure later
//! on is treated the same way.  The engine keeps running with the
//! remaining sources either way.

use embedded_hal::digital::InputPin;
use log::warn;

use super::InputSource;
use super::debounce::{DEBOUNCE_MS, Debouncer};
use crate::error::InputError;
use crate::events::Edge;

/// Which raw level means "pressed".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Polarity {
    #[default]
    ActiveHigh,
    ActiveLow,
}

pub struct Button<P> {
    pin: P,
    label: &'static str,
    polarity: Polarity,
    debouncer: Debouncer,
    fault: Option<InputError>,
}

impl<P: InputPin> Button<P> {
    /// Bind a button to `pin`.  Active-high, default debounce window.
    pub fn new(mut pin: P, label: &'static str) -> Self {
        let fault = match pin.is_high() {
            Ok(_) => None,
            Err(e) => {
                let fault = InputError::HardwareUnavailable { label };
                warn!("{fault} ({e:?})");
                Some(fault)
            }
        };

        Self {
            pin,
            label,
            polarity: Polarity::default(),
            debouncer: Debouncer::new(DEBOUNCE_MS),
            fault,
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

    /// Set if the pin could not be read.
    pub fn fault(&self) -> Option<InputError> {
        self.fault
    }

    /// Debounced level (`true` = pressed).
    pub fn is_pressed(&self) -> bool {
        self.debouncer.is_active()
    }

    /// Give the pin back (e.g. to reconfigure it).
    pub fn release(self) -> P {
        self.pin
    }

    fn read_active(&mut self) -> Option<bool> {
        match self.pin.is_high() {
            Ok(high) => Some(high == (self.polarity == Polarity::ActiveHigh)),
            Err(e) => {
                let fault = InputError::HardwareUnavailable { label: self.label };
                warn!("{fault} ({e:?})");
                self.fault = Some(fault);
                None
            }
        }
    }
}

impl<P: InputPin> InputSource for Button<P> {
    fn label(&self) -> &str {
        self.label
    }

    fn poll(&mut self, now_ms: u32) -> Option<Edge> {
        if self.fault.is_some() {
            return None;
        }
        let active = self.read_active()?;
        self.debouncer.update(active, now_ms)
    }

    fn is_available(&self) -> bool {
        self.fault.is_none()
    }
}
