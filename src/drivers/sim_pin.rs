//! Host-side input pin.
//!
//! Implements [`embedded_hal::digital::InputPin`] over a shared cell so
//! the simulator and tests can drive button levels from outside the
//! engine.  A pin can also be made to fail, standing in for a GPIO that
//! cannot be read.

use std::cell::Cell;
use std::rc::Rc;

use embedded_hal::digital::{self, ErrorKind, ErrorType, InputPin};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimPinError;

impl digital::Error for SimPinError {
    fn kind(&self) -> ErrorKind {
        ErrorKind::Other
    }
}

#[derive(Debug, Clone, Copy)]
enum Raw {
    Level(bool),
    Failed,
}

/// Handle for changing a [`SimPin`]'s level after it has been moved into
/// a button.
#[derive(Debug, Clone)]
pub struct SimLevel(Rc<Cell<Raw>>);

impl SimLevel {
    pub fn set(&self, high: bool) {
        // A failed pin stays failed.
        if let Raw::Level(_) = self.0.get() {
            self.0.set(Raw::Level(high));
        }
    }

    /// Make every further read fail.
    pub fn fail(&self) {
        self.0.set(Raw::Failed);
    }
}

#[derive(Debug)]
pub struct SimPin {
    raw: Rc<Cell<Raw>>,
}

impl SimPin {
    pub fn new(high: bool) -> Self {
        Self {
            raw: Rc::new(Cell::new(Raw::Level(high))),
        }
    }

    /// A pin that can never be read.
    pub fn broken() -> Self {
        Self {
            raw: Rc::new(Cell::new(Raw::Failed)),
        }
    }

    pub fn level(&self) -> SimLevel {
        SimLevel(Rc::clone(&self.raw))
    }
}

impl ErrorType for SimPin {
    type Error = SimPinError;
}

impl InputPin for SimPin {
    fn is_high(&mut self) -> Result<bool, Self::Error> {
        match self.raw.get() {
            Raw::Level(high) => Ok(high),
            Raw::Failed => Err(SimPinError),
        }
    }

    fn is_low(&mut self) -> Result<bool, Self::Error> {
        self.is_high().map(|high| !high)
    }
}
