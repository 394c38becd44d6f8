//! Application layer: the host controller port and the sample instrument
//! built on top of the engine.
//!
//! All interaction with hardware happens through **port traits** defined
//! in [`ports`], keeping this layer testable without real peripherals.

pub mod controller;
pub mod instruments;
pub mod ports;
pub mod wiring;
