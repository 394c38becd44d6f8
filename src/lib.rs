//! PicoChime library.
//!
//! A hardware-agnostic, tick-driven finite state machine engine for
//! button-driven devices, plus the five-button instrument built on it.
//! ESP-IDF-specific code is limited to the clock adapter and the firmware
//! binary (feature `espidf`); everything else builds and tests on the host.

#![deny(unused_must_use)]

pub mod adapters;
pub mod app;
pub mod config;
pub mod drivers;
pub mod error;
pub mod events;
pub mod fsm;
#[cfg(test)]
mod log_capture;
pub mod pins;
