//! Integration test driver for `tests/integration/` submodule.
//!
//! Each `mod` below maps to a file that exercises the engine with the
//! sample instrument wiring against mock peripherals.  All tests run on
//! the host with no real hardware required.

mod engine_tests;
mod instrument_tests;
mod mock_hw;
