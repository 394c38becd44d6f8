//! Adapters — concrete implementations of the port traits.
//!
//! | Adapter    | Implements         | Connects to              |
//! |------------|--------------------|--------------------------|
//! | `log_sink` | ToneOutput         | Serial log output        |
//! |            | LightRing          |                          |
//! |            | StatusDisplay      |                          |
//! | `time`     | Clock, DelayNs     | ESP32 timer / host clock |

pub mod log_sink;
pub mod time;
