//! Error types for the PicoChime engine.
//!
//! Three categories, matching where each one can surface:
//!
//! - [`ConfigError`] — wiring mistakes, returned synchronously from the
//!   configuration calls before the engine runs.
//! - [`InputError`] — an input source lost its pin.  Never propagated;
//!   the source is disabled and the engine keeps running.
//! - [`CallbackFailure`] — a host callback failed.  Ends the current
//!   tick and is returned from [`Fsm::tick`](crate::fsm::Fsm::tick) /
//!   [`Fsm::run`](crate::fsm::Fsm::run).
//!
//! An event with no matching transition is not an error at all.

use core::fmt;

use crate::events::EventTag;
use crate::fsm::StateId;

// ---------------------------------------------------------------------------
// Configuration errors
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// `(from, event)` already has a destination.
    DuplicateTransition { from: StateId, event: EventTag },
    /// A transition was registered with no trigger events.
    EmptyTriggerSet { from: StateId },
    /// A trigger names an input source that was never added.
    UnknownSource { from: StateId, event: EventTag },
    /// The automatic (`NoEvent`) edge `from -> to` would loop forever.
    AutomaticCycle { from: StateId, to: StateId },
    /// The transition table has no room for more edges.
    TableFull,
    /// The engine has no room for more input sources.
    TooManySources,
    /// Tick interval is zero or not shorter than the debounce window.
    InvalidTiming {
        tick_interval_ms: u32,
        debounce_ms: u32,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateTransition { from, event } => {
                write!(f, "duplicate transition for ({from}, {event})")
            }
            Self::EmptyTriggerSet { from } => {
                write!(f, "transition from {from} has no trigger events")
            }
            Self::UnknownSource { from, event } => {
                write!(f, "transition from {from} uses unregistered source in {event}")
            }
            Self::AutomaticCycle { from, to } => {
                write!(f, "automatic transition {from} -> {to} closes a cycle")
            }
            Self::TableFull => write!(f, "transition table full"),
            Self::TooManySources => write!(f, "too many input sources"),
            Self::InvalidTiming {
                tick_interval_ms,
                debounce_ms,
            } => write!(
                f,
                "tick interval {tick_interval_ms}ms must be non-zero and below debounce {debounce_ms}ms"
            ),
        }
    }
}

impl core::error::Error for ConfigError {}

// ---------------------------------------------------------------------------
// Input errors
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputError {
    /// The source's pin could not be read; it reports no events from now on.
    HardwareUnavailable { label: &'static str },
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::HardwareUnavailable { label } => {
                write!(f, "input '{label}' unavailable, source disabled")
            }
        }
    }
}

impl core::error::Error for InputError {}

// ---------------------------------------------------------------------------
// Callback failures
// ---------------------------------------------------------------------------

/// Which host callback failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hook {
    StateEntered,
    StateLeft,
    StateDo,
}

impl fmt::Display for Hook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::StateEntered => write!(f, "state_entered"),
            Self::StateLeft => write!(f, "state_left"),
            Self::StateDo => write!(f, "state_do"),
        }
    }
}

/// A host callback returned an error.  The engine does not retry.
#[derive(Debug)]
pub struct CallbackFailure {
    pub hook: Hook,
    pub state: StateId,
    source: anyhow::Error,
}

impl CallbackFailure {
    pub(crate) fn new(hook: Hook, state: StateId, source: anyhow::Error) -> Self {
        Self {
            hook,
            state,
            source,
        }
    }

    /// The error the host returned.
    pub fn cause(&self) -> &anyhow::Error {
        &self.source
    }
}

impl fmt::Display for CallbackFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} failed in state {}: {}", self.hook, self.state, self.source)
    }
}

impl core::error::Error for CallbackFailure {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        let cause: &(dyn core::error::Error + 'static) = &*self.source;
        Some(cause)
    }
}
