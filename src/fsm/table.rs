//! Transition table: a deterministic map `(from, event) -> to`.
//!
//! Stored as a flat, fixed-capacity list of edges — one edge per trigger
//! event — and searched linearly.  State graphs here are tens of edges,
//! so a scan beats any hashing scheme on a microcontroller.
//!
//! ```text
//!  from  event          to
//!  ────  ─────────────  ──
//!   0    SRC_0_PRESS    1
//!   1    SRC_0_RELEASE  0
//!   0    SRC_4_PRESS    9
//!   9    NO_EVENT       0
//! ```

use heapless::Vec;

use super::StateId;
use crate::error::ConfigError;
use crate::events::EventTag;

/// Maximum number of `(from, event)` edges.
pub const MAX_EDGES: usize = 128;

/// One resolved edge of the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub from: StateId,
    pub event: EventTag,
    pub to: StateId,
}

#[derive(Default)]
pub struct TransitionTable {
    edges: Vec<Transition, MAX_EDGES>,
}

impl TransitionTable {
    pub fn new() -> Self {
        Self { edges: Vec::new() }
    }

    /// Register `from --event--> to` for every event in `events`.
    ///
    /// Atomic: either every edge is stored or none is.  A pair that is
    /// already registered (or repeated inside `events`) is rejected and
    /// the earlier registration stays in force.
    pub fn add(
        &mut self,
        from: StateId,
        events: &[EventTag],
        to: StateId,
    ) -> Result<(), ConfigError> {
        if events.is_empty() {
            return Err(ConfigError::EmptyTriggerSet { from });
        }

        for (i, &event) in events.iter().enumerate() {
            if self.lookup(from, event).is_some() || events[..i].contains(&event) {
                return Err(ConfigError::DuplicateTransition { from, event });
            }
            if event == EventTag::NoEvent && self.closes_automatic_cycle(from, to) {
                return Err(ConfigError::AutomaticCycle { from, to });
            }
        }

        if self.edges.len() + events.len() > MAX_EDGES {
            return Err(ConfigError::TableFull);
        }

        for &event in events {
            // Capacity checked above.
            let _ = self.edges.push(Transition { from, event, to });
        }
        Ok(())
    }

    /// Destination for `(from, event)`, or `None` if the event is irrelevant
    /// to `from`.
    pub fn lookup(&self, from: StateId, event: EventTag) -> Option<StateId> {
        self.edges
            .iter()
            .find(|t| t.from == from && t.event == event)
            .map(|t| t.to)
    }

    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Edges in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &Transition> {
        self.edges.iter()
    }

    /// Would adding the automatic edge `from -> to` create a loop of
    /// `NoEvent` transitions?  Existing automatic edges form chains (each
    /// state has at most one), so following the chain from `to` either
    /// ends or reaches `from`.
    fn closes_automatic_cycle(&self, from: StateId, to: StateId) -> bool {
        let mut cursor = to;
        for _ in 0..=self.edges.len() {
            if cursor == from {
                return true;
            }
            match self.lookup(cursor, EventTag::NoEvent) {
                Some(next) => cursor = next,
                None => return false,
            }
        }
        true
    }
}
