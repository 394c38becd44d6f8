//! Event vocabulary and the per-tick event queue.
//!
//! Events are produced by:
//! - Input sources (debounced press / release edges), one tag pair per
//!   registered source
//! - Software (`Fsm::post`) for timer ticks and other synthetic inputs
//! - The engine itself (`NoEvent`) when an automatic transition fires
//!
//! ```text
//! ┌─────────────┐     ┌──────────────┐     ┌──────────────┐
//! │ Source 0    │────▶│              │     │              │
//! │ Source 1    │────▶│  EventQueue  │────▶│  Fsm::tick   │
//! │ ...         │────▶│  (FIFO)      │     │  (consumer)  │
//! │ Fsm::post   │────▶│              │     │              │
//! └─────────────┘     └──────────────┘     └──────────────┘
//! ```
//!
//! Within one tick the queue holds posted events first, then polled
//! events in source registration order.  It is drained completely
//! before the next poll.

use core::fmt;

use heapless::Deque;

/// Maximum number of pending events.
/// Power of 2; two per source is the worst case for a single tick.
pub const EVENT_QUEUE_CAP: usize = 32;

/// Index of a registered input source, assigned in registration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SourceId(pub u8);

impl SourceId {
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// The press tag for this source.
    pub const fn press(self) -> EventTag {
        EventTag::Press(self)
    }

    /// The release tag for this source.
    pub const fn release(self) -> EventTag {
        EventTag::Release(self)
    }
}

/// Closed event vocabulary.  Events carry no payload beyond the tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventTag {
    /// Source went from released to active.
    Press(SourceId),
    /// Source went from active to released.
    Release(SourceId),
    /// Automatic transition, evaluated right after a state is entered.
    NoEvent,
}

impl EventTag {
    /// The source this tag belongs to, if any.
    pub const fn source(self) -> Option<SourceId> {
        match self {
            Self::Press(id) | Self::Release(id) => Some(id),
            Self::NoEvent => None,
        }
    }
}

impl fmt::Display for EventTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Press(id) => write!(f, "SRC_{}_PRESS", id.0),
            Self::Release(id) => write!(f, "SRC_{}_RELEASE", id.0),
            Self::NoEvent => write!(f, "NO_EVENT"),
        }
    }
}

/// A confirmed (debounced) level change reported by an input source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edge {
    Pressed,
    Released,
}

impl Edge {
    /// Tag this edge with the source that produced it.
    pub const fn tag(self, source: SourceId) -> EventTag {
        match self {
            Self::Pressed => EventTag::Press(source),
            Self::Released => EventTag::Release(source),
        }
    }
}

// ── FIFO queue ────────────────────────────────────────────────

/// Fixed-capacity FIFO of pending events, owned by the engine.
#[derive(Default)]
pub struct EventQueue {
    buf: Deque<EventTag, EVENT_QUEUE_CAP>,
}

impl EventQueue {
    pub fn new() -> Self {
        Self { buf: Deque::new() }
    }

    /// Append an event.  Returns `false` if the queue is full (event dropped).
    pub fn push(&mut self, event: EventTag) -> bool {
        self.buf.push_back(event).is_ok()
    }

    /// Take the oldest event.
    pub fn pop(&mut self) -> Option<EventTag> {
        self.buf.pop_front()
    }

    pub fn clear(&mut self) {
        self.buf.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Number of pending events.
    pub fn len(&self) -> usize {
        self.buf.len()
    }
}
