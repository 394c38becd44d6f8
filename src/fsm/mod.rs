//! Event-driven finite state machine engine.
//!
//! ```text
//! ┌─────────────┐   ┌────────────┐   ┌───────────────────┐   ┌────────────┐
//! │ InputSource │──▶│ EventQueue │──▶│ TransitionTable   │──▶│ StateHost  │
//! │ (debounced) │   │ (FIFO)     │   │ (from,event)->to  │   │ callbacks  │
//! └─────────────┘   └────────────┘   └───────────────────┘   └────────────┘
//! ```
//!
//! Each tick the engine:
//!
//! 1. Polls every source in registration order and queues the
//!    resulting press / release events.
//! 2. Drains the queue in order.  For each event with a matching edge it
//!    calls `state_left(current)`, moves, then `state_entered(next)`,
//!    and follows any automatic (`NoEvent`) edge out of the new state.
//!    Events without a match are dropped.  Later events see the state
//!    produced by earlier ones.
//! 3. Calls `state_do(current)` once.
//!
//! A self-loop is a real transition and fires both callbacks.
//!
//! The engine owns `current` and is its only writer.  It performs no
//! I/O itself; all runtime failures come from host callbacks and are
//! returned, not swallowed.

pub mod table;

use core::convert::Infallible;
use core::fmt;

use embedded_hal::delay::DelayNs;
use log::{info, trace, warn};

use crate::app::ports::{Clock, StateHost};
use crate::config::EngineConfig;
use crate::drivers::InputSource;
use crate::error::{CallbackFailure, ConfigError, Hook};
use crate::events::{EventQueue, EventTag, SourceId};
use table::{Transition, TransitionTable};

/// Maximum number of input sources per engine.
pub const MAX_SOURCES: usize = 16;

// ---------------------------------------------------------------------------
// State identity
// ---------------------------------------------------------------------------

/// A state is just its number.  State 0 is where every engine starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StateId(pub u8);

impl StateId {
    pub const INITIAL: Self = Self(0);

    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for StateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ---------------------------------------------------------------------------
// FSM engine
// ---------------------------------------------------------------------------

/// The engine.  One per device; the host is injected at construction.
///
/// `'a` bounds the registered input sources, so an application can lend
/// sources it owns (`&mut button`) instead of handing them over.
pub struct Fsm<'a, H> {
    host: H,
    table: TransitionTable,
    sources: Vec<Box<dyn InputSource + 'a>>,
    queue: EventQueue,
    current: StateId,
    debug: bool,
    tick_interval_ms: u32,
    /// Monotonically increasing tick counter (wraps at u64::MAX).
    tick_count: u64,
    started: bool,
}

impl<'a, H: StateHost> Fsm<'a, H> {
    /// New engine in state 0 with an empty table and no sources.
    pub fn new(host: H, config: &EngineConfig) -> Self {
        Self {
            host,
            table: TransitionTable::new(),
            sources: Vec::new(),
            queue: EventQueue::new(),
            current: StateId::INITIAL,
            debug: config.debug,
            tick_interval_ms: config.tick_interval_ms,
            tick_count: 0,
            started: false,
        }
    }

    // ── Configuration ─────────────────────────────────────────

    /// Register an input source.  Registration order fixes the order in
    /// which same-tick events are processed.
    pub fn add_button(&mut self, source: impl InputSource + 'a) -> Result<SourceId, ConfigError> {
        if self.sources.len() >= MAX_SOURCES {
            return Err(ConfigError::TooManySources);
        }
        let id = SourceId(self.sources.len() as u8);
        info!("FSM: source {} = '{}'", id.0, source.label());
        self.sources.push(Box::new(source));
        Ok(id)
    }

    /// Register `from --event--> to` for each event in `events`.
    ///
    /// Fails without changing the table if any `(from, event)` pair is
    /// already registered, if an event names an unregistered source, or
    /// if an automatic edge would loop.
    pub fn add_transition(
        &mut self,
        from: StateId,
        events: &[EventTag],
        to: StateId,
    ) -> Result<(), ConfigError> {
        if let Some(&event) = events
            .iter()
            .find(|e| e.source().is_some_and(|id| id.index() >= self.sources.len()))
        {
            return Err(ConfigError::UnknownSource { from, event });
        }
        self.table.add(from, events, to)
    }

    // ── Runtime ───────────────────────────────────────────────

    /// Queue a software event for the next tick, ahead of that tick's
    /// polled events.  Returns `false` if the queue is full.
    pub fn post(&mut self, event: EventTag) -> bool {
        let queued = self.queue.push(event);
        if !queued {
            warn!("FSM: event queue full, dropped {event}");
        }
        queued
    }

    /// Enter operation: follow any automatic edge out of state 0.
    /// Runs once; `tick` calls it if the caller did not.
    pub fn start(&mut self) -> Result<(), CallbackFailure> {
        if self.started {
            return Ok(());
        }
        self.started = true;
        info!(
            "FSM starting in state {} ({} sources, {} edges)",
            self.current,
            self.sources.len(),
            self.table.len()
        );
        self.follow_automatic()
    }

    /// Advance the engine by one tick at time `now_ms`.
    pub fn tick(&mut self, now_ms: u32) -> Result<(), CallbackFailure> {
        self.start()?;
        self.tick_count = self.tick_count.wrapping_add(1);

        self.poll_sources(now_ms);

        while let Some(event) = self.queue.pop() {
            if let Err(e) = self.dispatch(event) {
                self.queue.clear();
                return Err(e);
            }
        }

        let state = self.current;
        self.host
            .state_do(state)
            .map_err(|e| CallbackFailure::new(Hook::StateDo, state, e))
    }

    /// Tick forever at the configured interval.  Only returns if a host
    /// callback fails.
    pub fn run(
        &mut self,
        clock: &impl Clock,
        delay: &mut impl DelayNs,
    ) -> Result<Infallible, CallbackFailure> {
        self.start()?;
        loop {
            let started = clock.now_ms();
            self.tick(started)?;
            let spent = clock.now_ms().wrapping_sub(started);
            delay.delay_ms(self.tick_interval_ms.saturating_sub(spent));
        }
    }

    // ── Accessors ─────────────────────────────────────────────

    pub fn current_state(&self) -> StateId {
        self.current
    }

    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn into_host(self) -> H {
        self.host
    }

    pub fn source_label(&self, id: SourceId) -> Option<&str> {
        self.sources.get(id.index()).map(|s| s.label())
    }

    /// Registered edges in registration order.
    pub fn transitions(&self) -> impl Iterator<Item = &Transition> {
        self.table.iter()
    }

    pub fn pending_events(&self) -> usize {
        self.queue.len()
    }

    // ── Internal ──────────────────────────────────────────────

    fn poll_sources(&mut self, now_ms: u32) {
        for (i, source) in self.sources.iter_mut().enumerate() {
            if let Some(edge) = source.poll(now_ms) {
                let event = edge.tag(SourceId(i as u8));
                trace!("FSM: '{}' -> {event}", source.label());
                if !self.queue.push(event) {
                    warn!("FSM: event queue full, dropped {event}");
                }
            }
        }
    }

    fn dispatch(&mut self, event: EventTag) -> Result<(), CallbackFailure> {
        let Some(to) = self.table.lookup(self.current, event) else {
            trace!("FSM: {event} ignored in state {}", self.current);
            return Ok(());
        };
        self.transition(to, event)?;
        self.follow_automatic()
    }

    /// Chains terminate: the table refuses automatic cycles.
    fn follow_automatic(&mut self) -> Result<(), CallbackFailure> {
        while let Some(to) = self.table.lookup(self.current, EventTag::NoEvent) {
            self.transition(to, EventTag::NoEvent)?;
        }
        Ok(())
    }

    fn transition(&mut self, to: StateId, event: EventTag) -> Result<(), CallbackFailure> {
        let from = self.current;

        self.log_lifecycle("state_left", from);
        self.host
            .state_left(from, event)
            .map_err(|e| CallbackFailure::new(Hook::StateLeft, from, e))?;

        self.current = to;

        self.log_lifecycle("state_entered", to);
        self.host
            .state_entered(to, event)
            .map_err(|e| CallbackFailure::new(Hook::StateEntered, to, e))
    }

    fn log_lifecycle(&self, hook: &str, state: StateId) {
        if self.debug {
            info!("{hook}: state={state}");
        } else {
            trace!("{hook}: state={state}");
        }
    }
}
