//! Music controller — the sample host.
//!
//! Maps each state to a [`StateAction`] through a fixed lookup table;
//! the engine never learns what a state means.
//!
//! ```text
//!  state │ action
//!  ──────┼──────────────────────────────────
//!    0   │ rest
//!   1–8  │ play note 0–7, ring pattern
//!    9   │ switch instrument (pass-through)
//! ```
//!
//! The display is optional.  If it is missing or a render fails, it is
//! dropped and the controller keeps playing without it.

use log::{debug, info, warn};

use super::instruments::Instrument;
use super::ports::{DisplayFrame, LightRing, RingPattern, StateHost, StatusDisplay, ToneOutput};
use super::wiring::STATE_COUNT;
use crate::events::EventTag;
use crate::fsm::StateId;

/// Text on the first display line.
pub const DISPLAY_TITLE: &str = "Piano";

/// What entering a state does.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StateAction {
    Rest,
    Play { note: usize, pattern: RingPattern },
    SwitchInstrument,
}

const fn play(note: usize, pattern: RingPattern) -> StateAction {
    StateAction::Play { note, pattern }
}

const ACTIONS: [StateAction; STATE_COUNT] = [
    StateAction::Rest,
    play(0, RingPattern::Flash),
    play(1, RingPattern::Chase),
    play(2, RingPattern::Alternate),
    play(3, RingPattern::Rainbow),
    play(4, RingPattern::Flash),
    play(5, RingPattern::Chase),
    play(6, RingPattern::Alternate),
    play(7, RingPattern::Rainbow),
    StateAction::SwitchInstrument,
];

/// Action for `state`; unknown states rest.
pub fn action_for(state: StateId) -> StateAction {
    ACTIONS
        .get(state.index())
        .copied()
        .unwrap_or(StateAction::Rest)
}

pub struct MusicController<T, R, D> {
    tone: T,
    ring: R,
    display: Option<D>,
    instrument: Instrument,
}

impl<T: ToneOutput, R: LightRing, D: StatusDisplay> MusicController<T, R, D> {
    /// Pass `None` for `display` if it failed to initialise.
    pub fn new(tone: T, ring: R, display: Option<D>) -> Self {
        let mut controller = Self {
            tone,
            ring,
            display,
            instrument: Instrument::default(),
        };
        if controller.display.is_none() {
            warn!("controller: no display, running without one");
        }
        controller.refresh_display(StateId::INITIAL, None);
        controller
    }

    pub fn instrument(&self) -> Instrument {
        self.instrument
    }

    pub fn has_display(&self) -> bool {
        self.display.is_some()
    }

    pub fn tone(&self) -> &T {
        &self.tone
    }

    pub fn ring(&self) -> &R {
        &self.ring
    }

    pub fn display(&self) -> Option<&D> {
        self.display.as_ref()
    }

    fn refresh_display(&mut self, state: StateId, note: Option<&'static str>) {
        let Some(display) = self.display.as_mut() else {
            return;
        };
        let frame = DisplayFrame {
            title: DISPLAY_TITLE,
            state,
            note,
        };
        if let Err(e) = display.render(&frame) {
            warn!("controller: display failed ({e}), disabling it");
            self.display = None;
        }
    }
}

impl<T: ToneOutput, R: LightRing, D: StatusDisplay> StateHost for MusicController<T, R, D> {
    fn state_entered(&mut self, state: StateId, event: EventTag) -> anyhow::Result<()> {
        debug!("controller: entered {state} on {event}");

        let note = match action_for(state) {
            StateAction::Rest => None,
            StateAction::Play { note, pattern } => {
                let note = self.instrument.note(note);
                if let Some(n) = note {
                    self.tone.play(n.freq_hz);
                }
                self.ring.show(pattern);
                note.map(|n| n.name)
            }
            StateAction::SwitchInstrument => {
                self.instrument = self.instrument.next();
                info!("controller: instrument is now {}", self.instrument.name());
                None
            }
        };

        self.refresh_display(state, note);
        Ok(())
    }

    fn state_left(&mut self, state: StateId, event: EventTag) -> anyhow::Result<()> {
        debug!("controller: left {state} on {event}");
        if let StateAction::Play { .. } = action_for(state) {
            self.tone.stop();
        }
        Ok(())
    }
}
