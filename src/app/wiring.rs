//! State graph of the five-button instrument.
//!
//! Buttons must be registered in this order so their [`SourceId`]s line
//! up with the event constants below: white, red, yellow, blue, grey.
//!
//! ```text
//!   0 ──BTN1↓──▶ 1 ──BTN4↓──▶ 5 ──BTN4↓──▶ 8
//!   0 ──BTN2↓──▶ 2 ──BTN4↓──▶ 5
//!   0 ──BTN3↓──▶ 3 ──BTN4↓──▶ 6
//!   0 ──BTN4↓──▶ 4 ──BTN4↓──▶ 7
//!   0 ──BTN5↓──▶ 9 ──(auto)──▶ 0          (switch instrument)
//!   every ↓ edge is undone by the matching ↑ edge
//! ```
//!
//! The blue button is the "shift" key: holding a note button and pressing
//! blue moves up to the second octave of notes.

use log::info;

use crate::app::ports::StateHost;
use crate::error::ConfigError;
use crate::events::{EventTag, SourceId};
use crate::fsm::{Fsm, StateId};

pub const WHITE: SourceId = SourceId(0);
pub const RED: SourceId = SourceId(1);
pub const YELLOW: SourceId = SourceId(2);
pub const BLUE: SourceId = SourceId(3);
pub const GREY: SourceId = SourceId(4);

/// Labels in registration order.
pub const BUTTON_LABELS: [&str; 5] = ["white", "red", "yellow", "blue", "grey"];

pub const BTN1_PRESS: EventTag = WHITE.press();
pub const BTN1_RELEASE: EventTag = WHITE.release();
pub const BTN2_PRESS: EventTag = RED.press();
pub const BTN2_RELEASE: EventTag = RED.release();
pub const BTN3_PRESS: EventTag = YELLOW.press();
pub const BTN3_RELEASE: EventTag = YELLOW.release();
pub const BTN4_PRESS: EventTag = BLUE.press();
pub const BTN4_RELEASE: EventTag = BLUE.release();
pub const BTN5_PRESS: EventTag = GREY.press();
pub const NO_EVENT: EventTag = EventTag::NoEvent;

/// States 0–9.
pub const STATE_COUNT: usize = 10;

/// The pass-through state that switches instruments.
pub const SWITCH_INSTRUMENT: StateId = StateId(9);

/// `(from, trigger, to)` in registration order.
///
/// State 5 can be reached from both 1 and 2, but `(5, BTN4_RELEASE)` can
/// only lead one place; releasing blue from 5 returns to 1.
pub const TRANSITIONS: [(u8, EventTag, u8); 19] = [
    (0, BTN1_PRESS, 1),
    (1, BTN1_RELEASE, 0),
    (0, BTN2_PRESS, 2),
    (2, BTN2_RELEASE, 0),
    (0, BTN3_PRESS, 3),
    (3, BTN3_RELEASE, 0),
    (0, BTN4_PRESS, 4),
    (4, BTN4_RELEASE, 0),
    (1, BTN4_PRESS, 5),
    (5, BTN4_RELEASE, 1),
    (2, BTN4_PRESS, 5),
    (0, BTN5_PRESS, 9),
    (9, NO_EVENT, 0),
    (3, BTN4_PRESS, 6),
    (6, BTN4_RELEASE, 3),
    (4, BTN4_PRESS, 7),
    (7, BTN4_RELEASE, 4),
    (5, BTN4_PRESS, 8),
    (8, BTN4_RELEASE, 5),
];

/// Register [`TRANSITIONS`].  The five buttons must already be added.
pub fn add_transitions<H: StateHost>(fsm: &mut Fsm<'_, H>) -> Result<(), ConfigError> {
    for (from, event, to) in TRANSITIONS {
        fsm.add_transition(StateId(from), &[event], StateId(to))?;
    }
    info!("wiring: {} transitions registered", TRANSITIONS.len());
    Ok(())
}
