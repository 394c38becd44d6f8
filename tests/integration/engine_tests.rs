//! Engine-level integration: interrupt-fed buttons, the blocking run
//! loop and error propagation out of host callbacks.

use std::cell::Cell;
use std::rc::Rc;

use anyhow::bail;
use embedded_hal::delay::DelayNs;
use picochime::app::ports::{Clock, StateHost};
use picochime::config::EngineConfig;
use picochime::drivers::isr_button::{EdgeChannel, IsrButton, record_edge};
use picochime::error::Hook;
use picochime::events::EventTag;
use picochime::fsm::{Fsm, StateId};

/// Virtual clock shared between `Clock` and `DelayNs`.
#[derive(Clone, Default)]
struct VirtualTime(Rc<Cell<u32>>);

impl Clock for VirtualTime {
    fn now_ms(&self) -> u32 {
        self.0.get()
    }
}

impl DelayNs for VirtualTime {
    fn delay_ns(&mut self, ns: u32) {
        self.0.set(self.0.get().wrapping_add(ns / 1_000_000));
    }
}

/// Records entries; refuses to enter `poison`.
struct Host {
    entered: Vec<StateId>,
    poison: StateId,
}

impl StateHost for Host {
    fn state_entered(&mut self, state: StateId, _event: EventTag) -> anyhow::Result<()> {
        if state == self.poison {
            bail!("amplifier fault");
        }
        self.entered.push(state);
        Ok(())
    }

    fn state_left(&mut self, _state: StateId, _event: EventTag) -> anyhow::Result<()> {
        Ok(())
    }
}

fn host(poison: u8) -> Host {
    Host {
        entered: Vec::new(),
        poison: StateId(poison),
    }
}

#[test]
fn isr_edges_drive_transitions() {
    let channel = EdgeChannel::new();
    let config = EngineConfig::default();
    let mut fsm = Fsm::new(host(99), &config);
    let key = fsm
        .add_button(IsrButton::new(&channel, "isr", false))
        .unwrap();
    fsm.add_transition(StateId(0), &[key.press()], StateId(1)).unwrap();
    fsm.add_transition(StateId(1), &[key.release()], StateId(0)).unwrap();

    // Contact bounce, then a clean press.
    assert!(record_edge(&channel, true, 0));
    assert!(record_edge(&channel, false, 3));
    assert!(record_edge(&channel, true, 6));
    // Clean level starts at 6: nothing before the window has passed.
    for t in (0..=50).step_by(10) {
        fsm.tick(t).unwrap();
    }
    assert_eq!(fsm.current_state(), StateId(0));
    for t in (60..=100).step_by(10) {
        fsm.tick(t).unwrap();
    }
    assert_eq!(fsm.current_state(), StateId(1));

    assert!(record_edge(&channel, false, 110));
    for t in (110..=200).step_by(10) {
        fsm.tick(t).unwrap();
    }
    assert_eq!(fsm.current_state(), StateId(0));
    assert_eq!(fsm.host().entered, vec![StateId(1), StateId(0)]);
}

#[test]
fn run_returns_callback_failure() {
    let channel = EdgeChannel::new();
    let config = EngineConfig::default();
    let mut fsm = Fsm::new(host(1), &config);
    let key = fsm
        .add_button(IsrButton::new(&channel, "isr", false))
        .unwrap();
    fsm.add_transition(StateId(0), &[key.press()], StateId(1)).unwrap();

    record_edge(&channel, true, 0);
    let time = VirtualTime::default();
    let mut delay = time.clone();

    let failure = match fsm.run(&time, &mut delay) {
        Err(failure) => failure,
        Ok(never) => match never {},
    };

    assert_eq!(failure.hook, Hook::StateEntered);
    assert_eq!(failure.state, StateId(1));
    assert!(failure.to_string().contains("amplifier fault"));
    // Confirmed after one debounce window of virtual time.
    assert!(time.now_ms() >= config.debounce_ms);
    assert_eq!(fsm.current_state(), StateId(1));
}

#[test]
fn start_follows_automatic_edge_out_of_initial_state() {
    let config = EngineConfig::default();
    let mut fsm = Fsm::new(host(99), &config);
    fsm.add_transition(StateId(0), &[EventTag::NoEvent], StateId(3))
        .unwrap();
    fsm.start().unwrap();
    assert_eq!(fsm.current_state(), StateId(3));
    assert_eq!(fsm.host().entered, vec![StateId(3)]);
}
