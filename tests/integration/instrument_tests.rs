//! Integration tests for buttons → engine → music controller.
//!
//! Drives the five-button instrument through simulated pins in virtual
//! time and checks the resulting tone / ring / display calls.

use picochime::app::controller::DISPLAY_TITLE;
use picochime::app::instruments::Instrument;
use picochime::app::ports::{DisplayFrame, RingPattern};
use picochime::app::wiring::{BLUE, GREY, RED, WHITE, YELLOW};
use picochime::fsm::StateId;

use crate::mock_hw::{HwCall, Rig};

fn frame(state: u8, note: Option<&'static str>) -> HwCall {
    HwCall::Frame(DisplayFrame {
        title: DISPLAY_TITLE,
        state: StateId(state),
        note,
    })
}

fn b(id: picochime::events::SourceId) -> usize {
    id.index()
}

// ── Single note ───────────────────────────────────────────────

#[test]
fn white_press_plays_c4_and_release_rests() {
    let mut rig = Rig::new();

    rig.press(b(WHITE));
    assert_eq!(rig.fsm.current_state(), StateId(1));
    assert_eq!(
        rig.take_log(),
        vec![
            HwCall::Play(262),
            HwCall::Ring(RingPattern::Flash),
            frame(1, Some("C4")),
        ]
    );

    rig.release(b(WHITE));
    assert_eq!(rig.fsm.current_state(), StateId(0));
    assert_eq!(rig.take_log(), vec![HwCall::Stop, frame(0, None)]);
}

#[test]
fn each_note_button_has_its_own_state() {
    for (button, state, freq) in [(WHITE, 1, 262), (RED, 2, 294), (YELLOW, 3, 330), (BLUE, 4, 349)] {
        let mut rig = Rig::new();
        rig.press(b(button));
        assert_eq!(rig.fsm.current_state(), StateId(state));
        assert_eq!(rig.take_log()[0], HwCall::Play(freq));
        rig.release(b(button));
        assert_eq!(rig.fsm.current_state(), StateId(0));
    }
}

// ── Shift key ─────────────────────────────────────────────────

#[test]
fn blue_shifts_white_up_and_back() {
    let mut rig = Rig::new();

    rig.press(b(WHITE));
    rig.take_log();

    rig.press(b(BLUE));
    assert_eq!(rig.fsm.current_state(), StateId(5));
    assert_eq!(
        rig.take_log(),
        vec![
            HwCall::Stop,
            HwCall::Play(392),
            HwCall::Ring(RingPattern::Flash),
            frame(5, Some("G4")),
        ]
    );

    rig.release(b(BLUE));
    assert_eq!(rig.fsm.current_state(), StateId(1));

    rig.release(b(WHITE));
    assert_eq!(rig.fsm.current_state(), StateId(0));
}

#[test]
fn red_shift_returns_through_state_one() {
    // 2 → 5 shares state 5 with the white shift, whose release edge
    // leads back to 1.
    let mut rig = Rig::new();
    rig.press(b(RED));
    rig.press(b(BLUE));
    assert_eq!(rig.fsm.current_state(), StateId(5));

    rig.release(b(BLUE));
    assert_eq!(rig.fsm.current_state(), StateId(1));

    // Red release has no edge out of 1.
    rig.release(b(RED));
    assert_eq!(rig.fsm.current_state(), StateId(1));
}

#[test]
fn unmatched_press_is_silent() {
    let mut rig = Rig::new();
    rig.press(b(WHITE));
    rig.take_log();

    // No edge for (1, RED press).
    rig.press(b(RED));
    assert_eq!(rig.fsm.current_state(), StateId(1));
    assert!(rig.take_log().is_empty());
}

// ── Instrument switch ─────────────────────────────────────────

#[test]
fn grey_switches_instrument_and_returns_to_rest() {
    let mut rig = Rig::new();

    rig.press(b(GREY));
    assert_eq!(rig.fsm.current_state(), StateId(0));
    assert_eq!(rig.fsm.host().instrument(), Instrument::Violin);
    assert_eq!(rig.take_log(), vec![frame(9, None), frame(0, None)]);

    // No edge for the grey release.
    rig.release(b(GREY));
    assert!(rig.take_log().is_empty());

    rig.press(b(WHITE));
    assert_eq!(rig.take_log()[0], HwCall::Play(196));
}

#[test]
fn two_switches_cycle_back_to_organ() {
    let mut rig = Rig::new();
    for _ in 0..2 {
        rig.press(b(GREY));
        rig.release(b(GREY));
    }
    assert_eq!(rig.fsm.host().instrument(), Instrument::Organ);
}

// ── Degraded hardware ─────────────────────────────────────────

#[test]
fn failed_button_is_ignored_others_keep_working() {
    let mut rig = Rig::new();
    rig.buttons[b(WHITE)].fail();

    rig.press(b(WHITE));
    assert_eq!(rig.fsm.current_state(), StateId(0));

    rig.press(b(RED));
    assert_eq!(rig.fsm.current_state(), StateId(2));
}

#[test]
fn display_failure_does_not_stop_music() {
    // Initial frame renders, every later one fails.
    let mut rig = Rig::with_display_failing_from(Some(1));

    rig.press(b(YELLOW));
    assert!(!rig.fsm.host().has_display());
    assert_eq!(
        rig.take_log(),
        vec![HwCall::Play(330), HwCall::Ring(RingPattern::Alternate)]
    );

    rig.release(b(YELLOW));
    assert_eq!(rig.take_log(), vec![HwCall::Stop]);
}

#[test]
fn bounce_shorter_than_window_is_ignored() {
    let mut rig = Rig::new();
    rig.buttons[b(WHITE)].set(true);
    rig.run_for(20);
    rig.buttons[b(WHITE)].set(false);
    rig.run_for(200);

    assert_eq!(rig.fsm.current_state(), StateId(0));
    assert!(rig.take_log().is_empty());
}
