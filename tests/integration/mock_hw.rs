//! Mock peripherals for integration tests.
//!
//! Records every tone / ring / display call into one shared log so tests
//! can assert on the full, interleaved output history.

use std::cell::RefCell;
use std::rc::Rc;

use anyhow::bail;
use picochime::app::controller::MusicController;
use picochime::app::ports::{DisplayFrame, LightRing, RingPattern, StatusDisplay, ToneOutput};
use picochime::app::wiring::{self, BUTTON_LABELS};
use picochime::config::EngineConfig;
use picochime::drivers::button::Button;
use picochime::drivers::sim_pin::{SimLevel, SimPin};
use picochime::fsm::Fsm;

// ── Output record ─────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq)]
pub enum HwCall {
    Play(u32),
    Stop,
    Ring(RingPattern),
    Frame(DisplayFrame),
}

pub type CallLog = Rc<RefCell<Vec<HwCall>>>;

pub struct MockTone(pub CallLog);
pub struct MockRing(pub CallLog);
pub struct MockDisplay {
    log: CallLog,
    /// Fail every render from this frame index on.
    fail_from: Option<usize>,
    rendered: usize,
}

impl ToneOutput for MockTone {
    fn play(&mut self, freq_hz: u32) {
        self.0.borrow_mut().push(HwCall::Play(freq_hz));
    }
    fn stop(&mut self) {
        self.0.borrow_mut().push(HwCall::Stop);
    }
}

impl LightRing for MockRing {
    fn show(&mut self, pattern: RingPattern) {
        self.0.borrow_mut().push(HwCall::Ring(pattern));
    }
}

impl StatusDisplay for MockDisplay {
    fn render(&mut self, frame: &DisplayFrame) -> anyhow::Result<()> {
        if self.fail_from.is_some_and(|n| self.rendered >= n) {
            bail!("i2c bus error");
        }
        self.rendered += 1;
        self.log.borrow_mut().push(HwCall::Frame(*frame));
        Ok(())
    }
}

pub type Controller = MusicController<MockTone, MockRing, MockDisplay>;

// ── Rig: engine + sample wiring + simulated buttons ───────────

pub struct Rig {
    pub fsm: Fsm<'static, Controller>,
    pub buttons: Vec<SimLevel>,
    pub log: CallLog,
    pub now_ms: u32,
    pub config: EngineConfig,
}

impl Rig {
    pub fn new() -> Self {
        Self::with_display_failing_from(None)
    }

    pub fn with_display_failing_from(fail_from: Option<usize>) -> Self {
        let log: CallLog = Rc::new(RefCell::new(Vec::new()));
        let display = MockDisplay {
            log: Rc::clone(&log),
            fail_from,
            rendered: 0,
        };
        let controller = MusicController::new(
            MockTone(Rc::clone(&log)),
            MockRing(Rc::clone(&log)),
            Some(display),
        );
        let config = EngineConfig::default();
        let mut fsm = Fsm::new(controller, &config);

        let mut buttons = Vec::new();
        for label in BUTTON_LABELS {
            let pin = SimPin::new(false);
            buttons.push(pin.level());
            fsm.add_button(Button::new(pin, label).with_debounce_ms(config.debounce_ms))
                .unwrap();
        }
        wiring::add_transitions(&mut fsm).unwrap();
        log.borrow_mut().clear();

        Self {
            fsm,
            buttons,
            log,
            now_ms: 0,
            config,
        }
    }

    /// Advance virtual time by `ms`, ticking at the configured interval.
    pub fn run_for(&mut self, ms: u32) {
        let end = self.now_ms + ms;
        while self.now_ms < end {
            self.fsm.tick(self.now_ms).unwrap();
            self.now_ms += self.config.tick_interval_ms;
        }
    }

    /// Hold `button` (0-based) down long enough to be confirmed.
    pub fn press(&mut self, button: usize) {
        self.buttons[button].set(true);
        self.run_for(self.config.debounce_ms * 2);
    }

    pub fn release(&mut self, button: usize) {
        self.buttons[button].set(false);
        self.run_for(self.config.debounce_ms * 2);
    }

    pub fn take_log(&self) -> Vec<HwCall> {
        std::mem::take(&mut *self.log.borrow_mut())
    }
}
