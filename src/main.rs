//! PicoChime firmware — main entry point (ESP32, ESP-IDF).
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │  5 × Button<PinDriver>  ──▶  Fsm  ──▶  MusicController       │
//! │  (pull-up, active low)       │         (tone · ring · OLED)  │
//! │                              ▼                               │
//! │                     MonotonicClock + FreeRtos delay          │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! Buzzer, ring and display are driven through the log adapters until
//! their drivers are fitted; the engine does not care either way.
#![deny(unused_must_use)]

use anyhow::Result;
use esp_idf_hal::delay::FreeRtos;
use esp_idf_hal::gpio::{AnyIOPin, IOPin, Input, PinDriver, Pull};
use esp_idf_hal::peripherals::Peripherals;
use log::{error, info, warn};

use picochime::adapters::log_sink::{LogDisplay, LogRing, LogTone};
use picochime::adapters::time::MonotonicClock;
use picochime::app::controller::MusicController;
use picochime::app::wiring::{self, BUTTON_LABELS};
use picochime::config::EngineConfig;
use picochime::drivers::Unavailable;
use picochime::drivers::button::{Button, Polarity};
use picochime::fsm::Fsm;

type ButtonPin = PinDriver<'static, AnyIOPin, Input>;

fn button(pin: AnyIOPin, label: &'static str, config: &EngineConfig) -> Result<Button<ButtonPin>> {
    let mut driver = PinDriver::input(pin)?;
    driver.set_pull(Pull::Up)?;
    Ok(Button::new(driver, label)
        .with_polarity(Polarity::ActiveLow)
        .with_debounce_ms(config.debounce_ms))
}

fn main() -> Result<()> {
    // ── 1. ESP-IDF bootstrap ──────────────────────────────────
    esp_idf_svc::sys::link_patches();
    esp_idf_logger::init()?;

    info!("PicoChime v{}", env!("CARGO_PKG_VERSION"));

    let config = EngineConfig {
        debug: true,
        ..EngineConfig::default()
    };
    config.validate()?;

    // ── 2. Buttons ────────────────────────────────────────────
    let peripherals = Peripherals::take()?;
    let pins = peripherals.pins;
    // Same order as pins::BUTTON_GPIOS / wiring::BUTTON_LABELS.
    let button_pins: [AnyIOPin; 5] = [
        pins.gpio12.downgrade(),
        pins.gpio13.downgrade(),
        pins.gpio14.downgrade(),
        pins.gpio15.downgrade(),
        pins.gpio11.downgrade(),
    ];

    let controller = MusicController::new(LogTone::new(), LogRing, Some(LogDisplay));
    let mut fsm = Fsm::new(controller, &config);

    for (pin, label) in button_pins.into_iter().zip(BUTTON_LABELS) {
        match button(pin, label, &config) {
            Ok(b) => fsm.add_button(b)?,
            Err(e) => {
                // Keep the slot so the remaining source ids still line up.
                warn!("button '{label}' init failed: {e}");
                fsm.add_button(Unavailable::new(label))?
            }
        };
    }

    // ── 3. State graph ────────────────────────────────────────
    wiring::add_transitions(&mut fsm)?;

    // ── 4. Run forever ────────────────────────────────────────
    let clock = MonotonicClock::new();
    let mut delay = FreeRtos;
    match fsm.run(&clock, &mut delay) {
        Ok(never) => match never {},
        Err(e) => {
            error!("FSM stopped: {e}");
            Err(e.into())
        }
    }
}
