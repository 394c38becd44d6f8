//! GPIO / peripheral pin assignments for the five-button instrument.
//!
//! Single source of truth — the firmware entry point references this
//! module rather than hard-coding pin numbers.

// ---------------------------------------------------------------------------
// Buttons (momentary, to GND, internal pull-up → active low)
// ---------------------------------------------------------------------------

pub const BUTTON_WHITE_GPIO: i32 = 12;
pub const BUTTON_RED_GPIO: i32 = 13;
pub const BUTTON_YELLOW_GPIO: i32 = 14;
pub const BUTTON_BLUE_GPIO: i32 = 15;
pub const BUTTON_GREY_GPIO: i32 = 11;

/// Button pins in engine registration order (matches `wiring::BUTTON_LABELS`).
pub const BUTTON_GPIOS: [i32; 5] = [
    BUTTON_WHITE_GPIO,
    BUTTON_RED_GPIO,
    BUTTON_YELLOW_GPIO,
    BUTTON_BLUE_GPIO,
    BUTTON_GREY_GPIO,
];

// ---------------------------------------------------------------------------
// Outputs
// ---------------------------------------------------------------------------

/// Passive buzzer, driven with a square wave.
pub const BUZZER_GPIO: i32 = 16;

/// WS2812 ring data line.
pub const RING_DATA_GPIO: i32 = 2;
/// Pixels on the ring.
pub const RING_LEN: usize = 16;

// ---------------------------------------------------------------------------
// SSD1306 128×64 OLED (I²C0, 400 kHz)
// ---------------------------------------------------------------------------

pub const DISPLAY_SCL_GPIO: i32 = 21;
pub const DISPLAY_SDA_GPIO: i32 = 20;
pub const DISPLAY_I2C_FREQ_HZ: u32 = 400_000;
pub const DISPLAY_WIDTH: u32 = 128;
pub const DISPLAY_HEIGHT: u32 = 64;
