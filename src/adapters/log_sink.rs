//! Log-backed peripheral adapters.
//!
//! Implement the output ports by writing what the hardware would do to
//! the logger.  Used by the host simulator, and on the device for any
//! peripheral that is not fitted.

use log::info;

use crate::app::ports::{DisplayFrame, LightRing, RingPattern, StatusDisplay, ToneOutput};

/// Logs tone start / stop.
#[derive(Debug, Default)]
pub struct LogTone {
    playing: Option<u32>,
}

impl LogTone {
    pub fn new() -> Self {
        Self::default()
    }

    /// Frequency currently "sounding".
    pub fn playing(&self) -> Option<u32> {
        self.playing
    }
}

impl ToneOutput for LogTone {
    fn play(&mut self, freq_hz: u32) {
        info!("TONE | play {freq_hz} Hz");
        self.playing = Some(freq_hz);
    }

    fn stop(&mut self) {
        if self.playing.take().is_some() {
            info!("TONE | stop");
        }
    }
}

/// Logs ring patterns instead of animating them.
#[derive(Debug, Default)]
pub struct LogRing;

impl LightRing for LogRing {
    fn show(&mut self, pattern: RingPattern) {
        info!("RING | {:?}", pattern);
    }
}

/// Logs each display frame as one line.
#[derive(Debug, Default)]
pub struct LogDisplay;

impl StatusDisplay for LogDisplay {
    fn render(&mut self, frame: &DisplayFrame) -> anyhow::Result<()> {
        info!(
            "OLED | {} | State: {} | Note: {}",
            frame.title,
            frame.state,
            frame.note.unwrap_or("None")
        );
        Ok(())
    }
}
