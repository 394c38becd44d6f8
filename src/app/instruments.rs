//! Instrument note tables.
//!
//! Each instrument maps the eight note buttons (states 1–8) to a pitch.
//! Frequencies are rounded equal-temperament values in Hz.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Note {
    pub name: &'static str,
    pub freq_hz: u32,
}

/// Notes per instrument.
pub const NOTE_COUNT: usize = 8;

const fn n(name: &'static str, freq_hz: u32) -> Note {
    Note { name, freq_hz }
}

/// C major scale, C4–C5.
const ORGAN: [Note; NOTE_COUNT] = [
    n("C4", 262),
    n("D4", 294),
    n("E4", 330),
    n("F4", 349),
    n("G4", 392),
    n("A4", 440),
    n("B4", 494),
    n("C5", 523),
];

/// G major scale from the violin's open G string.
const VIOLIN: [Note; NOTE_COUNT] = [
    n("G3", 196),
    n("A3", 220),
    n("B3", 247),
    n("C4", 262),
    n("D4", 294),
    n("E4", 330),
    n("F#4", 370),
    n("G4", 392),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Instrument {
    #[default]
    Organ,
    Violin,
}

impl Instrument {
    pub fn name(self) -> &'static str {
        match self {
            Self::Organ => "Organ",
            Self::Violin => "Violin",
        }
    }

    pub fn notes(self) -> &'static [Note; NOTE_COUNT] {
        match self {
            Self::Organ => &ORGAN,
            Self::Violin => &VIOLIN,
        }
    }

    pub fn note(self, index: usize) -> Option<Note> {
        self.notes().get(index).copied()
    }

    /// Organ → Violin → Organ …
    pub fn next(self) -> Self {
        match self {
            Self::Organ => Self::Violin,
            Self::Violin => Self::Organ,
        }
    }
}
