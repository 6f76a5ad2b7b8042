//! Pitch model and the built-in music tables: key names, scale intervals
//! and open-string tunings.

use std::fmt;

/// Key names offered to the user, sharp spelling.
pub const KEY_NAMES: [&str; 12] = [
    "C", "C#", "D", "D#", "E", "F", "F#", "G", "G#", "A", "A#", "B",
];

/// Diatonic modes (semitones above the root)
pub const IONIAN: &[u8] = &[0, 2, 4, 5, 7, 9, 11]; // major
pub const DORIAN: &[u8] = &[0, 2, 3, 5, 7, 9, 10];
pub const PHRYGIAN: &[u8] = &[0, 1, 3, 5, 7, 8, 10];
pub const LYDIAN: &[u8] = &[0, 2, 4, 6, 7, 9, 11];
pub const MIXOLYDIAN: &[u8] = &[0, 2, 4, 5, 7, 9, 10];
pub const AEOLIAN: &[u8] = &[0, 2, 3, 5, 7, 8, 10]; // natural minor
pub const LOCRIAN: &[u8] = &[0, 1, 3, 5, 6, 8, 10];

pub const HARMONIC_MINOR: &[u8] = &[0, 2, 3, 5, 7, 8, 11];
pub const MELODIC_MINOR: &[u8] = &[0, 2, 3, 5, 7, 9, 11];
pub const MAJOR_PENTATONIC: &[u8] = &[0, 2, 4, 7, 9];
pub const MINOR_PENTATONIC: &[u8] = &[0, 3, 5, 7, 10];
pub const BLUES: &[u8] = &[0, 3, 5, 6, 7, 10];
pub const CHROMATIC: &[u8] = &[0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11];

/// Scale catalog in display order. Aliases share interval tables.
pub const SCALES: &[(&str, &[u8])] = &[
    ("major", IONIAN),
    ("minor", AEOLIAN),
    ("ionian", IONIAN),
    ("dorian", DORIAN),
    ("phrygian", PHRYGIAN),
    ("lydian", LYDIAN),
    ("mixolydian", MIXOLYDIAN),
    ("aeolian", AEOLIAN),
    ("locrian", LOCRIAN),
    ("harmonic minor", HARMONIC_MINOR),
    ("melodic minor", MELODIC_MINOR),
    ("major pentatonic", MAJOR_PENTATONIC),
    ("minor pentatonic", MINOR_PENTATONIC),
    ("blues", BLUES),
    ("chromatic", CHROMATIC),
];

/// Open-string notes per tuning, in string order from the bass side.
///
/// That is lowest pitch first except for re-entrant tunings: the ukulele's
/// G4 string sits on the bass side but is pitched above C4.
pub const TUNINGS: &[(&str, &[&str])] = &[
    ("guitar", &["E2", "A2", "D3", "G3", "B3", "E4"]),
    ("drop d", &["D2", "A2", "D3", "G3", "B3", "E4"]),
    ("open g", &["D2", "G2", "D3", "G3", "B3", "D4"]),
    ("dadgad", &["D2", "A2", "D3", "G3", "A3", "D4"]),
    ("seven-string", &["B1", "E2", "A2", "D3", "G3", "B3", "E4"]),
    ("bass", &["E1", "A1", "D2", "G2"]),
    ("ukulele", &["G4", "C4", "E4", "A4"]),
];

/// One of the twelve pitch classes, C = 0.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PitchClass(u8);

impl PitchClass {
    pub fn new(semitone: i32) -> Self {
        Self(semitone.rem_euclid(12) as u8)
    }

    #[inline]
    pub fn index(self) -> u8 {
        self.0
    }

    pub fn name(self) -> &'static str {
        KEY_NAMES[self.0 as usize]
    }

    pub fn transpose(self, semitones: i32) -> Self {
        Self::new(self.0 as i32 + semitones)
    }

    /// Parse a bare pitch-class name: a letter A–G (any case) followed by any
    /// number of `#` or `b` accidentals.
    pub fn parse(name: &str) -> Option<Self> {
        let mut chars = name.trim().chars();
        let base = match chars.next()?.to_ascii_uppercase() {
            'C' => 0,
            'D' => 2,
            'E' => 4,
            'F' => 5,
            'G' => 7,
            'A' => 9,
            'B' => 11,
            _ => return None,
        };
        let mut offset = 0i32;
        for c in chars {
            match c {
                '#' | '♯' => offset += 1,
                'b' | '♭' => offset -= 1,
                _ => return None,
            }
        }
        Some(Self::new(base + offset))
    }
}

impl fmt::Display for PitchClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A concrete pitch: pitch class plus scientific octave number.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Note {
    pub pitch: PitchClass,
    pub octave: i8,
}

impl Note {
    /// MIDI-style semitone number (C4 = 60).
    pub fn semitone(self) -> i32 {
        (self.octave as i32 + 1) * 12 + self.pitch.index() as i32
    }

    pub fn from_semitone(semitone: i32) -> Self {
        Self {
            pitch: PitchClass::new(semitone),
            octave: (semitone.div_euclid(12) - 1) as i8,
        }
    }

    pub fn transpose(self, semitones: i32) -> Self {
        Self::from_semitone(self.semitone() + semitones)
    }

    /// Parse "E2", "Bb3" or "C#-1".
    pub fn parse(name: &str) -> Option<Self> {
        let (pc, octave) = split_octave(name.trim());
        Some(Self {
            pitch: PitchClass::parse(pc)?,
            octave: octave?.parse().ok()?,
        })
    }
}

impl fmt::Display for Note {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.pitch, self.octave)
    }
}

/// Split a note name into its pitch-class part and an optional octave suffix.
fn split_octave(name: &str) -> (&str, Option<&str>) {
    match name.find(|c: char| c.is_ascii_digit() || c == '-') {
        Some(idx) => (&name[..idx], Some(&name[idx..])),
        None => (name, None),
    }
}

/// Strip any octave suffix: "A#4" -> "A#".
pub fn strip_octave(name: &str) -> &str {
    split_octave(name.trim()).0
}

/// Pitch class of a note name with or without octave.
pub fn pitch_class_of(name: &str) -> Option<PitchClass> {
    PitchClass::parse(strip_octave(name))
}
