// Keyboard shortcut mapping and selection helpers.
//
// Platform-free so it can be tested on the host.

use rand::seq::SliceRandom;
use rand::Rng;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Shortcut {
    Key(&'static str),
    Scale(&'static str),
    RandomSelection,
    ToggleSettings,
}

/// Scales reachable from the digit row, in mode order.
pub const MODE_DIGITS: [(&str, &str); 7] = [
    ("1", "ionian"),
    ("2", "dorian"),
    ("3", "phrygian"),
    ("4", "lydian"),
    ("5", "mixolydian"),
    ("6", "aeolian"),
    ("7", "locrian"),
];

#[inline]
pub fn key_for_letter(key: &str) -> Option<&'static str> {
    match key {
        "a" => Some("A"),
        "b" => Some("B"),
        "c" => Some("C"),
        "d" => Some("D"),
        "e" => Some("E"),
        "f" => Some("F"),
        "g" => Some("G"),
        // shift raises by a semitone where a sharp exists
        "A" => Some("A#"),
        "C" => Some("C#"),
        "D" => Some("D#"),
        "F" => Some("F#"),
        "G" => Some("G#"),
        "B" => Some("B"),
        "E" => Some("E"),
        _ => None,
    }
}

#[inline]
pub fn scale_for_digit(key: &str) -> Option<&'static str> {
    MODE_DIGITS
        .iter()
        .find(|(digit, _)| *digit == key)
        .map(|(_, scale)| *scale)
}

pub fn shortcut_for(key: &str) -> Option<Shortcut> {
    if let Some(k) = key_for_letter(key) {
        return Some(Shortcut::Key(k));
    }
    if let Some(s) = scale_for_digit(key) {
        return Some(Shortcut::Scale(s));
    }
    match key {
        "p" | "P" => Some(Shortcut::Scale("major pentatonic")),
        "t" | "T" => Some(Shortcut::RandomSelection),
        "s" | "S" => Some(Shortcut::ToggleSettings),
        _ => None,
    }
}

/// Pick a random key and scale from the given catalogs.
pub fn random_selection<R: Rng + ?Sized>(
    rng: &mut R,
    keys: &[String],
    scales: &[String],
) -> Option<(String, String)> {
    let key = keys.choose(rng)?;
    let scale = scales.choose(rng)?;
    Some((key.clone(), scale.clone()))
}

pub fn hint_text(key: &str, scale: &str, tuning: &str) -> String {
    format!("Key: {} • Scale: {} • Tuning: {}", key, scale, tuning)
}
