// Host-side tests for reading board configuration from data attributes.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod config {
    include!("../src/config.rs");
}

use config::*;
use fretboard_core::{BoardConfig, ConfigError, EmptyMarkerStyle, StringOrder};
use std::collections::HashMap;

fn from(pairs: &[(&str, &str)]) -> Result<BoardConfig, ConfigError> {
    let attrs: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    board_config_from_attrs(|name| attrs.get(name).cloned())
}

#[test]
fn no_attributes_gives_defaults() {
    assert_eq!(from(&[]).unwrap(), BoardConfig::default());
}

#[test]
fn reads_every_attribute() {
    let c = from(&[
        (ATTR_FRETS, "12"),
        (ATTR_STRINGS, "4"),
        (ATTR_TUNING, "bass"),
        (ATTR_START_FRET, "5"),
        (ATTR_STRING_ORDER, "low-top"),
        (ATTR_EMPTY, "outline"),
    ])
    .unwrap();
    assert_eq!(c.num_frets(), 12);
    assert_eq!(c.num_strings(), 4);
    assert_eq!(c.tuning(), "bass");
    assert_eq!(c.start_fret(), 5);
    assert_eq!(c.string_order(), StringOrder::LowAtTop);
    assert_eq!(c.empty_style(), EmptyMarkerStyle::Outline);
}

#[test]
fn surrounding_whitespace_is_ignored() {
    let c = from(&[(ATTR_FRETS, " 20 "), (ATTR_TUNING, "  drop d ")]).unwrap();
    assert_eq!(c.num_frets(), 20);
    assert_eq!(c.tuning(), "drop d");
}

#[test]
fn unparseable_values_fall_back_to_defaults() {
    let c = from(&[
        (ATTR_FRETS, "many"),
        (ATTR_STRINGS, "-3"),
        (ATTR_STRING_ORDER, "sideways"),
        (ATTR_EMPTY, "sparkly"),
        (ATTR_TUNING, "   "),
    ])
    .unwrap();
    assert_eq!(c, BoardConfig::default());
}

#[test]
fn zero_frets_is_an_error() {
    assert_eq!(from(&[(ATTR_FRETS, "0")]), Err(ConfigError::NoFrets));
}

#[test]
fn zero_strings_is_an_error() {
    assert_eq!(from(&[(ATTR_STRINGS, "0")]), Err(ConfigError::NoStrings));
}

#[test]
fn too_many_frets_is_an_error() {
    assert!(matches!(
        from(&[(ATTR_FRETS, "500")]),
        Err(ConfigError::TooManyFrets { requested: 500, .. })
    ));
}

#[test]
fn start_fret_past_the_last_fret_is_an_error() {
    assert!(from(&[(ATTR_FRETS, "12"), (ATTR_START_FRET, "24")]).is_ok());
    assert!(matches!(
        from(&[(ATTR_START_FRET, "18446744073709551614")]),
        Err(ConfigError::FretWindowTooHigh { .. })
    ));
    assert!(matches!(
        from(&[(ATTR_FRETS, "15"), (ATTR_START_FRET, "30")]),
        Err(ConfigError::FretWindowTooHigh { start_fret: 30, last: 45, .. })
    ));
}
