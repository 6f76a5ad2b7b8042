// Board configuration read from `data-*` attributes on the canvas container.
//
// Attributes that do not parse fall back to defaults with a warning; values
// that parse but describe an impossible board are hard errors.

use fretboard_core::{BoardConfig, ConfigError, EmptyMarkerStyle, StringOrder};

pub const ATTR_FRETS: &str = "data-frets";
pub const ATTR_STRINGS: &str = "data-strings";
pub const ATTR_TUNING: &str = "data-tuning";
pub const ATTR_START_FRET: &str = "data-start-fret";
pub const ATTR_STRING_ORDER: &str = "data-string-order"; // "high-top" | "low-top"
pub const ATTR_EMPTY: &str = "data-empty"; // "skip" | "outline"

/// Build a [`BoardConfig`] from an attribute getter.
pub fn board_config_from_attrs<F>(attr: F) -> Result<BoardConfig, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let mut builder = BoardConfig::builder();
    if let Some(n) = parsed(&attr, ATTR_FRETS, |s| s.parse::<usize>().ok()) {
        builder = builder.num_frets(n);
    }
    if let Some(n) = parsed(&attr, ATTR_STRINGS, |s| s.parse::<usize>().ok()) {
        builder = builder.num_strings(n);
    }
    if let Some(t) = attr(ATTR_TUNING).filter(|t| !t.trim().is_empty()) {
        builder = builder.tuning(t.trim());
    }
    if let Some(n) = parsed(&attr, ATTR_START_FRET, |s| s.parse::<usize>().ok()) {
        builder = builder.start_fret(n);
    }
    if let Some(order) = parsed(&attr, ATTR_STRING_ORDER, StringOrder::parse) {
        builder = builder.string_order(order);
    }
    if let Some(style) = parsed(&attr, ATTR_EMPTY, EmptyMarkerStyle::parse) {
        builder = builder.empty_style(style);
    }
    builder.build()
}

fn parsed<F, T>(attr: &F, name: &str, parse: impl Fn(&str) -> Option<T>) -> Option<T>
where
    F: Fn(&str) -> Option<String>,
{
    let raw = attr(name)?;
    let value = parse(raw.trim());
    if value.is_none() {
        log::warn!("[config] ignoring {}=\"{}\"", name, raw);
    }
    value
}
