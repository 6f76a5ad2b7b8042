//! Immutable per-session board configuration.
//!
//! A [`BoardConfig`] is validated once at construction; everything downstream
//! (geometry, rendering) can then rely on `num_frets >= 1` and
//! `num_strings >= 1` without re-checking.

use crate::constants::{
    DEFAULT_NUM_FRETS, DEFAULT_NUM_STRINGS, DEFAULT_TUNING, MAX_FRETS, ZERO_FRET_OFFSET,
};
use thiserror::Error;

/// Programmer-facing configuration errors, reported before anything is drawn.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("a fretboard needs at least one fret")]
    NoFrets,
    #[error("a fretboard needs at least one string")]
    NoStrings,
    #[error("{requested} frets requested, at most {max} are supported")]
    TooManyFrets { requested: usize, max: usize },
    #[error("frets {start_fret}..={last} are past the last supported fret {max}")]
    FretWindowTooHigh {
        start_fret: usize,
        last: usize,
        max: usize,
    },
    #[error("unknown tuning `{0}`")]
    UnknownTuning(String),
}

/// Vertical order of strings on screen.
///
/// Resolver grids list strings bass side first. `HighAtTop` is the usual
/// tablature view and inverts the row index when computing y positions.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum StringOrder {
    #[default]
    HighAtTop,
    LowAtTop,
}

impl StringOrder {
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "high-top" | "high" => Some(Self::HighAtTop),
            "low-top" | "low" => Some(Self::LowAtTop),
            _ => None,
        }
    }

    #[inline]
    pub fn is_inverted(self) -> bool {
        matches!(self, Self::HighAtTop)
    }
}

/// How positions outside the active scale are drawn.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum EmptyMarkerStyle {
    /// Leave the position blank.
    #[default]
    Skip,
    /// Draw a faint unfilled ring in the muted color.
    Outline,
}

impl EmptyMarkerStyle {
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "skip" | "none" => Some(Self::Skip),
            "outline" | "faint" => Some(Self::Outline),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct BoardConfig {
    num_frets: usize,
    num_strings: usize,
    tuning: String,
    start_fret: usize,
    zero_fret_offset: f32,
    string_order: StringOrder,
    empty_style: EmptyMarkerStyle,
}

impl BoardConfig {
    /// Construct a config with default offset, order and empty-marker style.
    pub fn new(num_frets: usize, num_strings: usize, tuning: &str) -> Result<Self, ConfigError> {
        Self::builder()
            .num_frets(num_frets)
            .num_strings(num_strings)
            .tuning(tuning)
            .build()
    }

    pub fn builder() -> BoardConfigBuilder {
        BoardConfigBuilder::default()
    }

    pub fn num_frets(&self) -> usize {
        self.num_frets
    }

    pub fn num_strings(&self) -> usize {
        self.num_strings
    }

    pub fn tuning(&self) -> &str {
        &self.tuning
    }

    pub fn start_fret(&self) -> usize {
        self.start_fret
    }

    pub fn zero_fret_offset(&self) -> f32 {
        self.zero_fret_offset
    }

    pub fn string_order(&self) -> StringOrder {
        self.string_order
    }

    pub fn empty_style(&self) -> EmptyMarkerStyle {
        self.empty_style
    }
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            num_frets: DEFAULT_NUM_FRETS,
            num_strings: DEFAULT_NUM_STRINGS,
            tuning: DEFAULT_TUNING.to_string(),
            start_fret: 0,
            zero_fret_offset: ZERO_FRET_OFFSET,
            string_order: StringOrder::default(),
            empty_style: EmptyMarkerStyle::default(),
        }
    }
}

/// Builder for [`BoardConfig`]; unset fields keep their defaults.
#[derive(Clone, Debug, Default)]
pub struct BoardConfigBuilder {
    inner: BoardConfig,
}

impl BoardConfigBuilder {
    pub fn num_frets(mut self, n: usize) -> Self {
        self.inner.num_frets = n;
        self
    }

    pub fn num_strings(mut self, n: usize) -> Self {
        self.inner.num_strings = n;
        self
    }

    pub fn tuning(mut self, tuning: &str) -> Self {
        self.inner.tuning = tuning.to_string();
        self
    }

    pub fn start_fret(mut self, fret: usize) -> Self {
        self.inner.start_fret = fret;
        self
    }

    pub fn zero_fret_offset(mut self, px: f32) -> Self {
        self.inner.zero_fret_offset = px.max(0.0);
        self
    }

    pub fn string_order(mut self, order: StringOrder) -> Self {
        self.inner.string_order = order;
        self
    }

    pub fn empty_style(mut self, style: EmptyMarkerStyle) -> Self {
        self.inner.empty_style = style;
        self
    }

    pub fn build(self) -> Result<BoardConfig, ConfigError> {
        let c = self.inner;
        if c.num_frets == 0 {
            return Err(ConfigError::NoFrets);
        }
        if c.num_frets > MAX_FRETS {
            return Err(ConfigError::TooManyFrets {
                requested: c.num_frets,
                max: MAX_FRETS,
            });
        }
        let last = c.start_fret.saturating_add(c.num_frets);
        if last > MAX_FRETS {
            return Err(ConfigError::FretWindowTooHigh {
                start_fret: c.start_fret,
                last,
                max: MAX_FRETS,
            });
        }
        if c.num_strings == 0 {
            return Err(ConfigError::NoStrings);
        }
        Ok(c)
    }
}
