//! Scale-degree classification and the degree → color palette.

use crate::constants::{
    EMPTY_COLOR, FIFTH_COLOR, OTHER_COLOR, ROOT_COLOR, SEVENTH_COLOR, THIRD_COLOR,
};
use crate::theory::{pitch_class_of, strip_octave};
use palette::Srgb;
use std::fmt;
use std::str::FromStr;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Degree {
    Root,
    Third,
    Fifth,
    Seventh,
    Other,
}

impl Degree {
    pub const HIGHLIGHTED: [Degree; 4] = [Degree::Root, Degree::Third, Degree::Fifth, Degree::Seventh];

    pub fn name(self) -> &'static str {
        match self {
            Degree::Root => "root",
            Degree::Third => "third",
            Degree::Fifth => "fifth",
            Degree::Seventh => "seventh",
            Degree::Other => "other",
        }
    }
}

/// Positions in the scale's note list that get a highlighted degree.
///
/// This is positional: it reads the 1st, 3rd, 5th and 7th entries of the
/// scale. That matches chord tones for seven-note (diatonic) scales only.
/// Pentatonic, blues or chromatic scales get whatever sits at those indices,
/// and scales shorter than seven notes never produce `Seventh`.
pub const DEGREE_POSITIONS: [(usize, Degree); 4] = [
    (0, Degree::Root),
    (2, Degree::Third),
    (4, Degree::Fifth),
    (6, Degree::Seventh),
];

/// Classify `note` (octave suffix allowed) against the ordered `scale_notes`.
pub fn classify<S: AsRef<str>>(note: &str, scale_notes: &[S]) -> Degree {
    DEGREE_POSITIONS
        .iter()
        .find(|(idx, _)| {
            scale_notes
                .get(*idx)
                .is_some_and(|s| same_pitch_class(note, s.as_ref()))
        })
        .map(|(_, degree)| *degree)
        .unwrap_or(Degree::Other)
}

/// Compare by pitch class; names that do not parse fall back to plain text
/// comparison without their octave suffix.
fn same_pitch_class(a: &str, b: &str) -> bool {
    match (pitch_class_of(a), pitch_class_of(b)) {
        (Some(pa), Some(pb)) => pa == pb,
        _ => strip_octave(a) == strip_octave(b),
    }
}

/// 8-bit sRGB color.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color(pub Srgb<u8>);

impl Color {
    pub fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self(Srgb::new(r, g, b))
    }

    pub fn from_array(c: [u8; 3]) -> Self {
        Self::rgb(c[0], c[1], c[2])
    }

    /// CSS form used by canvas style setters.
    pub fn to_css(self) -> String {
        let Srgb { red, green, blue, .. } = self.0;
        format!("#{:02x}{:02x}{:02x}", red, green, blue)
    }

    /// Parse the forms browsers hand back from computed styles: `#rgb`,
    /// `#rrggbb`, `rgb(r, g, b)` and `rgba(r, g, b, a)`. Fully transparent
    /// colors count as unset.
    pub fn parse_css(s: &str) -> Option<Self> {
        let s = s.trim();
        if s.starts_with('#') {
            return Srgb::<u8>::from_str(s).ok().map(Self);
        }
        let inner = s
            .strip_prefix("rgba(")
            .or_else(|| s.strip_prefix("rgb("))?
            .strip_suffix(')')?;
        let parts: Vec<f32> = inner
            .split(|c: char| c == ',' || c == '/' || c == ' ')
            .filter(|p| !p.is_empty())
            .map(|p| p.parse::<f32>().ok())
            .collect::<Option<_>>()?;
        let (rgb, alpha) = match parts.as_slice() {
            [r, g, b] => ([*r, *g, *b], 1.0),
            [r, g, b, a] => ([*r, *g, *b], *a),
            _ => return None,
        };
        if alpha <= 0.0 {
            return None;
        }
        let [r, g, b] = rgb.map(|v| v.round().clamp(0.0, 255.0) as u8);
        Some(Self::rgb(r, g, b))
    }
}

impl From<Srgb<u8>> for Color {
    fn from(c: Srgb<u8>) -> Self {
        Self(c)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_css())
    }
}

/// Source of the four themed degree swatches.
pub trait ThemeProvider {
    /// Resolved swatch color for a highlighted degree, if the theme has one.
    fn swatch(&self, degree: Degree) -> Option<Color>;
}

/// Degree palette, read once from the theme and cached for the session.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DegreeColorMap {
    pub root: Color,
    pub third: Color,
    pub fifth: Color,
    pub seventh: Color,
    pub other: Color,
    pub empty: Color,
}

impl Default for DegreeColorMap {
    fn default() -> Self {
        Self {
            root: Color::from_array(ROOT_COLOR),
            third: Color::from_array(THIRD_COLOR),
            fifth: Color::from_array(FIFTH_COLOR),
            seventh: Color::from_array(SEVENTH_COLOR),
            other: Color::from_array(OTHER_COLOR),
            empty: Color::from_array(EMPTY_COLOR),
        }
    }
}

impl DegreeColorMap {
    /// Build from theme swatches; missing swatches keep the fallback palette.
    pub fn from_theme(theme: &dyn ThemeProvider) -> Self {
        let mut map = Self::default();
        for degree in Degree::HIGHLIGHTED {
            match theme.swatch(degree) {
                Some(color) => *map.slot(degree) = color,
                None => log::warn!("[theme] no swatch for {}, using fallback", degree.name()),
            }
        }
        map
    }

    fn slot(&mut self, degree: Degree) -> &mut Color {
        match degree {
            Degree::Root => &mut self.root,
            Degree::Third => &mut self.third,
            Degree::Fifth => &mut self.fifth,
            Degree::Seventh => &mut self.seventh,
            Degree::Other => &mut self.other,
        }
    }

    #[inline]
    pub fn color_for(&self, degree: Degree) -> Color {
        match degree {
            Degree::Root => self.root,
            Degree::Third => self.third,
            Degree::Fifth => self.fifth,
            Degree::Seventh => self.seventh,
            Degree::Other => self.other,
        }
    }

    /// Color of positions outside the scale.
    #[inline]
    pub fn empty_color(&self) -> Color {
        self.empty
    }
}

impl ThemeProvider for DegreeColorMap {
    fn swatch(&self, degree: Degree) -> Option<Color> {
        Some(self.color_for(degree))
    }
}

/// Free-function form of [`DegreeColorMap::color_for`].
#[inline]
pub fn color_for(degree: Degree, map: &DegreeColorMap) -> Color {
    map.color_for(degree)
}
