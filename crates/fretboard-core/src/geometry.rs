//! Pixel layout of the board.
//!
//! [`BoardGeometry`] is a pure function of the surface size and the
//! [`BoardConfig`]. It is recomputed on every resize and never edited in
//! place.

use crate::config::BoardConfig;
use crate::constants::{NOTE_RADIUS_DIVISOR, STRING_PADDING_DIVISOR};
use glam::Vec2;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct BoardGeometry {
    pub width: f32,
    pub height: f32,
    pub num_frets: usize,
    pub num_strings: usize,
    pub zero_fret_offset: f32,
    pub fret_width: f32,
    pub string_padding: f32,
    pub string_height: f32,
    pub note_radius: f32,
    pub inverted: bool,
}

/// Where and how large a note marker is drawn.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Marker {
    pub center: Vec2,
    pub radius: f32,
    /// Open-string (fret 0) markers sit left of the nut at half size.
    pub open: bool,
}

/// Lay out the board for a `surface_width` x `surface_height` pixel surface.
///
/// Non-positive (or non-finite) sizes are a normal transient state while a
/// container is hidden or not laid out yet; they yield an all-zero geometry
/// that draws nothing visible.
pub fn compute_geometry(surface_width: f32, surface_height: f32, config: &BoardConfig) -> BoardGeometry {
    let valid = |v: f32| v.is_finite() && v > 0.0;
    if !valid(surface_width) || !valid(surface_height) {
        return BoardGeometry {
            num_frets: config.num_frets(),
            num_strings: config.num_strings(),
            inverted: config.string_order().is_inverted(),
            ..BoardGeometry::default()
        };
    }

    let num_frets = config.num_frets();
    let num_strings = config.num_strings();
    let zero_fret_offset = config.zero_fret_offset().min(surface_width);
    let fret_width = (surface_width - zero_fret_offset) / num_frets as f32;
    let string_padding = surface_height / STRING_PADDING_DIVISOR;
    let string_height = (surface_height - string_padding) / num_strings as f32;

    BoardGeometry {
        width: surface_width,
        height: surface_height,
        num_frets,
        num_strings,
        zero_fret_offset,
        fret_width,
        string_padding,
        string_height,
        note_radius: fret_width / NOTE_RADIUS_DIVISOR,
        inverted: config.string_order().is_inverted(),
    }
}

impl BoardGeometry {
    pub fn is_degenerate(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }

    /// x of fret line `i`, `i` in `[0, num_frets)`. Line 0 is the nut.
    #[inline]
    pub fn fret_x(&self, i: usize) -> f32 {
        i as f32 * self.fret_width + self.zero_fret_offset
    }

    /// Screen row of grid string `i`, applying the inversion flag.
    #[inline]
    fn row(&self, i: usize) -> f32 {
        if self.inverted {
            self.num_strings.saturating_sub(1).saturating_sub(i) as f32
        } else {
            i as f32
        }
    }

    /// y of the line for grid string `i`.
    #[inline]
    pub fn string_y(&self, i: usize) -> f32 {
        self.row(i) * self.string_height + self.string_padding
    }

    /// x positions of every fret line, left to right.
    pub fn fret_xs(&self) -> impl Iterator<Item = f32> + '_ {
        (0..self.num_frets).map(move |i| self.fret_x(i))
    }

    /// x of the middle of fret space `j` (> 0), or the open-string column.
    #[inline]
    pub fn fret_center_x(&self, j: usize) -> f32 {
        if j == 0 {
            self.zero_fret_offset / 2.0
        } else {
            j as f32 * self.fret_width + self.zero_fret_offset - self.fret_width / 2.0
        }
    }

    /// Marker for grid string `string`, fret `fret` (`fret` in `[0, num_frets]`).
    pub fn marker(&self, string: usize, fret: usize) -> Marker {
        let y = self.row(string) * self.string_height
            + self.string_height / 2.0
            + self.string_padding / 4.0;
        let open = fret == 0;
        Marker {
            center: Vec2::new(self.fret_center_x(fret), y),
            radius: if open {
                self.note_radius / 2.0
            } else {
                self.note_radius
            },
            open,
        }
    }

    /// Baseline for fret-number inlays, centered in the strip below the strings.
    #[inline]
    pub fn inlay_y(&self) -> f32 {
        self.height - self.string_padding / 2.0
    }
}
