//! Paints a fretboard onto a [`Surface`].
//!
//! Every call starts with a full clear, so rendering the same inputs twice
//! leaves the surface in the same state.

use crate::config::{BoardConfig, EmptyMarkerStyle};
use crate::constants::{
    FONT_FAMILY, FRET_LINE_WIDTH, INLAY_FONT_PX, LABEL_COLOR, LABEL_FONT_SCALE, LINE_COLOR,
    MARKED_FRETS, OUTLINE_LINE_WIDTH, STRING_LINE_WIDTH,
};
use crate::degree::{classify, Color, DegreeColorMap};
use crate::geometry::BoardGeometry;
use crate::resolver::NoteGrid;
use crate::surface::Surface;
use glam::Vec2;

pub fn render<S: AsRef<str>>(
    surface: &mut dyn Surface,
    geometry: &BoardGeometry,
    grid: &NoteGrid,
    scale_notes: &[S],
    colors: &DegreeColorMap,
    config: &BoardConfig,
) {
    surface.clear(geometry.width, geometry.height);
    if geometry.is_degenerate() {
        return;
    }
    draw_frets(surface, geometry);
    draw_strings(surface, geometry);
    draw_inlays(surface, geometry, colors, config.start_fret());
    draw_notes(surface, geometry, grid, scale_notes, colors, config.empty_style());
}

fn draw_frets(surface: &mut dyn Surface, g: &BoardGeometry) {
    surface.set_stroke_color(Color::from_array(LINE_COLOR));
    surface.set_line_width(FRET_LINE_WIDTH);
    for x in g.fret_xs() {
        surface.stroke_line(Vec2::new(x, 0.0), Vec2::new(x, g.height));
    }
}

fn draw_strings(surface: &mut dyn Surface, g: &BoardGeometry) {
    surface.set_stroke_color(Color::from_array(LINE_COLOR));
    surface.set_line_width(STRING_LINE_WIDTH);
    for i in 0..g.num_strings {
        let y = g.string_y(i);
        surface.stroke_line(Vec2::new(g.zero_fret_offset, y), Vec2::new(g.width, y));
    }
}

/// Column indices (relative to `start_fret`) that carry a fret-number inlay.
pub fn inlay_frets(num_frets: usize, start_fret: usize) -> impl Iterator<Item = usize> {
    (0..num_frets).filter(move |&j| MARKED_FRETS.contains(&start_fret.saturating_add(j)))
}

fn draw_inlays(
    surface: &mut dyn Surface,
    g: &BoardGeometry,
    colors: &DegreeColorMap,
    start_fret: usize,
) {
    surface.set_font(&format!("{}px {}", INLAY_FONT_PX, FONT_FAMILY));
    surface.set_fill_color(colors.other);
    for j in inlay_frets(g.num_frets, start_fret) {
        let label = (start_fret + j).to_string();
        surface.fill_text(&label, Vec2::new(g.fret_center_x(j), g.inlay_y()));
    }
}

fn draw_notes<S: AsRef<str>>(
    surface: &mut dyn Surface,
    g: &BoardGeometry,
    grid: &NoteGrid,
    scale_notes: &[S],
    colors: &DegreeColorMap,
    empty_style: EmptyMarkerStyle,
) {
    let label_px = (g.note_radius * LABEL_FONT_SCALE).round().max(1.0);
    surface.set_font(&format!("{}px {}", label_px, FONT_FAMILY));
    surface.set_line_width(OUTLINE_LINE_WIDTH);

    for string in 0..g.num_strings {
        for fret in 0..=g.num_frets {
            let marker = g.marker(string, fret);
            match grid.cell(string, fret) {
                Some(note) => {
                    let name = note.pitch.name();
                    let degree = classify(name, scale_notes);
                    surface.set_fill_color(colors.color_for(degree));
                    surface.fill_circle(marker.center, marker.radius);
                    surface.set_fill_color(Color::from_array(LABEL_COLOR));
                    surface.fill_text(name, marker.center);
                }
                // open-string dots are always drawn solid
                None if marker.open => {
                    surface.set_fill_color(colors.empty_color());
                    surface.fill_circle(marker.center, marker.radius);
                }
                None => {
                    if empty_style == EmptyMarkerStyle::Outline {
                        surface.set_stroke_color(colors.empty_color());
                        surface.stroke_circle(marker.center, marker.radius);
                    }
                }
            }
        }
    }
}
