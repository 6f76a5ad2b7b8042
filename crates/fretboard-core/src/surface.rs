//! The drawing surface seen by the renderer, plus an in-memory recorder.

use crate::degree::Color;
use glam::Vec2;

/// Immediate-mode 2D drawing target.
///
/// Text is drawn centered on `position`, both horizontally and vertically.
pub trait Surface {
    /// Clear the `width` x `height` region starting at the origin.
    fn clear(&mut self, width: f32, height: f32);
    fn set_stroke_color(&mut self, color: Color);
    fn set_fill_color(&mut self, color: Color);
    fn set_line_width(&mut self, width: f32);
    fn set_font(&mut self, font: &str);
    fn stroke_line(&mut self, from: Vec2, to: Vec2);
    fn fill_circle(&mut self, center: Vec2, radius: f32);
    fn stroke_circle(&mut self, center: Vec2, radius: f32);
    fn fill_text(&mut self, text: &str, position: Vec2);
}

#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    StrokeColor(Color),
    FillColor(Color),
    LineWidth(f32),
    Font(String),
    Line { from: Vec2, to: Vec2 },
    FillCircle { center: Vec2, radius: f32 },
    StrokeCircle { center: Vec2, radius: f32 },
    Text { text: String, position: Vec2 },
}

/// Headless surface that records what would have been painted.
///
/// `clear` discards everything recorded so far, mirroring a full canvas
/// clear, so two recorders hold equal commands exactly when the painted
/// results are equal.
#[derive(Clone, Debug, Default)]
pub struct RecordingSurface {
    commands: Vec<DrawCommand>,
    clears: usize,
    size: (f32, f32),
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Number of `clear` calls seen, i.e. full repaints started.
    pub fn clear_count(&self) -> usize {
        self.clears
    }

    /// Size passed to the last `clear`.
    pub fn last_clear_size(&self) -> (f32, f32) {
        self.size
    }

    pub fn lines(&self) -> impl Iterator<Item = (Vec2, Vec2)> + '_ {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Line { from, to } => Some((*from, *to)),
            _ => None,
        })
    }

    pub fn texts(&self) -> impl Iterator<Item = (&str, Vec2)> + '_ {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Text { text, position } => Some((text.as_str(), *position)),
            _ => None,
        })
    }

    /// Filled circles together with the fill color active when each was drawn.
    pub fn filled_circles(&self) -> Vec<(Vec2, f32, Option<Color>)> {
        let mut fill = None;
        let mut out = Vec::new();
        for c in &self.commands {
            match c {
                DrawCommand::FillColor(color) => fill = Some(*color),
                DrawCommand::FillCircle { center, radius } => out.push((*center, *radius, fill)),
                _ => {}
            }
        }
        out
    }

    pub fn stroked_circles(&self) -> impl Iterator<Item = (Vec2, f32)> + '_ {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::StrokeCircle { center, radius } => Some((*center, *radius)),
            _ => None,
        })
    }
}

impl Surface for RecordingSurface {
    fn clear(&mut self, width: f32, height: f32) {
        self.commands.clear();
        self.clears += 1;
        self.size = (width, height);
    }

    fn set_stroke_color(&mut self, color: Color) {
        self.commands.push(DrawCommand::StrokeColor(color));
    }

    fn set_fill_color(&mut self, color: Color) {
        self.commands.push(DrawCommand::FillColor(color));
    }

    fn set_line_width(&mut self, width: f32) {
        self.commands.push(DrawCommand::LineWidth(width));
    }

    fn set_font(&mut self, font: &str) {
        self.commands.push(DrawCommand::Font(font.to_string()));
    }

    fn stroke_line(&mut self, from: Vec2, to: Vec2) {
        self.commands.push(DrawCommand::Line { from, to });
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32) {
        self.commands.push(DrawCommand::FillCircle { center, radius });
    }

    fn stroke_circle(&mut self, center: Vec2, radius: f32) {
        self.commands.push(DrawCommand::StrokeCircle { center, radius });
    }

    fn fill_text(&mut self, text: &str, position: Vec2) {
        self.commands.push(DrawCommand::Text {
            text: text.to_string(),
            position,
        });
    }
}
