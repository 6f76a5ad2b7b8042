use fretboard_core::{Color, Surface};
use glam::Vec2;
use std::f64::consts::TAU;
use wasm_bindgen::JsCast;
use web_sys as web;

/// [`Surface`] backed by a `<canvas>` 2D context.
///
/// Drawing happens in CSS pixels; the backing store is scaled by
/// `devicePixelRatio` in [`CanvasSurface::fit_to`].
pub struct CanvasSurface {
    canvas: web::HtmlCanvasElement,
    ctx: web::CanvasRenderingContext2d,
}

impl CanvasSurface {
    pub fn new(canvas: web::HtmlCanvasElement) -> anyhow::Result<Self> {
        let ctx = canvas
            .get_context("2d")
            .map_err(|e| anyhow::anyhow!("get_context failed: {:?}", e))?
            .ok_or_else(|| anyhow::anyhow!("canvas has no 2d context"))?
            .dyn_into::<web::CanvasRenderingContext2d>()
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;
        ctx.set_text_align("center");
        ctx.set_text_baseline("middle");
        Ok(Self { canvas, ctx })
    }

    /// Size the backing store for a `css_width` x `css_height` drawing area.
    /// Returns true when the backing store changed, which also wipes it.
    pub fn fit_to(&mut self, css_width: f32, css_height: f32) -> bool {
        let dpr = web::window().map(|w| w.device_pixel_ratio()).unwrap_or(1.0);
        let w_px = ((css_width.max(0.0) as f64 * dpr) as u32).max(1);
        let h_px = ((css_height.max(0.0) as f64 * dpr) as u32).max(1);
        if self.canvas.width() == w_px && self.canvas.height() == h_px {
            return false;
        }
        self.canvas.set_width(w_px);
        self.canvas.set_height(h_px);
        // resizing resets all context state
        _ = self.ctx.set_transform(dpr, 0.0, 0.0, dpr, 0.0, 0.0);
        self.ctx.set_text_align("center");
        self.ctx.set_text_baseline("middle");
        true
    }
}

impl Surface for CanvasSurface {
    fn clear(&mut self, width: f32, height: f32) {
        // the backing store can be larger than the board
        let dpr = web::window().map(|w| w.device_pixel_ratio()).unwrap_or(1.0);
        let w = (self.canvas.width() as f64 / dpr).max(width as f64);
        let h = (self.canvas.height() as f64 / dpr).max(height as f64);
        self.ctx.clear_rect(0.0, 0.0, w, h);
    }

    fn set_stroke_color(&mut self, color: Color) {
        self.ctx.set_stroke_style_str(&color.to_css());
    }

    fn set_fill_color(&mut self, color: Color) {
        self.ctx.set_fill_style_str(&color.to_css());
    }

    fn set_line_width(&mut self, width: f32) {
        self.ctx.set_line_width(width as f64);
    }

    fn set_font(&mut self, font: &str) {
        self.ctx.set_font(font);
    }

    fn stroke_line(&mut self, from: Vec2, to: Vec2) {
        self.ctx.begin_path();
        self.ctx.move_to(from.x as f64, from.y as f64);
        self.ctx.line_to(to.x as f64, to.y as f64);
        self.ctx.stroke();
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32) {
        if self.circle_path(center, radius) {
            self.ctx.fill();
        }
    }

    fn stroke_circle(&mut self, center: Vec2, radius: f32) {
        if self.circle_path(center, radius) {
            self.ctx.stroke();
        }
    }

    fn fill_text(&mut self, text: &str, position: Vec2) {
        _ = self
            .ctx
            .fill_text(text, position.x as f64, position.y as f64);
    }
}

impl CanvasSurface {
    fn circle_path(&self, center: Vec2, radius: f32) -> bool {
        if radius <= 0.0 {
            return false;
        }
        self.ctx.begin_path();
        self.ctx
            .arc(center.x as f64, center.y as f64, radius as f64, 0.0, TAU)
            .is_ok()
    }
}
