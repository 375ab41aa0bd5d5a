//! Canvas 2D surface

use glam::Vec2;
use std::f64::consts::TAU;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, CanvasWindingRule, HtmlCanvasElement};

use crate::sim::Circle;
use crate::surface::{Rgb, Surface};

/// A `<canvas>` element and its 2D context
pub struct Canvas2dSurface {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
}

impl Canvas2dSurface {
    pub fn new(canvas: HtmlCanvasElement) -> Result<Self, JsValue> {
        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("2d context unavailable"))?
            .dyn_into::<CanvasRenderingContext2d>()?;
        Ok(Self { canvas, ctx })
    }

    pub fn canvas(&self) -> &HtmlCanvasElement {
        &self.canvas
    }

    pub fn size(&self) -> (u32, u32) {
        (self.canvas.width(), self.canvas.height())
    }

    fn circle_path(&self, center: Vec2, radius: f32) {
        if let Err(e) = self.ctx.arc(
            f64::from(center.x),
            f64::from(center.y),
            f64::from(radius.max(0.0)),
            0.0,
            TAU,
        ) {
            log::warn!("Canvas arc failed: {:?}", e);
        }
    }
}

impl Surface for Canvas2dSurface {
    fn resize(&mut self, width: u32, height: u32) {
        self.canvas.set_width(width);
        self.canvas.set_height(height);
    }

    fn clear(&mut self, color: Rgb) {
        self.ctx.set_fill_style_str(&color.to_css());
        self.ctx.fill_rect(
            0.0,
            0.0,
            f64::from(self.canvas.width()),
            f64::from(self.canvas.height()),
        );
    }

    fn push_exclusion_mask(&mut self, circles: &[Circle]) {
        self.ctx.save();
        let (w, h) = self.size();
        // Clips intersect, so one (canvas minus circle) clip per circle
        // leaves the canvas minus the union of all circles
        for circle in circles {
            self.ctx.begin_path();
            self.ctx.rect(0.0, 0.0, f64::from(w), f64::from(h));
            let radius = circle.disc_radius();
            self.ctx.move_to(
                f64::from(circle.center.x + radius),
                f64::from(circle.center.y),
            );
            self.circle_path(circle.center, radius);
            self.ctx
                .clip_with_canvas_winding_rule(CanvasWindingRule::Evenodd);
        }
    }

    fn pop_mask(&mut self) {
        self.ctx.restore();
    }

    fn fill_rect(&mut self, origin: Vec2, size: Vec2, color: Rgb) {
        self.ctx.set_fill_style_str(&color.to_css());
        self.ctx.fill_rect(
            f64::from(origin.x),
            f64::from(origin.y),
            f64::from(size.x),
            f64::from(size.y),
        );
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgb) {
        self.ctx.set_fill_style_str(&color.to_css());
        self.ctx.begin_path();
        self.circle_path(center, radius);
        self.ctx.fill();
    }

    fn stroke_line(&mut self, from: Vec2, to: Vec2, color: Rgb, weight: f32) {
        self.ctx.set_stroke_style_str(&color.to_css());
        self.ctx.set_line_width(f64::from(weight));
        self.ctx.begin_path();
        self.ctx.move_to(f64::from(from.x), f64::from(from.y));
        self.ctx.line_to(f64::from(to.x), f64::from(to.y));
        self.ctx.stroke();
    }
}
