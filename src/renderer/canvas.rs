//! Canvas 2D painter (wasm only)

use std::f64::consts::TAU;

use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use super::shapes::{Scene, Shape};
use crate::error::InitError;

/// Replays a [`Scene`] onto a 2D canvas context
pub struct CanvasPainter {
    ctx: CanvasRenderingContext2d,
    width: f64,
    height: f64,
}

impl CanvasPainter {
    pub fn new(canvas: &HtmlCanvasElement) -> Result<Self, InitError> {
        let ctx = canvas
            .get_context("2d")
            .map_err(|_| InitError::ContextUnavailable)?
            .ok_or(InitError::ContextUnavailable)?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| InitError::ContextUnavailable)?;
        Ok(Self {
            ctx,
            width: canvas.width() as f64,
            height: canvas.height() as f64,
        })
    }

    pub fn paint(&self, scene: &Scene) {
        for shape in &scene.shapes {
            match shape {
                Shape::Clear { background } => {
                    self.ctx.clear_rect(0.0, 0.0, self.width, self.height);
                    if let Some(color) = background {
                        self.ctx.set_fill_style_str(color);
                        self.ctx.fill_rect(0.0, 0.0, self.width, self.height);
                    }
                }
                Shape::Rect { pos, size, color } => {
                    self.ctx.set_fill_style_str(color);
                    self.ctx
                        .fill_rect(pos.x as f64, pos.y as f64, size.x as f64, size.y as f64);
                }
                Shape::Circle {
                    center,
                    radius,
                    color,
                } => {
                    self.ctx.begin_path();
                    // arc() only fails for a negative radius
                    let _ = self
                        .ctx
                        .arc(center.x as f64, center.y as f64, *radius as f64, 0.0, TAU);
                    self.ctx.set_fill_style_str(color);
                    self.ctx.fill();
                    self.ctx.close_path();
                }
                Shape::Text {
                    pos,
                    text,
                    color,
                    font,
                } => {
                    self.ctx.set_fill_style_str(color);
                    self.ctx.set_font(font);
                    if let Err(e) = self.ctx.fill_text(text, pos.x as f64, pos.y as f64) {
                        log::trace!("fill_text failed: {:?}", e);
                    }
                }
            }
        }
    }
}
