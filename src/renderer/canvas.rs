//! Browser 2D canvas backend

use glam::Vec2;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use super::{Color, LineStyle, Surface, TextStyle};
use crate::error::{Error, Result};

pub struct CanvasSurface {
    canvas: HtmlCanvasElement,
    context: CanvasRenderingContext2d,
}

impl CanvasSurface {
    /// Look up the canvas by CSS selector, size it, and grab its 2D context
    pub fn from_selector(selector: &str, width: u32, height: u32) -> Result<Self> {
        let not_found = || Error::SurfaceNotFound {
            selector: selector.to_owned(),
        };

        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or(Error::WindowUnavailable)?;

        let canvas: HtmlCanvasElement = document
            .query_selector(selector)
            .ok()
            .flatten()
            .ok_or_else(not_found)?
            .dyn_into()
            .map_err(|_| not_found())?;

        let context: CanvasRenderingContext2d = canvas
            .get_context("2d")
            .ok()
            .flatten()
            .ok_or(Error::ContextUnavailable)?
            .dyn_into()
            .map_err(|_| Error::ContextUnavailable)?;

        canvas.set_width(width);
        canvas.set_height(height);

        log::info!("Canvas {} ready ({}x{})", selector, width, height);

        Ok(Self { canvas, context })
    }
}

impl Surface for CanvasSurface {
    fn width(&self) -> u32 {
        self.canvas.width()
    }

    fn height(&self) -> u32 {
        self.canvas.height()
    }

    fn clear(&mut self) {
        self.context
            .clear_rect(0.0, 0.0, self.width() as f64, self.height() as f64);
    }

    fn draw_rectangle(&mut self, position: Vec2, width: f32, height: f32, color: Color) {
        let ctx = &self.context;
        ctx.save();
        ctx.set_fill_style_str(&color.to_css());
        ctx.fill_rect(
            position.x as f64,
            position.y as f64,
            width as f64,
            height as f64,
        );
        ctx.restore();
    }

    fn draw_line(&mut self, start: Vec2, end: Vec2, style: LineStyle) {
        let ctx = &self.context;
        ctx.save();
        ctx.set_stroke_style_str(&style.color.to_css());
        ctx.set_line_width(style.width as f64);
        ctx.begin_path();
        ctx.move_to(start.x as f64, start.y as f64);
        ctx.line_to(end.x as f64, end.y as f64);
        ctx.stroke();
        ctx.restore();
    }

    fn draw_text(&mut self, position: Vec2, text: &str, style: TextStyle) {
        let ctx = &self.context;
        ctx.save();
        ctx.set_fill_style_str(&style.color.to_css());
        ctx.set_font(&style.css_font());
        if let Err(e) = ctx.fill_text(text, position.x as f64, position.y as f64) {
            log::warn!("fill_text failed: {:?}", e);
        }
        ctx.restore();
    }
}
