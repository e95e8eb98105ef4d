//! Drawing surface abstraction
//!
//! The simulation only ever talks to a [`Surface`]. Two backends exist:
//! - [`CommandBuffer`]: records draw calls (headless runs and tests)
//! - `CanvasSurface`: browser `CanvasRenderingContext2d` (wasm32 only)

pub mod commands;
#[cfg(target_arch = "wasm32")]
pub mod canvas;

pub use commands::{CommandBuffer, DrawCommand};
#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasSurface;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::colors;

/// 8-bit RGBA color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }

    /// CSS color string (`#rrggbb` when opaque, `rgba(...)` otherwise)
    pub fn to_css(&self) -> String {
        if self.a == 255 {
            format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            format!(
                "rgba({}, {}, {}, {:.3})",
                self.r,
                self.g,
                self.b,
                self.a as f32 / 255.0
            )
        }
    }
}

/// Stroke parameters for [`Surface::draw_line`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineStyle {
    pub width: f32,
    pub color: Color,
}

impl Default for LineStyle {
    fn default() -> Self {
        Self {
            width: 1.0,
            color: colors::SNOW_STORM,
        }
    }
}

/// Font parameters for [`Surface::draw_text`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextStyle {
    pub color: Color,
    pub font_size: f32,
    pub font_family: &'static str,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            color: colors::SNOW_STORM,
            font_size: 16.0,
            font_family: "Arial",
        }
    }
}

impl TextStyle {
    /// CSS font shorthand, e.g. `24px Arial`
    pub fn css_font(&self) -> String {
        format!("{}px {}", self.font_size, self.font_family)
    }
}

/// A fixed-size 2D drawing target
///
/// Positions are in surface pixels with the origin at the top-left corner.
pub trait Surface {
    fn width(&self) -> u32;
    fn height(&self) -> u32;

    /// Erase everything drawn since the previous clear
    fn clear(&mut self);

    /// Fill an axis-aligned rectangle whose top-left corner is `position`
    fn draw_rectangle(&mut self, position: Vec2, width: f32, height: f32, color: Color);

    fn draw_line(&mut self, start: Vec2, end: Vec2, style: LineStyle);

    /// Draw `text` with its baseline starting at `position`
    fn draw_text(&mut self, position: Vec2, text: &str, style: TextStyle);
}
