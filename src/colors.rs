//! Nord palette
//!
//! <https://www.nordtheme.com/docs/colors-and-palettes>

use crate::renderer::Color;

pub const SNOW_STORM: Color = Color::rgb(0xEC, 0xEF, 0xF4);
pub const FROST: Color = Color::rgb(0x88, 0xC0, 0xD0);
pub const RED: Color = Color::rgb(0xBF, 0x61, 0x6A);
pub const ORANGE: Color = Color::rgb(0xD0, 0x87, 0x70);
pub const YELLOW: Color = Color::rgb(0xEB, 0xCB, 0x8B);
pub const GREEN: Color = Color::rgb(0xA3, 0xBE, 0x8C);
pub const PURPLE: Color = Color::rgb(0xB4, 0x8E, 0xAD);
