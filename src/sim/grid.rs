//! Background grid

use glam::Vec2;

use super::entity::{Entity, TickContext};
use super::input::InputKey;
use crate::colors;
use crate::renderer::{LineStyle, Surface};

const GRID_LINE: LineStyle = LineStyle {
    width: 1.0,
    color: colors::ORANGE,
};

#[derive(Debug, Clone)]
pub struct Grid {
    cell_width: f32,
    cell_height: f32,
    rows: u32,
    cols: u32,
    width: f32,
    height: f32,
    visible: bool,
}

impl Grid {
    pub fn new(cell_width: f32, cell_height: f32, visible: bool) -> Self {
        Self {
            cell_width,
            cell_height,
            rows: 0,
            cols: 0,
            width: 0.0,
            height: 0.0,
            visible,
        }
    }

    pub fn rows(&self) -> u32 {
        self.rows
    }

    pub fn cols(&self) -> u32 {
        self.cols
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }
}

impl Entity for Grid {
    fn update(&mut self, ctx: &TickContext<'_>) {
        self.width = ctx.geometry.width;
        self.height = ctx.geometry.height;
        self.rows = (self.height / self.cell_height).ceil() as u32;
        self.cols = (self.width / self.cell_width).ceil() as u32;

        if ctx.input.is_key_clicked(InputKey::G) {
            self.visible = !self.visible;
        }
    }

    fn draw(&self, surface: &mut dyn Surface) {
        if !self.visible {
            return;
        }

        // Interior lines only: the surface border needs none
        for row in 1..self.rows {
            let y = row as f32 * self.cell_height;
            surface.draw_line(Vec2::new(0.0, y), Vec2::new(self.width, y), GRID_LINE);
        }
        for col in 1..self.cols {
            let x = col as f32 * self.cell_width;
            surface.draw_line(Vec2::new(x, 0.0), Vec2::new(x, self.height), GRID_LINE);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::CommandBuffer;
    use crate::sim::entity::Geometry;
    use crate::sim::input::InputState;
    use std::cell::RefCell;

    fn update(grid: &mut Grid, input: &InputState, width: f32, height: f32) {
        let pending = RefCell::new(Vec::new());
        let ctx = TickContext::new(Geometry { width, height }, 16.0, input, 1, &pending);
        grid.update(&ctx);
    }

    #[test]
    fn test_rows_and_cols_round_up() {
        let mut grid = Grid::new(64.0, 64.0, true);
        update(&mut grid, &InputState::new(), 900.0, 512.0);
        assert_eq!(grid.cols(), 15);
        assert_eq!(grid.rows(), 8);

        let mut surface = CommandBuffer::new(900, 512);
        grid.draw(&mut surface);
        assert_eq!(surface.lines().count(), 14 + 7);
    }

    #[test]
    fn test_g_click_hides_grid() {
        let mut grid = Grid::new(64.0, 64.0, true);
        let mut input = InputState::new();
        input.press(InputKey::G);
        input.update();
        update(&mut grid, &input, 896.0, 512.0);
        assert!(!grid.is_visible());

        let mut surface = CommandBuffer::new(896, 512);
        grid.draw(&mut surface);
        assert_eq!(surface.commands().len(), 0);
    }
}
