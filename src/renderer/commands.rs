//! Recording surface
//!
//! Keeps the draw calls issued since the last `clear()` so headless runs and
//! tests can inspect what a frame would have put on screen.

use glam::Vec2;

use super::{Color, LineStyle, Surface, TextStyle};

/// A single recorded draw call
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Rectangle {
        position: Vec2,
        width: f32,
        height: f32,
        color: Color,
    },
    Line {
        start: Vec2,
        end: Vec2,
        style: LineStyle,
    },
    Text {
        position: Vec2,
        text: String,
        style: TextStyle,
    },
}

#[derive(Debug, Clone)]
pub struct CommandBuffer {
    width: u32,
    height: u32,
    commands: Vec<DrawCommand>,
    clear_count: u64,
}

impl CommandBuffer {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            commands: Vec::new(),
            clear_count: 0,
        }
    }

    /// Draw calls issued since the last clear, in order
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// How many times the surface has been cleared
    pub fn clear_count(&self) -> u64 {
        self.clear_count
    }

    pub fn rectangles(&self) -> impl Iterator<Item = &DrawCommand> {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Rectangle { .. }))
    }

    pub fn lines(&self) -> impl Iterator<Item = &DrawCommand> {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Line { .. }))
    }

    /// Text of every recorded text command
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }
}

impl Surface for CommandBuffer {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn clear(&mut self) {
        self.commands.clear();
        self.clear_count += 1;
    }

    fn draw_rectangle(&mut self, position: Vec2, width: f32, height: f32, color: Color) {
        self.commands.push(DrawCommand::Rectangle {
            position,
            width,
            height,
            color,
        });
    }

    fn draw_line(&mut self, start: Vec2, end: Vec2, style: LineStyle) {
        self.commands.push(DrawCommand::Line { start, end, style });
    }

    fn draw_text(&mut self, position: Vec2, text: &str, style: TextStyle) {
        self.commands.push(DrawCommand::Text {
            position,
            text: text.to_owned(),
            style,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colors;

    #[test]
    fn test_clear_drops_recorded_commands() {
        let mut buffer = CommandBuffer::new(100, 50);
        buffer.draw_rectangle(Vec2::ZERO, 10.0, 10.0, colors::GREEN);
        buffer.draw_text(Vec2::new(1.0, 2.0), "hi", TextStyle::default());
        assert_eq!(buffer.commands().len(), 2);
        assert_eq!(buffer.texts().collect::<Vec<_>>(), vec!["hi"]);

        buffer.clear();
        assert!(buffer.commands().is_empty());
        assert_eq!(buffer.clear_count(), 1);
        assert_eq!((buffer.width(), buffer.height()), (100, 50));
    }
}
