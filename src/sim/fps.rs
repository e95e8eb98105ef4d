//! Frames-per-second read-out
//!
//! The first tick of a run reports the raw timestamp as its delta, so that
//! sample is discarded along with any non-positive delta.

use std::collections::VecDeque;

use glam::Vec2;

use super::entity::{Entity, TickContext};
use crate::colors;
use crate::consts::FPS_SAMPLES;
use crate::renderer::{Surface, TextStyle};

const FPS_TEXT: TextStyle = TextStyle {
    color: colors::FROST,
    font_size: 24.0,
    font_family: "Arial",
};

/// Distance of the read-out from the right edge of the surface
const RIGHT_INSET: f32 = 130.0;
const TOP: f32 = 10.0;

#[derive(Debug, Clone)]
pub struct FpsCounter {
    samples: VecDeque<f64>,
    seen_first: bool,
    fps: f64,
    position: Vec2,
}

impl Default for FpsCounter {
    fn default() -> Self {
        Self::new()
    }
}

impl FpsCounter {
    pub fn new() -> Self {
        Self {
            samples: VecDeque::with_capacity(FPS_SAMPLES),
            seen_first: false,
            fps: 0.0,
            position: Vec2::new(0.0, TOP),
        }
    }

    /// Average frames per second over the recent window (0 until measured)
    pub fn fps(&self) -> f64 {
        self.fps
    }

    pub fn label(&self) -> String {
        format!("FPS: {:.2}", self.fps)
    }

    fn record(&mut self, delta_ms: f64) {
        if !self.seen_first {
            self.seen_first = true;
            return;
        }
        if !delta_ms.is_finite() || delta_ms <= 0.0 {
            return;
        }

        if self.samples.len() == FPS_SAMPLES {
            self.samples.pop_front();
        }
        self.samples.push_back(delta_ms);

        let average = self.samples.iter().sum::<f64>() / self.samples.len() as f64;
        self.fps = 1000.0 / average;
    }
}

impl Entity for FpsCounter {
    fn update(&mut self, ctx: &TickContext<'_>) {
        self.position.x = ctx.geometry.width - RIGHT_INSET;
        self.record(ctx.delta_time);
    }

    fn draw(&self, surface: &mut dyn Surface) {
        let baseline = self.position + Vec2::new(0.0, FPS_TEXT.font_size);
        surface.draw_text(baseline, &self.label(), FPS_TEXT);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::{CommandBuffer, DrawCommand};
    use crate::sim::entity::Geometry;
    use crate::sim::input::InputState;
    use std::cell::RefCell;

    fn feed(counter: &mut FpsCounter, delta: f64) {
        let input = InputState::new();
        let pending = RefCell::new(Vec::new());
        let geometry = Geometry {
            width: 896.0,
            height: 512.0,
        };
        counter.update(&TickContext::new(geometry, delta, &input, 1, &pending));
    }

    #[test]
    fn test_first_sample_is_discarded() {
        let mut counter = FpsCounter::new();
        feed(&mut counter, 123_456.0);
        assert_eq!(counter.fps(), 0.0);
        assert_eq!(counter.label(), "FPS: 0.00");

        feed(&mut counter, 20.0);
        assert!((counter.fps() - 50.0).abs() < 1e-9);
    }

    #[test]
    fn test_zero_delta_does_not_divide() {
        let mut counter = FpsCounter::new();
        feed(&mut counter, 0.0);
        feed(&mut counter, 0.0);
        assert_eq!(counter.fps(), 0.0);
        assert!(counter.fps().is_finite());
    }

    #[test]
    fn test_average_over_window() {
        let mut counter = FpsCounter::new();
        feed(&mut counter, 5000.0);
        for _ in 0..FPS_SAMPLES {
            feed(&mut counter, 10.0);
        }
        for _ in 0..FPS_SAMPLES {
            feed(&mut counter, 20.0);
        }
        // Only the latest window counts
        assert!((counter.fps() - 50.0).abs() < 1e-9);
    }

    #[test]
    fn test_draw_anchored_to_right_edge() {
        let mut counter = FpsCounter::new();
        feed(&mut counter, 1.0);
        let mut surface = CommandBuffer::new(896, 512);
        counter.draw(&mut surface);

        match &surface.commands()[0] {
            DrawCommand::Text { position, text, .. } => {
                assert_eq!(*position, Vec2::new(766.0, 34.0));
                assert_eq!(text, "FPS: 0.00");
            }
            other => panic!("unexpected command {:?}", other),
        }
    }
}
