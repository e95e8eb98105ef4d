//! Keyboard-driven rectangle
//!
//! Each tick the player resolves its direction from clicked keys, clamps its
//! speed against the surface bounds, then moves along exactly one axis by a
//! fixed pixel step. Movement is not scaled by `delta_time`.

use glam::Vec2;

use super::collision;
use super::direction::Direction;
use super::entity::{Entity, TickContext};
use super::input::InputKey;
use super::points_map::PointsMap;
use crate::colors;
use crate::renderer::{LineStyle, Surface, TextStyle};
use crate::settings::{HelperOverlay, PlayerTuning};

/// Side length of helper markers
const MARKER_SIZE: f32 = 10.0;

const HELPER_TEXT: TextStyle = TextStyle {
    color: colors::RED,
    font_size: 16.0,
    font_family: "'Yanone Kaffeesatz'",
};

#[derive(Debug, Clone)]
pub struct Player {
    position: Vec2,
    width: f32,
    height: f32,
    initial_speed: f32,
    speed: f32,
    direction: Direction,
    points_map: PointsMap,
    overlay: HelperOverlay,
    show_helpers: bool,
}

impl Player {
    /// Spawn a player centered on `position`
    pub fn new(position: Vec2, tuning: PlayerTuning, overlay: HelperOverlay) -> Self {
        Self {
            position,
            width: tuning.width,
            height: tuning.height,
            initial_speed: tuning.speed,
            speed: tuning.speed,
            direction: Direction::None,
            points_map: PointsMap::new(position, tuning.width, tuning.height),
            overlay,
            show_helpers: overlay.visible,
        }
    }

    pub fn position(&self) -> Vec2 {
        self.position
    }

    pub fn speed(&self) -> f32 {
        self.speed
    }

    pub fn initial_speed(&self) -> f32 {
        self.initial_speed
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn points_map(&self) -> &PointsMap {
        &self.points_map
    }

    pub fn show_helpers(&self) -> bool {
        self.show_helpers
    }

    fn advance(&mut self) {
        let step = self.direction.unit() * self.speed;

        if self.direction.is_vertical() {
            self.position.y += step.y;
            self.points_map.update(None, Some(self.position.y));
        } else if self.direction.is_horizontal() {
            self.position.x += step.x;
            self.points_map.update(Some(self.position.x), None);
        }
    }

    fn draw_helpers(&self, surface: &mut dyn Surface) {
        let map = &self.points_map;
        let half = MARKER_SIZE * 0.5;

        if self.overlay.center {
            surface.draw_rectangle(
                map.center - Vec2::splat(half),
                MARKER_SIZE,
                MARKER_SIZE,
                colors::RED,
            );
        }

        if self.overlay.direction {
            let target = match self.direction {
                Direction::Top => Some(map.top_center),
                Direction::Right => Some(map.right_center),
                Direction::Bottom => Some(map.bottom_center),
                Direction::Left => Some(map.left_center),
                Direction::None => None,
            };
            if let Some(target) = target {
                let style = LineStyle {
                    color: colors::RED,
                    ..Default::default()
                };
                surface.draw_line(map.center, target, style);
            }
        }

        if self.overlay.text {
            self.draw_text_helpers(surface);
        }

        if self.overlay.corners {
            // Markers sit inside the rectangle, flush with each corner
            let corners = [
                map.top_left,
                map.top_right - Vec2::new(MARKER_SIZE, 0.0),
                map.bottom_right - Vec2::splat(MARKER_SIZE),
                map.bottom_left - Vec2::new(0.0, MARKER_SIZE),
            ];
            for corner in corners {
                surface.draw_rectangle(corner, MARKER_SIZE, MARKER_SIZE, colors::YELLOW);
            }
        }

        if self.overlay.edge_centers {
            let edges = [
                map.top_center - Vec2::new(half, 0.0),
                map.right_center - Vec2::new(MARKER_SIZE, half),
                map.bottom_center - Vec2::new(half, MARKER_SIZE),
                map.left_center - Vec2::new(0.0, half),
            ];
            for edge in edges {
                surface.draw_rectangle(edge, MARKER_SIZE, MARKER_SIZE, colors::PURPLE);
            }
        }
    }

    /// Position and speed read-outs, above the rectangle when there is room
    fn draw_text_helpers(&self, surface: &mut dyn Surface) {
        let map = &self.points_map;
        let lines = [
            format!("x: {}", map.top_left.x),
            format!("y: {}", map.top_left.y),
            format!("Speed: {}", self.speed),
        ];

        let (anchor, offsets) = if map.top_center.y >= self.height {
            (map.top_left, [-50.0, -30.0, -10.0])
        } else {
            (map.bottom_left, [55.0, 35.0, 15.0])
        };

        for (text, dy) in lines.iter().zip(offsets) {
            surface.draw_text(anchor + Vec2::new(0.0, dy), text, HELPER_TEXT);
        }
    }
}

impl Entity for Player {
    fn update(&mut self, ctx: &TickContext<'_>) {
        let input = ctx.input;

        let direction = self.direction.next(input);
        if direction != self.direction {
            log::debug!("Player direction {:?} -> {:?}", self.direction, direction);
            self.direction = direction;
        }

        self.speed = collision::clamp_speed(
            &self.points_map,
            ctx.geometry,
            self.direction,
            self.initial_speed,
        );
        self.advance();

        if input.is_key_clicked(InputKey::X) {
            self.show_helpers = !self.show_helpers;
        }

        log::trace!(
            "Player at ({}, {}) speed {} {:?}",
            self.position.x,
            self.position.y,
            self.speed,
            self.direction
        );
    }

    fn draw(&self, surface: &mut dyn Surface) {
        surface.draw_rectangle(
            self.points_map.top_left,
            self.width,
            self.height,
            colors::GREEN,
        );

        if self.show_helpers {
            self.draw_helpers(surface);
        }
    }
}
