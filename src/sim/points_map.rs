//! Anchor points of an axis-aligned rectangle
//!
//! Every coordinate derived from `center ± size/2` is rounded up (`ceil`) to a
//! whole pixel. Coordinates that equal the center on the unchanged axis are
//! copied verbatim, never rounded. Collision checks compare these rounded
//! edges against the raw surface bounds, so the rounding is observable.

use glam::Vec2;

/// Center, edge-centers and corners of a rectangle
#[derive(Debug, Clone, PartialEq)]
pub struct PointsMap {
    width: f32,
    height: f32,

    pub center: Vec2,

    pub top_center: Vec2,
    pub right_center: Vec2,
    pub bottom_center: Vec2,
    pub left_center: Vec2,

    pub top_left: Vec2,
    pub top_right: Vec2,
    pub bottom_right: Vec2,
    pub bottom_left: Vec2,
}

impl PointsMap {
    /// Compute all nine points for a rectangle centered on `center`
    pub fn new(center: Vec2, width: f32, height: f32) -> Self {
        let left = (center.x - width * 0.5).ceil();
        let right = (center.x + width * 0.5).ceil();
        let top = (center.y - height * 0.5).ceil();
        let bottom = (center.y + height * 0.5).ceil();

        Self {
            width,
            height,
            center,
            top_center: Vec2::new(center.x, top),
            right_center: Vec2::new(right, center.y),
            bottom_center: Vec2::new(center.x, bottom),
            left_center: Vec2::new(left, center.y),
            top_left: Vec2::new(left, top),
            top_right: Vec2::new(right, top),
            bottom_right: Vec2::new(right, bottom),
            bottom_left: Vec2::new(left, bottom),
        }
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    /// Move the center along one or both axes
    ///
    /// Only coordinates on a changed axis are touched.
    pub fn update(&mut self, x: Option<f32>, y: Option<f32>) {
        if let Some(x) = x {
            let left = (x - self.width * 0.5).ceil();
            let right = (x + self.width * 0.5).ceil();

            self.center.x = x;

            self.top_center.x = x;
            self.right_center.x = right;
            self.bottom_center.x = x;
            self.left_center.x = left;

            self.top_left.x = left;
            self.top_right.x = right;
            self.bottom_right.x = right;
            self.bottom_left.x = left;
        }

        if let Some(y) = y {
            let top = (y - self.height * 0.5).ceil();
            let bottom = (y + self.height * 0.5).ceil();

            self.center.y = y;

            self.top_center.y = top;
            self.right_center.y = y;
            self.bottom_center.y = bottom;
            self.left_center.y = y;

            self.top_left.y = top;
            self.top_right.y = top;
            self.bottom_right.y = bottom;
            self.bottom_left.y = bottom;
        }
    }

    /// All nine points, center first, then edges clockwise from top, then
    /// corners clockwise from top-left
    pub fn points(&self) -> [Vec2; 9] {
        [
            self.center,
            self.top_center,
            self.right_center,
            self.bottom_center,
            self.left_center,
            self.top_left,
            self.top_right,
            self.bottom_right,
            self.bottom_left,
        ]
    }
}
