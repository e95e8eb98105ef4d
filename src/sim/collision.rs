//! Surface boundary collision and speed clamping
//!
//! An entity about to cross a surface edge slows down so that its edge lands
//! exactly on the bound. Positions never leave the surface by construction.

use super::direction::Direction;
use super::entity::Geometry;
use super::points_map::PointsMap;

/// Which surface edges a rectangle would reach by moving `reach` pixels
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BoundaryCollision {
    pub top: bool,
    pub right: bool,
    pub bottom: bool,
    pub left: bool,
}

impl BoundaryCollision {
    pub fn detect(points: &PointsMap, geometry: Geometry, reach: f32) -> Self {
        Self {
            top: points.top_center.y - reach <= 0.0,
            right: points.right_center.x + reach >= geometry.width,
            bottom: points.bottom_center.y + reach >= geometry.height,
            left: points.left_center.x - reach <= 0.0,
        }
    }

    /// Collision flag for the edge `direction` is heading toward
    pub fn toward(&self, direction: Direction) -> bool {
        match direction {
            Direction::Top => self.top,
            Direction::Right => self.right,
            Direction::Bottom => self.bottom,
            Direction::Left => self.left,
            Direction::None => false,
        }
    }

    pub fn any(&self) -> bool {
        self.top || self.right || self.bottom || self.left
    }
}

/// Gap between the rectangle edge facing `direction` and the matching bound
///
/// Negative when the edge is already past the bound.
pub fn distance_to_bound(points: &PointsMap, geometry: Geometry, direction: Direction) -> f32 {
    match direction {
        Direction::Top => points.top_center.y,
        Direction::Right => geometry.width - points.right_center.x,
        Direction::Bottom => geometry.height - points.bottom_center.y,
        Direction::Left => points.left_center.x,
        Direction::None => f32::INFINITY,
    }
}

/// Speed to use this tick when moving in `direction`
///
/// `nominal` when the move is clear of every bound, otherwise the remaining
/// gap clamped to `[0, nominal]`.
pub fn clamp_speed(
    points: &PointsMap,
    geometry: Geometry,
    direction: Direction,
    nominal: f32,
) -> f32 {
    let collision = BoundaryCollision::detect(points, geometry, nominal);
    if !collision.toward(direction) {
        return nominal;
    }

    distance_to_bound(points, geometry, direction)
        .max(0.0)
        .min(nominal)
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    const SURFACE: Geometry = Geometry {
        width: 896.0,
        height: 512.0,
    };

    #[test]
    fn test_detect_near_right_edge() {
        let points = PointsMap::new(Vec2::new(896.0 - 32.0 - 2.0, 256.0), 64.0, 64.0);
        let collision = BoundaryCollision::detect(&points, SURFACE, 5.0);
        assert!(collision.right);
        assert!(!collision.left && !collision.top && !collision.bottom);
    }

    #[test]
    fn test_detect_is_inclusive() {
        // Edge exactly `reach` away from the top bound counts as a collision
        let points = PointsMap::new(Vec2::new(400.0, 37.0), 64.0, 64.0);
        assert_eq!(points.top_center.y, 5.0);
        assert!(BoundaryCollision::detect(&points, SURFACE, 5.0).top);
        assert!(!BoundaryCollision::detect(&points, SURFACE, 4.0).top);
    }

    #[test]
    fn test_clamp_speed_lands_on_bound() {
        let points = PointsMap::new(Vec2::new(862.0, 256.0), 64.0, 64.0);
        assert_eq!(clamp_speed(&points, SURFACE, Direction::Right, 5.0), 2.0);
        // Other directions are unaffected
        assert_eq!(clamp_speed(&points, SURFACE, Direction::Left, 5.0), 5.0);
        assert_eq!(clamp_speed(&points, SURFACE, Direction::Top, 5.0), 5.0);
    }

    #[test]
    fn test_clamp_speed_zero_at_bound() {
        let points = PointsMap::new(Vec2::new(32.0, 480.0), 64.0, 64.0);
        assert_eq!(clamp_speed(&points, SURFACE, Direction::Left, 5.0), 0.0);
        assert_eq!(clamp_speed(&points, SURFACE, Direction::Bottom, 5.0), 0.0);
    }

    #[test]
    fn test_clamp_speed_never_negative() {
        // Already outside the surface: stay put rather than back off
        let points = PointsMap::new(Vec2::new(-10.0, 256.0), 64.0, 64.0);
        assert_eq!(clamp_speed(&points, SURFACE, Direction::Left, 5.0), 0.0);
    }

    #[test]
    fn test_clamp_speed_negative_nominal_does_not_panic() {
        let points = PointsMap::new(Vec2::new(862.0, 256.0), 64.0, 64.0);
        assert!(clamp_speed(&points, SURFACE, Direction::Right, -5.0) <= 0.0);
    }

    #[test]
    fn test_no_direction_never_collides() {
        let points = PointsMap::new(Vec2::new(32.0, 32.0), 64.0, 64.0);
        let collision = BoundaryCollision::detect(&points, SURFACE, 5.0);
        assert!(collision.any());
        assert!(!collision.toward(Direction::None));
        assert_eq!(clamp_speed(&points, SURFACE, Direction::None, 5.0), 5.0);
    }
}
