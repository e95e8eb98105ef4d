//! Simulation core
//!
//! Everything that runs inside a tick lives here:
//! - Frame scheduling and the per-tick update/clear/draw protocol
//! - Edge-triggered keyboard state
//! - Rectangle anchor points and boundary collision
//! - The entities themselves
//!
//! Movement is a fixed pixel step per tick. `delta_time` is advisory (FPS
//! read-out) and never scales motion, so speed depends on the refresh rate.

pub mod collision;
pub mod direction;
pub mod entity;
pub mod fps;
pub mod grid;
pub mod input;
pub mod player;
pub mod points_map;
pub mod scene;
pub mod scheduler;

pub use collision::{BoundaryCollision, clamp_speed, distance_to_bound};
pub use direction::Direction;
pub use entity::{Entity, EntityId, Geometry, Registry, TickContext};
pub use fps::FpsCounter;
pub use grid::Grid;
pub use input::{InputKey, InputState, KeyState};
pub use player::Player;
pub use points_map::PointsMap;
pub use scene::{DefaultScene, Scene};
pub use scheduler::{LoopState, Scheduler};
