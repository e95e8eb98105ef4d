//! Canvas Walker - a frame-driven 2D canvas simulation
//!
//! Core modules:
//! - `sim`: Frame scheduler, edge-triggered input, rectangle geometry and entities
//! - `renderer`: Drawing surface abstraction (recording buffer, 2D canvas on web)
//! - `platform`: Display-refresh requests and browser/native input wiring
//! - `settings`: Serde-backed configuration
//! - `demo`: Seeded autopilot for headless runs

pub mod colors;
pub mod demo;
pub mod error;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use error::{Error, Result};
pub use settings::Settings;

/// Simulation configuration constants
pub mod consts {
    /// Default surface dimensions (pixels)
    pub const SURFACE_WIDTH: u32 = 896;
    pub const SURFACE_HEIGHT: u32 = 512;

    /// Player rectangle defaults
    pub const PLAYER_WIDTH: f32 = 64.0;
    pub const PLAYER_HEIGHT: f32 = 64.0;
    /// Nominal per-tick movement in pixels (not scaled by delta time)
    pub const PLAYER_SPEED: f32 = 5.0;

    /// Background grid cell size
    pub const GRID_CELL: f32 = 64.0;

    /// Number of frame deltas averaged by the FPS read-out
    pub const FPS_SAMPLES: usize = 60;

    /// Timestamp step used by the headless loop (60 Hz, milliseconds)
    pub const HEADLESS_FRAME_MS: f64 = 1000.0 / 60.0;
}
