//! Runtime configuration
//!
//! Every field has a default, so a settings file only needs the values it
//! overrides.

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::{Error, Result};

/// Environment variable naming a JSON settings file (native only)
pub const SETTINGS_ENV: &str = "CANVAS_WALKER_SETTINGS";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SurfaceSize {
    pub width: u32,
    pub height: u32,
}

impl Default for SurfaceSize {
    fn default() -> Self {
        Self {
            width: SURFACE_WIDTH,
            height: SURFACE_HEIGHT,
        }
    }
}

/// Player rectangle size and nominal per-tick speed
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerTuning {
    pub width: f32,
    pub height: f32,
    pub speed: f32,
}

impl Default for PlayerTuning {
    fn default() -> Self {
        Self {
            width: PLAYER_WIDTH,
            height: PLAYER_HEIGHT,
            speed: PLAYER_SPEED,
        }
    }
}

/// Debug markers drawn over the player
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HelperOverlay {
    /// Initial visibility (the X key toggles it at runtime)
    pub visible: bool,
    pub center: bool,
    pub direction: bool,
    pub text: bool,
    pub corners: bool,
    pub edge_centers: bool,
}

impl Default for HelperOverlay {
    fn default() -> Self {
        Self {
            visible: true,
            center: true,
            direction: true,
            text: true,
            corners: false,
            edge_centers: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub surface: SurfaceSize,
    pub player: PlayerTuning,
    pub helpers: HelperOverlay,

    // === Scene ===
    pub grid_cell: f32,
    pub show_grid: bool,
    pub show_fps: bool,

    // === Web ===
    /// CSS selector of the drawing canvas
    pub canvas_selector: String,
    /// CSS selector of the start/stop button
    pub toggle_selector: String,

    // === Headless demo ===
    pub demo_seed: u64,
    pub demo_frames: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            surface: SurfaceSize::default(),
            player: PlayerTuning::default(),
            helpers: HelperOverlay::default(),

            grid_cell: GRID_CELL,
            show_grid: true,
            show_fps: true,

            canvas_selector: "#canvas".to_owned(),
            toggle_selector: "#toggle".to_owned(),

            demo_seed: 42,
            demo_frames: 600,
        }
    }
}

impl Settings {
    /// Parse and validate
    pub fn from_json(json: &str) -> Result<Self> {
        let settings: Self = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Reject values the simulation cannot run with
    pub fn validate(&self) -> Result<()> {
        let positive = |v: f32| v.is_finite() && v > 0.0;

        if !(self.player.speed.is_finite() && self.player.speed >= 0.0) {
            return Err(Error::Invalid {
                field: "player.speed",
            });
        }
        if !positive(self.player.width) {
            return Err(Error::Invalid {
                field: "player.width",
            });
        }
        if !positive(self.player.height) {
            return Err(Error::Invalid {
                field: "player.height",
            });
        }
        if !positive(self.grid_cell) {
            return Err(Error::Invalid { field: "grid_cell" });
        }
        Ok(())
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn from_file(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Settings file named by `CANVAS_WALKER_SETTINGS`, or defaults
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        let Ok(path) = std::env::var(SETTINGS_ENV) else {
            log::info!("Using default settings");
            return Self::default();
        };

        match Self::from_file(&path) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path);
                settings
            }
            Err(e) => {
                log::warn!("Ignoring settings file {}: {}", path, e);
                Self::default()
            }
        }
    }

    /// Web builds have no settings file
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_json_keeps_defaults() {
        let settings =
            Settings::from_json(r#"{ "player": { "speed": 8.0 }, "show_grid": false }"#).unwrap();
        assert_eq!(settings.player.speed, 8.0);
        assert_eq!(settings.player.width, PLAYER_WIDTH);
        assert!(!settings.show_grid);
        assert_eq!(settings.surface, SurfaceSize::default());
        assert_eq!(settings.canvas_selector, "#canvas");
    }

    #[test]
    fn test_json_round_trip() {
        let mut settings = Settings::default();
        settings.helpers.corners = true;
        settings.demo_seed = 7;
        let json = settings.to_json().unwrap();
        assert_eq!(Settings::from_json(&json).unwrap(), settings);
    }

    #[test]
    fn test_malformed_json_is_an_error() {
        let err = Settings::from_json("{ not json").unwrap_err();
        assert!(matches!(err, crate::Error::Parse(_)));
    }

    #[test]
    fn test_defaults_are_valid() {
        assert!(Settings::default().validate().is_ok());
    }

    #[test]
    fn test_rejects_negative_speed() {
        let err = Settings::from_json(r#"{ "player": { "speed": -1.0 } }"#).unwrap_err();
        assert!(matches!(
            err,
            crate::Error::Invalid {
                field: "player.speed"
            }
        ));

        // Zero is a legal (stationary) speed
        let settings = Settings::from_json(r#"{ "player": { "speed": 0.0 } }"#).unwrap();
        assert_eq!(settings.player.speed, 0.0);
    }

    #[test]
    fn test_rejects_zero_grid_cell() {
        let err = Settings::from_json(r#"{ "grid_cell": 0.0 }"#).unwrap_err();
        assert!(matches!(err, crate::Error::Invalid { field: "grid_cell" }));

        let err = Settings::from_json(r#"{ "grid_cell": -64.0 }"#).unwrap_err();
        assert!(matches!(err, crate::Error::Invalid { field: "grid_cell" }));
    }

    #[test]
    fn test_rejects_empty_player() {
        let err = Settings::from_json(r#"{ "player": { "width": 0.0 } }"#).unwrap_err();
        assert!(matches!(
            err,
            crate::Error::Invalid {
                field: "player.width"
            }
        ));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = Settings::from_file("/nonexistent/canvas-walker.json").unwrap_err();
        assert!(matches!(err, crate::Error::Io(_)));
    }
}
