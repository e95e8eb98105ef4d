//! Error types
//!
//! Only startup and configuration can fail. Per-tick simulation is total.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// No browser window/document to attach to
    #[error("browser window not available")]
    WindowUnavailable,

    /// No element matched the configured canvas selector
    #[error("canvas element not found: {selector}")]
    SurfaceNotFound { selector: String },

    /// The canvas exists but refused to hand out a 2D context
    #[error("canvas rendering context not available")]
    ContextUnavailable,

    #[error("failed to read settings: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse settings: {0}")]
    Parse(#[from] serde_json::Error),

    /// A setting parsed but is out of range
    #[error("invalid setting: {field}")]
    Invalid { field: &'static str },
}

pub type Result<T> = std::result::Result<T, Error>;
