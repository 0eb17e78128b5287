//! # Render Error Types
//!
//! Errors from loading configuration and levels. The frame path never fails.

use thiserror::Error;
use vestibule_core::LevelError;

/// Errors that can occur while setting up the renderer.
#[derive(Error, Debug)]
pub enum RenderError {
    /// Level data failed validation or does not fit the buffers.
    #[error("invalid level: {0}")]
    Level(#[from] LevelError),

    /// Configuration file could not be parsed.
    #[error("config parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// Configuration parsed but holds unusable values.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Configuration file could not be read.
    #[error("config io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for renderer setup.
pub type RenderResult<T> = Result<T, RenderError>;
