//! Renderer configuration, loaded once from TOML.
//!
//! ```toml
//! max_dynamic_objects = 32
//! scene_scale = 128.0
//! log_frame_stats = false
//! ```
//!
//! Every field is optional and falls back to [`RenderConfig::default`].

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{RenderError, RenderResult};

/// Static renderer settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Dynamic object slots reserved in the render buffers.
    pub max_dynamic_objects: usize,
    /// World units to scaled scene units.
    pub scene_scale: f32,
    /// Emit a trace event with the counts of every frame.
    pub log_frame_stats: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            max_dynamic_objects: 32,
            scene_scale: 128.0,
            log_frame_stats: false,
        }
    }
}

impl RenderConfig {
    /// Parses and validates a TOML document.
    ///
    /// # Errors
    ///
    /// Returns an error if the document does not parse or fails [`Self::validate`].
    pub fn from_toml_str(source: &str) -> RenderResult<Self> {
        let config: Self = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or its contents are invalid.
    pub fn from_file(path: impl AsRef<Path>) -> RenderResult<Self> {
        let source = std::fs::read_to_string(path)?;
        Self::from_toml_str(&source)
    }

    /// Checks value ranges.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::InvalidConfig`] if `scene_scale` is not a
    /// positive finite number.
    pub fn validate(&self) -> RenderResult<()> {
        if !self.scene_scale.is_finite() || self.scene_scale <= 0.0 {
            return Err(RenderError::InvalidConfig(format!(
                "scene_scale must be positive and finite, got {}",
                self.scene_scale
            )));
        }
        Ok(())
    }
}
