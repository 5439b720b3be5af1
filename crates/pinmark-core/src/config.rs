use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::consts::{
    DEFAULT_MAX_SCALE, DEFAULT_MIN_SCALE, EXPORT_FILE_NAME, MARKER_LINE_WIDTH, ZOOM_STEP,
};
use crate::error::{PinmarkError, Result};
use crate::marker::MarkerControls;

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SessionConfig {
    #[serde(default)]
    pub zoom: ZoomConfig,
    #[serde(default)]
    pub decode: DecodeConfig,
    #[serde(default)]
    pub controls: MarkerControls,
    #[serde(default)]
    pub render: RenderConfig,
    #[serde(default)]
    pub export: ExportConfig,
}

impl SessionConfig {
    /// Unclamped zoom and last-decode-wins uploads.
    pub fn parity() -> Self {
        Self {
            zoom: ZoomConfig {
                policy: ZoomPolicy::Unbounded,
                ..ZoomConfig::default()
            },
            decode: DecodeConfig {
                ignore_stale: false,
            },
            ..Self::default()
        }
    }

    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let config: SessionConfig =
            toml::from_str(contents).map_err(|e| PinmarkError::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| PinmarkError::InvalidConfig(e.to_string()))
    }

    pub fn validate(&self) -> Result<()> {
        if !self.zoom.factor.is_finite() || self.zoom.factor <= 1.0 {
            return Err(PinmarkError::InvalidConfig(format!(
                "zoom factor must be > 1.0, got {}",
                self.zoom.factor
            )));
        }
        if let ZoomPolicy::Clamped { min, max } = self.zoom.policy {
            if !(min.is_finite() && max.is_finite() && min > 0.0 && min <= max) {
                return Err(PinmarkError::InvalidConfig(format!(
                    "zoom bounds must satisfy 0 < min <= max, got {min}..{max}"
                )));
            }
        }
        if !self.render.line_width.is_finite() || self.render.line_width <= 0.0 {
            return Err(PinmarkError::InvalidConfig(format!(
                "line width must be positive, got {}",
                self.render.line_width
            )));
        }
        if self.export.file_name.trim().is_empty() {
            return Err(PinmarkError::InvalidConfig(
                "export file name must not be empty".into(),
            ));
        }
        Ok(())
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ZoomConfig {
    /// Scale is multiplied (zoom in) or divided (zoom out) by this factor.
    pub factor: f64,
    pub policy: ZoomPolicy,
}

impl Default for ZoomConfig {
    fn default() -> Self {
        Self {
            factor: ZOOM_STEP,
            policy: ZoomPolicy::default(),
        }
    }
}

/// How far `scale` may travel under repeated zooming.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum ZoomPolicy {
    Unbounded,
    Clamped { min: f64, max: f64 },
}

impl ZoomPolicy {
    pub fn apply(&self, scale: f64) -> f64 {
        match *self {
            Self::Unbounded => scale,
            Self::Clamped { min, max } => scale.clamp(min, max),
        }
    }
}

impl Default for ZoomPolicy {
    fn default() -> Self {
        Self::Clamped {
            min: DEFAULT_MIN_SCALE,
            max: DEFAULT_MAX_SCALE,
        }
    }
}

impl std::fmt::Display for ZoomPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unbounded => write!(f, "Unbounded"),
            Self::Clamped { min, max } => write!(f, "Clamped ({min}..{max})"),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DecodeConfig {
    /// Drop decode completions that were overtaken by a newer upload.
    pub ignore_stale: bool,
}

impl Default for DecodeConfig {
    fn default() -> Self {
        Self { ignore_stale: true }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RenderConfig {
    pub line_width: f32,
    /// TrueType/OpenType font for marker numbers. System fonts are probed
    /// when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_path: Option<PathBuf>,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            line_width: MARKER_LINE_WIDTH,
            font_path: None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ExportConfig {
    pub file_name: String,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            file_name: EXPORT_FILE_NAME.to_string(),
        }
    }
}
