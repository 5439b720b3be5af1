use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::color::Rgba8;
use crate::error::{PinmarkError, Result};

/// A synchronous user interaction with a session.
///
/// Uploads are not events: they go through the decode ticket flow on
/// [`crate::session::Session`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SessionEvent {
    GetStarted,
    /// Click at canvas coordinates.
    Click { x: f64, y: f64 },
    ZoomIn,
    ZoomOut,
    SetOffsetX { offset: i32 },
    SetOffsetY { offset: i32 },
    SetCircleSize { size: f32 },
    SetCircleColor { color: Rgba8 },
    SetFontColor { color: Rgba8 },
    SetFontSize { size: f32 },
}

impl std::fmt::Display for SessionEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::GetStarted => write!(f, "get started"),
            Self::Click { x, y } => write!(f, "click at ({x}, {y})"),
            Self::ZoomIn => write!(f, "zoom in"),
            Self::ZoomOut => write!(f, "zoom out"),
            Self::SetOffsetX { offset } => write!(f, "horizontal offset {offset}"),
            Self::SetOffsetY { offset } => write!(f, "vertical offset {offset}"),
            Self::SetCircleSize { size } => write!(f, "circle size {size}"),
            Self::SetCircleColor { color } => write!(f, "circle color {color}"),
            Self::SetFontColor { color } => write!(f, "font color {color}"),
            Self::SetFontSize { size } => write!(f, "font size {size}"),
        }
    }
}

/// An ordered list of events, stored as TOML:
///
/// ```toml
/// [[events]]
/// kind = "click"
/// x = 50.0
/// y = 50.0
///
/// [[events]]
/// kind = "zoom_in"
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct EventScript {
    #[serde(default)]
    pub events: Vec<SessionEvent>,
}

impl EventScript {
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        toml::from_str(contents).map_err(|e| PinmarkError::InvalidScript(e.to_string()))
    }

    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }
}
