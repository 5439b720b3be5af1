use serde::{Deserialize, Serialize};

use crate::color::Rgba8;
use crate::consts::{DEFAULT_CIRCLE_SIZE, DEFAULT_FONT_SIZE};

/// A numbered circular marker.
///
/// `x`/`y` are image-space coordinates. Only the diameter is captured at
/// placement time; colors and font size come from [`MarkerControls`] at
/// draw time.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Marker {
    pub x: f64,
    pub y: f64,
    /// Circle diameter in screen pixels.
    pub size: f32,
}

impl Marker {
    pub fn new(x: f64, y: f64, size: f32) -> Self {
        Self { x, y, size }
    }

    pub fn radius(&self) -> f32 {
        self.size / 2.0
    }
}

/// Live-read marker controls.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MarkerControls {
    /// Diameter given to newly placed markers.
    pub circle_size: f32,
    pub circle_color: Rgba8,
    pub font_color: Rgba8,
    pub font_size: f32,
}

impl Default for MarkerControls {
    fn default() -> Self {
        Self {
            circle_size: DEFAULT_CIRCLE_SIZE,
            circle_color: Rgba8::RED,
            font_color: Rgba8::RED,
            font_size: DEFAULT_FONT_SIZE,
        }
    }
}
