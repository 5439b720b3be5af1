use serde::{Deserialize, Serialize};

use crate::config::ZoomConfig;

/// A point in canvas (screen) pixel coordinates, origin at the canvas top-left.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScreenPoint {
    pub x: f64,
    pub y: f64,
}

impl ScreenPoint {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// A point in natural image pixel coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ImagePoint {
    pub x: f64,
    pub y: f64,
}

impl ImagePoint {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Position of the canvas inside the window that delivers pointer events.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CanvasBounds {
    pub left: f64,
    pub top: f64,
}

impl CanvasBounds {
    /// Convert window (client) coordinates to canvas coordinates.
    pub fn to_canvas(&self, client_x: f64, client_y: f64) -> ScreenPoint {
        ScreenPoint::new(client_x - self.left, client_y - self.top)
    }
}

/// Pan/zoom applied to the image when it is drawn onto the canvas.
///
/// Scale is applied to size only; the image top-left moves additively by the
/// offset. Markers follow the same mapping.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ViewTransform {
    pub scale: f64,
    pub offset_x: i32,
    pub offset_y: i32,
}

impl Default for ViewTransform {
    fn default() -> Self {
        Self {
            scale: 1.0,
            offset_x: 0,
            offset_y: 0,
        }
    }
}

impl ViewTransform {
    /// Inverse mapping used for marker placement.
    ///
    /// A zero scale yields non-finite coordinates; callers render those as
    /// nothing.
    pub fn screen_to_image(&self, p: ScreenPoint) -> ImagePoint {
        ImagePoint::new(
            (p.x - self.offset_x as f64) / self.scale,
            (p.y - self.offset_y as f64) / self.scale,
        )
    }

    pub fn image_to_screen(&self, p: ImagePoint) -> ScreenPoint {
        ScreenPoint::new(
            p.x * self.scale + self.offset_x as f64,
            p.y * self.scale + self.offset_y as f64,
        )
    }

    /// Drawn size of an image with the given natural dimensions.
    pub fn scaled_size(&self, width: u32, height: u32) -> (f64, f64) {
        (width as f64 * self.scale, height as f64 * self.scale)
    }

    pub fn zoom_in(&mut self, zoom: &ZoomConfig) {
        self.scale = zoom.policy.apply(self.scale * zoom.factor);
    }

    pub fn zoom_out(&mut self, zoom: &ZoomConfig) {
        self.scale = zoom.policy.apply(self.scale / zoom.factor);
    }

    /// Whether the image can be drawn at all under this transform.
    pub fn is_drawable(&self) -> bool {
        self.scale.is_finite() && self.scale > 0.0
    }
}
