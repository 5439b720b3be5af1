/// Multiplicative step applied by a single zoom-in or zoom-out.
pub const ZOOM_STEP: f64 = 1.1;

/// Lower scale bound used by the clamped zoom policy.
pub const DEFAULT_MIN_SCALE: f64 = 0.05;

/// Upper scale bound used by the clamped zoom policy.
pub const DEFAULT_MAX_SCALE: f64 = 50.0;

/// Default marker diameter in screen pixels.
pub const DEFAULT_CIRCLE_SIZE: f32 = 30.0;

/// Default marker number font size in pixels.
pub const DEFAULT_FONT_SIZE: f32 = 16.0;

/// Width of the stroked marker outline in pixels.
pub const MARKER_LINE_WIDTH: f32 = 2.0;

/// File name used when exporting the annotated canvas.
pub const EXPORT_FILE_NAME: &str = "annotated_image.png";

/// Prefix of a PNG data URL.
pub const PNG_DATA_URL_PREFIX: &str = "data:image/png;base64,";

/// Units per em assumed when a font does not report its own.
pub const FALLBACK_UNITS_PER_EM: f32 = 1000.0;

/// Font files probed, in order, when no font path is configured.
pub const SYSTEM_FONT_CANDIDATES: &[&str] = &[
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/TTF/DejaVuSans.ttf",
    "/usr/share/fonts/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf",
    "/usr/share/fonts/liberation/LiberationSans-Regular.ttf",
    "/System/Library/Fonts/Supplemental/Arial.ttf",
    "/System/Library/Fonts/Supplemental/Helvetica.ttf",
    "/Library/Fonts/Arial.ttf",
    "C:\\Windows\\Fonts\\arial.ttf",
];
