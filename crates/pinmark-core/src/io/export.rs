use std::io::Cursor;
use std::path::Path;

use base64::Engine;
use image::{ImageFormat, RgbaImage};

use crate::consts::PNG_DATA_URL_PREFIX;
use crate::error::Result;

/// Encode a composited canvas as PNG bytes.
pub fn encode_png(canvas: &RgbaImage) -> Result<Vec<u8>> {
    let mut buffer = Cursor::new(Vec::new());
    canvas.write_to(&mut buffer, ImageFormat::Png)?;
    Ok(buffer.into_inner())
}

/// Write PNG bytes to disk.
pub fn save_png(png: &[u8], path: &Path) -> Result<()> {
    std::fs::write(path, png)?;
    Ok(())
}

/// `data:image/png;base64,...` form of the PNG bytes.
pub fn png_data_url(png: &[u8]) -> String {
    let encoded = base64::engine::general_purpose::STANDARD.encode(png);
    format!("{PNG_DATA_URL_PREFIX}{encoded}")
}
