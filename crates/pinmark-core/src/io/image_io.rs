use std::path::{Path, PathBuf};

use image::RgbaImage;
use tracing::debug;

use crate::error::{PinmarkError, Result};

/// Where an uploaded image came from.
#[derive(Clone, Debug, PartialEq)]
pub enum ImageSource {
    File(PathBuf),
    /// In-memory bytes, e.g. a dropped file without a path.
    Bytes { name: String },
    Clipboard,
}

impl std::fmt::Display for ImageSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::File(path) => write!(f, "{}", path.display()),
            Self::Bytes { name } => write!(f, "{name}"),
            Self::Clipboard => write!(f, "clipboard"),
        }
    }
}

/// A successfully decoded upload, converted to straight RGBA8.
#[derive(Clone, Debug)]
pub struct DecodedImage {
    pub pixels: RgbaImage,
    pub source: ImageSource,
}

impl DecodedImage {
    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    pub fn height(&self) -> u32 {
        self.pixels.height()
    }
}

/// Decode an encoded image (PNG, JPEG, ...) of any supported format.
pub fn decode_bytes(bytes: &[u8], source: ImageSource) -> Result<DecodedImage> {
    let img = image::load_from_memory(bytes)
        .map_err(|e| PinmarkError::DecodeFailed(format!("{source}: {e}")))?;
    let pixels = img.to_rgba8();
    if pixels.width() == 0 || pixels.height() == 0 {
        return Err(PinmarkError::DecodeFailed(format!("{source}: empty image")));
    }
    debug!(width = pixels.width(), height = pixels.height(), %source, "Image decoded");
    Ok(DecodedImage { pixels, source })
}

/// Read and decode an image file. The extension is not trusted.
pub fn decode_file(path: &Path) -> Result<DecodedImage> {
    let bytes = std::fs::read(path)?;
    decode_bytes(&bytes, ImageSource::File(path.to_path_buf()))
}

/// Wrap raw RGBA8 pixels, e.g. from the system clipboard.
pub fn from_rgba(width: u32, height: u32, rgba: Vec<u8>, source: ImageSource) -> Result<DecodedImage> {
    if width == 0 || height == 0 {
        return Err(PinmarkError::DecodeFailed(format!("{source}: empty image")));
    }
    let pixels = RgbaImage::from_raw(width, height, rgba).ok_or_else(|| {
        PinmarkError::DecodeFailed(format!(
            "{source}: buffer does not match {width}x{height} RGBA"
        ))
    })?;
    Ok(DecodedImage { pixels, source })
}
