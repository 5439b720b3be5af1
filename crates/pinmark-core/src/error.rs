use thiserror::Error;

#[derive(Error, Debug)]
pub enum PinmarkError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image format error: {0}")]
    Image(#[from] image::ImageError),

    #[error("Could not decode image: {0}")]
    DecodeFailed(String),

    #[error("No image loaded")]
    NoImage,

    #[error("Cannot allocate {width}x{height} canvas")]
    CanvasAllocation { width: u32, height: u32 },

    #[error("Invalid color: {0}")]
    InvalidColor(String),

    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    #[error("Invalid event script: {0}")]
    InvalidScript(String),
}

pub type Result<T> = std::result::Result<T, PinmarkError>;
