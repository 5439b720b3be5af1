pub mod export;
pub mod image_io;
pub mod intake;
