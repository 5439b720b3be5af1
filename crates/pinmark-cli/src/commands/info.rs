use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use pinmark_core::io::image_io::decode_file;

#[derive(Args)]
pub struct InfoArgs {
    /// Input image file (PNG, JPEG, GIF, BMP, WebP or TIFF)
    pub file: PathBuf,
}

pub fn run(args: &InfoArgs) -> Result<()> {
    let image = decode_file(&args.file)
        .with_context(|| format!("Failed to load {}", args.file.display()))?;
    let bytes = std::fs::metadata(&args.file)?.len();

    println!("File:        {}", image.source);
    println!("Dimensions:  {}x{}", image.width(), image.height());
    println!("File size:   {:.1} KB", bytes as f64 / 1024.0);

    let translucent = image.pixels.pixels().any(|p| p[3] < 255);
    println!("Alpha:       {}", if translucent { "yes" } else { "opaque" });

    Ok(())
}
