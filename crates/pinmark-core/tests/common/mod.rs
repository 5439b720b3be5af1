#![allow(dead_code)]

use image::{Rgba, RgbaImage};

use pinmark_core::config::SessionConfig;
use pinmark_core::io::image_io::{DecodedImage, ImageSource};
use pinmark_core::render::{GlyphSource, Renderer};
use pinmark_core::session::Session;

pub const WHITE: Rgba<u8> = Rgba([255, 255, 255, 255]);
pub const RED: Rgba<u8> = Rgba([255, 0, 0, 255]);
pub const BLUE: Rgba<u8> = Rgba([0, 0, 255, 255]);

/// A solid-colour decoded image.
pub fn solid_image(width: u32, height: u32, color: Rgba<u8>) -> DecodedImage {
    DecodedImage {
        pixels: RgbaImage::from_pixel(width, height, color),
        source: ImageSource::Bytes {
            name: "solid.png".into(),
        },
    }
}

/// Encode a solid image as PNG bytes.
pub fn solid_png(width: u32, height: u32, color: Rgba<u8>) -> Vec<u8> {
    let img = RgbaImage::from_pixel(width, height, color);
    let mut buf = std::io::Cursor::new(Vec::new());
    img.write_to(&mut buf, image::ImageFormat::Png)
        .expect("encode PNG");
    buf.into_inner()
}

/// Session with deterministic segment-digit labels, independent of
/// installed fonts.
pub fn session_with(config: SessionConfig) -> Session {
    let renderer = Renderer::with_glyphs(GlyphSource::Segments, config.render.line_width);
    Session::with_renderer(config, renderer)
}

pub fn session() -> Session {
    session_with(SessionConfig::default())
}

/// Session in viewer mode with a white `width`x`height` image.
pub fn loaded_session(width: u32, height: u32) -> Session {
    let mut s = session();
    s.get_started();
    s.load_image(solid_image(width, height, WHITE));
    s
}

/// Channel-wise match within a tolerance that only admits (nearly) fully
/// covered anti-aliased pixels.
pub fn is_color(px: &Rgba<u8>, color: Rgba<u8>) -> bool {
    px.0.iter()
        .zip(color.0.iter())
        .all(|(a, b)| (*a as i32 - *b as i32).abs() <= 60)
}

/// Count pixels close to `color` inside the square of half-size `r`
/// centred on `(cx, cy)`.
pub fn count_in_box(img: &RgbaImage, cx: i64, cy: i64, r: i64, color: Rgba<u8>) -> usize {
    let mut n = 0;
    for y in (cy - r)..=(cy + r) {
        for x in (cx - r)..=(cx + r) {
            if x < 0 || y < 0 || x >= img.width() as i64 || y >= img.height() as i64 {
                continue;
            }
            if is_color(img.get_pixel(x as u32, y as u32), color) {
                n += 1;
            }
        }
    }
    n
}

/// Whether the pixel differs noticeably from `background`.
pub fn is_marked(img: &RgbaImage, x: u32, y: u32, background: Rgba<u8>) -> bool {
    let p = img.get_pixel(x, y).0;
    p.iter()
        .zip(background.0.iter())
        .any(|(a, b)| (*a as i32 - *b as i32).abs() > 40)
}
