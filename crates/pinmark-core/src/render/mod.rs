pub mod glyphs;

use image::RgbaImage;
use tiny_skia::{
    ColorU8, FilterQuality, Paint, PathBuilder, Pixmap, PixmapPaint, Stroke, Transform,
};

use crate::config::RenderConfig;
use crate::error::{PinmarkError, Result};
use crate::marker::{Marker, MarkerControls};
use crate::transform::{ImagePoint, ViewTransform};

pub use glyphs::GlyphSource;

/// Composites the image and markers into a canvas-sized RGBA buffer.
#[derive(Clone, Debug)]
pub struct Renderer {
    glyphs: GlyphSource,
    line_width: f32,
}

impl Renderer {
    pub fn new(config: &RenderConfig) -> Self {
        Self {
            glyphs: GlyphSource::resolve(config.font_path.as_deref()),
            line_width: config.line_width,
        }
    }

    pub fn with_glyphs(glyphs: GlyphSource, line_width: f32) -> Self {
        Self { glyphs, line_width }
    }

    pub fn glyphs(&self) -> &GlyphSource {
        &self.glyphs
    }

    /// Full redraw: clear, draw the image at the transform, then every marker
    /// in insertion order with its 1-based number.
    ///
    /// The canvas always has the image's natural size. Without an image the
    /// canvas is 0x0.
    pub fn render(
        &self,
        image: Option<&RgbaImage>,
        markers: &[Marker],
        transform: &ViewTransform,
        controls: &MarkerControls,
    ) -> Result<RgbaImage> {
        let Some(image) = image else {
            return Ok(RgbaImage::new(0, 0));
        };
        let (width, height) = image.dimensions();
        let mut canvas =
            Pixmap::new(width, height).ok_or(PinmarkError::CanvasAllocation { width, height })?;

        if transform.is_drawable() {
            let source = to_pixmap(image)?;
            let placement = Transform::from_row(
                transform.scale as f32,
                0.0,
                0.0,
                transform.scale as f32,
                transform.offset_x as f32,
                transform.offset_y as f32,
            );
            // Unscaled draws copy pixels exactly.
            let quality = if transform.scale == 1.0 {
                FilterQuality::Nearest
            } else {
                FilterQuality::Bilinear
            };
            let paint = PixmapPaint {
                quality,
                ..PixmapPaint::default()
            };
            canvas.draw_pixmap(0, 0, source.as_ref(), &paint, placement, None);
        }

        for (index, marker) in markers.iter().enumerate() {
            self.draw_marker(&mut canvas, index + 1, marker, transform, controls);
        }

        from_pixmap(&canvas)
    }

    fn draw_marker(
        &self,
        canvas: &mut Pixmap,
        number: usize,
        marker: &Marker,
        transform: &ViewTransform,
        controls: &MarkerControls,
    ) {
        let center = transform.image_to_screen(ImagePoint::new(marker.x, marker.y));
        if !center.is_finite() {
            return;
        }
        let (cx, cy) = (center.x as f32, center.y as f32);

        if let Some(circle) = PathBuilder::from_circle(cx, cy, marker.radius()) {
            let mut paint = Paint::default();
            paint.set_color(controls.circle_color.to_skia());
            paint.anti_alias = true;
            let stroke = Stroke {
                width: self.line_width,
                ..Stroke::default()
            };
            canvas.stroke_path(&circle, &paint, &stroke, Transform::identity(), None);
        }

        if let Some(label) = self
            .glyphs
            .label_path(&number.to_string(), cx, cy, controls.font_size)
        {
            let mut paint = Paint::default();
            paint.set_color(controls.font_color.to_skia());
            paint.anti_alias = true;
            canvas.fill_path(
                &label,
                &paint,
                tiny_skia::FillRule::Winding,
                Transform::identity(),
                None,
            );
        }
    }
}

/// tiny-skia stores premultiplied pixels; `image` stores straight alpha.
fn to_pixmap(image: &RgbaImage) -> Result<Pixmap> {
    let (width, height) = image.dimensions();
    let mut pixmap =
        Pixmap::new(width, height).ok_or(PinmarkError::CanvasAllocation { width, height })?;
    for (dst, src) in pixmap.pixels_mut().iter_mut().zip(image.pixels()) {
        let [r, g, b, a] = src.0;
        *dst = ColorU8::from_rgba(r, g, b, a).premultiply();
    }
    Ok(pixmap)
}

fn from_pixmap(pixmap: &Pixmap) -> Result<RgbaImage> {
    let (width, height) = (pixmap.width(), pixmap.height());
    let data: Vec<u8> = pixmap
        .pixels()
        .iter()
        .flat_map(|p| {
            let c = p.demultiply();
            [c.red(), c.green(), c.blue(), c.alpha()]
        })
        .collect();
    RgbaImage::from_raw(width, height, data).ok_or(PinmarkError::CanvasAllocation { width, height })
}
