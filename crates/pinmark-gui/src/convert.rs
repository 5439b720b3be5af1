use image::RgbaImage;
use pinmark_core::color::Rgba8;

/// Convert a straight-alpha RGBA canvas to an egui ColorImage.
pub fn canvas_to_color_image(canvas: &RgbaImage) -> egui::ColorImage {
    let size = [canvas.width() as usize, canvas.height() as usize];
    egui::ColorImage::from_rgba_unmultiplied(size, canvas.as_raw())
}

pub fn to_color32(color: Rgba8) -> egui::Color32 {
    egui::Color32::from_rgba_unmultiplied(color.r, color.g, color.b, color.a)
}

pub fn from_color32(color: egui::Color32) -> Rgba8 {
    let [r, g, b, a] = color.to_srgba_unmultiplied();
    Rgba8 { r, g, b, a }
}
