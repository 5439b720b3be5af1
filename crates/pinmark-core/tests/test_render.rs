mod common;

use std::path::Path;

use common::{count_in_box, is_marked, loaded_session, solid_image, BLUE, RED, WHITE};
use image::Rgba;
use pinmark_core::color::Rgba8;
use pinmark_core::config::{RenderConfig, SessionConfig};
use pinmark_core::consts::SYSTEM_FONT_CANDIDATES;
use pinmark_core::marker::{Marker, MarkerControls};
use pinmark_core::render::{GlyphSource, Renderer};
use pinmark_core::session::Session;
use pinmark_core::transform::{ScreenPoint, ViewTransform};

const TRANSPARENT: Rgba<u8> = Rgba([0, 0, 0, 0]);

fn segment_renderer() -> Renderer {
    Renderer::with_glyphs(GlyphSource::Segments, RenderConfig::default().line_width)
}

fn blue_circles_red_numbers() -> MarkerControls {
    MarkerControls {
        circle_size: 30.0,
        circle_color: Rgba8::rgb(0, 0, 255),
        font_color: Rgba8::rgb(255, 0, 0),
        font_size: 24.0,
    }
}

#[test]
fn test_canvas_matches_natural_image_size() {
    let mut s = loaded_session(120, 45);
    s.zoom_in();
    s.zoom_in();
    let canvas = s.render().unwrap();
    assert_eq!(canvas.dimensions(), (120, 45));
}

#[test]
fn test_identity_render_reproduces_image() {
    let s = loaded_session(16, 16);
    let canvas = s.render().unwrap();
    assert!(canvas.pixels().all(|p| *p == WHITE));
}

#[test]
fn test_no_image_renders_empty_canvas() {
    let renderer = segment_renderer();
    let canvas = renderer
        .render(None, &[], &ViewTransform::default(), &MarkerControls::default())
        .unwrap();
    assert_eq!(canvas.dimensions(), (0, 0));
}

#[test]
fn test_offset_shifts_image_right() {
    let mut s = loaded_session(100, 100);
    s.set_offset_x(20);
    let canvas = s.render().unwrap();

    // Left strip is cleared, the image starts at x = 20.
    assert_eq!(*canvas.get_pixel(5, 50), TRANSPARENT);
    assert_eq!(*canvas.get_pixel(19, 50), TRANSPARENT);
    assert_eq!(*canvas.get_pixel(20, 50), WHITE);
    assert_eq!(*canvas.get_pixel(99, 50), WHITE);
}

#[test]
fn test_zoom_out_shrinks_drawn_image() {
    let mut s = loaded_session(100, 100);
    for _ in 0..7 {
        s.zoom_out();
    }
    // 100 / 1.1^7 ~= 51.3 px
    let canvas = s.render().unwrap();
    assert!(canvas.get_pixel(40, 10)[3] > 250);
    assert_eq!(canvas.get_pixel(60, 10)[3], 0);
    assert_eq!(canvas.get_pixel(10, 60)[3], 0);
}

#[test]
fn test_marker_circle_centred_on_click() {
    let mut s = loaded_session(100, 100);
    *s.controls_mut() = blue_circles_red_numbers();
    s.place_marker(ScreenPoint::new(50.0, 50.0));
    let canvas = s.render().unwrap();

    // Diameter 30: the outline passes 15 px from the centre in every direction.
    assert!(is_marked(&canvas, 65, 50, WHITE));
    assert!(is_marked(&canvas, 34, 50, WHITE));
    assert!(is_marked(&canvas, 50, 65, WHITE));
    assert!(is_marked(&canvas, 50, 34, WHITE));

    // Between outline and label the image shows through.
    assert_eq!(*canvas.get_pixel(58, 50), WHITE);
    assert_eq!(*canvas.get_pixel(5, 5), WHITE);

    // Label sits in the middle.
    assert!(count_in_box(&canvas, 50, 50, 10, RED) > 0);
}

#[test]
fn test_zoom_in_moves_marker_circle() {
    let mut s = loaded_session(100, 100);
    *s.controls_mut() = blue_circles_red_numbers();
    s.place_marker(ScreenPoint::new(50.0, 50.0));
    s.zoom_in();
    let canvas = s.render().unwrap();

    // Centre is now (55, 55); outline stays 15 px away since size is screen-space.
    assert!(is_marked(&canvas, 70, 55, WHITE));
    assert!(is_marked(&canvas, 55, 70, WHITE));
    assert!(count_in_box(&canvas, 55, 55, 10, RED) > 0);
}

#[test]
fn test_style_controls_restyle_existing_markers() {
    let mut s = loaded_session(100, 100);
    *s.controls_mut() = blue_circles_red_numbers();
    s.place_marker(ScreenPoint::new(50.0, 50.0));

    let before = s.render().unwrap();
    assert!(count_in_box(&before, 50, 50, 17, BLUE) > 0);

    s.controls_mut().circle_color = Rgba8::rgb(0, 200, 0);
    s.controls_mut().font_color = Rgba8::rgb(0, 200, 0);
    let after = s.render().unwrap();

    assert_eq!(count_in_box(&after, 50, 50, 17, BLUE), 0);
    assert_eq!(count_in_box(&after, 50, 50, 10, RED), 0);
    assert!(count_in_box(&after, 50, 50, 17, Rgba([0, 200, 0, 255])) > 0);
}

#[test]
fn test_markers_outside_canvas_are_clipped() {
    let renderer = segment_renderer();
    let img = solid_image(20, 20, WHITE);
    let markers = [Marker::new(500.0, -300.0, 30.0)];
    let canvas = renderer
        .render(
            Some(&img.pixels),
            &markers,
            &ViewTransform::default(),
            &MarkerControls::default(),
        )
        .unwrap();
    assert!(canvas.pixels().all(|p| *p == WHITE));
}

#[test]
fn test_non_finite_markers_are_skipped() {
    let renderer = segment_renderer();
    let img = solid_image(20, 20, WHITE);
    let markers = [Marker::new(f64::NAN, 3.0, 10.0), Marker::new(f64::INFINITY, 3.0, 10.0)];
    let canvas = renderer
        .render(
            Some(&img.pixels),
            &markers,
            &ViewTransform::default(),
            &MarkerControls::default(),
        )
        .unwrap();
    assert!(canvas.pixels().all(|p| *p == WHITE));
}

#[test]
fn test_translucent_image_keeps_straight_alpha() {
    let renderer = segment_renderer();
    let img = solid_image(8, 8, Rgba([200, 100, 50, 128]));
    let canvas = renderer
        .render(
            Some(&img.pixels),
            &[],
            &ViewTransform::default(),
            &MarkerControls::default(),
        )
        .unwrap();
    let p = canvas.get_pixel(4, 4).0;
    assert_eq!(p[3], 128);
    assert!((p[0] as i32 - 200).abs() <= 2);
    assert!((p[1] as i32 - 100).abs() <= 2);
    assert!((p[2] as i32 - 50).abs() <= 2);
}

fn system_font() -> Option<GlyphSource> {
    SYSTEM_FONT_CANDIDATES
        .iter()
        .find_map(|candidate| GlyphSource::from_file(Path::new(candidate)).ok())
}

#[test]
fn test_font_label_centred_on_marker() {
    let Some(font) = system_font() else {
        eprintln!("no system font installed, skipping");
        return;
    };

    for text in ["1", "8", "12"] {
        let path = font.label_path(text, 50.0, 40.0, 20.0).unwrap();
        let b = path.bounds();
        let (mx, my) = ((b.left() + b.right()) / 2.0, (b.top() + b.bottom()) / 2.0);
        assert!((mx - 50.0).abs() < 1.5, "{text}: x centre {mx}");
        assert!((my - 40.0).abs() < 1.5, "{text}: y centre {my}");
        assert!(b.height() > 8.0 && b.height() < 20.0, "{text}: height {}", b.height());
    }

    // Two digits are wider than one.
    let one = font.label_path("1", 0.0, 0.0, 20.0).unwrap().bounds();
    let twelve = font.label_path("12", 0.0, 0.0, 20.0).unwrap().bounds();
    assert!(twelve.width() > one.width());
}

#[test]
fn test_font_label_is_filled_inside_circle() {
    let Some(font) = system_font() else {
        eprintln!("no system font installed, skipping");
        return;
    };

    let config = SessionConfig::default();
    let renderer = Renderer::with_glyphs(font, config.render.line_width);
    let mut s = Session::with_renderer(config, renderer);
    s.get_started();
    s.load_image(solid_image(100, 100, WHITE));
    *s.controls_mut() = blue_circles_red_numbers();
    s.place_marker(ScreenPoint::new(50.0, 50.0));
    let canvas = s.render().unwrap();

    assert!(count_in_box(&canvas, 50, 50, 10, RED) > 0);
    // Inside the outline only the label is drawn.
    assert_eq!(count_in_box(&canvas, 50, 50, 8, BLUE), 0);
    assert_eq!(*canvas.get_pixel(5, 5), WHITE);
}
