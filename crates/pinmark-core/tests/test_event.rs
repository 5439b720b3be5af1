mod common;

use approx::assert_abs_diff_eq;

use common::{loaded_session, session, solid_image, WHITE};
use pinmark_core::color::Rgba8;
use pinmark_core::error::PinmarkError;
use pinmark_core::event::{EventScript, SessionEvent};
use pinmark_core::session::ViewMode;

const SCRIPT: &str = r##"
[[events]]
kind = "get_started"

[[events]]
kind = "set_circle_size"
size = 24.0

[[events]]
kind = "click"
x = 40.0
y = 30.0

[[events]]
kind = "zoom_in"

[[events]]
kind = "set_offset_x"
offset = 20

[[events]]
kind = "click"
x = 64.0
y = 33.0

[[events]]
kind = "set_circle_color"
color = "#0000ff"
"##;

#[test]
fn test_parse_script() {
    let script = EventScript::from_toml_str(SCRIPT).unwrap();
    assert_eq!(script.events.len(), 7);
    assert_eq!(script.events[0], SessionEvent::GetStarted);
    assert_eq!(script.events[2], SessionEvent::Click { x: 40.0, y: 30.0 });
    assert_eq!(
        script.events[6],
        SessionEvent::SetCircleColor {
            color: Rgba8::rgb(0, 0, 255)
        }
    );
}

#[test]
fn test_replay_script() {
    let script = EventScript::from_toml_str(SCRIPT).unwrap();
    let mut s = session();
    s.get_started();
    s.load_image(solid_image(100, 100, WHITE));
    for event in &script.events {
        s.apply(event);
    }

    assert_eq!(s.mode(), ViewMode::Viewer);
    assert_eq!(s.markers().len(), 2);
    // Second click lands on the same image point as the first.
    for m in s.markers() {
        assert_abs_diff_eq!(m.x, 40.0, epsilon = 1e-9);
        assert_abs_diff_eq!(m.y, 30.0, epsilon = 1e-9);
        assert_eq!(m.size, 24.0);
    }
    assert_eq!(s.controls().circle_color, Rgba8::rgb(0, 0, 255));
}

#[test]
fn test_empty_script() {
    let script = EventScript::from_toml_str("").unwrap();
    assert!(script.events.is_empty());
}

#[test]
fn test_unknown_event_kind_is_rejected() {
    let err = EventScript::from_toml_str("[[events]]\nkind = \"rotate\"\n").unwrap_err();
    assert!(matches!(err, PinmarkError::InvalidScript(_)));
}

#[test]
fn test_bad_color_in_script_is_rejected() {
    let err = EventScript::from_toml_str(
        "[[events]]\nkind = \"set_font_color\"\ncolor = \"#12\"\n",
    )
    .unwrap_err();
    assert!(matches!(err, PinmarkError::InvalidScript(_)));
}

#[test]
fn test_event_display() {
    assert_eq!(SessionEvent::ZoomIn.to_string(), "zoom in");
    assert_eq!(
        SessionEvent::Click { x: 1.5, y: 2.0 }.to_string(),
        "click at (1.5, 2)"
    );
    assert_eq!(
        SessionEvent::SetFontColor {
            color: Rgba8::rgb(255, 0, 0)
        }
        .to_string(),
        "font color #ff0000"
    );
}

#[test]
fn test_load_script_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("events.toml");
    std::fs::write(&path, SCRIPT).unwrap();
    let script = EventScript::load(&path).unwrap();
    assert_eq!(script.events.len(), 7);

    let mut s = loaded_session(10, 10);
    s.apply(&script.events[1]);
    assert_eq!(s.controls().circle_size, 24.0);
}
