use pinmark_core::color::Rgba8;
use pinmark_core::config::{SessionConfig, ZoomPolicy};
use pinmark_core::consts::{DEFAULT_MAX_SCALE, DEFAULT_MIN_SCALE, ZOOM_STEP};
use pinmark_core::error::PinmarkError;

#[test]
fn test_default_config() {
    let config = SessionConfig::default();
    assert_eq!(config.zoom.factor, ZOOM_STEP);
    assert_eq!(
        config.zoom.policy,
        ZoomPolicy::Clamped {
            min: DEFAULT_MIN_SCALE,
            max: DEFAULT_MAX_SCALE
        }
    );
    assert!(config.decode.ignore_stale);
    assert_eq!(config.controls.circle_size, 30.0);
    assert_eq!(config.controls.circle_color, Rgba8::RED);
    assert_eq!(config.controls.font_color, Rgba8::RED);
    assert_eq!(config.controls.font_size, 16.0);
    assert_eq!(config.render.line_width, 2.0);
    assert!(config.render.font_path.is_none());
    assert_eq!(config.export.file_name, "annotated_image.png");
    config.validate().unwrap();
}

#[test]
fn test_toml_round_trip() {
    let mut config = SessionConfig::parity();
    config.controls.circle_color = Rgba8::rgb(0x12, 0x34, 0x56);
    config.render.font_path = Some("/tmp/font.ttf".into());

    let text = config.to_toml_string().unwrap();
    assert!(text.contains("#123456"));
    let back = SessionConfig::from_toml_str(&text).unwrap();
    assert_eq!(back, config);
}

#[test]
fn test_parity_config() {
    let config = SessionConfig::parity();
    assert_eq!(config.zoom.policy, ZoomPolicy::Unbounded);
    assert!(!config.decode.ignore_stale);
    assert_eq!(config.zoom.factor, ZOOM_STEP);
}

#[test]
fn test_partial_toml_uses_defaults() {
    let config = SessionConfig::from_toml_str(
        r##"
[controls]
circle_size = 44
font_color = "#00f"
"##,
    )
    .unwrap();
    assert_eq!(config.controls.circle_size, 44.0);
    assert_eq!(config.controls.font_color, Rgba8::rgb(0, 0, 255));
    assert_eq!(config.controls.circle_color, Rgba8::RED);
    assert_eq!(config.zoom.factor, ZOOM_STEP);
    assert!(config.decode.ignore_stale);
}

#[test]
fn test_empty_toml_is_default() {
    assert_eq!(
        SessionConfig::from_toml_str("").unwrap(),
        SessionConfig::default()
    );
}

#[test]
fn test_zoom_policy_toml() {
    let config = SessionConfig::from_toml_str(
        r#"
[zoom]
factor = 1.25
policy = { mode = "clamped", min = 0.1, max = 8.0 }
"#,
    )
    .unwrap();
    assert_eq!(config.zoom.factor, 1.25);
    assert_eq!(config.zoom.policy, ZoomPolicy::Clamped { min: 0.1, max: 8.0 });

    let config = SessionConfig::from_toml_str(
        r#"
[zoom]
factor = 1.1
policy = { mode = "unbounded" }
"#,
    )
    .unwrap();
    assert_eq!(config.zoom.policy, ZoomPolicy::Unbounded);
}

#[test]
fn test_zoom_policy_display() {
    assert_eq!(ZoomPolicy::Unbounded.to_string(), "Unbounded");
    assert_eq!(
        ZoomPolicy::Clamped { min: 0.5, max: 4.0 }.to_string(),
        "Clamped (0.5..4)"
    );
}

#[test]
fn test_rejects_invalid_values() {
    let cases = [
        "[zoom]\nfactor = 1.0\npolicy = { mode = \"unbounded\" }\n",
        "[zoom]\nfactor = 0.5\npolicy = { mode = \"unbounded\" }\n",
        "[zoom]\nfactor = 1.1\npolicy = { mode = \"clamped\", min = 2.0, max = 1.0 }\n",
        "[zoom]\nfactor = 1.1\npolicy = { mode = \"clamped\", min = 0.0, max = 1.0 }\n",
        "[render]\nline_width = 0.0\n",
        "[export]\nfile_name = \"  \"\n",
    ];
    for case in cases {
        let err = SessionConfig::from_toml_str(case).unwrap_err();
        assert!(
            matches!(err, PinmarkError::InvalidConfig(_)),
            "{case:?} gave {err}"
        );
    }
}

#[test]
fn test_rejects_bad_color_and_syntax() {
    let err = SessionConfig::from_toml_str("[controls]\ncircle_color = \"crimson\"\n").unwrap_err();
    assert!(matches!(err, PinmarkError::InvalidConfig(_)));

    let err = SessionConfig::from_toml_str("[zoom\nfactor = 2").unwrap_err();
    assert!(matches!(err, PinmarkError::InvalidConfig(_)));
}

#[test]
fn test_load_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("pinmark.toml");
    let mut config = SessionConfig::default();
    config.controls.font_size = 20.0;
    std::fs::write(&path, config.to_toml_string().unwrap()).unwrap();

    assert_eq!(SessionConfig::load(&path).unwrap(), config);
    assert!(matches!(
        SessionConfig::load(&dir.path().join("nope.toml")),
        Err(PinmarkError::Io(_))
    ));
}
