use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use pinmark_core::color::Rgba8;
use pinmark_core::event::SessionEvent;
use pinmark_core::transform::ScreenPoint;
use tracing::info;

use super::{load_config, open_session, output_path, write_output};
use crate::summary::print_session_summary;

#[derive(Args)]
pub struct AnnotateArgs {
    /// Input image file
    pub file: PathBuf,

    /// Click position as X,Y in canvas pixels, after zoom and offsets (repeatable)
    #[arg(short, long = "marker", value_parser = parse_point)]
    pub markers: Vec<ScreenPoint>,

    /// Zoom in this many steps
    #[arg(long, default_value = "0")]
    pub zoom_in: u32,

    /// Zoom out this many steps
    #[arg(long, default_value = "0")]
    pub zoom_out: u32,

    /// Horizontal offset in canvas pixels
    #[arg(long, default_value = "0", allow_hyphen_values = true)]
    pub offset_x: i32,

    /// Vertical offset in canvas pixels
    #[arg(long, default_value = "0", allow_hyphen_values = true)]
    pub offset_y: i32,

    /// Circle diameter in pixels
    #[arg(long)]
    pub circle_size: Option<f32>,

    /// Circle outline color (#rgb, #rrggbb or #rrggbbaa)
    #[arg(long)]
    pub circle_color: Option<Rgba8>,

    /// Marker number color
    #[arg(long)]
    pub font_color: Option<Rgba8>,

    /// Marker number size in pixels
    #[arg(long)]
    pub font_size: Option<f32>,

    /// Session config file (TOML)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Unbounded zoom and last-decode-wins uploads
    #[arg(long)]
    pub parity: bool,

    /// Print the result as a PNG data URL instead of writing a file
    #[arg(long)]
    pub data_url: bool,

    /// Output file path [default: the config's export file name]
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

pub fn run(args: &AnnotateArgs) -> Result<()> {
    let config = load_config(args.config.as_ref(), args.parity)?;
    let output = output_path(args.output.as_ref(), &config);
    let mut session = open_session(config, &args.file)?;

    for event in style_events(args) {
        session.apply(&event);
    }

    for _ in 0..args.zoom_in {
        session.zoom_in();
    }
    for _ in 0..args.zoom_out {
        session.zoom_out();
    }
    session.set_offset_x(args.offset_x);
    session.set_offset_y(args.offset_y);

    for &point in &args.markers {
        if let Some(number) = session.place_marker(point) {
            info!(number, x = point.x, y = point.y, "Marker placed");
        }
    }

    if !args.data_url {
        print_session_summary(&session, &args.file, &output);
    }
    write_output(&session, &output, args.data_url)
}

fn style_events(args: &AnnotateArgs) -> Vec<SessionEvent> {
    let mut events = Vec::new();
    if let Some(size) = args.circle_size {
        events.push(SessionEvent::SetCircleSize { size });
    }
    if let Some(color) = args.circle_color {
        events.push(SessionEvent::SetCircleColor { color });
    }
    if let Some(color) = args.font_color {
        events.push(SessionEvent::SetFontColor { color });
    }
    if let Some(size) = args.font_size {
        events.push(SessionEvent::SetFontSize { size });
    }
    events
}

fn parse_point(s: &str) -> std::result::Result<ScreenPoint, String> {
    let (x, y) = s
        .split_once(',')
        .ok_or_else(|| format!("expected X,Y, got '{s}'"))?;
    let x: f64 = x.trim().parse().map_err(|e| format!("bad X in '{s}': {e}"))?;
    let y: f64 = y.trim().parse().map_err(|e| format!("bad Y in '{s}': {e}"))?;
    if !x.is_finite() || !y.is_finite() {
        return Err(format!("coordinates must be finite, got '{s}'"));
    }
    Ok(ScreenPoint::new(x, y))
}
