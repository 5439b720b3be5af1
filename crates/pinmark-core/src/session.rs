use std::path::Path;

use image::RgbaImage;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::config::SessionConfig;
use crate::error::{PinmarkError, Result};
use crate::event::SessionEvent;
use crate::io::export::{encode_png, save_png};
use crate::io::image_io::DecodedImage;
use crate::io::intake::{DecodeOutcome, DecodeTicket};
use crate::marker::{Marker, MarkerControls};
use crate::render::Renderer;
use crate::transform::{CanvasBounds, ImagePoint, ScreenPoint, ViewTransform};

/// Which screen the user is looking at.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ViewMode {
    #[default]
    Welcome,
    UploadPrompt,
    Viewer,
}

impl std::fmt::Display for ViewMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Welcome => write!(f, "Welcome"),
            Self::UploadPrompt => write!(f, "Upload"),
            Self::Viewer => write!(f, "Viewer"),
        }
    }
}

/// All mutable state of one annotation session.
///
/// Owned by a single thread. Decoding happens elsewhere and is handed back
/// through [`Session::finish_decode`] with the ticket issued by
/// [`Session::begin_decode`].
pub struct Session {
    config: SessionConfig,
    mode: ViewMode,
    image: Option<DecodedImage>,
    markers: Vec<Marker>,
    transform: ViewTransform,
    controls: MarkerControls,
    renderer: Renderer,
    next_ticket: u64,
    latest_ticket: Option<DecodeTicket>,
}

impl Session {
    pub fn new(config: SessionConfig) -> Self {
        let renderer = Renderer::new(&config.render);
        Self::with_renderer(config, renderer)
    }

    pub fn with_renderer(config: SessionConfig, renderer: Renderer) -> Self {
        Self {
            controls: config.controls.clone(),
            config,
            mode: ViewMode::default(),
            image: None,
            markers: Vec::new(),
            transform: ViewTransform::default(),
            renderer,
            next_ticket: 0,
            latest_ticket: None,
        }
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Swap in a new config. Image and markers stay; controls reset to the
    /// config's values and the current scale is brought within the new zoom
    /// policy.
    pub fn reconfigure(&mut self, config: SessionConfig) {
        if config.render != self.config.render {
            self.renderer = Renderer::new(&config.render);
        }
        self.controls = config.controls.clone();
        self.transform.scale = config.zoom.policy.apply(self.transform.scale);
        self.config = config;
        info!(zoom = %self.config.zoom.policy, "Session reconfigured");
    }

    /// Restore style controls to the configured defaults.
    pub fn reset_controls(&mut self) {
        self.controls = self.config.controls.clone();
    }

    pub fn mode(&self) -> ViewMode {
        self.mode
    }

    pub fn image(&self) -> Option<&DecodedImage> {
        self.image.as_ref()
    }

    pub fn markers(&self) -> &[Marker] {
        &self.markers
    }

    pub fn transform(&self) -> &ViewTransform {
        &self.transform
    }

    pub fn renderer(&self) -> &Renderer {
        &self.renderer
    }

    pub fn controls(&self) -> &MarkerControls {
        &self.controls
    }

    /// Style controls are read at draw time; edits restyle every marker on
    /// the next render.
    pub fn controls_mut(&mut self) -> &mut MarkerControls {
        &mut self.controls
    }

    /// Canvas size in pixels: the natural image size, or 0x0 without an image.
    pub fn canvas_size(&self) -> (u32, u32) {
        self.image
            .as_ref()
            .map(|img| (img.width(), img.height()))
            .unwrap_or((0, 0))
    }

    pub fn get_started(&mut self) {
        if self.mode == ViewMode::Welcome {
            self.mode = ViewMode::UploadPrompt;
        }
    }

    /// Register a new upload. The returned ticket must accompany its decode
    /// result.
    pub fn begin_decode(&mut self) -> DecodeTicket {
        self.next_ticket += 1;
        let ticket = DecodeTicket(self.next_ticket);
        self.latest_ticket = Some(ticket);
        debug!(%ticket, "Decode started");
        ticket
    }

    /// Hand back the result of a decode started with [`Session::begin_decode`].
    ///
    /// With `decode.ignore_stale` set, results for anything but the latest
    /// ticket are dropped, failures included. Otherwise the last result to
    /// arrive wins. A failed decode leaves the session untouched.
    pub fn finish_decode(
        &mut self,
        ticket: DecodeTicket,
        result: Result<DecodedImage>,
    ) -> Result<DecodeOutcome> {
        if self.config.decode.ignore_stale && self.latest_ticket != Some(ticket) {
            debug!(%ticket, latest = ?self.latest_ticket, "Dropping stale decode");
            return Ok(DecodeOutcome::Stale);
        }

        match result {
            Ok(image) => {
                self.load_image(image);
                Ok(DecodeOutcome::Applied)
            }
            Err(e) => {
                warn!(%ticket, "Decode failed: {e}");
                Err(e)
            }
        }
    }

    /// Replace the image. Markers, transform and controls are kept.
    pub fn load_image(&mut self, image: DecodedImage) {
        info!(
            width = image.width(),
            height = image.height(),
            source = %image.source,
            "Image loaded"
        );
        self.image = Some(image);
        self.mode = ViewMode::Viewer;
    }

    /// Place a marker at canvas coordinates. Returns its 1-based number, or
    /// `None` when no image is loaded.
    pub fn place_marker(&mut self, at: ScreenPoint) -> Option<usize> {
        if self.image.is_none() {
            debug!("Ignoring click without an image");
            return None;
        }

        let p = self.transform.screen_to_image(at);
        self.markers
            .push(Marker::new(p.x, p.y, self.controls.circle_size));
        let number = self.markers.len();
        debug!(number, x = p.x, y = p.y, "Marker placed");
        Some(number)
    }

    /// Place a marker from window coordinates, normalised by the canvas
    /// position.
    pub fn click(&mut self, client_x: f64, client_y: f64, bounds: CanvasBounds) -> Option<usize> {
        self.place_marker(bounds.to_canvas(client_x, client_y))
    }

    pub fn zoom_in(&mut self) -> f64 {
        self.transform.zoom_in(&self.config.zoom);
        debug!(scale = self.transform.scale, "Zoomed in");
        self.transform.scale
    }

    pub fn zoom_out(&mut self) -> f64 {
        self.transform.zoom_out(&self.config.zoom);
        debug!(scale = self.transform.scale, "Zoomed out");
        self.transform.scale
    }

    pub fn set_offset_x(&mut self, offset: i32) {
        self.transform.offset_x = offset;
    }

    pub fn set_offset_y(&mut self, offset: i32) {
        self.transform.offset_y = offset;
    }

    pub fn apply(&mut self, event: &SessionEvent) {
        match *event {
            SessionEvent::GetStarted => self.get_started(),
            SessionEvent::Click { x, y } => {
                self.place_marker(ScreenPoint::new(x, y));
            }
            SessionEvent::ZoomIn => {
                self.zoom_in();
            }
            SessionEvent::ZoomOut => {
                self.zoom_out();
            }
            SessionEvent::SetOffsetX { offset } => self.set_offset_x(offset),
            SessionEvent::SetOffsetY { offset } => self.set_offset_y(offset),
            SessionEvent::SetCircleSize { size } => self.controls.circle_size = size,
            SessionEvent::SetCircleColor { color } => self.controls.circle_color = color,
            SessionEvent::SetFontColor { color } => self.controls.font_color = color,
            SessionEvent::SetFontSize { size } => self.controls.font_size = size,
        }
    }

    /// Numbered marker centres in canvas coordinates under the current
    /// transform.
    pub fn marker_screen_positions(&self) -> Vec<(usize, ScreenPoint)> {
        self.markers
            .iter()
            .enumerate()
            .map(|(i, m)| (i + 1, self.transform.image_to_screen(ImagePoint::new(m.x, m.y))))
            .collect()
    }

    /// Redraw the whole canvas.
    pub fn render(&self) -> Result<RgbaImage> {
        self.renderer.render(
            self.image.as_ref().map(|img| &img.pixels),
            &self.markers,
            &self.transform,
            &self.controls,
        )
    }

    /// PNG bytes of the canvas as currently composited.
    pub fn export_png(&self) -> Result<Vec<u8>> {
        if self.image.is_none() {
            return Err(PinmarkError::NoImage);
        }
        let canvas = self.render()?;
        let png = encode_png(&canvas)?;
        info!(bytes = png.len(), markers = self.markers.len(), "Canvas exported");
        Ok(png)
    }

    pub fn export_to(&self, path: &Path) -> Result<()> {
        let png = self.export_png()?;
        save_png(&png, path)?;
        info!(path = %path.display(), "Annotated image saved");
        Ok(())
    }
}
