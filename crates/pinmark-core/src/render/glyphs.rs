use std::path::Path;

use ab_glyph::{Font, FontArc, Outline, OutlineCurve};
use tiny_skia::{PathBuilder, Rect};
use tracing::{debug, warn};

use crate::consts::{FALLBACK_UNITS_PER_EM, SYSTEM_FONT_CANDIDATES};
use crate::error::{PinmarkError, Result};

/// Source of the outlines used to draw marker numbers.
#[derive(Clone)]
pub enum GlyphSource {
    Font(FontArc),
    /// Built-in seven-segment digits, used when no font can be loaded.
    Segments,
}

impl std::fmt::Debug for GlyphSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Font(_) => write!(f, "GlyphSource::Font"),
            Self::Segments => write!(f, "GlyphSource::Segments"),
        }
    }
}

impl std::fmt::Display for GlyphSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Font(_) => write!(f, "font outlines"),
            Self::Segments => write!(f, "segment digits"),
        }
    }
}

impl GlyphSource {
    /// Load the configured font, else the first readable system font, else
    /// fall back to segment digits.
    pub fn resolve(font_path: Option<&Path>) -> Self {
        if let Some(path) = font_path {
            match Self::from_file(path) {
                Ok(source) => return source,
                Err(e) => warn!(path = %path.display(), "Configured font unusable: {e}"),
            }
        }

        for candidate in SYSTEM_FONT_CANDIDATES {
            if let Ok(source) = Self::from_file(Path::new(candidate)) {
                debug!(font = candidate, "Using system font for marker labels");
                return source;
            }
        }

        debug!("No font found, using segment digits for marker labels");
        Self::Segments
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let bytes = std::fs::read(path)?;
        Self::from_font_bytes(bytes)
    }

    pub fn from_font_bytes(bytes: Vec<u8>) -> Result<Self> {
        FontArc::try_from_vec(bytes)
            .map(Self::Font)
            .map_err(|e| PinmarkError::InvalidConfig(format!("unreadable font: {e}")))
    }

    /// Fill path for `text` centred horizontally and vertically on
    /// `(cx, cy)` at `font_size` pixels. `None` when nothing would be drawn.
    pub fn label_path(&self, text: &str, cx: f32, cy: f32, font_size: f32) -> Option<tiny_skia::Path> {
        if !(font_size.is_finite() && font_size > 0.0 && cx.is_finite() && cy.is_finite()) {
            return None;
        }
        match self {
            Self::Font(font) => font_label_path(font, text, cx, cy, font_size),
            Self::Segments => segment_label_path(text, cx, cy, font_size),
        }
    }
}

fn font_label_path(font: &FontArc, text: &str, cx: f32, cy: f32, px: f32) -> Option<tiny_skia::Path> {
    let s = px / font.units_per_em().unwrap_or(FALLBACK_UNITS_PER_EM);
    let width: f32 = text
        .chars()
        .map(|c| font.h_advance_unscaled(font.glyph_id(c)))
        .sum::<f32>()
        * s;

    // Middle of the em box sits on cy.
    let baseline = cy + (font.ascent_unscaled() + font.descent_unscaled()) / 2.0 * s;
    let mut pen_x = cx - width / 2.0;

    let mut pb = PathBuilder::new();
    for c in text.chars() {
        let id = font.glyph_id(c);
        if let Some(outline) = font.outline(id) {
            append_outline(&mut pb, &outline, pen_x, baseline, s);
        }
        pen_x += font.h_advance_unscaled(id) * s;
    }
    pb.finish()
}

/// Font units are y-up; canvas pixels are y-down.
fn append_outline(pb: &mut PathBuilder, outline: &Outline, x0: f32, baseline: f32, s: f32) {
    let map = |p: ab_glyph::Point| (x0 + p.x * s, baseline - p.y * s);
    let mut last: Option<ab_glyph::Point> = None;

    for curve in &outline.curves {
        let (start, end) = match *curve {
            OutlineCurve::Line(a, b) => (a, b),
            OutlineCurve::Quad(a, _, c) => (a, c),
            OutlineCurve::Cubic(a, _, _, d) => (a, d),
        };

        if last != Some(start) {
            if last.is_some() {
                pb.close();
            }
            let (x, y) = map(start);
            pb.move_to(x, y);
        }

        match *curve {
            OutlineCurve::Line(_, b) => {
                let (x, y) = map(b);
                pb.line_to(x, y);
            }
            OutlineCurve::Quad(_, b, c) => {
                let (x1, y1) = map(b);
                let (x, y) = map(c);
                pb.quad_to(x1, y1, x, y);
            }
            OutlineCurve::Cubic(_, b, c, d) => {
                let (x1, y1) = map(b);
                let (x2, y2) = map(c);
                let (x, y) = map(d);
                pb.cubic_to(x1, y1, x2, y2, x, y);
            }
        }
        last = Some(end);
    }

    if last.is_some() {
        pb.close();
    }
}

// Segment bits: a=top, b=upper right, c=lower right, d=bottom, e=lower left,
// f=upper left, g=middle.
const SEG_A: u8 = 1 << 0;
const SEG_B: u8 = 1 << 1;
const SEG_C: u8 = 1 << 2;
const SEG_D: u8 = 1 << 3;
const SEG_E: u8 = 1 << 4;
const SEG_F: u8 = 1 << 5;
const SEG_G: u8 = 1 << 6;

const DIGIT_SEGMENTS: [u8; 10] = [
    SEG_A | SEG_B | SEG_C | SEG_D | SEG_E | SEG_F,
    SEG_B | SEG_C,
    SEG_A | SEG_B | SEG_D | SEG_E | SEG_G,
    SEG_A | SEG_B | SEG_C | SEG_D | SEG_G,
    SEG_B | SEG_C | SEG_F | SEG_G,
    SEG_A | SEG_C | SEG_D | SEG_F | SEG_G,
    SEG_A | SEG_C | SEG_D | SEG_E | SEG_F | SEG_G,
    SEG_A | SEG_B | SEG_C,
    SEG_A | SEG_B | SEG_C | SEG_D | SEG_E | SEG_F | SEG_G,
    SEG_A | SEG_B | SEG_C | SEG_D | SEG_F | SEG_G,
];

fn segment_label_path(text: &str, cx: f32, cy: f32, px: f32) -> Option<tiny_skia::Path> {
    let digits: Vec<u8> = text
        .chars()
        .filter_map(|c| c.to_digit(10))
        .map(|d| DIGIT_SEGMENTS[d as usize])
        .collect();
    if digits.is_empty() {
        return None;
    }

    let h = px * 0.72;
    let w = px * 0.4;
    let t = (px * 0.09).max(1.0);
    let gap = px * 0.12;

    let total = digits.len() as f32 * w + (digits.len() - 1) as f32 * gap;
    let top = cy - h / 2.0;
    let half = h / 2.0 + t / 2.0;
    let mid = top + (h - t) / 2.0;

    let mut pb = PathBuilder::new();
    for (i, mask) in digits.iter().enumerate() {
        let x0 = cx - total / 2.0 + i as f32 * (w + gap);
        let segments = [
            (SEG_A, x0, top, w, t),
            (SEG_B, x0 + w - t, top, t, half),
            (SEG_C, x0 + w - t, top + h / 2.0 - t / 2.0, t, half),
            (SEG_D, x0, top + h - t, w, t),
            (SEG_E, x0, top + h / 2.0 - t / 2.0, t, half),
            (SEG_F, x0, top, t, half),
            (SEG_G, x0, mid, w, t),
        ];
        for (bit, x, y, sw, sh) in segments {
            if mask & bit != 0 {
                if let Some(rect) = Rect::from_xywh(x, y, sw, sh) {
                    pb.push_rect(rect);
                }
            }
        }
    }
    pb.finish()
}
