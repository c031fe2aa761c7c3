//! Series styling: colors, markers, line patterns
//!
//! Sizes are given in points and scaled to pixels at render time so the
//! same chart looks alike at any DPI.

use crate::dataset::Strategy;
use plotters::style::RGBColor;

/// Ten-color categorical cycle, assigned to series in insertion order
pub const PALETTE: [RGBColor; 10] = [
    RGBColor(0x1f, 0x77, 0xb4),
    RGBColor(0xff, 0x7f, 0x0e),
    RGBColor(0x2c, 0xa0, 0x2c),
    RGBColor(0xd6, 0x27, 0x28),
    RGBColor(0x94, 0x67, 0xbd),
    RGBColor(0x8c, 0x56, 0x4b),
    RGBColor(0xe3, 0x77, 0xc2),
    RGBColor(0x7f, 0x7f, 0x7f),
    RGBColor(0xbc, 0xbd, 0x22),
    RGBColor(0x17, 0xbe, 0xcf),
];

/// Palette color for the `index`-th series of a chart
pub fn cycle_color(index: usize) -> RGBColor {
    PALETTE[index % PALETTE.len()]
}

/// Point-to-pixel conversion (1 pt = 1/72 inch)
pub fn pt_to_px(points: f64, dpi: u32) -> f64 {
    points * dpi as f64 / 72.0
}

/// Like [`pt_to_px`], rounded and never below one pixel
pub fn pt_to_px_i32(points: f64, dpi: u32) -> i32 {
    (pt_to_px(points, dpi).round() as i32).max(1)
}

/// Marker drawn at every data point
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Marker {
    Circle,
    Square,
    Triangle,
}

/// Stroke pattern of the connecting line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinePattern {
    Solid,
    Dashed,
    Dotted,
}

impl LinePattern {
    /// Dash and gap lengths in multiples of the line width, `None` if solid
    pub fn dash_gap(self) -> Option<(f64, f64)> {
        match self {
            LinePattern::Solid => None,
            LinePattern::Dashed => Some((3.7, 1.6)),
            LinePattern::Dotted => Some((1.0, 1.65)),
        }
    }
}

impl Strategy {
    pub fn marker(self) -> Marker {
        match self {
            Strategy::TwoCopy => Marker::Circle,
            Strategy::OneCopy => Marker::Square,
            Strategy::ZeroCopy => Marker::Triangle,
        }
    }

    pub fn line_pattern(self) -> LinePattern {
        match self {
            Strategy::TwoCopy => LinePattern::Solid,
            Strategy::OneCopy => LinePattern::Dashed,
            Strategy::ZeroCopy => LinePattern::Dotted,
        }
    }
}

/// How one series is drawn
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeriesStyle {
    pub color: RGBColor,
    pub marker: Marker,
    pub pattern: LinePattern,
    /// Line width in points
    pub line_width_pt: f64,
    /// Marker radius in points
    pub marker_size_pt: f64,
    /// Opacity of line and markers, 0.0 ..= 1.0
    pub alpha: f64,
}

impl SeriesStyle {
    /// Default look: solid 1.5 pt line, 3 pt markers, opaque
    pub fn new(color: RGBColor, marker: Marker) -> Self {
        Self {
            color,
            marker,
            pattern: LinePattern::Solid,
            line_width_pt: 1.5,
            marker_size_pt: 3.0,
            alpha: 1.0,
        }
    }

    pub fn pattern(mut self, pattern: LinePattern) -> Self {
        self.pattern = pattern;
        self
    }

    pub fn line_width(mut self, points: f64) -> Self {
        self.line_width_pt = points;
        self
    }

    pub fn alpha(mut self, alpha: f64) -> Self {
        self.alpha = alpha.clamp(0.0, 1.0);
        self
    }
}
