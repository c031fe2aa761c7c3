//! Render configuration: figure geometry, resolution and output location

use std::path::{Path, PathBuf};

/// Figure and output settings shared by every chart of a run
#[derive(Debug, Clone, PartialEq)]
pub struct RenderConfig {
    /// Directory the chart files are written to
    pub output_dir: PathBuf,
    /// Dots per inch; also written to the PNG pHYs chunk
    pub dpi: u32,
    /// Figure width in inches
    pub width_in: f64,
    /// Figure height in inches
    pub height_in: f64,
    /// Extra width reserved for a legend drawn beside the plot area
    pub legend_column_in: f64,
    /// Padding kept around the content when cropping tightly
    pub crop_pad_in: f64,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self::publication()
    }
}

impl RenderConfig {
    /// 10 x 6 inch figures at 300 DPI, written to the working directory
    pub fn publication() -> Self {
        Self {
            output_dir: PathBuf::from("."),
            dpi: 300,
            width_in: 10.0,
            height_in: 6.0,
            legend_column_in: 3.2,
            crop_pad_in: 0.1,
        }
    }

    /// Same layout at screen resolution, for quick looks and tests
    pub fn preview() -> Self {
        Self {
            dpi: 72,
            ..Self::publication()
        }
    }

    pub fn with_output_dir<P: AsRef<Path>>(mut self, dir: P) -> Self {
        self.output_dir = dir.as_ref().to_path_buf();
        self
    }

    pub fn with_dpi(mut self, dpi: u32) -> Self {
        self.dpi = dpi;
        self
    }

    /// Convert inches to whole pixels at the configured DPI
    pub fn inches_to_px(&self, inches: f64) -> u32 {
        (inches * self.dpi as f64).round() as u32
    }

    /// Canvas size in pixels, optionally widened for a side legend
    pub fn canvas_px(&self, side_legend: bool) -> (u32, u32) {
        let width = if side_legend {
            self.width_in + self.legend_column_in
        } else {
            self.width_in
        };
        (self.inches_to_px(width), self.inches_to_px(self.height_in))
    }

    /// Full path of a chart file inside the output directory
    pub fn output_path(&self, file_name: &str) -> PathBuf {
        self.output_dir.join(file_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_publication_canvas() {
        let config = RenderConfig::publication();
        assert_eq!(config.canvas_px(false), (3000, 1800));
        assert_eq!(config.canvas_px(true), (3960, 1800));
    }

    #[test]
    fn test_preview_keeps_geometry() {
        let config = RenderConfig::preview().with_output_dir("/tmp/out");
        assert_eq!(config.canvas_px(false), (720, 432));
        assert_eq!(config.output_path("a.png"), PathBuf::from("/tmp/out/a.png"));
    }
}
