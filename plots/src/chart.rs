//! Explicit chart object
//!
//! A [`Chart`] owns everything needed to draw one figure: title, axis
//! descriptions and scales, series and legend placement. Nothing is shared
//! between charts; [`Chart::save`] rasterizes into a fresh buffer every time.

use crate::config::RenderConfig;
use crate::error::{ChartError, ChartResult};
use crate::raster::{blank_canvas, crop_tight, write_png};
use crate::style::{cycle_color, pt_to_px, pt_to_px_i32, LinePattern, Marker, SeriesStyle};
use image::{Rgb, RgbImage};
use plotters::coord::ranged1d::{AsRangedCoord, KeyPointHint, NoDefaultFormatting, Ranged, ValueFormatter};
use plotters::coord::types::RangedCoordf64;
use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::series::{DashedLineSeries, DottedLineSeries};
use plotters::style::text_anchor::{HPos, Pos, VPos};
use std::ops::Range;
use std::path::Path;
use tracing::debug;

const BACKGROUND: Rgb<u8> = Rgb([255, 255, 255]);

// Font sizes and spacing, in points
const TITLE_PT: f64 = 14.0;
const AXIS_DESC_PT: f64 = 12.0;
const TICK_LABEL_PT: f64 = 10.0;
const MARGIN_PT: f64 = 10.0;
const X_LABEL_AREA_PT: f64 = 40.0;
const Y_LABEL_AREA_PT: f64 = 62.0;
const GRID_ALPHA: f64 = 0.3;

/// Axis scale
#[derive(Debug, Clone, PartialEq)]
pub enum Axis {
    Log,
    Linear,
    /// Linear with labelled ticks at exactly these values
    Ticked(Vec<f64>),
}

impl Axis {
    pub fn is_log(&self) -> bool {
        matches!(self, Axis::Log)
    }
}

/// Where the legend is drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LegendPlacement {
    /// Upper-left corner inside the plot area
    Inside,
    /// Column to the right of the plot area, top-aligned with it
    OutsideRight,
}

/// Whitespace handling when saving
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CropMode {
    /// Keep the full canvas
    Full,
    /// Trim to the drawn content plus the configured padding
    Tight,
}

/// One labelled line of a chart
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    pub label: String,
    pub points: Vec<(f64, f64)>,
    pub style: SeriesStyle,
}

impl Series {
    pub fn y_values(&self) -> Vec<f64> {
        self.points.iter().map(|&(_, y)| y).collect()
    }
}

/// A single figure
#[derive(Debug, Clone, PartialEq)]
pub struct Chart {
    title: Vec<String>,
    x_desc: String,
    y_desc: String,
    x_axis: Axis,
    y_axis: Axis,
    legend: LegendPlacement,
    legend_font_pt: f64,
    crop: CropMode,
    series: Vec<Series>,
}

impl Chart {
    /// New empty chart; `title` may span several lines separated by `\n`
    pub fn new(title: &str) -> Self {
        Self {
            title: title.lines().map(str::to_string).collect(),
            x_desc: String::new(),
            y_desc: String::new(),
            x_axis: Axis::Linear,
            y_axis: Axis::Linear,
            legend: LegendPlacement::Inside,
            legend_font_pt: 10.0,
            crop: CropMode::Full,
            series: Vec::new(),
        }
    }

    pub fn x_axis<S: Into<String>>(mut self, desc: S, axis: Axis) -> Self {
        self.x_desc = desc.into();
        self.x_axis = axis;
        self
    }

    pub fn y_axis<S: Into<String>>(mut self, desc: S, axis: Axis) -> Self {
        self.y_desc = desc.into();
        self.y_axis = axis;
        self
    }

    pub fn legend(mut self, placement: LegendPlacement, font_pt: f64) -> Self {
        self.legend = placement;
        self.legend_font_pt = font_pt;
        self
    }

    pub fn crop(mut self, mode: CropMode) -> Self {
        self.crop = mode;
        self
    }

    /// Color the next pushed series gets from the cycle
    pub fn next_color(&self) -> RGBColor {
        cycle_color(self.series.len())
    }

    pub fn push_series<S: Into<String>>(
        &mut self,
        label: S,
        points: Vec<(f64, f64)>,
        style: SeriesStyle,
    ) {
        self.series.push(Series {
            label: label.into(),
            points,
            style,
        });
    }

    pub fn title_lines(&self) -> &[String] {
        &self.title
    }

    pub fn legend_placement(&self) -> LegendPlacement {
        self.legend
    }

    pub fn crop_mode(&self) -> CropMode {
        self.crop
    }

    pub fn series(&self) -> &[Series] {
        &self.series
    }

    pub fn series_count(&self) -> usize {
        self.series.len()
    }

    pub fn series_by_label(&self, label: &str) -> Option<&Series> {
        self.series.iter().find(|s| s.label == label)
    }

    fn title_text(&self) -> String {
        self.title.join(" / ")
    }

    /// Padded data ranges for both axes
    pub fn data_ranges(&self) -> ChartResult<(Range<f64>, Range<f64>)> {
        let xs: Vec<f64> = self
            .series
            .iter()
            .flat_map(|s| s.points.iter().map(|&(x, _)| x))
            .collect();
        let ys: Vec<f64> = self
            .series
            .iter()
            .flat_map(|s| s.points.iter().map(|&(_, y)| y))
            .collect();

        let x = padded_range(&xs, self.x_axis.is_log())
            .map_err(|reason| ChartError::invalid_chart(self.title_text(), format!("x axis: {reason}")))?;
        let y = padded_range(&ys, self.y_axis.is_log())
            .map_err(|reason| ChartError::invalid_chart(self.title_text(), format!("y axis: {reason}")))?;
        Ok((x, y))
    }

    /// Draw the chart into an RGB image sized from `config`
    pub fn rasterize(&self, config: &RenderConfig) -> ChartResult<RgbImage> {
        let side_legend = self.legend == LegendPlacement::OutsideRight;
        let (width, height) = config.canvas_px(side_legend);
        let mut image = blank_canvas(width, height, BACKGROUND);

        {
            let root = BitMapBackend::with_buffer(&mut image, (width, height)).into_drawing_area();
            root.fill(&WHITE)?;
            self.draw(&root, config)?;
            root.present()?;
        }

        Ok(match self.crop {
            CropMode::Full => image,
            CropMode::Tight => crop_tight(&image, BACKGROUND, config.inches_to_px(config.crop_pad_in)),
        })
    }

    /// Rasterize and write a PNG to `path`, replacing any existing file
    pub fn save(&self, path: &Path, config: &RenderConfig) -> ChartResult<()> {
        let image = self.rasterize(config)?;
        debug!(
            path = %path.display(),
            width = image.width(),
            height = image.height(),
            series = self.series.len(),
            "encoding chart"
        );
        write_png(&image, path, config.dpi)
    }

    fn draw<DB: DrawingBackend>(
        &self,
        root: &DrawingArea<DB, Shift>,
        config: &RenderConfig,
    ) -> ChartResult<()> {
        let (x_range, y_range) = self.data_ranges()?;
        let dpi = config.dpi;
        let (width, _) = root.dim_in_pixel();

        let margin = pt_to_px_i32(MARGIN_PT, dpi);
        let title_px = pt_to_px(TITLE_PT, dpi);
        let line_height = (title_px * 1.25).round() as i32;
        let band_height = margin + line_height * self.title.len() as i32;

        let legend_width = match self.legend {
            LegendPlacement::OutsideRight => config.inches_to_px(config.legend_column_in) as i32,
            LegendPlacement::Inside => 0,
        };
        let plot_width = width as i32 - legend_width;

        let (band, body) = root.split_vertically(band_height);
        let title_style = TextStyle::from(("sans-serif", title_px).into_font())
            .pos(Pos::new(HPos::Center, VPos::Top));
        for (i, line) in self.title.iter().enumerate() {
            band.draw_text(line, &title_style, (plot_width / 2, margin + i as i32 * line_height))?;
        }

        let (plot_area, legend_area) = body.split_horizontally(plot_width);

        let mut builder = ChartBuilder::on(&plot_area);
        builder
            .margin(margin)
            .x_label_area_size(pt_to_px_i32(X_LABEL_AREA_PT, dpi))
            .y_label_area_size(pt_to_px_i32(Y_LABEL_AREA_PT, dpi));
        self.build_x(&mut builder, x_range, y_range, dpi)?;

        if self.legend == LegendPlacement::OutsideRight {
            self.draw_side_legend(&legend_area, margin, dpi)?;
        }
        Ok(())
    }

    fn build_x<DB: DrawingBackend>(
        &self,
        builder: &mut ChartBuilder<'_, '_, DB>,
        x: Range<f64>,
        y: Range<f64>,
        dpi: u32,
    ) -> ChartResult<()> {
        match &self.x_axis {
            Axis::Log => self.build_y(builder, x.log_scale(), y, dpi),
            Axis::Linear => self.build_y(builder, x, y, dpi),
            Axis::Ticked(ticks) => self.build_y(builder, FixedTicks::new(x, ticks), y, dpi),
        }
    }

    fn build_y<DB, XS>(
        &self,
        builder: &mut ChartBuilder<'_, '_, DB>,
        x: XS,
        y: Range<f64>,
        dpi: u32,
    ) -> ChartResult<()>
    where
        DB: DrawingBackend,
        XS: AsRangedCoord<Value = f64>,
        XS::CoordDescType: Ranged<ValueType = f64> + ValueFormatter<f64>,
    {
        match &self.y_axis {
            Axis::Log => {
                let mut ctx = builder.build_cartesian_2d(x, y.log_scale())?;
                self.plot(&mut ctx, dpi)
            }
            Axis::Linear => {
                let mut ctx = builder.build_cartesian_2d(x, y)?;
                self.plot(&mut ctx, dpi)
            }
            Axis::Ticked(ticks) => {
                let mut ctx = builder.build_cartesian_2d(x, FixedTicks::new(y, ticks))?;
                self.plot(&mut ctx, dpi)
            }
        }
    }

    fn plot<'a, DB, X, Y>(
        &self,
        ctx: &mut ChartContext<'a, DB, Cartesian2d<X, Y>>,
        dpi: u32,
    ) -> ChartResult<()>
    where
        DB: DrawingBackend + 'a,
        X: Ranged<ValueType = f64> + ValueFormatter<f64>,
        Y: Ranged<ValueType = f64> + ValueFormatter<f64>,
    {
        ctx.configure_mesh()
            .x_desc(self.x_desc.as_str())
            .y_desc(self.y_desc.as_str())
            .x_label_formatter(&|v| format_tick(*v))
            .y_label_formatter(&|v| format_tick(*v))
            .axis_desc_style(("sans-serif", pt_to_px(AXIS_DESC_PT, dpi)).into_font())
            .label_style(("sans-serif", pt_to_px(TICK_LABEL_PT, dpi)).into_font())
            .bold_line_style(&BLACK.mix(GRID_ALPHA))
            .light_line_style(&TRANSPARENT)
            .draw()?;

        let legend_px = pt_to_px(self.legend_font_pt, dpi);
        let handle = (legend_px * 2.0).round() as i32;

        for series in &self.series {
            let style = series.style;
            let color = style.color.mix(style.alpha);
            let lw = pt_to_px_i32(style.line_width_pt, dpi) as u32;
            let ms = pt_to_px_i32(style.marker_size_pt, dpi);

            let points = series.points.iter().copied();
            match style.pattern {
                LinePattern::Solid => {
                    ctx.draw_series(LineSeries::new(points, color.stroke_width(lw)))?;
                }
                LinePattern::Dashed => {
                    let (dash, gap) = pattern_px(style.pattern, lw);
                    ctx.draw_series(DashedLineSeries::new(
                        points,
                        dash,
                        gap,
                        color.stroke_width(lw),
                    ))?;
                }
                LinePattern::Dotted => {
                    let (dot, gap) = pattern_px(style.pattern, lw);
                    let radius = (dot / 2).max(1) as i32;
                    ctx.draw_series(DottedLineSeries::new(points, 0, dot + gap, move |c| {
                        Circle::new(c, radius, color.filled())
                    }))?;
                }
            }

            let anno = match style.marker {
                Marker::Circle => ctx.draw_series(
                    series
                        .points
                        .iter()
                        .map(|&p| Circle::new(p, ms, color.filled())),
                )?,
                Marker::Square => ctx.draw_series(series.points.iter().map(|&p| {
                    EmptyElement::<(f64, f64), DB>::at(p)
                        + Rectangle::new([(-ms, -ms), (ms, ms)], color.filled())
                }))?,
                Marker::Triangle => ctx.draw_series(
                    series
                        .points
                        .iter()
                        .map(|&p| TriangleMarker::new(p, ms, color.filled())),
                )?,
            };

            if self.legend != LegendPlacement::Inside {
                continue;
            }
            anno.label(series.label.as_str());
            match style.marker {
                Marker::Circle => {
                    anno.legend(move |(x, y)| {
                        EmptyElement::<(i32, i32), DB>::at((x, y))
                            + PathElement::new(vec![(0, 0), (handle, 0)], color.stroke_width(lw))
                            + Circle::new((handle / 2, 0), ms, color.filled())
                    });
                }
                Marker::Square => {
                    anno.legend(move |(x, y)| {
                        EmptyElement::<(i32, i32), DB>::at((x, y))
                            + PathElement::new(vec![(0, 0), (handle, 0)], color.stroke_width(lw))
                            + Rectangle::new(
                                [(handle / 2 - ms, -ms), (handle / 2 + ms, ms)],
                                color.filled(),
                            )
                    });
                }
                Marker::Triangle => {
                    anno.legend(move |(x, y)| {
                        EmptyElement::<(i32, i32), DB>::at((x, y))
                            + PathElement::new(vec![(0, 0), (handle, 0)], color.stroke_width(lw))
                            + TriangleMarker::new((handle / 2, 0), ms, color.filled())
                    });
                }
            }
        }

        if self.legend == LegendPlacement::Inside {
            ctx.configure_series_labels()
                .position(SeriesLabelPosition::UpperLeft)
                .margin(pt_to_px_i32(6.0, dpi))
                .legend_area_size(handle + pt_to_px_i32(4.0, dpi))
                .label_font(("sans-serif", legend_px).into_font())
                .background_style(&WHITE.mix(0.8))
                .border_style(&BLACK.mix(GRID_ALPHA))
                .draw()?;
        }
        Ok(())
    }

    /// Legend column drawn beside the plot, one row per series
    fn draw_side_legend<DB: DrawingBackend>(
        &self,
        area: &DrawingArea<DB, Shift>,
        top: i32,
        dpi: u32,
    ) -> ChartResult<()> {
        let font_px = pt_to_px(self.legend_font_pt, dpi);
        let row = (font_px * 1.4).round() as i32;
        let pad = pt_to_px_i32(4.0, dpi);
        let handle = (font_px * 2.0).round() as i32;
        let left = pt_to_px_i32(MARGIN_PT, dpi);
        let (width, _) = area.dim_in_pixel();

        let bottom = top + 2 * pad + row * self.series.len() as i32;
        area.draw(&Rectangle::new(
            [(left, top), (width as i32 - pad, bottom)],
            WHITE.mix(0.8).filled(),
        ))?;
        area.draw(&Rectangle::new(
            [(left, top), (width as i32 - pad, bottom)],
            BLACK.mix(GRID_ALPHA).stroke_width(pt_to_px_i32(0.8, dpi) as u32),
        ))?;

        let label_style = TextStyle::from(("sans-serif", font_px).into_font())
            .pos(Pos::new(HPos::Left, VPos::Center));

        for (i, series) in self.series.iter().enumerate() {
            let style = series.style;
            let color = style.color.mix(style.alpha);
            let lw = pt_to_px_i32(style.line_width_pt, dpi) as u32;
            let ms = pt_to_px_i32(style.marker_size_pt, dpi);

            let y = top + pad + row * i as i32 + row / 2;
            let x0 = left + pad;
            let x1 = x0 + handle;

            let handle_line = vec![(x0, y), (x1, y)];
            match style.pattern {
                LinePattern::Solid => {
                    area.draw(&PathElement::new(handle_line, color.stroke_width(lw)))?;
                }
                LinePattern::Dashed => {
                    let (dash, gap) = pattern_px(style.pattern, lw);
                    for element in
                        DashedLineSeries::new(handle_line, dash, gap, color.stroke_width(lw))
                    {
                        area.draw(&element)?;
                    }
                }
                LinePattern::Dotted => {
                    let (dot, gap) = pattern_px(style.pattern, lw);
                    let radius = (dot / 2).max(1) as i32;
                    for element in DottedLineSeries::new(handle_line, 0, dot + gap, move |c| {
                        Circle::new(c, radius, color.filled())
                    }) {
                        area.draw(&element)?;
                    }
                }
            }

            let center = ((x0 + x1) / 2, y);
            match style.marker {
                Marker::Circle => area.draw(&Circle::new(center, ms, color.filled()))?,
                Marker::Square => area.draw(&Rectangle::new(
                    [(center.0 - ms, y - ms), (center.0 + ms, y + ms)],
                    color.filled(),
                ))?,
                Marker::Triangle => area.draw(&TriangleMarker::new(center, ms, color.filled()))?,
            }

            area.draw_text(&series.label, &label_style, (x1 + pad, y))?;
        }
        Ok(())
    }
}

/// Data range with a 5% margin on each side; the margin is taken in log
/// space for log axes
fn padded_range(values: &[f64], log: bool) -> Result<Range<f64>, String> {
    if values.is_empty() {
        return Err("no data".to_string());
    }
    if values.iter().any(|v| !v.is_finite()) {
        return Err("non-finite value".to_string());
    }
    if log && values.iter().any(|&v| v <= 0.0) {
        return Err("non-positive value on log scale".to_string());
    }

    let lo = values.iter().copied().fold(f64::INFINITY, f64::min);
    let hi = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);

    Ok(if log {
        let factor = if hi > lo { (hi / lo).powf(0.05) } else { 1.1 };
        (lo / factor)..(hi * factor)
    } else {
        let pad = if hi > lo { (hi - lo) * 0.05 } else { 1.0 };
        (lo - pad)..(hi + pad)
    })
}

/// Tick label text: integers plainly, large values in exponent form
pub fn format_tick(value: f64) -> String {
    if value.abs() >= 1e5 {
        return format!("{:.0e}", value);
    }
    if (value - value.round()).abs() < 1e-9 {
        return format!("{:.0}", value);
    }
    let text = format!("{:.3}", value);
    text.trim_end_matches('0').trim_end_matches('.').to_string()
}

/// Dash (or dot) length and gap in pixels for a stroke `lw` pixels wide
fn pattern_px(pattern: LinePattern, lw: u32) -> (u32, u32) {
    let (on, off) = pattern.dash_gap().unwrap_or((1.0, 0.0));
    let scale = |v: f64| ((v * lw as f64).round() as u32).max(1);
    (scale(on), scale(off))
}

/// Linear f64 axis whose ticks and grid lines sit at a fixed list of values
#[derive(Clone)]
pub struct FixedTicks {
    inner: RangedCoordf64,
    ticks: Vec<f64>,
}

impl FixedTicks {
    pub fn new(range: Range<f64>, ticks: &[f64]) -> Self {
        let ticks = ticks
            .iter()
            .copied()
            .filter(|t| range.start <= *t && *t <= range.end)
            .collect();
        Self {
            inner: range.into(),
            ticks,
        }
    }
}

impl Ranged for FixedTicks {
    type FormatOption = NoDefaultFormatting;
    type ValueType = f64;

    fn map(&self, value: &f64, limit: (i32, i32)) -> i32 {
        self.inner.map(value, limit)
    }

    fn key_points<Hint: KeyPointHint>(&self, _hint: Hint) -> Vec<f64> {
        self.ticks.clone()
    }

    fn range(&self) -> Range<f64> {
        self.inner.range()
    }
}

impl ValueFormatter<f64> for FixedTicks {
    fn format(value: &f64) -> String {
        format_tick(*value)
    }

    fn format_ext(&self, value: &f64) -> String {
        format_tick(*value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line_chart() -> Chart {
        let mut chart = Chart::new("Demo\nSecond line")
            .x_axis("x", Axis::Log)
            .y_axis("y", Axis::Linear);
        let color = chart.next_color();
        chart.push_series(
            "first",
            vec![(10.0, 1.0), (100.0, 3.0)],
            SeriesStyle::new(color, Marker::Circle),
        );
        chart
    }

    #[test]
    fn test_title_lines_split() {
        let chart = line_chart();
        assert_eq!(chart.title_lines(), ["Demo", "Second line"]);
        assert_eq!(chart.series_count(), 1);
        assert_eq!(chart.next_color(), cycle_color(1));
    }

    #[test]
    fn test_log_range_padding() {
        let range = padded_range(&[10.0, 1000.0], true).unwrap();
        let factor = 100f64.powf(0.05);
        assert!((range.start - 10.0 / factor).abs() < 1e-9);
        assert!((range.end - 1000.0 * factor).abs() < 1e-9);
    }

    #[test]
    fn test_linear_range_padding() {
        let range = padded_range(&[0.0, 20.0], false).unwrap();
        assert_eq!(range, -1.0..21.0);
        let single = padded_range(&[5.0], false).unwrap();
        assert_eq!(single, 4.0..6.0);
    }

    #[test]
    fn test_log_range_rejects_non_positive() {
        assert!(padded_range(&[0.0, 1.0], true).is_err());
        assert!(padded_range(&[], false).is_err());
        assert!(padded_range(&[f64::NAN], false).is_err());
    }

    #[test]
    fn test_empty_chart_is_invalid() {
        let chart = Chart::new("Empty").x_axis("x", Axis::Log);
        assert!(matches!(
            chart.data_ranges(),
            Err(ChartError::InvalidChart { .. })
        ));
    }

    #[test]
    fn test_format_tick() {
        assert_eq!(format_tick(64.0), "64");
        assert_eq!(format_tick(0.5), "0.5");
        assert_eq!(format_tick(0.30000000000000004), "0.3");
        assert_eq!(format_tick(1e7), "1e7");
        assert_eq!(format_tick(20000.0), "20000");
    }

    #[test]
    fn test_fixed_ticks_key_points() {
        let axis = FixedTicks::new(0.65..8.35, &[1.0, 2.0, 4.0, 8.0, 16.0]);
        assert_eq!(axis.key_points(10usize), vec![1.0, 2.0, 4.0, 8.0]);
        assert_eq!(axis.range(), 0.65..8.35);
        assert_eq!(axis.format_ext(&4.0), "4");
        assert!(axis.map(&1.0, (0, 100)) < axis.map(&8.0, (0, 100)));
    }

    #[test]
    fn test_pattern_px_scales_with_line_width() {
        assert_eq!(pattern_px(LinePattern::Dashed, 10), (37, 16));
        assert_eq!(pattern_px(LinePattern::Dotted, 10), (10, 17));
        assert_eq!(pattern_px(LinePattern::Solid, 4), (4, 1));
    }

    #[test]
    fn test_rasterize_ticked_axis_chart() {
        let mut chart = Chart::new("Ticked")
            .x_axis("threads", Axis::Ticked(vec![1.0, 2.0, 4.0, 8.0]))
            .y_axis("gbps", Axis::Linear);
        let color = chart.next_color();
        chart.push_series(
            "series",
            vec![(1.0, 3.0), (2.0, 5.0), (4.0, 6.5), (8.0, 7.0)],
            SeriesStyle::new(color, Marker::Square),
        );

        let image = chart.rasterize(&RenderConfig::preview()).unwrap();
        assert_eq!(image.dimensions(), (720, 432));
        assert!(image.pixels().any(|p| *p != BACKGROUND));
    }

    #[test]
    fn test_rasterize_patterned_side_legend_crops() {
        let mut chart = Chart::new("Patterns")
            .x_axis("size", Axis::Log)
            .y_axis("value", Axis::Log)
            .legend(LegendPlacement::OutsideRight, 8.0)
            .crop(CropMode::Tight);
        for (i, pattern) in [LinePattern::Solid, LinePattern::Dashed, LinePattern::Dotted]
            .into_iter()
            .enumerate()
        {
            let color = chart.next_color();
            let offset = (i + 1) as f64;
            chart.push_series(
                format!("line {i}"),
                vec![(64.0, offset), (4096.0, offset * 10.0), (65536.0, offset * 40.0)],
                SeriesStyle::new(color, Marker::Triangle).pattern(pattern),
            );
        }

        let config = RenderConfig::preview();
        let image = chart.rasterize(&config).unwrap();
        let (full_width, full_height) = config.canvas_px(true);
        assert!(image.width() <= full_width && image.height() <= full_height);
        assert!(image.width() > 0 && image.height() > 0);
    }
}
