//! Chart renderer
//!
//! Builds the four benchmark charts from a [`BenchmarkDataset`] and writes
//! them as PNG files. Every chart is assembled in memory before the first
//! file is written, so a missing table entry or a bad derived value aborts
//! the run without leaving partial output behind.

use crate::chart::{Axis, Chart, CropMode, LegendPlacement};
use crate::config::RenderConfig;
use crate::dataset::{BenchmarkDataset, Metric, Strategy};
use crate::error::ChartResult;
use crate::metrics::cycles_per_byte_column;
use crate::style::SeriesStyle;
use crate::{MESSAGE_SIZES, SYSTEM_NAME, THREAD_COUNTS};
use std::fs;
use std::path::PathBuf;
use tracing::{debug, info};

/// Message size used by the throughput-vs-threads chart
pub const FOCUS_MESSAGE_SIZE: u64 = 4096;

/// Index into [`THREAD_COUNTS`] used by the cache-miss chart (2 threads)
pub const FOCUS_THREAD_INDEX: usize = 1;

/// The four charts, in output order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChartKind {
    ThroughputVsMessageSize,
    ThroughputVsThreads,
    CacheMissesVsMessageSize,
    CyclesPerByte,
}

impl ChartKind {
    pub const ALL: [ChartKind; 4] = [
        ChartKind::ThroughputVsMessageSize,
        ChartKind::ThroughputVsThreads,
        ChartKind::CacheMissesVsMessageSize,
        ChartKind::CyclesPerByte,
    ];

    pub fn file_name(self) -> &'static str {
        match self {
            ChartKind::ThroughputVsMessageSize => "plot1_throughput_vs_msgsize.png",
            ChartKind::ThroughputVsThreads => "plot2_throughput_vs_threads.png",
            ChartKind::CacheMissesVsMessageSize => "plot3_cache_vs_msgsize.png",
            ChartKind::CyclesPerByte => "plot4_cycles_per_byte.png",
        }
    }
}

/// Files written by a successful run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderReport {
    pub files: Vec<(ChartKind, PathBuf)>,
}

impl RenderReport {
    /// Console confirmation: a success line followed by one line per file
    pub fn confirmation_lines(&self) -> Vec<String> {
        std::iter::once("All plots generated successfully!".to_string())
            .chain(
                self.files
                    .iter()
                    .map(|(kind, _)| format!("- {}", kind.file_name())),
            )
            .collect()
    }
}

/// Renders the benchmark charts
#[derive(Debug, Clone)]
pub struct ChartRenderer {
    dataset: BenchmarkDataset,
    config: RenderConfig,
}

impl ChartRenderer {
    pub fn new(dataset: BenchmarkDataset, config: RenderConfig) -> Self {
        Self { dataset, config }
    }

    /// Recorded measurements, publication settings, working directory
    pub fn reference() -> Self {
        Self::new(BenchmarkDataset::reference(), RenderConfig::default())
    }

    /// Assemble all four charts without touching the filesystem
    pub fn build_charts(&self) -> ChartResult<Vec<(ChartKind, Chart)>> {
        ChartKind::ALL
            .iter()
            .map(|&kind| {
                let chart = self.build_chart(kind)?;
                debug!(
                    chart = kind.file_name(),
                    series = chart.series_count(),
                    "assembled chart"
                );
                Ok((kind, chart))
            })
            .collect()
    }

    pub fn build_chart(&self, kind: ChartKind) -> ChartResult<Chart> {
        match kind {
            ChartKind::ThroughputVsMessageSize => self.throughput_vs_message_size(),
            ChartKind::ThroughputVsThreads => self.throughput_vs_threads(),
            ChartKind::CacheMissesVsMessageSize => self.cache_misses_vs_message_size(),
            ChartKind::CyclesPerByte => self.cycles_per_byte(),
        }
    }

    /// Build every chart, then write them one after another
    pub fn render_all(&self) -> ChartResult<RenderReport> {
        let charts = self.build_charts()?;

        fs::create_dir_all(&self.config.output_dir)?;

        let mut files = Vec::with_capacity(charts.len());
        for (kind, chart) in charts {
            let path = self.config.output_path(kind.file_name());
            chart.save(&path, &self.config)?;
            info!(path = %path.display(), "chart written");
            files.push((kind, path));
        }
        Ok(RenderReport { files })
    }

    fn throughput_vs_message_size(&self) -> ChartResult<Chart> {
        let mut chart = Chart::new(&format!(
            "Throughput vs Message Size\nSystem: {SYSTEM_NAME}"
        ))
        .x_axis("Message Size (bytes)", Axis::Log)
        .y_axis("Throughput (Gbps)", Axis::Log)
        .legend(LegendPlacement::OutsideRight, 8.0)
        .crop(CropMode::Tight);

        for (index, threads) in THREAD_COUNTS.iter().enumerate() {
            for strategy in Strategy::ALL {
                let values = self
                    .dataset
                    .table(strategy, Metric::Throughput)?
                    .column(&MESSAGE_SIZES, index)?;
                let style = SeriesStyle::new(chart.next_color(), strategy.marker())
                    .pattern(strategy.line_pattern());
                chart.push_series(
                    format!("{strategy} {threads}T"),
                    size_points(&values),
                    style,
                );
            }
        }
        Ok(chart)
    }

    fn throughput_vs_threads(&self) -> ChartResult<Chart> {
        let ticks: Vec<f64> = THREAD_COUNTS.iter().map(|&t| t as f64).collect();
        let mut chart = Chart::new(&format!(
            "Throughput vs Thread Count (Message Size = {FOCUS_MESSAGE_SIZE} bytes)\nSystem: {SYSTEM_NAME}"
        ))
        .x_axis("Thread Count", Axis::Ticked(ticks.clone()))
        .y_axis("Throughput (Gbps)", Axis::Linear)
        .legend(LegendPlacement::Inside, 10.0);

        for strategy in Strategy::ALL {
            let row = self
                .dataset
                .table(strategy, Metric::Throughput)?
                .row(FOCUS_MESSAGE_SIZE)?;
            let points = ticks.iter().copied().zip(row.iter().copied()).collect();
            let style = SeriesStyle::new(chart.next_color(), strategy.marker()).line_width(2.0);
            chart.push_series(strategy.to_string(), points, style);
        }
        Ok(chart)
    }

    fn cache_misses_vs_message_size(&self) -> ChartResult<Chart> {
        let threads = THREAD_COUNTS[FOCUS_THREAD_INDEX];
        let mut chart = Chart::new(&format!(
            "Cache Misses vs Message Size (Threads = {threads})\nSystem: {SYSTEM_NAME}"
        ))
        .x_axis("Message Size (bytes)", Axis::Log)
        .y_axis("Cache Misses", Axis::Log)
        .legend(LegendPlacement::Inside, 10.0);

        for strategy in Strategy::ALL {
            let values = self
                .dataset
                .table(strategy, Metric::CacheMisses)?
                .column(&MESSAGE_SIZES, FOCUS_THREAD_INDEX)?;
            let style = SeriesStyle::new(chart.next_color(), strategy.marker()).line_width(2.0);
            chart.push_series(strategy.to_string(), size_points(&values), style);
        }
        Ok(chart)
    }

    fn cycles_per_byte(&self) -> ChartResult<Chart> {
        let mut chart = Chart::new(&format!(
            "CPU Cycles per Byte Transferred\nSystem: {SYSTEM_NAME}"
        ))
        .x_axis("Message Size (bytes)", Axis::Log)
        .y_axis("CPU Cycles per Byte", Axis::Log)
        .legend(LegendPlacement::OutsideRight, 8.0)
        .crop(CropMode::Tight);

        for (index, threads) in THREAD_COUNTS.iter().enumerate() {
            for strategy in Strategy::ALL {
                let values =
                    cycles_per_byte_column(&self.dataset, strategy, &MESSAGE_SIZES, index)?;
                let style = SeriesStyle::new(chart.next_color(), strategy.marker()).alpha(0.7);
                chart.push_series(
                    format!("{} {threads}T", strategy.tag()),
                    size_points(&values),
                    style,
                );
            }
        }
        Ok(chart)
    }
}

/// Pair values with the message sizes they were recorded at
fn size_points(values: &[f64]) -> Vec<(f64, f64)> {
    MESSAGE_SIZES
        .iter()
        .map(|&size| size as f64)
        .zip(values.iter().copied())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::MeasurementTable;
    use crate::error::ChartError;
    use crate::style::{LinePattern, Marker};

    #[test]
    fn test_series_counts() {
        let charts = ChartRenderer::reference().build_charts().unwrap();
        let counts: Vec<usize> = charts.iter().map(|(_, c)| c.series_count()).collect();
        assert_eq!(counts, vec![12, 3, 3, 12]);
    }

    #[test]
    fn test_per_thread_labels_and_styles() {
        let chart = ChartRenderer::reference()
            .build_chart(ChartKind::ThroughputVsMessageSize)
            .unwrap();

        let first = &chart.series()[0];
        assert_eq!(first.label, "A1 (2-copy) 1T");
        assert_eq!(first.style.marker, Marker::Circle);

        let dashed = chart.series_by_label("A2 (1-copy) 4T").unwrap();
        assert_eq!(dashed.style.pattern, LinePattern::Dashed);
        assert_eq!(dashed.style.marker, Marker::Square);
        assert_eq!(dashed.y_values()[2], 150.551662);

        let last = chart.series().last().unwrap();
        assert_eq!(last.label, "A3 (0-copy) 8T");
        assert_eq!(last.style.pattern, LinePattern::Dotted);
    }

    #[test]
    fn test_cache_chart_uses_two_threads() {
        let chart = ChartRenderer::reference()
            .build_chart(ChartKind::CacheMissesVsMessageSize)
            .unwrap();
        assert_eq!(
            chart.title_lines()[0],
            "Cache Misses vs Message Size (Threads = 2)"
        );
        assert_eq!(chart.crop_mode(), CropMode::Full);
        assert_eq!(chart.legend_placement(), LegendPlacement::Inside);
        let a2 = chart.series_by_label("A2 (1-copy)").unwrap();
        assert_eq!(
            a2.y_values(),
            vec![17387273.0, 36914720.0, 40055190.0, 45713775.0]
        );
    }

    #[test]
    fn test_cycles_per_byte_chart_style() {
        let chart = ChartRenderer::reference()
            .build_chart(ChartKind::CyclesPerByte)
            .unwrap();
        let series = chart.series_by_label("A1 1T").unwrap();
        assert_eq!(series.style.alpha, 0.7);
        assert_eq!(series.style.pattern, LinePattern::Solid);
        assert!((series.y_values()[0] - 51.51).abs() < 1e-2);
        assert_eq!(chart.legend_placement(), LegendPlacement::OutsideRight);
        assert_eq!(chart.crop_mode(), CropMode::Tight);
    }

    #[test]
    fn test_missing_cache_entry_fails_before_output() {
        let dir = tempfile::tempdir().unwrap();
        let rows: Vec<_> = crate::reference::A2_CACHE_MISSES
            .iter()
            .copied()
            .filter(|(size, _)| *size != 64)
            .collect();
        let dataset = BenchmarkDataset::reference().with_table(MeasurementTable::from_rows(
            Strategy::OneCopy,
            Metric::CacheMisses,
            &rows,
        ));
        let renderer =
            ChartRenderer::new(dataset, RenderConfig::preview().with_output_dir(dir.path()));

        let err = renderer.render_all().unwrap_err();
        assert!(matches!(
            err,
            ChartError::MissingEntry {
                strategy: Strategy::OneCopy,
                metric: Metric::CacheMisses,
                message_size: 64
            }
        ));
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[test]
    fn test_confirmation_lines() {
        let report = RenderReport {
            files: ChartKind::ALL
                .iter()
                .map(|&k| (k, PathBuf::from(k.file_name())))
                .collect(),
        };
        assert_eq!(
            report.confirmation_lines(),
            vec![
                "All plots generated successfully!",
                "- plot1_throughput_vs_msgsize.png",
                "- plot2_throughput_vs_threads.png",
                "- plot3_cache_vs_msgsize.png",
                "- plot4_cycles_per_byte.png",
            ]
        );
    }
}
