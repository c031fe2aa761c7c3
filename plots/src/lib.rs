//! copybench chart renderer
//!
//! Renders the four result charts of the copy-strategy transfer benchmark
//! (two-copy, one-copy, zero-copy) from measurements recorded on the test
//! machine. All data is compiled in; see [`reference`].
//!
//! Uses the `plotters` crate to rasterize charts into an `image` buffer and
//! `png` to encode them with DPI metadata.

pub mod chart;
pub mod config;
pub mod dataset;
pub mod error;
pub mod metrics;
pub mod raster;
pub mod reference;
pub mod renderer;
pub mod style;

pub use chart::{Axis, Chart, CropMode, LegendPlacement, Series};
pub use config::RenderConfig;
pub use dataset::{BenchmarkDataset, MeasurementTable, Metric, Strategy, TableRow};
pub use error::{ChartError, ChartResult};
pub use renderer::{ChartKind, ChartRenderer, RenderReport};

/// Message sizes (bytes) every table is keyed by, in plotting order
pub const MESSAGE_SIZES: [u64; 4] = [64, 512, 4096, 65536];

/// Thread counts; each table row holds one value per entry, in this order
pub const THREAD_COUNTS: [u32; 4] = [1, 2, 4, 8];

/// Number of values in every table row
pub const THREAD_SLOTS: usize = THREAD_COUNTS.len();

/// Machine the measurements were taken on
pub const SYSTEM_NAME: &str = "Intel ThinkCentre M70s Gen 3";
