//! Measurement tables
//!
//! A [`MeasurementTable`] maps each message size to one value per thread
//! count for a single (strategy, metric) pair. [`BenchmarkDataset`] holds the
//! full 3 x 4 set of tables the charts read from.

use crate::error::{ChartError, ChartResult};
use crate::THREAD_SLOTS;
use std::fmt;

/// One table row: message size and one value per thread count
pub type TableRow = (u64, [f64; THREAD_SLOTS]);

/// Data-transfer strategy under test
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Strategy {
    /// A1: payload copied into a staging buffer and again into the kernel
    TwoCopy,
    /// A2: single copy into the kernel
    OneCopy,
    /// A3: kernel reads the payload in place
    ZeroCopy,
}

impl Strategy {
    /// All strategies in plotting order
    pub const ALL: [Strategy; 3] = [Strategy::TwoCopy, Strategy::OneCopy, Strategy::ZeroCopy];

    /// Short tag used in legends ("A1", "A2", "A3")
    pub fn tag(self) -> &'static str {
        match self {
            Strategy::TwoCopy => "A1",
            Strategy::OneCopy => "A2",
            Strategy::ZeroCopy => "A3",
        }
    }

    /// Copy count label ("2-copy", "1-copy", "0-copy")
    pub fn copies(self) -> &'static str {
        match self {
            Strategy::TwoCopy => "2-copy",
            Strategy::OneCopy => "1-copy",
            Strategy::ZeroCopy => "0-copy",
        }
    }

}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.tag(), self.copies())
    }
}

/// Recorded metric
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Metric {
    /// Gbps
    Throughput,
    CacheMisses,
    Cycles,
    /// Total bytes transferred during the run
    Bytes,
}

impl Metric {
    pub const ALL: [Metric; 4] = [
        Metric::Throughput,
        Metric::CacheMisses,
        Metric::Cycles,
        Metric::Bytes,
    ];
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Metric::Throughput => "throughput",
            Metric::CacheMisses => "cache-misses",
            Metric::Cycles => "cycles",
            Metric::Bytes => "bytes",
        };
        f.write_str(name)
    }
}

/// Values of one metric for one strategy, keyed by message size
#[derive(Debug, Clone, PartialEq)]
pub struct MeasurementTable {
    strategy: Strategy,
    metric: Metric,
    rows: Vec<TableRow>,
}

impl MeasurementTable {
    pub fn from_rows(strategy: Strategy, metric: Metric, rows: &[TableRow]) -> Self {
        Self {
            strategy,
            metric,
            rows: rows.to_vec(),
        }
    }

    /// All thread-count values recorded at `message_size`
    pub fn row(&self, message_size: u64) -> ChartResult<&[f64; THREAD_SLOTS]> {
        self.rows
            .iter()
            .find(|(size, _)| *size == message_size)
            .map(|(_, values)| values)
            .ok_or(ChartError::MissingEntry {
                strategy: self.strategy,
                metric: self.metric,
                message_size,
            })
    }

    /// Value at `message_size` for the thread count at `thread_index`
    pub fn value(&self, message_size: u64, thread_index: usize) -> ChartResult<f64> {
        self.row(message_size)?
            .get(thread_index)
            .copied()
            .ok_or(ChartError::MissingThreadIndex {
                strategy: self.strategy,
                metric: self.metric,
                message_size,
                index: thread_index,
            })
    }

    /// Values at `thread_index` for each of `sizes`, in order
    pub fn column(&self, sizes: &[u64], thread_index: usize) -> ChartResult<Vec<f64>> {
        sizes
            .iter()
            .map(|&size| self.value(size, thread_index))
            .collect()
    }
}

/// The full set of tables the charts draw from
#[derive(Debug, Clone, Default)]
pub struct BenchmarkDataset {
    tables: Vec<MeasurementTable>,
}

impl BenchmarkDataset {
    pub fn new(tables: Vec<MeasurementTable>) -> Self {
        let mut dataset = Self::default();
        for table in tables {
            dataset = dataset.with_table(table);
        }
        dataset
    }

    /// Dataset built from the recorded measurements
    pub fn reference() -> Self {
        crate::reference::dataset()
    }

    /// Returns a dataset with `table` in its (strategy, metric) slot,
    /// replacing any table already there
    pub fn with_table(mut self, table: MeasurementTable) -> Self {
        match self
            .tables
            .iter_mut()
            .find(|t| t.strategy == table.strategy && t.metric == table.metric)
        {
            Some(slot) => *slot = table,
            None => self.tables.push(table),
        }
        self
    }

    pub fn table(&self, strategy: Strategy, metric: Metric) -> ChartResult<&MeasurementTable> {
        self.tables
            .iter()
            .find(|t| t.strategy == strategy && t.metric == metric)
            .ok_or(ChartError::MissingTable { strategy, metric })
    }
}
