//! Derived metrics
//!
//! Cycles-per-byte is never stored; it is recomputed from the cycle and
//! byte tables whenever a chart needs it.

use crate::dataset::{BenchmarkDataset, Metric, Strategy};
use crate::error::{ChartError, ChartResult};

/// CPU cycles spent per byte transferred for one configuration
pub fn cycles_per_byte(
    dataset: &BenchmarkDataset,
    strategy: Strategy,
    message_size: u64,
    thread_index: usize,
) -> ChartResult<f64> {
    let cycles = dataset
        .table(strategy, Metric::Cycles)?
        .value(message_size, thread_index)?;
    let bytes = dataset
        .table(strategy, Metric::Bytes)?
        .value(message_size, thread_index)?;

    if bytes == 0.0 {
        return Err(ChartError::ZeroByteCount {
            strategy,
            message_size,
            index: thread_index,
        });
    }

    let value = cycles / bytes;
    if !value.is_finite() {
        return Err(ChartError::NonFinite {
            what: format!("cycles per byte for {strategy} at message size {message_size}"),
            value,
        });
    }
    Ok(value)
}

/// Cycles-per-byte at `thread_index` for each of `sizes`, in order
pub fn cycles_per_byte_column(
    dataset: &BenchmarkDataset,
    strategy: Strategy,
    sizes: &[u64],
    thread_index: usize,
) -> ChartResult<Vec<f64>> {
    sizes
        .iter()
        .map(|&size| cycles_per_byte(dataset, strategy, size, thread_index))
        .collect()
}
