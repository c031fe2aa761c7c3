//! Error handling for chart rendering
//!
//! Lookup, arithmetic, drawing and I/O failures all funnel into
//! [`ChartError`]. Nothing is retried; the first failure aborts the run.

use crate::dataset::{Metric, Strategy};
use plotters::drawing::DrawingAreaErrorKind;
use thiserror::Error;

/// Main error type for chart rendering
#[derive(Debug, Error)]
pub enum ChartError {
    /// The dataset has no table for this strategy/metric pair
    #[error("No {metric} table for {strategy}")]
    MissingTable { strategy: Strategy, metric: Metric },

    /// A table has no row for the requested message size
    #[error("No {metric} entry for {strategy} at message size {message_size}")]
    MissingEntry {
        strategy: Strategy,
        metric: Metric,
        message_size: u64,
    },

    /// A row has no value at the requested thread index
    #[error("No {metric} value for {strategy} at message size {message_size}, thread index {index}")]
    MissingThreadIndex {
        strategy: Strategy,
        metric: Metric,
        message_size: u64,
        index: usize,
    },

    /// Cycles-per-byte requested for a configuration that moved no bytes
    #[error("Zero byte count for {strategy} at message size {message_size}, thread index {index}")]
    ZeroByteCount {
        strategy: Strategy,
        message_size: u64,
        index: usize,
    },

    /// A derived value came out as NaN or infinity
    #[error("Non-finite {what}: {value}")]
    NonFinite { what: String, value: f64 },

    /// Chart cannot be drawn as configured (empty, bad axis range, ...)
    #[error("Invalid chart '{title}': {reason}")]
    InvalidChart { title: String, reason: String },

    /// Plotting backend errors
    #[error("Drawing error: {0}")]
    Drawing(String),

    /// PNG encoding errors
    #[error("PNG encoding error: {0}")]
    Encoding(#[from] png::EncodingError),

    /// I/O related errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results using ChartError
pub type ChartResult<T> = Result<T, ChartError>;

impl<E> From<DrawingAreaErrorKind<E>> for ChartError
where
    E: std::error::Error + Send + Sync,
{
    fn from(err: DrawingAreaErrorKind<E>) -> Self {
        ChartError::Drawing(err.to_string())
    }
}

impl ChartError {
    /// Create an invalid-chart error for the chart with the given title
    pub fn invalid_chart<S: Into<String>, T: Into<String>>(title: S, reason: T) -> Self {
        ChartError::InvalidChart {
            title: title.into(),
            reason: reason.into(),
        }
    }

    /// True for failures raised while assembling chart data, before any I/O
    pub fn is_data_error(&self) -> bool {
        matches!(
            self,
            ChartError::MissingTable { .. }
                | ChartError::MissingEntry { .. }
                | ChartError::MissingThreadIndex { .. }
                | ChartError::ZeroByteCount { .. }
                | ChartError::NonFinite { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_entry_message() {
        let err = ChartError::MissingEntry {
            strategy: Strategy::OneCopy,
            metric: Metric::CacheMisses,
            message_size: 64,
        };
        assert_eq!(
            err.to_string(),
            "No cache-misses entry for A2 (1-copy) at message size 64"
        );
        assert!(err.is_data_error());
    }

    #[test]
    fn test_io_error_is_not_data_error() {
        let err: ChartError = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "ro").into();
        assert!(matches!(err, ChartError::Io(_)));
        assert!(!err.is_data_error());
    }
}
