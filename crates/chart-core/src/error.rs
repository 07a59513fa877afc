// File: crates/chart-core/src/error.rs
// Summary: Error type shared by axis construction, series mutation and chart ownership rules.

use crate::chart::SeriesId;

#[derive(Debug, thiserror::Error)]
pub enum ChartError {
    #[error("axis bounds must be finite with min < max (got min={min}, max={max})")]
    InvalidBounds { min: f64, max: f64 },
    #[error("label spacing must be >= 0 (got {0})")]
    InvalidLabelSpacing(f64),
    #[error("{0} painting is enabled but no style was supplied")]
    MissingStyle(&'static str),
    #[error("the series list of this chart is fixed and cannot be modified")]
    SeriesLocked,
    #[error("no series with id {0:?} in this chart")]
    UnknownSeries(SeriesId),
    #[error("a sliding window needs at least one sample")]
    EmptyWindow,
    #[error("series has no explicit x values")]
    MissingXValues,
    #[error("x and y sample counts differ ({x} vs {y})")]
    LengthMismatch { x: usize, y: usize },
    #[error("unsupported label format template: {0:?}")]
    InvalidFormat(String),
    #[error("sampling failed: {0}")]
    Sample(#[source] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, ChartError>;
