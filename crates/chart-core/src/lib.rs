// File: crates/chart-core/src/lib.rs
// Summary: Core library entry point; exports public API for chart construction and painting.

pub mod chart;
pub mod series;
pub mod continuous;
pub mod axis;
pub mod grid;
pub mod types;
pub mod geometry;
pub mod scale;
pub mod style;
pub mod format;
pub mod surface;
pub mod theme;
pub mod monitor;
pub mod error;

pub use chart::{AutoZoom, Chart, ChartSeries, Projection, SeriesId};
pub use series::Series;
pub use continuous::ContinuousSeries;
pub use axis::{Axis, AxisConfig, Label, LabelSide, Orientation};
pub use geometry::{Point, Rect, Size};
pub use style::{Color, FillStyle, LineStyle, TextStyle};
pub use format::LabelFormat;
pub use surface::{DrawCommand, MonospaceMetrics, RecordingSurface, Surface, TextMeasure};
pub use theme::Theme;
pub use monitor::{CpuMonitor, MonitorConfig, NetworkMonitor, RamMonitor, Sampler};
pub use error::{ChartError, Result};
